//! FAQ chat responder.
//!
//! Answers from a small keyword table first. Anything else goes to an
//! external reply service; if that fails for any reason the user gets a
//! fixed fallback line and the error stops here.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Site description sent along with every remote request.
pub const SITE_CONTEXT: &str = "Весёлые Бомжи — юмористический сатирический блог о жизни \"бомжатского сообщества\". Сайт содержит мемы, смешные истории, мини-игры и опросы. Всё содержание носит шуточный характер и не призывает к бездействию или бродяжничеству. Мы против реальной бедности и за помощь бездомным!";

/// First bot message when the widget opens.
pub const GREETING: &str = "Привет, бомж-брат! 🤠 Чем могу помочь? Спроси про мемы, игру или опросы!";

/// Reply when the remote service answered with nothing usable.
pub const NOT_UNDERSTOOD_REPLY: &str =
    "Брат, не понял вопроса... Спроси про мемы, игру или опросы!";

/// Reply when the remote service could not be reached.
pub const FALLBACK_REPLY: &str = "Связь с штабом потеряна! 🍺 Но ты можешь спросить: как играть, как создать мем, или что это за сайт. Или посмотри FAQ внизу страницы!";

/// One canned question and answer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    /// Lowercase substrings that trigger this entry.
    pub keywords: &'static [&'static str],
}

pub static FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Как играть в игру \"Собери бутылки\"?",
        answer: "Нажимай на падающие бутылки, чтобы поймать их в корзину. У тебя есть 30 секунд! За каждую бутылку — 10 очков. Бонусные золотые бутылки дают 50 очков!",
        keywords: &["игра", "бутылки", "как играть", "правила", "очки"],
    },
    FaqEntry {
        question: "Как создать мем в генераторе?",
        answer: "Выбери шаблон из галереи, добавь свой текст сверху и снизу, нажми \"Скачать мем\" — готово! Можешь поделиться с друзьями.",
        keywords: &["мем", "генератор", "создать", "шаблон", "картинка"],
    },
    FaqEntry {
        question: "Что это за сайт?",
        answer: "Это сатирический юмористический блог о \"бомжатском сообществе\". Здесь мемы, смешные истории и мини-игры. Всё в шуточном ключе!",
        keywords: &["сайт", "блог", "бомж", "что это", "о нас"],
    },
    FaqEntry {
        question: "Как пройти опрос \"Какой ты бомж\"?",
        answer: "Ответь на 5 вопросов выбрав варианты ответа. В конце узнаешь свой тип: Бутылочник, Картонный Король, Мудрец Подземки или Дворовый Философ!",
        keywords: &["опрос", "тест", "какой бомж", "результат", "тип"],
    },
];

/// Answer of the first FAQ entry with a keyword inside `text` (case-insensitive).
pub fn find_faq_answer(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    FAQ_ENTRIES
        .iter()
        .find(|faq| faq.keywords.iter().any(|k| lower.contains(k)))
        .map(|faq| faq.answer)
}

/// Request body for the remote reply service.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub context: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            context: SITE_CONTEXT,
        }
    }

    pub fn to_json(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(|e| ChatError::Malformed(e.to_string()))
    }
}

/// Response body from the remote reply service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatResponse {
    pub fn from_json(body: &str) -> Result<Self, ChatError> {
        serde_json::from_str(body).map_err(|e| ChatError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Reply service unavailable")]
    Unavailable,
    #[error("Reply service returned status {0}")]
    Status(u16),
    #[error("Malformed reply: {0}")]
    Malformed(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// External free-text reply service.
pub trait ReplyService: Send + Sync {
    /// Return the reply text. An empty string means the service had no answer.
    fn reply(&self, request: &ChatRequest<'_>) -> Result<String, ChatError>;
}

impl<S: ReplyService + ?Sized> ReplyService for Box<S> {
    fn reply(&self, request: &ChatRequest<'_>) -> Result<String, ChatError> {
        (**self).reply(request)
    }
}

/// Reply service for hosts with no remote endpoint configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineReplyService;

impl ReplyService for OfflineReplyService {
    fn reply(&self, _request: &ChatRequest<'_>) -> Result<String, ChatError> {
        Err(ChatError::Unavailable)
    }
}

/// The chat widget's brain.
pub struct ChatBot<S> {
    service: S,
}

impl<S: ReplyService> ChatBot<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Reply to a user message. Blank input gets no reply.
    pub fn respond(&self, text: &str) -> Option<String> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        if let Some(answer) = find_faq_answer(message) {
            debug!("chat answered from FAQ");
            return Some(answer.to_string());
        }

        let reply = match self.service.reply(&ChatRequest::new(message)) {
            Ok(reply) if reply.trim().is_empty() => NOT_UNDERSTOOD_REPLY.to_string(),
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "reply service failed, using fallback");
                FALLBACK_REPLY.to_string()
            }
        };
        Some(reply)
    }
}
