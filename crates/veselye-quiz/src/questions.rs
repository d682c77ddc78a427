//! The fixed question set.

use serde::Serialize;

use veselye_core::constants::{OPTIONS_PER_QUESTION, TOTAL_QUESTIONS};
use veselye_core::enums::Category;

/// One selectable answer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub category: Category,
    /// Icon name for the renderer.
    pub icon: &'static str,
}

/// One quiz question with its four options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

const fn opt(text: &'static str, category: Category, icon: &'static str) -> AnswerOption {
    AnswerOption {
        text,
        category,
        icon,
    }
}

use Category::{Butilochnik, Filosof, Karton, Mudrec};

pub static QUESTIONS: [Question; TOTAL_QUESTIONS] = [
    Question {
        text: "Что ты делаешь, когда видишь пустую бутылку?",
        options: [
            opt("Бегу сломя голову!", Butilochnik, "zap"),
            opt("Оценю расстояние и траекторию", Filosof, "scroll"),
            opt("Это мой дом теперь", Karton, "home"),
            opt("Подожду, пока кто-то другой поднимет", Mudrec, "clock"),
        ],
    },
    Question {
        text: "Где твоё идеальное жильё?",
        options: [
            opt("Под мостом с видом на закат", Filosof, "home"),
            opt("Картонная коробка премиум-класса", Karton, "shoppingCart"),
            opt("Любой подъезд со сквозняком", Butilochnik, "zap"),
            opt("Там, где тепло и никто не гонит", Mudrec, "flame"),
        ],
    },
    Question {
        text: "Что ты делаешь с находкой?",
        options: [
            opt("Несу сдать немедленно", Butilochnik, "trash2"),
            opt("Сохраню на чёрный день", Mudrec, "scroll"),
            opt("Создам произведение искусства", Filosof, "flame"),
            opt("Обустрою жилище", Karton, "home"),
        ],
    },
    Question {
        text: "Твой девиз жизни?",
        options: [
            opt("Одна бутылка — маленький шаг", Butilochnik, "zap"),
            opt("Картон теплее бетона", Karton, "home"),
            opt("Мудрость приходит с холодом", Mudrec, "scroll"),
            opt("Жизнь — это дорога, а я пешеход", Filosof, "flame"),
        ],
    },
    Question {
        text: "Какой у тебя супергеройский навык?",
        options: [
            opt("Нахожу бутылки на расстоянии 500м", Butilochnik, "zap"),
            opt("Создаю уют из мусора", Karton, "home"),
            opt("Знаю все тёплые места в городе", Mudrec, "flame"),
            opt("Могу спать в любой позе", Filosof, "clock"),
        ],
    },
];
