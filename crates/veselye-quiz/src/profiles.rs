//! Display metadata for each quiz outcome.

use serde::Serialize;

use veselye_core::enums::Category;

/// Title card shown for a quiz result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultProfile {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS color class of the badge.
    pub color: &'static str,
}

/// Get the result card for a category. Total over `Category`.
pub fn result_profile(category: Category) -> ResultProfile {
    match category {
        Category::Butilochnik => ResultProfile {
            title: "Бутылочник-Спринтер 🏃‍♂️",
            description: "Ты готов пробежать марафон ради сдачки! Твои ноги — твой капитал, а бутылки — твоя мечта. Ты веришь, что малыми бутылками создаётся великое состояние.",
            color: "bg-blue-500",
        },
        Category::Karton => ResultProfile {
            title: "Картонный Король 📦",
            description: "Для тебя дом — там, где коробка. Ты мастер обустройства пространства из подручных материалов. IKEA отдыхает перед твоим инженерным гением!",
            color: "bg-amber-600",
        },
        Category::Mudrec => ResultProfile {
            title: "Мудрец Подземки 🧙‍♂️",
            description: "Ты знаешь все тайны города и его тёплые трубы. Твоя мудрость передаётся из поколения в поколение бомжей. С тобой никто не замёрзнет!",
            color: "bg-purple-600",
        },
        Category::Filosof => ResultProfile {
            title: "Дворовый Философ 🎭",
            description: "Жизнь для тебя — сплошная метафора. Ты находишь глубокий смысл в каждой бутылке и превращаешь бедность в искусство. Твои речи у костра — легендарны!",
            color: "bg-red-500",
        },
    }
}
