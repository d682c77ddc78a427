//! Quiz engine: question pointer, answer accumulation, and scoring.

use tracing::debug;

use veselye_core::constants::TOTAL_QUESTIONS;
use veselye_core::enums::Category;

use crate::error::QuizError;
use crate::questions::{Question, QUESTIONS};
use crate::tally::Tally;

/// State of one pass through the quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    current_question_index: usize,
    answers: Vec<Category>,
    is_complete: bool,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer and move to the next question.
    ///
    /// The index stops at the last question; the answer that fills the quiz
    /// marks it complete instead of advancing.
    pub fn answer(&mut self, category: Category) -> Result<(), QuizError> {
        if self.is_complete {
            return Err(QuizError::AlreadyComplete);
        }

        self.answers.push(category);
        if self.answers.len() == TOTAL_QUESTIONS {
            self.is_complete = true;
        } else {
            self.current_question_index += 1;
        }
        debug!(
            %category,
            answered = self.answers.len(),
            complete = self.is_complete,
            "quiz answer recorded"
        );
        Ok(())
    }

    /// Answer with the category of option `option_index` of the current question.
    pub fn answer_option(&mut self, option_index: usize) -> Result<Category, QuizError> {
        let question = self.current_question()?;
        let option = question
            .options
            .get(option_index)
            .ok_or(QuizError::OptionOutOfRange {
                index: option_index,
                available: question.options.len(),
            })?;
        let category = option.category;
        self.answer(category)?;
        Ok(category)
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Result<&'static Question, QuizError> {
        if self.is_complete {
            return Err(QuizError::QuestionOutOfRange {
                index: self.answers.len(),
                total: TOTAL_QUESTIONS,
            });
        }
        QUESTIONS
            .get(self.current_question_index)
            .ok_or(QuizError::QuestionOutOfRange {
                index: self.current_question_index,
                total: TOTAL_QUESTIONS,
            })
    }

    /// The winning category of a completed quiz. Recomputed on every call.
    pub fn result(&self) -> Result<Category, QuizError> {
        let incomplete = QuizError::Incomplete {
            answered: self.answers.len(),
            total: TOTAL_QUESTIONS,
        };
        if !self.is_complete {
            return Err(incomplete);
        }
        Tally::from_answers(&self.answers).leader().ok_or(incomplete)
    }

    /// Go back to the first question with no answers.
    pub fn reset(&mut self) {
        self.current_question_index = 0;
        self.answers.clear();
        self.is_complete = false;
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &[Category] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn total_questions(&self) -> usize {
        TOTAL_QUESTIONS
    }
}
