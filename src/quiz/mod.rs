//! Weighted multiple-choice career quiz.

mod catalog;
mod history;
mod scoring;

pub use catalog::{Category, Question, QuizOption, QUESTIONS};
pub use history::{QuizHistory, QuizRecord};
pub use scoring::{join_atau, score, QuizError, Recommendation, Tally};
