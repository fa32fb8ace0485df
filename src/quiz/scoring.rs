use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::{Category, Question};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Masih ada pertanyaan yang belum dijawab.")]
    Unanswered(usize),
    #[error("question {question} has no option {option}")]
    InvalidOption { question: usize, option: usize },
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },
}

/// Points per category, indexed in catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally([u32; 3]);

impl Tally {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    fn add(&mut self, category: Category, points: u32) {
        self.0[category.index()] += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    /// Every category sharing the maximum score, in catalog order.
    pub fn top_categories(&self) -> Vec<Category> {
        let max = self.0.iter().copied().max().unwrap_or_default();
        Category::ALL
            .iter()
            .copied()
            .filter(|c| self.get(*c) == max)
            .collect()
    }
}

/// Sums the weights of the chosen options. `answers[i]` is the option
/// index picked for question `i`.
pub fn score(questions: &[Question], answers: &[Option<usize>]) -> Result<Tally, QuizError> {
    if answers.len() != questions.len() {
        return Err(QuizError::AnswerCount {
            expected: questions.len(),
            got: answers.len(),
        });
    }
    let mut tally = Tally::default();
    for (question_index, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let option_index = answer.ok_or(QuizError::Unanswered(question_index))?;
        let option = question
            .options
            .get(option_index)
            .ok_or(QuizError::InvalidOption {
                question: question_index,
                option: option_index,
            })?;
        for (category, points) in option.weights {
            tally.add(*category, *points);
        }
    }
    Ok(tally)
}

/// Joins names the Indonesian way: `A`, `A atau B`, `A, B atau C`.
pub fn join_atau(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} atau {last}", init.join(", ")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub top: Vec<Category>,
    /// Joined names of the top categories.
    pub summary: String,
    pub headline: String,
    pub badge: &'static str,
    pub notes: Vec<&'static str>,
    pub quote: Option<&'static str>,
}

impl Recommendation {
    pub fn from_tally<R: Rng + ?Sized>(tally: &Tally, rng: &mut R) -> Self {
        let top = tally.top_categories();
        let names: Vec<&str> = top.iter().map(Category::name).collect();
        let summary = join_atau(&names);
        if top.len() == Category::ALL.len() {
            return Self {
                top,
                summary,
                headline: "✨ Wah, kamu All Role!".to_string(),
                badge: "Fleksibel banget, bisa jadi Programmer, Designer, atau Data Scientist 🎭",
                notes: vec![
                    "Kamu seimbang di semua kategori. Pilih yang paling bikin kamu enjoy sekarang, atau eksplor peran hybrid 🔀",
                ],
                quote: None,
            };
        }
        let badge = match top.as_slice() {
            [only] => only.solo_badge(),
            _ => "🤹 Wah, kamu hibrida! Cocok di dua dunia sekaligus.",
        };
        let notes = top.iter().map(Category::tip).collect();
        let quote = top
            .first()
            .and_then(|c| c.quotes().choose(rng))
            .copied();
        Self {
            headline: summary.clone(),
            top,
            summary,
            badge,
            notes,
            quote,
        }
    }
}
