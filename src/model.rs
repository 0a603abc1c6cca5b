use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Markdown source handed to the content renderer.
///
/// Documents may carry it either inline (`"prompt": "What is..."`) or as an
/// object (`"prompt": { "source": "What is..." }`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "RichContentRepr", into = "String")]
pub struct RichContent(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RichContentRepr {
    Inline(String),
    Document { source: String },
}

impl From<RichContentRepr> for RichContent {
    fn from(repr: RichContentRepr) -> Self {
        match repr {
            RichContentRepr::Inline(source) | RichContentRepr::Document { source } => {
                RichContent(source)
            }
        }
    }
}

impl From<RichContent> for String {
    fn from(content: RichContent) -> Self {
        content.0
    }
}

impl From<&str> for RichContent {
    fn from(source: &str) -> Self {
        RichContent(source.to_owned())
    }
}

impl RichContent {
    pub fn new(source: impl Into<String>) -> Self {
        RichContent(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: RichContent,
    /// Correct responses, in document order.
    pub answers: IndexMap<String, RichContent>,
    /// Incorrect responses, in document order.
    #[serde(default)]
    pub distractors: IndexMap<String, RichContent>,
}

/// One entry of the merged option list shown for a question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceOption<'a> {
    pub key: &'a str,
    pub label: &'a RichContent,
}

impl Question {
    /// Answers first, then distractors. Neither map is re-sorted.
    pub fn responses(&self) -> Vec<ChoiceOption<'_>> {
        self.answers
            .iter()
            .chain(self.distractors.iter())
            .map(|(key, label)| ChoiceOption { key, label })
            .collect()
    }

    /// Checkbox mode as soon as more than one response is correct.
    pub fn allows_multiple(&self) -> bool {
        self.answers.len() > 1
    }

    fn validate(&self, question: &str) -> Result<()> {
        if self.answers.is_empty() {
            return Err(QuizError::NoAnswers {
                question: question.to_owned(),
            });
        }
        if let Some(key) = self.distractors.keys().find(|k| self.answers.contains_key(*k)) {
            return Err(QuizError::OverlappingKey {
                question: question.to_owned(),
                key: key.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Quiz {
    pub questions: IndexMap<String, Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Keys in display order. Document order is never trusted here.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.questions.keys().cloned().collect();
        keys.sort_by(|a, b| display_order(a, b));
        keys
    }

    pub fn sorted_questions(&self) -> Vec<(&str, &Question)> {
        let mut entries: Vec<(&str, &Question)> = self
            .questions
            .iter()
            .map(|(key, question)| (key.as_str(), question))
            .collect();
        entries.sort_by(|a, b| display_order(a.0, b.0));
        entries
    }

    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.get(key)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, question) in &self.questions {
            question.validate(key)?;
        }
        Ok(())
    }
}

/// Case-insensitive key order. Keys equal up to case put lowercase first,
/// so the order stays total. Digits still compare as text (`q10` < `q2`).
fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
