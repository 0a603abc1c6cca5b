// src/data.rs

use std::path::Path;

use crate::error::{QuizError, Result};
use crate::model::Quiz;

/// Sample quiz shown by the host when no document is given.
pub const SAMPLE_QUIZ: &str = include_str!("data/sample_quiz.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` are YAML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Decodes and validates a quiz document.
pub fn parse_quiz(content: &str, format: DocumentFormat) -> Result<Quiz> {
    let quiz: Quiz = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    quiz.validate()?;
    log::debug!("decoded quiz with {} questions", quiz.question_count());
    Ok(quiz)
}

pub fn read_quiz_file(path: &Path) -> Result<(String, DocumentFormat)> {
    let content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((content, DocumentFormat::from_path(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_quiz_is_valid() {
        let quiz = parse_quiz(SAMPLE_QUIZ, DocumentFormat::Json).unwrap();
        assert!(quiz.question_count() >= 2);
    }

    #[test]
    fn accepts_inline_and_object_content() {
        let json = r#"{
            "questions": {
                "q1": {
                    "prompt": { "source": "What is **ownership**?" },
                    "answers": { "a": "A set of rules" },
                    "distractors": { "b": { "source": "A keyword" } }
                }
            }
        }"#;
        let quiz = parse_quiz(json, DocumentFormat::Json).unwrap();
        let q = quiz.question("q1").unwrap();
        assert_eq!(q.prompt.as_str(), "What is **ownership**?");
        assert_eq!(q.answers["a"].as_str(), "A set of rules");
        assert_eq!(q.distractors["b"].as_str(), "A keyword");
    }

    #[test]
    fn distractors_default_to_empty() {
        let json = r#"{ "questions": { "q1": { "prompt": "p", "answers": { "a": "x" } } } }"#;
        let quiz = parse_quiz(json, DocumentFormat::Json).unwrap();
        assert!(quiz.question("q1").unwrap().distractors.is_empty());
    }

    #[test]
    fn yaml_documents_keep_option_order() {
        let yaml = "
questions:
  q1:
    prompt: Pick the borrow checker rules
    answers:
      second: One mutable reference
      first: Many shared references
    distractors:
      zzz: Garbage collection
";
        let quiz = parse_quiz(yaml, DocumentFormat::Yaml).unwrap();
        let keys: Vec<&str> = quiz.question("q1").unwrap().responses().iter().map(|o| o.key).collect();
        assert_eq!(keys, ["second", "first", "zzz"]);
    }

    #[test]
    fn malformed_documents_fail() {
        assert!(matches!(
            parse_quiz("{ not json", DocumentFormat::Json),
            Err(QuizError::Json(_))
        ));
        assert!(matches!(
            parse_quiz(r#"{ "questions": { "q1": { "answers": {} } } }"#, DocumentFormat::Json),
            Err(QuizError::Json(_))
        ));
        assert!(matches!(
            parse_quiz("questions: [1, 2]", DocumentFormat::Yaml),
            Err(QuizError::Yaml(_))
        ));
    }

    #[test]
    fn invariant_violations_fail() {
        let json = r#"{ "questions": { "q1": { "prompt": "p", "answers": {} } } }"#;
        assert!(matches!(
            parse_quiz(json, DocumentFormat::Json),
            Err(QuizError::NoAnswers { .. })
        ));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/quiz.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("quiz.YAML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("quiz.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("quiz")), DocumentFormat::Json);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_quiz_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
