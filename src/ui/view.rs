use egui::{Button, Id, Ui};

use crate::data::{DocumentFormat, parse_quiz};
use crate::error::Result;
use crate::model::Quiz;
use crate::state::QuizEvent;
use crate::theme::QuizTheme;
use crate::ui::content::ContentRenderer;
use crate::ui::modal::QuizModal;
use crate::ui::quiz_box::QuizBox;

/// "1 question", "3 questions". Only a count of exactly one is singular, so
/// an empty quiz reads "0 questions"; that is the only place zero is shown,
/// next to a disabled Start button.
pub fn summary_label(count: usize) -> String {
    if count == 1 {
        "1 question".to_owned()
    } else {
        format!("{count} questions")
    }
}

/// Summary card with a Start button; owns the quiz and its modal.
pub struct QuizView {
    quiz: Quiz,
    modal: QuizModal,
    renderer: ContentRenderer,
    theme: QuizTheme,
}

impl QuizView {
    pub fn new(quiz: Quiz) -> Self {
        let modal = QuizModal::new(Id::new("quiz_overlay_modal"), &quiz);
        Self {
            quiz,
            modal,
            renderer: ContentRenderer::default(),
            theme: QuizTheme::default(),
        }
    }

    /// Decodes `content`; malformed documents are returned to the caller.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        Ok(Self::new(parse_quiz(content, format)?))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, DocumentFormat::Json)
    }

    /// Separate id for hosts that show more than one quiz at a time.
    pub fn with_id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.modal = QuizModal::new(Id::new(id_salt), &self.quiz);
        self
    }

    pub fn with_theme(mut self, theme: QuizTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn question_count(&self) -> usize {
        self.quiz.question_count()
    }

    pub fn can_start(&self) -> bool {
        self.question_count() > 0
    }

    pub fn modal(&self) -> &QuizModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut QuizModal {
        &mut self.modal
    }

    /// Same as clicking Start.
    pub fn start(&mut self) -> Option<QuizEvent> {
        self.modal.open().then_some(QuizEvent::Opened)
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<QuizEvent> {
        let count = self.question_count();
        let mut start = false;

        QuizBox::new(&self.theme)
            .header(summary_label(count))
            .show(ui, |ui| {
                let button = ui
                    .add_enabled(count > 0, Button::new("Start"))
                    .on_disabled_hover_text("This quiz has no questions");
                start = button.clicked();
            });

        let opened = if start { self.start() } else { None };
        let event = self
            .modal
            .show(ui.ctx(), &self.quiz, &mut self.renderer, &self.theme);
        opened.or(event)
    }
}
