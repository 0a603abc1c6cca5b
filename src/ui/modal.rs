//! Fullscreen question overlay.

use egui::{
    Align, Button, Context, CursorIcon, Id, Layout, Modal, Pos2, Rect, RichText, ScrollArea, Ui,
    vec2,
};

use crate::model::{Question, Quiz};
use crate::state::{ModalState, QuizEvent, QuizSession};
use crate::theme::{CloseButtonPlacement, ModalLayout, QuizTheme};
use crate::ui::content::ContentRenderer;
use crate::ui::prompt::question_prompt;
use crate::ui::quiz_box::QuizBox;
use crate::ui::responses::question_responses;

pub const HELP_CAPTION: &str = "Why is this quiz fullscreen?";
pub const HELP_TEXT: &str = "We want to know how much you are learning that can be recalled \
    without assistance. Please complete the quiz without re-reading the text, e.g. by opening \
    it in another tab.";

const CLOSE_ICON_SIZE: f32 = 16.0;

pub struct QuizModal {
    id: Id,
    /// Question keys sorted once, when the modal is built.
    order: Vec<String>,
    state: ModalState,
}

impl QuizModal {
    pub fn new(id: Id, quiz: &Quiz) -> Self {
        Self {
            id,
            order: quiz.sorted_keys(),
            state: ModalState::Closed,
        }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.state.session()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.state.session_mut()
    }

    pub fn open(&mut self) -> bool {
        self.state.open(self.order.len())
    }

    pub fn close(&mut self) -> bool {
        self.state.close()
    }

    /// Key and question currently on screen, `None` while closed.
    pub fn current<'q>(&self, quiz: &'q Quiz) -> Option<(&str, &'q Question)> {
        let session = self.state.session()?;
        let key = self.order.get(session.index())?;
        Some((key.as_str(), quiz.question(key)?))
    }

    /// Draws the overlay while open. Nothing is drawn while closed.
    pub fn show(
        &mut self,
        ctx: &Context,
        quiz: &Quiz,
        renderer: &mut ContentRenderer,
        theme: &QuizTheme,
    ) -> Option<QuizEvent> {
        let session = self.state.session_mut()?;
        let key = self.order.get(session.index())?.clone();
        let question = quiz.question(&key)?;

        let screen = ctx.screen_rect();
        let layout = theme.layout(screen.width());
        let width = (screen.width() - theme.spacing(4.0)).min(theme.container_max_width);
        let max_height = (screen.height() - theme.spacing(12.0)).max(theme.spacing(20.0));

        let mut action = ModalAction::None;
        let mut close_clicked = false;
        Modal::new(self.id)
            .backdrop_color(theme.backdrop)
            .frame(theme.modal_frame(&ctx.style().visuals))
            .show(ctx, |ui| {
                ui.set_width(width);
                // Above the scroll area so it stays reachable however long the card gets.
                if layout.close_button == CloseButtonPlacement::Inline {
                    close_clicked = inline_close_button(ui).clicked();
                }
                ScrollArea::vertical()
                    .max_height(max_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        action = modal_body(ui, session, question, renderer, theme, layout);
                    });
            });
        if close_clicked {
            action = ModalAction::Close;
        }

        match action {
            ModalAction::None => None,
            ModalAction::Close => self.close().then_some(QuizEvent::Closed),
            ModalAction::Previous => session_moved(self.state.session_mut()?, QuizSession::previous),
            ModalAction::Next => session_moved(self.state.session_mut()?, QuizSession::next),
            ModalAction::Submit(selection) => {
                log::info!("quiz answer submitted for `{key}`: {selection:?}");
                Some(QuizEvent::Submitted {
                    question_key: key,
                    selection,
                })
            }
        }
    }
}

enum ModalAction {
    None,
    Close,
    Previous,
    Next,
    Submit(Vec<String>),
}

fn session_moved(
    session: &mut QuizSession,
    step: fn(&mut QuizSession) -> bool,
) -> Option<QuizEvent> {
    step(session).then(|| QuizEvent::Navigated {
        index: session.index(),
    })
}

fn modal_body(
    ui: &mut Ui,
    session: &mut QuizSession,
    question: &Question,
    renderer: &mut ContentRenderer,
    theme: &QuizTheme,
    layout: ModalLayout,
) -> ModalAction {
    let mut action = ModalAction::None;

    let index = session.index();
    let card = QuizBox::new(theme).header(session.header()).show(ui, |ui| {
        question_prompt(ui, renderer, theme, question, index);
        if question_responses(ui, renderer, theme, question, index, session.responses_mut()) {
            action = ModalAction::Submit(session.responses().selection().to_vec());
        }
        ui.add_space(theme.spacing(1.0));
        ui.horizontal(|ui| {
            if ui
                .add_enabled(session.has_previous(), Button::new("◀ Previous"))
                .clicked()
            {
                action = ModalAction::Previous;
            }
            if ui
                .add_enabled(session.has_next(), Button::new("Next ▶"))
                .clicked()
            {
                action = ModalAction::Next;
            }
        });
    });

    if layout.close_button == CloseButtonPlacement::Floating {
        let rect = card.response.rect;
        let min = Pos2::new(
            rect.right() - CLOSE_ICON_SIZE * 0.5,
            rect.top() + theme.spacing(2.0),
        );
        let slot = Rect::from_min_size(min, vec2(CLOSE_ICON_SIZE, CLOSE_ICON_SIZE));
        let close = ui.put(slot, close_icon()).on_hover_text("Close");
        if close.clicked() {
            action = ModalAction::Close;
        }
    }

    help_caption(ui, session, theme, layout);
    action
}

fn close_icon() -> Button<'static> {
    Button::new(RichText::new("✖").small()).frame(false)
}

/// Full-width row with the icon pinned to its right end.
fn inline_close_button(ui: &mut Ui) -> egui::Response {
    let (_, row) = ui.allocate_space(vec2(ui.available_width(), CLOSE_ICON_SIZE));
    let slot = Rect::from_min_size(
        Pos2::new(row.right() - CLOSE_ICON_SIZE, row.top()),
        vec2(CLOSE_ICON_SIZE, CLOSE_ICON_SIZE),
    );
    ui.put(slot, close_icon()).on_hover_text("Close")
}

fn help_caption(ui: &mut Ui, session: &mut QuizSession, theme: &QuizTheme, layout: ModalLayout) {
    let full = ui.available_width();
    let width = full * layout.help_width_fraction;
    ui.add_space(theme.spacing(1.0));
    ui.horizontal(|ui| {
        ui.add_space(full - width);
        ui.allocate_ui_with_layout(vec2(width, 0.0), Layout::top_down(Align::Max), |ui| {
            let caption = ui
                .add(Button::new(RichText::new(HELP_CAPTION).small().italics().weak()).frame(false))
                .on_hover_cursor(CursorIcon::PointingHand);
            if caption.clicked() {
                session.toggle_help();
            }
            if session.help_shown() {
                ui.label(RichText::new(HELP_TEXT).small().weak());
            }
        });
    });
}
