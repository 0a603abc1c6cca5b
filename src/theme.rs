//! Explicit theme passed down to every quiz widget, plus the pure
//! breakpoint → layout mapping used by the modal.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Visuals};

/// Viewport size classes (xs < 600 ≤ sm < 900 ≤ md < 1200 ≤ lg < 1536 ≤ xl).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn from_width(width: f32) -> Self {
        match width {
            w if w < 600.0 => Breakpoint::Xs,
            w if w < 900.0 => Breakpoint::Sm,
            w if w < 1200.0 => Breakpoint::Md,
            w if w < 1536.0 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    pub fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 600.0,
            Breakpoint::Md => 900.0,
            Breakpoint::Lg => 1200.0,
            Breakpoint::Xl => 1536.0,
        }
    }

    /// True for this breakpoint and every wider one.
    pub fn up(self, other: Breakpoint) -> bool {
        self >= other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseButtonPlacement {
    /// Pinned to the top-right corner of the question card.
    Floating,
    /// Right-aligned row above the question card.
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalLayout {
    pub close_button: CloseButtonPlacement,
    /// Share of the container width used by the help caption.
    pub help_width_fraction: f32,
}

impl ModalLayout {
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let close_button = if breakpoint.up(Breakpoint::Md) {
            CloseButtonPlacement::Floating
        } else {
            CloseButtonPlacement::Inline
        };
        let help_width_fraction = if breakpoint.up(Breakpoint::Sm) { 0.5 } else { 1.0 };
        Self {
            close_button,
            help_width_fraction,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizTheme {
    /// Base spacing unit in points.
    pub spacing_unit: f32,
    pub corner_radius: u8,
    /// Width cap of the modal container.
    pub container_max_width: f32,
    pub backdrop: Color32,
}

impl Default for QuizTheme {
    fn default() -> Self {
        Self {
            spacing_unit: 8.0,
            corner_radius: 4,
            container_max_width: Breakpoint::Md.min_width(),
            backdrop: Color32::from_black_alpha(200),
        }
    }
}

impl QuizTheme {
    pub fn spacing(&self, units: f32) -> f32 {
        self.spacing_unit * units
    }

    pub fn layout(&self, viewport_width: f32) -> ModalLayout {
        ModalLayout::for_breakpoint(Breakpoint::from_width(viewport_width))
    }

    /// Bordered panel used by the quiz box.
    pub fn panel_frame(&self, visuals: &Visuals) -> Frame {
        let padding = self.spacing(2.0) as i8;
        Frame::new()
            .stroke(visuals.widgets.noninteractive.bg_stroke)
            .corner_radius(CornerRadius::same(self.corner_radius))
            .inner_margin(Margin::same(padding))
            .outer_margin(Margin {
                bottom: padding,
                ..Margin::ZERO
            })
    }

    /// Left-ruled block around a question prompt.
    pub fn quote_frame(&self, visuals: &Visuals) -> Frame {
        Frame::new()
            .fill(visuals.faint_bg_color)
            .stroke(Stroke::NONE)
            .inner_margin(Margin::symmetric(self.spacing(2.0) as i8, self.spacing(1.0) as i8))
    }

    /// Frame of the modal content area.
    pub fn modal_frame(&self, visuals: &Visuals) -> Frame {
        Frame::new()
            .fill(visuals.panel_fill)
            .corner_radius(CornerRadius::same(self.corner_radius))
            .inner_margin(Margin::same(self.spacing(2.0) as i8))
    }
}
