//! Body renderer for the mounted display.
//!
//! The body is laid out as a stack of centered lines. [`body_lines`] builds the
//! stack from the view model so layout can be checked without a terminal;
//! [`render_body`] prints it vertically centered in the available rows.

use super::digits::{big_text_lines, big_text_width};
use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, TimerStatus};
use crate::widgets::PomodoroPhase;

/// Which palette color a body line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Palette foreground.
    Normal,
    /// Muted text for captions and hints.
    Dim,
    /// Primary accent for clock faces and running times.
    Accent,
    /// Secondary accent, used for break phases and finished timers.
    AccentAlt,
}

/// One centered line of body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    /// Line content without styling.
    pub text: String,
    /// Palette color for the line.
    pub tone: Tone,
    /// Whether the line is printed bold.
    pub bold: bool,
}

impl BodyLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn blank() -> Self {
        Self::new(String::new(), Tone::Normal)
    }
}

/// Large digits when they fit in `cols`, a single bold line otherwise.
fn face(text: &str, tone: Tone, cols: usize) -> Vec<BodyLine> {
    if big_text_width(text) <= cols {
        if let Some(lines) = big_text_lines(text) {
            return lines.into_iter().map(|l| BodyLine::new(l, tone)).collect();
        }
    }
    vec![BodyLine::new(text, tone).bold()]
}

/// Builds the line stack for a body view at width `cols`.
pub fn body_lines(body: &BodyView, cols: usize) -> Vec<BodyLine> {
    let mut lines = Vec::new();

    match body {
        BodyView::Clock {
            time,
            meridiem,
            greeting,
            date,
        } => {
            lines.push(BodyLine::new(greeting.as_str(), Tone::Normal).bold());
            lines.push(BodyLine::blank());
            lines.extend(face(time, Tone::Accent, cols));
            if let Some(m) = meridiem {
                lines.push(BodyLine::new(*m, Tone::Accent));
            }
            lines.push(BodyLine::blank());
            lines.push(BodyLine::new(date.as_str(), Tone::Dim));
        }
        BodyView::Timer { remaining, status } => {
            let (label, tone) = match status {
                TimerStatus::Ready => ("Ready", Tone::Dim),
                TimerStatus::Running => ("Running", Tone::Accent),
                TimerStatus::Finished => ("Time's up!", Tone::AccentAlt),
            };
            let face_tone = if *status == TimerStatus::Finished {
                Tone::AccentAlt
            } else {
                Tone::Accent
            };

            lines.push(BodyLine::new("Timer", Tone::Normal).bold());
            lines.push(BodyLine::blank());
            lines.extend(face(remaining, face_tone, cols));
            lines.push(BodyLine::blank());
            lines.push(BodyLine::new(label, tone));
        }
        BodyView::Pomodoro {
            remaining,
            phase,
            running,
            completed,
        } => {
            let tone = match phase {
                PomodoroPhase::Work => Tone::Accent,
                PomodoroPhase::Break => Tone::AccentAlt,
            };
            let state = if *running { "running" } else { "paused" };

            lines.push(BodyLine::new(phase.label(), tone).bold());
            lines.push(BodyLine::blank());
            lines.extend(face(remaining, tone, cols));
            lines.push(BodyLine::blank());
            lines.push(BodyLine::new(
                format!("{state}  ·  {completed} completed"),
                Tone::Dim,
            ));
        }
    }

    lines
}

/// Prints the body between rows `top` and `bottom` (inclusive).
pub fn render_body(top: usize, bottom: usize, body: &BodyView, theme: &Theme, cols: usize) {
    let height = bottom.saturating_sub(top) + 1;
    let lines = body_lines(body, cols);
    let start = top + height.saturating_sub(lines.len()) / 2;

    for (offset, line) in lines.iter().take(height).enumerate() {
        let color = match line.tone {
            Tone::Normal => &theme.colors.text_normal,
            Tone::Dim => &theme.colors.text_dim,
            Tone::Accent => &theme.colors.accent,
            Tone::AccentAlt => &theme.colors.accent_alt,
        };

        position_cursor(start + offset, 1);
        if line.bold {
            print!("{}", Theme::bold());
        }
        print!("{}{}{}", Theme::fg(color), centered(&line.text, cols), Theme::reset());
    }
}
