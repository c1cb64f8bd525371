//! Page sections and shared presentation helpers.

pub mod about;
pub mod awards;
pub mod hero;
pub mod journey;

use raylib::prelude::*;

use crate::constants::REVEAL_DURATION;

/// One-shot entrance animation for a section or card, triggered the first
/// time it scrolls into view.
pub struct Reveal {
    t: f32,
    triggered: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            t: 0.0,
            triggered: false,
        }
    }

    /// Advance the animation once `visible` has been true at least once.
    /// Under reduced motion the reveal completes immediately.
    pub fn update(&mut self, dt: f32, visible: bool, reduced_motion: bool) {
        if visible {
            self.triggered = true;
        }
        if !self.triggered {
            return;
        }
        if reduced_motion {
            self.t = 1.0;
            return;
        }
        self.t = (self.t + dt / REVEAL_DURATION).min(1.0);
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        ease_out_cubic(self.t)
    }

    pub fn alpha(&self) -> f32 {
        self.progress()
    }

    /// Entrance offset decaying from `distance` to zero.
    pub fn offset(&self, distance: f32) -> f32 {
        distance * (1.0 - self.progress())
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Greedy word wrap against the default font.
pub fn wrap_text(text: &str, font_size: i32, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure_text(&candidate, font_size) > max_width && !line.is_empty() {
            lines.push(line);
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw wrapped lines and report the pixel height consumed.
pub fn draw_wrapped(
    d: &mut RaylibDrawHandle,
    lines: &[String],
    x: i32,
    y: i32,
    font_size: i32,
    line_gap: i32,
    color: Color,
) -> i32 {
    let mut cursor = y;
    for line in lines {
        d.draw_text(line, x, cursor, font_size, color);
        cursor += font_size + line_gap;
    }
    cursor - y
}

/// Height `wrap_text` output occupies when drawn with `draw_wrapped`.
pub fn wrapped_height(lines: &[String], font_size: i32, line_gap: i32) -> f32 {
    (lines.len() as i32 * (font_size + line_gap)) as f32
}

/// Draw a line of text horizontally centered around `center_x`.
pub fn draw_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: f32,
    y: f32,
    font_size: i32,
    color: Color,
) {
    let w = measure_text(text, font_size) as f32;
    d.draw_text(text, (center_x - w / 2.0) as i32, y as i32, font_size, color);
}

/// A rounded panel with a one pixel border, the recurring card look.
pub fn draw_panel(d: &mut RaylibDrawHandle, rect: Rectangle, border: Color, fill: Color) {
    d.draw_rectangle_rounded(rect, 0.08, 8, border);
    let inner = Rectangle::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0);
    d.draw_rectangle_rounded(inner, 0.08, 8, fill);
}
