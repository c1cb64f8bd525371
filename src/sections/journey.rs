//! Journey section: the alternating milestone timeline with a progress line.

use raylib::prelude::*;

use crate::constants::*;
use crate::content::{JOURNEY_HEADING, JOURNEY_SUBHEADING, Milestone, TimelineSide};
use crate::sections::{Reveal, draw_centered, draw_panel, draw_wrapped, wrap_text, wrapped_height};

const MARGIN: f32 = 80.0;
const CENTER_GAP: f32 = 60.0;
const CARD_PAD: f32 = 24.0;
const DESC_FONT: i32 = 17;
const DESC_GAP: i32 = 6;
const ROW_SPACING: f32 = 60.0;
const DECADE_LABEL_H: f32 = 70.0;
const FOOTER_H: f32 = 160.0;

struct Row {
    top: f32,
    card_h: f32,
    decade_label: Option<&'static str>,
    desc_lines: Vec<String>,
}

pub struct JourneySection {
    milestones: &'static [Milestone],
    width: f32,
    height: f32,
    content_top: f32,
    header_reveal: Reveal,
    reveals: Vec<Reveal>,
    rows: Vec<Row>,
    progress: f32,
}

impl JourneySection {
    pub fn new(milestones: &'static [Milestone], width: f32) -> Self {
        let card_w = width / 2.0 - MARGIN - CENTER_GAP;
        let content_top = 96.0 + 48.0 + 24.0 + 20.0 + 72.0;

        let mut rows = Vec::with_capacity(milestones.len());
        let mut cursor = content_top;
        for (i, milestone) in milestones.iter().enumerate() {
            let decade_label = (i == 0 || milestones[i - 1].decade != milestone.decade)
                .then_some(milestone.decade);
            if decade_label.is_some() {
                cursor += DECADE_LABEL_H;
            }
            let desc_lines = wrap_text(
                milestone.description,
                DESC_FONT,
                (card_w - 2.0 * CARD_PAD) as i32,
            );
            let card_h = CARD_PAD + 26.0 + 32.0 + wrapped_height(&desc_lines, DESC_FONT, DESC_GAP)
                + CARD_PAD;
            rows.push(Row {
                top: cursor,
                card_h,
                decade_label,
                desc_lines,
            });
            cursor += card_h + ROW_SPACING;
        }

        let height = cursor + FOOTER_H;
        Self {
            milestones,
            width,
            height,
            content_top,
            header_reveal: Reveal::new(),
            reveals: milestones.iter().map(|_| Reveal::new()).collect(),
            rows,
            progress: 0.0,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn update(
        &mut self,
        dt: f32,
        scroll: f32,
        viewport_h: f32,
        section_top: f32,
        reduced_motion: bool,
    ) {
        let reveal_line = scroll + viewport_h - REVEAL_MARGIN;
        self.header_reveal
            .update(dt, section_top < reveal_line, reduced_motion);
        for (row, reveal) in self.rows.iter().zip(&mut self.reveals) {
            reveal.update(dt, section_top + row.top < reveal_line, reduced_motion);
        }
        // The gold line grows as the viewport center sweeps the section.
        self.progress = ((scroll + viewport_h / 2.0 - section_top) / self.height).clamp(0.0, 1.0);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, y0: f32) {
        let center_x = self.width / 2.0;

        let alpha = self.header_reveal.alpha();
        draw_centered(
            d,
            JOURNEY_HEADING,
            center_x,
            y0 + 96.0 + self.header_reveal.offset(30.0),
            48,
            ROYAL.fade(alpha),
        );
        draw_centered(
            d,
            JOURNEY_SUBHEADING,
            center_x,
            y0 + 96.0 + 48.0 + 24.0 + self.header_reveal.offset(20.0),
            20,
            TEXT_MUTED.fade(alpha),
        );

        // Central timeline line with the progress overlay.
        let line_top = y0 + self.content_top;
        let line_len = self.height - self.content_top - FOOTER_H;
        d.draw_rectangle(
            (center_x - 1.5) as i32,
            line_top as i32,
            3,
            line_len as i32,
            PANEL_BORDER,
        );
        d.draw_rectangle(
            (center_x - 1.5) as i32,
            line_top as i32,
            3,
            (line_len * self.progress) as i32,
            GOLD,
        );

        let card_w = self.width / 2.0 - MARGIN - CENTER_GAP;
        for ((milestone, row), reveal) in self.milestones.iter().zip(&self.rows).zip(&self.reveals)
        {
            let alpha = reveal.alpha();
            if alpha <= 0.0 {
                continue;
            }

            if let Some(decade) = row.decade_label {
                draw_centered(
                    d,
                    decade,
                    center_x,
                    y0 + row.top - DECADE_LABEL_H + 12.0,
                    28,
                    GOLD.fade(alpha),
                );
            }

            let slide = match milestone.side {
                TimelineSide::Left => -self.reveal_offset(reveal),
                TimelineSide::Right => self.reveal_offset(reveal),
            };
            let x = match milestone.side {
                TimelineSide::Left => MARGIN + slide,
                TimelineSide::Right => center_x + CENTER_GAP + slide,
            };
            let card = Rectangle::new(x, y0 + row.top, card_w, row.card_h);
            draw_panel(d, card, PANEL_BORDER.fade(alpha), PANEL.fade(alpha));

            let tx = (x + CARD_PAD) as i32;
            let mut ty = y0 + row.top + CARD_PAD;
            d.draw_text(milestone.year, tx, ty as i32, 22, GOLD.fade(alpha));
            ty += 26.0;
            d.draw_text(milestone.title, tx, ty as i32, 24, TEXT_PRIMARY.fade(alpha));
            ty += 32.0;
            draw_wrapped(
                d,
                &row.desc_lines,
                tx,
                ty as i32,
                DESC_FONT,
                DESC_GAP,
                TEXT_MUTED.fade(alpha),
            );

            // Timeline dot, scaling in with the card.
            let dot_y = y0 + row.top + row.card_h / 2.0;
            d.draw_circle_v(
                Vector2::new(center_x, dot_y),
                8.0 * reveal.progress(),
                GOLD.fade(alpha),
            );
        }

        // Bottom decoration.
        let footer_y = y0 + self.height - FOOTER_H / 2.0;
        d.draw_circle_v(Vector2::new(center_x, footer_y), 40.0, ROYAL);
        d.draw_circle_v(Vector2::new(center_x, footer_y), 28.0, GOLD);
    }

    fn reveal_offset(&self, reveal: &Reveal) -> f32 {
        reveal.offset(50.0)
    }
}
