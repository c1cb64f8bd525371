//! Awards section: the recognition grid and the detail modal.

use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;

use crate::constants::*;
use crate::content::{AWARDS_HEADING, AWARDS_SUBHEADING, Award};
use crate::sections::{Reveal, draw_centered, draw_panel, draw_wrapped, wrap_text};
use crate::texture_loader::load_or_placeholder;

const MARGIN: f32 = 80.0;
const GRID_GAP: f32 = 32.0;
const COLUMNS: usize = 3;
const CARD_IMAGE_H: f32 = 170.0;
const CARD_PAD: f32 = 20.0;
const CARD_DESC_FONT: i32 = 15;
const MODAL_TEXT_FONT: i32 = 15;
const MODAL_LINE_GAP: i32 = 6;

struct ModalLayout {
    width: f32,
    height: f32,
    image_h: f32,
}

pub struct AwardsSection {
    awards: &'static [Award],
    textures: Vec<Texture2D>,
    width: f32,
    viewport_h: f32,
    height: f32,
    grid_top: f32,
    card_w: f32,
    card_h: f32,
    header_reveal: Reveal,
    reveals: Vec<Reveal>,
    card_desc_lines: Vec<Vec<String>>,
    modal_desc_lines: Vec<Vec<String>>,
    modal_full_lines: Vec<Vec<String>>,
    modal: ModalLayout,
    selected: Option<usize>,
}

impl AwardsSection {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &Path,
        awards: &'static [Award],
        width: f32,
        viewport_h: f32,
    ) -> Result<Self> {
        let textures = awards
            .iter()
            .map(|award| load_or_placeholder(rl, thread, assets, award.image))
            .collect::<Result<Vec<_>>>()?;

        let card_w = (width - 2.0 * MARGIN - (COLUMNS - 1) as f32 * GRID_GAP) / COLUMNS as f32;
        let card_desc_lines: Vec<Vec<String>> = awards
            .iter()
            .map(|award| {
                let mut lines =
                    wrap_text(award.description, CARD_DESC_FONT, (card_w - 2.0 * CARD_PAD) as i32);
                lines.truncate(2);
                lines
            })
            .collect();
        // Image, title, two description lines, and the details link.
        let card_h = CARD_IMAGE_H + CARD_PAD + 30.0
            + (2 * (CARD_DESC_FONT + 5)) as f32
            + 10.0
            + 18.0
            + CARD_PAD;

        let modal_w = (width * 0.72).min(720.0);
        let modal_text_w = (modal_w - 80.0) as i32;
        let modal_desc_lines: Vec<Vec<String>> = awards
            .iter()
            .map(|a| wrap_text(a.description, MODAL_TEXT_FONT, modal_text_w))
            .collect();
        let modal_full_lines: Vec<Vec<String>> = awards
            .iter()
            .map(|a| wrap_text(a.full_description, MODAL_TEXT_FONT, modal_text_w))
            .collect();
        // Tall enough for the wordiest award, capped to the viewport.
        let body_lines = modal_desc_lines
            .iter()
            .zip(&modal_full_lines)
            .map(|(d, f)| d.len() + f.len())
            .max()
            .unwrap_or(0);
        let image_h = 200.0;
        let body_h = (body_lines as i32 * (MODAL_TEXT_FONT + MODAL_LINE_GAP)) as f32;
        let modal_h = (40.0
            + image_h + 16.0           // picture
            + 44.0                     // title
            + 24.0 + 32.0              // organization and location rows
            + 26.0 + 26.0 + 36.0       // body headings and gaps
            + body_h
            + 28.0                     // date line
            + 40.0)
            .min(viewport_h - 60.0);

        let grid_top = 96.0 + 44.0 + 24.0 + 20.0 + 64.0;
        let rows = awards.len().div_ceil(COLUMNS);
        let height = grid_top + rows as f32 * (card_h + GRID_GAP) + 96.0;

        Ok(Self {
            awards,
            textures,
            width,
            viewport_h,
            height,
            grid_top,
            card_w,
            card_h,
            header_reveal: Reveal::new(),
            reveals: awards.iter().map(|_| Reveal::new()).collect(),
            card_desc_lines,
            modal_desc_lines,
            modal_full_lines,
            modal: ModalLayout {
                width: modal_w,
                height: modal_h,
                image_h,
            },
            selected: None,
        })
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, index: usize) {
        if index < self.awards.len() {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
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
        for (i, reveal) in self.reveals.iter_mut().enumerate() {
            let row = i / COLUMNS;
            let card_top = section_top + self.grid_top + row as f32 * (self.card_h + GRID_GAP);
            reveal.update(dt, card_top < reveal_line, reduced_motion);
        }
    }

    fn card_rect(&self, index: usize, y0: f32) -> Rectangle {
        let col = index % COLUMNS;
        let row = index / COLUMNS;
        Rectangle::new(
            MARGIN + col as f32 * (self.card_w + GRID_GAP),
            y0 + self.grid_top + row as f32 * (self.card_h + GRID_GAP),
            self.card_w,
            self.card_h,
        )
    }

    /// Which award card, if any, sits under `pos`.
    pub fn card_hit(&self, pos: Vector2, y0: f32) -> Option<usize> {
        (0..self.awards.len()).find(|&i| self.card_rect(i, y0).check_collision_point_rec(pos))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, y0: f32) {
        let center_x = self.width / 2.0;
        let alpha = self.header_reveal.alpha();
        draw_centered(
            d,
            AWARDS_HEADING,
            center_x,
            y0 + 96.0 + self.header_reveal.offset(30.0),
            44,
            ROYAL.fade(alpha),
        );
        draw_centered(
            d,
            AWARDS_SUBHEADING,
            center_x,
            y0 + 96.0 + 44.0 + 24.0 + self.header_reveal.offset(20.0),
            20,
            TEXT_MUTED.fade(alpha),
        );

        for (i, award) in self.awards.iter().enumerate() {
            let reveal = &self.reveals[i];
            let alpha = reveal.alpha();
            if alpha <= 0.0 {
                continue;
            }
            let mut rect = self.card_rect(i, y0);
            rect.y += reveal.offset(50.0);

            draw_panel(d, rect, PANEL_BORDER.fade(alpha), PANEL.fade(alpha));
            self.draw_award_image(d, i, rect.x, rect.y, rect.width, CARD_IMAGE_H, alpha);

            // Year badge over the image.
            let badge = Rectangle::new(rect.x + rect.width - 64.0, rect.y + 12.0, 52.0, 22.0);
            d.draw_rectangle_rounded(badge, 0.5, 8, GOLD.fade(alpha));
            draw_centered(
                d,
                award.year,
                badge.x + badge.width / 2.0,
                badge.y + 4.0,
                14,
                BACKGROUND.fade(alpha),
            );

            let tx = (rect.x + CARD_PAD) as i32;
            let mut ty = rect.y + CARD_IMAGE_H + CARD_PAD;
            d.draw_text(award.title, tx, ty as i32, 22, TEXT_PRIMARY.fade(alpha));
            ty += 30.0;
            let used = draw_wrapped(
                d,
                &self.card_desc_lines[i],
                tx,
                ty as i32,
                CARD_DESC_FONT,
                5,
                TEXT_MUTED.fade(alpha),
            );
            ty += used as f32 + 10.0;
            d.draw_text("View Details >", tx, ty as i32, 14, GOLD.fade(alpha));
        }
    }

    fn draw_award_image(
        &self,
        d: &mut RaylibDrawHandle,
        index: usize,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        alpha: f32,
    ) {
        let texture = &self.textures[index];
        let tw = texture.width() as f32;
        let th = texture.height() as f32;
        let scale = (w / tw).max(h / th);
        let src_w = w / scale;
        let src_h = h / scale;
        let src = Rectangle::new((tw - src_w) / 2.0, (th - src_h) / 2.0, src_w, src_h);
        let dst = Rectangle::new(x + 1.0, y + 1.0, w - 2.0, h);
        d.draw_texture_pro(texture, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE.fade(alpha));
    }

    pub fn modal_panel_rect(&self) -> Rectangle {
        Rectangle::new(
            (self.width - self.modal.width) / 2.0,
            (self.viewport_h - self.modal.height) / 2.0,
            self.modal.width,
            self.modal.height,
        )
    }

    pub fn modal_close_rect(&self) -> Rectangle {
        let panel = self.modal_panel_rect();
        Rectangle::new(panel.x + panel.width - 44.0, panel.y + 12.0, 32.0, 32.0)
    }

    /// Draw the open detail modal, if any, in screen coordinates. Call last
    /// so it covers the page.
    pub fn draw_modal(&self, d: &mut RaylibDrawHandle) {
        let Some(index) = self.selected else {
            return;
        };
        let award = &self.awards[index];

        d.draw_rectangle(
            0,
            0,
            self.width as i32,
            self.viewport_h as i32,
            BACKGROUND.fade(0.75),
        );

        let panel = self.modal_panel_rect();
        draw_panel(d, panel, PANEL_BORDER, PANEL);

        let inner_x = panel.x + 40.0;
        let mut cursor = panel.y + 40.0;

        self.draw_award_image(
            d,
            index,
            inner_x,
            cursor,
            panel.width - 80.0,
            self.modal.image_h,
            1.0,
        );
        let badge = Rectangle::new(inner_x + 12.0, cursor + self.modal.image_h - 34.0, 60.0, 24.0);
        d.draw_rectangle_rounded(badge, 0.5, 8, GOLD);
        draw_centered(
            d,
            award.year,
            badge.x + badge.width / 2.0,
            badge.y + 5.0,
            14,
            BACKGROUND,
        );
        cursor += self.modal.image_h + 16.0;

        d.draw_text(award.title, inner_x as i32, cursor as i32, 30, ROYAL);
        cursor += 44.0;

        d.draw_text(
            &format!("Organization: {}", award.organization),
            inner_x as i32,
            cursor as i32,
            16,
            TEXT_PRIMARY,
        );
        cursor += 24.0;
        d.draw_text(
            &format!("Location: {}", award.location),
            inner_x as i32,
            cursor as i32,
            16,
            TEXT_PRIMARY,
        );
        cursor += 32.0;

        d.draw_text("Brief Description", inner_x as i32, cursor as i32, 18, TEXT_PRIMARY);
        cursor += 26.0;
        let used = draw_wrapped(
            d,
            &self.modal_desc_lines[index],
            inner_x as i32,
            cursor as i32,
            MODAL_TEXT_FONT,
            MODAL_LINE_GAP,
            TEXT_MUTED,
        );
        cursor += used as f32 + 16.0;

        d.draw_text("Full Details", inner_x as i32, cursor as i32, 18, TEXT_PRIMARY);
        cursor += 26.0;
        let used = draw_wrapped(
            d,
            &self.modal_full_lines[index],
            inner_x as i32,
            cursor as i32,
            MODAL_TEXT_FONT,
            MODAL_LINE_GAP,
            TEXT_MUTED,
        );
        cursor += used as f32 + 20.0;

        d.draw_text(
            &format!("Awarded on: {}", award.date),
            inner_x as i32,
            cursor as i32,
            15,
            GOLD,
        );

        // Close button.
        let close = self.modal_close_rect();
        let cx = close.x + close.width / 2.0;
        let cy = close.y + close.height / 2.0;
        d.draw_line_ex(
            Vector2::new(cx - 8.0, cy - 8.0),
            Vector2::new(cx + 8.0, cy + 8.0),
            2.0,
            TEXT_PRIMARY,
        );
        d.draw_line_ex(
            Vector2::new(cx - 8.0, cy + 8.0),
            Vector2::new(cx + 8.0, cy - 8.0),
            2.0,
            TEXT_PRIMARY,
        );
    }
}
