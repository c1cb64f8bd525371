//! Biography section: portrait, life story, stats, and the signature quote.

use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;

use crate::constants::*;
use crate::content::Biography;
use crate::sections::{Reveal, draw_centered, draw_panel, draw_wrapped, wrap_text, wrapped_height};
use crate::texture_loader::load_or_placeholder;

const MARGIN: f32 = 80.0;
const COLUMN_GAP: f32 = 64.0;
const PARA_FONT: i32 = 18;
const PARA_GAP: i32 = 7;

pub struct AboutSection {
    bio: &'static Biography,
    portrait: Texture2D,
    width: f32,
    height: f32,
    reveal: Reveal,
    paragraph_lines: Vec<Vec<String>>,
    quote_lines: Vec<String>,
    portrait_w: f32,
    portrait_h: f32,
    content_top: f32,
    content_h: f32,
    quote_card_h: f32,
}

impl AboutSection {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &Path,
        bio: &'static Biography,
        width: f32,
    ) -> Result<Self> {
        let portrait = load_or_placeholder(rl, thread, assets, bio.portrait)?;

        let portrait_w = (width - 2.0 * MARGIN - COLUMN_GAP) * 0.45;
        let portrait_h = portrait_w * portrait.height() as f32 / portrait.width() as f32;
        let text_w = width - 2.0 * MARGIN - COLUMN_GAP - portrait_w;

        let paragraph_lines: Vec<Vec<String>> = bio
            .paragraphs
            .iter()
            .map(|p| wrap_text(p, PARA_FONT, text_w as i32))
            .collect();
        let mut text_h = 34.0 + 20.0;
        for lines in &paragraph_lines {
            text_h += wrapped_height(lines, PARA_FONT, PARA_GAP) + 16.0;
        }
        text_h += 28.0 + 90.0; // stats row

        let quote_lines = wrap_text(bio.quote, 24, (width - 2.0 * MARGIN - 120.0) as i32);
        let quote_card_h = 48.0 + wrapped_height(&quote_lines, 24, 10) + 20.0 + 18.0 + 48.0;

        let content_top = 96.0 + 48.0 + 64.0;
        let content_h = portrait_h.max(text_h);
        let height = content_top + content_h + 64.0 + quote_card_h + 96.0;

        Ok(Self {
            bio,
            portrait,
            width,
            height,
            reveal: Reveal::new(),
            paragraph_lines,
            quote_lines,
            portrait_w,
            portrait_h,
            content_top,
            content_h,
            quote_card_h,
        })
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn update(&mut self, dt: f32, visible: bool, reduced_motion: bool) {
        self.reveal.update(dt, visible, reduced_motion);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, y0: f32) {
        let alpha = self.reveal.alpha();
        if alpha <= 0.0 {
            return;
        }

        draw_centered(
            d,
            self.bio.heading,
            self.width / 2.0,
            y0 + 96.0 + self.reveal.offset(30.0),
            48,
            ROYAL.fade(alpha),
        );

        let top = y0 + self.content_top;

        // Portrait slides in from the left.
        let px = MARGIN - self.reveal.offset(50.0);
        let dst = Rectangle::new(px, top, self.portrait_w, self.portrait_h);
        let src = Rectangle::new(
            0.0,
            0.0,
            self.portrait.width() as f32,
            self.portrait.height() as f32,
        );
        d.draw_texture_pro(
            &self.portrait,
            src,
            dst,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE.fade(alpha),
        );

        // Biography column slides in from the right.
        let tx = MARGIN + self.portrait_w + COLUMN_GAP + self.reveal.offset(50.0);
        let text_w = self.width - MARGIN - tx;
        let mut cursor = top;
        d.draw_text(self.bio.name, tx as i32, cursor as i32, 34, TEXT_PRIMARY.fade(alpha));
        cursor += 34.0 + 20.0;
        for lines in &self.paragraph_lines {
            let used = draw_wrapped(
                d,
                lines,
                tx as i32,
                cursor as i32,
                PARA_FONT,
                PARA_GAP,
                TEXT_MUTED.fade(alpha),
            );
            cursor += used as f32 + 16.0;
        }

        cursor += 28.0;
        let stat_w = text_w / 3.0;
        for (i, stat) in self.bio.stats.iter().enumerate() {
            let cx = tx + stat_w * (i as f32 + 0.5);
            draw_centered(d, stat.value, cx, cursor, 36, GOLD.fade(alpha));
            draw_centered(d, stat.label, cx, cursor + 46.0, 14, TEXT_MUTED.fade(alpha));
        }

        // Signature quote card.
        let card_top = y0 + self.content_top + self.content_h + 64.0 + self.reveal.offset(50.0);
        let card = Rectangle::new(
            MARGIN,
            card_top,
            self.width - 2.0 * MARGIN,
            self.quote_card_h,
        );
        draw_panel(d, card, PANEL_BORDER.fade(alpha), PANEL.fade(alpha));
        let mut qy = card_top + 48.0;
        for line in &self.quote_lines {
            draw_centered(d, line, self.width / 2.0, qy, 24, TEXT_PRIMARY.fade(alpha));
            qy += 34.0;
        }
        draw_centered(
            d,
            self.bio.attribution,
            self.width / 2.0,
            qy + 20.0,
            18,
            GOLD.fade(alpha),
        );
    }
}
