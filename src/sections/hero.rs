//! Hero slideshow section: full-bleed slide, staggered copy, indicators,
//! pause affordance, and the scroll hint.

use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;

use crate::carousel::CarouselSnapshot;
use crate::constants::*;
use crate::content::Slide;
use crate::particles::ParticleField;
use crate::sections::ease_out_cubic;
use crate::texture_loader::load_or_placeholder;

const INDICATOR_SPACING: f32 = 26.0;
const INDICATOR_BOTTOM: f32 = 110.0;

pub struct HeroSection {
    textures: Vec<Texture2D>,
    width: f32,
    height: f32,
    shown: usize,
    previous: Option<usize>,
    fade_t: f32,
    text_t: f32,
    time: f32,
    particles: ParticleField,
}

impl HeroSection {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &Path,
        slides: &[Slide],
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let textures = slides
            .iter()
            .map(|slide| load_or_placeholder(rl, thread, assets, slide.image))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            textures,
            width,
            height,
            shown: 0,
            previous: None,
            fade_t: 1.0,
            text_t: 0.0,
            time: 0.0,
            particles: ParticleField::new(width, height),
        })
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn update(&mut self, dt: f32, snapshot: &CarouselSnapshot) {
        self.time += dt;

        if snapshot.current_index != self.shown {
            self.previous = Some(self.shown);
            self.shown = snapshot.current_index;
            self.fade_t = 0.0;
            self.text_t = 0.0;
        }

        let fade_duration = if snapshot.reduced_motion {
            REDUCED_MOTION_FADE
        } else {
            CROSSFADE_DURATION
        };
        self.fade_t = (self.fade_t + dt / fade_duration).min(1.0);
        if self.fade_t >= 1.0 {
            self.previous = None;
        }
        self.text_t += dt;

        if !snapshot.reduced_motion {
            self.particles.update(dt);
        }
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        scroll: f32,
        slides: &[Slide],
        snapshot: &CarouselSnapshot,
    ) {
        let y0 = -scroll;

        if let Some(previous) = self.previous {
            self.draw_cover(d, &self.textures[previous], y0, 1.0, 1.0);
        }
        let fade = ease_out_cubic(self.fade_t);
        let alpha = if self.previous.is_some() { fade } else { 1.0 };
        let zoom = 1.1 - 0.1 * fade;
        self.draw_cover(d, &self.textures[self.shown], y0, alpha, zoom);

        d.draw_rectangle_gradient_v(
            0,
            y0 as i32,
            self.width as i32,
            self.height as i32,
            Color { a: 140, ..BACKGROUND },
            Color { a: 235, ..BACKGROUND },
        );

        if !snapshot.reduced_motion {
            self.particles.draw(d, y0);
        }

        self.draw_copy(d, y0, &slides[self.shown], snapshot.reduced_motion);
        self.draw_indicators(d, scroll, slides.len(), snapshot.current_index);
        self.draw_pause_button(d, scroll, snapshot.paused);
        self.draw_scroll_hint(d, scroll, snapshot.reduced_motion);
    }

    /// Cover-fit `texture` over the hero viewport, cropping the overflow.
    /// `zoom` above 1.0 crops tighter, reading as a slow zoom-out entrance.
    fn draw_cover(
        &self,
        d: &mut RaylibDrawHandle,
        texture: &Texture2D,
        y0: f32,
        alpha: f32,
        zoom: f32,
    ) {
        let tw = texture.width() as f32;
        let th = texture.height() as f32;
        let scale = (self.width / tw).max(self.height / th) * zoom;
        let src_w = self.width / scale;
        let src_h = self.height / scale;
        let src = Rectangle::new((tw - src_w) / 2.0, (th - src_h) / 2.0, src_w, src_h);
        let dst = Rectangle::new(0.0, y0, self.width, self.height);
        d.draw_texture_pro(texture, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE.fade(alpha));
    }

    fn draw_copy(&self, d: &mut RaylibDrawHandle, y0: f32, slide: &Slide, reduced: bool) {
        let center = self.width / 2.0;
        let base = y0 + self.height * 0.36;

        let (alpha, offset) = self.stagger(0, reduced);
        self.draw_centered(d, slide.name, center, base + offset, 60, TEXT_PRIMARY.fade(alpha));

        let (alpha, offset) = self.stagger(1, reduced);
        self.draw_centered(
            d,
            slide.designation,
            center,
            base + 84.0 + offset,
            30,
            GOLD.fade(alpha),
        );

        let (alpha, offset) = self.stagger(2, reduced);
        let quote = format!("\"{}\"", slide.quote);
        self.draw_centered(
            d,
            &quote,
            center,
            base + 136.0 + offset,
            22,
            TEXT_PRIMARY.fade(alpha * 0.9),
        );
    }

    /// Entrance alpha and downward offset for the nth hero text element.
    fn stagger(&self, index: u32, reduced: bool) -> (f32, f32) {
        if reduced {
            return (1.0, 0.0);
        }
        let delay = TEXT_STAGGER_STEP * (index + 1) as f32;
        let t = ((self.text_t - delay) / TEXT_FADE_DURATION).clamp(0.0, 1.0);
        let eased = ease_out_cubic(t);
        (eased, 40.0 * (1.0 - eased))
    }

    fn draw_centered(
        &self,
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

    fn indicator_x0(&self, count: usize) -> f32 {
        (self.width - count as f32 * INDICATOR_SPACING) / 2.0
    }

    fn indicator_rect(&self, index: usize, count: usize, scroll: f32) -> Rectangle {
        Rectangle::new(
            self.indicator_x0(count) + index as f32 * INDICATOR_SPACING,
            -scroll + self.height - INDICATOR_BOTTOM - 8.0,
            INDICATOR_SPACING - 6.0,
            20.0,
        )
    }

    fn draw_indicators(&self, d: &mut RaylibDrawHandle, scroll: f32, count: usize, active: usize) {
        for i in 0..count {
            let rect = self.indicator_rect(i, count, scroll);
            let cy = rect.y + rect.height / 2.0;
            if i == active {
                d.draw_rectangle_rounded(
                    Rectangle::new(rect.x - 2.0, cy - 4.0, rect.width + 4.0, 8.0),
                    1.0,
                    8,
                    GOLD,
                );
            } else {
                d.draw_circle_v(
                    Vector2::new(rect.x + rect.width / 2.0, cy),
                    4.0,
                    Color::WHITE.fade(0.4),
                );
            }
        }
    }

    /// Which indicator dot, if any, sits under `pos`.
    pub fn indicator_hit(&self, pos: Vector2, scroll: f32, count: usize) -> Option<usize> {
        (0..count).find(|&i| self.indicator_rect(i, count, scroll).check_collision_point_rec(pos))
    }

    pub fn pause_button_rect(&self, scroll: f32) -> Rectangle {
        Rectangle::new(self.width - 92.0, -scroll + self.height - 138.0, 48.0, 48.0)
    }

    fn draw_pause_button(&self, d: &mut RaylibDrawHandle, scroll: f32, paused: bool) {
        let rect = self.pause_button_rect(scroll);
        let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        d.draw_circle_v(center, rect.width / 2.0, PANEL.fade(0.8));
        if paused {
            // Play triangle, requesting resume.
            d.draw_triangle(
                Vector2::new(center.x - 6.0, center.y - 10.0),
                Vector2::new(center.x - 6.0, center.y + 10.0),
                Vector2::new(center.x + 12.0, center.y),
                GOLD,
            );
        } else {
            d.draw_rectangle((center.x - 9.0) as i32, (center.y - 10.0) as i32, 6, 20, GOLD);
            d.draw_rectangle((center.x + 3.0) as i32, (center.y - 10.0) as i32, 6, 20, GOLD);
        }
    }

    pub fn scroll_hint_rect(&self, scroll: f32) -> Rectangle {
        Rectangle::new(self.width / 2.0 - 20.0, -scroll + self.height - 64.0, 40.0, 40.0)
    }

    fn draw_scroll_hint(&self, d: &mut RaylibDrawHandle, scroll: f32, reduced: bool) {
        let rect = self.scroll_hint_rect(scroll);
        let bob = if reduced { 0.0 } else { (self.time * 4.0).sin() * 5.0 };
        let cx = rect.x + rect.width / 2.0;
        let cy = rect.y + rect.height / 2.0 + bob;
        d.draw_line_ex(
            Vector2::new(cx - 12.0, cy - 6.0),
            Vector2::new(cx, cy + 6.0),
            3.0,
            GOLD,
        );
        d.draw_line_ex(
            Vector2::new(cx, cy + 6.0),
            Vector2::new(cx + 12.0, cy - 6.0),
            3.0,
            GOLD,
        );
    }
}
