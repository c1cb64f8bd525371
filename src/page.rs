//! The scrollable tribute page: section layout, chrome, and input dispatch.
//!
//! All slideshow mutation funnels through the carousel controller; this
//! module only translates raylib events into controller commands and draws
//! whatever the controller's snapshot says.

use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;
use tracing::debug;

use crate::carousel::{CarouselController, nav_intent_for_key};
use crate::constants::*;
use crate::content::{AWARDS, BIOGRAPHY, MILESTONES};
use crate::sections::about::AboutSection;
use crate::sections::awards::AwardsSection;
use crate::sections::hero::HeroSection;
use crate::sections::journey::JourneySection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionId {
    About,
    Journey,
    Awards,
}

const NAV_LINKS: [(&str, SectionId); 3] = [
    ("About", SectionId::About),
    ("Journey", SectionId::Journey),
    ("Awards", SectionId::Awards),
];

pub struct Page {
    width: f32,
    height: f32,
    scroll: f32,
    scroll_target: f32,
    controller: CarouselController,
    hero: HeroSection,
    about: AboutSection,
    journey: JourneySection,
    awards: AwardsSection,
    active_section: Option<SectionId>,
}

impl Page {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &Path,
        controller: CarouselController,
    ) -> Result<Self> {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        let hero = HeroSection::new(rl, thread, assets, controller.slides(), width, height)?;
        let about = AboutSection::new(rl, thread, assets, &BIOGRAPHY, width)?;
        let journey = JourneySection::new(&MILESTONES, width);
        let awards = AwardsSection::new(rl, thread, assets, &AWARDS, width, height)?;

        Ok(Self {
            width,
            height,
            scroll: 0.0,
            scroll_target: 0.0,
            controller,
            hero,
            about,
            journey,
            awards,
            active_section: None,
        })
    }

    fn about_top(&self) -> f32 {
        self.hero.height()
    }

    fn journey_top(&self) -> f32 {
        self.about_top() + self.about.height()
    }

    fn awards_top(&self) -> f32 {
        self.journey_top() + self.journey.height()
    }

    fn total_height(&self) -> f32 {
        self.awards_top() + self.awards.height()
    }

    fn max_scroll(&self) -> f32 {
        (self.total_height() - self.height).max(0.0)
    }

    pub fn handle_input(&mut self, rl: &mut RaylibHandle) {
        let mouse = rl.get_mouse_position();

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 && !self.awards.is_modal_open() {
            self.scroll_target =
                (self.scroll_target - wheel * WHEEL_STEP).clamp(0.0, self.max_scroll());
        }

        while let Some(key) = rl.get_key_pressed() {
            if self.awards.is_modal_open() {
                // The modal is the active interactive element; the slideshow
                // sees nothing until it closes.
                if key == KeyboardKey::KEY_ESCAPE {
                    self.awards.close();
                }
                continue;
            }
            if let Some(intent) = nav_intent_for_key(key) {
                self.controller.apply(intent);
                continue;
            }
            match key {
                KeyboardKey::KEY_SPACE => self.controller.toggle_pause(),
                KeyboardKey::KEY_M => {
                    let flag = !self.controller.snapshot().reduced_motion;
                    self.controller.set_reduced_motion(flag);
                }
                _ => {}
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.handle_click(mouse);
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.controller.touch_move(mouse.x);
        } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.controller.touch_end();
        }
    }

    fn handle_click(&mut self, mouse: Vector2) {
        if self.awards.is_modal_open() {
            let panel = self.awards.modal_panel_rect();
            if self.awards.modal_close_rect().check_collision_point_rec(mouse)
                || !panel.check_collision_point_rec(mouse)
            {
                self.awards.close();
            }
            return;
        }

        // Chrome sits above the sections, so test it first.
        if mouse.y <= NAV_HEIGHT {
            if let Some(target) = self.nav_target(mouse) {
                self.scroll_target = target.clamp(0.0, self.max_scroll());
            }
            return;
        }
        if self.back_to_top_visible() && self.back_to_top_rect().check_collision_point_rec(mouse)
        {
            self.scroll_target = 0.0;
            return;
        }

        let scroll = self.scroll;
        if scroll < self.hero.height() {
            let count = self.controller.slide_count();
            if let Some(index) = self.hero.indicator_hit(mouse, scroll, count) {
                if let Err(e) = self.controller.go_to(index) {
                    debug!(error = %e, "indicator navigation rejected");
                }
                return;
            }
            if self
                .hero
                .pause_button_rect(scroll)
                .check_collision_point_rec(mouse)
            {
                self.controller.toggle_pause();
                return;
            }
            if self
                .hero
                .scroll_hint_rect(scroll)
                .check_collision_point_rec(mouse)
            {
                self.scroll_target = self.about_top().min(self.max_scroll());
                return;
            }
            if mouse.y < self.hero.height() - scroll {
                // Anywhere else on the hero starts a swipe.
                self.controller.touch_start(mouse.x);
                return;
            }
        }

        let awards_y0 = self.awards_top() - scroll;
        if let Some(index) = self.awards.card_hit(mouse, awards_y0) {
            self.awards.open(index);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.controller.advance(dt);
        let snapshot = self.controller.snapshot();

        // Ease toward the scroll target; reduced motion snaps.
        if snapshot.reduced_motion {
            self.scroll = self.scroll_target;
        } else {
            let diff = self.scroll_target - self.scroll;
            if diff.abs() < 0.5 {
                self.scroll = self.scroll_target;
            } else {
                self.scroll += diff * (dt * SCROLL_EASE).min(1.0);
            }
        }

        self.hero.update(dt, &snapshot);

        let about_visible = self.about_top() - self.scroll < self.height - REVEAL_MARGIN;
        self.about.update(dt, about_visible, snapshot.reduced_motion);

        let journey_top = self.journey_top();
        self.journey
            .update(dt, self.scroll, self.height, journey_top, snapshot.reduced_motion);

        let awards_top = self.awards_top();
        self.awards
            .update(dt, self.scroll, self.height, awards_top, snapshot.reduced_motion);

        self.active_section = self.active_section_at(self.scroll + ACTIVE_SECTION_PROBE);
    }

    /// The section whose span contains the probe line, mirroring the
    /// original's "top within 100px of the viewport top" rule.
    fn active_section_at(&self, probe: f32) -> Option<SectionId> {
        if probe < self.about_top() {
            None
        } else if probe < self.journey_top() {
            Some(SectionId::About)
        } else if probe < self.awards_top() {
            Some(SectionId::Journey)
        } else if probe < self.total_height() {
            Some(SectionId::Awards)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        let snapshot = self.controller.snapshot();
        let scroll = self.scroll;

        if scroll < self.hero.height() {
            self.hero.draw(d, scroll, self.controller.slides(), &snapshot);
        }

        let about_y0 = self.about_top() - scroll;
        if about_y0 < self.height && about_y0 + self.about.height() > 0.0 {
            self.about.draw(d, about_y0);
        }
        let journey_y0 = self.journey_top() - scroll;
        if journey_y0 < self.height && journey_y0 + self.journey.height() > 0.0 {
            self.journey.draw(d, journey_y0);
        }
        let awards_y0 = self.awards_top() - scroll;
        if awards_y0 < self.height && awards_y0 + self.awards.height() > 0.0 {
            self.awards.draw(d, awards_y0);
        }

        self.draw_nav(d, scroll);
        if self.back_to_top_visible() {
            self.draw_back_to_top(d);
        }
        self.awards.draw_modal(d);
    }

    fn nav_link_rects(&self) -> Vec<(&'static str, Rectangle, SectionId)> {
        let mut rects = Vec::with_capacity(NAV_LINKS.len());
        let mut right = self.width - 40.0;
        for (name, id) in NAV_LINKS.iter().rev() {
            let w = measure_text(name, 18) as f32 + 32.0;
            right -= w;
            rects.push((*name, Rectangle::new(right, 12.0, w, 40.0), *id));
            right -= 8.0;
        }
        rects.reverse();
        rects
    }

    fn name_rect(&self) -> Rectangle {
        Rectangle::new(32.0, 12.0, measure_text(BIOGRAPHY.name, 24) as f32 + 8.0, 40.0)
    }

    fn anchor(&self, id: SectionId) -> f32 {
        match id {
            SectionId::About => self.about_top(),
            SectionId::Journey => self.journey_top(),
            SectionId::Awards => self.awards_top(),
        }
    }

    fn nav_target(&self, mouse: Vector2) -> Option<f32> {
        if self.name_rect().check_collision_point_rec(mouse) {
            return Some(0.0);
        }
        for (_, rect, id) in self.nav_link_rects() {
            if rect.check_collision_point_rec(mouse) {
                return Some(self.anchor(id) - NAV_HEIGHT);
            }
        }
        None
    }

    fn draw_nav(&self, d: &mut RaylibDrawHandle, scroll: f32) {
        if scroll > NAV_SOLID_AFTER {
            d.draw_rectangle(0, 0, self.width as i32, NAV_HEIGHT as i32, PANEL.fade(0.92));
            d.draw_rectangle(0, NAV_HEIGHT as i32 - 1, self.width as i32, 1, PANEL_BORDER);
        }
        d.draw_text(BIOGRAPHY.name, 32, 20, 24, GOLD);
        for (name, rect, id) in self.nav_link_rects() {
            let active = self.active_section == Some(id);
            let color = if active { GOLD } else { TEXT_PRIMARY.fade(0.85) };
            d.draw_text(name, (rect.x + 16.0) as i32, (rect.y + 10.0) as i32, 18, color);
            if active {
                d.draw_rectangle(
                    (rect.x + 16.0) as i32,
                    (rect.y + rect.height - 6.0) as i32,
                    (rect.width - 32.0) as i32,
                    3,
                    GOLD,
                );
            }
        }
    }

    fn back_to_top_visible(&self) -> bool {
        self.scroll > BACK_TO_TOP_AFTER
    }

    fn back_to_top_rect(&self) -> Rectangle {
        Rectangle::new(self.width - 76.0, self.height - 76.0, 52.0, 52.0)
    }

    fn draw_back_to_top(&self, d: &mut RaylibDrawHandle) {
        let rect = self.back_to_top_rect();
        let cx = rect.x + rect.width / 2.0;
        let cy = rect.y + rect.height / 2.0;
        d.draw_circle_v(Vector2::new(cx, cy), rect.width / 2.0, PANEL.fade(0.9));
        d.draw_triangle(
            Vector2::new(cx, cy - 9.0),
            Vector2::new(cx - 9.0, cy + 7.0),
            Vector2::new(cx + 9.0, cy + 7.0),
            GOLD,
        );
    }
}
