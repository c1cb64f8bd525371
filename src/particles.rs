//! Ambient floating particles behind the hero copy.
//!
//! Purely decorative and deliberately nondeterministic; nothing here feeds
//! back into the slideshow state, and the whole field is skipped under
//! reduced motion.

use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;

struct Particle {
    pos: Vector2,
    drift: Vector2,
    age: f32,
    lifetime: f32,
}

impl Particle {
    fn spawn(rng: &mut impl Rng, width: f32, height: f32, scatter_age: bool) -> Self {
        let lifetime = rng.random_range(5.0..10.0);
        Self {
            pos: Vector2::new(
                rng.random_range(0.0..width),
                rng.random_range(height * 0.3..height),
            ),
            drift: Vector2::new(
                rng.random_range(-12.0..12.0),
                rng.random_range(-40.0..-15.0),
            ),
            // Scatter initial ages so the field does not pulse in lockstep.
            age: if scatter_age { rng.random_range(0.0..lifetime) } else { 0.0 },
            lifetime,
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, width, height, true))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let mut rng = rand::rng();
        for particle in &mut self.particles {
            particle.age += dt;
            if particle.age >= particle.lifetime {
                *particle = Particle::spawn(&mut rng, self.width, self.height, false);
                continue;
            }
            particle.pos = particle.pos + particle.drift.scale_by(dt);
        }
    }

    /// Draw the field shifted by `y_offset` (the hero's on-screen top).
    pub fn draw(&self, d: &mut RaylibDrawHandle, y_offset: f32) {
        for particle in &self.particles {
            let t = particle.age / particle.lifetime;
            // Opacity ramps 0.3 to 0.8 over the first half of life, then out.
            let alpha = if t < 0.5 {
                0.3 + t
            } else {
                0.8 * (1.0 - (t - 0.5) * 2.0)
            };
            d.draw_circle_v(
                Vector2::new(particle.pos.x, particle.pos.y + y_offset),
                PARTICLE_RADIUS,
                GOLD.fade(alpha),
            );
        }
    }
}
