//! Falling particle field for the hero background.

use std::fmt::Write;
use std::ops::Range;

pub const PARTICLE_COUNT: usize = 50;
pub const RESET_Y: f64 = -10.0;
pub const SPEED_RANGE: Range<f64> = 0.5..2.5;
pub const SIZE_RANGE: Range<f64> = 1.0..4.0;
pub const OPACITY_RANGE: Range<f64> = 0.3..1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: fastrand::Rng,
}

impl ParticleField {
    pub fn new(count: usize, viewport: (f64, f64), seed: u64) -> Self {
        let (width, height) = viewport;
        let mut field = Self {
            particles: Vec::with_capacity(count),
            width,
            height,
            rng: fastrand::Rng::with_seed(seed),
        };

        for _ in 0..count {
            let mut particle = field.spawn();
            particle.y = field.rng.f64() * field.height.max(0.0);
            field.particles.push(particle);
        }

        field
    }

    fn spawn(&mut self) -> Particle {
        Particle {
            x: self.rng.f64() * self.width.max(0.0),
            y: RESET_Y,
            speed: sample(&mut self.rng, SPEED_RANGE),
            size: sample(&mut self.rng, SIZE_RANGE),
            opacity: sample(&mut self.rng, OPACITY_RANGE),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tick(&mut self) {
        for index in 0..self.particles.len() {
            self.particles[index].y += self.particles[index].speed;
            if self.particles[index].y > self.height {
                self.particles[index] = self.spawn();
            }
        }
    }

    pub fn render_markup(&self) -> String {
        let mut markup = String::with_capacity(self.particles.len() * 200);
        for particle in &self.particles {
            let _ = write!(
                markup,
                "<div class=\"particle\" style=\"position: absolute; left: {:.2}px; top: {:.2}px; \
                 width: {:.2}px; height: {:.2}px; background: rgba(255, 255, 255, {:.3}); \
                 border-radius: 50%; pointer-events: none;\"></div>",
                particle.x, particle.y, particle.size, particle.size, particle.opacity
            );
        }
        markup
    }
}

fn sample(rng: &mut fastrand::Rng, range: Range<f64>) -> f64 {
    range.start + rng.f64() * (range.end - range.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(value: f64, range: Range<f64>) -> bool {
        range.contains(&value)
    }

    #[test]
    fn field_holds_fixed_pool_spread_over_viewport() {
        let field = ParticleField::new(PARTICLE_COUNT, (1280.0, 720.0), 7);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        for particle in field.particles() {
            assert!((0.0..720.0).contains(&particle.y));
            assert!((0.0..1280.0).contains(&particle.x));
            assert!(in_range(particle.speed, SPEED_RANGE));
            assert!(in_range(particle.size, SIZE_RANGE));
            assert!(in_range(particle.opacity, OPACITY_RANGE));
        }
    }

    #[test]
    fn tick_advances_by_speed() {
        let mut field = ParticleField::new(PARTICLE_COUNT, (1280.0, 100_000.0), 11);
        let before = field.particles().to_vec();
        field.tick();

        for (old, new) in before.iter().zip(field.particles()) {
            assert!((new.y - (old.y + old.speed)).abs() < 1e-9);
            assert_eq!(new.x, old.x);
        }
    }

    #[test]
    fn particles_fall_monotonically_then_reset_above_viewport() {
        let height = 300.0;
        let mut field = ParticleField::new(PARTICLE_COUNT, (800.0, height), 42);
        let mut resets = 0;

        for _ in 0..1_000 {
            let before = field.particles().to_vec();
            field.tick();

            for (old, new) in before.iter().zip(field.particles()) {
                if old.y + old.speed > height {
                    resets += 1;
                    assert!(new.y < 0.0, "recycled particle restarts above the viewport");
                    assert!(in_range(new.speed, SPEED_RANGE));
                    assert!(in_range(new.size, SIZE_RANGE));
                    assert!(in_range(new.opacity, OPACITY_RANGE));
                } else {
                    assert!(new.y >= old.y);
                }
            }
        }

        assert!(resets > 0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn same_seed_reproduces_field() {
        let a = ParticleField::new(5, (640.0, 480.0), 99);
        let b = ParticleField::new(5, (640.0, 480.0), 99);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn markup_contains_one_div_per_particle() {
        let field = ParticleField::new(3, (640.0, 480.0), 1);
        let markup = field.render_markup();
        assert_eq!(markup.matches("class=\"particle\"").count(), 3);
        assert!(markup.contains("pointer-events: none"));
    }
}
