//! Celebration confetti drawn over everything after the gate opens

use iced::widget::canvas::{self, Program};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use rand::Rng;
use std::time::{Duration, Instant};

use crate::Message;

pub const PARTICLE_COUNT: usize = 120;

/// The whole effect disappears after this, whatever the particles are doing
pub const CONFETTI_LIFETIME: Duration = Duration::from_millis(4500);

const DELAY_MAX_MS: f32 = 700.0;
const FALL_MIN_MS: f32 = 2400.0;
const FALL_MAX_MS: f32 = 4000.0;

const PALETTE: [Color; 5] = [
    Color::from_rgb(1.0, 0.30, 0.49),
    Color::from_rgb(1.0, 0.82, 0.65),
    Color::from_rgb(1.0, 1.0, 1.0),
    Color::from_rgb(0.98, 0.62, 0.74),
    Color::from_rgb(1.0, 0.90, 0.45),
];

#[derive(Debug, Clone)]
pub struct Particle {
    /// Horizontal start as a fraction of the width (0..1)
    pub x: f32,
    pub delay_ms: f32,
    pub duration_ms: f32,
    /// Sideways sway amplitude in pixels
    pub sway: f32,
    /// Full turns over the fall
    pub spin: f32,
    pub size: f32,
    pub color: Color,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            delay_ms: rng.random_range(0.0..DELAY_MAX_MS),
            duration_ms: rng.random_range(FALL_MIN_MS..FALL_MAX_MS),
            sway: rng.random_range(8.0..36.0),
            spin: rng.random_range(1.0..4.0),
            size: rng.random_range(6.0..11.0),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }

    /// Fall progress (0..1) at `elapsed_ms`, `None` before start or after landing
    pub fn progress(&self, elapsed_ms: f32) -> Option<f32> {
        let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
        (0.0..=1.0).contains(&t).then_some(t)
    }
}

#[derive(Debug, Clone)]
pub struct Confetti {
    started: Instant,
    now: Instant,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, started: Instant) -> Self {
        Self {
            started,
            now: started,
            particles: (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Move the animation clock forward (one call per window frame)
    pub fn advance(&mut self, now: Instant) {
        self.now = now.max(self.now);
    }

    pub fn elapsed(&self) -> Duration {
        self.now.duration_since(self.started)
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= CONFETTI_LIFETIME
    }
}

impl Program<Message> for Confetti {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let elapsed_ms = self.elapsed().as_secs_f32() * 1000.0;

        for particle in &self.particles {
            let Some(t) = particle.progress(elapsed_ms) else {
                continue;
            };

            let x = particle.x * bounds.width + particle.sway * (t * 6.0 * std::f32::consts::PI).sin();
            let y = -20.0 + t * (bounds.height + 40.0);
            let angle = t * particle.spin * std::f32::consts::TAU;

            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.rotate(angle);
                frame.fill_rectangle(
                    Point::new(-particle.size / 2.0, -particle.size / 4.0),
                    Size::new(particle.size, particle.size / 2.0),
                    particle.color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_particle_count_and_bounds() {
        let confetti = Confetti::new(&mut StdRng::seed_from_u64(42), Instant::now());
        assert_eq!(confetti.particles().len(), PARTICLE_COUNT);

        for p in confetti.particles() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..DELAY_MAX_MS).contains(&p.delay_ms));
            assert!((FALL_MIN_MS..FALL_MAX_MS).contains(&p.duration_ms));
        }
    }

    #[test]
    fn test_expiry() {
        let start = Instant::now();
        let mut confetti = Confetti::new(&mut StdRng::seed_from_u64(1), start);
        assert!(!confetti.is_expired());

        confetti.advance(start + Duration::from_millis(4499));
        assert!(!confetti.is_expired());

        confetti.advance(start + CONFETTI_LIFETIME);
        assert!(confetti.is_expired());

        // The clock never runs backwards
        confetti.advance(start);
        assert!(confetti.is_expired());
    }

    #[test]
    fn test_particle_progress() {
        let particle = Particle {
            x: 0.5,
            delay_ms: 500.0,
            duration_ms: 2000.0,
            sway: 10.0,
            spin: 1.0,
            size: 8.0,
            color: PALETTE[0],
        };
        assert_eq!(particle.progress(100.0), None);
        assert_eq!(particle.progress(1500.0), Some(0.5));
        assert_eq!(particle.progress(3000.0), None);
    }
}
