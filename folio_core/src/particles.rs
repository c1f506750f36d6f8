//! Particle simulations behind the decorative backgrounds.
//!
//! Pure geometry: the browser layer calls [`ParticleField::step`] once per
//! animation frame and paints [`ParticleField::particles`] and
//! [`ParticleField::links`] onto a canvas. Randomness comes from a seeded
//! [`SmallRng`] so runs are reproducible in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Hover repulsion radius (px).
pub const REPEL_DISTANCE: f64 = 200.0;
/// Maximum displacement applied by one repulsion pass (px).
pub const REPEL_STRENGTH: f64 = 12.0;
/// Particles added per click.
pub const PUSH_QUANTITY: usize = 4;
/// Longest frame gap the simulation will integrate in one step.
const MAX_FRAMES_PER_STEP: f64 = 4.0;
/// Drawn when a preset supplies an empty palette.
const FALLBACK_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleVariant {
    #[default]
    Hero,
    Projects,
    Skills,
    Contact,
    Base,
}

impl ParticleVariant {
    /// DOM id of the canvas hosting this variant.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ParticleVariant::Hero => "particles-hero",
            ParticleVariant::Projects => "particles-projects",
            ParticleVariant::Skills => "particles-skills",
            ParticleVariant::Contact => "particles-contact",
            ParticleVariant::Base => "particles-base",
        }
    }

    pub fn preset(&self) -> ParticlePreset {
        let base = ParticlePreset::base();
        match self {
            ParticleVariant::Base => base,
            ParticleVariant::Hero => ParticlePreset {
                count: 100,
                speed: 2.0,
                ..base
            },
            ParticleVariant::Projects => ParticlePreset {
                count: 60,
                speed: 1.0,
                palette: &["#8B5CF6", "#EC4899"],
                link: base.link.map(|link| LinkStyle {
                    color: "#8B5CF6",
                    ..link
                }),
                ..base
            },
            ParticleVariant::Skills => ParticlePreset {
                count: 40,
                speed: 3.0,
                palette: &["#06B6D4", "#10B981"],
                link: None,
                shapes: &[Shape::Circle, Shape::Triangle],
                drift: Drift::Up,
                ..base
            },
            ParticleVariant::Contact => ParticlePreset {
                count: 50,
                speed: 0.8,
                palette: &["#F59E0B", "#EF4444"],
                link: base.link.map(|link| LinkStyle {
                    color: "#F59E0B",
                    opacity: 0.2,
                    ..link
                }),
                ..base
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Triangle,
}

/// Movement pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// Random directions, bouncing off the edges.
    Free,
    /// Rising particles that re-enter from the bottom.
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStyle {
    pub color: &'static str,
    pub distance: f64,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePreset {
    pub count: usize,
    pub speed: f64,
    pub palette: &'static [&'static str],
    pub link: Option<LinkStyle>,
    pub shapes: &'static [Shape],
    pub drift: Drift,
    pub opacity: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl ParticlePreset {
    fn base() -> Self {
        Self {
            count: 80,
            speed: 1.5,
            palette: &["#3B82F6", "#8B5CF6", "#06B6D4"],
            link: Some(LinkStyle {
                color: "#3B82F6",
                distance: 150.0,
                opacity: 0.3,
                width: 1.0,
            }),
            shapes: &[Shape::Circle],
            drift: Drift::Free,
            opacity: 0.5,
            min_radius: 1.0,
            max_radius: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
    pub shape: Shape,
}

/// Pair of particles close enough to be joined by a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// Already scaled by distance: 0 at the link limit, full at contact.
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    preset: ParticlePreset,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(variant: ParticleVariant, width: f64, height: f64, seed: u64) -> Self {
        Self::with_preset(variant.preset(), width, height, seed)
    }

    pub fn with_preset(preset: ParticlePreset, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            preset,
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::with_capacity(preset.count),
            rng: SmallRng::seed_from_u64(seed),
        };
        for _ in 0..preset.count {
            let x = field.rng.gen_range(0.0..field.width);
            let y = field.rng.gen_range(0.0..field.height);
            let particle = field.spawn(x, y);
            field.particles.push(particle);
        }
        field
    }

    pub fn preset(&self) -> &ParticlePreset {
        &self.preset
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn spawn(&mut self, x: f64, y: f64) -> Particle {
        let preset = self.preset;
        let (vx, vy) = match preset.drift {
            Drift::Free => {
                let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
                (angle.cos() * preset.speed, angle.sin() * preset.speed)
            }
            Drift::Up => (
                self.rng.gen_range(-0.3..0.3) * preset.speed,
                -self.rng.gen_range(0.6..1.0) * preset.speed,
            ),
        };
        let radius = if preset.max_radius > preset.min_radius {
            self.rng.gen_range(preset.min_radius..preset.max_radius)
        } else {
            preset.min_radius
        };
        let color = pick(&mut self.rng, preset.palette).unwrap_or(FALLBACK_COLOR);
        let shape = pick(&mut self.rng, preset.shapes).unwrap_or(Shape::Circle);
        Particle {
            x,
            y,
            vx,
            vy,
            radius,
            color,
            shape,
        }
    }

    /// Advance by `frames` (1.0 = one 60 Hz frame).
    pub fn step(&mut self, frames: f64) {
        let frames = frames.max(0.0).min(MAX_FRAMES_PER_STEP);
        let (width, height) = (self.width, self.height);
        let drift = self.preset.drift;

        for index in 0..self.particles.len() {
            let respawn_x = match drift {
                Drift::Up => Some(self.rng.gen_range(0.0..width)),
                Drift::Free => None,
            };
            let p = &mut self.particles[index];
            p.x += p.vx * frames;
            p.y += p.vy * frames;

            match drift {
                Drift::Free => {
                    bounce(&mut p.x, &mut p.vx, p.radius, width);
                    bounce(&mut p.y, &mut p.vy, p.radius, height);
                }
                Drift::Up => {
                    if p.y + p.radius < 0.0 {
                        p.y = height + p.radius;
                        p.x = respawn_x.unwrap_or(p.x);
                    }
                    bounce(&mut p.x, &mut p.vx, p.radius, width);
                }
            }
        }
    }

    /// Pairs within the preset link distance. Empty when links are disabled.
    pub fn links(&self) -> Vec<Link> {
        let Some(style) = self.preset.link else {
            return Vec::new();
        };
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                let distance = (pa.x - pb.x).hypot(pa.y - pb.y);
                if distance < style.distance {
                    links.push(Link {
                        a,
                        b,
                        opacity: style.opacity * (1.0 - distance / style.distance),
                    });
                }
            }
        }
        links
    }

    /// Click interaction: add particles at the pointer. A field seeded with
    /// particles never grows beyond twice its preset count, dropping the
    /// oldest first. An empty preset (`count == 0`) is uncapped.
    pub fn push(&mut self, x: f64, y: f64, quantity: usize) {
        for _ in 0..quantity {
            let particle = self.spawn(x, y);
            self.particles.push(particle);
        }
        let Some(cap) = self.cap() else {
            return;
        };
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    fn cap(&self) -> Option<usize> {
        (self.preset.count > 0).then(|| self.preset.count.saturating_mul(2))
    }

    /// Hover interaction: nudge nearby particles away from the pointer.
    pub fn repel(&mut self, x: f64, y: f64) {
        for p in &mut self.particles {
            let (dx, dy) = (p.x - x, p.y - y);
            let distance = dx.hypot(dy);
            if distance > 0.0 && distance < REPEL_DISTANCE {
                let shift = (1.0 - distance / REPEL_DISTANCE) * REPEL_STRENGTH;
                p.x += dx / distance * shift;
                p.y += dy / distance * shift;
            }
        }
    }

    /// Canvas resized: keep particles inside the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in &mut self.particles {
            p.x = p.x.min(self.width).max(0.0);
            p.y = p.y.min(self.height).max(0.0);
        }
    }
}

/// Random element of `items`; `None` when the preset left it empty.
fn pick<T: Copy>(rng: &mut SmallRng, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len())).copied()
}

/// Reflect a coordinate off the `[radius, limit - radius]` walls.
fn bounce(pos: &mut f64, velocity: &mut f64, radius: f64, limit: f64) {
    let low = radius.min(limit / 2.0);
    let high = (limit - radius).max(limit / 2.0);
    if *pos < low {
        *pos = low;
        *velocity = velocity.abs();
    } else if *pos > high {
        *pos = high;
        *velocity = -velocity.abs();
    }
}

/// Default confetti palette.
pub const CONFETTI_COLORS: &[&str] = &[
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];
const CONFETTI_GRAVITY: f64 = 3.0;
const CONFETTI_DECAY: f64 = 0.9;
const CONFETTI_TICKS: f64 = 200.0;
const CONFETTI_START_VELOCITY: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    pub tilt: f64,
    spin: f64,
    pub size: f64,
    pub color: &'static str,
    /// 1.0 when fired, 0.0 when expired; doubles as opacity.
    pub life: f64,
}

/// One-shot celebratory burst.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    height: f64,
}

impl ConfettiBurst {
    pub const DEFAULT_COUNT: usize = 100;
    pub const DEFAULT_SPREAD_DEG: f64 = 70.0;
    /// Vertical origin as a fraction of the viewport height.
    pub const DEFAULT_ORIGIN_Y: f64 = 0.6;

    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self::fire(
            width,
            height,
            seed,
            Self::DEFAULT_COUNT,
            Self::DEFAULT_SPREAD_DEG,
            Self::DEFAULT_ORIGIN_Y,
        )
    }

    pub fn fire(
        width: f64,
        height: f64,
        seed: u64,
        count: usize,
        spread_deg: f64,
        origin_y: f64,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (ox, oy) = (width / 2.0, height * origin_y);
        let half_spread = spread_deg.abs() / 2.0;
        let pieces = (0..count)
            .map(|_| {
                let angle = if half_spread > 0.0 {
                    90.0 + rng.gen_range(-half_spread..half_spread)
                } else {
                    90.0
                }
                .to_radians();
                let velocity = CONFETTI_START_VELOCITY * rng.gen_range(0.5..1.0);
                ConfettiPiece {
                    x: ox,
                    y: oy,
                    vx: angle.cos() * velocity,
                    vy: -angle.sin() * velocity,
                    tilt: rng.gen_range(0.0..std::f64::consts::TAU),
                    spin: rng.gen_range(-0.3..0.3),
                    size: rng.gen_range(6.0..10.0),
                    color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
                    life: 1.0,
                }
            })
            .collect();
        Self {
            pieces,
            height: height.max(1.0),
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Advance by whole ticks; fractional frame counts round, at least one.
    pub fn step(&mut self, frames: f64) {
        let ticks = frames.round().max(1.0).min(MAX_FRAMES_PER_STEP) as usize;
        for _ in 0..ticks {
            for piece in &mut self.pieces {
                if piece.life <= 0.0 {
                    continue;
                }
                piece.x += piece.vx;
                piece.y += piece.vy + CONFETTI_GRAVITY;
                piece.vx *= CONFETTI_DECAY;
                piece.vy *= CONFETTI_DECAY;
                piece.tilt += piece.spin;
                piece.life = (piece.life - 1.0 / CONFETTI_TICKS).max(0.0);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.pieces
            .iter()
            .all(|piece| piece.life <= 0.0 || piece.y > self.height + piece.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_follow_variant_table() {
        assert_eq!(ParticleVariant::Hero.preset().count, 100);
        assert_eq!(ParticleVariant::Projects.preset().count, 60);
        assert_eq!(ParticleVariant::Base.preset().count, 80);

        let skills = ParticleVariant::Skills.preset();
        assert!(skills.link.is_none());
        assert_eq!(skills.drift, Drift::Up);
        assert_eq!(skills.shapes.len(), 2);

        let contact = ParticleVariant::Contact.preset();
        assert_eq!(contact.link.map(|l| l.opacity), Some(0.2));
        assert_eq!(contact.link.map(|l| l.color), Some("#F59E0B"));
        assert_eq!(contact.speed, 0.8);
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(ParticleVariant::Hero, 800.0, 600.0, 7);
        let b = ParticleField::new(ParticleVariant::Hero, 800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 100);
    }

    #[test]
    fn particles_stay_inside_after_many_steps() {
        let mut field = ParticleField::new(ParticleVariant::Hero, 320.0, 200.0, 42);
        for _ in 0..500 {
            field.step(1.0);
        }
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= 320.0, "x out of bounds: {}", p.x);
            assert!(p.y >= 0.0 && p.y <= 200.0, "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn rising_particles_wrap_to_bottom() {
        let mut field = ParticleField::new(ParticleVariant::Skills, 300.0, 300.0, 3);
        for _ in 0..400 {
            field.step(1.0);
        }
        for p in field.particles() {
            assert!(p.vy < 0.0);
            assert!(p.y <= 300.0 + p.radius);
            assert!(p.y + p.radius >= -3.0 * 4.0);
        }
    }

    #[test]
    fn links_fade_with_distance() {
        let preset = ParticlePreset {
            count: 0,
            ..ParticleVariant::Base.preset()
        };
        let mut field = ParticleField::with_preset(preset, 500.0, 500.0, 1);
        field.push(100.0, 100.0, 1);
        field.push(175.0, 100.0, 1);
        field.push(400.0, 400.0, 1);
        // Freeze positions: push() gives random velocities, we only read geometry.
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].opacity - 0.15).abs() < 1e-9);
    }

    #[test]
    fn skills_variant_has_no_links() {
        let field = ParticleField::new(ParticleVariant::Skills, 100.0, 100.0, 9);
        assert!(field.links().is_empty());
    }

    #[test]
    fn push_is_capped_at_twice_the_preset() {
        let mut field = ParticleField::new(ParticleVariant::Contact, 400.0, 400.0, 5);
        for _ in 0..40 {
            field.push(10.0, 10.0, PUSH_QUANTITY);
        }
        assert_eq!(field.particles().len(), 100);
        let newest = field.particles().last().unwrap();
        assert_eq!((newest.x, newest.y), (10.0, 10.0));
    }

    #[test]
    fn repel_moves_only_nearby_particles() {
        let preset = ParticlePreset {
            count: 0,
            ..ParticleVariant::Base.preset()
        };
        let mut field = ParticleField::with_preset(preset, 1000.0, 1000.0, 2);
        field.push(150.0, 100.0, 1);
        field.push(700.0, 700.0, 1);
        field.repel(100.0, 100.0);

        let near = field.particles()[0];
        let far = field.particles()[1];
        assert!(near.x > 150.0);
        assert!((near.y - 100.0).abs() < 1e-9);
        assert_eq!((far.x, far.y), (700.0, 700.0));
    }

    #[test]
    fn empty_preset_keeps_every_pushed_particle() {
        let preset = ParticlePreset {
            count: 0,
            ..ParticleVariant::Base.preset()
        };
        let mut field = ParticleField::with_preset(preset, 400.0, 400.0, 8);
        for _ in 0..10 {
            field.push(50.0, 50.0, PUSH_QUANTITY);
        }
        assert_eq!(field.particles().len(), 10 * PUSH_QUANTITY);
    }

    #[test]
    fn empty_palette_and_shapes_fall_back() {
        let preset = ParticlePreset {
            count: 5,
            palette: &[],
            shapes: &[],
            ..ParticleVariant::Base.preset()
        };
        let mut field = ParticleField::with_preset(preset, 200.0, 200.0, 4);
        field.push(20.0, 20.0, 1);
        assert_eq!(field.particles().len(), 6);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.color == FALLBACK_COLOR && p.shape == Shape::Circle));
    }

    #[test]
    fn resize_pulls_particles_in() {
        let mut field = ParticleField::new(ParticleVariant::Base, 1000.0, 1000.0, 11);
        field.resize(100.0, 50.0);
        assert!(field.particles().iter().all(|p| p.x <= 100.0 && p.y <= 50.0));
        assert_eq!(field.size(), (100.0, 50.0));
    }

    #[test]
    fn confetti_fires_upward_then_expires() {
        let mut burst = ConfettiBurst::new(1000.0, 800.0, 99);
        assert_eq!(burst.pieces().len(), ConfettiBurst::DEFAULT_COUNT);
        assert!(burst.pieces().iter().all(|p| p.x == 500.0 && p.y == 480.0));

        burst.step(1.0);
        assert!(burst.pieces().iter().all(|p| p.y < 480.0));
        assert!(!burst.is_finished());

        for _ in 0..200 {
            burst.step(1.0);
        }
        assert!(burst.is_finished());
    }

    #[test]
    fn confetti_spread_limits_horizontal_velocity() {
        let mut burst = ConfettiBurst::fire(1000.0, 800.0, 4, 50, 70.0, 0.6);
        burst.step(1.0);
        for piece in burst.pieces() {
            // cos(55deg) * 45 is the widest first-tick drift.
            assert!((piece.x - 500.0).abs() <= 45.0 * 55f64.to_radians().cos() + 1e-9);
        }
    }
}
