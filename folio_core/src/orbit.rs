//! Floating technology badges: a slow spin plus a vertical bob.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    React,
    ThreeJs,
    JavaScript,
    TypeScript,
    Node,
    #[default]
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Torus,
    Box,
    Sphere,
    Plate,
}

impl Solid {
    /// CSS class used to draw the silhouette.
    pub fn class(&self) -> &'static str {
        match self {
            Solid::Torus => "solid-torus",
            Solid::Box => "solid-box",
            Solid::Sphere => "solid-sphere",
            Solid::Plate => "solid-plate",
        }
    }
}

impl IconKind {
    pub fn solid(&self) -> Solid {
        match self {
            IconKind::React | IconKind::Generic => Solid::Torus,
            IconKind::ThreeJs => Solid::Box,
            IconKind::JavaScript | IconKind::Node => Solid::Sphere,
            IconKind::TypeScript => Solid::Plate,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IconKind::React => "#61DAFB",
            IconKind::ThreeJs => "#049EF4",
            IconKind::JavaScript => "#F7DF1E",
            IconKind::TypeScript => "#3178C6",
            IconKind::Node => "#68A063",
            IconKind::Generic => "#8B5CF6",
        }
    }
}

const TILT_RATE: f64 = 0.5;
const TILT_AMPLITUDE: f64 = 0.2;
const SPIN_PER_FRAME: f64 = 0.01;
const BOB_RATE: f64 = 0.8;
const BOB_AMPLITUDE: f64 = 0.1;
/// Scene units to CSS pixels for the bob offset.
const BOB_PIXELS: f64 = 60.0;

/// Pose of a badge at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitMotion {
    /// Radians.
    pub tilt: f64,
    /// Radians, accumulates.
    pub spin: f64,
    /// Scene units.
    pub lift: f64,
}

impl OrbitMotion {
    /// Advance to `elapsed_secs` since mount; `frames` is the number of
    /// 60 Hz frames since the last call.
    pub fn advance(&mut self, elapsed_secs: f64, frames: f64) {
        self.tilt = (elapsed_secs * TILT_RATE).sin() * TILT_AMPLITUDE;
        self.spin = (self.spin + SPIN_PER_FRAME * frames.max(0.0)) % std::f64::consts::TAU;
        self.lift = (elapsed_secs * BOB_RATE).sin() * BOB_AMPLITUDE;
    }

    pub fn transform(&self) -> String {
        format!(
            "translateY({:.2}px) rotateX({:.4}rad) rotateY({:.4}rad)",
            -self.lift * BOB_PIXELS,
            self.tilt,
            self.spin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_solids_and_colors() {
        assert_eq!(IconKind::React.solid(), Solid::Torus);
        assert_eq!(IconKind::ThreeJs.solid(), Solid::Box);
        assert_eq!(IconKind::TypeScript.color(), "#3178C6");
        assert_eq!(IconKind::Node.solid(), Solid::Sphere);
        assert_eq!(IconKind::Generic.color(), "#8B5CF6");
    }

    #[test]
    fn motion_stays_within_amplitude() {
        let mut motion = OrbitMotion::default();
        for frame in 0..2_000 {
            motion.advance(frame as f64 / 60.0, 1.0);
            assert!(motion.tilt.abs() <= TILT_AMPLITUDE);
            assert!(motion.lift.abs() <= BOB_AMPLITUDE);
            assert!((0.0..std::f64::consts::TAU).contains(&motion.spin));
        }
    }

    #[test]
    fn spin_accumulates_per_frame() {
        let mut motion = OrbitMotion::default();
        motion.advance(0.0, 1.0);
        motion.advance(0.0, 2.0);
        assert!((motion.spin - 0.03).abs() < 1e-12);
        assert!(motion.transform().ends_with("rotateX(0.0000rad) rotateY(0.0300rad)"));
    }
}
