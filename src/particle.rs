//! The particle record shared by every particle kind.
//!
//! A particle is a plain value: which kind it is, where it is, how fast it is
//! moving, how big and what color it currently is, and whether it is still
//! alive. All three kinds share this one record; their behavior differs only
//! in [`crate::physics`].
//!
//! | Kind | Radius | Base color |
//! |------|--------|------------|
//! | [`ParticleKind::Water`] | 5 | [`Rgba::BLUE`] |
//! | [`ParticleKind::Smoke`] | 7 | [`Rgba::GRAY`] |
//! | [`ParticleKind::Fire`] | 10 | [`Rgba::YELLOW`] |

use glam::Vec2;
use wsf_derive::ParticleType;

/// The three particle categories.
///
/// A particle's kind is fixed at emission and never changes.
#[derive(ParticleType, Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ParticleKind {
    #[default]
    Water,
    Smoke,
    Fire,
}

impl ParticleKind {
    /// Every kind in cycling order.
    pub const ALL: [ParticleKind; 3] = [ParticleKind::Water, ParticleKind::Smoke, ParticleKind::Fire];

    /// Radius a freshly emitted particle of this kind starts with.
    pub fn base_radius(self) -> f32 {
        match self {
            ParticleKind::Water => 5.0,
            ParticleKind::Smoke => 7.0,
            ParticleKind::Fire => 10.0,
        }
    }

    /// Color a freshly emitted particle of this kind starts with.
    pub fn base_color(self) -> Rgba {
        match self {
            ParticleKind::Water => Rgba::BLUE,
            ParticleKind::Smoke => Rgba::GRAY,
            ParticleKind::Fire => Rgba::YELLOW,
        }
    }
}

/// 8-bit-per-channel sRGB color with straight alpha.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const GRAY: Rgba = Rgba::new(130, 130, 130, 255);
    pub const YELLOW: Rgba = Rgba::new(253, 249, 0, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to linear RGB floats for an sRGB render target.
    ///
    /// Alpha is coverage, not a color, so it is scaled but not decoded.
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// One visual element.
///
/// `radius` may briefly go negative for a shrinking fire particle before it
/// is marked dead. Dead particles are inert: they are neither simulated nor
/// drawn, and their pool slot becomes reclaimable.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Seconds since emission.
    pub age: f32,
    pub alive: bool,
}

impl Particle {
    /// A freshly emitted particle with the kind's base radius and color.
    pub fn spawn(kind: ParticleKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity,
            radius: kind.base_radius(),
            color: kind.base_color(),
            age: 0.0,
            alive: true,
        }
    }
}

impl Default for Particle {
    /// A dead particle; fills pool slots that have never been written.
    fn default() -> Self {
        Self {
            kind: ParticleKind::Water,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 0.0,
            color: Rgba::default(),
            age: 0.0,
            alive: false,
        }
    }
}
