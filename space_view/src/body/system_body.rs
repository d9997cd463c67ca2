/// Catalogue data of a star system body (stars, planets, starports).

use crate::renderer::Color;

/// Spectral class of a regular star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    A,
    B,
    O,
}

/// Spectral class of a Wolf-Rayet star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WolfRayetClass {
    M,
    B,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlackHoleSize {
    Stellar,
    IntermediateMass,
    Supermassive,
}

/// Star catalogue type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    BrownDwarf,
    WhiteDwarf,
    MainSequence(SpectralClass),
    Giant(SpectralClass),
    SuperGiant(SpectralClass),
    HyperGiant(SpectralClass),
    WolfRayet(WolfRayetClass),
    BlackHole(BlackHoleSize),
}

impl StarKind {
    /// True color of the star as seen from space.
    ///
    /// Luminosity class does not change the color, only the spectral class.
    pub fn real_color(&self) -> Color {
        match self {
            StarKind::BrownDwarf => Color::rgb(128, 0, 0),
            StarKind::WhiteDwarf => Color::rgb(255, 255, 255),
            StarKind::MainSequence(class)
            | StarKind::Giant(class)
            | StarKind::SuperGiant(class)
            | StarKind::HyperGiant(class) => spectral_color(*class),
            StarKind::WolfRayet(WolfRayetClass::M) => Color::rgb(0xff, 0xcc, 0xcc),
            StarKind::WolfRayet(WolfRayetClass::B) => Color::rgb(0xcc, 0xcc, 0xff),
            StarKind::WolfRayet(WolfRayetClass::O) => Color::rgb(0xdd, 0xdd, 0xff),
            StarKind::BlackHole(BlackHoleSize::Supermassive) => Color::rgb(0x00, 0x22, 0x22),
            StarKind::BlackHole(_) => Color::rgb(0x22, 0x00, 0x00),
        }
    }
}

fn spectral_color(class: SpectralClass) -> Color {
    match class {
        SpectralClass::M => Color::rgb(0xff, 0xcc, 0xcc),
        SpectralClass::K => Color::rgb(0xff, 0xcc, 0xaa),
        SpectralClass::G => Color::rgb(0xff, 0xff, 0xee),
        SpectralClass::F | SpectralClass::A => Color::rgb(0xff, 0xff, 0xff),
        SpectralClass::B => Color::rgb(0xcc, 0xcc, 0xff),
        SpectralClass::O => Color::rgb(0xdd, 0xdd, 0xff),
    }
}

/// Catalogue type of a system body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemBodyKind {
    Star(StarKind),
    GasGiant,
    Asteroid,
    Terrestrial,
    OrbitalStarport,
    SurfaceStarport,
}

/// Coarse grouping of `SystemBodyKind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodySuperType {
    Star,
    RockyPlanet,
    GasGiant,
    Starport,
}

/// Catalogue entry
#[derive(Debug, Clone, PartialEq)]
pub struct SystemBody {
    name: String,
    kind: SystemBodyKind,
    radius: f64,
}

impl SystemBody {
    pub fn new(name: impl Into<String>, kind: SystemBodyKind, radius: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            radius,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SystemBodyKind {
        self.kind
    }

    /// Catalogue radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn super_type(&self) -> BodySuperType {
        match self.kind {
            SystemBodyKind::Star(_) => BodySuperType::Star,
            SystemBodyKind::GasGiant => BodySuperType::GasGiant,
            SystemBodyKind::Asteroid | SystemBodyKind::Terrestrial => BodySuperType::RockyPlanet,
            SystemBodyKind::OrbitalStarport | SystemBodyKind::SurfaceStarport => BodySuperType::Starport,
        }
    }

    pub fn is_star(&self) -> bool {
        self.super_type() == BodySuperType::Star
    }

    /// Star kind, if this body is a star
    pub fn star_kind(&self) -> Option<StarKind> {
        match self.kind {
            SystemBodyKind::Star(kind) => Some(kind),
            _ => None,
        }
    }

    /// Reflected color used for distant billboards. The catalogue carries
    /// no per-body albedo yet, so every body reflects the same grey.
    pub fn albedo(&self) -> Color {
        Color::rgb(200, 200, 200)
    }
}

#[cfg(test)]
#[path = "system_body_tests.rs"]
mod tests;
