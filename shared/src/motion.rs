//! Pointer-driven parallax parameters.
//!
//! Sections measure the pointer relative to their own centre and feed the
//! offset through one of the layer presets below. Everything is plain
//! arithmetic so the numbers can be checked without a browser.

use serde::{Deserialize, Serialize};

/// Pixel offset of the pointer from an element's centre
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Offset of `(client_x, client_y)` from the centre of a bounding rect
    pub fn from_rect(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: client_x - (left + width / 2.0),
            y: client_y - (top + height / 2.0),
        }
    }

    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self { x: self.x * sx, y: self.y * sy }
    }

    /// Translate for one layer; larger divisors move less
    pub fn layer(self, dx: f64, dy: f64) -> Translate {
        Translate { x: self.x / dx, y: self.y / dy }
    }
}

/// CSS translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub fn to_css(self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    /// Gentle lag normally; effectively rigid when the user prefers reduced motion
    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self { stiffness: 1000.0, damping: 1000.0 }
        } else {
            Self { stiffness: 60.0, damping: 18.0 }
        }
    }

    /// Fraction of the remaining distance covered per animation frame.
    ///
    /// Stiffness 1000 and above snaps in a single frame.
    pub fn follow_factor(&self) -> f64 {
        (self.stiffness / 1000.0).sqrt().clamp(0.05, 1.0)
    }
}

/// Hero layers derived from one smoothed pointer offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroParallax {
    pub backdrop: Translate,
    pub plate: Translate,
    pub accents: Translate,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl HeroParallax {
    /// Raw pointer input is damped by (0.7, 0.65) before it reaches the layers
    pub const INPUT_SCALE: (f64, f64) = (0.7, 0.65);

    pub fn from_offset(offset: PointerOffset) -> Self {
        Self {
            backdrop: offset.layer(60.0, 72.0),
            plate: offset.layer(28.0, 32.0),
            accents: offset.layer(18.0, 20.0),
            rotate_x_deg: offset.y / 300.0,
            rotate_y_deg: -offset.x / 220.0,
        }
    }

    pub fn plate_transform(&self) -> String {
        format!(
            "{} rotateX({:.3}deg) rotateY({:.3}deg)",
            self.plate.to_css(),
            self.rotate_x_deg,
            self.rotate_y_deg
        )
    }
}

/// Navbar hero blob layers
pub fn blob_float(offset: PointerOffset) -> Translate {
    offset.layer(14.0, 20.0)
}

pub fn blob_slow(offset: PointerOffset) -> Translate {
    offset.layer(30.0, 38.0)
}

/// Horizontal drift of the menu garnish
pub fn menu_garnish(offset: PointerOffset) -> Translate {
    Translate { x: offset.x / 22.0, y: 0.0 }
}

/// Moves `current` towards `target` by one spring step
pub fn follow(current: PointerOffset, target: PointerOffset, spring: SpringConfig) -> PointerOffset {
    let k = spring.follow_factor();
    PointerOffset {
        x: current.x + (target.x - current.x) * k,
        y: current.y + (target.y - current.y) * k,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_offset_from_rect_centre() {
        let offset = PointerOffset::from_rect(150.0, 80.0, 100.0, 40.0, 200.0, 100.0);
        assert_eq!(offset, PointerOffset { x: -50.0, y: -10.0 });
    }

    #[test]
    fn test_hero_layers() {
        let raw = PointerOffset { x: 440.0, y: 600.0 };
        let (sx, sy) = HeroParallax::INPUT_SCALE;
        let offset = raw.scaled(sx, sy);
        assert!(approx(offset.x, 308.0));
        assert!(approx(offset.y, 390.0));

        let hero = HeroParallax::from_offset(PointerOffset { x: 660.0, y: 720.0 });
        assert!(approx(hero.backdrop.x, 11.0));
        assert!(approx(hero.backdrop.y, 10.0));
        assert!(approx(hero.plate.x, 660.0 / 28.0));
        assert!(approx(hero.accents.y, 36.0));
        assert!(approx(hero.rotate_y_deg, -3.0));
        assert!(approx(hero.rotate_x_deg, 2.4));
    }

    #[test]
    fn test_blob_and_garnish_layers() {
        let offset = PointerOffset { x: 420.0, y: 760.0 };
        assert_eq!(blob_float(offset), Translate { x: 30.0, y: 38.0 });
        assert_eq!(blob_slow(offset), Translate { x: 14.0, y: 20.0 });
        assert_eq!(menu_garnish(offset), Translate { x: 420.0 / 22.0, y: 0.0 });
    }

    #[test]
    fn test_reduced_motion_spring_snaps() {
        let rigid = SpringConfig::for_preference(true);
        let gentle = SpringConfig::for_preference(false);
        assert_eq!(rigid.follow_factor(), 1.0);
        assert!(gentle.follow_factor() < 0.5);

        let target = PointerOffset { x: 100.0, y: -40.0 };
        let stepped = follow(PointerOffset::default(), target, gentle);
        assert!(stepped.x > 0.0 && stepped.x < 100.0);
        assert!(stepped.y < 0.0 && stepped.y > -40.0);
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Translate { x: 1.0, y: -2.5 }.to_css(), "translate3d(1.00px, -2.50px, 0)");
    }
}
