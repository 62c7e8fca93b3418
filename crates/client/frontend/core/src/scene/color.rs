//! Scene colors.
use std::fmt;

use rand::Rng;

/// Background the battlefield is cleared to each frame.
pub const BACKGROUND: Rgb = Rgb::new(0x34, 0x49, 0x5e);
pub const GROUND: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
pub const ENEMY: Rgb = Rgb::new(0xf5, 0x57, 0x6c);
pub const HIT_PARTICLE: Rgb = Rgb::new(0xff, 0x6b, 0x6b);
pub const HEALTH_HIGH: Rgb = Rgb::new(0x4c, 0xaf, 0x50);
pub const HEALTH_MID: Rgb = Rgb::new(0xff, 0x98, 0x00);
pub const HEALTH_LOW: Rgb = Rgb::new(0xf4, 0x43, 0x36);
pub const HEALTH_TRACK: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

const WARRIOR_HUE_MIN: f64 = 200.0;
const WARRIOR_HUE_MAX: f64 = 260.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts HSL (hue in degrees, saturation and lightness in `[0, 1]`).
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::new(channel(r), channel(g), channel(b))
    }

    /// Linear blend toward `other`; `alpha = 1` keeps `self`.
    pub fn blend(self, other: Rgb, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// How a translucent draw of this color looks over the background.
    pub fn faded(self, alpha: f64) -> Self {
        self.blend(BACKGROUND, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Random warrior color in the blue-violet band.
pub fn warrior_color(rng: &mut impl Rng) -> Rgb {
    Rgb::from_hsl(rng.random_range(WARRIOR_HUE_MIN..WARRIOR_HUE_MAX), 0.7, 0.5)
}

/// Health bar color for a health fraction in `[0, 1]`.
pub fn health_bar_color(fraction: f64) -> Rgb {
    if fraction > 0.5 {
        HEALTH_HIGH
    } else if fraction > 0.25 {
        HEALTH_MID
    } else {
        HEALTH_LOW
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl(42.0, 0.0, 1.0), WHITE);
    }

    #[test]
    fn warrior_colors_are_blue_dominant() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..64 {
            let color = warrior_color(&mut rng);
            assert!(color.b > color.g);
            assert!(color.b >= color.r);
        }
    }

    #[test]
    fn health_bar_thresholds() {
        assert_eq!(health_bar_color(1.0), HEALTH_HIGH);
        assert_eq!(health_bar_color(0.5), HEALTH_MID);
        assert_eq!(health_bar_color(0.26), HEALTH_MID);
        assert_eq!(health_bar_color(0.25), HEALTH_LOW);
        assert_eq!(health_bar_color(0.0), HEALTH_LOW);
    }

    #[test]
    fn fade_reaches_background() {
        assert_eq!(ENEMY.faded(1.0), ENEMY);
        assert_eq!(ENEMY.faded(0.0), BACKGROUND);
        assert_eq!(ENEMY.to_string(), "#f5576c");
    }
}
