//! Colour type and the derivations the renderer needs (hover darkening, label contrast).

use std::fmt;

/// Brightness below which a fill counts as dark (YIQ scale, 0..=255).
///
/// Raised from the usual 128: at 128 the triple-letter blue `#548dd1`
/// (brightness ~131.7) would get black text instead of white.
pub const DARK_THRESHOLD: f64 = 150.0;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// YIQ perceived brightness.
    pub fn brightness(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    pub fn is_dark(self) -> bool {
        self.brightness() < DARK_THRESHOLD
    }

    /// Text colour readable on top of `self`.
    ///
    /// ```
    /// use scrabble_board_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex(0x548dd1).contrast_text(), Rgb::WHITE);
    /// assert_eq!(Rgb::from_hex(0xb8cce4).contrast_text(), Rgb::BLACK);
    /// ```
    pub fn contrast_text(self) -> Rgb {
        if self.is_dark() {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }

    /// Same hue and saturation, lightness reduced by `ratio` of itself.
    pub fn darken(self, ratio: f64) -> Rgb {
        let (h, s, l) = self.to_hsl();
        Rgb::from_hsl(h, s, l - l * ratio)
    }

    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        h = (h * 60.0).min(360.0);
        if h < 0.0 {
            h += 360.0;
        }

        let l = (min + max) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        (h, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64) -> Rgb {
        if s == 0.0 {
            let v = channel(l);
            return Rgb::new(v, v, v);
        }

        let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t1 = 2.0 * l - t2;
        let h = h / 360.0;

        let hue = |offset: f64| {
            let mut t = h + offset;
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if 6.0 * t < 1.0 {
                t1 + (t2 - t1) * 6.0 * t
            } else if 2.0 * t < 1.0 {
                t2
            } else if 3.0 * t < 2.0 {
                t1 + (t2 - t1) * (2.0 / 3.0 - t) * 6.0
            } else {
                t1
            }
        };

        Rgb::new(
            channel(hue(1.0 / 3.0)),
            channel(hue(0.0)),
            channel(hue(-1.0 / 3.0)),
        )
    }
}

fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrips_through_display() {
        let c = Rgb::from_hex(0xfef1ba);
        assert_eq!(c, Rgb::new(0xfe, 0xf1, 0xba));
        assert_eq!(c.to_string(), "#fef1ba");
    }

    #[test]
    fn darken_keeps_greys_grey() {
        let grey = Rgb::new(200, 200, 200).darken(0.5);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
        assert_eq!(grey, Rgb::new(100, 100, 100));
    }

    #[test]
    fn darken_by_zero_is_identity() {
        for hex in [0xfef1ba, 0xbc504d, 0xb8cce4, 0x548dd1, 0xb7cbe3] {
            let c = Rgb::from_hex(hex);
            assert_eq!(c.darken(0.0), c);
        }
    }

    #[test]
    fn darken_reduces_brightness() {
        for hex in [0xfef1ba, 0xbc504d, 0xb8cce4, 0x548dd1, 0xb7cbe3] {
            let c = Rgb::from_hex(hex);
            assert!(c.darken(0.5).brightness() < c.brightness());
        }
    }

    #[test]
    fn contrast_follows_brightness_threshold() {
        // 0x548dd1 sits at ~131.7, below the threshold.
        assert!(Rgb::from_hex(0x548dd1).is_dark());
        assert!(Rgb::from_hex(0xbc504d).is_dark());
        assert!(!Rgb::from_hex(0xb8cce4).is_dark());
        assert!(!Rgb::from_hex(0xb7cbe3).is_dark());
        assert!(!Rgb::from_hex(0xfef1ba).is_dark());

        assert_eq!(Rgb::WHITE.contrast_text(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.contrast_text(), Rgb::WHITE);
    }

    #[test]
    fn triple_letter_blue_needs_the_raised_threshold() {
        let tl = Rgb::from_hex(0x548dd1);
        assert!(tl.brightness() > 128.0);
        assert!(tl.brightness() < DARK_THRESHOLD);
        assert_eq!(tl.contrast_text(), Rgb::WHITE);
    }
}
