//! Hex color parsing and HSL lightness adjustment.
//!
//! Values that are not `#rgb` / `#rrggbb` hex colors (named colors, `rgba()`,
//! CSS variables) pass through every helper unchanged.

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color; all components in `0.0..=1.0` (hue as a fraction of a turn).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parse `#rgb` or `#rrggbb` (case-insensitive).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(hex[i..i + 1].repeat(2).as_str());
                Some(Rgb {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                })
            }
            6 => Some(Rgb {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h / 6.0, s, l }
    }
}

impl Hsl {
    pub fn to_rgb(&self) -> Rgb {
        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        if self.s == 0.0 {
            let v = to_u8(self.l);
            return Rgb { r: v, g: v, b: v };
        }
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        Rgb {
            r: to_u8(hue_to_channel(p, q, self.h + 1.0 / 3.0)),
            g: to_u8(hue_to_channel(p, q, self.h)),
            b: to_u8(hue_to_channel(p, q, self.h - 1.0 / 3.0)),
        }
    }

    /// `"H S% L%"`, the space-separated form used by CSS variable themes.
    pub fn to_triplet(&self) -> String {
        format!(
            "{} {}% {}%",
            (self.h * 360.0).round() as u32 % 360,
            (self.s * 100.0).round() as u32,
            (self.l * 100.0).round() as u32
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn adjust_lightness(color: &str, delta: f64) -> String {
    match Rgb::from_hex(color) {
        Some(rgb) => {
            let mut hsl = rgb.to_hsl();
            hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
            hsl.to_rgb().to_hex()
        }
        None => color.to_string(),
    }
}

/// Raise HSL lightness by `amount` (0.0 to 1.0).
pub fn lighten(color: &str, amount: f64) -> String {
    adjust_lightness(color, amount)
}

/// Lower HSL lightness by `amount` (0.0 to 1.0).
pub fn darken(color: &str, amount: f64) -> String {
    adjust_lightness(color, -amount)
}

/// HSL triplet for a hex color, `None` for anything else.
pub fn hsl_triplet(color: &str) -> Option<String> {
    Rgb::from_hex(color).map(|rgb| rgb.to_hsl().to_triplet())
}
