//! Leaf value payloads.

/// A number with an optional unit: `10px`, `50%`, `1.5`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    pub value: f64,
    pub unit: Option<String>,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Number { value, unit: None }
    }

    pub fn with_unit(value: f64, unit: impl Into<String>) -> Self {
        Number {
            value,
            unit: Some(unit.into()),
        }
    }

    /// The unit, or `""` for a unitless number.
    pub fn unit_str(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}

/// An RGB color with alpha. Channels are kept unclamped until emission so
/// intermediate arithmetic (`#fff + #111 - #222`) does not lose range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub rgb: [f64; 3],
    pub alpha: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color {
            rgb: [r, g, b],
            alpha: 1.0,
        }
    }

    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Color {
            rgb: [r, g, b],
            alpha,
        }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f64::from);
        match digits.len() {
            3 => {
                let mut rgb = [0.0; 3];
                for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
                    *slot = channel(&format!("{c}{c}"))?;
                }
                Some(Color { rgb, alpha: 1.0 })
            }
            6 => Some(Color {
                rgb: [
                    channel(digits.get(0..2)?)?,
                    channel(digits.get(2..4)?)?,
                    channel(digits.get(4..6)?)?,
                ],
                alpha: 1.0,
            }),
            _ => None,
        }
    }

    /// Channels rounded and clamped to `0..=255`.
    pub fn clamped_rgb(&self) -> [u8; 3] {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is rounded and clamped to 0..=255 first"
        )]
        let clamp = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        [clamp(self.rgb[0]), clamp(self.rgb[1]), clamp(self.rgb[2])]
    }

    /// Alpha clamped to `0..=1`.
    pub fn clamped_alpha(&self) -> f64 {
        self.alpha.clamp(0.0, 1.0)
    }
}

/// A string literal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quoted {
    pub value: String,
    /// `'"'` or `'\''`.
    pub quote: char,
    /// Escaped strings (`~"..."` or the result of `e()`) emit without quotes.
    pub escaped: bool,
}

impl Quoted {
    pub fn new(value: impl Into<String>, quote: char) -> Self {
        Quoted {
            value: value.into(),
            quote,
            escaped: false,
        }
    }

    pub fn escaped(value: impl Into<String>) -> Self {
        Quoted {
            value: value.into(),
            quote: '"',
            escaped: true,
        }
    }
}
