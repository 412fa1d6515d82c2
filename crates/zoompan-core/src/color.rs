//! RGB colors built from integer literals and textual color codes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoompanError};

/// Opaque 24-bit color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color from `0xRRGGBB`; bits above the low 24 are ignored.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse bare radix-16 digits such as `"00FF00"` (an optional sign is allowed).
    pub fn parse_hex(s: &str) -> Result<Self> {
        let value = i32::from_str_radix(s, 16)
            .map_err(|e| ZoompanError::InvalidColor(format!("{s:?}: {e}")))?;
        Ok(Self::from_i32(value))
    }

    /// Decode a color code with integer-literal prefixes.
    ///
    /// `0x`, `0X` and `#` select hexadecimal, a leading `0` selects octal,
    /// anything else is decimal. An optional `+` or `-` may precede the
    /// prefix. The value must fit a signed 32-bit integer.
    pub fn decode(s: &str) -> Result<Self> {
        decode_i32(s)
            .map(Self::from_i32)
            .ok_or_else(|| ZoompanError::InvalidColor(s.to_string()))
    }

    fn from_i32(value: i32) -> Self {
        Self::from_u32(value as u32)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ZoompanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

fn decode_i32(s: &str) -> Option<i32> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(d) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))
    {
        (16, d)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// A labelled color for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub label: &'static str,
    pub color: Rgb,
}

/// The demo set, one swatch per construction route.
pub fn demo_swatches() -> Vec<Swatch> {
    vec![
        Swatch {
            label: "Rgb::from_u32(0xFF0000)",
            color: Rgb::from_u32(0xFF0000),
        },
        Swatch {
            label: "Rgb::from_u32(0x88_88_88)",
            color: Rgb::from_u32(0x88_88_88),
        },
        Swatch {
            label: "Rgb::parse_hex(\"00FF00\")",
            color: Rgb::new(0x00, 0xFF, 0x00),
        },
        Swatch {
            label: "Rgb::decode(\"#0000FF\")",
            color: Rgb::new(0x00, 0x00, 0xFF),
        },
        Swatch {
            label: "\"#00FFFF\".parse::<Rgb>()",
            color: Rgb::new(0x00, 0xFF, 0xFF),
        },
        Swatch {
            label: "<span style='color: #FF00FF'>",
            color: Rgb::new(0xFF, 0x00, 0xFF),
        },
    ]
}
