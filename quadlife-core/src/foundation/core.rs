use std::fmt;

use crate::foundation::error::{QuadlifeError, QuadlifeResult};

/// Contribution-intensity tier of a cell.
///
/// Buckets drive both the palette and the reproduction rule: a spawned cell inherits a bucket
/// from its parents, never a raw count.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// No contributions.
    Dead,
    /// 1 to 4 contributions.
    Low,
    /// 5 to 9 contributions.
    Medium,
    /// 10 to 14 contributions.
    High,
    /// 15 or more contributions.
    Max,
}

impl Bucket {
    /// Alive buckets in ascending order.
    pub const ALIVE: [Bucket; 4] = [Bucket::Low, Bucket::Medium, Bucket::High, Bucket::Max];

    /// All buckets in ascending order.
    pub const ALL: [Bucket; 5] = [
        Bucket::Dead,
        Bucket::Low,
        Bucket::Medium,
        Bucket::High,
        Bucket::Max,
    ];

    /// Classify a contribution count.
    pub fn of(count: u32) -> Self {
        match count {
            0 => Bucket::Dead,
            1..=4 => Bucket::Low,
            5..=9 => Bucket::Medium,
            10..=14 => Bucket::High,
            _ => Bucket::Max,
        }
    }

    /// Ordinal in `0..=4`.
    pub fn index(self) -> usize {
        match self {
            Bucket::Dead => 0,
            Bucket::Low => 1,
            Bucket::Medium => 2,
            Bucket::High => 3,
            Bucket::Max => 4,
        }
    }

    /// Count assigned to a cell spawned into this bucket (`index * 5 - 1`).
    pub fn spawn_count(self) -> u32 {
        (self.index() as u32 * 5).saturating_sub(1)
    }

    /// Whether this bucket represents a live cell.
    pub fn is_alive(self) -> bool {
        self != Bucket::Dead
    }
}

/// Straight (non-premultiplied) 8-bit sRGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> QuadlifeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> QuadlifeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| QuadlifeError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if s.len() != 6 || !s.is_ascii() {
            return Err(QuadlifeError::validation(
                "hex color must be #RRGGBB (case-insensitive)",
            ));
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Add `round(2.55 * percent)` to every channel, saturating at 255.
    pub fn lighten(self, percent: f64) -> Self {
        let amt = (2.55 * percent).round().clamp(0.0, 255.0) as u8;
        Self {
            r: self.r.saturating_add(amt),
            g: self.g.saturating_add(amt),
            b: self.b.saturating_add(amt),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
