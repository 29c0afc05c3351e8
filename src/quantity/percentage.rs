use std::{
    fmt::{Debug, Formatter},
    str::FromStr,
};

use crate::prelude::*;

/// Battery state of charge, always within `0..=100`.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
#[display("{_0}%")]
pub struct Percentage(u8);

impl Percentage {
    pub const FULL: Self = Self(100);

    /// Build a percentage, capping anything above 100%.
    pub const fn saturating_from(value: u8) -> Self {
        if value > Self::FULL.0 { Self::FULL } else { Self(value) }
    }

    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Add percentage points, stopping at 100%.
    pub fn saturating_add(self, points: u8) -> Self {
        Self(self.0.saturating_add(points).min(Self::FULL.0))
    }

    /// Subtract percentage points, stopping at 0%.
    pub const fn saturating_sub(self, points: u8) -> Self {
        Self(self.0.saturating_sub(points))
    }

    /// Signed difference in percentage points, `end - self`.
    pub fn points_to(self, end: Self) -> i16 {
        i16::from(end.0) - i16::from(self.0)
    }

    /// Positive span between the two levels, or `None` when `end` is not above `self`.
    pub fn span_to(self, end: Self) -> Option<Self> {
        end.0.checked_sub(self.0).filter(|points| *points != 0).map(Self)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ensure!(value <= Self::FULL.0, "battery level must be within 0..=100, got {value}");
        Ok(Self(value))
    }
}

impl FromStr for Percentage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .trim_end_matches('%')
            .parse()
            .with_context(|| format!("`{s}` is not a battery level"))?;
        Self::try_from(value)
    }
}
