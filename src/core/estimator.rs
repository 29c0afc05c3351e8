use serde::Serialize;

use crate::{
    core::catalog::Vehicle,
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        percentage::Percentage,
        rate::KilowattHourRate,
    },
};

/// Shown when both the vehicle and the price are in place, but the range is empty or inverted.
pub const RANGE_GUIDANCE: &str =
    "Please ensure end battery level is greater than start battery level.";

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Calculation {
    pub energy_required: KilowattHours,
    pub total_cost: Cost,
}

impl Calculation {
    pub fn summary(self) -> Summary {
        Summary {
            energy_required: self.energy_required.to_fixed_string(),
            total_cost: self.total_cost.to_fixed_string(),
        }
    }
}

/// Calculation rounded for display.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub energy_required: String,
    pub total_cost: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Estimate {
    /// The vehicle or a valid price is missing, nothing to show yet.
    Incomplete,

    /// The end level is not above the start level.
    InvalidRange,

    Ready(Calculation),
}

impl Estimate {
    pub const fn calculation(self) -> Option<Calculation> {
        match self {
            Self::Ready(calculation) => Some(calculation),
            Self::Incomplete | Self::InvalidRange => None,
        }
    }

    pub const fn guidance(self) -> Option<&'static str> {
        match self {
            Self::InvalidRange => Some(RANGE_GUIDANCE),
            Self::Incomplete | Self::Ready(_) => None,
        }
    }
}

/// Machine-readable rendition of an [`Estimate`].
#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Report {
    Incomplete,
    InvalidRange { message: &'static str },
    Ready(Summary),
}

impl From<Estimate> for Report {
    fn from(estimate: Estimate) -> Self {
        match estimate {
            Estimate::Incomplete => Self::Incomplete,
            Estimate::InvalidRange => Self::InvalidRange { message: RANGE_GUIDANCE },
            Estimate::Ready(calculation) => Self::Ready(calculation.summary()),
        }
    }
}

/// Parse the user-entered price per kWh.
///
/// Returns `None` for blank, unparseable, non-finite, or negative input.
pub fn parse_price(text: &str) -> Option<KilowattHourRate> {
    let price: f64 = text.trim().parse().ok()?;
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    // Turns `-0` into `0`, so that the cost never renders as `-0.00`.
    Some(KilowattHourRate(price.abs()))
}

/// Estimate the energy and the cost of charging the vehicle from `start` to `end`.
pub fn estimate(
    vehicle: Option<&Vehicle>,
    price: &str,
    start: Percentage,
    end: Percentage,
) -> Estimate {
    let Some(vehicle) = vehicle else {
        debug!("no vehicle selected");
        return Estimate::Incomplete;
    };
    if price.is_empty() {
        debug!("no price entered");
        return Estimate::Incomplete;
    }
    let Some(rate) = parse_price(price) else {
        debug!(price, "invalid price");
        return Estimate::Incomplete;
    };
    let Some(span) = start.span_to(end) else {
        debug!(%start, %end, "end level is not above the start level");
        return Estimate::InvalidRange;
    };
    let energy_required = vehicle.battery_capacity * span;
    Estimate::Ready(Calculation { energy_required, total_cost: energy_required * rate })
}
