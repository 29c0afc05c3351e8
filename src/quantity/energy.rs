use std::ops::Mul;

use crate::quantity::{cost::Cost, percentage::Percentage, rate::KilowattHourRate};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        self * percentage.to_ratio()
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}
