quantity!(
    /// Euro per kilowatt-hour.
    KilowattHourRate, suffix: "€/kWh", precision: 2
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KilowattHourRate(0.35).to_string(), "0.35 €/kWh");
        assert_eq!(format!("{:?}", KilowattHourRate(0.3)), "0.30€/kWh");
    }
}
