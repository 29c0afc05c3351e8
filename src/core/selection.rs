use crate::quantity::percentage::Percentage;

/// Current state of the form controls.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, bon::Builder)]
pub struct Selection {
    #[builder(into)]
    pub vehicle_id: Option<String>,

    /// Raw price text as typed in, validated only when estimating.
    #[builder(into, default)]
    pub price: String,

    #[builder(default = Selection::DEFAULT_START_BATTERY)]
    pub start_battery: Percentage,

    #[builder(default = Selection::DEFAULT_END_BATTERY)]
    pub end_battery: Percentage,
}

impl Default for Selection {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Selection {
    pub const DEFAULT_START_BATTERY: Percentage = Percentage::saturating_from(20);
    pub const DEFAULT_END_BATTERY: Percentage = Percentage::saturating_from(80);

    /// Move the start slider, pushing the end level up when needed.
    pub fn set_start_battery(&mut self, start: Percentage) {
        (self.start_battery, self.end_battery) = adjust_on_start_change(start, self.end_battery);
    }

    /// Move the end slider, pushing the start level down when needed.
    pub fn set_end_battery(&mut self, end: Percentage) {
        (self.start_battery, self.end_battery) = adjust_on_end_change(self.start_battery, end);
    }

    /// Signed charging range in percentage points.
    pub fn charging_range(&self) -> i16 {
        self.start_battery.points_to(self.end_battery)
    }
}

/// Keep the end level above the freshly moved start level.
pub fn adjust_on_start_change(start: Percentage, end: Percentage) -> (Percentage, Percentage) {
    if start >= end { (start, start.saturating_add(1)) } else { (start, end) }
}

/// Keep the start level below the freshly moved end level.
pub fn adjust_on_end_change(start: Percentage, end: Percentage) -> (Percentage, Percentage) {
    if end <= start { (end.saturating_sub(1), end) } else { (start, end) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> Percentage {
        Percentage::try_from(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.vehicle_id, None);
        assert_eq!(selection.price, "");
        assert_eq!(selection.start_battery, level(20));
        assert_eq!(selection.end_battery, level(80));
        assert_eq!(selection.charging_range(), 60);
    }

    #[test]
    fn test_start_below_end_is_kept() {
        assert_eq!(adjust_on_start_change(level(30), level(80)), (level(30), level(80)));
    }

    #[test]
    fn test_start_onto_end_pushes_end() {
        assert_eq!(adjust_on_start_change(level(80), level(80)), (level(80), level(81)));
        assert_eq!(adjust_on_start_change(level(90), level(80)), (level(90), level(91)));
    }

    #[test]
    fn test_start_at_full_caps_end() {
        assert_eq!(adjust_on_start_change(level(100), level(80)), (level(100), level(100)));
    }

    #[test]
    fn test_end_above_start_is_kept() {
        assert_eq!(adjust_on_end_change(level(20), level(50)), (level(20), level(50)));
    }

    #[test]
    fn test_end_onto_start_pushes_start() {
        assert_eq!(adjust_on_end_change(level(20), level(20)), (level(19), level(20)));
        assert_eq!(adjust_on_end_change(level(20), level(10)), (level(9), level(10)));
    }

    #[test]
    fn test_end_at_zero_floors_start() {
        assert_eq!(adjust_on_end_change(level(20), level(0)), (level(0), level(0)));
    }

    #[test]
    fn test_setters() {
        let mut selection = Selection::builder().price("0.30").build();
        selection.set_start_battery(level(95));
        assert_eq!((selection.start_battery, selection.end_battery), (level(95), level(96)));
        selection.set_end_battery(level(5));
        assert_eq!((selection.start_battery, selection.end_battery), (level(4), level(5)));
        assert_eq!(selection.charging_range(), 1);
    }

    #[test]
    fn test_ordering_holds_after_any_move() {
        let mut selection = Selection::default();
        for value in 0..=100 {
            selection.set_start_battery(level(value));
            assert!(
                selection.start_battery < selection.end_battery || value == 100,
                "{selection:?}",
            );
            selection.set_end_battery(level(100 - value));
            assert!(
                selection.start_battery < selection.end_battery || value == 100,
                "{selection:?}",
            );
        }
    }
}
