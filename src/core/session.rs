use crate::{
    core::{
        catalog::{Catalog, Vehicle},
        estimator::{Estimate, estimate},
        selection::Selection,
    },
    prelude::*,
    quantity::percentage::Percentage,
};

/// Interactive calculator state: every mutation returns the freshly derived estimate.
#[must_use]
pub struct Session<'c> {
    catalog: &'c Catalog,
    selection: Selection,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog, selection: Selection::default() }
    }

    /// Start from the existing selection, which must refer to a known vehicle, if any.
    pub fn with_selection(catalog: &'c Catalog, selection: Selection) -> Result<Self> {
        if let Some(vehicle_id) = &selection.vehicle_id {
            ensure!(catalog.get(vehicle_id).is_some(), "unknown vehicle `{vehicle_id}`");
        }
        Ok(Self { catalog, selection })
    }

    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn vehicle(&self) -> Option<&'c Vehicle> {
        self.selection.vehicle_id.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn estimate(&self) -> Estimate {
        estimate(
            self.vehicle(),
            &self.selection.price,
            self.selection.start_battery,
            self.selection.end_battery,
        )
    }

    /// Select the vehicle by its ID. An unknown ID leaves the selection untouched.
    pub fn select_vehicle(&mut self, id: &str) -> Result<Estimate> {
        let vehicle = self.catalog.get(id).with_context(|| format!("unknown vehicle `{id}`"))?;
        debug!(id, vehicle = %vehicle.name, "selected the vehicle");
        self.selection.vehicle_id = Some(vehicle.id.clone());
        Ok(self.estimate())
    }

    pub fn clear_vehicle(&mut self) -> Estimate {
        self.selection.vehicle_id = None;
        self.estimate()
    }

    pub fn set_price(&mut self, price: impl Into<String>) -> Estimate {
        self.selection.price = price.into();
        self.estimate()
    }

    pub fn set_start_battery(&mut self, start: Percentage) -> Estimate {
        self.selection.set_start_battery(start);
        self.estimate()
    }

    pub fn set_end_battery(&mut self, end: Percentage) -> Estimate {
        self.selection.set_end_battery(end);
        self.estimate()
    }
}
