use clap::Parser;

use crate::{
    core::{
        catalog::Catalog,
        estimator::Report,
        selection::Selection,
        session::Session,
    },
    prelude::*,
    quantity::percentage::Percentage,
    tables::build_estimate_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// Vehicle ID from the catalog, see the `vehicles` command.
    #[clap(long, env = "EV_VEHICLE")]
    vehicle: Option<String>,

    /// Charging price per kWh, for example: `0.35`.
    #[clap(long, env = "EV_CHARGING_PRICE", allow_hyphen_values = true)]
    price: Option<String>,

    /// Battery level before charging, percent.
    #[clap(
        long = "start",
        env = "EV_START_BATTERY",
        default_value_t = Selection::DEFAULT_START_BATTERY
    )]
    start_battery: Percentage,

    /// Battery level after charging, percent.
    #[clap(
        long = "end",
        env = "EV_END_BATTERY",
        default_value_t = Selection::DEFAULT_END_BATTERY
    )]
    end_battery: Percentage,

    /// Print a JSON report instead of the table.
    #[clap(long)]
    json: bool,
}

impl EstimateArgs {
    #[instrument(skip_all, name = "Estimating…")]
    pub fn run(self, catalog: &Catalog) -> Result {
        let selection = Selection::builder()
            .maybe_vehicle_id(self.vehicle)
            .price(self.price.unwrap_or_default())
            .start_battery(self.start_battery)
            .end_battery(self.end_battery)
            .build();
        let session = Session::with_selection(catalog, selection)?;
        let estimate = session.estimate();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&Report::from(estimate))?);
        } else {
            println!("{}", build_estimate_table(session.vehicle(), session.selection(), estimate));
        }
        Ok(())
    }
}
