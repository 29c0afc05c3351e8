use clap::Parser;

use crate::{core::catalog::Catalog, prelude::*, tables::build_vehicles_table};

#[derive(Parser)]
pub struct VehiclesArgs {
    /// Print the catalog as JSON instead of the table.
    #[clap(long)]
    json: bool,
}

impl VehiclesArgs {
    pub fn run(self, catalog: &Catalog) -> Result {
        if self.json {
            let vehicles: Vec<_> = catalog.iter().collect();
            println!("{}", serde_json::to_string_pretty(&vehicles)?);
        } else {
            println!("{}", build_vehicles_table(catalog, None));
        }
        Ok(())
    }
}
