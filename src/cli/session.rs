use std::io::{BufRead, Write, stdin, stdout};

use clap::{Parser, Subcommand};

use crate::{
    core::{catalog::Catalog, estimator::Estimate, selection::Selection, session::Session},
    prelude::*,
    quantity::percentage::Percentage,
    tables::{build_estimate_table, build_vehicles_table},
};

#[derive(Parser)]
pub struct SessionArgs {
    /// Pre-select the vehicle by its ID.
    #[clap(long, env = "EV_VEHICLE")]
    vehicle: Option<String>,

    /// Pre-fill the charging price per kWh.
    #[clap(long, env = "EV_CHARGING_PRICE", allow_hyphen_values = true)]
    price: Option<String>,
}

impl SessionArgs {
    pub fn run(self, catalog: &Catalog) -> Result {
        let selection = Selection::builder()
            .maybe_vehicle_id(self.vehicle)
            .price(self.price.unwrap_or_default())
            .build();
        let mut session = Session::with_selection(catalog, selection)?;
        print_estimate(&session, session.estimate());

        let mut lines = stdin().lock().lines();
        loop {
            print!("> ");
            stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            let words = line.split_whitespace().collect::<Vec<_>>();
            if words.is_empty() {
                continue;
            }
            match Prompt::try_parse_from(words) {
                Ok(Prompt { input: Input::Quit }) => break,
                Ok(Prompt { input }) => match input.apply(&mut session) {
                    Ok(Some(estimate)) => print_estimate(&session, estimate),
                    Ok(None) => {}
                    Err(error) => error!("{error:#}"),
                },
                Err(error) => error.print()?,
            }
        }

        info!("bye!");
        Ok(())
    }
}

fn print_estimate(session: &Session, estimate: Estimate) {
    println!("{}", build_estimate_table(session.vehicle(), session.selection(), estimate));
}

/// A single line typed into the session prompt.
#[derive(Parser)]
#[command(multicall = true)]
struct Prompt {
    #[command(subcommand)]
    input: Input,
}

#[derive(Subcommand)]
enum Input {
    /// Select the vehicle by its ID, or clear the selection when no ID is given.
    Vehicle { id: Option<String> },

    /// Enter the charging price per kWh, or clear it when no price is given.
    Price {
        #[arg(allow_hyphen_values = true)]
        price: Option<String>,
    },

    /// Move the start battery level.
    Start { level: Percentage },

    /// Move the end battery level.
    End { level: Percentage },

    /// Show the current inputs and the estimate.
    Show,

    /// List the vehicles from the catalog.
    Vehicles,

    /// Leave the session.
    #[command(alias = "exit")]
    Quit,
}

impl Input {
    /// Apply the input to the session, returning the new estimate if there is one to show.
    fn apply(self, session: &mut Session) -> Result<Option<Estimate>> {
        let estimate = match self {
            Self::Vehicle { id: Some(id) } => session.select_vehicle(&id)?,
            Self::Vehicle { id: None } => session.clear_vehicle(),
            Self::Price { price } => session.set_price(price.unwrap_or_default()),
            Self::Start { level } => session.set_start_battery(level),
            Self::End { level } => session.set_end_battery(level),
            Self::Show => session.estimate(),
            Self::Vehicles => {
                let selected_id = session.selection().vehicle_id.as_deref();
                println!("{}", build_vehicles_table(session.catalog(), selected_id));
                return Ok(None);
            }
            Self::Quit => return Ok(None),
        };
        Ok(Some(estimate))
    }
}
