use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    catalog::{Catalog, Vehicle},
    estimator::{Estimate, parse_price},
    selection::Selection,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_vehicles_table(catalog: &Catalog, selected_id: Option<&str>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Vehicle"]);
    for vehicle in catalog.iter() {
        let is_selected = selected_id == Some(vehicle.id.as_str());
        table.add_row(vec![
            Cell::new(&vehicle.id).add_attribute(Attribute::Dim),
            Cell::new(vehicle).fg(if is_selected { Color::Green } else { Color::Reset }),
        ]);
    }
    table
}

pub fn build_estimate_table(
    vehicle: Option<&Vehicle>,
    selection: &Selection,
    estimate: Estimate,
) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Vehicle"),
        vehicle.map_or_else(
            || Cell::new("not selected").add_attribute(Attribute::Dim),
            |vehicle| Cell::new(&vehicle.name),
        ),
    ]);
    if let Some(vehicle) = vehicle {
        table.add_row(vec![
            Cell::new("Battery capacity"),
            Cell::new(format!("{} kWh", vehicle.battery_capacity.0)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Charging price"),
        match parse_price(&selection.price) {
            Some(rate) => Cell::new(rate),
            None if selection.price.is_empty() => {
                Cell::new("not entered").add_attribute(Attribute::Dim)
            }
            None => Cell::new(format!("invalid: `{}`", selection.price)).fg(Color::Red),
        },
    ]);
    table.add_row(vec![Cell::new("Start battery level"), Cell::new(selection.start_battery)]);
    table.add_row(vec![Cell::new("End battery level"), Cell::new(selection.end_battery)]);
    table.add_row(vec![
        Cell::new("Charging range"),
        Cell::new(format!("{}%", selection.charging_range())).fg(
            if selection.charging_range() > 0 { Color::Reset } else { Color::DarkYellow },
        ),
    ]);

    if let Some(calculation) = estimate.calculation() {
        table.add_row(vec![
            Cell::new("Energy required").add_attribute(Attribute::Bold),
            Cell::new(calculation.energy_required).set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new("Total cost").add_attribute(Attribute::Bold),
            Cell::new(calculation.total_cost)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green),
        ]);
    }
    if let Some(guidance) = estimate.guidance() {
        table.add_row(vec![Cell::new("Hint"), Cell::new(guidance).fg(Color::DarkYellow)]);
    }
    table
}
