use std::{
    ffi::OsStr,
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::energy::KilowattHours};

const BUILT_IN: &str = include_str!("../../data/vehicles.json");

#[must_use]
#[derive(Clone, Debug, Deserialize, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[builder(into)]
    pub id: String,

    #[builder(into)]
    pub name: String,

    pub battery_capacity: KilowattHours,
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} kWh)", self.name, self.battery_capacity.0)
    }
}

/// TOML catalogs wrap the list into a `[[vehicles]]` array of tables.
#[derive(Deserialize)]
struct CatalogFile {
    vehicles: Vec<Vehicle>,
}

/// Validated, read-only list of vehicles in their original order.
#[must_use]
#[derive(Debug)]
pub struct Catalog(Vec<Vehicle>);

impl Catalog {
    /// Load the catalog from the file, or fall back to the one embedded in the binary.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Self::read_from(path)?,
            None => Self::built_in()?,
        };
        info!(n_vehicles = catalog.0.len(), "loaded the catalog");
        Ok(catalog)
    }

    pub fn built_in() -> Result<Self> {
        Self::from_json(BUILT_IN).context("the built-in catalog is broken")
    }

    #[instrument(skip_all, fields(path = %path.display()), name = "Reading the catalog…")]
    pub fn read_from(path: &Path) -> Result<Self> {
        let parse: fn(&str) -> Result<Self> = match path.extension().and_then(OsStr::to_str) {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => bail!("`{}` is neither a JSON nor a TOML file", path.display()),
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        parse(&contents).with_context(|| format!("invalid catalog `{}`", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Self::try_from(serde_json::from_str::<Vec<Vehicle>>(contents)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Self::try_from(toml::from_str::<CatalogFile>(contents)?.vehicles)
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.0.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.0.iter()
    }
}

impl TryFrom<Vec<Vehicle>> for Catalog {
    type Error = Error;

    fn try_from(vehicles: Vec<Vehicle>) -> Result<Self> {
        ensure!(!vehicles.is_empty(), "the catalog contains no vehicles");
        for vehicle in &vehicles {
            ensure!(!vehicle.id.trim().is_empty(), "`{}` has a blank id", vehicle.name);
            ensure!(
                vehicle.battery_capacity.0.is_finite()
                    && vehicle.battery_capacity > KilowattHours::ZERO,
                "`{}` has a non-positive battery capacity: {:?}",
                vehicle.id,
                vehicle.battery_capacity,
            );
        }
        if let Some(id) = vehicles.iter().map(|vehicle| vehicle.id.as_str()).duplicates().next() {
            bail!("duplicate vehicle id `{id}`");
        }
        Ok(Self(vehicles))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn vehicle(id: &str, battery_capacity: f64) -> Vehicle {
        Vehicle::builder()
            .id(id)
            .name(id.to_uppercase())
            .battery_capacity(KilowattHours(battery_capacity))
            .build()
    }

    #[test]
    fn test_built_in_ok() -> Result {
        let catalog = Catalog::built_in()?;
        assert!(catalog.iter().count() > 1);
        let vehicle = catalog.get("tesla-model-3-lr").unwrap();
        assert_abs_diff_eq!(vehicle.battery_capacity.0, 75.0);
        Ok(())
    }

    #[test]
    fn test_from_json_ok() -> Result {
        // language=JSON
        const CATALOG: &str = r#"
            [
                { "id": "a", "name": "Alpha", "batteryCapacity": 60 },
                { "id": "b", "name": "Bravo", "batteryCapacity": 82.5 }
            ]
        "#;
        let catalog = Catalog::from_json(CATALOG)?;
        assert_eq!(catalog.iter().map(|vehicle| vehicle.id.as_str()).collect_vec(), ["a", "b"]);
        assert_abs_diff_eq!(catalog.get("b").unwrap().battery_capacity.0, 82.5);
        assert!(catalog.get("c").is_none());
        Ok(())
    }

    #[test]
    fn test_from_toml_ok() -> Result {
        // language=TOML
        const CATALOG: &str = r#"
            [[vehicles]]
            id = "a"
            name = "Alpha"
            batteryCapacity = 60.0
        "#;
        let catalog = Catalog::from_toml(CATALOG)?;
        assert_eq!(catalog.get("a").unwrap().name, "Alpha");
        Ok(())
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Catalog::try_from(vec![]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let error = Catalog::try_from(vec![vehicle("a", 60.0), vehicle("a", 70.0)]).unwrap_err();
        assert!(error.to_string().contains("duplicate vehicle id `a`"));
    }

    #[test]
    fn test_rejects_blank_id() {
        assert!(Catalog::try_from(vec![vehicle("  ", 60.0)]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        assert!(Catalog::try_from(vec![vehicle("a", 0.0)]).is_err());
        assert!(Catalog::try_from(vec![vehicle("a", -10.0)]).is_err());
        assert!(Catalog::try_from(vec![vehicle("a", f64::NAN)]).is_err());
    }

    #[test]
    fn test_vehicle_display() {
        assert_eq!(vehicle("a", 77.4).to_string(), "A (77.4 kWh)");
    }

    #[test]
    fn test_read_from_unknown_extension() {
        let error = Catalog::read_from(Path::new("vehicles.yaml")).unwrap_err();
        assert!(error.to_string().contains("neither a JSON nor a TOML file"));
    }

    #[test]
    fn test_read_from_missing_file() {
        assert!(Catalog::read_from(Path::new("does-not-exist.json")).is_err());
    }
}
