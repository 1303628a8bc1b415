//! Country names and continent classification.

mod table;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::country::CountryCode;
use table::{Entry, COUNTRIES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("Unknown country code '{0}'")]
    UnknownCountry(CountryCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Continent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Antarctica => "Antarctica",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

fn lookup(code: CountryCode) -> Result<&'static Entry, GeoError> {
    COUNTRIES
        .binary_search_by(|(c, _, _)| (*c).cmp(code.as_str()))
        .map(|i| &COUNTRIES[i])
        .map_err(|_| GeoError::UnknownCountry(code))
}

/// Continent a country code belongs to.
///
/// `Ok(None)` means the code is known but deliberately left without a
/// continent (remote territories such as Clipperton or the Canary Islands).
pub fn continent(code: CountryCode) -> Result<Option<Continent>, GeoError> {
    match code.as_str() {
        "EU" | "EA" => return Ok(Some(Continent::Europe)),
        "UM" => return Ok(Some(Continent::NorthAmerica)),
        "CP" | "IC" => return Ok(None),
        _ => {}
    }

    lookup(code).map(|(_, _, continent)| *continent)
}

/// Short English name of a country.
pub fn country_name(code: CountryCode) -> Result<&'static str, GeoError> {
    lookup(code).map(|(_, name, _)| *name)
}
