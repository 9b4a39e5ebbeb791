//! Fixture snapshots the repositories are seeded from.
//!
//! The shipped snapshot is compiled into the binary. A directory holding
//! `destinations.json`, `itineraries.json` and `recommendations.json` can be
//! loaded instead.

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    error::{Result, TravelError},
    models::{Destination, Itinerary, Recommendation},
};

const DESTINATIONS_FILE: &str = "destinations.json";
const ITINERARIES_FILE: &str = "itineraries.json";
const RECOMMENDATIONS_FILE: &str = "recommendations.json";

const EMBEDDED_DESTINATIONS: &str = include_str!("../assets/fixtures/destinations.json");
const EMBEDDED_ITINERARIES: &str = include_str!("../assets/fixtures/itineraries.json");
const EMBEDDED_RECOMMENDATIONS: &str = include_str!("../assets/fixtures/recommendations.json");

/// The three record collections loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    pub destinations: Vec<Destination>,
    pub itineraries: Vec<Itinerary>,
    pub recommendations: Vec<Recommendation>,
}

impl Fixtures {
    /// Parses the snapshot compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Fixture` if an embedded file does not parse.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            destinations: parse(DESTINATIONS_FILE, EMBEDDED_DESTINATIONS)?,
            itineraries: parse(ITINERARIES_FILE, EMBEDDED_ITINERARIES)?,
            recommendations: parse(RECOMMENDATIONS_FILE, EMBEDDED_RECOMMENDATIONS)?,
        })
    }

    /// Reads the three fixture files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::FileSystem` if a file cannot be read and
    /// `TravelError::Fixture` if one does not parse.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("Loading fixtures from {}", dir.display());

        Ok(Self {
            destinations: read(dir, DESTINATIONS_FILE)?,
            itineraries: read(dir, ITINERARIES_FILE)?,
            recommendations: read(dir, RECOMMENDATIONS_FILE)?,
        })
    }
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = dir.join(name);
    let contents = std::fs::read_to_string(&path)
        .map_err(|source| TravelError::FileSystem { path, source })?;
    parse(name, &contents)
}

fn parse<T: DeserializeOwned>(name: &str, contents: &str) -> Result<Vec<T>> {
    serde_json::from_str(contents).map_err(|e| TravelError::Fixture {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
