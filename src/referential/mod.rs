use crate::error::{Error, ErrorKind};
use crate::marketdata::CountrySelection;

use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Referential, format!("not json format : {error}"))
    }
}

const DEFAULT_PINS: [(&str, &str); 12] = [
    ("United States", "USD"),
    ("Canada", "CAD"),
    ("Mexico", "MXN"),
    ("Brazil", "BRL"),
    ("United Kingdom", "GBP"),
    ("France", "EUR"),
    ("Germany", "EUR"),
    ("Switzerland", "CHF"),
    ("India", "INR"),
    ("China", "CNY"),
    ("Japan", "JPY"),
    ("Australia", "AUD"),
];

/// Catalogue of the clickable country pins.
pub struct Referential {
    pins: Vec<CountrySelection>,
}

impl Referential {
    pub fn new(pins: Vec<CountrySelection>) -> Result<Self, Error> {
        let mut countries = HashSet::new();
        for pin in pins.iter() {
            if !countries.insert(pin.country.as_str()) {
                return Err(Error::new(
                    ErrorKind::Referential,
                    format!("country {} is declared twice", pin.country),
                ));
            }
        }
        Ok(Self { pins })
    }

    pub fn from_file(filename: &str) -> Result<Self, Error> {
        let file = File::open(filename).map_err(|error| {
            Error::new(
                ErrorKind::Referential,
                format!("unable to open {} because {}", filename, error),
            )
        })?;
        let reader = BufReader::new(file);
        let pins: Vec<CountrySelection> = serde_json::from_reader(reader)?;
        info!("loading {} pins from {} done", pins.len(), filename);
        Self::new(pins)
    }

    pub fn pins(&self) -> &[CountrySelection] {
        &self.pins
    }

    pub fn get_pin_by<P>(&self, predicate: P) -> Option<&CountrySelection>
    where
        P: Fn(&CountrySelection) -> bool,
    {
        self.pins.iter().find(|pin| predicate(pin))
    }

    pub fn get_pin_by_country(&self, country: &str) -> Option<&CountrySelection> {
        self.get_pin_by(|pin| pin.country == country)
    }
}

impl Default for Referential {
    fn default() -> Self {
        Self {
            pins: DEFAULT_PINS
                .iter()
                .map(|(country, currency)| CountrySelection::new(*country, *currency))
                .collect(),
        }
    }
}
