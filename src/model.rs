use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;

/// Body returned by the prediction API for a single name.
#[derive(Debug, Deserialize)]
pub struct NationalityResponse {
    #[allow(dead_code)]
    pub name: String,
    /// Absent or `null` for names the API knows nothing about.
    #[serde(default)]
    pub country: Option<Vec<CountryPrediction>>,
}

impl NationalityResponse {
    /// Prediction pairs in response order. Empty when `country` was missing.
    pub fn predictions(&self) -> &[CountryPrediction] {
        self.country.as_deref().unwrap_or_default()
    }

    pub fn into_predictions(self) -> Vec<CountryPrediction> {
        self.country.unwrap_or_default()
    }
}

/// One (country code, probability) pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryPrediction {
    pub country_id: String,
    pub probability: f64,
}

impl fmt::Display for CountryPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country: {}, Probability: {}", self.country_id, self.probability)
    }
}

/// A saved row from the `NationalityResults` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NationalityPrediction {
    #[allow(dead_code)]
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub probability: f64,
}

impl fmt::Display for NationalityPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Country: {}, Probability: {}",
            self.name, self.country_code, self.probability
        )
    }
}

/// Parse a raw JSON body into a [`NationalityResponse`].
pub fn parse_response(body: &str) -> Result<NationalityResponse> {
    serde_json::from_str(body).context("Invalid prediction response")
}
