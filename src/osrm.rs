//! OSRM HTTP adapter: fetches one duration table and serves it as a matrix.
//!
//! The table is fetched once at construction, so the search never waits on
//! the network and every lookup is pure.

use serde::Deserialize;
use tracing::debug;

use crate::error::DistanceError;
use crate::matrix::MatrixOracle;
use crate::traits::{DistanceOracle, Location};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OsrmError {
    /// Request failed, timed out, or returned a non-success status
    #[error("OSRM request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// OSRM answered with a non-"Ok" code
    #[error("OSRM error {code}: {message}")]
    Api { code: String, message: String },

    /// Table dimensions do not match the requested locations
    #[error("OSRM table has wrong shape: expected {expected}x{expected}")]
    Shape { expected: usize },
}

/// Distance oracle backed by a single OSRM `table` request.
#[derive(Debug, Clone)]
pub struct OsrmOracle {
    matrix: MatrixOracle,
}

impl OsrmOracle {
    /// Fetch travel durations (seconds) between all given locations.
    pub fn fetch(config: &OsrmConfig, locations: &[(Location, (f64, f64))]) -> Result<Self, OsrmError> {
        if locations.is_empty() {
            return Ok(Self {
                matrix: MatrixOracle::new(),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = table_url(config, locations);
        debug!(%url, locations = locations.len(), "fetching OSRM table");

        let body = client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())?;

        let ids: Vec<Location> = locations.iter().map(|(id, _)| *id).collect();
        Ok(Self {
            matrix: matrix_from_table(&ids, body)?,
        })
    }

    pub fn matrix(&self) -> &MatrixOracle {
        &self.matrix
    }
}

impl DistanceOracle for OsrmOracle {
    fn distance(&self, at: i64, from: Location, to: Location) -> Result<f64, DistanceError> {
        self.matrix.distance(at, from, to)
    }
}

fn table_url(config: &OsrmConfig, locations: &[(Location, (f64, f64))]) -> String {
    let coords = locations
        .iter()
        .map(|(_, (lat, lng))| format!("{:.6},{:.6}", lng, lat))
        .collect::<Vec<_>>()
        .join(";");

    format!(
        "{}/table/v1/{}/{}?annotations=duration",
        config.base_url, config.profile, coords
    )
}

/// Unroutable pairs come back as `null` and stay undefined in the matrix.
fn matrix_from_table(ids: &[Location], body: OsrmTableResponse) -> Result<MatrixOracle, OsrmError> {
    if body.code != "Ok" {
        return Err(OsrmError::Api {
            code: body.code,
            message: body.message.unwrap_or_default(),
        });
    }

    let durations = body.durations.unwrap_or_default();
    if durations.len() != ids.len() || durations.iter().any(|row| row.len() != ids.len()) {
        return Err(OsrmError::Shape { expected: ids.len() });
    }

    let mut matrix = MatrixOracle::new();
    for (row, &from) in durations.iter().zip(ids) {
        for (value, &to) in row.iter().zip(ids) {
            if let Some(seconds) = value {
                matrix.insert(from, to, *seconds);
            }
        }
    }
    Ok(matrix)
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    message: Option<String>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}
