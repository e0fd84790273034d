use serde_json::Value;
use std::{fs, path::Path};

use crate::error::WeatherError;

/// Write the raw forecast payload to `path` as pretty-printed JSON,
/// silently overwriting any existing file.
pub fn save_forecast_json(raw: &Value, path: &Path) -> Result<(), WeatherError> {
    let pretty = serde_json::to_string_pretty(raw)?;
    fs::write(path, pretty)?;
    log::debug!("wrote forecast payload to {}", path.display());
    Ok(())
}
