//! Claim loading from JSON files

use std::path::Path;

use core_kernel::CoreError;
use domain_fraud::claim::ClaimRecord;
use tracing::info;

use crate::error::CliError;

/// Loads claims from a JSON file holding an array of claims or one claim
///
/// # Errors
///
/// * `CliError::Core` with `CoreError::NotFound` if the file does not exist
/// * `CliError::Io` if the file cannot be read
/// * `CliError::Fraud` if the content is not a claim or list of claims
pub fn load_claims(path: &Path) -> Result<Vec<ClaimRecord>, CliError> {
    if !path.exists() {
        return Err(CoreError::not_found(format!("claims file {}", path.display())).into());
    }

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let claims = ClaimRecord::many_from_json(&content)?;
    info!(path = %path.display(), claims = claims.len(), "Loaded claims");
    Ok(claims)
}
