//! Private key file loading

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use pob_core::LocalWallet;

use crate::commands::CliError;

/// Read a hex private key from `path` and build the wallet
///
/// The file holds the key as plain text; surrounding whitespace is ignored.
pub fn load_key_file(path: &Path) -> Result<LocalWallet, CliError> {
    let content = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
        CliError::KeyFile {
            path: path.to_path_buf(),
            source,
        }
    })?);

    if content.trim().is_empty() {
        return Err(CliError::EmptyKeyFile(path.to_path_buf()));
    }

    let wallet = LocalWallet::from_hex(&content)?;
    debug!("Loaded key from {}", path.display());
    Ok(wallet)
}
