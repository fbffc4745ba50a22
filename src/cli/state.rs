// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use netscripts::NetScriptsState;

use crate::error::CliError;

/// Load the state document from `file_path`, `-` meaning stdin.
pub(crate) fn state_from_file(
    file_path: &str,
) -> Result<NetScriptsState, CliError> {
    let mut content = String::new();
    if file_path == "-" {
        std::io::stdin().read_to_string(&mut content)?;
    } else {
        std::fs::File::open(file_path)
            .and_then(|mut fd| fd.read_to_string(&mut content))
            .map_err(|e| {
                CliError::from(format!("Failed to read {file_path}: {e}"))
            })?;
    }
    state_from_str(&content)
}

// Documents copied from web pages often carry non-breaking spaces as
// indentation.
pub(crate) fn state_from_str(
    content: &str,
) -> Result<NetScriptsState, CliError> {
    let content = content.replace('\u{A0}', " ");
    if content.trim().is_empty() {
        return Ok(NetScriptsState::new());
    }
    Ok(NetScriptsState::new_from_yaml(&content)?)
}
