// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) gen_conf: GenConfConfig,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenConfConfig {
    /// Folder used in the `path` of generated files.
    #[serde(default, alias = "scripts-dir")]
    pub(crate) scripts_dir: Option<String>,
    /// Comma separated interface list used when the state file has none.
    #[serde(default)]
    pub(crate) interfaces: Option<String>,
}

impl Config {
    pub(crate) const DEFAULT_CONFIG_PATH: &'static str =
        "/etc/netscripts/netscripts.conf";

    pub(crate) fn load(path: &str) -> Result<Self, CliError> {
        let path = std::path::Path::new(path);
        if !path.exists() {
            log::debug!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        let mut fd = std::fs::File::open(path)?;
        let mut content = String::new();
        fd.read_to_string(&mut content)?;
        match toml::from_str::<Config>(&content) {
            Ok(c) => {
                log::info!("Configuration loaded:\n{content}");
                Ok(c)
            }
            Err(e) => Err(CliError::from(format!(
                "Failed to read configuration from {}: {e}",
                path.display()
            ))),
        }
    }
}
