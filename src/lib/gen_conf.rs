// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    ErrorKind, NetScriptsError, NetScriptsState, RenderedFile, SideEffect,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// One rendered ifcfg file with the action to take once it is written.
pub struct GeneratedConf {
    pub file: RenderedFile,
    pub side_effect: SideEffect,
}

impl NetScriptsState {
    /// Generate every ifcfg file of this state.
    ///
    /// All records are validated before anything is rendered, so on error
    /// nothing is returned. The output keeps document order: aliases first,
    /// then promiscuous interfaces.
    pub fn gen_conf(&self) -> Result<Vec<GeneratedConf>, NetScriptsError> {
        let aliases = self
            .aliases
            .iter()
            .map(|a| a.validate())
            .collect::<Result<Vec<_>, _>>()?;
        let promiscs = self
            .promisc
            .iter()
            .map(|p| p.validate())
            .collect::<Result<Vec<_>, _>>()?;

        let scripts_dir = self.scripts_dir();
        let ret: Vec<GeneratedConf> = aliases
            .iter()
            .map(|a| a.render(scripts_dir, &self.facts))
            .chain(promiscs.iter().map(|p| p.render(scripts_dir, &self.facts)))
            .collect();

        check_duplicate_path(&ret)?;
        log::debug!("Generated {} ifcfg files", ret.len());
        Ok(ret)
    }
}

fn check_duplicate_path(
    confs: &[GeneratedConf],
) -> Result<(), NetScriptsError> {
    let mut paths = HashSet::new();
    for conf in confs {
        if !paths.insert(conf.file.path.as_str()) {
            let e = NetScriptsError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "File {} is defined more than once",
                    conf.file.path
                ),
            );
            log::error!("{}", e);
            return Err(e);
        }
    }
    Ok(())
}
