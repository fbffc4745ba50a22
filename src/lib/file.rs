// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCRIPTS_DIR: &str = "/etc/sysconfig/network-scripts";

const IFCFG_PREFIX: &str = "ifcfg-";
const IFCFG_MODE: &str = "0644";
const IFCFG_OWNER: &str = "root";
const IFCFG_GROUP: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// Description of an ifcfg file for the file-writing collaborator.
pub struct RenderedFile {
    /// Full path, `<scripts_dir>/ifcfg-<name>`.
    pub path: String,
    /// Octal permission string, always `0644`.
    pub mode: String,
    pub owner: String,
    pub group: String,
    /// When false the file should be removed and `lines` is empty.
    pub present: bool,
    /// Body in `KEY=VALUE` form, in file order.
    pub lines: Vec<String>,
}

impl RenderedFile {
    pub(crate) fn new(scripts_dir: &str, name: &str) -> Self {
        Self {
            path: ifcfg_path(scripts_dir, name),
            mode: IFCFG_MODE.to_string(),
            owner: IFCFG_OWNER.to_string(),
            group: IFCFG_GROUP.to_string(),
            present: true,
            lines: Vec::new(),
        }
    }

    pub(crate) fn new_absent(scripts_dir: &str, name: &str) -> Self {
        let mut ret = Self::new(scripts_dir, name);
        ret.present = false;
        ret
    }

    pub(crate) fn push(&mut self, key: &str, value: impl std::fmt::Display) {
        self.lines.push(format!("{key}={value}"));
    }

    pub(crate) fn push_yes_no(&mut self, key: &str, value: bool) {
        self.push(key, yes_no(value));
    }

    /// File name without directory, e.g. `ifcfg-eth0`.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map(|(_, n)| n)
            .unwrap_or(self.path.as_str())
    }

    /// File content, one line per entry with trailing newline.
    /// Empty for absent files.
    pub fn content(&self) -> String {
        if !self.present || self.lines.is_empty() {
            return String::new();
        }
        let mut ret = self.lines.join("\n");
        ret.push('\n');
        ret
    }

    /// Parsed file mode, e.g. `0o644`.
    pub fn mode_bits(&self) -> u32 {
        u32::from_str_radix(&self.mode, 8).unwrap_or(0o644)
    }
}

pub(crate) fn ifcfg_path(scripts_dir: &str, name: &str) -> String {
    let dir = scripts_dir.trim_end_matches('/');
    format!("{dir}/{IFCFG_PREFIX}{name}")
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
