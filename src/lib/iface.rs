// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetScriptsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Desired lifecycle of an ifcfg file, the `ensure` parameter.
pub enum InterfaceState {
    /// File present, interface brought up with its parent.
    Up,
    /// File present, interface left down.
    Down,
    /// File removed.
    Absent,
}

impl std::fmt::Display for InterfaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Up => "up",
                Self::Down => "down",
                Self::Absent => "absent",
            }
        )
    }
}

impl InterfaceState {
    pub(crate) const ALIAS_STATES: [Self; 3] =
        [Self::Up, Self::Down, Self::Absent];
    pub(crate) const PROMISC_STATES: [Self; 2] = [Self::Up, Self::Down];

    /// Parse the literal `ensure` value, accepting only `allowed` states.
    /// Matching is exact: `UP` or ` up` are rejected.
    pub(crate) fn parse_ensure(
        value: &str,
        allowed: &[Self],
    ) -> Result<Self, NetScriptsError> {
        if let Some(state) =
            allowed.iter().find(|s| s.to_string() == value).copied()
        {
            Ok(state)
        } else {
            let e = NetScriptsError::new(
                ErrorKind::InvalidEnsure,
                format!(
                    "$ensure must be {}. Got \"{value}\"",
                    quoted_choices(allowed)
                ),
            );
            log::error!("{}", e);
            Err(e)
        }
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::Absent
    }
}

// ["up", "down", "absent"] => `"up", "down", or "absent"`
// ["up", "down"]           => `either "up" or "down"`
fn quoted_choices(allowed: &[InterfaceState]) -> String {
    let quoted: Vec<String> =
        allowed.iter().map(|s| format!("\"{s}\"")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.to_string(),
        [first, second] => format!("either {first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Check an alias name of the form `<parent>:<label>` and return the parent
/// device name.
pub(crate) fn alias_parent(name: &str) -> Result<&str, NetScriptsError> {
    match name.split_once(':') {
        Some((parent, label))
            if !parent.is_empty()
                && !label.is_empty()
                && is_valid_device_name(parent)
                && !label.contains(|c: char| c == '/' || c.is_whitespace()) =>
        {
            Ok(parent)
        }
        _ => {
            let e = NetScriptsError::new(
                ErrorKind::InvalidInterfaceName,
                format!(
                    "Alias name {name} is not in the form of \
                    <parent>:<label>"
                ),
            );
            log::error!("{}", e);
            Err(e)
        }
    }
}

/// Check a plain device name, as used for `ifcfg-<device>`.
pub(crate) fn validate_device_name(name: &str) -> Result<(), NetScriptsError> {
    if is_valid_device_name(name) {
        Ok(())
    } else {
        let e = NetScriptsError::new(
            ErrorKind::InvalidInterfaceName,
            format!("Invalid interface name {name:?}"),
        );
        log::error!("{}", e);
        Err(e)
    }
}

fn is_valid_device_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|c: char| c == ':' || c == '/' || c.is_whitespace())
}
