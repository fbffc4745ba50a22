// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub const NETWORK_SERVICE: &str = "network";

const IFUP_BIN: &str = "/sbin/ifup";
const IFDOWN_BIN: &str = "/sbin/ifdown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "kebab-case")]
/// Action the host should take after the ifcfg file was written or removed.
/// At most one action is chosen per file.
pub enum SideEffect {
    /// Restart (notify) a system service, always `network` today.
    NotifyService(String),
    /// Re-read the ifcfg file of this interface via `ifdown` then `ifup`.
    ExecRefresh(String),
    /// Take this interface down via `ifdown`.
    ExecIfdown(String),
    None,
}

impl Default for SideEffect {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for SideEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.title() {
            Some(t) => write!(f, "{t}"),
            None => write!(f, "none"),
        }
    }
}

impl SideEffect {
    pub fn notify_network() -> Self {
        Self::NotifyService(NETWORK_SERVICE.to_string())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_exec(&self) -> bool {
        matches!(self, Self::ExecRefresh(_) | Self::ExecIfdown(_))
    }

    /// Resource title in the host configuration runtime, e.g.
    /// `Service[network]` or `Refresh bond2:1`.
    pub fn title(&self) -> Option<String> {
        match self {
            Self::NotifyService(srv) => Some(format!("Service[{srv}]")),
            Self::ExecRefresh(iface) => Some(format!("Refresh {iface}")),
            Self::ExecIfdown(iface) => Some(format!("ifdown {iface}")),
            Self::None => None,
        }
    }

    /// Commands for the process collaborator, run in order. Empty for
    /// service notification and `None`.
    pub fn commands(&self) -> Vec<Vec<String>> {
        match self {
            Self::ExecRefresh(iface) => vec![
                vec![IFDOWN_BIN.to_string(), iface.to_string()],
                vec![IFUP_BIN.to_string(), iface.to_string()],
            ],
            Self::ExecIfdown(iface) => {
                vec![vec![IFDOWN_BIN.to_string(), iface.to_string()]]
            }
            Self::NotifyService(_) | Self::None => Vec::new(),
        }
    }
}
