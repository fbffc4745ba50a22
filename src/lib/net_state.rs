// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    AliasConfig, HostFacts, NetScriptsError, PromiscConfig, DEFAULT_SCRIPTS_DIR,
};

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
/// The [NetScriptsState] holds every ifcfg file a host should have
/// rendered, plus the host facts consulted while rendering.
///
/// Example yaml:
///
/// ```yaml
/// facts:
///   interfaces: eth0,bond2:1
///   macaddress_eth1: fe:fe:fe:aa:aa:aa
/// aliases:
/// - name: bond2:1
///   ensure: up
///   ipaddress: 1.2.3.6
///   netmask: 255.255.255.0
/// promisc:
/// - device: eth1
///   ensure: up
/// ```
pub struct NetScriptsState {
    #[serde(default, skip_serializing_if = "is_facts_empty")]
    pub facts: HostFacts,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Alias interfaces, rendered in this order.
    pub aliases: Vec<AliasConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Promiscuous mode interfaces, rendered after aliases.
    pub promisc: Vec<PromiscConfig>,
    #[serde(skip)]
    pub(crate) scripts_dir: Option<String>,
}

fn is_facts_empty(facts: &HostFacts) -> bool {
    facts == &HostFacts::default()
}

impl NetScriptsState {
    /// Create empty [NetScriptsState]
    pub fn new() -> Self {
        Default::default()
    }

    /// Folder holding generated ifcfg files.
    /// Default is `/etc/sysconfig/network-scripts`.
    pub fn set_scripts_dir(&mut self, value: &str) -> &mut Self {
        self.scripts_dir = Some(value.to_string());
        self
    }

    pub fn scripts_dir(&self) -> &str {
        self.scripts_dir.as_deref().unwrap_or(DEFAULT_SCRIPTS_DIR)
    }

    /// Override the known interface list with a comma separated string.
    pub fn set_interfaces_fact(&mut self, value: &str) -> &mut Self {
        self.facts.set_interfaces_csv(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.promisc.is_empty()
    }

    /// Wrapping function of [serde_json::from_str()] with error mapped to
    /// [NetScriptsError].
    pub fn new_from_json(state_json: &str) -> Result<Self, NetScriptsError> {
        Ok(serde_json::from_str(state_json)?)
    }

    /// Wrapping function of [serde_yaml::from_str()] with error mapped to
    /// [NetScriptsError].
    pub fn new_from_yaml(state_yaml: &str) -> Result<Self, NetScriptsError> {
        Ok(serde_yaml::from_str(state_yaml)?)
    }

    pub fn append_alias(&mut self, alias: AliasConfig) {
        self.aliases.push(alias);
    }

    pub fn append_promisc(&mut self, promisc: PromiscConfig) {
        self.promisc.push(promisc);
    }
}
