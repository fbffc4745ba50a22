// SPDX-License-Identifier: Apache-2.0

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::{
    iface::alias_parent,
    ip::{parse_ipv4, parse_option_ipv4},
    GeneratedConf, HostFacts, InterfaceState, NetScriptsError, RenderedFile,
    SideEffect, DEFAULT_SCRIPTS_DIR,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// Alias interface parameters as supplied by the caller, unvalidated.
///
/// Example yaml output of `AliasConfig`:
/// ```yaml
/// name: bond3:2
/// ensure: down
/// ipaddress: 33.2.3.127
/// netmask: 255.255.0.0
/// gateway: 33.2.3.1
/// no-alias-routing: true
/// user-controlled: true
/// metric: "10"
/// zone: trusted
/// restart: true
/// use-if-scripts: false
/// ```
pub struct AliasConfig {
    /// Alias name in the form of `<parent>:<label>`, e.g. `bond2:1`.
    pub name: String,
    /// One of `up`, `down` or `absent`.
    pub ensure: String,
    /// IPv4 address in dotted-quad.
    pub ipaddress: String,
    /// IPv4 netmask in dotted-quad.
    pub netmask: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gateway: Option<String>,
    #[serde(
        default,
        alias = "noaliasrouting",
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    /// Serialize to `no-alias-routing`.
    /// Deserialize from `no-alias-routing` or `noaliasrouting`.
    pub no_alias_routing: bool,
    #[serde(
        default,
        alias = "userctl",
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    /// Allow non-root users to control the interface.
    /// Deserialize from `user-controlled` or `userctl`.
    pub user_controlled: bool,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_string_or_integer"
    )]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Firewall zone.
    pub zone: Option<String>,
    #[serde(
        default = "default_restart",
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    /// Notify the network service after change. Default to true.
    pub restart: bool,
    #[serde(
        default,
        alias = "ifscripts",
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    /// Use `ifup`/`ifdown` instead of restarting the network service.
    /// Deserialize from `use-if-scripts` or `ifscripts`.
    pub use_if_scripts: bool,
}

fn default_restart() -> bool {
    true
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            ensure: String::new(),
            ipaddress: String::new(),
            netmask: String::new(),
            gateway: None,
            no_alias_routing: false,
            user_controlled: false,
            metric: None,
            zone: None,
            restart: default_restart(),
            use_if_scripts: false,
        }
    }
}

impl AliasConfig {
    pub fn new(
        name: &str,
        ensure: &str,
        ipaddress: &str,
        netmask: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            ensure: ensure.to_string(),
            ipaddress: ipaddress.to_string(),
            netmask: netmask.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ValidatedAlias, NetScriptsError> {
        let state = InterfaceState::parse_ensure(
            &self.ensure,
            &InterfaceState::ALIAS_STATES,
        )?;
        let parent = alias_parent(&self.name)?.to_string();
        let ipaddress = parse_ipv4("ipaddress", &self.ipaddress)?;
        let netmask = parse_ipv4("netmask", &self.netmask)?;
        let gateway = parse_option_ipv4("gateway", self.gateway.as_deref())?;

        Ok(ValidatedAlias {
            name: self.name.clone(),
            parent,
            state,
            ipaddress,
            netmask,
            gateway,
            no_alias_routing: self.no_alias_routing,
            user_controlled: self.user_controlled,
            metric: self.metric.clone(),
            zone: self.zone.clone(),
            restart: self.restart,
            use_if_scripts: self.use_if_scripts,
        })
    }

    /// Validate then render into the default network-scripts folder.
    pub fn gen_conf(
        &self,
        facts: &HostFacts,
    ) -> Result<GeneratedConf, NetScriptsError> {
        Ok(self.validate()?.render(DEFAULT_SCRIPTS_DIR, facts))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidatedAlias {
    pub name: String,
    /// Device name before `:`.
    pub parent: String,
    pub state: InterfaceState,
    pub ipaddress: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub gateway: Option<Ipv4Addr>,
    pub no_alias_routing: bool,
    pub user_controlled: bool,
    pub metric: Option<String>,
    pub zone: Option<String>,
    pub restart: bool,
    pub use_if_scripts: bool,
}

impl ValidatedAlias {
    pub fn render(
        &self,
        scripts_dir: &str,
        facts: &HostFacts,
    ) -> GeneratedConf {
        let file = if self.state.is_absent() {
            RenderedFile::new_absent(scripts_dir, &self.name)
        } else {
            self.render_present(scripts_dir)
        };
        let side_effect = self.side_effect(facts);
        log::debug!(
            "Alias {} ({}) rendered to {}, side effect: {}",
            self.name,
            self.state,
            file.path,
            side_effect
        );
        GeneratedConf { file, side_effect }
    }

    fn render_present(&self, scripts_dir: &str) -> RenderedFile {
        let mut file = RenderedFile::new(scripts_dir, &self.name);
        file.push("DEVICE", &self.name);
        file.push("BOOTPROTO", "none");
        file.push_yes_no("ONPARENT", self.state == InterfaceState::Up);
        file.push("TYPE", "Ethernet");
        file.push("IPADDR", self.ipaddress);
        file.push("NETMASK", self.netmask);
        if let Some(gateway) = self.gateway {
            file.push("GATEWAY", gateway);
        }
        file.push_yes_no("NO_ALIASROUTING", self.no_alias_routing);
        if self.user_controlled {
            file.push("USERCTL", "yes");
        }
        if let Some(zone) = self.zone.as_ref() {
            file.push("ZONE", zone);
        }
        if let Some(metric) = self.metric.as_ref() {
            file.push("METRIC", metric);
        }
        file.push("NM_CONTROLLED", "no");
        file
    }

    /// Teardown of an absent alias is only triggered when the host still
    /// knows the interface.
    pub fn side_effect(&self, facts: &HostFacts) -> SideEffect {
        match (self.state, self.use_if_scripts) {
            (InterfaceState::Absent, use_if_scripts) => {
                if !facts.has_interface(&self.name) {
                    SideEffect::None
                } else if use_if_scripts {
                    SideEffect::ExecIfdown(self.name.clone())
                } else {
                    SideEffect::notify_network()
                }
            }
            (InterfaceState::Up, true) => {
                SideEffect::ExecRefresh(self.name.clone())
            }
            (InterfaceState::Down, true) => SideEffect::None,
            (_, false) => {
                if self.restart {
                    SideEffect::notify_network()
                } else {
                    SideEffect::None
                }
            }
        }
    }
}
