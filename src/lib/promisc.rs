// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    file::yes_no, iface::validate_device_name, mac::validate_mac_address,
    GeneratedConf, HostFacts, InterfaceState, NetScriptsError, RenderedFile,
    SideEffect, DEFAULT_SCRIPTS_DIR,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// Promiscuous mode interface parameters, unvalidated.
///
/// Example yaml output of `PromiscConfig`:
/// ```yaml
/// device: eth3
/// ensure: up
/// macaddress: ef:ef:ef:ef:ef:ef
/// user-controlled: true
/// bootproto: dhcp
/// onboot: true
/// ```
pub struct PromiscConfig {
    pub device: String,
    /// Either `up` or `down`.
    pub ensure: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// When not defined, the `macaddress_<device>` host fact is used.
    pub macaddress: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        alias = "userctl",
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    /// Deserialize from `user-controlled` or `userctl`.
    pub user_controlled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bootproto: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    /// Default to true.
    pub onboot: Option<bool>,
}

impl PromiscConfig {
    pub fn new(device: &str, ensure: &str) -> Self {
        Self {
            device: device.to_string(),
            ensure: ensure.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ValidatedPromisc, NetScriptsError> {
        // Both states render the same file.
        InterfaceState::parse_ensure(
            &self.ensure,
            &InterfaceState::PROMISC_STATES,
        )?;
        validate_device_name(&self.device)?;
        if let Some(mac) = self.macaddress.as_deref() {
            validate_mac_address("macaddress", mac)?;
        }
        Ok(ValidatedPromisc {
            device: self.device.clone(),
            macaddress: self.macaddress.clone(),
            user_controlled: self.user_controlled,
            bootproto: self.bootproto.clone(),
            onboot: self.onboot.unwrap_or(true),
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
pub struct ValidatedPromisc {
    pub device: String,
    pub macaddress: Option<String>,
    pub user_controlled: Option<bool>,
    pub bootproto: Option<String>,
    pub onboot: bool,
}

impl ValidatedPromisc {
    pub fn render(
        &self,
        scripts_dir: &str,
        facts: &HostFacts,
    ) -> GeneratedConf {
        let mut file = RenderedFile::new(scripts_dir, &self.device);
        file.push("DEVICE", &self.device);
        match self
            .macaddress
            .as_deref()
            .or_else(|| facts.macaddress(&self.device))
        {
            Some(mac) => file.push("HWADDR", mac),
            None => log::debug!(
                "No MAC address known for {}, HWADDR omitted",
                self.device
            ),
        }
        file.push("PROMISC", "yes");
        if let Some(user_controlled) = self.user_controlled {
            file.push("USERCTL", yes_no(user_controlled));
        }
        if let Some(bootproto) = self.bootproto.as_ref() {
            file.push("BOOTPROTO", bootproto);
        }
        file.push_yes_no("ONBOOT", self.onboot);

        GeneratedConf {
            file,
            side_effect: SideEffect::notify_network(),
        }
    }
}
