// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const FACT_INTERFACES: &str = "interfaces";
const FACT_MACADDRESS_PREFIX: &str = "macaddress_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, FactValue>",
    into = "BTreeMap<String, String>"
)]
#[non_exhaustive]
/// Host discovered data consulted while rendering.
///
/// Serialize and deserialize to/from the flat fact map gathered from the
/// host, for example:
/// ```yaml
/// interfaces: eth0,bond2:1
/// macaddress_eth1: fe:fe:fe:aa:aa:aa
/// ```
/// The `interfaces` fact may also be a list. Unknown facts are ignored.
pub struct HostFacts {
    /// Interfaces currently known to the host, aliases included.
    pub interfaces: Vec<String>,
    /// Permanent MAC address per device.
    pub macaddresses: BTreeMap<String, String>,
}

impl HostFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the interface list with a comma separated list like
    /// `eth0,bond2:1`. Empty entries are dropped.
    pub fn set_interfaces_csv(&mut self, value: &str) {
        self.set_interfaces(value.split(','));
    }

    /// Replace the interface list. Entries are trimmed and empty ones
    /// dropped.
    pub fn set_interfaces<'a>(
        &mut self,
        ifaces: impl Iterator<Item = &'a str>,
    ) {
        self.interfaces = ifaces
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    pub fn has_interface(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i == name)
    }

    pub fn macaddress(&self, device: &str) -> Option<&str> {
        self.macaddresses.get(device).map(String::as_str)
    }

    pub fn set_macaddress(&mut self, device: &str, mac: &str) {
        self.macaddresses
            .insert(device.to_string(), mac.to_string());
    }
}

// Facts gathered from a host carry values of any type, only strings and
// string lists are consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Scalar(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl From<BTreeMap<String, FactValue>> for HostFacts {
    fn from(facts: BTreeMap<String, FactValue>) -> Self {
        let mut ret = Self::new();
        for (name, value) in facts {
            let device = name.strip_prefix(FACT_MACADDRESS_PREFIX);
            match (name.as_str(), device, value) {
                (FACT_INTERFACES, _, FactValue::Scalar(v)) => {
                    ret.set_interfaces_csv(&v)
                }
                (FACT_INTERFACES, _, FactValue::List(v)) => {
                    ret.set_interfaces(v.iter().map(String::as_str))
                }
                (_, Some(device), FactValue::Scalar(mac))
                    if !device.is_empty() =>
                {
                    ret.set_macaddress(device, &mac)
                }
                (FACT_INTERFACES, _, FactValue::Other(v))
                | (_, Some(_), FactValue::Other(v)) => {
                    log::warn!("Ignoring fact {name} of unexpected type: {v}")
                }
                _ => log::debug!("Ignoring unused fact {name}"),
            }
        }
        ret
    }
}

impl From<HostFacts> for BTreeMap<String, String> {
    fn from(facts: HostFacts) -> Self {
        let mut ret = BTreeMap::new();
        if !facts.interfaces.is_empty() {
            ret.insert(FACT_INTERFACES.to_string(), facts.interfaces.join(","));
        }
        for (device, mac) in facts.macaddresses {
            ret.insert(format!("{FACT_MACADDRESS_PREFIX}{device}"), mac);
        }
        ret
    }
}
