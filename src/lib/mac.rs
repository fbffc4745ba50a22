// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, NetScriptsError};

const MAC_ADDRESS_OCTETS: usize = 6;

pub(crate) fn is_mac_address(value: &str) -> bool {
    let octets: Vec<&str> = value.split(':').collect();
    octets.len() == MAC_ADDRESS_OCTETS
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Accept `xx:xx:xx:xx:xx:xx` hex pairs in either case. The value is kept
/// as typed since HWADDR is matched case-insensitively by ifup.
pub(crate) fn validate_mac_address(
    prop_name: &str,
    value: &str,
) -> Result<(), NetScriptsError> {
    if is_mac_address(value) {
        Ok(())
    } else {
        let e = NetScriptsError::new(
            ErrorKind::InvalidMacAddress,
            format!("Invalid {prop_name}: {value} is not a MAC address."),
        );
        log::error!("{}", e);
        Err(e)
    }
}
