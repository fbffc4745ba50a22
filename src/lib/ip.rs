// SPDX-License-Identifier: Apache-2.0

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::{ErrorKind, NetScriptsError};

/// Parse an IPv4 dotted-quad like `192.0.2.1`.
///
/// `prop_name` is the parameter name used in the error message.
pub(crate) fn parse_ipv4(
    prop_name: &str,
    value: &str,
) -> Result<Ipv4Addr, NetScriptsError> {
    Ipv4Addr::from_str(value).map_err(|parse_error| {
        let e = NetScriptsError::new(
            ErrorKind::InvalidIpAddress,
            format!(
                "Invalid {prop_name}: {value} is not an IP address. \
                ({parse_error})"
            ),
        );
        log::error!("{}", e);
        e
    })
}

pub(crate) fn parse_option_ipv4(
    prop_name: &str,
    value: Option<&str>,
) -> Result<Option<Ipv4Addr>, NetScriptsError> {
    value.map(|v| parse_ipv4(prop_name, v)).transpose()
}
