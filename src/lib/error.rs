// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidEnsure,
    InvalidIpAddress,
    InvalidMacAddress,
    InvalidInterfaceName,
    InvalidArgument,
    Bug,
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::Bug
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for NetScriptsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for NetScriptsError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NetScriptsError {
    kind: ErrorKind,
    msg: String,
}

impl NetScriptsError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl From<serde_json::Error> for NetScriptsError {
    fn from(e: serde_json::Error) -> Self {
        let e = NetScriptsError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid JSON string: {e}"),
        );
        log::error!("{}", e);
        e
    }
}

impl From<serde_yaml::Error> for NetScriptsError {
    fn from(e: serde_yaml::Error) -> Self {
        let e = NetScriptsError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid YAML string: {e}"),
        );
        log::error!("{}", e);
        e
    }
}
