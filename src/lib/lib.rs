// SPDX-License-Identifier: Apache-2.0

//! Declarative rendering of network-scripts `ifcfg-*` files.
//!
//! Each record is validated into a typed form and then rendered into a
//! [RenderedFile] plus the [SideEffect] the host should perform after
//! writing it. Nothing in this crate touches the file system or runs
//! commands.
//!
//! ```
//! use netscripts::{AliasConfig, HostFacts, SideEffect};
//!
//! let conf = AliasConfig::new("bond2:1", "up", "1.2.3.6", "255.255.255.0")
//!     .gen_conf(&HostFacts::new())
//!     .unwrap();
//! assert_eq!(conf.file.lines[0], "DEVICE=bond2:1");
//! assert_eq!(conf.side_effect, SideEffect::notify_network());
//! ```

mod alias;
mod deserializer;
mod error;
mod facts;
mod file;
mod gen_conf;
mod iface;
mod ip;
mod mac;
mod net_state;
mod promisc;
mod side_effect;


pub use crate::alias::{AliasConfig, ValidatedAlias};
pub use crate::error::{ErrorKind, NetScriptsError};
pub use crate::facts::HostFacts;
pub use crate::file::{RenderedFile, DEFAULT_SCRIPTS_DIR};
pub use crate::gen_conf::GeneratedConf;
pub use crate::iface::InterfaceState;
pub use crate::net_state::NetScriptsState;
pub use crate::promisc::{PromiscConfig, ValidatedPromisc};
pub use crate::side_effect::{SideEffect, NETWORK_SERVICE};
