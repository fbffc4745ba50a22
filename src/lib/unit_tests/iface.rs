// SPDX-License-Identifier: Apache-2.0

use crate::InterfaceState;

#[test]
fn test_iface_state_parse_ensure() {
    assert_eq!(
        InterfaceState::parse_ensure("absent", &InterfaceState::ALIAS_STATES)
            .unwrap(),
        InterfaceState::Absent
    );
    assert_eq!(
        InterfaceState::parse_ensure("down", &InterfaceState::PROMISC_STATES)
            .unwrap(),
        InterfaceState::Down
    );
    assert!(InterfaceState::parse_ensure(
        "absent",
        &InterfaceState::PROMISC_STATES
    )
    .is_err());
}

#[test]
fn test_iface_state_serde_kebab_case() {
    let state: InterfaceState = serde_yaml::from_str("absent").unwrap();
    assert_eq!(state, InterfaceState::Absent);
    assert_eq!(serde_json::to_string(&InterfaceState::Up).unwrap(), "\"up\"");
    assert_eq!(InterfaceState::Down.to_string(), "down");
}
