// SPDX-License-Identifier: Apache-2.0

use crate::SideEffect;

#[test]
fn test_side_effect_commands() {
    assert_eq!(
        SideEffect::ExecRefresh("bond2:1".to_string()).commands(),
        vec![
            vec!["/sbin/ifdown".to_string(), "bond2:1".to_string()],
            vec!["/sbin/ifup".to_string(), "bond2:1".to_string()],
        ]
    );
    assert_eq!(
        SideEffect::ExecIfdown("eth0:1".to_string()).commands(),
        vec![vec!["/sbin/ifdown".to_string(), "eth0:1".to_string()]]
    );
    assert!(SideEffect::notify_network().commands().is_empty());
    assert!(SideEffect::None.commands().is_empty());
}

#[test]
fn test_side_effect_title() {
    assert_eq!(
        SideEffect::notify_network().title().as_deref(),
        Some("Service[network]")
    );
    assert_eq!(SideEffect::None.title(), None);
    assert_eq!(SideEffect::None.to_string(), "none");
}

#[test]
fn test_side_effect_serialize() {
    assert_eq!(
        serde_json::to_string(&SideEffect::ExecIfdown("bond2:1".to_string()))
            .unwrap(),
        r#"{"action":"exec-ifdown","target":"bond2:1"}"#
    );
    assert_eq!(
        serde_json::to_string(&SideEffect::None).unwrap(),
        r#"{"action":"none"}"#
    );
}
