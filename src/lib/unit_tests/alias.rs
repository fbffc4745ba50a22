// SPDX-License-Identifier: Apache-2.0

use crate::unit_tests::testlib::{
    facts_with_ifaces, new_alias, new_ifscripts_alias,
};
use crate::{
    AliasConfig, ErrorKind, HostFacts, InterfaceState, SideEffect,
    DEFAULT_SCRIPTS_DIR,
};

#[test]
fn test_alias_invalid_ensure() {
    for ensure in ["blah", "", "UP", "present", " up"] {
        let result = new_alias("eth1:1", ensure).validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::InvalidEnsure);
            assert!(e
                .msg()
                .contains(r#"$ensure must be "up", "down", or "absent"."#));
        }
    }
}

#[test]
fn test_alias_invalid_ipaddress() {
    for ip in ["notAnIP", "1.2.3", "1.2.3.256", "1.2.3.4/24", "::1", ""] {
        let mut alias = new_alias("eth1:1", "up");
        alias.ipaddress = ip.to_string();
        let result = alias.validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::InvalidIpAddress);
            assert!(e.msg().contains(&format!("{ip} is not an IP address.")));
        }
    }
}

#[test]
fn test_alias_invalid_netmask_and_gateway() {
    let mut alias = new_alias("eth1:1", "up");
    alias.netmask = "255.255.255".to_string();
    let result = alias.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidIpAddress);
        assert!(e.msg().contains("netmask"));
    }

    let mut alias = new_alias("eth1:1", "up");
    alias.gateway = Some("gw.example.org".to_string());
    let result = alias.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidIpAddress);
        assert!(e.msg().contains("gateway"));
    }
}

#[test]
fn test_alias_ensure_checked_before_ipaddress() {
    let mut alias = new_alias("eth1:1", "blah");
    alias.ipaddress = "notAnIP".to_string();
    let result = alias.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidEnsure);
    }
}

#[test]
fn test_alias_invalid_name() {
    for name in ["eth1", ":1", "eth1:", "eth 1:1", "../eth1:1"] {
        let result = new_alias(name, "up").validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::InvalidInterfaceName);
        }
    }
}

#[test]
fn test_alias_validate_parent() {
    let alias = new_alias("bond2:1", "down").validate().unwrap();
    assert_eq!(alias.parent, "bond2");
    assert_eq!(alias.state, InterfaceState::Down);
}

#[test]
fn test_alias_required_parameters() {
    let conf = new_alias("bond2:1", "up")
        .gen_conf(&HostFacts::new())
        .unwrap();

    assert!(conf.file.present);
    assert_eq!(conf.file.mode, "0644");
    assert_eq!(conf.file.owner, "root");
    assert_eq!(conf.file.group, "root");
    assert_eq!(
        conf.file.path,
        "/etc/sysconfig/network-scripts/ifcfg-bond2:1"
    );
    assert_eq!(
        conf.file.lines,
        vec![
            "DEVICE=bond2:1",
            "BOOTPROTO=none",
            "ONPARENT=yes",
            "TYPE=Ethernet",
            "IPADDR=1.2.3.6",
            "NETMASK=255.255.255.0",
            "NO_ALIASROUTING=no",
            "NM_CONTROLLED=no",
        ]
    );
    assert_eq!(
        conf.side_effect,
        SideEffect::NotifyService("network".to_string())
    );
}

#[test]
fn test_alias_optional_parameters() {
    let alias: AliasConfig = serde_yaml::from_str(
        r#"---
name: bond3:2
ensure: down
ipaddress: 33.2.3.127
netmask: 255.255.0.0
gateway: 33.2.3.1
noaliasrouting: true
userctl: true
metric: 10
zone: trusted
restart: true
"#,
    )
    .unwrap();

    let conf = alias.gen_conf(&HostFacts::new()).unwrap();

    assert!(conf.file.present);
    assert_eq!(
        conf.file.path,
        "/etc/sysconfig/network-scripts/ifcfg-bond3:2"
    );
    assert_eq!(
        conf.file.lines,
        vec![
            "DEVICE=bond3:2",
            "BOOTPROTO=none",
            "ONPARENT=no",
            "TYPE=Ethernet",
            "IPADDR=33.2.3.127",
            "NETMASK=255.255.0.0",
            "GATEWAY=33.2.3.1",
            "NO_ALIASROUTING=yes",
            "USERCTL=yes",
            "ZONE=trusted",
            "METRIC=10",
            "NM_CONTROLLED=no",
        ]
    );
    assert_eq!(conf.side_effect, SideEffect::notify_network());
}

#[test]
fn test_alias_no_restart() {
    let mut alias = new_alias("bond2:1", "up");
    alias.restart = false;

    let conf = alias.gen_conf(&HostFacts::new()).unwrap();

    assert!(conf.file.present);
    assert_eq!(conf.file.lines.len(), 8);
    assert_eq!(conf.side_effect, SideEffect::None);
}

#[test]
fn test_alias_absent_known_iface() {
    let conf = new_alias("bond2:1", "absent")
        .gen_conf(&facts_with_ifaces("eth0,bond2:1"))
        .unwrap();

    assert!(!conf.file.present);
    assert!(conf.file.lines.is_empty());
    assert_eq!(conf.file.content(), "");
    assert_eq!(
        conf.file.path,
        "/etc/sysconfig/network-scripts/ifcfg-bond2:1"
    );
    assert_eq!(conf.side_effect, SideEffect::notify_network());
}

#[test]
fn test_alias_absent_unknown_iface() {
    let conf = new_alias("bond2:1", "absent")
        .gen_conf(&facts_with_ifaces("eth0"))
        .unwrap();

    assert!(!conf.file.present);
    assert_eq!(conf.side_effect, SideEffect::None);

    let conf = new_ifscripts_alias("bond2:1", "absent")
        .gen_conf(&HostFacts::new())
        .unwrap();
    assert_eq!(conf.side_effect, SideEffect::None);
}

#[test]
fn test_alias_ifscripts_up_refresh() {
    for restart in [true, false] {
        let mut alias = new_ifscripts_alias("bond2:1", "up");
        alias.restart = restart;

        let conf = alias.gen_conf(&facts_with_ifaces("eth0")).unwrap();

        assert!(conf.file.present);
        assert_eq!(conf.file.lines[2], "ONPARENT=yes");
        assert_eq!(
            conf.side_effect,
            SideEffect::ExecRefresh("bond2:1".to_string())
        );
        assert_eq!(
            conf.side_effect.title().as_deref(),
            Some("Refresh bond2:1")
        );
    }
}

#[test]
fn test_alias_ifscripts_down_no_action() {
    let conf = new_ifscripts_alias("bond2:1", "down")
        .gen_conf(&facts_with_ifaces("eth0,bond2:1"))
        .unwrap();

    assert!(conf.file.present);
    assert_eq!(conf.file.lines[2], "ONPARENT=no");
    assert_eq!(conf.side_effect, SideEffect::None);
}

#[test]
fn test_alias_ifscripts_absent_ifdown() {
    let conf = new_ifscripts_alias("bond2:1", "absent")
        .gen_conf(&facts_with_ifaces("eth0,bond2:1"))
        .unwrap();

    assert!(!conf.file.present);
    assert_eq!(
        conf.side_effect,
        SideEffect::ExecIfdown("bond2:1".to_string())
    );
    assert_eq!(conf.side_effect.title().as_deref(), Some("ifdown bond2:1"));
}

#[test]
fn test_alias_side_effects_never_overlap() {
    let facts = facts_with_ifaces("bond2:1");
    for ensure in ["up", "down", "absent"] {
        for restart in [true, false] {
            for use_if_scripts in [true, false] {
                let mut alias = new_alias("bond2:1", ensure);
                alias.restart = restart;
                alias.use_if_scripts = use_if_scripts;
                let side_effect = alias.gen_conf(&facts).unwrap().side_effect;
                if !use_if_scripts {
                    assert!(!side_effect.is_exec());
                } else {
                    assert!(!matches!(
                        side_effect,
                        SideEffect::NotifyService(_)
                    ));
                }
            }
        }
    }
}

#[test]
fn test_alias_render_custom_dir() {
    let alias = new_alias("eth0:0", "up").validate().unwrap();
    let conf = alias.render("/srv/scripts/", &HostFacts::new());
    assert_eq!(conf.file.path, "/srv/scripts/ifcfg-eth0:0");

    let conf = alias.render(DEFAULT_SCRIPTS_DIR, &HostFacts::new());
    assert_eq!(conf.file.file_name(), "ifcfg-eth0:0");
}

#[test]
fn test_alias_deserialize_defaults() {
    let alias: AliasConfig = serde_yaml::from_str(
        r#"---
name: bond2:1
ensure: up
ipaddress: 1.2.3.6
netmask: 255.255.255.0
"#,
    )
    .unwrap();

    assert!(alias.restart);
    assert!(!alias.use_if_scripts);
    assert!(!alias.no_alias_routing);
    assert!(!alias.user_controlled);
    assert_eq!(alias.gateway, None);
    assert_eq!(alias.metric, None);
}

#[test]
fn test_alias_deserialize_yes_no_strings() {
    let alias: AliasConfig = serde_yaml::from_str(
        r#"---
name: bond2:1
ensure: up
ipaddress: 1.2.3.6
netmask: 255.255.255.0
no-alias-routing: "yes"
user-controlled: "no"
restart: "false"
ifscripts: "true"
"#,
    )
    .unwrap();

    assert!(alias.no_alias_routing);
    assert!(!alias.user_controlled);
    assert!(!alias.restart);
    assert!(alias.use_if_scripts);
}

#[test]
fn test_alias_deserialize_unknown_property() {
    let result = serde_yaml::from_str::<AliasConfig>(
        r#"---
name: bond2:1
ensure: up
ipaddress: 1.2.3.6
netmask: 255.255.255.0
ipv6address: "::1"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_alias_content() {
    let conf = new_alias("eth0:1", "up")
        .gen_conf(&HostFacts::new())
        .unwrap();
    assert_eq!(
        conf.file.content(),
        "DEVICE=eth0:1\nBOOTPROTO=none\nONPARENT=yes\nTYPE=Ethernet\n\
        IPADDR=1.2.3.6\nNETMASK=255.255.255.0\nNO_ALIASROUTING=no\n\
        NM_CONTROLLED=no\n"
    );
}
