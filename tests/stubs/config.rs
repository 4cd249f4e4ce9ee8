#![allow(dead_code)]
// This is infuriating, but rust-analyzer seems to arbitrarily think
// that some of these are unused; hence the warning suppression

/// nut-scanner SNMP output for an Eaton ePDU.
pub const SNMP_EPDU: &str = r#"
[nutdev1]
	driver = "snmp-ups"
	port = "10.130.33.7"
	desc = "EATON ePDU MA 1P IN:C20 16A OUT:20xC13, 4xC19"
	mibs = "eaton_epdu"
	community = "public"
"#;

/// nut-scanner SNMP output for a UPS answering to two MIBs.
pub const SNMP_UPS: &str = r#"
[nutdev1]
	driver = "snmp-ups"
	port = "10.130.33.8"
	desc = "Eaton 9PX"
	mibs = "ietf"
	community = "public"
[nutdev2]
	driver = "snmp-ups"
	port = "10.130.33.8"
	desc = "Eaton 9PX"
	mibs = "mge"
	community = "public"
"#;

/// nut-scanner NetXML output for the same UPS.
pub const NETXML_UPS: &str = r#"
[nutdev1]
	driver = "netxml-ups"
	port = "http://10.130.33.8"
	desc = "Eaton 9PX"
"#;

pub const CREDENTIALS: &str = r#"[
    {"type": "snmpv3", "security_name": "monitor", "security_level": "authPriv",
     "auth_protocol": "SHA", "auth_password": "authpass", "priv_protocol": "AES",
     "priv_password": "privpass"},
    {"type": "snmpv1", "community": "public"},
    {"type": "snmpv3", "security_name": "fallback"}
]"#;

pub const ASSETS: &str = r#"{
    "ups1": {"upsconf_block": "|driver=dummy-ups|port=/etc/nut/ups1.dev"},
    "pdu1": {"upsconf_block": ";[pdu1];driver=snmp-ups;mibs=eaton_epdu;port=10.0.0.2"},
    "ats1": {"upsconf_block": ""}
}"#;
