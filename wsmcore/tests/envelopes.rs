use std::fmt;

use serde::Serialize;
use wsmcore::actions::{self, XML_PREFIX, schema};
use wsmcore::{Base, MessageCounter, MessageCreator, Payload, Selector, WsmanError};

/// Payload de test pour Put/Create
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AMT_EthernetPortSettings")]
struct EthernetPortSettings {
    #[serde(rename = "@xmlns:h")]
    h: String,
    #[serde(rename = "h:InstanceID")]
    instance_id: String,
    #[serde(rename = "h:DHCPEnabled")]
    dhcp_enabled: bool,
}

impl Payload for EthernetPortSettings {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for EthernetPortSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instance_id)
    }
}

// Un espace n'est pas autorisé dans un nom d'élément XML
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "h:Malformed Settings")]
struct MalformedSettings {
    #[serde(rename = "@xmlns:h")]
    h: String,
    #[serde(rename = "h:Instance ID")]
    instance_id: String,
}

impl Payload for MalformedSettings {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for MalformedSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instance_id)
    }
}

fn malformed() -> MalformedSettings {
    MalformedSettings {
        h: String::new(),
        instance_id: "Intel(r) AMT Ethernet Port Settings 0".to_string(),
    }
}

fn ethernet() -> Base {
    Base::new(MessageCreator::new(schema::AMT), "AMT_EthernetPortSettings")
}

fn settings() -> EthernetPortSettings {
    EthernetPortSettings {
        instance_id: "Intel(r) AMT Ethernet Port Settings 0".to_string(),
        dhcp_enabled: true,
        ..Default::default()
    }
}

fn message_id(xml: &str) -> u64 {
    let start = xml.find("<a:MessageID>").unwrap() + "<a:MessageID>".len();
    let end = xml.find("</a:MessageID>").unwrap();
    xml[start..end].parse().unwrap()
}

fn body(xml: &str) -> &str {
    let start = xml.find("<Body>").unwrap();
    let end = xml.rfind("</Envelope>").unwrap();
    &xml[start..end]
}

#[test]
fn test_enumerate_end_to_end() {
    let base = Base::new(MessageCreator::new(schema::AMT), "AMT_AlarmClockService");
    let xml = base.enumerate();

    assert!(xml.starts_with(XML_PREFIX));
    assert!(xml.ends_with("</Envelope>"));
    assert!(xml.contains(
        "<a:Action>http://schemas.xmlsoap.org/ws/2004/09/enumeration/Enumerate</a:Action>"
    ));
    assert!(xml.contains(
        "<w:ResourceURI>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_AlarmClockService</w:ResourceURI>"
    ));
    assert!(xml.contains("<a:MessageID>0</a:MessageID>"));
    assert_eq!(
        body(&xml),
        r#"<Body><Enumerate xmlns="http://schemas.xmlsoap.org/ws/2004/09/enumeration" /></Body>"#
    );
}

#[test]
fn test_message_id_counts_every_verb() {
    let base = ethernet();
    let outputs = vec![
        base.get(None),
        base.enumerate(),
        base.pull("ctx", 0, 0),
        base.delete(None),
        base.request_state_change(
            &actions::generate_action(schema::AMT, "AMT_EthernetPortSettings", "RequestStateChange"),
            2,
        ),
        base.put(settings(), false, None).unwrap(),
        base.create(settings(), None).unwrap(),
    ];
    for (expected, xml) in outputs.iter().enumerate() {
        assert_eq!(message_id(xml), expected as u64);
        assert_eq!(xml.matches("<a:MessageID>").count(), 1);
    }
}

#[test]
fn test_shared_counter_across_creators() {
    let counter = MessageCounter::new();
    let amt = Base::new(
        MessageCreator::with_counter(schema::AMT, counter.clone()),
        "AMT_GeneralSettings",
    );
    let cim = Base::new(
        MessageCreator::with_counter(schema::CIM, counter.clone()),
        "CIM_BootService",
    );
    assert_eq!(message_id(&amt.get(None)), 0);
    assert_eq!(message_id(&cim.get(None)), 1);
    assert_eq!(message_id(&amt.enumerate()), 2);
    assert_eq!(counter.peek(), 3);
}

#[test]
fn test_identically_seeded_creators_are_deterministic() {
    let run = || {
        let base = ethernet();
        vec![
            base.get(Some(&Selector::instance_id("x"))),
            base.pull("ctx", 10, 20),
            base.put(settings(), true, None).unwrap(),
        ]
    };
    assert_eq!(run(), run());
}

#[test]
fn test_pull_body() {
    let xml = ethernet().pull("A4070000-0000-0000-0000-000000000000", 0, 0);
    assert!(xml.contains("<a:Action>http://schemas.xmlsoap.org/ws/2004/09/enumeration/Pull</a:Action>"));
    assert_eq!(
        body(&xml),
        concat!(
            r#"<Body><Pull xmlns="http://schemas.xmlsoap.org/ws/2004/09/enumeration">"#,
            "<EnumerationContext>A4070000-0000-0000-0000-000000000000</EnumerationContext>",
            "<MaxElements>999</MaxElements><MaxCharacters>99999</MaxCharacters>",
            "</Pull></Body>"
        )
    );
}

#[test]
fn test_delete_selector_only_in_header() {
    let selector = Selector::instance_id("Intel(r) AMT Ethernet Port Settings 1");
    let xml = ethernet().delete(Some(&selector));
    assert!(xml.contains("<a:Action>http://schemas.xmlsoap.org/ws/2004/09/transfer/Delete</a:Action>"));
    assert_eq!(body(&xml), "<Body></Body>");
    let header_end = xml.find("</Header>").unwrap();
    assert!(xml[..header_end].contains(
        r#"<w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT Ethernet Port Settings 1</w:Selector></w:SelectorSet>"#
    ));
}

#[test]
fn test_put_synthesizes_instance_id_selector() {
    let xml = ethernet().put(settings(), true, None).unwrap();
    assert!(xml.contains(
        r#"<w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT Ethernet Port Settings 0</w:Selector></w:SelectorSet></Header>"#
    ));
    assert_eq!(
        body(&xml),
        concat!(
            r#"<Body><h:AMT_EthernetPortSettings xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_EthernetPortSettings">"#,
            "<h:InstanceID>Intel(r) AMT Ethernet Port Settings 0</h:InstanceID>",
            "<h:DHCPEnabled>true</h:DHCPEnabled>",
            "</h:AMT_EthernetPortSettings></Body>"
        )
    );
}

#[test]
fn test_put_custom_selector_and_no_header_selector() {
    let base = ethernet();
    let custom = Selector::new("Name", "custom");
    let xml = base.put(settings(), true, Some(custom)).unwrap();
    assert!(xml.contains(r#"<w:Selector Name="Name">custom</w:Selector>"#));

    let xml = base.put(settings(), false, None).unwrap();
    assert!(!xml.contains("SelectorSet"));
}

#[test]
fn test_create_places_selector_in_header() {
    let selector = Selector::new("Name", "target");
    let xml = ethernet().create(settings(), Some(&selector)).unwrap();
    assert!(xml.contains("<a:Action>http://schemas.xmlsoap.org/ws/2004/09/transfer/Create</a:Action>"));
    let body = body(&xml);
    assert!(!body.contains("SelectorSet"));
    assert!(body.starts_with("<Body><h:AMT_EthernetPortSettings xmlns:h="));
}

#[test]
fn test_request_state_change_uses_caller_action() {
    let base = Base::new(MessageCreator::new(schema::CIM), "CIM_BootService");
    let action = base.method_action("RequestStateChange");
    let xml = base.request_state_change(&action, 32769);
    assert!(xml.contains(
        "<a:Action>http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService/RequestStateChange</a:Action>"
    ));
    assert_eq!(
        body(&xml),
        r#"<Body><h:RequestStateChange_INPUT xmlns:h="http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService"><h:RequestedState>32769</h:RequestedState></h:RequestStateChange_INPUT></Body>"#
    );
}

#[test]
fn test_put_serialization_error_reaches_caller() {
    let base = ethernet();
    let result = base.put(malformed(), true, None);
    assert!(matches!(result, Err(WsmanError::Serialization(_))));
    // L'en-tête a été construit avant le corps : l'identifiant est consommé
    assert_eq!(base.creator().counter().peek(), 1);
}

#[test]
fn test_create_serialization_error_reaches_caller() {
    let base = ethernet();
    base.get(None);
    let result = base.create(malformed(), None);
    assert!(matches!(result, Err(WsmanError::Serialization(_))));
    assert_eq!(base.creator().counter().peek(), 2);

    // Le compteur reste cohérent pour les messages suivants
    assert_eq!(message_id(&base.get(None)), 2);
}

#[test]
fn test_empty_string_field_is_an_open_close_pair() {
    let settings = EthernetPortSettings {
        dhcp_enabled: true,
        ..Default::default()
    };
    let xml = ethernet().create(settings, None).unwrap();
    assert!(body(&xml).contains("<h:InstanceID></h:InstanceID><h:DHCPEnabled>true</h:DHCPEnabled>"));
}
