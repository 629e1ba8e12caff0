use wsmclasses::Messages;
use wsmclasses::amt::{BootSettingDataRequest, RedirectionState};
use wsmclasses::cim::{BootConfigRole, PowerState};
use wsmconfig::Config;

fn message_id(xml: &str) -> u64 {
    let start = xml.find("<a:MessageID>").unwrap() + "<a:MessageID>".len();
    let end = xml[start..].find('<').unwrap() + start;
    xml[start..end].parse().unwrap()
}

#[test]
fn test_schemas_share_one_sequence() {
    let messages = Messages::new();

    let ids: Vec<u64> = vec![
        message_id(&messages.amt.general_settings.get()),
        message_id(&messages.cim.boot_service.enumerate()),
        message_id(&messages.ips.opt_in_service.start_opt_in()),
        message_id(
            &messages
                .amt
                .redirection_service
                .request_state_change(RedirectionState::SolEnabled),
        ),
        message_id(
            &messages
                .cim
                .power_management_service
                .request_power_state_change(PowerState::PowerOn)
                .unwrap(),
        ),
    ];

    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(messages.counter().peek(), 5);
}

#[test]
fn test_each_schema_uses_its_base() {
    let messages = Messages::new();
    assert!(messages.amt.audit_log.get().contains(
        "<w:ResourceURI>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_AuditLog</w:ResourceURI>"
    ));
    assert!(messages.cim.boot_service.get().contains(
        "<w:ResourceURI>http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService</w:ResourceURI>"
    ));
    assert!(messages.ips.opt_in_service.get().contains(
        "<w:ResourceURI>http://intel.com/wbem/wscim/1/ips-schema/1/IPS_OptInService</w:ResourceURI>"
    ));
}

#[test]
fn test_from_config() {
    let config = Config::from_yaml_str(
        r#"
wsman:
  resource_uri_base:
    cim: "http://lab.example/cim/"
  header:
    destination: "https://amt.example:16993/wsman"
    reply_to: "http://lab.example/reply"
    operation_timeout: "PT30S"
  message_id:
    first: 41
"#,
    )
    .unwrap();
    let messages = Messages::from_config(&config);

    let xml = messages
        .cim
        .boot_service
        .set_boot_config_role("Intel(r) AMT: Boot Configuration 0", BootConfigRole::IsNextSingleUse)
        .unwrap();
    assert!(xml.contains("<a:To>https://amt.example:16993/wsman</a:To>"));
    assert!(xml.contains("<w:ResourceURI>http://lab.example/cim/CIM_BootService</w:ResourceURI>"));
    assert!(xml.contains("<a:MessageID>41</a:MessageID>"));
    assert!(xml.contains("<a:ReplyTo><a:Address>http://lab.example/reply</a:Address></a:ReplyTo>"));
    assert!(xml.contains("<w:OperationTimeout>PT30S</w:OperationTimeout>"));

    // Les bases absentes de la configuration gardent leur valeur standard
    let amt = messages.amt.general_settings.get();
    assert!(amt.contains("http://intel.com/wbem/wscim/1/amt-schema/1/AMT_GeneralSettings"));
    assert!(amt.contains("<a:MessageID>42</a:MessageID>"));
}

#[test]
fn test_rejected_argument_does_not_consume_an_id() {
    let messages = Messages::new();
    assert!(messages.amt.public_key_management_service.add_certificate("").is_err());
    assert_eq!(messages.counter().peek(), 0);

    let request = BootSettingDataRequest {
        instance_id: "Intel(r) AMT:BootSettingData 0".to_string(),
        ..Default::default()
    };
    let xml = messages.amt.boot_setting_data.put(request).unwrap();
    assert_eq!(message_id(&xml), 0);
}

#[test]
fn test_put_keeps_empty_fields_as_open_close_pairs() {
    let messages = Messages::new();
    let request = BootSettingDataRequest {
        instance_id: "Intel(r) AMT:BootSettingData 0".to_string(),
        ..Default::default()
    };
    let xml = messages.amt.boot_setting_data.put(request).unwrap();
    assert!(xml.contains(concat!(
        "<h:ElementName></h:ElementName>",
        "<h:InstanceID>Intel(r) AMT:BootSettingData 0</h:InstanceID>"
    )));
    assert!(xml.contains("<h:OwningEntity></h:OwningEntity>"));
    assert!(!xml.contains("/>"));
}
