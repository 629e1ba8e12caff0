//! URIs et littéraux fixes du protocole WS-Management
//!
//! Toutes ces valeurs sont reproduites à l'octet près : les agents AMT
//! comparent les chaînes telles quelles.

/// Préfixe XML commun à toutes les enveloppes
pub const XML_PREFIX: &str = r#"<?xml version="1.0" encoding="utf-8"?><Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:a="http://schemas.xmlsoap.org/ws/2004/08/addressing" xmlns:w="http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd" xmlns="http://www.w3.org/2003/05/soap-envelope">"#;

/// Suffixe XML commun à toutes les enveloppes
pub const XML_SUFFIX: &str = "</Envelope>";

/// Adresse ReplyTo par défaut (rôle anonyme WS-Addressing)
pub const ANONYMOUS_ADDRESS: &str =
    "http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous";

/// OperationTimeout par défaut
pub const DEFAULT_TIMEOUT: &str = "PT60S";

/// Destination `<a:To>` par défaut
pub const DEFAULT_DESTINATION: &str = "/wsman";

/// MaxElements d'un Pull quand l'appelant passe 0
pub const DEFAULT_MAX_ELEMENTS: u32 = 999;

/// MaxCharacters d'un Pull quand l'appelant passe 0
pub const DEFAULT_MAX_CHARACTERS: u32 = 99999;

/// Bases des URI de ressources par schéma
pub mod schema {
    pub const AMT: &str = "http://intel.com/wbem/wscim/1/amt-schema/1/";
    pub const CIM: &str = "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/";
    pub const IPS: &str = "http://intel.com/wbem/wscim/1/ips-schema/1/";
}

/// Namespaces utilisés dans les corps de messages
pub mod ns {
    pub const ADDRESSING: &str = "http://schemas.xmlsoap.org/ws/2004/08/addressing";
    pub const WSMAN: &str = "http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd";
    pub const ENUMERATION: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration";
    pub const CIM_COMMON: &str = "http://schemas.dmtf.org/wbem/wscim/1/common";
}

pub const GET: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Get";
pub const PUT: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Put";
pub const DELETE: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Delete";
pub const CREATE: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Create";
pub const ENUMERATE: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration/Enumerate";
pub const PULL: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration/Pull";

/// Construit l'URI d'action d'une méthode spécifique à une classe
///
/// # Exemple
///
/// ```
/// use wsmcore::actions::{generate_action, schema};
///
/// assert_eq!(
///     generate_action(schema::AMT, "AMT_AlarmClockService", "AddAlarm"),
///     "http://intel.com/wbem/wscim/1/amt-schema/1/AMT_AlarmClockService/AddAlarm"
/// );
/// ```
pub fn generate_action(resource_uri_base: &str, class_name: &str, method: &str) -> String {
    format!("{}{}/{}", resource_uri_base, class_name, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_state_change_action() {
        assert_eq!(
            generate_action(schema::CIM, "CIM_BootService", "RequestStateChange"),
            "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService/RequestStateChange"
        );
    }

    #[test]
    fn test_prefix_namespaces() {
        assert!(XML_PREFIX.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert_eq!(XML_PREFIX.matches("xmlns").count(), 5);
        assert!(XML_PREFIX.contains(r#"xmlns="http://www.w3.org/2003/05/soap-envelope""#));
    }
}
