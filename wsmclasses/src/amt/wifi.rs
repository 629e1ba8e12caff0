//! Configuration des profils Wi-Fi
//!
//! `AddWiFiSettings` ne passe pas par le sérialiseur générique : le corps
//! mêle trois namespaces (`h:` service, `q:` réglages Wi-Fi, `r:` 802.1x) et
//! des références d'endpoint dont l'ordre est imposé par le firmware.

use std::fmt;

use serde::Serialize;
use tracing::debug;
use wsmcore::actions::schema;
use wsmcore::fragment::{Element, element, endpoint_reference, namespaced, push, push_opt};
use wsmcore::{Payload, Selector, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Port Wi-Fi du firmware et ses profils
    pub struct WiFiPortConfigurationService = "AMT_WiFiPortConfigurationService";
}

const WIFI_ENDPOINT: &str = "CIM_WiFiEndpoint";
const WIFI_ENDPOINT_SETTINGS: &str = "CIM_WiFiEndpointSettings";
const IEEE8021X_SETTINGS: &str = "CIM_IEEE8021xSettings";
const PUBLIC_KEY_CERTIFICATE: &str = "AMT_PublicKeyCertificate";

/// Nom du seul endpoint Wi-Fi exposé par AMT
pub const DEFAULT_WIFI_ENDPOINT: &str = "WiFi Endpoint 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationMethod {
    Other = 1,
    OpenSystem = 2,
    SharedKey = 3,
    WpaPsk = 4,
    WpaIeee8021x = 5,
    Wpa2Psk = 6,
    Wpa2Ieee8021x = 7,
}

impl AuthenticationMethod {
    /// Les méthodes 802.1x exigent des réglages `IEEE8021xSettingsInput`
    pub fn is_ieee8021x(self) -> bool {
        matches!(self, Self::WpaIeee8021x | Self::Wpa2Ieee8021x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionMethod {
    Other = 1,
    Wep = 2,
    Tkip = 3,
    Ccmp = 4,
    None = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationProtocol {
    EapTls = 0,
    EapTtlsMsChapV2 = 1,
    PeapV0EapMsChapV2 = 2,
    PeapV1EapGtc = 3,
    EapFastMsChapV2 = 4,
    EapFastGtc = 5,
    EapMd5 = 6,
    EapPsk = 7,
    EapSim = 8,
    EapAka = 9,
    EapFastTls = 10,
}

/// Profil Wi-Fi (`CIM_WiFiEndpointSettings`)
#[derive(Debug, Clone)]
pub struct WiFiEndpointSettings {
    pub element_name: String,
    pub instance_id: String,
    pub authentication_method: AuthenticationMethod,
    pub encryption_method: EncryptionMethod,
    pub ssid: String,
    pub priority: u32,
    /// Uniquement pour les méthodes PSK
    pub psk_pass_phrase: Option<String>,
}

/// Réglages 802.1x (`CIM_IEEE8021xSettings`)
#[derive(Debug, Clone)]
pub struct Ieee8021xSettings {
    pub element_name: String,
    pub instance_id: String,
    pub authentication_protocol: AuthenticationProtocol,
    pub roaming_identity: Option<String>,
    pub server_certificate_name: Option<String>,
    pub server_certificate_name_comparison: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub domain: Option<String>,
    pub protected_access_credential: Option<String>,
    pub pac_password: Option<String>,
    pub psk: Option<String>,
}

impl Ieee8021xSettings {
    pub fn new(
        element_name: impl Into<String>,
        instance_id: impl Into<String>,
        authentication_protocol: AuthenticationProtocol,
    ) -> Self {
        Self {
            element_name: element_name.into(),
            instance_id: instance_id.into(),
            authentication_protocol,
            roaming_identity: None,
            server_certificate_name: None,
            server_certificate_name_comparison: None,
            username: None,
            password: None,
            domain: None,
            protected_access_credential: None,
            pac_password: None,
            psk: None,
        }
    }
}

/// Corps d'un Put sur le service
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AMT_WiFiPortConfigurationService")]
pub struct WiFiPortConfigurationServiceRequest {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "h:ElementName")]
    pub element_name: String,
    #[serde(rename = "h:EnabledState")]
    pub enabled_state: u32,
    #[serde(rename = "h:LocalProfileSynchronizationEnabled")]
    pub local_profile_synchronization_enabled: u32,
    #[serde(rename = "h:Name")]
    pub name: String,
    #[serde(rename = "h:RequestedState")]
    pub requested_state: u32,
    #[serde(rename = "h:SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "h:SystemName")]
    pub system_name: String,
}

impl Payload for WiFiPortConfigurationServiceRequest {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for WiFiPortConfigurationServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn wifi_settings_element(settings: &WiFiEndpointSettings) -> Element {
    let namespace = format!("{}{}", schema::CIM, WIFI_ENDPOINT_SETTINGS);
    let mut input = namespaced("q:WiFiEndpointSettingsInput", "q", &namespace);
    push(&mut input, element("q:ElementName", settings.element_name.as_str()));
    push(&mut input, element("q:InstanceID", settings.instance_id.as_str()));
    push(
        &mut input,
        element(
            "q:AuthenticationMethod",
            (settings.authentication_method as u32).to_string(),
        ),
    );
    push(
        &mut input,
        element(
            "q:EncryptionMethod",
            (settings.encryption_method as u32).to_string(),
        ),
    );
    push(&mut input, element("q:SSID", settings.ssid.as_str()));
    push(&mut input, element("q:Priority", settings.priority.to_string()));
    push_opt(&mut input, "q:PSKPassPhrase", settings.psk_pass_phrase.as_ref());
    input
}

fn ieee8021x_element(settings: &Ieee8021xSettings) -> Element {
    let namespace = format!("{}{}", schema::CIM, IEEE8021X_SETTINGS);
    let mut input = namespaced("r:IEEE8021xSettingsInput", "r", &namespace);
    push(&mut input, element("r:ElementName", settings.element_name.as_str()));
    push(&mut input, element("r:InstanceID", settings.instance_id.as_str()));
    push(
        &mut input,
        element(
            "r:AuthenticationProtocol",
            (settings.authentication_protocol as u32).to_string(),
        ),
    );
    push_opt(&mut input, "r:RoamingIdentity", settings.roaming_identity.as_ref());
    push_opt(
        &mut input,
        "r:ServerCertificateName",
        settings.server_certificate_name.as_ref(),
    );
    push_opt(
        &mut input,
        "r:ServerCertificateNameComparison",
        settings.server_certificate_name_comparison,
    );
    push_opt(&mut input, "r:Username", settings.username.as_ref());
    push_opt(&mut input, "r:Password", settings.password.as_ref());
    push_opt(&mut input, "r:Domain", settings.domain.as_ref());
    push_opt(
        &mut input,
        "r:ProtectedAccessCredential",
        settings.protected_access_credential.as_ref(),
    );
    push_opt(&mut input, "r:PACPassword", settings.pac_password.as_ref());
    push_opt(&mut input, "r:PSK", settings.psk.as_ref());
    input
}

impl WiFiPortConfigurationService {
    pub fn put(&self, request: WiFiPortConfigurationServiceRequest) -> Result<String, WsmanError> {
        self.base.put(request, false, None)
    }

    /// `AddWiFiSettings` : ajoute un profil Wi-Fi à l'endpoint `wifi_endpoint`
    ///
    /// Les certificats client et CA (InstanceID de `AMT_PublicKeyCertificate`)
    /// ne sont émis qu'avec des réglages 802.1x ; une chaîne vide les omet.
    pub fn add_wifi_settings(
        &self,
        wifi_endpoint: &str,
        settings: &WiFiEndpointSettings,
        ieee8021x: Option<&Ieee8021xSettings>,
        client_credential: &str,
        ca_credential: &str,
    ) -> Result<String, WsmanError> {
        if settings.authentication_method.is_ieee8021x() && ieee8021x.is_none() {
            return Err(WsmanError::invalid_argument(
                "IEEE 802.1x authentication requires IEEE8021xSettings",
            ));
        }
        debug!(
            ssid = %settings.ssid,
            ieee8021x = ieee8021x.is_some(),
            "AddWiFiSettings"
        );

        let creator = self.base.creator();
        let mut input = namespaced("h:AddWiFiSettings_INPUT", "h", &self.base.resource_uri());
        push(
            &mut input,
            endpoint_reference(
                "h:WiFiEndpoint",
                creator.destination(),
                &format!("{}{}", schema::CIM, WIFI_ENDPOINT),
                &[Selector::new("Name", wifi_endpoint)],
            ),
        );
        push(&mut input, wifi_settings_element(settings));

        if let Some(ieee8021x) = ieee8021x {
            push(&mut input, ieee8021x_element(ieee8021x));

            let certificate_uri = creator.resource_uri(PUBLIC_KEY_CERTIFICATE);
            for (name, credential) in [
                ("h:ClientCredential", client_credential),
                ("h:CACredential", ca_credential),
            ] {
                if !credential.is_empty() {
                    push(
                        &mut input,
                        endpoint_reference(
                            name,
                            creator.destination(),
                            &certificate_uri,
                            &[Selector::instance_id(credential)],
                        ),
                    );
                }
            }
        }

        let header = self
            .base
            .header(&self.base.method_action("AddWiFiSettings"), None);
        let body = creator.create_body_from_element(&input)?;
        Ok(self.base.envelope(&header, &body))
    }
}
