use std::fmt;

use serde::Serialize;
use wsmcore::{Payload, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Consentement de l'utilisateur (code affiché à l'écran) avant KVM ou redirection
    pub struct OptInService = "IPS_OptInService";
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:IPS_OptInService")]
pub struct OptInServiceRequest {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:CanModifyOptInPolicy")]
    pub can_modify_opt_in_policy: u32,
    #[serde(rename = "h:CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "h:ElementName")]
    pub element_name: String,
    #[serde(rename = "h:Name")]
    pub name: String,
    #[serde(rename = "h:OptInCodeTimeout")]
    pub opt_in_code_timeout: u32,
    #[serde(rename = "h:OptInDisplayTimeout")]
    pub opt_in_display_timeout: u32,
    #[serde(rename = "h:OptInRequired")]
    pub opt_in_required: u32,
    #[serde(rename = "h:OptInState")]
    pub opt_in_state: u32,
    #[serde(rename = "h:SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "h:SystemName")]
    pub system_name: String,
}

impl Payload for OptInServiceRequest {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for OptInServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:SendOptInCode_INPUT")]
pub struct SendOptInCodeInput {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:OptInCode")]
    pub opt_in_code: u32,
}

impl Payload for SendOptInCodeInput {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl OptInService {
    pub fn put(&self, request: OptInServiceRequest) -> Result<String, WsmanError> {
        self.base.put(request, false, None)
    }

    fn no_argument(&self, method: &str) -> String {
        let header = self.base.header(&self.base.method_action(method), None);
        let body = self
            .base
            .creator()
            .create_empty_input_body(&format!("{}_INPUT", method), Self::CLASS_NAME);
        self.base.envelope(&header, &body)
    }

    /// `StartOptIn` : demande l'affichage d'un code sur l'écran local
    pub fn start_opt_in(&self) -> String {
        self.no_argument("StartOptIn")
    }

    pub fn cancel_opt_in(&self) -> String {
        self.no_argument("CancelOptIn")
    }

    /// `SendOptInCode` : transmet le code lu par l'utilisateur
    pub fn send_opt_in_code(&self, opt_in_code: u32) -> Result<String, WsmanError> {
        let input = SendOptInCodeInput {
            opt_in_code,
            ..Default::default()
        };
        let header = self
            .base
            .header(&self.base.method_action("SendOptInCode"), None);
        let body = self
            .base
            .creator()
            .create_body("SendOptInCode_INPUT", Self::CLASS_NAME, Some(input))?;
        Ok(self.base.envelope(&header, &body))
    }
}
