use std::fmt;

use serde::Serialize;
use wsmcore::{Payload, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Service de redirection : active IDER et SOL
    pub struct RedirectionService = "AMT_RedirectionService";
}

/// États acceptés par `RequestStateChange`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionState {
    Disabled = 32768,
    IderEnabled = 32769,
    SolEnabled = 32770,
    IderAndSolEnabled = 32771,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AMT_RedirectionService")]
pub struct RedirectionServiceRequest {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "h:ElementName")]
    pub element_name: String,
    #[serde(rename = "h:EnabledState")]
    pub enabled_state: u32,
    #[serde(rename = "h:ListenerEnabled")]
    pub listener_enabled: bool,
    #[serde(rename = "h:Name")]
    pub name: String,
    #[serde(rename = "h:SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "h:SystemName")]
    pub system_name: String,
}

impl Payload for RedirectionServiceRequest {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for RedirectionServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl RedirectionService {
    pub fn put(&self, service: RedirectionServiceRequest) -> Result<String, WsmanError> {
        self.base.put(service, false, None)
    }

    /// `RequestStateChange` avec l'action propre au schéma AMT
    pub fn request_state_change(&self, state: RedirectionState) -> String {
        let action = self.base.method_action("RequestStateChange");
        self.base.request_state_change(&action, state as u32)
    }
}
