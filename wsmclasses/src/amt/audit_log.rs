use serde::Serialize;
use wsmcore::{Payload, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Journal d'audit du firmware
    pub struct AuditLog = "AMT_AuditLog";
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:ReadRecords_INPUT")]
pub struct ReadRecordsInput {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:StartIndex")]
    pub start_index: u32,
}

impl Payload for ReadRecordsInput {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl AuditLog {
    /// `ReadRecords` à partir de l'index `start_index` (1 au minimum)
    pub fn read_records(&self, start_index: u32) -> Result<String, WsmanError> {
        let input = ReadRecordsInput {
            start_index: start_index.max(1),
            ..Default::default()
        };
        let header = self.base.header(&self.base.method_action("ReadRecords"), None);
        let body = self
            .base
            .creator()
            .create_body("ReadRecords_INPUT", Self::CLASS_NAME, Some(input))?;
        Ok(self.base.envelope(&header, &body))
    }
}
