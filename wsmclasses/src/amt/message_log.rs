use serde::Serialize;
use wsmcore::{Payload, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Journal des événements de la plateforme
    pub struct MessageLog = "AMT_MessageLog";
}

const DEFAULT_MAX_READ_RECORDS: u32 = 390;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:GetRecords_INPUT")]
pub struct GetRecordsInput {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:IterationIdentifier")]
    pub iteration_identifier: u32,
    #[serde(rename = "h:MaxReadRecords")]
    pub max_read_records: u32,
}

impl Payload for GetRecordsInput {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl MessageLog {
    /// `GetRecords` : `identifier` vaut au moins 1, `max_read_records` 390 si nul
    pub fn get_records(&self, identifier: u32, max_read_records: u32) -> Result<String, WsmanError> {
        let input = GetRecordsInput {
            iteration_identifier: identifier.max(1),
            max_read_records: if max_read_records == 0 {
                DEFAULT_MAX_READ_RECORDS
            } else {
                max_read_records
            },
            ..Default::default()
        };
        let header = self.base.header(&self.base.method_action("GetRecords"), None);
        let body = self
            .base
            .creator()
            .create_body("GetRecords_INPUT", Self::CLASS_NAME, Some(input))?;
        Ok(self.base.envelope(&header, &body))
    }

    /// `PositionToFirstRecord`, sans argument
    pub fn position_to_first_record(&self) -> String {
        let header = self
            .base
            .header(&self.base.method_action("PositionToFirstRecord"), None);
        let body = self
            .base
            .creator()
            .create_empty_input_body("PositionToFirstRecord_INPUT", Self::CLASS_NAME);
        self.base.envelope(&header, &body)
    }
}
