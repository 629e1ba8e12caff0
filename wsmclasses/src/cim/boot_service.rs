use wsmcore::fragment::{element, namespaced, push, qualified_endpoint_reference};
use wsmcore::{Selector, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Service de démarrage CIM : choix de la configuration de boot
    pub struct BootService = "CIM_BootService";
}

const BOOT_CONFIG_SETTING: &str = "CIM_BootConfigSetting";

/// Rôle attribué à une configuration de démarrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootConfigRole {
    IsNext = 0,
    IsNextSingleUse = 1,
    IsDefault = 2,
    DmtfReserved = 3,
    VendorSpecified = 32768,
}

impl BootService {
    /// `SetBootConfigRole` : désigne `instance_id` comme configuration de boot
    pub fn set_boot_config_role(
        &self,
        instance_id: &str,
        role: BootConfigRole,
    ) -> Result<String, WsmanError> {
        let mut input = namespaced("h:SetBootConfigRole_INPUT", "h", &self.base.resource_uri());
        push(
            &mut input,
            qualified_endpoint_reference(
                "h:BootConfigSetting",
                &self.base.creator().resource_uri(BOOT_CONFIG_SETTING),
                &[Selector::instance_id(instance_id)],
            ),
        );
        push(&mut input, element("h:Role", (role as u32).to_string()));

        let header = self
            .base
            .header(&self.base.method_action("SetBootConfigRole"), None);
        let body = self.base.creator().create_body_from_element(&input)?;
        Ok(self.base.envelope(&header, &body))
    }

    /// `RequestStateChange` avec l'action DMTF de la classe
    pub fn request_state_change(&self, requested_state: u32) -> String {
        let action = self.base.method_action("RequestStateChange");
        self.base.request_state_change(&action, requested_state)
    }
}
