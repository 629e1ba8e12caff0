use wsmcore::fragment::{element, namespaced, push, qualified_endpoint_reference};
use wsmcore::{Selector, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Contrôle de l'alimentation de la plateforme
    pub struct PowerManagementService = "CIM_PowerManagementService";
}

const COMPUTER_SYSTEM: &str = "CIM_ComputerSystem";
const MANAGED_SYSTEM: &str = "ManagedSystem";

/// Valeurs CIM de `PowerState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    PowerOn = 2,
    SleepLight = 3,
    SleepDeep = 4,
    PowerCycleOffSoft = 5,
    PowerOffHard = 6,
    Hibernate = 7,
    PowerOffSoft = 8,
    PowerCycleOffHard = 9,
    MasterBusReset = 10,
    DiagnosticInterruptNmi = 11,
    PowerOffSoftGraceful = 12,
    PowerOffHardGraceful = 13,
    MasterBusResetGraceful = 14,
    PowerCycleOffSoftGraceful = 15,
    PowerCycleOffHardGraceful = 16,
}

impl PowerManagementService {
    /// `RequestPowerStateChange` appliqué au système géré
    pub fn request_power_state_change(&self, power_state: PowerState) -> Result<String, WsmanError> {
        let mut input = namespaced(
            "h:RequestPowerStateChange_INPUT",
            "h",
            &self.base.resource_uri(),
        );
        push(&mut input, element("h:PowerState", (power_state as u32).to_string()));
        push(
            &mut input,
            qualified_endpoint_reference(
                "h:ManagedElement",
                &self.base.creator().resource_uri(COMPUTER_SYSTEM),
                &[
                    Selector::new("CreationClassName", COMPUTER_SYSTEM),
                    Selector::new("Name", MANAGED_SYSTEM),
                ],
            ),
        );

        let header = self
            .base
            .header(&self.base.method_action("RequestPowerStateChange"), None);
        let body = self.base.creator().create_body_from_element(&input)?;
        Ok(self.base.envelope(&header, &body))
    }
}
