use std::fmt;

use serde::Serialize;
use wsmcore::{Payload, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Paramètres du prochain démarrage (IDER, SOL, verrouillages, BIOS)
    pub struct BootSettingData = "AMT_BootSettingData";
}

/// Corps d'un Put sur `AMT_BootSettingData`
///
/// L'ordre des champs est celui du schéma AMT.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AMT_BootSettingData")]
pub struct BootSettingDataRequest {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:ElementName")]
    pub element_name: String,
    #[serde(rename = "h:InstanceID")]
    pub instance_id: String,
    #[serde(rename = "h:BIOSPause")]
    pub bios_pause: bool,
    #[serde(rename = "h:BIOSSetup")]
    pub bios_setup: bool,
    #[serde(rename = "h:BootMediaIndex")]
    pub boot_media_index: u32,
    #[serde(rename = "h:ConfigurationDataReset")]
    pub configuration_data_reset: bool,
    #[serde(rename = "h:FirmwareVerbosity")]
    pub firmware_verbosity: u32,
    #[serde(rename = "h:ForcedProgressEvents")]
    pub forced_progress_events: bool,
    #[serde(rename = "h:IDERBootDevice")]
    pub ider_boot_device: u32,
    #[serde(rename = "h:LockKeyboard")]
    pub lock_keyboard: bool,
    #[serde(rename = "h:LockPowerButton")]
    pub lock_power_button: bool,
    #[serde(rename = "h:LockResetButton")]
    pub lock_reset_button: bool,
    #[serde(rename = "h:LockSleepButton")]
    pub lock_sleep_button: bool,
    #[serde(rename = "h:OwningEntity")]
    pub owning_entity: String,
    #[serde(rename = "h:ReflashBIOS")]
    pub reflash_bios: bool,
    #[serde(rename = "h:UseIDER")]
    pub use_ider: bool,
    #[serde(rename = "h:UseSOL")]
    pub use_sol: bool,
    #[serde(rename = "h:UseSafeMode")]
    pub use_safe_mode: bool,
    #[serde(rename = "h:UserPasswordBypass")]
    pub user_password_bypass: bool,
    #[serde(rename = "h:EnforceSecureBoot", skip_serializing_if = "Option::is_none")]
    pub enforce_secure_boot: Option<bool>,
}

impl Payload for BootSettingDataRequest {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

impl fmt::Display for BootSettingDataRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instance_id)
    }
}

impl BootSettingData {
    /// WS-Transfer Put, sans sélecteur dans l'en-tête
    pub fn put(&self, settings: BootSettingDataRequest) -> Result<String, WsmanError> {
        self.base.put(settings, false, None)
    }
}
