//! Classes du schéma Intel AMT

pub mod alarm_clock;
pub mod audit_log;
pub mod boot_setting_data;
pub mod general_settings;
pub mod message_log;
pub mod public_key;
pub mod redirection;
pub mod wifi;

pub use alarm_clock::{AlarmClockOccurrence, AlarmClockService};
pub use audit_log::AuditLog;
pub use boot_setting_data::{BootSettingData, BootSettingDataRequest};
pub use general_settings::GeneralSettings;
pub use message_log::MessageLog;
pub use public_key::{PublicKeyManagementService, SigningAlgorithm};
pub use redirection::{RedirectionService, RedirectionServiceRequest, RedirectionState};
pub use wifi::{
    AuthenticationMethod, AuthenticationProtocol, EncryptionMethod, Ieee8021xSettings,
    WiFiEndpointSettings, WiFiPortConfigurationService, WiFiPortConfigurationServiceRequest,
};
