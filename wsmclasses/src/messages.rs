//! Point d'entrée : toutes les classes, numérotées par un même compteur

use tracing::debug;
use wsmconfig::Config;
use wsmcore::actions::schema;
use wsmcore::{MessageCounter, MessageCreator};

use crate::amt::{
    AlarmClockService, AuditLog, BootSettingData, GeneralSettings, MessageLog,
    PublicKeyManagementService, RedirectionService, WiFiPortConfigurationService,
};
use crate::cim::{BootService, PowerManagementService};
use crate::ips::OptInService;

#[derive(Debug, Clone)]
pub struct AmtMessages {
    pub alarm_clock_service: AlarmClockService,
    pub audit_log: AuditLog,
    pub boot_setting_data: BootSettingData,
    pub general_settings: GeneralSettings,
    pub message_log: MessageLog,
    pub public_key_management_service: PublicKeyManagementService,
    pub redirection_service: RedirectionService,
    pub wifi_port_configuration_service: WiFiPortConfigurationService,
}

impl AmtMessages {
    fn new(creator: MessageCreator) -> Self {
        Self {
            alarm_clock_service: AlarmClockService::new(creator.clone()),
            audit_log: AuditLog::new(creator.clone()),
            boot_setting_data: BootSettingData::new(creator.clone()),
            general_settings: GeneralSettings::new(creator.clone()),
            message_log: MessageLog::new(creator.clone()),
            public_key_management_service: PublicKeyManagementService::new(creator.clone()),
            redirection_service: RedirectionService::new(creator.clone()),
            wifi_port_configuration_service: WiFiPortConfigurationService::new(creator),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CimMessages {
    pub boot_service: BootService,
    pub power_management_service: PowerManagementService,
}

impl CimMessages {
    fn new(creator: MessageCreator) -> Self {
        Self {
            boot_service: BootService::new(creator.clone()),
            power_management_service: PowerManagementService::new(creator),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IpsMessages {
    pub opt_in_service: OptInService,
}

impl IpsMessages {
    fn new(creator: MessageCreator) -> Self {
        Self {
            opt_in_service: OptInService::new(creator),
        }
    }
}

/// Générateurs des trois schémas
///
/// Les MessageID sont uniques et croissants sur l'ensemble des classes,
/// quel que soit le schéma.
#[derive(Debug, Clone)]
pub struct Messages {
    pub amt: AmtMessages,
    pub cim: CimMessages,
    pub ips: IpsMessages,
    counter: MessageCounter,
}

impl Messages {
    /// Bases d'URI standard, en-têtes par défaut, numérotation à partir de 0
    pub fn new() -> Self {
        let counter = MessageCounter::new();
        Self::build(
            MessageCreator::with_counter(schema::AMT, counter.clone()),
            MessageCreator::with_counter(schema::CIM, counter.clone()),
            MessageCreator::with_counter(schema::IPS, counter.clone()),
            counter,
        )
    }

    /// Générateurs paramétrés par la configuration
    ///
    /// La configuration fournit les bases d'URI, la destination, l'adresse
    /// ReplyTo, l'OperationTimeout et le premier MessageID.
    pub fn from_config(config: &Config) -> Self {
        let counter = MessageCounter::starting_at(config.get_first_message_id());
        let destination = config.get_destination();
        let reply_to = config.get_reply_to();
        let timeout = config.get_operation_timeout();
        debug!(
            destination = %destination,
            timeout = %timeout,
            first_message_id = counter.peek(),
            "Building WS-Management generators from configuration"
        );

        let creator = |schema: &str| {
            MessageCreator::with_counter(config.get_resource_uri_base(schema), counter.clone())
                .with_destination(destination.as_str())
                .with_anonymous_address(reply_to.as_str())
                .with_default_timeout(timeout.as_str())
        };

        let (amt, cim, ips) = (creator("amt"), creator("cim"), creator("ips"));
        Self::build(amt, cim, ips, counter)
    }

    fn build(
        amt: MessageCreator,
        cim: MessageCreator,
        ips: MessageCreator,
        counter: MessageCounter,
    ) -> Self {
        Self {
            amt: AmtMessages::new(amt),
            cim: CimMessages::new(cim),
            ips: IpsMessages::new(ips),
            counter,
        }
    }

    /// Compteur partagé par toutes les classes
    pub fn counter(&self) -> &MessageCounter {
        &self.counter
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}
