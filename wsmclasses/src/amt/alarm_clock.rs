use chrono::{DateTime, Utc};
use wsmcore::WsmanError;
use wsmcore::actions::ns;
use wsmcore::fragment::{container, namespaced, namespaced_text, push};

use crate::macros::define_resource;

define_resource! {
    /// Service d'alarme : réveil planifié de la plateforme
    pub struct AlarmClockService = "AMT_AlarmClockService";
}

const ALARM_CLOCK_OCCURRENCE: &str = "AMT_AlarmClockOccurrence";

/// Alarme à créer via `AddAlarm`
#[derive(Debug, Clone)]
pub struct AlarmClockOccurrence {
    pub instance_id: String,
    pub element_name: String,
    pub start_time: DateTime<Utc>,
    /// Période de répétition en minutes ; 0 pour une alarme unique
    pub interval_minutes: u32,
    pub delete_on_completion: bool,
}

/// Durée ISO 8601 `P{j}DT{h}H{m}M`
fn interval(minutes: u32) -> String {
    format!(
        "P{}DT{}H{}M",
        minutes / 1440,
        (minutes % 1440) / 60,
        minutes % 60
    )
}

impl AlarmClockService {
    /// `AddAlarm` : crée une alarme à partir d'un modèle d'occurrence
    ///
    /// L'intervalle n'est émis que s'il est non nul.
    pub fn add_alarm(&self, alarm: &AlarmClockOccurrence) -> Result<String, WsmanError> {
        if alarm.instance_id.is_empty() {
            return Err(WsmanError::invalid_argument("alarm InstanceID is required"));
        }

        let service_ns = self.base.resource_uri();
        let occurrence_ns = self.base.creator().resource_uri(ALARM_CLOCK_OCCURRENCE);

        let mut template = container("p:AlarmTemplate");
        push(
            &mut template,
            namespaced_text("s:InstanceID", "s", &occurrence_ns, alarm.instance_id.as_str()),
        );
        if !alarm.element_name.is_empty() {
            push(
                &mut template,
                namespaced_text("s:ElementName", "s", &occurrence_ns, alarm.element_name.as_str()),
            );
        }

        let mut start_time = namespaced("s:StartTime", "s", &occurrence_ns);
        push(
            &mut start_time,
            namespaced_text(
                "p:Datetime",
                "p",
                ns::CIM_COMMON,
                alarm.start_time.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            ),
        );
        push(&mut template, start_time);

        if alarm.interval_minutes != 0 {
            let mut period = namespaced("s:Interval", "s", &occurrence_ns);
            push(
                &mut period,
                namespaced_text("p:Interval", "p", ns::CIM_COMMON, interval(alarm.interval_minutes)),
            );
            push(&mut template, period);
        }

        push(
            &mut template,
            namespaced_text(
                "s:DeleteOnCompletion",
                "s",
                &occurrence_ns,
                alarm.delete_on_completion.to_string(),
            ),
        );

        let mut input = namespaced("p:AddAlarm_INPUT", "p", &service_ns);
        push(&mut input, template);

        let header = self.base.header(&self.base.method_action("AddAlarm"), None);
        let body = self.base.creator().create_body_from_element(&input)?;
        Ok(self.base.envelope(&header, &body))
    }
}
