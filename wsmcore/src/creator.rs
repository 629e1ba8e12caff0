//! Construction des en-têtes, des corps et des enveloppes

use tracing::trace;
use xmltree::Element;

use crate::WsmanError;
use crate::actions::{
    self, ANONYMOUS_ADDRESS, DEFAULT_DESTINATION, DEFAULT_MAX_CHARACTERS, DEFAULT_MAX_ELEMENTS,
    DEFAULT_TIMEOUT, XML_PREFIX, XML_SUFFIX,
};
use crate::counter::MessageCounter;
use crate::fragment;
use crate::payload::{self, Payload};
use crate::selector::{Selector, create_selector};

/// Générateur de messages WS-Management pour une base d'URI de ressources
///
/// Le seul état mutable est le compteur de MessageID, avancé d'exactement
/// un à chaque appel de [`create_header`](Self::create_header).
///
/// # Exemple
///
/// ```
/// use wsmcore::{MessageCreator, actions};
///
/// let creator = MessageCreator::new(actions::schema::AMT);
/// let header = creator.create_header(actions::GET, "AMT_GeneralSettings", None, None, None);
/// let xml = creator.create_xml(&header, "<Body></Body>");
/// assert!(xml.contains("<a:MessageID>0</a:MessageID>"));
/// ```
#[derive(Debug, Clone)]
pub struct MessageCreator {
    resource_uri_base: String,
    counter: MessageCounter,
    anonymous_address: String,
    default_timeout: String,
    destination: String,
}

impl MessageCreator {
    /// Crée un générateur avec son propre compteur, démarrant à 0
    pub fn new(resource_uri_base: impl Into<String>) -> Self {
        Self::with_counter(resource_uri_base, MessageCounter::new())
    }

    /// Crée un générateur numérotant ses messages avec `counter`
    pub fn with_counter(resource_uri_base: impl Into<String>, counter: MessageCounter) -> Self {
        Self {
            resource_uri_base: resource_uri_base.into(),
            counter,
            anonymous_address: ANONYMOUS_ADDRESS.to_string(),
            default_timeout: DEFAULT_TIMEOUT.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }

    /// Remplace l'adresse ReplyTo utilisée quand l'appelant n'en fournit pas
    pub fn with_anonymous_address(mut self, address: impl Into<String>) -> Self {
        self.anonymous_address = address.into();
        self
    }

    /// Remplace l'OperationTimeout utilisé quand l'appelant n'en fournit pas
    pub fn with_default_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.default_timeout = timeout.into();
        self
    }

    /// Remplace la destination `<a:To>`
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn resource_uri_base(&self) -> &str {
        &self.resource_uri_base
    }

    /// Destination `<a:To>`, réutilisée comme adresse des références d'endpoint
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn counter(&self) -> &MessageCounter {
        &self.counter
    }

    /// URI complète de la ressource : base + nom de classe
    pub fn resource_uri(&self, class_name: &str) -> String {
        format!("{}{}", self.resource_uri_base, class_name)
    }

    /// Construit le bloc `<Header>`
    ///
    /// # Arguments
    ///
    /// * `action` - URI de l'action demandée
    /// * `class_name` - Classe de ressource (ex: "AMT_GeneralSettings")
    /// * `selector` - Sélecteur d'instance optionnel
    /// * `address` - Adresse ReplyTo ; l'adresse anonyme si absente ou vide
    /// * `timeout` - OperationTimeout ; `PT60S` si absent ou vide
    pub fn create_header(
        &self,
        action: &str,
        class_name: &str,
        selector: Option<&Selector>,
        address: Option<&str>,
        timeout: Option<&str>,
    ) -> String {
        let message_id = self.counter.next();
        trace!(message_id, action, class_name, "Building WS-Management header");

        let address = address
            .filter(|a| !a.is_empty())
            .unwrap_or(self.anonymous_address.as_str());
        let timeout = timeout
            .filter(|t| !t.is_empty())
            .unwrap_or(self.default_timeout.as_str());

        let mut header = format!(
            "<Header><a:Action>{}</a:Action><a:To>{}</a:To><w:ResourceURI>{}{}</w:ResourceURI><a:MessageID>{}</a:MessageID><a:ReplyTo><a:Address>{}</a:Address></a:ReplyTo><w:OperationTimeout>{}</w:OperationTimeout>",
            action, self.destination, self.resource_uri_base, class_name, message_id, address, timeout
        );
        header.push_str(&create_selector(selector));
        header.push_str("</Header>");
        header
    }

    /// Assemble l'enveloppe complète
    pub fn create_xml(&self, header: &str, body: &str) -> String {
        let mut xml = String::with_capacity(
            XML_PREFIX.len() + header.len() + body.len() + XML_SUFFIX.len(),
        );
        xml.push_str(XML_PREFIX);
        xml.push_str(header);
        xml.push_str(body);
        xml.push_str(XML_SUFFIX);
        xml
    }

    /// Corps d'entrée d'une méthode, sérialisé depuis un payload typé
    ///
    /// Sans payload, l'élément `<h:{method}>` est émis vide. Avec un
    /// payload, son namespace `h:` est fixé à l'URI de la ressource avant
    /// la sérialisation ; une erreur de sérialisation est remontée telle
    /// quelle et aucun XML partiel n'est produit.
    pub fn create_body<T: Payload>(
        &self,
        method: &str,
        class_name: &str,
        payload: Option<T>,
    ) -> Result<String, WsmanError> {
        match payload {
            None => Ok(self.create_empty_input_body(method, class_name)),
            Some(payload) => {
                let content = payload::serialize(payload, self.resource_uri(class_name))?;
                Ok(wrap_body(&content))
            }
        }
    }

    /// Corps d'entrée vide : `<h:{method} xmlns:h="…"></h:{method}>`
    pub fn create_empty_input_body(&self, method: &str, class_name: &str) -> String {
        format!(
            r#"<Body><h:{} xmlns:h="{}"></h:{}></Body>"#,
            method,
            self.resource_uri(class_name),
            method
        )
    }

    /// Corps construit à partir d'un fragment structuré
    pub fn create_body_from_element(&self, element: &Element) -> Result<String, WsmanError> {
        Ok(wrap_body(&fragment::render(element)?))
    }

    /// `<h:RequestStateChange_INPUT>` lié à l'URI complète de la ressource
    pub fn create_request_state_change_body(&self, class_name: &str, requested_state: u32) -> String {
        format!(
            r#"<Body><h:RequestStateChange_INPUT xmlns:h="{}"><h:RequestedState>{}</h:RequestedState></h:RequestStateChange_INPUT></Body>"#,
            self.resource_uri(class_name),
            requested_state
        )
    }
}

fn wrap_body(content: &str) -> String {
    format!("<Body>{}</Body>", content)
}

/// Corps vide des Get et Delete
pub fn create_empty_body() -> String {
    "<Body></Body>".to_string()
}

/// Corps d'un Enumerate
pub fn create_enumerate_body() -> String {
    format!(r#"<Body><Enumerate xmlns="{}" /></Body>"#, actions::ns::ENUMERATION)
}

/// Corps d'un Pull ; 0 sélectionne les valeurs par défaut (999 / 99999)
pub fn create_pull_body(enumeration_context: &str, max_elements: u32, max_characters: u32) -> String {
    let max_elements = if max_elements == 0 {
        DEFAULT_MAX_ELEMENTS
    } else {
        max_elements
    };
    let max_characters = if max_characters == 0 {
        DEFAULT_MAX_CHARACTERS
    } else {
        max_characters
    };
    format!(
        r#"<Body><Pull xmlns="{}"><EnumerationContext>{}</EnumerationContext><MaxElements>{}</MaxElements><MaxCharacters>{}</MaxCharacters></Pull></Body>"#,
        actions::ns::ENUMERATION,
        enumeration_context,
        max_elements,
        max_characters
    )
}
