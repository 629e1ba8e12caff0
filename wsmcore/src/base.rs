//! Verbes génériques WS-Transfer / WS-Enumeration d'une classe de ressource

use std::fmt;

use tracing::debug;

use crate::WsmanError;
use crate::actions;
use crate::creator::{
    MessageCreator, create_empty_body, create_enumerate_body, create_pull_body,
};
use crate::payload::Payload;
use crate::selector::Selector;

/// Façade des verbes canoniques pour une classe donnée
///
/// Chaque méthode produit une enveloppe complète et consomme exactement un
/// MessageID.
#[derive(Debug, Clone)]
pub struct Base {
    creator: MessageCreator,
    class_name: String,
}

impl Base {
    pub fn new(creator: MessageCreator, class_name: impl Into<String>) -> Self {
        Self {
            creator,
            class_name: class_name.into(),
        }
    }

    pub fn creator(&self) -> &MessageCreator {
        &self.creator
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// URI complète de la classe
    pub fn resource_uri(&self) -> String {
        self.creator.resource_uri(&self.class_name)
    }

    /// URI d'action d'une méthode propre à la classe
    pub fn method_action(&self, method: &str) -> String {
        actions::generate_action(self.creator.resource_uri_base(), &self.class_name, method)
    }

    /// En-tête sans ReplyTo ni timeout spécifiques
    pub fn header(&self, action: &str, selector: Option<&Selector>) -> String {
        self.creator
            .create_header(action, &self.class_name, selector, None, None)
    }

    /// Enveloppe complète pour un en-tête et un corps déjà construits
    pub fn envelope(&self, header: &str, body: &str) -> String {
        self.creator.create_xml(header, body)
    }

    /// WS-Transfer Get
    pub fn get(&self, selector: Option<&Selector>) -> String {
        debug!(class = %self.class_name, "Get");
        let header = self.header(actions::GET, selector);
        self.envelope(&header, &create_empty_body())
    }

    /// WS-Enumeration Enumerate
    pub fn enumerate(&self) -> String {
        debug!(class = %self.class_name, "Enumerate");
        let header = self.header(actions::ENUMERATE, None);
        self.envelope(&header, &create_enumerate_body())
    }

    /// WS-Enumeration Pull ; 0 sélectionne les valeurs par défaut
    pub fn pull(&self, enumeration_context: &str, max_elements: u32, max_characters: u32) -> String {
        debug!(class = %self.class_name, enumeration_context, "Pull");
        let header = self.header(actions::PULL, None);
        self.envelope(
            &header,
            &create_pull_body(enumeration_context, max_elements, max_characters),
        )
    }

    /// WS-Transfer Delete ; le sélecteur va dans l'en-tête, jamais dans le corps
    pub fn delete(&self, selector: Option<&Selector>) -> String {
        debug!(class = %self.class_name, "Delete");
        let header = self.header(actions::DELETE, selector);
        self.envelope(&header, &create_empty_body())
    }

    /// WS-Transfer Put
    ///
    /// Sans sélecteur fourni, un sélecteur `InstanceID=<payload>` est
    /// synthétisé à partir de la forme texte du payload. Il n'est placé dans
    /// l'en-tête que si `use_header_selector` est vrai.
    pub fn put<T: Payload + fmt::Display>(
        &self,
        payload: T,
        use_header_selector: bool,
        selector: Option<Selector>,
    ) -> Result<String, WsmanError> {
        debug!(class = %self.class_name, use_header_selector, "Put");
        let selector = selector.unwrap_or_else(|| Selector::instance_id(payload.to_string()));
        let header = if use_header_selector {
            self.header(actions::PUT, Some(&selector))
        } else {
            self.header(actions::PUT, None)
        };
        let body = self
            .creator
            .create_body(&self.class_name, &self.class_name, Some(payload))?;
        Ok(self.envelope(&header, &body))
    }

    /// WS-Transfer Create
    pub fn create<T: Payload>(
        &self,
        payload: T,
        selector: Option<&Selector>,
    ) -> Result<String, WsmanError> {
        debug!(class = %self.class_name, "Create");
        let header = self.header(actions::CREATE, selector);
        let body = self
            .creator
            .create_body(&self.class_name, &self.class_name, Some(payload))?;
        Ok(self.envelope(&header, &body))
    }

    /// RequestStateChange avec une action fournie par l'appelant
    pub fn request_state_change(&self, action: &str, requested_state: u32) -> String {
        debug!(class = %self.class_name, requested_state, "RequestStateChange");
        let header = self.header(action, None);
        let body = self
            .creator
            .create_request_state_change_body(&self.class_name, requested_state);
        self.envelope(&header, &body)
    }
}
