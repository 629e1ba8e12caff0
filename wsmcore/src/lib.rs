//! # wsmcore - Génération de messages WS-Management
//!
//! Ce crate construit les enveloppes SOAP/XML attendues par un agent
//! WS-Management (Intel AMT en particulier) pour une classe de ressource
//! CIM/AMT/IPS et une opération donnée.
//!
//! ## Architecture
//!
//! - [`Selector`] : clé d'adressage d'une instance et son rendu `<w:SelectorSet>`
//! - [`MessageCounter`] : compteur partageable des `<a:MessageID>`
//! - [`MessageCreator`] : en-têtes, corps et enveloppes pour une base d'URI
//! - [`Base`] : verbes Get, Enumerate, Pull, Put, Create, Delete et
//!   RequestStateChange d'une classe
//! - [`Payload`] : payloads typés dont le namespace est injecté à l'envoi
//! - [`fragment`] : corps structurés (références d'endpoint, éléments optionnels)
//!
//! ## Example
//!
//! ```
//! use wsmcore::{Base, MessageCreator, actions::schema};
//!
//! let base = Base::new(MessageCreator::new(schema::AMT), "AMT_AlarmClockService");
//! let xml = base.enumerate();
//!
//! assert!(xml.contains("<a:MessageID>0</a:MessageID>"));
//! assert!(xml.contains(
//!     r#"<Body><Enumerate xmlns="http://schemas.xmlsoap.org/ws/2004/09/enumeration" /></Body>"#
//! ));
//! ```

pub mod actions;
pub mod fragment;

mod base;
mod counter;
mod creator;
mod errors;
mod payload;
mod selector;

pub use base::Base;
pub use counter::MessageCounter;
pub use creator::{MessageCreator, create_empty_body, create_enumerate_body, create_pull_body};
pub use errors::WsmanError;
pub use payload::Payload;
pub use selector::{Selector, create_selector};
