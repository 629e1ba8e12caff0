//! Sérialisation générique des payloads typés
//!
//! Un payload déclare statiquement ses champs (noms d'éléments préfixés
//! `h:` via `#[serde(rename)]`) mais son namespace dépend de la classe
//! à laquelle il est envoyé. Le trait [`Payload`] sépare les deux : le
//! constructeur de corps injecte le namespace juste avant la sérialisation.
//!
//! ```
//! use serde::Serialize;
//! use wsmcore::Payload;
//!
//! #[derive(Debug, Clone, Default, Serialize)]
//! #[serde(rename = "h:ReadRecords_INPUT")]
//! struct ReadRecordsInput {
//!     #[serde(rename = "@xmlns:h")]
//!     h: String,
//!     #[serde(rename = "h:StartIndex")]
//!     start_index: u32,
//! }
//!
//! impl Payload for ReadRecordsInput {
//!     fn set_namespace(&mut self, namespace: String) {
//!         self.h = namespace;
//!     }
//! }
//! ```

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::WsmanError;

/// Payload sérialisable dont le namespace `h:` est injecté à l'envoi
pub trait Payload: Serialize {
    /// Fixe la valeur de l'attribut `xmlns:h` de l'élément racine
    fn set_namespace(&mut self, namespace: String);
}

/// Injecte `namespace` puis sérialise le payload
///
/// Les éléments vides sont rendus `<h:X></h:X>`, comme dans le reste des corps.
pub(crate) fn serialize<T: Payload>(mut payload: T, namespace: String) -> Result<String, WsmanError> {
    payload.set_namespace(namespace);
    let mut buf = String::new();
    let mut serializer = Serializer::new(&mut buf);
    serializer.expand_empty_elements(true);
    payload.serialize(serializer).map_err(|err| {
        tracing::warn!(error = %err, "Payload serialization failed");
        WsmanError::from(err)
    })?;
    Ok(buf)
}
