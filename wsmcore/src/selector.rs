//! Codec des sélecteurs WS-Management
//!
//! Un sélecteur est une paire nom/valeur qui désigne une instance précise
//! d'une classe de ressource (ex: `InstanceID=Intel(r) AMT Device 0`).

use std::fmt;

/// Clé d'adressage d'une instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Nom de la clé (ex: "InstanceID")
    pub name: String,

    /// Valeur de la clé
    pub value: String,
}

impl Selector {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Sélecteur `InstanceID=<value>`, le plus courant côté AMT
    pub fn instance_id(value: impl Into<String>) -> Self {
        Self::new("InstanceID", value)
    }

    /// Un sélecteur sans nom ne désigne rien, quelle que soit sa valeur
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Rend le fragment `<w:SelectorSet>` de l'en-tête
///
/// Ni le nom ni la valeur ne sont échappés : la sortie doit rester identique
/// octet par octet à ce qu'attendent les agents existants.
pub fn create_selector(selector: Option<&Selector>) -> String {
    match selector {
        Some(s) if !s.is_empty() => format!(
            r#"<w:SelectorSet><w:Selector Name="{}">{}</w:Selector></w:SelectorSet>"#,
            s.name, s.value
        ),
        _ => String::new(),
    }
}
