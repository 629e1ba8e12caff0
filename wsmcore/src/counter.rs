//! Compteur de MessageID partageable

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Compteur monotone des `<a:MessageID>`
///
/// Le compteur est un handle : ses clones partagent la même valeur, ce qui
/// permet à plusieurs [`MessageCreator`](crate::MessageCreator) (un par
/// schéma AMT/CIM/IPS par exemple) de numéroter une seule séquence de
/// messages. L'incrément est atomique ; arrivé à `u64::MAX` il repart à 0.
#[derive(Debug, Clone, Default)]
pub struct MessageCounter {
    value: Arc<AtomicU64>,
}

impl MessageCounter {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Compteur dont le prochain identifiant sera `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            value: Arc::new(AtomicU64::new(first)),
        }
    }

    /// Retourne la valeur courante puis avance d'exactement un
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed)
    }

    /// Valeur qui sera utilisée par le prochain en-tête
    pub fn peek(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
