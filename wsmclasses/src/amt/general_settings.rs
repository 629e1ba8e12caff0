use crate::macros::define_resource;

define_resource! {
    /// Réglages généraux du firmware AMT (nom d'hôte, domaine, ping, ...)
    pub struct GeneralSettings = "AMT_GeneralSettings";
}
