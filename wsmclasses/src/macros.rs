/// Déclare le wrapper d'une classe de ressource
///
/// Le wrapper lie un [`wsmcore::Base`] au nom de classe et expose les verbes
/// de lecture communs à toutes les classes (Get, Enumerate, Pull). Les
/// verbes et méthodes propres à la classe sont ajoutés dans un bloc `impl`
/// séparé.
///
/// # Syntaxe
///
/// ```ignore
/// define_resource! {
///     /// Documentation
///     pub struct GeneralSettings = "AMT_GeneralSettings";
/// }
/// ```
macro_rules! define_resource {
    ($(#[$meta:meta])* pub struct $name:ident = $class:literal;) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: wsmcore::Base,
        }

        impl $name {
            pub const CLASS_NAME: &'static str = $class;

            pub fn new(creator: wsmcore::MessageCreator) -> Self {
                Self {
                    base: wsmcore::Base::new(creator, $class),
                }
            }

            pub fn base(&self) -> &wsmcore::Base {
                &self.base
            }

            /// WS-Transfer Get
            pub fn get(&self) -> String {
                self.base.get(None)
            }

            /// WS-Enumeration Enumerate
            pub fn enumerate(&self) -> String {
                self.base.enumerate()
            }

            /// WS-Enumeration Pull avec les limites par défaut
            pub fn pull(&self, enumeration_context: &str) -> String {
                self.base.pull(enumeration_context, 0, 0)
            }
        }
    };
}

pub(crate) use define_resource;
