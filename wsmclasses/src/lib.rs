//! # wsmclasses - Classes AMT, CIM et IPS
//!
//! Wrappers typés au-dessus de [`wsmcore`] : chaque classe de ressource
//! expose les verbes qu'elle supporte et ses méthodes propres, et renvoie
//! l'enveloppe XML prête à être envoyée.
//!
//! ```
//! use wsmclasses::Messages;
//! use wsmclasses::cim::PowerState;
//!
//! let messages = Messages::new();
//! let get = messages.amt.general_settings.get();
//! let reset = messages
//!     .cim
//!     .power_management_service
//!     .request_power_state_change(PowerState::MasterBusReset)
//!     .unwrap();
//!
//! assert!(get.contains("<a:MessageID>0</a:MessageID>"));
//! assert!(reset.contains("<a:MessageID>1</a:MessageID>"));
//! ```

mod macros;

pub mod amt;
pub mod cim;
pub mod ips;
mod messages;

pub use messages::{AmtMessages, CimMessages, IpsMessages, Messages};
