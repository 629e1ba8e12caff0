//! Classes du schéma DMTF CIM

pub mod boot_service;
pub mod power_management;

pub use boot_service::{BootConfigRole, BootService};
pub use power_management::{PowerManagementService, PowerState};
