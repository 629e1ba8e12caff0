//! Classes du schéma Intel IPS

pub mod opt_in;

pub use opt_in::{OptInService, OptInServiceRequest};
