//! Backend Access
//!
//! gloo-net implementation of the plant backend contract.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooPlantApi};
