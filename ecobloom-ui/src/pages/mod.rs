//! Pages
//!
//! Top-level page components for each route.

pub mod garden;
pub mod home;

pub use garden::Garden;
pub use home::Home;
