//! Shared UI crate for Noodleboard. Dataset logic and views live here.

pub mod core;
pub mod dashboard;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::Navbar;
}
