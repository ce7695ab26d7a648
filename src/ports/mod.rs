//! Ports (trait boundaries) between the session core and its collaborators.
//!
//! Move selection and match observation are expressed as traits owned by the
//! core; the tiers in [`crate::strategy`] and the observers in
//! [`crate::simulation`] are their adapters.

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::{Strategy, TurnView};
