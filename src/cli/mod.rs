//! CLI infrastructure for the xo terminal front end
//!
//! The binary stands in for the user interface: it turns typed commands into
//! session events and renders the notifications that come back.

pub mod commands;
pub mod config;
pub mod output;
