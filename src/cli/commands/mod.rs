//! Subcommands of the `xo` binary

pub mod play;
pub mod simulate;
pub mod solve;
