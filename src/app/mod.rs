//! Application layer: configuration and the container that wires sessions
//! to the shared solver table.
//!
//! ```
//! use xo::app::{App, SessionConfig};
//! use xo::session::Event;
//!
//! let app = App::builder().with_default_seed(42).build();
//! let mut session = app.create_session(&SessionConfig::default());
//! let notes = session.handle(Event::StartRequested);
//! assert!(!notes.is_empty());
//! ```

pub mod config;
pub mod container;

pub use config::{DEFAULT_BOT_DELAY_MS, SessionConfig};
pub use container::{App, AppBuilder};
