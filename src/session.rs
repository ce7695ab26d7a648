//! Match session: the turn state machine and its inbound/outbound vocabulary

pub mod event;
pub mod machine;
pub mod player;
pub mod scheduler;
pub mod state;

pub use event::{Event, Notification};
pub use machine::Session;
pub use player::Player;
pub use scheduler::{MoveScheduler, PendingMove, Ticket};
pub use state::{MatchState, Outcome};
