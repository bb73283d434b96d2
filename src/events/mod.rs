//! Game events and the chronological log that holds them.

pub mod event;
pub mod log;

pub use event::GameEvent;
pub use log::EventLog;
