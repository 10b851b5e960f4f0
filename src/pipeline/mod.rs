//! Poll pipeline: change detection and the orchestrating loop.

pub mod detect;
pub mod poll;

pub use detect::should_announce;
pub use poll::{CycleOutcome, Poller};
