//! Pointer input: platform-agnostic events and the processor that
//! converts them into engine commands.

/// Platform-agnostic pointer event types.
pub mod event;
/// Converts raw pointer events into [`JourneyCommand`](crate::JourneyCommand)s.
pub mod processor;

pub use event::{InputEvent, PointerButton};
pub use processor::InputProcessor;
