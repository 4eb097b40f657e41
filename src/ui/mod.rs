pub mod messages;
pub mod prompt;
pub mod table;

pub use prompt::{Interaction, StdinPrompter};
pub use table::{ConsoleSink, RenderSink};
