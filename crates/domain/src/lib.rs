mod events;
mod messages;
mod models;
mod outcome;

pub use events::CommentEvent;
pub use messages::{descriptor, MessageDescriptor, Severity};
pub use models::{Comment, Post, ValidationError};
pub use outcome::OutcomeState;
