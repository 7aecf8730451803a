mod provider;
mod suggestion;

pub use provider::CompletionProvider;
pub use suggestion::{Suggestion, build_suggestion};
