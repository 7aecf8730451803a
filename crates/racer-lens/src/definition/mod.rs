mod provider;

pub use provider::{DefinitionLabel, DefinitionProvider, build_definition_label};
