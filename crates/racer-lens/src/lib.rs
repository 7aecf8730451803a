pub mod completion;
pub mod config;
pub mod definition;
pub mod doc;
pub mod navigation;
pub mod protocol;
pub mod racer;
pub mod response;
pub mod signature;

pub use completion::{CompletionProvider, Suggestion, build_suggestion};
pub use config::Settings;
pub use definition::{DefinitionLabel, DefinitionProvider, build_definition_label};
pub use doc::sanitize_doc;
pub use navigation::{Location, Navigate, Position, SourceRange};
pub use protocol::{
    CompletionMatch, DefinitionMatch, DiagnosticSink, MatchKind, ParseFailure, ParseFailureKind, TracingSink,
    parse_completion_line, parse_definition_line,
};
pub use racer::{QueryKind, RacerBackend, RacerError, RacerProcess, RacerQuery};
pub use response::{DefinitionItem, DefinitionResponse, parse_completion_blob, parse_definition_blob};
pub use signature::{DecomposeError, DecomposedSignature, decompose_signature, find_closing};
