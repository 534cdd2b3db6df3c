//! Error types for layout operations.

use thiserror::Error;

use arbor_core::identifier::Id;

/// The main error type for layout operations.
///
/// Every variant is a precondition violation surfaced fail-fast; the
/// computation itself is total over well-formed input and has no
/// recoverable errors.
#[derive(Debug, Error)]
pub enum ArborError {
    /// A required extractor was never registered on the builder.
    #[error("layout configuration is missing the `{0}` extractor")]
    MissingExtractor(&'static str),

    /// Two distinct raw nodes produced the same identifier. Identifiers
    /// must be unique across the whole tree; this is also the terminating
    /// symptom of a cyclic children extractor.
    #[error("duplicate node identifier `{0}`; identifiers must be unique across the tree")]
    DuplicateId(Id),

    /// An identifier recorded in the node table has no entry. Unreachable
    /// through the public API; surfaced as an error rather than a panic.
    #[error("node table has no entry for `{0}`")]
    UnknownNode(Id),
}
