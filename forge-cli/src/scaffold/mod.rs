//! Convention-resolution and content-synthesis engine
//!
//! Parses terse token lists into structured specs (names, verb/action
//! pairs, nesting paths, field lists), resolves naming conventions, and
//! renders the boilerplate text for each artifact kind.

pub mod actions;
pub mod composer;
pub mod error;
pub mod naming;
pub mod resource;
pub mod schema;

pub use actions::{ActionSet, ActionSpec, HttpVerb, ParsedTokens};
pub use composer::{ArtifactComposer, ArtifactDescriptor, ArtifactKind};
pub use error::GenerateError;
pub use naming::Naming;
pub use resource::ResourceSpec;
pub use schema::{MigrationOperation, MigrationSpec, SchemaField};
