//! forge CLI library
//!
//! Scaffold generator for convention-based MVC applications: parses terse
//! token lists into structured specs and renders boilerplate models,
//! controllers, migrations, views, assets, and test stubs at predictable
//! locations.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod writer;

pub use commands::GenerateCommand;
pub use paths::PathRoots;
pub use scaffold::{
    ActionSet, ActionSpec, ArtifactComposer, ArtifactDescriptor, ArtifactKind, GenerateError,
    HttpVerb, MigrationSpec, Naming, ResourceSpec,
};
pub use templates::TemplateRegistry;
pub use writer::{ArtifactWriter, Sequence};
