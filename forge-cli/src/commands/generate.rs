//! Scaffold generation commands
//!
//! One clap variant per invocation surface command. Every command composes
//! its full artifact set in memory first; writes start only after all
//! parsing and rendering has succeeded, so a parse error never leaves a
//! partial scaffold behind.

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};

use crate::paths::PathRoots;
use crate::scaffold::actions::ActionSet;
use crate::scaffold::composer::{ArtifactComposer, ArtifactDescriptor};
use crate::scaffold::resource::ResourceSpec;
use crate::scaffold::schema::MigrationSpec;
use crate::writer::ArtifactWriter;

static SUCCESS: Emoji = Emoji("✓", "√");

/// Artifact generation commands.
#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Generate a model stub
    Model {
        /// Model name (e.g. `Book`)
        name: String,
    },
    /// Generate a controller
    ///
    /// Examples:
    ///   forge controller admin index show
    ///   forge controller admin.panel index:post update:put restful
    Controller {
        /// Dot-path controller name (e.g. `admin.panel`)
        name: String,
        /// Action tokens: `name`, `name:verb`, or the `restful` keyword
        tokens: Vec<String>,
    },
    /// Generate a schema migration
    ///
    /// Examples:
    ///   forge migration create_users_table id:integer email:string
    ///   forge migration add_user_id_to_posts_table user_id:integer
    Migration {
        /// Migration subject (`create_<table>_table` or
        /// `add_<field>_to_<table>_table`)
        name: String,
        /// Column tokens in `field:type` form
        fields: Vec<String>,
    },
    /// Generate views
    View {
        /// Dot-path view names (e.g. `book.admin.show`)
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Generate a full resource: model, controller, views, optional tests
    Resource {
        /// Singular entity name
        name: String,
        /// Action tokens plus the `restful` and `with_tests` keywords
        tokens: Vec<String>,
    },
    /// Place static asset files under the public css/js roots
    Assets {
        /// Asset paths ending in `.css` or `.js`; nested subpaths are kept
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Generate a test class with case stubs
    Test {
        /// Test subject name
        name: String,
        /// Case names, one `test_<case>` stub each
        cases: Vec<String>,
    },
}

impl GenerateCommand {
    /// Compose and write every artifact of this command.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed tokens (before any write) or on the
    /// first failed write.
    pub fn execute(&self, roots: PathRoots) -> Result<()> {
        let composer =
            ArtifactComposer::new(roots).context("failed to initialize artifact templates")?;

        let artifacts = self.compose(&composer)?;

        println!(
            "\n{} {} file(s):",
            style("Generating").cyan().bold(),
            artifacts.len()
        );

        for artifact in &artifacts {
            ArtifactWriter::write(artifact)
                .with_context(|| format!("failed to write {}", artifact.path.display()))?;
            println!(
                "  {} {} ({})",
                SUCCESS,
                style(artifact.path.display()).dim(),
                style(artifact.kind).dim()
            );
        }

        Ok(())
    }

    fn compose(&self, composer: &ArtifactComposer) -> Result<Vec<ArtifactDescriptor>> {
        let artifacts = match self {
            Self::Model { name } => vec![composer.model(name)?],
            Self::Controller { name, tokens } => {
                let parsed = ActionSet::parse(tokens)?;
                vec![composer.controller(name, &parsed.actions)?]
            }
            Self::Migration { name, fields } => {
                let spec = MigrationSpec::parse(name, fields)?;
                if spec.is_bare() {
                    println!(
                        "{} {:?} matches neither create_<table>_table nor add_<field>_to_<table>_table; generating a bare migration",
                        style("warning:").yellow().bold(),
                        name
                    );
                }
                vec![composer.migration(&spec)?]
            }
            Self::View { names } => composer.views(names)?,
            Self::Resource { name, tokens } => {
                ResourceSpec::parse(name, tokens)?.compose(composer)?
            }
            Self::Assets { paths } => composer.assets(paths)?,
            Self::Test { name, cases } => vec![composer.test(name, cases)?],
        };
        Ok(artifacts)
    }
}
