//! Artifact composition
//!
//! One routine per artifact kind. Each routine consumes parsed specs and a
//! fixed template and produces a final path plus rendered content; nothing
//! here touches the file system. Descriptors pass to the writer unmutated.

use serde_json::json;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::paths::PathRoots;
use crate::templates::{files, TemplateRegistry};
use crate::writer::Sequence;

use super::actions::{ActionSet, ActionSpec};
use super::error::GenerateError;
use super::naming::Naming;
use super::schema::{MigrationOperation, MigrationSpec};

/// Kind of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Data model stub.
    Model,
    /// Request controller.
    Controller,
    /// Schema migration.
    Migration,
    /// View template.
    View,
    /// Static asset.
    Asset,
    /// Test class stub.
    Test,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Migration => "migration",
            Self::View => "view",
            Self::Asset => "asset",
            Self::Test => "test",
        };
        f.write_str(label)
    }
}

/// A rendered artifact awaiting the writer. Produced once, never mutated;
/// ownership passes to the file collaborator.
#[derive(Debug)]
pub struct ArtifactDescriptor {
    /// Artifact kind, for reporting.
    pub kind: ArtifactKind,
    /// Final destination path.
    pub path: PathBuf,
    /// Rendered file content.
    pub content: String,
}

/// One controller test case, fed into the controller test template.
#[derive(Debug, Clone, serde::Serialize)]
struct TestCase {
    name: String,
    target: String,
}

/// Composes artifact descriptors from parsed specs.
pub struct ArtifactComposer {
    roots: PathRoots,
    templates: TemplateRegistry,
    sequence: Sequence,
}

impl ArtifactComposer {
    /// Build a composer over the given path roots.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if a built-in template fails to
    /// compile.
    pub fn new(roots: PathRoots) -> Result<Self, GenerateError> {
        Ok(Self {
            roots,
            templates: TemplateRegistry::new()?,
            sequence: Sequence::new(),
        })
    }

    /// The roots this composer resolves against.
    #[must_use]
    pub const fn roots(&self) -> &PathRoots {
        &self.roots
    }

    /// Model stub: `models/<snake(name)>.php`, a bare class named
    /// `PascalCase(name)`.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty name.
    pub fn model(&self, name: &str) -> Result<ArtifactDescriptor, GenerateError> {
        Naming::require(name)?;

        let content = self.templates.render(
            "model",
            &json!({ "class_name": Naming::pascal_case(name) }),
        )?;
        let path = self
            .roots
            .models()
            .join(format!("{}.php", Naming::snake_case(name)));

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Model,
            path,
            content,
        })
    }

    /// Controller at the dot-path: nested segments become intermediate
    /// directories, the class is `<class_name>_Controller`. RESTful
    /// controllers get one method per (name, verb) pair; plain controllers
    /// one `action_<name>` per distinct name.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty name.
    pub fn controller(
        &self,
        dot_path: &str,
        actions: &ActionSet,
    ) -> Result<ArtifactDescriptor, GenerateError> {
        Naming::require(dot_path)?;

        let methods: Vec<String> = if actions.restful {
            actions.specs().iter().map(ActionSpec::method_name).collect()
        } else {
            actions.names().map(|name| format!("action_{name}")).collect()
        };

        let content = self.templates.render(
            "controller",
            &json!({
                "class_name": Naming::class_name(dot_path),
                "restful": actions.restful,
                "methods": methods,
            }),
        )?;

        let mut path = self.roots.controllers().join(Naming::dir_path(dot_path));
        path.set_extension("php");

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Controller,
            path,
            content,
        })
    }

    /// View stub at `views/<dir_path>.blade.php`; a dot-free name is a
    /// top-level view. Content is an empty stub.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty name.
    pub fn view(&self, dot_path: &str) -> Result<ArtifactDescriptor, GenerateError> {
        Naming::require(dot_path)?;

        let mut path = self.roots.views().join(Naming::dir_path(dot_path));
        path.set_extension("blade.php");

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::View,
            path,
            content: String::new(),
        })
    }

    /// One view per token.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty name token.
    pub fn views(&self, dot_paths: &[String]) -> Result<Vec<ArtifactDescriptor>, GenerateError> {
        dot_paths.iter().map(|token| self.view(token)).collect()
    }

    /// Migration from a parsed spec: `migrations/<discriminator>_<subject>.php`
    /// with symmetric `up`/`down` bodies.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Render`] if the template rejects the context.
    pub fn migration(&self, spec: &MigrationSpec) -> Result<ArtifactDescriptor, GenerateError> {
        let context = json!({
            "class_name": Naming::class_name(&spec.subject),
            "create": matches!(spec.operation, Some(MigrationOperation::CreateTable { .. })),
            "alter": matches!(spec.operation, Some(MigrationOperation::AlterTable { .. })),
            "table": spec.table(),
            "columns": spec.column_statements(),
            "drops": spec.drop_statements(),
        });
        let content = self.templates.render("migration", &context)?;

        let path = self
            .roots
            .migrations()
            .join(format!("{}_{}.php", self.sequence.next(), spec.subject));

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Migration,
            path,
            content,
        })
    }

    /// Asset placement: `.css` tokens land under the public css root, `.js`
    /// under the js root, nested subpaths preserved. Filenames found in the
    /// bundled catalogue copy its content; everything else is created empty.
    /// Nothing is synthesized.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidToken`] on a token without a recognized
    /// extension.
    pub fn assets(&self, tokens: &[String]) -> Result<Vec<ArtifactDescriptor>, GenerateError> {
        tokens.iter().map(|token| self.asset(token)).collect()
    }

    fn asset(&self, token: &str) -> Result<ArtifactDescriptor, GenerateError> {
        let relative = Path::new(token);

        // Tokens must stay under their asset root: no absolute paths, no
        // `..` or `.` components.
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|component| !matches!(component, Component::Normal(_)));
        if escapes {
            return Err(GenerateError::InvalidToken(token.to_string()));
        }

        let root = match relative.extension().and_then(|ext| ext.to_str()) {
            Some("css") => self.roots.css(),
            Some("js") => self.roots.js(),
            _ => return Err(GenerateError::InvalidToken(token.to_string())),
        };

        let content = relative
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(common_asset)
            .unwrap_or_default();

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Asset,
            path: root.join(relative),
            content,
        })
    }

    /// Test class stub: `tests/<discriminator>_<snake(subject)>.test.php`,
    /// one empty `test_<case>` method per case token.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty subject.
    pub fn test(&self, subject: &str, cases: &[String]) -> Result<ArtifactDescriptor, GenerateError> {
        Naming::require(subject)?;

        let content = self.templates.render(
            "test",
            &json!({
                "class_name": Naming::class_name(subject),
                "cases": cases,
            }),
        )?;
        let path = self.roots.tests().join(format!(
            "{}_{}.test.php",
            self.sequence.next(),
            Naming::snake_case(subject)
        ));

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Test,
            path,
            content,
        })
    }

    /// Controller test for the resource flow, at the stable path
    /// `tests/controllers/<snake(controller)>.test.php`. One method per page
    /// action, each asserting a 200 status and a non-empty body from
    /// invoking that controller action.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty controller name.
    pub fn controller_test(
        &self,
        controller: &str,
        action_names: &[String],
    ) -> Result<ArtifactDescriptor, GenerateError> {
        Naming::require(controller)?;

        let class_name = Naming::class_name(controller);
        let cases: Vec<TestCase> = action_names
            .iter()
            .map(|name| TestCase {
                name: name.clone(),
                target: format!("{class_name}@{name}"),
            })
            .collect();

        let content = self.templates.render(
            "controller_test",
            &json!({ "class_name": class_name, "cases": cases }),
        )?;
        let path = self
            .roots
            .tests()
            .join("controllers")
            .join(format!("{}.test.php", Naming::snake_case(controller)));

        Ok(ArtifactDescriptor {
            kind: ArtifactKind::Test,
            path,
            content,
        })
    }
}

/// Bundled common-asset catalogue. Exact contents are pinned per bundled
/// library version.
fn common_asset(file_name: &str) -> Option<String> {
    match file_name {
        "jquery.js" => Some(files::JQUERY_JS.to_string()),
        _ => None,
    }
}
