//! Artifact path roots
//!
//! Resolves the per-kind output directories from two explicit base
//! directories. The roots object is passed to every composer; there is no
//! process-global path lookup.

use std::path::{Path, PathBuf};

/// Output roots for every artifact kind.
#[derive(Debug, Clone)]
pub struct PathRoots {
    app: PathBuf,
    public: PathBuf,
}

impl PathRoots {
    /// Build roots from the application directory (models, controllers,
    /// views, migrations, tests) and the public directory (css, js).
    pub fn new(app: impl Into<PathBuf>, public: impl Into<PathBuf>) -> Self {
        Self {
            app: app.into(),
            public: public.into(),
        }
    }

    /// Application directory.
    #[must_use]
    pub fn app(&self) -> &Path {
        &self.app
    }

    /// Model classes root.
    #[must_use]
    pub fn models(&self) -> PathBuf {
        self.app.join("models")
    }

    /// Controller classes root.
    #[must_use]
    pub fn controllers(&self) -> PathBuf {
        self.app.join("controllers")
    }

    /// Migrations root.
    #[must_use]
    pub fn migrations(&self) -> PathBuf {
        self.app.join("migrations")
    }

    /// View templates root.
    #[must_use]
    pub fn views(&self) -> PathBuf {
        self.app.join("views")
    }

    /// Test classes root.
    #[must_use]
    pub fn tests(&self) -> PathBuf {
        self.app.join("tests")
    }

    /// Public stylesheet root.
    #[must_use]
    pub fn css(&self) -> PathBuf {
        self.public.join("css")
    }

    /// Public script root.
    #[must_use]
    pub fn js(&self) -> PathBuf {
        self.public.join("js")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_resolve_under_their_base() {
        let roots = PathRoots::new("application", "public");
        assert_eq!(roots.models(), Path::new("application/models"));
        assert_eq!(roots.controllers(), Path::new("application/controllers"));
        assert_eq!(roots.migrations(), Path::new("application/migrations"));
        assert_eq!(roots.views(), Path::new("application/views"));
        assert_eq!(roots.tests(), Path::new("application/tests"));
        assert_eq!(roots.css(), Path::new("public/css"));
        assert_eq!(roots.js(), Path::new("public/js"));
    }
}
