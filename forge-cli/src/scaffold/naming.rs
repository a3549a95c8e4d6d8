//! Naming-convention resolution
//!
//! Pure transforms between the naming forms the generator deals in:
//! singular/plural nouns, `snake_case`/`PascalCase`, and dot-paths that
//! expand either to nested directories or to underscore-joined class names.

use convert_case::{Case, Casing};
use inflector::Inflector;
use std::path::PathBuf;

use super::error::GenerateError;

/// Naming helpers for artifact composition.
pub struct Naming;

impl Naming {
    /// Pluralize an English noun.
    ///
    /// Regular inflection only (`y` → `ies`, `s`/`x`/`ch`/`sh` → `+es`,
    /// default `+s`); irregular nouns are a documented limitation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use forge_cli_lib::scaffold::Naming;
    /// assert_eq!(Naming::pluralize("user"), "users");
    /// assert_eq!(Naming::pluralize("category"), "categories");
    /// ```
    #[must_use]
    pub fn pluralize(noun: &str) -> String {
        noun.to_plural()
    }

    /// Singularize an English noun. Same limitations as [`Self::pluralize`].
    #[must_use]
    pub fn singularize(noun: &str) -> String {
        noun.to_singular()
    }

    /// Convert to `PascalCase`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use forge_cli_lib::scaffold::Naming;
    /// assert_eq!(Naming::pascal_case("book"), "Book");
    /// assert_eq!(Naming::pascal_case("book_club"), "BookClub");
    /// ```
    #[must_use]
    pub fn pascal_case(input: &str) -> String {
        input.to_case(Case::Pascal)
    }

    /// Convert to `snake_case`.
    #[must_use]
    pub fn snake_case(input: &str) -> String {
        input.to_case(Case::Snake)
    }

    /// Class name for a dot-path: every underscore-separated word of every
    /// segment is capitalized, underscores are preserved as word boundaries,
    /// and segments are joined with `_`. Artifact suffixes (`_Controller`,
    /// `_Test`) are appended by the composers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use forge_cli_lib::scaffold::Naming;
    /// assert_eq!(Naming::class_name("admin.panel"), "Admin_Panel");
    /// assert_eq!(Naming::class_name("create_users_table"), "Create_Users_Table");
    /// ```
    #[must_use]
    pub fn class_name(dot_path: &str) -> String {
        dot_path
            .split('.')
            .map(capitalize_words)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Directory path for a dot-path: segments snake-cased and joined with
    /// the platform path separator. A dot-free name maps to a single
    /// component.
    ///
    /// Segments are snake-cased rather than passed through verbatim, so
    /// `Admin.Panel` lands at `admin/panel`. Class names stay capitalized
    /// while their files follow the framework's lowercase on-disk layout.
    #[must_use]
    pub fn dir_path(dot_path: &str) -> PathBuf {
        dot_path.split('.').map(Self::snake_case).collect()
    }

    /// Validate a subject name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidName`] when the name is empty or
    /// whitespace-only. No other failure modes.
    pub fn require(name: &str) -> Result<&str, GenerateError> {
        if name.trim().is_empty() {
            return Err(GenerateError::InvalidName(name.to_string()));
        }
        Ok(name)
    }
}

fn capitalize_words(segment: &str) -> String {
    segment
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_pluralize() {
        assert_eq!(Naming::pluralize("user"), "users");
        assert_eq!(Naming::pluralize("category"), "categories");
        assert_eq!(Naming::pluralize("box"), "boxes");
        assert_eq!(Naming::pluralize("dish"), "dishes");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(Naming::singularize("users"), "user");
        assert_eq!(Naming::singularize("categories"), "category");
        assert_eq!(Naming::singularize("posts"), "post");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(Naming::pascal_case("book"), "Book");
        assert_eq!(Naming::pascal_case("book_club"), "BookClub");
        assert_eq!(Naming::pascal_case("Book"), "Book");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(Naming::snake_case("Admin"), "admin");
        assert_eq!(Naming::snake_case("BookClub"), "book_club");
        assert_eq!(Naming::snake_case("panel"), "panel");
    }

    #[test]
    fn test_class_name_preserves_underscores() {
        assert_eq!(Naming::class_name("create_users_table"), "Create_Users_Table");
        assert_eq!(
            Naming::class_name("add_user_id_to_posts_table"),
            "Add_User_Id_To_Posts_Table"
        );
    }

    #[test]
    fn test_class_name_joins_dot_segments() {
        assert_eq!(Naming::class_name("admin.panel"), "Admin_Panel");
        assert_eq!(Naming::class_name("admin"), "Admin");
        assert_eq!(Naming::class_name("users"), "Users");
    }

    #[test]
    fn test_dir_path_splits_on_dots() {
        assert_eq!(Naming::dir_path("admin.panel"), Path::new("admin/panel"));
        assert_eq!(Naming::dir_path("book.admin.show"), Path::new("book/admin/show"));
        assert_eq!(Naming::dir_path("book"), Path::new("book"));
    }

    #[test]
    fn test_dir_path_normalizes_case() {
        assert_eq!(Naming::dir_path("Admin"), Path::new("admin"));
        assert_eq!(Naming::dir_path("Admin.Panel"), Path::new("admin/panel"));
    }

    #[test]
    fn test_require_rejects_empty_names() {
        assert!(Naming::require("book").is_ok());
        assert!(matches!(
            Naming::require(""),
            Err(GenerateError::InvalidName(_))
        ));
        assert!(matches!(
            Naming::require("   "),
            Err(GenerateError::InvalidName(_))
        ));
    }
}
