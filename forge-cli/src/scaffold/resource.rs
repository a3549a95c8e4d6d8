//! Resource orchestration
//!
//! Composes model + controller + views + optional tests for one conceptual
//! entity, reconciling the default RESTful action set with explicit user
//! overrides.

use super::actions::ActionSet;
use super::composer::{ArtifactComposer, ArtifactDescriptor};
use super::error::GenerateError;
use super::naming::Naming;

/// Parsed `resource` request.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Singular entity name; the controller uses its plural.
    pub base_name: String,
    /// Effective action set.
    pub actions: ActionSet,
    /// Whether a controller test is emitted.
    pub with_tests: bool,
}

impl ResourceSpec {
    /// Parse the base name and modifier tokens. A resource with no action
    /// tokens (bare `restful` or nothing at all) gets the full default
    /// RESTful set.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty base name,
    /// [`GenerateError::InvalidToken`] on a malformed action token.
    pub fn parse(base_name: &str, tokens: &[String]) -> Result<Self, GenerateError> {
        Naming::require(base_name)?;

        let parsed = ActionSet::parse(tokens)?;
        let mut actions = parsed.actions;
        if actions.is_empty() {
            actions.apply_restful_defaults();
        }

        Ok(Self {
            base_name: base_name.to_string(),
            actions,
            with_tests: parsed.with_tests,
        })
    }

    /// Compose every artifact of the resource: one model for the base name,
    /// one controller at the pluralized name carrying the same action set,
    /// one view per page action at `<base>/<action>`, and, when requested,
    /// one controller test with per-action assertions. Control tokens never
    /// become views or tests.
    ///
    /// # Errors
    ///
    /// Propagates composition failures; nothing is written here.
    pub fn compose(
        &self,
        composer: &ArtifactComposer,
    ) -> Result<Vec<ArtifactDescriptor>, GenerateError> {
        let plural = Naming::pluralize(&self.base_name);
        let page_names = self.actions.page_names();

        let mut artifacts = Vec::new();
        artifacts.push(composer.model(&self.base_name)?);
        artifacts.push(composer.controller(&plural, &self.actions)?);

        for action in &page_names {
            artifacts.push(composer.view(&format!("{}.{action}", self.base_name))?);
        }

        if self.with_tests {
            artifacts.push(composer.controller_test(&plural, &page_names)?);
        }

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathRoots;
    use std::path::Path;

    fn composer() -> ArtifactComposer {
        ArtifactComposer::new(PathRoots::new("application", "public")).unwrap()
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_tokens_defaults_to_full_restful_set() {
        let spec = ResourceSpec::parse("user", &[]).unwrap();
        assert!(spec.actions.restful);
        assert!(spec.actions.is_defaulted());
        assert!(!spec.with_tests);
    }

    #[test]
    fn test_explicit_actions_are_kept() {
        let spec = ResourceSpec::parse("user", &tokens(&["index", "show"])).unwrap();
        assert!(!spec.actions.restful);
        let names: Vec<&str> = spec.actions.names().collect();
        assert_eq!(names, vec!["index", "show"]);
    }

    #[test]
    fn test_compose_emits_model_controller_views() {
        let spec = ResourceSpec::parse("user", &tokens(&["index", "show"])).unwrap();
        let artifacts = spec.compose(&composer()).unwrap();

        let paths: Vec<&Path> = artifacts.iter().map(|a| a.path.as_path()).collect();
        assert!(paths.contains(&Path::new("application/models/user.php")));
        assert!(paths.contains(&Path::new("application/controllers/users.php")));
        assert!(paths.contains(&Path::new("application/views/user/index.blade.php")));
        assert!(paths.contains(&Path::new("application/views/user/show.blade.php")));
    }

    #[test]
    fn test_restful_token_never_becomes_a_view() {
        let spec =
            ResourceSpec::parse("user", &tokens(&["index", "index:post", "restful"])).unwrap();
        let artifacts = spec.compose(&composer()).unwrap();

        assert!(!artifacts
            .iter()
            .any(|a| a.path.ends_with("restful.blade.php")));
        let controller = artifacts
            .iter()
            .find(|a| a.path.ends_with("controllers/users.php"))
            .unwrap();
        assert!(controller.content.contains("public function get_index"));
        assert!(controller.content.contains("public function post_index"));
    }

    #[test]
    fn test_defaulted_views_cover_page_actions_only() {
        let spec = ResourceSpec::parse("user", &[]).unwrap();
        let artifacts = spec.compose(&composer()).unwrap();

        let views: Vec<&Path> = artifacts
            .iter()
            .filter(|a| a.path.extension().is_some() && a.path.to_string_lossy().contains("views"))
            .map(|a| a.path.as_path())
            .collect();
        assert_eq!(views.len(), 4);
        assert!(!artifacts
            .iter()
            .any(|a| a.path.ends_with("update.blade.php") || a.path.ends_with("destroy.blade.php")));
    }

    #[test]
    fn test_with_tests_emits_per_action_assertions() {
        let spec = ResourceSpec::parse("user", &tokens(&["with_tests"])).unwrap();
        let artifacts = spec.compose(&composer()).unwrap();

        let test = artifacts
            .iter()
            .find(|a| a.path.ends_with("tests/controllers/users.test.php"))
            .unwrap();
        assert!(test.content.contains("Controller::call('Users@index')"));
        assert!(!test.content.contains("public function test_restful()"));
    }
}
