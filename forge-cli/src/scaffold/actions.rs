//! Action-token parsing
//!
//! Turns the modifier tokens of a `controller`/`resource` invocation into an
//! ordered set of (action name, HTTP verb) pairs plus the `restful` and
//! `with_tests` flags. The `restful` keyword may appear at any position in
//! the token list; position independence is a required property, covered by
//! tests.

use super::error::GenerateError;

/// HTTP verb attached to a controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
}

impl HttpVerb {
    /// Parse the verb half of a `name:verb` token. Case-insensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            "head" => Some(Self::Head),
            _ => None,
        }
    }

    /// Lowercase verb used as the method-name prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
        }
    }
}

/// One action paired with one verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    /// Action name (e.g. `index`).
    pub name: String,
    /// Verb the action answers to.
    pub verb: HttpVerb,
}

impl ActionSpec {
    /// RESTful method name, `verb_name` (e.g. `get_index`).
    #[must_use]
    pub fn method_name(&self) -> String {
        format!("{}_{}", self.verb.as_str(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActionEntry {
    name: String,
    verbs: Vec<HttpVerb>,
}

/// Ordered action names, each holding its ordered verb set, plus the
/// `restful` flag. Order is first-seen order of distinct names; at most one
/// (name, verb) pair exists per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    entries: Vec<ActionEntry>,
    /// Whether the `restful` keyword was present (or the default fallback
    /// applied).
    pub restful: bool,
    defaulted: bool,
}

/// Outcome of scanning a token list: the action set plus the companion
/// `with_tests` flag, which is only meaningful in the resource flow.
#[derive(Debug, Clone)]
pub struct ParsedTokens {
    /// Parsed action set.
    pub actions: ActionSet,
    /// Whether the `with_tests` control token was seen.
    pub with_tests: bool,
}

impl ActionSet {
    /// Scan modifier tokens (subject excluded) in a single pass.
    ///
    /// `restful` and `with_tests` are control tokens, consumed without ever
    /// becoming action names. A `name:verb` token accumulates that verb on
    /// the name; a bare `name` contributes GET only while the name holds no
    /// verb yet, so an explicit verb elsewhere for the same name is never
    /// overwritten.
    ///
    /// If `restful` is set and no action tokens were supplied, the fixed
    /// default RESTful set is applied (see [`Self::apply_restful_defaults`]).
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidToken`] on an empty action name, an empty or
    /// unknown verb.
    pub fn parse(tokens: &[String]) -> Result<ParsedTokens, GenerateError> {
        let mut actions = Self::default();
        let mut with_tests = false;

        for token in tokens {
            match token.as_str() {
                "restful" => actions.restful = true,
                "with_tests" => with_tests = true,
                _ => actions.accumulate(token)?,
            }
        }

        if actions.restful && actions.entries.is_empty() {
            actions.apply_restful_defaults();
        }

        Ok(ParsedTokens { actions, with_tests })
    }

    fn accumulate(&mut self, token: &str) -> Result<(), GenerateError> {
        if let Some((name, verb)) = token.split_once(':') {
            if name.is_empty() || verb.is_empty() {
                return Err(GenerateError::InvalidToken(token.to_string()));
            }
            let verb = HttpVerb::parse(verb)
                .ok_or_else(|| GenerateError::InvalidToken(token.to_string()))?;
            self.entry_mut(name).push_verb(verb);
        } else {
            if token.is_empty() {
                return Err(GenerateError::InvalidToken(token.to_string()));
            }
            let entry = self.entry_mut(token);
            if entry.verbs.is_empty() {
                entry.verbs.push(HttpVerb::Get);
            }
        }
        Ok(())
    }

    fn entry_mut(&mut self, name: &str) -> &mut ActionEntry {
        if let Some(position) = self.entries.iter().position(|e| e.name == name) {
            &mut self.entries[position]
        } else {
            self.entries.push(ActionEntry {
                name: name.to_string(),
                verbs: Vec::new(),
            });
            let last = self.entries.len() - 1;
            &mut self.entries[last]
        }
    }

    /// Install the fixed default RESTful action set used when `restful` was
    /// requested with no explicit actions: `index` answers GET and POST
    /// (form submission targets the collection), the remaining page actions
    /// answer GET, and `update`/`destroy` answer PUT/DELETE with no POST
    /// alias.
    pub fn apply_restful_defaults(&mut self) {
        const DEFAULTS: [(&str, &[HttpVerb]); 6] = [
            ("index", &[HttpVerb::Get, HttpVerb::Post]),
            ("show", &[HttpVerb::Get]),
            ("edit", &[HttpVerb::Get]),
            ("new", &[HttpVerb::Get]),
            ("update", &[HttpVerb::Put]),
            ("destroy", &[HttpVerb::Delete]),
        ];

        for (name, verbs) in DEFAULTS {
            self.entries.push(ActionEntry {
                name: name.to_string(),
                verbs: verbs.to_vec(),
            });
        }
        self.restful = true;
        self.defaulted = true;
    }

    /// Whether no action names were parsed or defaulted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the set came from the default RESTful fallback rather than
    /// explicit tokens.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        self.defaulted
    }

    /// Distinct action names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Expand to one [`ActionSpec`] per (name, verb) pair, name order first,
    /// verb insertion order second.
    #[must_use]
    pub fn specs(&self) -> Vec<ActionSpec> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.verbs.iter().map(|verb| ActionSpec {
                    name: entry.name.clone(),
                    verb: *verb,
                })
            })
            .collect()
    }

    /// Action names that render a page, used for view and test emission in
    /// the resource flow. Explicit sets keep every name; the default
    /// fallback keeps only the GET actions (`update`/`destroy` render no
    /// page).
    #[must_use]
    pub fn page_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !self.defaulted || entry.verbs.contains(&HttpVerb::Get))
            .map(|entry| entry.name.clone())
            .collect()
    }
}

impl ActionEntry {
    fn push_verb(&mut self, verb: HttpVerb) {
        if !self.verbs.contains(&verb) {
            self.verbs.push(verb);
        }
    }
}
