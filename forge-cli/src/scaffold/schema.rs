//! Migration subject parsing and schema statement synthesis
//!
//! Recognizes the `create_<table>_table` and `add_<field>_to_<table>_table`
//! naming conventions, parses `field:type` tokens, and renders the column
//! statements for the migration's `up` body together with the structurally
//! derived inverse for `down`.

use super::error::GenerateError;
use super::naming::Naming;

/// One column in a schema mutation, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Column name.
    pub name: String,
    /// Schema builder column type (`string`, `integer`, ...). Passed through
    /// verbatim; the host framework owns the vocabulary.
    pub column_type: String,
}

impl SchemaField {
    fn parse(token: &str) -> Result<Self, GenerateError> {
        let Some((name, column_type)) = token.split_once(':') else {
            return Err(GenerateError::InvalidToken(token.to_string()));
        };
        if name.is_empty() || column_type.is_empty() {
            return Err(GenerateError::InvalidToken(token.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            column_type: column_type.to_string(),
        })
    }

    /// Column statement for the `up` body. The field literally named `id`
    /// with type `integer` becomes an auto-incrementing primary key.
    #[must_use]
    pub fn column_statement(&self) -> String {
        if self.name == "id" && self.column_type == "integer" {
            "$table->increments('id');".to_string()
        } else {
            format!("$table->{}('{}');", self.column_type, self.name)
        }
    }

    /// Inverse statement for the `down` body of an alter migration.
    #[must_use]
    pub fn drop_statement(&self) -> String {
        format!("$table->drop_column('{}');", self.name)
    }
}

/// Schema mutation derived from the migration subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOperation {
    /// `create_<table>_table`: `up` builds the table, `down` drops it whole.
    CreateTable {
        /// Table being created.
        table: String,
    },
    /// `add_<field>_to_<table>_table`: `up` adds columns, `down` drops each
    /// added column.
    AlterTable {
        /// Table being altered.
        table: String,
    },
}

/// Parsed migration request. Every create/alter spec has a structurally
/// derivable inverse used to render the teardown block; a subject matching
/// neither convention falls back to a bare migration with empty bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSpec {
    /// Raw subject token, used for the filename slug and class name.
    pub subject: String,
    /// Recognized operation, or `None` for the bare fallback.
    pub operation: Option<MigrationOperation>,
    /// Columns in declaration order.
    pub fields: Vec<SchemaField>,
}

impl MigrationSpec {
    /// Parse the subject and `field:type` tokens.
    ///
    /// For the add pattern, the field named in the subject itself is
    /// appended (type `string`) unless an explicit token already names it.
    /// An unrecognized subject yields a bare spec rather than an error.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidName`] on an empty subject,
    /// [`GenerateError::InvalidToken`] on a malformed `field:type` token.
    pub fn parse(subject: &str, field_tokens: &[String]) -> Result<Self, GenerateError> {
        Naming::require(subject)?;

        let mut fields = field_tokens
            .iter()
            .map(|token| SchemaField::parse(token))
            .collect::<Result<Vec<_>, _>>()?;

        let operation = match parse_subject(subject) {
            Ok(ParsedSubject::Create { table }) => Some(MigrationOperation::CreateTable { table }),
            Ok(ParsedSubject::Add { table, field }) => {
                if !fields.iter().any(|f| f.name == field) {
                    fields.push(SchemaField {
                        name: field,
                        column_type: "string".to_string(),
                    });
                }
                Some(MigrationOperation::AlterTable { table })
            }
            Err(GenerateError::UnknownPattern(_)) => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            subject: subject.to_string(),
            operation,
            fields,
        })
    }

    /// Whether the subject matched neither convention.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.operation.is_none()
    }

    /// Table the operation targets, if any.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        match &self.operation {
            Some(
                MigrationOperation::CreateTable { table } | MigrationOperation::AlterTable { table },
            ) => Some(table),
            None => None,
        }
    }

    /// Column statements for the `up` body, in declaration order.
    #[must_use]
    pub fn column_statements(&self) -> Vec<String> {
        self.fields.iter().map(SchemaField::column_statement).collect()
    }

    /// Drop statements for the `down` body of an alter migration, same
    /// order as `up`.
    #[must_use]
    pub fn drop_statements(&self) -> Vec<String> {
        self.fields.iter().map(SchemaField::drop_statement).collect()
    }
}

enum ParsedSubject {
    Create { table: String },
    Add { table: String, field: String },
}

fn parse_subject(subject: &str) -> Result<ParsedSubject, GenerateError> {
    if let Some(body) = subject
        .strip_prefix("create_")
        .and_then(|rest| rest.strip_suffix("_table"))
    {
        if !body.is_empty() {
            return Ok(ParsedSubject::Create { table: body.to_string() });
        }
    }

    if let Some(body) = subject
        .strip_prefix("add_")
        .and_then(|rest| rest.strip_suffix("_table"))
    {
        // rsplit keeps fields that themselves contain `_to_` intact.
        if let Some((field, table)) = body.rsplit_once("_to_") {
            if !field.is_empty() && !table.is_empty() {
                return Ok(ParsedSubject::Add {
                    table: table.to_string(),
                    field: field.to_string(),
                });
            }
        }
    }

    Err(GenerateError::UnknownPattern(subject.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_create_pattern() {
        let spec = MigrationSpec::parse("create_users_table", &[]).unwrap();
        assert_eq!(
            spec.operation,
            Some(MigrationOperation::CreateTable { table: "users".into() })
        );
        assert_eq!(spec.table(), Some("users"));
    }

    #[test]
    fn test_add_pattern_extracts_field_and_table() {
        let spec = MigrationSpec::parse("add_user_id_to_posts_table", &[]).unwrap();
        assert_eq!(
            spec.operation,
            Some(MigrationOperation::AlterTable { table: "posts".into() })
        );
        // Pattern field appended with the default type.
        assert_eq!(
            spec.fields,
            vec![SchemaField { name: "user_id".into(), column_type: "string".into() }]
        );
    }

    #[test]
    fn test_add_pattern_defers_to_explicit_field_token() {
        let spec =
            MigrationSpec::parse("add_user_id_to_posts_table", &tokens(&["user_id:integer"]))
                .unwrap();
        assert_eq!(
            spec.fields,
            vec![SchemaField { name: "user_id".into(), column_type: "integer".into() }]
        );
    }

    #[test]
    fn test_field_with_to_in_its_name() {
        let spec = MigrationSpec::parse("add_link_to_avatar_to_users_table", &[]).unwrap();
        assert_eq!(spec.table(), Some("users"));
        assert_eq!(spec.fields[0].name, "link_to_avatar");
    }

    #[test]
    fn test_unknown_pattern_falls_back_to_bare() {
        let spec = MigrationSpec::parse("do_something_else", &[]).unwrap();
        assert!(spec.is_bare());
        assert!(spec.column_statements().is_empty());
    }

    #[test]
    fn test_id_integer_becomes_auto_increment() {
        let spec =
            MigrationSpec::parse("create_users_table", &tokens(&["id:integer", "email:string"]))
                .unwrap();
        assert_eq!(
            spec.column_statements(),
            vec!["$table->increments('id');", "$table->string('email');"]
        );
    }

    #[test]
    fn test_drop_statements_mirror_up_order() {
        let spec = MigrationSpec::parse(
            "add_user_id_to_posts_table",
            &tokens(&["user_id:integer", "note:string"]),
        )
        .unwrap();
        assert_eq!(
            spec.drop_statements(),
            vec!["$table->drop_column('user_id');", "$table->drop_column('note');"]
        );
    }

    #[test]
    fn test_malformed_field_token_is_rejected() {
        assert!(MigrationSpec::parse("create_users_table", &tokens(&["email"])).is_err());
        assert!(MigrationSpec::parse("create_users_table", &tokens(&["email:"])).is_err());
        assert!(MigrationSpec::parse("create_users_table", &tokens(&[":string"])).is_err());
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        assert!(matches!(
            MigrationSpec::parse("", &[]),
            Err(GenerateError::InvalidName(_))
        ));
    }
}
