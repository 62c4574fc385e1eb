//! Command validation.
//!
//! Commands declare their rules with `validator` derive attributes. This
//! module turns the nested `ValidationErrors` tree into flat domain errors
//! whose `field` detail is a path such as `sections[0].items`.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::foundation::{DomainError, ErrorList};

/// Rejects text that is empty or only whitespace.
///
/// Mirrors the blank check the aggregate factories apply, so a command that
/// passes validation is never rejected later for blank text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("Must not be blank")));
    }
    Ok(())
}

/// Runs the command's rules, returning every violation.
pub fn validate_command<T: Validate>(command: &T) -> Result<(), ErrorList> {
    match ErrorList::from_vec(violations(command)) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

/// Runs the command's rules and returns the violations, empty when valid.
pub fn violations<T: Validate>(command: &T) -> Vec<DomainError> {
    match command.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => flatten(&errors),
    }
}

/// Flattens a `ValidationErrors` tree in field-name order.
pub fn flatten(errors: &ValidationErrors) -> Vec<DomainError> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<DomainError>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(
                    field_errors
                        .iter()
                        .map(|e| DomainError::validation(path.clone(), message_of(e))),
                );
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", error.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate, serde::Serialize)]
    struct Leaf {
        #[validate(length(min = 1, message = "Label is required"))]
        label: String,
    }

    #[derive(Debug, Validate)]
    struct Note {
        #[validate(custom(function = "not_blank"))]
        text: String,
    }

    #[derive(Debug, Validate)]
    struct Root {
        #[validate(length(min = 1, max = 5, message = "Title must be 1-5 characters"))]
        title: String,
        #[validate(length(min = 1, message = "At least one leaf is required"), nested)]
        leaves: Vec<Leaf>,
        #[validate(length(min = 2))]
        code: String,
    }

    #[test]
    fn valid_command_yields_no_violations() {
        let root = Root {
            title: "ok".into(),
            leaves: vec![Leaf { label: "a".into() }],
            code: "ab".into(),
        };
        assert!(violations(&root).is_empty());
        assert!(validate_command(&root).is_ok());
    }

    #[test]
    fn collects_all_top_level_violations_sorted_by_field() {
        let root = Root {
            title: "".into(),
            leaves: Vec::new(),
            code: "ab".into(),
        };
        let errors = violations(&root);
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["leaves", "title"]);
    }

    #[test]
    fn nested_list_errors_carry_index_path() {
        let root = Root {
            title: "ok".into(),
            leaves: vec![Leaf { label: "a".into() }, Leaf { label: "".into() }],
            code: "ab".into(),
        };
        let errors = validate_command(&root).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().field(), Some("leaves[1].label"));
        assert_eq!(errors.first().message, "Label is required");
    }

    #[test]
    fn missing_message_falls_back_to_code() {
        let root = Root {
            title: "ok".into(),
            leaves: vec![Leaf { label: "a".into() }],
            code: "a".into(),
        };
        let errors = violations(&root);
        assert_eq!(errors[0].message, "Invalid value (length)");
    }

    #[test]
    fn not_blank_rejects_whitespace_only_text() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" a ").is_ok());
    }

    #[test]
    fn not_blank_violation_carries_its_message() {
        let errors = violations(&Note {
            text: "\t ".into(),
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), Some("text"));
        assert_eq!(errors[0].message, "Must not be blank");
    }
}
