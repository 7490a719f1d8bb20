use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::server::util::parse::parse_datetime;

/// Picks the message reported for a failed request body.
///
/// Fields are visited in name order so the same input always yields the same message.
/// Nested structs and lists are searched depth first.
pub fn first_message(errors: &ValidationErrors) -> String {
    find_message(errors).unwrap_or_else(|| "Invalid request".to_string())
}

fn find_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let found = match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            }),
            ValidationErrorsKind::Struct(nested) => find_message(nested),
            ValidationErrorsKind::List(items) => items.values().find_map(|e| find_message(e)),
        };

        if found.is_some() {
            return found;
        }
    }

    None
}

/// Accepts `user` or `admin`.
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    match role {
        "user" | "admin" => Ok(()),
        _ => Err(ValidationError::new("role")),
    }
}

/// Accepts an ISO-8601 date or date-time.
pub fn validate_iso8601(value: &str) -> Result<(), ValidationError> {
    parse_datetime(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("iso8601").with_message(Cow::Borrowed("Invalid date")))
}
