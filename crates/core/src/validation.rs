//! Input validation applied on create.
//!
//! Update deliberately skips these checks: it writes whatever the caller sent.

use crate::error::{ResourceError, ResourceResult};
use crate::schema::Schema;
use crate::store::{Fields, Value};
use chrono::{Local, NaiveDate};
use rbfs_types::NonEmptyText;

/// Ensure every required column of `schema` carries a usable value.
///
/// A value is unusable when it is null, blank text, or the integer zero.
///
/// # Errors
///
/// Returns `ResourceError::Validation` with the schema's missing-fields message.
pub fn check_required(schema: &Schema, fields: &Fields) -> ResourceResult<()> {
    let missing: Vec<&str> = schema
        .required_columns()
        .filter(|column| is_blank(fields.get(column.name)))
        .map(|column| column.name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    tracing::debug!("{}: missing required fields {:?}", schema.path, missing);
    Err(ResourceError::Validation(
        schema.messages.missing_fields.to_owned(),
    ))
}

pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Text(text) => NonEmptyText::new(text).is_err(),
        Value::Integer(n) => *n == 0,
        Value::Date(_) => false,
    }
}

/// The calendar date business rules compare against, taken fresh on every call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Clinic, Resource, Supply, Volunteer};

    fn text(s: &str) -> Value {
        Value::Text(s.into())
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&text("")));
        assert!(is_blank(&text("   ")));
        assert!(is_blank(&Value::Integer(0)));

        assert!(!is_blank(&text("x")));
        assert!(!is_blank(&Value::Integer(-1)));
        assert!(!is_blank(&Value::Date(today())));
    }

    #[test]
    fn test_clinic_requires_only_name_and_address() {
        let mut fields = Fields::new();
        fields.set("nome", text("Posto Sul"));
        fields.set("endereco", text("Av. Brasil, 100"));

        assert!(check_required(Clinic::SCHEMA, &fields).is_ok());
    }

    #[test]
    fn test_clinic_missing_address_uses_clinic_message() {
        let mut fields = Fields::new();
        fields.set("nome", text("Posto Sul"));

        let err = check_required(Clinic::SCHEMA, &fields).expect_err("should require endereco");
        assert!(
            matches!(err, ResourceError::Validation(msg) if msg == "Nome e endereço são obrigatórios!")
        );
    }

    #[test]
    fn test_supply_zero_quantity_counts_as_missing() {
        let mut fields = Fields::new();
        fields.set("nome", text("Feijão"));
        fields.set("quantidade", Value::Integer(0));
        fields.set("validade", Value::Date(today()));

        assert!(check_required(Supply::SCHEMA, &fields).is_err());
    }

    #[test]
    fn test_volunteer_every_field_is_required() {
        for skipped in Volunteer::SCHEMA.column_names() {
            let mut fields = Fields::new();
            for name in Volunteer::SCHEMA.column_names().filter(|n| *n != skipped) {
                fields.set(name, text("preenchido"));
            }
            assert!(
                check_required(Volunteer::SCHEMA, &fields).is_err(),
                "omitting {skipped} should fail"
            );
        }
    }
}
