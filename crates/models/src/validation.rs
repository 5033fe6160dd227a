//! Declarative field validation.
//!
//! A schema is a slice of [`FieldRules`]: each entry names a field, says how to
//! read its value and lists the constraints it must satisfy. [`validate`] runs
//! the whole schema and collects every violation into [`ValidationErrors`].

use std::collections::BTreeMap;

use serde::Serialize;

/// Reads the string value of one field, `None` when the field is absent.
pub type Accessor<T> = fn(&T) -> Option<&str>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Present and not blank.
    Required,
    /// At least `n` characters.
    MinLength(usize),
    /// At most `n` characters.
    MaxLength(usize),
}

impl Constraint {
    /// Returns the violation message for `field`, or `None` when satisfied.
    /// Length rules pass on absent values; absence is `Required`'s concern.
    pub fn check(&self, field: &str, value: Option<&str>) -> Option<String> {
        match (*self, value) {
            (Constraint::Required, None) => Some(required_message(field)),
            (Constraint::Required, Some(v)) if v.trim().is_empty() => Some(required_message(field)),
            (Constraint::MinLength(n), Some(v)) if v.chars().count() < n => Some(format!(
                "The field {field} must be a string with a minimum length of {n}."
            )),
            (Constraint::MaxLength(n), Some(v)) if v.chars().count() > n => Some(format!(
                "The field {field} must be a string with a maximum length of {n}."
            )),
            _ => None,
        }
    }
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

pub struct FieldRules<T> {
    pub field: &'static str,
    pub value: Accessor<T>,
    pub constraints: &'static [Constraint],
}

/// Field name to violation messages, ordered by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for m in messages {
                if !first { f.write_str("; ")?; }
                write!(f, "{field}: {m}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Evaluate `value` against `schema`.
pub fn validate<T>(value: &T, schema: &[FieldRules<T>]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rules in schema {
        let v = (rules.value)(value);
        for c in rules.constraints {
            if let Some(msg) = c.check(rules.field, v) {
                errors.add(rules.field, msg);
            }
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        code: Option<String>,
    }

    fn code(s: &Sample) -> Option<&str> { s.code.as_deref() }

    const SCHEMA: &[FieldRules<Sample>] = &[FieldRules {
        field: "code",
        value: code,
        constraints: &[Constraint::Required, Constraint::MinLength(2), Constraint::MaxLength(4)],
    }];

    #[test]
    fn absent_value_only_reports_required() {
        let errs = validate(&Sample { code: None }, SCHEMA).unwrap_err();
        assert_eq!(errs.get("code").unwrap(), ["The code field is required.".to_string()]);
    }

    #[test]
    fn blank_value_is_required_violation() {
        let errs = validate(&Sample { code: Some("   ".into()) }, SCHEMA).unwrap_err();
        assert!(errs.get("code").unwrap()[0].contains("required"));
    }

    #[test]
    fn length_bounds_count_chars() {
        assert!(validate(&Sample { code: Some("ção".into()) }, SCHEMA).is_ok());
        let errs = validate(&Sample { code: Some("abcde".into()) }, SCHEMA).unwrap_err();
        assert_eq!(
            errs.get("code").unwrap(),
            ["The field code must be a string with a maximum length of 4.".to_string()]
        );
        let errs = validate(&Sample { code: Some("a".into()) }, SCHEMA).unwrap_err();
        assert!(errs.get("code").unwrap()[0].contains("minimum length of 2"));
    }

    #[test]
    fn errors_serialize_as_plain_map() {
        let mut errs = ValidationErrors::new();
        errs.add("nome", "a".into());
        errs.add("nome", "b".into());
        let json = serde_json::to_value(&errs).unwrap();
        assert_eq!(json, serde_json::json!({"nome": ["a", "b"]}));
        assert_eq!(errs.to_string(), "nome: a; nome: b");
    }
}
