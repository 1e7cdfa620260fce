//! Record schemas: the fixed, ordered set of fields collected per record.

use std::collections::HashSet;

use thiserror::Error;

use crate::core::validator::{Validator, ValidatorError};

/// Six ASCII digits, zero padded (e.g. `000001`).
pub const ID_NUMBER_PATTERN: &str = r"^\d{6}$";

/// Basic email shape check.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$";

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema must declare at least one field")]
    Empty,

    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    #[error("field '{field}': {source}")]
    Validator {
        field: String,
        #[source]
        source: ValidatorError,
    },
}

/// Static description of one datum to collect.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub prompt: String,
    pub validator: Validator,
}

impl FieldSpec {
    pub fn new(name: &str, prompt: &str, validator: Validator) -> Self {
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
            validator,
        }
    }
}

/// Ordered, non-empty list of uniquely named fields.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Person schema: `firstName,lastName,idNumber,email,yearOfBirth`.
pub fn person_schema(birth_year_min: i64, birth_year_max: i64) -> Result<Schema, SchemaError> {
    let id_number = Validator::pattern(ID_NUMBER_PATTERN).map_err(|source| {
        SchemaError::Validator {
            field: "idNumber".to_string(),
            source,
        }
    })?;
    let email = Validator::pattern(EMAIL_PATTERN).map_err(|source| SchemaError::Validator {
        field: "email".to_string(),
        source,
    })?;
    let year = Validator::ranged_int(birth_year_min, birth_year_max).map_err(|source| {
        SchemaError::Validator {
            field: "yearOfBirth".to_string(),
            source,
        }
    })?;

    Schema::new(vec![
        FieldSpec::new("firstName", "Enter First Name", Validator::NonBlank),
        FieldSpec::new("lastName", "Enter Last Name", Validator::NonBlank),
        FieldSpec::new(
            "idNumber",
            "Enter ID Number (6 digits, e.g., 000001)",
            id_number,
        ),
        FieldSpec::new("email", "Enter Email (e.g., user@example.com)", email),
        FieldSpec::new("yearOfBirth", "Enter Year of Birth (e.g., 1978)", year),
    ])
}
