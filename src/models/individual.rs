//! Individual record model
//!
//! An Individual is one person reconstructed from an `INDI` record. Dates are
//! kept exactly as the parser normalized them (`mm/dd/yyyy`) and are only
//! parsed when a rule needs to compare them.

use crate::error::Result;
use crate::models::traits::EntityModel;
use crate::parser::date::parse_stored_date;
use chrono::NaiveDate;

/// A person in the record file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Individual {
    /// Record identifier, including the surrounding `@` signs
    pub id: String,
    /// Display name with surname slashes removed
    pub name: String,
    /// Birth date as `mm/dd/yyyy`
    pub birth: Option<String>,
    /// Death date as `mm/dd/yyyy`
    pub death: Option<String>,
}

impl Individual {
    /// Create a new individual with only an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth(mut self, date: impl Into<String>) -> Self {
        self.birth = Some(date.into());
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death(mut self, date: impl Into<String>) -> Self {
        self.death = Some(date.into());
        self
    }

    /// Last word of the display name, if there is one
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.name.split_whitespace().last()
    }

    /// Parsed birth date; `None` when no birth date was recorded
    pub fn birth_date(&self) -> Result<Option<NaiveDate>> {
        self.birth.as_deref().map(parse_stored_date).transpose()
    }

    /// Parsed death date; `None` when no death date was recorded
    pub fn death_date(&self) -> Result<Option<NaiveDate>> {
        self.death.as_deref().map(parse_stored_date).transpose()
    }
}

impl EntityModel for Individual {
    fn id(&self) -> &str {
        &self.id
    }
}
