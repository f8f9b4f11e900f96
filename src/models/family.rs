//! Family unit representation
//!
//! A Family is one `FAM` record: at most one husband and one wife, the
//! marriage and divorce dates, and the children in the order they appear in
//! the source. Members are referenced by id only; a family may name people
//! that were never registered.

use crate::error::Result;
use crate::models::traits::EntityModel;
use crate::parser::date::parse_stored_date;
use chrono::NaiveDate;

/// Representation of a family unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    /// Unique family identifier
    pub id: String,
    /// Husband's individual id (if recorded)
    pub husband: Option<String>,
    /// Wife's individual id (if recorded)
    pub wife: Option<String>,
    /// Marriage date as `mm/dd/yyyy`
    pub marriage: Option<String>,
    /// Divorce date as `mm/dd/yyyy`
    pub divorce: Option<String>,
    /// Children's individual ids in source order
    pub children: Vec<String>,
}

impl Family {
    /// Create a new family with only an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the husband for this family
    #[must_use]
    pub fn with_husband(mut self, id: impl Into<String>) -> Self {
        self.husband = Some(id.into());
        self
    }

    /// Set the wife for this family
    #[must_use]
    pub fn with_wife(mut self, id: impl Into<String>) -> Self {
        self.wife = Some(id.into());
        self
    }

    /// Set the marriage date
    #[must_use]
    pub fn with_marriage(mut self, date: impl Into<String>) -> Self {
        self.marriage = Some(date.into());
        self
    }

    /// Set the divorce date
    #[must_use]
    pub fn with_divorce(mut self, date: impl Into<String>) -> Self {
        self.divorce = Some(date.into());
        self
    }

    /// Replace the child list
    #[must_use]
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Add a child to this family
    pub fn add_child(&mut self, id: impl Into<String>) {
        self.children.push(id.into());
    }

    /// The spouse paired with `id` in this family
    #[must_use]
    pub fn other_spouse(&self, id: &str) -> Option<&str> {
        if self.husband.as_deref() == Some(id) {
            self.wife.as_deref()
        } else if self.wife.as_deref() == Some(id) {
            self.husband.as_deref()
        } else {
            None
        }
    }

    /// Husband then wife id, skipping whichever is missing
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.husband.as_deref().into_iter().chain(self.wife.as_deref())
    }

    /// Parsed marriage date; `None` when no marriage was recorded
    pub fn marriage_date(&self) -> Result<Option<NaiveDate>> {
        self.marriage.as_deref().map(parse_stored_date).transpose()
    }

    /// Parsed divorce date; `None` when no divorce was recorded
    pub fn divorce_date(&self) -> Result<Option<NaiveDate>> {
        self.divorce.as_deref().map(parse_stored_date).transpose()
    }
}

impl EntityModel for Family {
    fn id(&self) -> &str {
        &self.id
    }
}
