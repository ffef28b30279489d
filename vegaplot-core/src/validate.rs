//! Deferred validation of spec objects.
//!
//! Setters reject malformed arguments immediately. A few attributes (the data
//! `format` descriptor in particular) may hold an invalid value until
//! validation is requested, at which point each problem is reported as a
//! [`ValidationError`] rather than raised.

use std::fmt::{Display, Formatter};

/// A single problem found on one attribute of a spec object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the object the attribute belongs to (may be empty)
    pub name: String,
    pub attribute: String,
    pub message: String,
}

impl ValidationError {
    pub fn new<N, A, M>(name: N, attribute: A, message: M) -> Self
    where
        N: Into<String>,
        A: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} {}", self.attribute, self.message)
        } else {
            write!(f, "{}: {} {}", self.name, self.attribute, self.message)
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Vec<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
