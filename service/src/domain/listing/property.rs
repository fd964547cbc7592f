//! [`Property`] definitions.

use std::fmt;

use crate::form::{self, Input};
#[cfg(doc)]
use crate::domain::Listing;

use super::{put_text, take_text, FieldError, Fields, Section};

/// Attributes every [`Listing`] has.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Property {
    /// Area of the property in square feet.
    pub square_feet: String,

    /// Number of bedrooms.
    pub beds: String,

    /// Number of bathrooms.
    pub baths: String,
}

impl Section for Property {
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error> {
        let mut fields = Fields::new();
        put_text(
            &mut fields,
            "square_feet",
            &form::text(input, "Enter the square feet: ")?,
        );
        put_text(
            &mut fields,
            "beds",
            &form::text(input, "Enter number of bedrooms: ")?,
        );
        put_text(
            &mut fields,
            "baths",
            &form::text(input, "Enter number of baths: ")?,
        );
        Ok(fields)
    }

    fn take(fields: &mut Fields) -> Result<Self, FieldError> {
        Ok(Self {
            square_feet: take_text(fields, "square_feet"),
            beds: take_text(fields, "beds"),
            baths: take_text(fields, "baths"),
        })
    }

    fn put(&self, fields: &mut Fields) {
        put_text(fields, "square_feet", &self.square_feet);
        put_text(fields, "beds", &self.beds);
        put_text(fields, "baths", &self.baths);
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROPERTY DETAILS")?;
        writeln!(f, "================")?;
        writeln!(f, "square footage: {}", self.square_feet)?;
        writeln!(f, "bedrooms: {}", self.beds)?;
        writeln!(f, "bathrooms: {}", self.baths)?;
        writeln!(f)
    }
}
