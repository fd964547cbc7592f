//! [`Rental`] extension definitions.

use std::fmt;

use crate::form::{self, Input};
#[cfg(doc)]
use crate::domain::Listing;

use super::{
    put_kind, put_text, take_kind, take_text, FieldError, Fields, Section,
    Token, YesNo,
};

/// Extension of a [`Listing`] being for rent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rental {
    /// Monthly rent.
    pub rent: String,

    /// Estimated utilities.
    pub utilities: String,

    /// Whether the property is furnished, if collected.
    pub furnished: Option<YesNo>,
}

impl Section for Rental {
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error> {
        let rent = form::text(input, "What is the monthly rent? ")?;
        let utilities =
            form::text(input, "What are the estimated utilities? ")?;
        let furnished =
            form::choose::<YesNo>(input, "Is the property furnished?")?;

        let mut fields = Fields::new();
        put_text(&mut fields, "rent", &rent);
        put_text(&mut fields, "utilities", &utilities);
        put_kind(&mut fields, "furnished", Some(furnished));
        Ok(fields)
    }

    fn take(fields: &mut Fields) -> Result<Self, FieldError> {
        Ok(Self {
            rent: take_text(fields, "rent"),
            utilities: take_text(fields, "utilities"),
            furnished: take_kind(fields, "furnished")?,
        })
    }

    fn put(&self, fields: &mut Fields) {
        put_text(fields, "rent", &self.rent);
        put_text(fields, "utilities", &self.utilities);
        put_kind(fields, "furnished", self.furnished);
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RENTAL DETAILS")?;
        writeln!(f, "rent: {}", self.rent)?;
        writeln!(f, "estimated utilities: {}", self.utilities)?;
        writeln!(f, "furnished: {}", Token(self.furnished))
    }
}
