//! [`Purchase`] extension definitions.

use std::fmt;

use crate::form::{self, Input};
#[cfg(doc)]
use crate::domain::Listing;

use super::{put_text, take_text, FieldError, Fields, Section};

/// Extension of a [`Listing`] being for sale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Purchase {
    /// Selling price.
    pub price: String,

    /// Estimated taxes.
    pub taxes: String,
}

impl Section for Purchase {
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error> {
        let price = form::text(input, "What is the selling price? ")?;
        let taxes = form::text(input, "What are the estimated taxes? ")?;

        let mut fields = Fields::new();
        put_text(&mut fields, "price", &price);
        put_text(&mut fields, "taxes", &taxes);
        Ok(fields)
    }

    fn take(fields: &mut Fields) -> Result<Self, FieldError> {
        Ok(Self {
            price: take_text(fields, "price"),
            taxes: take_text(fields, "taxes"),
        })
    }

    fn put(&self, fields: &mut Fields) {
        put_text(fields, "price", &self.price);
        put_text(fields, "taxes", &self.taxes);
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PURCHASE DETAILS")?;
        writeln!(f, "selling price: {}", self.price)?;
        writeln!(f, "estimated taxes: {}", self.taxes)
    }
}
