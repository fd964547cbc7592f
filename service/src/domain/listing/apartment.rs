//! [`Apartment`] extension definitions.

use std::fmt;

use common::define_kind;

use crate::form::{self, Input};
#[cfg(doc)]
use crate::domain::Listing;

use super::{put_kind, take_kind, FieldError, Fields, Section, Token};

/// Extension of a [`Listing`] being an apartment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Apartment {
    /// [`Laundry`] facilities of this [`Apartment`], if collected.
    pub laundry: Option<Laundry>,

    /// [`Balcony`] of this [`Apartment`], if collected.
    pub balcony: Option<Balcony>,
}

impl Section for Apartment {
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error> {
        let laundry = form::choose::<Laundry>(
            input,
            "What laundry facilities does the property have?",
        )?;
        let balcony = form::choose::<Balcony>(
            input,
            "Does the property have a balcony?",
        )?;

        let mut fields = Fields::new();
        put_kind(&mut fields, "laundry", Some(laundry));
        put_kind(&mut fields, "balcony", Some(balcony));
        Ok(fields)
    }

    fn take(fields: &mut Fields) -> Result<Self, FieldError> {
        Ok(Self {
            laundry: take_kind(fields, "laundry")?,
            balcony: take_kind(fields, "balcony")?,
        })
    }

    fn put(&self, fields: &mut Fields) {
        put_kind(fields, "laundry", self.laundry);
        put_kind(fields, "balcony", self.balcony);
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "APARTMENT DETAILS")?;
        writeln!(f, "laundry: {}", Token(self.laundry))?;
        writeln!(f, "has balcony: {}", Token(self.balcony))
    }
}

define_kind! {
    #[doc = "Laundry facilities of an [`Apartment`]."]
    enum Laundry {
        #[doc = "Shared coin-operated laundry."]
        Coin = "coin",

        #[doc = "Laundry inside the [`Apartment`]."]
        Ensuite = "ensuite",

        #[doc = "No laundry."]
        Absent = "none",
    }
}

define_kind! {
    #[doc = "Balcony of an [`Apartment`]."]
    enum Balcony {
        #[doc = "Has a balcony."]
        Yes = "yes",

        #[doc = "Has no balcony."]
        No = "no",

        #[doc = "Has a solarium."]
        Solarium = "solarium",
    }
}
