//! [`House`] extension definitions.

use std::fmt;

use common::define_kind;

use crate::form::{self, Input};
#[cfg(doc)]
use crate::domain::Listing;

use super::{
    put_kind, put_text, take_kind, take_text, FieldError, Fields, Section,
    Token, YesNo,
};

/// Extension of a [`Listing`] being a house.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct House {
    /// Number of stories of this [`House`].
    pub num_stories: String,

    /// [`Garage`] of this [`House`], if collected.
    pub garage: Option<Garage>,

    /// Whether the yard of this [`House`] is fenced, if collected.
    pub fenced: Option<YesNo>,
}

impl House {
    /// Indicates whether this [`House`] has a garage.
    ///
    /// Only an explicit [`Garage::Absent`] means no garage, so an
    /// uncollected [`Garage`] counts as present.
    #[must_use]
    pub fn has_garage(&self) -> bool {
        self.garage != Some(Garage::Absent)
    }
}

impl Section for House {
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error> {
        let fenced = form::choose::<YesNo>(input, "Is the yard fenced?")?;
        let garage = form::choose::<Garage>(input, "Is there a garage?")?;
        let num_stories = form::text(input, "How many stories? ")?;

        let mut fields = Fields::new();
        put_kind(&mut fields, "fenced", Some(fenced));
        put_kind(&mut fields, "garage", Some(garage));
        put_text(&mut fields, "num_stories", &num_stories);
        Ok(fields)
    }

    fn take(fields: &mut Fields) -> Result<Self, FieldError> {
        Ok(Self {
            num_stories: take_text(fields, "num_stories"),
            garage: take_kind(fields, "garage")?,
            fenced: take_kind(fields, "fenced")?,
        })
    }

    fn put(&self, fields: &mut Fields) {
        put_text(fields, "num_stories", &self.num_stories);
        put_kind(fields, "garage", self.garage);
        put_kind(fields, "fenced", self.fenced);
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HOUSE DETAILS")?;
        writeln!(f, "# of stories: {}", self.num_stories)?;
        writeln!(f, "garage: {}", Token(self.garage))?;
        writeln!(f, "fenced yard: {}", Token(self.fenced))
    }
}

define_kind! {
    #[doc = "Garage of a [`House`]."]
    enum Garage {
        #[doc = "Garage attached to the [`House`]."]
        Attached = "attached",

        #[doc = "Garage standing apart from the [`House`]."]
        Detached = "detached",

        #[doc = "No garage."]
        Absent = "none",
    }
}

#[cfg(test)]
mod spec {
    use super::{Garage, House};

    #[test]
    fn has_garage_unless_explicitly_none() {
        let house = |garage| House {
            garage,
            ..House::default()
        };

        assert!(house(Some(Garage::Attached)).has_garage());
        assert!(house(Some(Garage::Detached)).has_garage());
        assert!(!house(Some(Garage::Absent)).has_garage());
        assert!(house(None).has_garage());
    }
}
