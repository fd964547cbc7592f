//! [`Query`] rendering all the [`Listing`]s.

use std::{convert::Infallible, io};

use common::operations::{By, Select};

use crate::{domain::Listing, infra::Database, read::listing::Filter, Service};

use super::Query;

/// Renders every [`Listing`] into the provided sink, in their insertion
/// order, each followed by an empty line.
#[derive(Debug)]
pub struct DisplayListings<W>(pub W);

impl<Db, W> Query<DisplayListings<W>> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Listing>, Filter>>,
        Ok = Vec<Listing>,
        Err = Infallible,
    >,
    W: io::Write,
{
    type Ok = ();
    type Err = io::Error;

    fn execute(
        &self,
        DisplayListings(mut out): DisplayListings<W>,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .database()
            .execute(Select(By::new(Filter::default())))
            .unwrap_or_else(|e| match e {});

        for listing in &listings {
            writeln!(out, "{listing}")?;
        }
        out.flush()
    }
}
