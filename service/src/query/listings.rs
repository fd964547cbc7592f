//! [`Query`] collection related to multiple [`Listing`]s.

use std::convert::Infallible;

use common::operations::{By, Count, Select};

use crate::{domain::Listing, infra::Database, read::listing::Filter, Service};

use super::Query;

/// Queries [`Listing`]s matching a [`Filter`], in their insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Listings(pub Filter);

impl<Db> Query<Listings> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Listing>, Filter>>,
        Ok = Vec<Listing>,
        Err = Infallible,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Infallible;

    fn execute(
        &self,
        Listings(filter): Listings,
    ) -> Result<Self::Ok, Self::Err> {
        self.database().execute(Select(By::new(filter)))
    }
}

/// Queries count of [`Listing`]s matching a [`Filter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ListingsCount(pub Filter);

impl<Db> Query<ListingsCount> for Service<Db>
where
    Db: Database<Count<Filter>, Ok = usize, Err = Infallible>,
{
    type Ok = usize;
    type Err = Infallible;

    fn execute(
        &self,
        ListingsCount(filter): ListingsCount,
    ) -> Result<Self::Ok, Self::Err> {
        self.database().execute(Count(filter))
    }
}
