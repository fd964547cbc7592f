//! Aggregate [`Query`]s over the stored [`Listing`]s.

use std::{convert::Infallible, num::ParseIntError};

use common::operations::{By, Select};

use crate::{
    domain::{
        listing::{PhysicalKind, TransactionKind},
        Listing,
    },
    infra::Database,
    read::listing::Filter,
    Service,
};

use super::Query;

/// Queries sum of selling prices of all the [`Listing`]s for sale.
///
/// Prices not being an integer are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct PurchasePricesSum;

/// Queries sum of monthly rents of all the [`Listing`]s for rent.
///
/// Rents not being an integer are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct RentalPricesSum;

/// Queries count of house [`Listing`]s having a garage.
///
/// A house with an uncollected garage is counted as having one.
#[derive(Clone, Copy, Debug, Default)]
pub struct HousesWithGarageCount;

impl<Db> Query<PurchasePricesSum> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Listing>, Filter>>,
        Ok = Vec<Listing>,
        Err = Infallible,
    >,
{
    type Ok = i64;
    type Err = Infallible;

    fn execute(&self, _: PurchasePricesSum) -> Result<Self::Ok, Self::Err> {
        let listings = self.database().execute(Select(By::new(
            Filter::transaction(TransactionKind::Purchase),
        )))?;

        Ok(sum(listings
            .iter()
            .filter_map(Listing::purchase)
            .map(|p| ("price", p.price.as_str()))))
    }
}

impl<Db> Query<RentalPricesSum> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Listing>, Filter>>,
        Ok = Vec<Listing>,
        Err = Infallible,
    >,
{
    type Ok = i64;
    type Err = Infallible;

    fn execute(&self, _: RentalPricesSum) -> Result<Self::Ok, Self::Err> {
        let listings = self.database().execute(Select(By::new(
            Filter::transaction(TransactionKind::Rental),
        )))?;

        Ok(sum(listings
            .iter()
            .filter_map(Listing::rental)
            .map(|r| ("rent", r.rent.as_str()))))
    }
}

impl<Db> Query<HousesWithGarageCount> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Listing>, Filter>>,
        Ok = Vec<Listing>,
        Err = Infallible,
    >,
{
    type Ok = usize;
    type Err = Infallible;

    fn execute(
        &self,
        _: HousesWithGarageCount,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .database()
            .execute(Select(By::new(Filter::physical(PhysicalKind::House))))?;

        Ok(listings
            .iter()
            .filter_map(Listing::house)
            .filter(|h| h.has_garage())
            .count())
    }
}

/// Sums the provided `(field, value)` pairs, coercing each value to an
/// integer.
///
/// Values failing the coercion contribute nothing. The sum saturates at the
/// [`i64`] bounds.
fn sum<'a>(values: impl IntoIterator<Item = (&'static str, &'a str)>) -> i64 {
    values
        .into_iter()
        .filter_map(|(field, value)| {
            parse_int(value)
                .map_err(|e| {
                    tracing::debug!("skipping `{field}` value `{value}`: {e}");
                })
                .ok()
        })
        .fold(0, i64::saturating_add)
}

/// Parses the provided `value` as an integer, ignoring surrounding whitespace.
///
/// Digits may be grouped with single `_` separators, like `1_000`.
fn parse_int(value: &str) -> Result<i64, ParseIntError> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let grouped = bytes.iter().enumerate().filter(|(_, b)| **b == b'_').all(
        |(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        },
    );
    if grouped && value.contains('_') {
        value.replace('_', "").parse()
    } else {
        value.parse()
    }
}
