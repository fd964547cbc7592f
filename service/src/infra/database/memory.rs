//! In-memory [`Database`] implementation.

use std::{cell::RefCell, convert::Infallible};

use common::operations::{By, Count, Insert, Select};

use crate::{domain::Listing, infra::Database, read::listing::Filter};

/// In-memory [`Database`] keeping [`Listing`]s in their insertion order.
///
/// Append-only: stored [`Listing`]s are never updated nor removed.
#[derive(Debug, Default)]
pub struct Memory {
    /// Stored [`Listing`]s.
    listings: RefCell<Vec<Listing>>,
}

impl Database<Insert<Listing>> for Memory {
    type Ok = ();
    type Err = Infallible;

    fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        self.listings.borrow_mut().push(listing);
        Ok(())
    }
}

impl Database<Select<By<Vec<Listing>, Filter>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect())
    }
}

impl Database<Count<Filter>> for Memory {
    type Ok = usize;
    type Err = Infallible;

    fn execute(
        &self,
        Count(filter): Count<Filter>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| filter.matches(l))
            .count())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Count, Insert, Select};

    use crate::{
        domain::listing::{
            Apartment, House, Listing, PhysicalKind, Purchase, Rental,
            TransactionKind,
        },
        infra::Database as _,
        read::listing::Filter,
    };

    use super::Memory;

    fn listing(square_feet: &str, rental: bool) -> Listing {
        let fields = [("square_feet".to_owned(), square_feet.to_owned())]
            .into_iter()
            .collect();
        if rental {
            Listing::assemble::<House, Rental>(fields).unwrap()
        } else {
            Listing::assemble::<Apartment, Purchase>(fields).unwrap()
        }
    }

    fn select(db: &Memory, filter: Filter) -> Vec<String> {
        db.execute(Select(By::<Vec<Listing>, _>::new(filter)))
            .unwrap()
            .into_iter()
            .map(|l| l.property.square_feet)
            .collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let db = Memory::default();
        for (sqft, rental) in [("3", true), ("1", false), ("2", true)] {
            db.execute(Insert(listing(sqft, rental))).unwrap();
        }

        assert_eq!(select(&db, Filter::default()), ["3", "1", "2"]);
        assert_eq!(db.execute(Count(Filter::default())).unwrap(), 3);
    }

    #[test]
    fn filters_by_classification() {
        let db = Memory::default();
        for (sqft, rental) in [("3", true), ("1", false), ("2", true)] {
            db.execute(Insert(listing(sqft, rental))).unwrap();
        }

        assert_eq!(
            select(&db, Filter::transaction(TransactionKind::Rental)),
            ["3", "2"],
        );
        assert_eq!(
            select(&db, Filter::physical(PhysicalKind::Apartment)),
            ["1"],
        );
        assert_eq!(
            db.execute(Count(Filter {
                physical: Some(PhysicalKind::Apartment),
                transaction: Some(TransactionKind::Rental),
            }))
            .unwrap(),
            0,
        );
    }

    #[test]
    fn empty_by_default() {
        let db = Memory::default();

        assert!(select(&db, Filter::default()).is_empty());
        assert_eq!(db.execute(Count(Filter::default())).unwrap(), 0);
    }
}
