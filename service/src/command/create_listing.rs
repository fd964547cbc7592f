//! [`Command`] for creating a new [`Listing`] from its [`Fields`].

use std::convert::Infallible;

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    catalog::{self, UnknownCombination},
    domain::{
        listing::{CompositeKind, FieldError, Fields},
        Listing,
    },
    infra::Database,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Listing`] of the provided
/// [`CompositeKind`] from already collected [`Fields`].
#[derive(Clone, Debug)]
pub struct CreateListing {
    /// [`CompositeKind`] of a new [`Listing`].
    pub kind: CompositeKind,

    /// [`Fields`] of a new [`Listing`].
    pub fields: Fields,
}

impl<Db> Command<CreateListing> for Service<Db>
where
    Db: Database<Insert<Listing>, Ok = (), Err = Infallible>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateListing { kind, fields } = cmd;

        let listing = catalog::resolve(kind.physical(), kind.transaction())
            .map_err(tracerr::from_and_wrap!(=> E))?
            .build(fields)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        self.database()
            .execute(Insert(listing.clone()))
            .unwrap_or_else(|e| match e {});

        tracing::debug!("added `{kind}` listing");

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`CompositeKind`] is missing in the [`catalog::CATALOG`].
    #[display("`catalog::CATALOG` is inconsistent: {_0}")]
    UnknownCombination(UnknownCombination),

    /// [`Fields`] don't fit the [`CompositeKind`].
    #[display("invalid listing fields: {_0}")]
    Field(FieldError),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::listing::{CompositeKind, FieldError, Fields, PhysicalKind},
        infra::Memory,
        query::Listings,
        read::listing::Filter,
        Service,
    };

    use super::{Command as _, CreateListing, ExecutionError};

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn stores_created_listing() {
        let service = Service::new(Memory::default());

        let listing = service
            .execute(CreateListing {
                kind: CompositeKind::HousePurchase,
                fields: fields(&[("garage", "attached"), ("price", "10")]),
            })
            .unwrap();

        assert_eq!(listing.kind(), CompositeKind::HousePurchase);
        assert_eq!(listing.physical_kind(), PhysicalKind::House);
        assert_eq!(
            service.execute(Listings(Filter::default())).unwrap(),
            [listing],
        );
    }

    #[test]
    fn rejects_invalid_fields_without_storing() {
        let service = Service::new(Memory::default());

        let err = service
            .execute(CreateListing {
                kind: CompositeKind::ApartmentRental,
                fields: fields(&[("balcony", "terrace")]),
            })
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Field(FieldError::InvalidToken {
                field: "balcony",
                ..
            }),
        ));
        assert!(service
            .execute(Listings(Filter::default()))
            .unwrap()
            .is_empty());
    }
}
