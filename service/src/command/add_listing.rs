//! [`Command`] for interactively adding a new [`Listing`].

use std::convert::Infallible;

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::listing::CompositeKind;
use crate::{
    catalog::{self, UnknownCombination},
    domain::{
        listing::{FieldError, PhysicalKind, TransactionKind},
        Listing,
    },
    form::{self, Input},
    infra::Database,
    Service,
};

use super::{create_listing, Command, CreateListing};

/// [`Command`] for adding a new [`Listing`] by asking its classification and
/// fields from the provided [`Input`].
#[derive(Debug)]
pub struct AddListing<'i, I>(pub &'i mut I);

impl<Db, I> Command<AddListing<'_, I>> for Service<Db>
where
    Db: Database<Insert<Listing>, Ok = (), Err = Infallible>,
    I: Input,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        AddListing(input): AddListing<'_, I>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let input: &mut dyn Input = input;

        let physical =
            form::choose::<PhysicalKind>(input, "What type of property?")
                .map_err(tracerr::from_and_wrap!(=> E))?;
        let transaction =
            form::choose::<TransactionKind>(input, "What payment type?")
                .map_err(tracerr::from_and_wrap!(=> E))?;

        let entry = catalog::resolve(physical, transaction)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let fields = entry
            .collect(input)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        tracing::debug!("collected `{}` fields: {fields:?}", entry.kind);

        self.execute(CreateListing {
            kind: entry.kind,
            fields,
        })
        .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`AddListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Input`] failed.
    #[display("failed to ask listing details: {_0}")]
    Input(form::Error),

    /// [`PhysicalKind`] and [`TransactionKind`] pair has no
    /// [`CompositeKind`] registered.
    #[display("`catalog::CATALOG` is inconsistent: {_0}")]
    UnknownCombination(UnknownCombination),

    /// Collected fields don't fit the [`CompositeKind`].
    #[display("invalid listing fields: {_0}")]
    Field(FieldError),
}

impl From<create_listing::ExecutionError> for ExecutionError {
    fn from(err: create_listing::ExecutionError) -> Self {
        use create_listing::ExecutionError as E;

        match err {
            E::UnknownCombination(e) => Self::UnknownCombination(e),
            E::Field(e) => Self::Field(e),
        }
    }
}
