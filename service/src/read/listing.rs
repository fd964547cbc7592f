//! [`Listing`]-related read definitions.

use crate::domain::{
    listing::{PhysicalKind, TransactionKind},
    Listing,
};

/// Filter selecting [`Listing`]s by their classification.
///
/// [`None`] criteria match any [`Listing`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// [`PhysicalKind`] a [`Listing`] must have.
    pub physical: Option<PhysicalKind>,

    /// [`TransactionKind`] a [`Listing`] must have.
    pub transaction: Option<TransactionKind>,
}

impl Filter {
    /// Creates a new [`Filter`] matching [`Listing`]s of the provided
    /// [`PhysicalKind`].
    #[must_use]
    pub fn physical(kind: PhysicalKind) -> Self {
        Self {
            physical: Some(kind),
            transaction: None,
        }
    }

    /// Creates a new [`Filter`] matching [`Listing`]s of the provided
    /// [`TransactionKind`].
    #[must_use]
    pub fn transaction(kind: TransactionKind) -> Self {
        Self {
            physical: None,
            transaction: Some(kind),
        }
    }

    /// Checks whether the provided [`Listing`] matches this [`Filter`].
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.physical.map_or(true, |k| listing.physical_kind() == k)
            && self
                .transaction
                .map_or(true, |k| listing.transaction_kind() == k)
    }
}
