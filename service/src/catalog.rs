//! Catalog of the [`CompositeKind`]s a [`Listing`] can be constructed as.

use derive_more::{Display, Error};

use crate::{
    domain::listing::{
        Apartment, CompositeKind, FieldError, Fields, House, Listing,
        PhysicalKind, Purchase, Rental, TransactionKind,
    },
    form::{self, Input},
};

/// [`Catalog`] entry describing how to construct a [`Listing`] of a
/// [`CompositeKind`].
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// [`PhysicalKind`] this [`Entry`] is registered for.
    pub physical: PhysicalKind,

    /// [`TransactionKind`] this [`Entry`] is registered for.
    pub transaction: TransactionKind,

    /// [`CompositeKind`] constructed by this [`Entry`].
    pub kind: CompositeKind,

    /// Collects [`Fields`] of the [`CompositeKind`].
    collect: fn(&mut dyn Input) -> Result<Fields, form::Error>,

    /// Builds a [`Listing`] of the [`CompositeKind`] from its [`Fields`].
    build: fn(Fields) -> Result<Listing, FieldError>,
}

impl Entry {
    /// Collects [`Fields`] of a [`Listing`] of this [`Entry`]'s
    /// [`CompositeKind`].
    ///
    /// # Errors
    ///
    /// If the provided [`Input`] fails.
    pub fn collect(
        &self,
        input: &mut dyn Input,
    ) -> Result<Fields, form::Error> {
        (self.collect)(input)
    }

    /// Builds a [`Listing`] of this [`Entry`]'s [`CompositeKind`] from the
    /// provided [`Fields`].
    ///
    /// # Errors
    ///
    /// If the provided [`Fields`] don't fit the [`CompositeKind`].
    pub fn build(&self, fields: Fields) -> Result<Listing, FieldError> {
        (self.build)(fields)
    }
}

/// Static table of all the constructible [`CompositeKind`]s.
pub static CATALOG: [Entry; 4] = [
    Entry {
        physical: PhysicalKind::House,
        transaction: TransactionKind::Rental,
        kind: CompositeKind::HouseRental,
        collect: Listing::collect::<House, Rental>,
        build: Listing::assemble::<House, Rental>,
    },
    Entry {
        physical: PhysicalKind::House,
        transaction: TransactionKind::Purchase,
        kind: CompositeKind::HousePurchase,
        collect: Listing::collect::<House, Purchase>,
        build: Listing::assemble::<House, Purchase>,
    },
    Entry {
        physical: PhysicalKind::Apartment,
        transaction: TransactionKind::Rental,
        kind: CompositeKind::ApartmentRental,
        collect: Listing::collect::<Apartment, Rental>,
        build: Listing::assemble::<Apartment, Rental>,
    },
    Entry {
        physical: PhysicalKind::Apartment,
        transaction: TransactionKind::Purchase,
        kind: CompositeKind::ApartmentPurchase,
        collect: Listing::collect::<Apartment, Purchase>,
        build: Listing::assemble::<Apartment, Purchase>,
    },
];

/// Resolves the [`Entry`] registered for the provided [`PhysicalKind`] and
/// [`TransactionKind`] pair in the [`CATALOG`].
///
/// # Errors
///
/// With [`UnknownCombination`] if no [`Entry`] is registered for the pair.
pub fn resolve(
    physical: PhysicalKind,
    transaction: TransactionKind,
) -> Result<&'static Entry, UnknownCombination> {
    resolve_in(&CATALOG, physical, transaction)
}

/// Resolves the [`Entry`] registered for the provided pair in the provided
/// `table`.
fn resolve_in(
    table: &[Entry],
    physical: PhysicalKind,
    transaction: TransactionKind,
) -> Result<&Entry, UnknownCombination> {
    table
        .iter()
        .find(|e| e.physical == physical && e.transaction == transaction)
        .ok_or(UnknownCombination {
            physical,
            transaction,
        })
}

/// No [`Entry`] is registered for a [`PhysicalKind`] and
/// [`TransactionKind`] pair.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("no listing kind is registered for `{physical}` `{transaction}`")]
pub struct UnknownCombination {
    /// Requested [`PhysicalKind`].
    pub physical: PhysicalKind,

    /// Requested [`TransactionKind`].
    pub transaction: TransactionKind,
}
