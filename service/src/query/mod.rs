//! [`Query`] definition.

pub mod display_listings;
pub mod listings;
pub mod report;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    display_listings::DisplayListings,
    listings::{Listings, ListingsCount},
    report::{HousesWithGarageCount, PurchasePricesSum, RentalPricesSum},
};
