//! [`Command`] definition.

pub mod add_listing;
pub mod create_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{add_listing::AddListing, create_listing::CreateListing};
