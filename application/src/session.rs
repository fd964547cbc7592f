//! Interactive session of an agent managing listings.

use std::io::{self, BufRead, Write};

use common::define_kind;
use derive_more::{Display, From};
use service::{
    command::{add_listing, AddListing},
    form,
    query::{
        DisplayListings, HousesWithGarageCount, PurchasePricesSum,
        RentalPricesSum,
    },
    Command as _,
};
use tracerr::Traced;
use tracing as log;

use crate::{Console, Service};

define_kind! {
    #[doc = "Action of a [`run`] session."]
    enum Action {
        #[doc = "Adds a new listing."]
        Add = "add",

        #[doc = "Displays all the listings."]
        Display = "display",

        #[doc = "Prints sum of selling prices."]
        Purchases = "purchases",

        #[doc = "Prints sum of monthly rents."]
        Rentals = "rentals",

        #[doc = "Prints count of houses with a garage."]
        Garages = "garages",

        #[doc = "Ends the session."]
        Quit = "quit",
    }
}

/// Runs an interactive session over the provided [`Console`] until the
/// [`Action::Quit`] is chosen or the input is closed.
///
/// # Errors
///
/// - [`Error::Input`] if the [`Console`] fails to read;
/// - [`Error::AddListing`] if adding a listing fails for a reason other than
///   the input being closed;
/// - [`Error::Output`] if the [`Console`] fails to write.
pub fn run<R, W>(
    service: &Service,
    console: &mut Console<R, W>,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    loop {
        let action = match form::choose::<Action>(
            console,
            "What would you like to do?",
        ) {
            Ok(action) => action,
            Err(form::Error::Closed) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        log::debug!("running `{action}` action");

        match action {
            Action::Add => match service.execute(AddListing(&mut *console)) {
                Ok(listing) => {
                    log::info!("added `{}` listing", listing.kind());
                }
                Err(e)
                    if matches!(
                        e.as_ref(),
                        add_listing::ExecutionError::Input(
                            form::Error::Closed
                        ),
                    ) =>
                {
                    log::warn!("input closed before the listing is complete");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            },
            Action::Display => {
                service.execute(DisplayListings(console.output()))?;
            }
            Action::Purchases => {
                let sum = service
                    .execute(PurchasePricesSum)
                    .unwrap_or_else(|e| match e {});
                writeln!(console.output(), "Purchase sum: {sum}")?;
            }
            Action::Rentals => {
                let sum = service
                    .execute(RentalPricesSum)
                    .unwrap_or_else(|e| match e {});
                writeln!(console.output(), "Rental sum: {sum}")?;
            }
            Action::Garages => {
                let count = service
                    .execute(HousesWithGarageCount)
                    .unwrap_or_else(|e| match e {});
                writeln!(console.output(), "Houses with garage num.: {count}")?;
            }
            Action::Quit => return Ok(()),
        }
    }
}

/// Error of running a session.
#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// [`Console`] failed to read.
    #[display("failed to read input: {_0}")]
    Input(form::Error),

    /// Adding a listing failed.
    #[display("failed to add listing: {_0}")]
    AddListing(Traced<add_listing::ExecutionError>),

    /// [`Console`] failed to write.
    #[display("failed to write output: {_0}")]
    Output(io::Error),
}
