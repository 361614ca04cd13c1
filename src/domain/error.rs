//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure. The display
//! strings are part of the contract: callers surface them to users as-is.

use thiserror::Error;

use super::{Barcode, ListingId, TicketId};

/// Ticket construction violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// A ticket cannot admit anyone without a barcode.
    #[error("A ticket must have at least one barcode.")]
    MissingBarcode,
}

/// Business-rule violations rejected at listing creation time.
///
/// The creation checks run in a fixed order, so for any invalid listing
/// exactly one of these is reported deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingCreationError {
    #[error("A listing cannot be created without tickets.")]
    NoTickets,

    #[error("The listing price must be greater than zero.")]
    NonPositivePrice,

    /// Two tickets inside the same listing share a barcode.
    #[error("Duplicate barcode found in the listing: {0}")]
    DuplicateBarcode(Barcode),

    /// The barcode is already listed on the marketplace by someone other
    /// than its last buyer.
    #[error("Ticket with barcode {0} is already for sale.")]
    BarcodeAlreadyForSale(Barcode),
}

/// Errors surfaced by the marketplace flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketplaceError {
    #[error(transparent)]
    ListingCreation(#[from] ListingCreationError),

    /// Purchase attempted against a listing no admin has verified yet.
    #[error("Listing ({0}) has not been verified and cannot be purchased")]
    ListingNotVerified(ListingId),

    /// The requested ticket is not available: either it was already sold,
    /// or no unsold ticket with that id exists at all.
    #[error("Ticket ({0}) has already been sold")]
    TicketAlreadySold(TicketId),

    /// An update or verification targeted an id the store does not hold.
    #[error("Listing ({0}) not found")]
    ListingNotFound(ListingId),
}
