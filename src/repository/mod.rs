//! Listing persistence boundary
//!
//! Storage contract consumed by the services. The marketplace core only
//! ever talks to this trait; the crate ships an in-memory implementation
//! and hosting layers may bring a durable one.

mod in_memory;

pub use in_memory::InMemoryListingRepository;

use crate::domain::{Barcode, Listing, MarketplaceError, Ticket};

/// Storage contract for listings.
///
/// Implementations keep insertion order: the purchase flow scans listings
/// in the order they were saved.
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing.
    fn save(&self, listing: Listing);

    /// Replace the stored listing carrying the same id.
    ///
    /// # Errors
    /// - `MarketplaceError::ListingNotFound` if no listing with that id is stored
    fn update(&self, listing: Listing) -> Result<(), MarketplaceError>;

    /// All listings, in insertion order.
    fn find_all(&self) -> Vec<Listing>;

    /// Listings an admin has verified.
    fn find_all_verified(&self) -> Vec<Listing>;

    /// Verified listings that still hold at least one ticket.
    fn find_all_verified_and_with_tickets(&self) -> Vec<Listing>;

    /// First stored ticket carrying the barcode, scanning listings and
    /// their tickets in order.
    fn find_ticket_by_barcode(&self, barcode: &Barcode) -> Option<Ticket>;
}
