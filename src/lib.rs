//! Peer-to-peer resale marketplace core for event tickets.
//!
//! Sellers bundle tickets into listings, an admin verifies a listing
//! before any of its tickets can change hands, and every ticket is sold
//! exactly once. A buyer who wants to pass a ticket on relists its
//! barcode under their own name — the creation rules allow that for the
//! recorded buyer and nobody else.
//!
//! The crate is a library: persistence sits behind the
//! [`ListingRepository`] trait (an in-memory store ships with the crate)
//! and any HTTP or CLI surface belongs to the hosting layer.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{
    Admin, Barcode, Buyer, Currency, Listing, ListingCreationError, ListingId, MarketplaceError,
    Money, Seller, Ticket, TicketError, TicketId,
};
pub use repository::{InMemoryListingRepository, ListingRepository};
pub use service::{ListingService, MarketplaceService};
