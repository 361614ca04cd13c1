//! Domain module
//!
//! Core domain types and business rules: the value types that identify
//! tickets, listings, and people; the two entities; and the domain errors.

pub mod barcode;
pub mod error;
pub mod id;
pub mod listing;
pub mod money;
pub mod party;
pub mod ticket;

pub use barcode::Barcode;
pub use error::{ListingCreationError, MarketplaceError, TicketError};
pub use id::{ListingId, TicketId};
pub use listing::Listing;
pub use money::{Currency, Money};
pub use party::{Admin, Buyer, Seller};
pub use ticket::Ticket;
