//! Listing entity
//!
//! A seller's bundle of tickets offered at a single price. Listings start
//! unverified; an admin verification is recorded once and never revoked.
//! Listings are never deleted — a listing whose tickets are all sold
//! simply stops mattering to the purchase flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Admin, ListingId, Money, Seller, Ticket, TicketId};

/// A listing on the marketplace.
///
/// Price positivity and barcode uniqueness are creation-time rules owned
/// by the listing service; the entity itself accepts whatever it is given
/// so that stores can hold historical state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    id: ListingId,
    seller: Seller,
    tickets: Vec<Ticket>,
    price: Money,
    is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verified_by: Option<Admin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verified_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Create an unverified listing.
    pub fn new(id: ListingId, seller: Seller, tickets: Vec<Ticket>, price: Money) -> Self {
        Self {
            id,
            seller,
            tickets,
            price,
            is_verified: false,
            verified_by: None,
            verified_at: None,
        }
    }

    pub fn id(&self) -> &ListingId {
        &self.id
    }

    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn verified_by(&self) -> Option<&Admin> {
        self.verified_by.as_ref()
    }

    pub fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.verified_at
    }

    /// All tickets, in listing order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Tickets still available for sale.
    pub fn tickets_for_sale(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| !t.is_bought()).collect()
    }

    /// Tickets already bought.
    pub fn tickets_sold(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.is_bought()).collect()
    }

    pub fn has_tickets(&self) -> bool {
        !self.tickets.is_empty()
    }

    /// First unsold ticket with the given id, if any.
    pub fn available_ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == id && !t.is_bought())
    }

    /// Mutable access to the first unsold ticket with the given id.
    pub fn available_ticket_mut(&mut self, id: &TicketId) -> Option<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id() == id && !t.is_bought())
    }

    /// Record the admin verification.
    ///
    /// One-way: there is no un-verify. A repeat call overwrites the
    /// recorded verifier and timestamp.
    pub fn verify(&mut self, admin: Admin) {
        self.is_verified = true;
        self.verified_by = Some(admin);
        self.verified_at = Some(Utc::now());
    }
}
