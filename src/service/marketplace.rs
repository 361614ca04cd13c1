//! Marketplace service
//!
//! Orchestrates putting listings up for sale and the ticket purchase
//! transition. Creation rules live in the listing service; this layer
//! adds the purchase-flow invariants: verification before purchase, and
//! one sale per ticket.

use crate::domain::{Buyer, Listing, ListingCreationError, MarketplaceError, Ticket, TicketId};
use crate::repository::ListingRepository;

use super::ListingService;

/// Entry point for sellers and buyers.
#[derive(Debug, Clone)]
pub struct MarketplaceService<R> {
    listings: ListingService<R>,
}

impl<R> MarketplaceService<R>
where
    R: ListingRepository,
{
    pub fn new(listings: ListingService<R>) -> Self {
        Self { listings }
    }

    /// Put a listing up for sale.
    ///
    /// Validation lives entirely in [`ListingService::create_listing`];
    /// errors propagate unchanged.
    pub fn set_listing_to_sell(&self, listing: Listing) -> Result<(), ListingCreationError> {
        self.listings.create_listing(listing)?;
        Ok(())
    }

    /// Listings currently for sale.
    pub fn listings_for_sale(&self) -> Vec<Listing> {
        self.listings.find_all()
    }

    /// Listings for sale that an admin has verified.
    pub fn verified_listings_for_sale(&self) -> Vec<Listing> {
        self.listings.all_verified_listings()
    }

    /// Buy the ticket with the given id.
    ///
    /// Listings are scanned in store order and tickets in listing order;
    /// the first unsold ticket carrying the id is the one bought. The
    /// sale is persisted before the ticket is returned.
    ///
    /// # Errors
    /// - `MarketplaceError::ListingNotVerified` when the ticket's listing
    ///   has no admin verification; the ticket stays unsold
    /// - `MarketplaceError::TicketAlreadySold` when no unsold ticket with
    ///   the id exists anywhere, whether absent or already bought
    pub fn buy_ticket(
        &self,
        buyer: &Buyer,
        ticket_id: &TicketId,
    ) -> Result<Ticket, MarketplaceError> {
        for mut listing in self.listings.find_all() {
            if !listing.is_verified() {
                if listing.available_ticket(ticket_id).is_some() {
                    tracing::debug!(
                        listing = %listing.id(),
                        ticket = %ticket_id,
                        "purchase from unverified listing rejected"
                    );
                    return Err(MarketplaceError::ListingNotVerified(listing.id().clone()));
                }
                continue;
            }

            if let Some(ticket) = listing.available_ticket_mut(ticket_id) {
                ticket.purchase(buyer.clone())?;
                let sold = ticket.clone();
                self.listings.update_listing(listing)?;
                tracing::info!(ticket = %sold.id(), buyer = %buyer, "ticket sold");
                return Ok(sold);
            }
        }

        Err(MarketplaceError::TicketAlreadySold(ticket_id.clone()))
    }
}
