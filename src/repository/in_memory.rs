//! In-memory listing store
//!
//! Process-local storage used by tests and single-node deployments. The
//! store is an explicit object shared by reference between the services
//! that need it; queries return clones in insertion order.

use std::sync::RwLock;

use crate::domain::{Barcode, Listing, MarketplaceError, Ticket};

use super::ListingRepository;

/// Listing store backed by a `Vec` behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    listings: RwLock<Vec<Listing>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn save(&self, listing: Listing) {
        self.listings
            .write()
            .expect("listing store lock poisoned")
            .push(listing);
    }

    fn update(&self, listing: Listing) -> Result<(), MarketplaceError> {
        let mut listings = self.listings.write().expect("listing store lock poisoned");

        match listings.iter_mut().find(|stored| stored.id() == listing.id()) {
            Some(stored) => {
                *stored = listing;
                Ok(())
            }
            None => Err(MarketplaceError::ListingNotFound(listing.id().clone())),
        }
    }

    fn find_all(&self) -> Vec<Listing> {
        self.listings
            .read()
            .expect("listing store lock poisoned")
            .clone()
    }

    fn find_all_verified(&self) -> Vec<Listing> {
        self.listings
            .read()
            .expect("listing store lock poisoned")
            .iter()
            .filter(|listing| listing.is_verified())
            .cloned()
            .collect()
    }

    fn find_all_verified_and_with_tickets(&self) -> Vec<Listing> {
        self.listings
            .read()
            .expect("listing store lock poisoned")
            .iter()
            .filter(|listing| listing.is_verified() && listing.has_tickets())
            .cloned()
            .collect()
    }

    fn find_ticket_by_barcode(&self, barcode: &Barcode) -> Option<Ticket> {
        let listings = self.listings.read().expect("listing store lock poisoned");

        for listing in listings.iter() {
            for ticket in listing.tickets() {
                if ticket.carries(barcode) {
                    return Some(ticket.clone());
                }
            }
        }

        None
    }
}
