//! Common test utilities

use std::sync::Arc;

use rust_decimal::Decimal;
use ticket_marketplace::{
    Barcode, Currency, InMemoryListingRepository, Listing, ListingId, ListingService,
    MarketplaceService, Money, Seller, Ticket, TicketId,
};

/// A marketplace wired to a fresh in-memory store, with handles on every
/// layer so tests can drive flows and inspect persisted state.
pub struct TestMarketplace {
    pub repository: Arc<InMemoryListingRepository>,
    pub listings: ListingService<InMemoryListingRepository>,
    pub marketplace: MarketplaceService<InMemoryListingRepository>,
}

pub fn setup_marketplace() -> TestMarketplace {
    let repository = Arc::new(InMemoryListingRepository::new());
    let listings = ListingService::new(Arc::clone(&repository));
    let marketplace = MarketplaceService::new(listings.clone());

    TestMarketplace {
        repository,
        listings,
        marketplace,
    }
}

pub fn eur(amount: Decimal) -> Money {
    Money::new(amount, Currency::new("EUR"))
}

pub fn ean13(value: &str) -> Barcode {
    Barcode::new("EAN-13", value)
}

pub fn ticket_with_barcode(value: &str) -> Ticket {
    Ticket::new(TicketId::new(), vec![ean13(value)]).expect("one barcode is enough")
}

pub fn listing_by(seller: &str, tickets: Vec<Ticket>, price: Money) -> Listing {
    Listing::new(ListingId::new(), Seller::new(seller), tickets, price)
}
