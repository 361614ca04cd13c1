//! Listing service
//!
//! Sole holder of the business invariants over the listing store: the
//! creation rules, the verification transition, and the read-side
//! filtering of listings without tickets.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Admin, Listing, ListingCreationError, ListingId, MarketplaceError};
use crate::repository::ListingRepository;

/// Enforces listing creation invariants and exposes verification and
/// query operations over the repository.
#[derive(Debug)]
pub struct ListingService<R> {
    repository: Arc<R>,
}

impl<R> Clone for ListingService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ListingService<R>
where
    R: ListingRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new listing, returning it unmodified.
    ///
    /// Checks run in a fixed order so the reported reason is
    /// deterministic: ticket presence, price sign, duplicates inside the
    /// listing, then collisions with barcodes already on the marketplace.
    /// Nothing is persisted unless every check passes.
    ///
    /// # Errors
    /// - `ListingCreationError::NoTickets` for an empty ticket bundle
    /// - `ListingCreationError::NonPositivePrice` for a zero or negative price
    /// - `ListingCreationError::DuplicateBarcode` when two tickets in the
    ///   listing share a barcode
    /// - `ListingCreationError::BarcodeAlreadyForSale` when a barcode is
    ///   already stored, unless its ticket was bought by this seller
    pub fn create_listing(&self, listing: Listing) -> Result<Listing, ListingCreationError> {
        if let Err(err) = self.validate_creation(&listing) {
            tracing::debug!(listing = %listing.id(), %err, "listing rejected");
            return Err(err);
        }

        self.repository.save(listing.clone());
        tracing::info!(
            listing = %listing.id(),
            seller = %listing.seller(),
            price = %listing.price(),
            "listing created"
        );

        Ok(listing)
    }

    fn validate_creation(&self, listing: &Listing) -> Result<(), ListingCreationError> {
        if !listing.has_tickets() {
            return Err(ListingCreationError::NoTickets);
        }

        if listing.price().is_negative() || listing.price().is_zero() {
            return Err(ListingCreationError::NonPositivePrice);
        }

        self.check_no_duplicate_barcodes(listing)?;
        self.check_barcodes_not_already_for_sale(listing)?;

        Ok(())
    }

    /// Reject a listing whose tickets share a barcode, naming the first
    /// duplicate found in ticket order.
    fn check_no_duplicate_barcodes(&self, listing: &Listing) -> Result<(), ListingCreationError> {
        let mut seen = HashSet::new();

        for ticket in listing.tickets() {
            for barcode in ticket.barcodes() {
                if !seen.insert(barcode) {
                    return Err(ListingCreationError::DuplicateBarcode(barcode.clone()));
                }
            }
        }

        Ok(())
    }

    /// A barcode already on the marketplace blocks the listing unless its
    /// ticket was bought by the person now selling it. An unbought
    /// duplicate is always rejected, whoever the seller is.
    fn check_barcodes_not_already_for_sale(
        &self,
        listing: &Listing,
    ) -> Result<(), ListingCreationError> {
        for ticket in listing.tickets() {
            for barcode in ticket.barcodes() {
                let Some(existing) = self.repository.find_ticket_by_barcode(barcode) else {
                    continue;
                };

                let resold_by_its_buyer = existing
                    .buyer()
                    .is_some_and(|buyer| buyer.is_same_person_as(listing.seller()));

                if !resold_by_its_buyer {
                    return Err(ListingCreationError::BarcodeAlreadyForSale(barcode.clone()));
                }
            }
        }

        Ok(())
    }

    /// Replace the stored listing carrying the same id.
    ///
    /// # Errors
    /// - `MarketplaceError::ListingNotFound` if the id is not stored
    pub fn update_listing(&self, listing: Listing) -> Result<(), MarketplaceError> {
        self.repository.update(listing)
    }

    /// All listings holding at least one ticket.
    ///
    /// Zero-ticket listings stay stored but are filtered at read time.
    pub fn find_all(&self) -> Vec<Listing> {
        self.repository
            .find_all()
            .into_iter()
            .filter(Listing::has_tickets)
            .collect()
    }

    /// Verified listings holding at least one ticket.
    pub fn all_verified_listings(&self) -> Vec<Listing> {
        self.repository.find_all_verified_and_with_tickets()
    }

    /// Record an admin verification and persist it in one step.
    ///
    /// Loads the listing, applies the entity transition, and writes it
    /// back; callers have nothing further to remember.
    ///
    /// # Errors
    /// - `MarketplaceError::ListingNotFound` if the id is not stored
    pub fn verify_listing(
        &self,
        listing_id: &ListingId,
        admin: Admin,
    ) -> Result<Listing, MarketplaceError> {
        let mut listing = self
            .repository
            .find_all()
            .into_iter()
            .find(|listing| listing.id() == listing_id)
            .ok_or_else(|| MarketplaceError::ListingNotFound(listing_id.clone()))?;

        listing.verify(admin);
        self.repository.update(listing.clone())?;
        tracing::info!(listing = %listing.id(), "listing verified");

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Barcode, Buyer, Currency, Money, Seller, Ticket, TicketId};
    use crate::repository::InMemoryListingRepository;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn setup() -> (Arc<InMemoryListingRepository>, ListingService<InMemoryListingRepository>) {
        let repository = Arc::new(InMemoryListingRepository::new());
        let service = ListingService::new(Arc::clone(&repository));
        (repository, service)
    }

    fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::new("EUR"))
    }

    fn ticket(value: &str) -> Ticket {
        Ticket::new(TicketId::new(), vec![Barcode::new("EAN-13", value)]).unwrap()
    }

    fn listing(seller: &str, tickets: Vec<Ticket>, price: Money) -> Listing {
        Listing::new(ListingId::new(), Seller::new(seller), tickets, price)
    }

    #[test]
    fn test_create_listing_persists_and_returns_it() {
        let (repository, service) = setup();
        let candidate = listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50)));

        let created = service.create_listing(candidate.clone()).unwrap();

        assert_eq!(created.id(), candidate.id());
        assert_eq!(repository.find_all().len(), 1);
    }

    #[test]
    fn test_listing_without_tickets_rejected() {
        let (repository, service) = setup();
        let candidate = listing("Pascal", vec![], eur(dec!(49.50)));

        let result = service.create_listing(candidate);

        assert_eq!(result, Err(ListingCreationError::NoTickets));
        assert!(repository.find_all().is_empty());
    }

    #[test]
    fn test_listing_with_negative_price_rejected() {
        let (repository, service) = setup();
        let candidate = listing("Pascal", vec![ticket("38974312923")], eur(dec!(-30)));

        let result = service.create_listing(candidate);

        assert_eq!(result, Err(ListingCreationError::NonPositivePrice));
        assert!(repository.find_all().is_empty());
    }

    #[test]
    fn test_listing_with_zero_price_rejected() {
        let (_, service) = setup();
        let candidate = listing("Pascal", vec![ticket("38974312923")], eur(dec!(0)));

        let result = service.create_listing(candidate);

        assert_eq!(result, Err(ListingCreationError::NonPositivePrice));
    }

    #[test]
    fn test_listing_with_duplicate_barcode_rejected() {
        let (repository, service) = setup();
        let candidate = listing(
            "Pascal",
            vec![ticket("38974312923"), ticket("38974312923")],
            eur(dec!(300)),
        );

        let result = service.create_listing(candidate);

        assert_eq!(
            result,
            Err(ListingCreationError::DuplicateBarcode(Barcode::new(
                "EAN-13",
                "38974312923"
            )))
        );
        assert!(repository.find_all().is_empty());
    }

    #[test]
    fn test_barcode_already_for_sale_rejected() {
        let (_, service) = setup();
        service
            .create_listing(listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50))))
            .unwrap();

        let result =
            service.create_listing(listing("Tom", vec![ticket("38974312923")], eur(dec!(60))));

        assert_eq!(
            result,
            Err(ListingCreationError::BarcodeAlreadyForSale(Barcode::new(
                "EAN-13",
                "38974312923"
            )))
        );
    }

    #[test]
    fn test_buyer_may_relist_their_bought_barcode() {
        let (repository, service) = setup();
        let bought = Ticket::bought(
            TicketId::new(),
            vec![Barcode::new("EAN-13", "38974312923")],
            Buyer::new("Sarah"),
        )
        .unwrap();
        repository.save(listing("John", vec![bought], eur(dec!(49.50))));

        let resale = listing("Sarah", vec![ticket("38974312923")], eur(dec!(55)));
        let result = service.create_listing(resale);

        assert!(result.is_ok());
        assert_eq!(repository.find_all().len(), 2);
    }

    #[test]
    fn test_unbought_duplicate_rejected_even_for_same_seller() {
        let (_, service) = setup();
        service
            .create_listing(listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50))))
            .unwrap();

        // Pascal relisting his own still-unsold barcode is still a duplicate.
        let result =
            service.create_listing(listing("Pascal", vec![ticket("38974312923")], eur(dec!(60))));

        assert_eq!(
            result,
            Err(ListingCreationError::BarcodeAlreadyForSale(Barcode::new(
                "EAN-13",
                "38974312923"
            )))
        );
    }

    #[test]
    fn test_find_all_filters_listings_without_tickets() {
        let (repository, service) = setup();
        repository.save(listing("Pascal", vec![], eur(dec!(49.50))));
        let with_tickets = listing("Sarah", vec![ticket("38974312923")], eur(dec!(49.50)));
        repository.save(with_tickets.clone());

        let found = service.find_all();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), with_tickets.id());
    }

    #[test]
    fn test_all_verified_listings_filters_unverified_and_empty() {
        let (repository, service) = setup();

        let mut verified = listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50)));
        verified.verify(Admin::new("AdminUser"));
        repository.save(verified.clone());

        repository.save(listing("Tom", vec![ticket("38974312924")], eur(dec!(20))));

        let mut verified_empty = listing("Sarah", vec![], eur(dec!(20)));
        verified_empty.verify(Admin::new("AdminUser"));
        repository.save(verified_empty);

        let found = service.all_verified_listings();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), verified.id());
    }

    #[test]
    fn test_verify_listing_persists_in_one_step() {
        let (repository, service) = setup();
        let created = service
            .create_listing(listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50))))
            .unwrap();
        assert!(repository.find_all_verified().is_empty());

        let verified = service
            .verify_listing(created.id(), Admin::new("AdminUser"))
            .unwrap();

        assert!(verified.is_verified());
        assert_eq!(verified.verified_by(), Some(&Admin::new("AdminUser")));

        let stored = repository.find_all_verified();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].is_verified());
    }

    #[test]
    fn test_verify_unknown_listing_is_not_found() {
        let (_, service) = setup();
        let unknown = ListingId::new();

        let result = service.verify_listing(&unknown, Admin::new("AdminUser"));

        assert_eq!(result, Err(MarketplaceError::ListingNotFound(unknown)));
    }

    #[test]
    fn test_update_unknown_listing_is_not_found() {
        let (_, service) = setup();
        let stranger = listing("Pascal", vec![ticket("38974312923")], eur(dec!(49.50)));

        let result = service.update_listing(stranger.clone());

        assert_eq!(
            result,
            Err(MarketplaceError::ListingNotFound(stranger.id().clone()))
        );
    }
}
