//! Ticket entity
//!
//! A sellable unit carrying the barcodes that admit its holder. A ticket
//! is minted unsold; buying it assigns the buyer, and there is no
//! transition back. A resale mints a new ticket carrying the same barcode
//! rather than moving this one into another listing.

use serde::{Deserialize, Serialize};

use super::{Barcode, Buyer, MarketplaceError, TicketError, TicketId};

/// A ticket inside a listing.
///
/// # Invariants
/// - Carries at least one barcode, checked at construction
/// - Once bought, stays bought
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    barcodes: Vec<Barcode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    buyer: Option<Buyer>,
}

impl Ticket {
    /// Create an unsold ticket.
    ///
    /// # Errors
    /// - `TicketError::MissingBarcode` if `barcodes` is empty
    pub fn new(id: TicketId, barcodes: Vec<Barcode>) -> Result<Self, TicketError> {
        if barcodes.is_empty() {
            return Err(TicketError::MissingBarcode);
        }

        Ok(Self {
            id,
            barcodes,
            buyer: None,
        })
    }

    /// Create a ticket that has already been bought.
    ///
    /// # Errors
    /// - `TicketError::MissingBarcode` if `barcodes` is empty
    pub fn bought(id: TicketId, barcodes: Vec<Barcode>, buyer: Buyer) -> Result<Self, TicketError> {
        let mut ticket = Self::new(id, barcodes)?;
        ticket.buyer = Some(buyer);
        Ok(ticket)
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    /// The barcodes, in the order they were attached.
    pub fn barcodes(&self) -> &[Barcode] {
        &self.barcodes
    }

    /// Whether this ticket carries the given barcode.
    pub fn carries(&self, barcode: &Barcode) -> bool {
        self.barcodes.contains(barcode)
    }

    pub fn buyer(&self) -> Option<&Buyer> {
        self.buyer.as_ref()
    }

    pub fn is_bought(&self) -> bool {
        self.buyer.is_some()
    }

    /// Assign the buyer. The only transition a ticket has is
    /// `Unsold → Sold`; once sold it stays sold.
    ///
    /// # Errors
    /// - `MarketplaceError::TicketAlreadySold` if a buyer is already recorded
    pub fn purchase(&mut self, buyer: Buyer) -> Result<(), MarketplaceError> {
        if self.is_bought() {
            return Err(MarketplaceError::TicketAlreadySold(self.id.clone()));
        }

        self.buyer = Some(buyer);
        Ok(())
    }
}
