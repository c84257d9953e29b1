//! Rental ledger: an insertion-ordered container over rental records

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::Rental;

/// Rentals keyed by id. Insertion order is preserved so listings stay
/// deterministic.
#[derive(Debug, Default)]
pub struct RentalLedger {
    rentals: IndexMap<Uuid, Rental>,
}

impl RentalLedger {
    pub fn get(&self, id: &Uuid) -> Option<&Rental> {
        self.rentals.get(id)
    }

    /// In-place access for the Active -> Returned transition
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Rental> {
        self.rentals.get_mut(id)
    }

    /// Append a rental; ids are unique, so this never replaces
    pub fn insert(&mut self, rental: Rental) {
        self.rentals.insert(rental.id, rental);
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.values()
    }

    /// The open rental for a (book, user) pair, if one exists
    pub fn find_open(&self, book_id: &Uuid, user_id: &Uuid) -> Option<&Rental> {
        self.rentals
            .values()
            .find(|r| r.book_id == *book_id && r.user_id == *user_id && r.is_open())
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }
}
