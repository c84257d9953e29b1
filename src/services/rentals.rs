//! Rental service: the rent/return lifecycle and its bookkeeping
//!
//! This is the only place that creates or mutates rentals and the only
//! writer of `Book::available_copies`. Every operation takes the store's
//! write guard for its whole read-check-mutate sequence, so two rent or
//! return calls for the same book or rental cannot interleave.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    config::RentalsConfig,
    error::{AppError, AppResult},
    models::{Rental, RentalView},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalService {
    repository: Repository,
    config: RentalsConfig,
}

impl RentalService {
    pub fn new(repository: Repository, config: RentalsConfig) -> Self {
        Self { repository, config }
    }

    /// Rent a book for a user
    ///
    /// Fails with `BookNotFound`, `NoCopiesAvailable` or `AlreadyRented`
    /// before any state changes; on success the new rental is appended and
    /// the book's availability drops by one.
    pub fn rent(&self, book_id: Uuid, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Rental> {
        let mut db = self.repository.write();

        let available = db
            .books
            .get(&book_id)
            .ok_or(AppError::BookNotFound(book_id))?
            .available_copies;
        if available == 0 {
            return Err(AppError::NoCopiesAvailable);
        }
        if db.rentals.find_open(&book_id, &user_id).is_some() {
            return Err(AppError::AlreadyRented);
        }

        let rental = Rental {
            id: Uuid::new_v4(),
            book_id,
            user_id,
            rented_at: now,
            due_date: now + Duration::days(self.config.loan_period_days),
            returned_at: None,
            is_returned: false,
            late_fee: None,
        };

        let book = db
            .books
            .get_mut(&book_id)
            .ok_or(AppError::BookNotFound(book_id))?;
        book.available_copies -= 1;
        db.rentals.insert(rental.clone());

        tracing::debug!(rental_id = %rental.id, %book_id, %user_id, "rental created");
        Ok(rental)
    }

    /// Return a rental
    ///
    /// Only the renting user may return it, and only once. A late return
    /// accrues a fee of `late_fee_per_day` per started day past the due
    /// date.
    pub fn return_rental(
        &self,
        rental_id: Uuid,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Rental> {
        let mut db = self.repository.write();

        let rental = db
            .rentals
            .get_mut(&rental_id)
            .ok_or(AppError::RentalNotFound(rental_id))?;
        if rental.user_id != user_id {
            return Err(AppError::AccessDenied(
                "You can only return your own books".to_string(),
            ));
        }
        if rental.is_returned {
            return Err(AppError::AlreadyReturned);
        }

        rental.is_returned = true;
        rental.returned_at = Some(now);
        if now > rental.due_date {
            let days_late = days_late(rental.due_date, now);
            rental.late_fee = Some(days_late as f64 * self.config.late_fee_per_day);
        }
        let rental = rental.clone();

        match db.books.get_mut(&rental.book_id) {
            Some(book) => {
                // Clamped so availability never exceeds the copy count.
                book.available_copies = (book.available_copies + 1).min(book.total_copies);
            }
            None => {
                // The rental itself is the authoritative record; a missing
                // book does not fail the return.
                tracing::warn!(
                    rental_id = %rental.id,
                    book_id = %rental.book_id,
                    "returned rental references a missing book"
                );
            }
        }

        tracing::debug!(rental_id = %rental.id, late_fee = ?rental.late_fee, "rental returned");
        Ok(rental)
    }

    /// A user's open rentals joined with their books, in ledger order
    pub fn user_rentals(&self, user_id: Uuid, now: DateTime<Utc>) -> Vec<RentalView> {
        let db = self.repository.read();
        db.rentals
            .iter()
            .filter(|r| r.user_id == user_id && r.is_open())
            .filter_map(|r| {
                let Some(book) = db.books.get(&r.book_id) else {
                    tracing::warn!(rental_id = %r.id, book_id = %r.book_id, "open rental references a missing book");
                    return None;
                };
                Some(RentalView {
                    id: book.id,
                    title: book.title.clone(),
                    author: book.author.clone(),
                    cover_image: book.cover_image.clone(),
                    genre: book.genre.clone(),
                    rental_id: r.id,
                    rented_at: r.rented_at,
                    due_date: r.due_date,
                    is_overdue: r.is_overdue(now),
                })
            })
            .collect()
    }
}

/// Whole days past the due date, rounded up
fn days_late(due_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let late_ms = (now - due_date).num_milliseconds();
    (late_ms + DAY_MS - 1) / DAY_MS
}
