//! In-memory storage layer
//!
//! All records live in a single [`Database`] behind one `RwLock`. The
//! per-entity stores are plain containers; invariant enforcement belongs to
//! the service layer, which holds the write guard across each
//! read-check-mutate sequence.

pub mod books;
pub mod rentals;
pub mod seed;
pub mod users;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use books::BookStore;
use rentals::RentalLedger;
use users::UserStore;

/// The full in-memory data set, created at process start
#[derive(Debug, Default)]
pub struct Database {
    pub books: BookStore,
    pub users: UserStore,
    pub rentals: RentalLedger,
}

/// Shared handle to the database
///
/// Cloning is cheap; all clones point at the same records.
#[derive(Clone)]
pub struct Repository {
    inner: Arc<RwLock<Database>>,
}

impl Repository {
    /// Create a new repository over the given data set
    pub fn new(database: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(database)),
        }
    }

    /// Shared read access; many readers may hold this concurrently
    pub fn read(&self) -> RwLockReadGuard<'_, Database> {
        // A poisoned lock only means a writer panicked; the records are
        // plain data and still usable.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Exclusive access for read-check-mutate sequences
    ///
    /// Callers must hold the guard from the first check to the last
    /// mutation; that is what serializes rent/return per record. Never hold
    /// it across an await point.
    pub fn write(&self) -> RwLockWriteGuard<'_, Database> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
