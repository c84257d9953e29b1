//! Book store: a plain keyed container over catalog records

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Book;

#[derive(Debug, Default)]
pub struct BookStore {
    books: HashMap<Uuid, Book>,
}

impl BookStore {
    pub fn get(&self, id: &Uuid) -> Option<&Book> {
        self.books.get(id)
    }

    /// In-place access for field updates (available_copies)
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    pub fn insert(&mut self, book: Book) {
        self.books.insert(book.id, book);
    }

    /// Iterate over all books; order is unspecified
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
