//! User store: a plain keyed container over user records

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<Uuid, User>,
}

impl UserStore {
    pub fn get(&self, id: &Uuid) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
