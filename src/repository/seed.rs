//! Built-in sample data
//!
//! The store starts from a fixed catalog, three demo accounts and a few
//! rentals so the API is usable out of the box. Seeded rentals go through
//! the same bookkeeping as live ones: every open rental has its copy
//! deducted from availability.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    config::RentalsConfig,
    error::AppResult,
    models::{Book, Rental, User},
    services::auth::hash_password,
};

use super::Database;

#[allow(clippy::too_many_arguments)]
fn book(
    title: &str,
    author: &str,
    isbn: &str,
    genre: &str,
    description: &str,
    published_year: i32,
    copies: u32,
    rating: f64,
    tags: &[&str],
) -> Book {
    Book {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        cover_image: format!(
            "https://covers.openlibrary.org/b/isbn/{}-M.jpg",
            isbn.replace('-', "")
        ),
        published_year,
        total_copies: copies,
        available_copies: copies,
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn user(email: &str, password: &str, first_name: &str, last_name: &str) -> AppResult<User> {
    Ok(User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: hash_password(password)?,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_at: Utc::now(),
        is_active: true,
    })
}

/// Build the startup data set
pub fn sample_database(config: &RentalsConfig) -> AppResult<Database> {
    let mut db = Database::default();

    let books = vec![
        book(
            "The Name of the Wind",
            "Patrick Rothfuss",
            "978-0-7564-0474-1",
            "Fantasy",
            "A young man grows into the most notorious wizard his world has ever seen, told in his own words.",
            2007,
            4,
            4.5,
            &["magic", "adventure", "music"],
        ),
        book(
            "Project Hail Mary",
            "Andy Weir",
            "978-0-5931-3520-4",
            "Science Fiction",
            "A lone astronaut wakes up on a ship with no memory of his mission and the fate of two worlds at stake.",
            2021,
            3,
            4.7,
            &["space", "survival", "first contact"],
        ),
        book(
            "The Silent Patient",
            "Alex Michaelides",
            "978-1-2501-0168-8",
            "Thriller",
            "A famous painter shoots her husband and never speaks another word; her psychotherapist is determined to find out why.",
            2019,
            5,
            4.1,
            &["psychological", "mystery"],
        ),
        book(
            "Educated",
            "Tara Westover",
            "978-0-3995-9050-4",
            "Memoir",
            "Born to survivalists in the mountains of Idaho, a girl who never set foot in a classroom earns a PhD from Cambridge.",
            2018,
            2,
            4.4,
            &["family", "education"],
        ),
        book(
            "The Midnight Library",
            "Matt Haig",
            "978-0-5255-5947-4",
            "Fiction",
            "Between life and death lies a library of all the lives you could have lived.",
            2020,
            6,
            4.0,
            &["philosophy", "second chances"],
        ),
        book(
            "Dune",
            "Frank Herbert",
            "978-0-4410-1359-3",
            "Science Fiction",
            "The desert planet Arrakis holds the most precious substance in the universe, and one family's destiny.",
            1965,
            3,
            4.6,
            &["space", "politics", "classic"],
        ),
        book(
            "The Thursday Murder Club",
            "Richard Osman",
            "978-1-9848-8096-5",
            "Mystery",
            "Four retirees meet weekly to investigate cold cases, until a fresh murder lands on their doorstep.",
            2020,
            4,
            3.9,
            &["cozy", "humor"],
        ),
        book(
            "Atomic Habits",
            "James Clear",
            "978-0-7352-1129-2",
            "Self-Help",
            "Tiny changes, remarkable results: a proven framework for building good habits and breaking bad ones.",
            2018,
            5,
            4.3,
            &["productivity", "psychology"],
        ),
        book(
            "Circe",
            "Madeline Miller",
            "978-0-3165-5634-7",
            "Fantasy",
            "The banished witch of Aiaia tells her own story, from Titan halls to Odysseus's shore.",
            2018,
            3,
            4.2,
            &["mythology", "greek"],
        ),
        book(
            "The Martian",
            "Andy Weir",
            "978-0-5534-1802-6",
            "Science Fiction",
            "Stranded on Mars, an astronaut engineers his way through one impossible problem after another.",
            2014,
            4,
            4.4,
            &["space", "survival", "humor"],
        ),
        book(
            "Pride and Prejudice",
            "Jane Austen",
            "978-0-1414-3951-8",
            "Romance",
            "Elizabeth Bennet and Mr. Darcy misjudge each other into one of literature's great courtships.",
            1813,
            2,
            4.5,
            &["classic", "regency"],
        ),
        book(
            "The Design of Everyday Things",
            "Don Norman",
            "978-0-4650-5065-9",
            "Design",
            "Why some objects satisfy and others frustrate, and what good design owes its users.",
            1988,
            2,
            4.1,
            &["usability", "psychology"],
        ),
    ];

    let john = user("john.doe@example.com", "password123", "John", "Doe")?;
    let jane = user("jane.smith@example.com", "password123", "Jane", "Smith")?;
    let admin = user("admin@library.com", "admin123", "Library", "Admin")?;

    let now = Utc::now();
    let loan_period = Duration::days(config.loan_period_days);

    // Two open rentals for John, one past rental for Jane returned on time.
    let mut rentals = Vec::new();
    for (user_id, book_index, rented_days_ago, returned_days_ago) in [
        (john.id, 0, 3, None),
        (john.id, 5, 10, None),
        (jane.id, 2, 20, Some(8)),
    ] {
        let rented_at = now - Duration::days(rented_days_ago);
        rentals.push(Rental {
            id: Uuid::new_v4(),
            book_id: books[book_index].id,
            user_id,
            rented_at,
            due_date: rented_at + loan_period,
            returned_at: returned_days_ago.map(|d| now - Duration::days(d)),
            is_returned: returned_days_ago.is_some(),
            late_fee: None,
        });
    }

    for mut b in books {
        let open = rentals
            .iter()
            .filter(|r| r.book_id == b.id && r.is_open())
            .count() as u32;
        b.available_copies = b.total_copies - open;
        db.books.insert(b);
    }
    for u in [john, jane, admin] {
        db.users.insert(u);
    }
    for r in rentals {
        db.rentals.insert(r);
    }

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rentals_keep_availability_consistent() {
        let db = sample_database(&RentalsConfig::default()).unwrap();

        assert!(!db.books.is_empty());
        assert_eq!(db.users.len(), 3);
        assert_eq!(db.rentals.len(), 3);

        for book in db.books.iter() {
            let open = db
                .rentals
                .iter()
                .filter(|r| r.book_id == book.id && r.is_open())
                .count() as u32;
            assert_eq!(book.available_copies + open, book.total_copies);
            assert!(book.available_copies <= book.total_copies);
        }
    }

    #[test]
    fn seeded_users_are_active_with_unique_emails() {
        let db = sample_database(&RentalsConfig::default()).unwrap();

        let mut emails: Vec<&str> = db.users.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), db.users.len());
        assert!(db.users.iter().all(|u| u.is_active));
    }
}
