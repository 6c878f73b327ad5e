use bookstore_core::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub book_id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
}

impl CatalogEntry {
    pub fn to_book(&self) -> Book {
        Book {
            book_id: self.book_id.to_string(),
            title: self.title.to_string(),
            author: self.author.to_string(),
        }
    }
}

pub static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry { book_id: "101", title: "Distributed Systems 101", author: "A. Tanenbaum" },
    CatalogEntry { book_id: "102", title: "Clean Architecture", author: "R. Martin" },
    CatalogEntry { book_id: "103", title: "Designing Data-Intensive Apps", author: "M. Kleppmann" },
    CatalogEntry { book_id: "104", title: "Site Reliability Engineering", author: "B. Beyer" },
    CatalogEntry { book_id: "105", title: "The Pragmatic Programmer", author: "A. Hunt" },
    CatalogEntry { book_id: "106", title: "Refactoring", author: "M. Fowler" },
];
