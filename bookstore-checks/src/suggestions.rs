use bookstore_core::{Book, Order};

use crate::catalog::CATALOG;

pub const MAX_SUGGESTIONS: usize = 3;

/// Undecodable payloads are treated as the empty order.
pub fn suggest_payload(order_json: &str) -> Vec<Book> {
    let order = Order::from_json(order_json).unwrap_or_else(|e| {
        tracing::warn!("Suggestions received undecodable order, using empty order: {}", e);
        Order::default()
    });
    suggest(&order)
}

/// Up to three catalog books the order does not already contain, scanning
/// the catalog circularly from an offset seeded by the user's name.
pub fn suggest(order: &Order) -> Vec<Book> {
    let ordered = order.ordered_titles();
    let start = start_offset(&order.user.name);

    (0..CATALOG.len())
        .map(|offset| &CATALOG[(start + offset) % CATALOG.len()])
        .filter(|entry| !ordered.contains(&entry.title.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .map(|entry| entry.to_book())
        .collect()
}

/// Sum of the name's character codes, modulo the catalog size.
pub fn start_offset(name: &str) -> usize {
    let seed: u64 = name.chars().map(u64::from).sum();
    (seed % CATALOG.len() as u64) as usize
}
