use std::collections::HashSet;

use crate::models::listing::Listing;

/// Drops listings whose `(title, company)` pair was already seen.
/// Input is expected in rank order, so the first (best-ranked) occurrence wins.
pub fn dedupe(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<(String, String)> = HashSet::new();

    listings
        .into_iter()
        .filter(|l| seen.insert((l.title.clone(), l.company.clone())))
        .collect()
}
