//! Static discover catalog.
//!
//! A fixed in-memory event list with its own numeric id scheme, served by
//! `/v1/discover/events`. Deliberately independent of the database-backed
//! `events` table; the two shapes are never reconciled.

/// One entry in the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEvent {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub city: &'static str,
    pub blurb: &'static str,
    /// `"YYYY-MM-DD"` of the next occurrence.
    pub date: &'static str,
}

pub const CATALOG: &[CatalogEvent] = &[
    CatalogEvent {
        id: 1,
        title: "Flamenco Nights at the Tablao",
        category: "music",
        city: "Seville",
        blurb: "An intimate tablao show with two dancers and a live guitarist.",
        date: "2026-09-18",
    },
    CatalogEvent {
        id: 2,
        title: "Street Art Bike Tour",
        category: "art",
        city: "Berlin",
        blurb: "Three hours of murals, galleries, and squat history by bike.",
        date: "2026-09-20",
    },
    CatalogEvent {
        id: 3,
        title: "Tsukiji Outer Market Breakfast Walk",
        category: "food",
        city: "Tokyo",
        blurb: "Tamagoyaki, tuna, and knife shops before the crowds arrive.",
        date: "2026-09-19",
    },
    CatalogEvent {
        id: 4,
        title: "Midnight Organ Recital",
        category: "music",
        city: "Leipzig",
        blurb: "Bach by candlelight in the Thomaskirche.",
        date: "2026-09-26",
    },
    CatalogEvent {
        id: 5,
        title: "Colosseum Underground Tour",
        category: "history",
        city: "Rome",
        blurb: "Access to the hypogeum and arena floor with an archaeologist.",
        date: "2026-09-22",
    },
    CatalogEvent {
        id: 6,
        title: "Fado and Petiscos Evening",
        category: "food",
        city: "Lisbon",
        blurb: "Small plates in Alfama while three fadistas trade verses.",
        date: "2026-09-25",
    },
];

/// Events matching `category` (case-insensitive); `None` returns everything.
pub fn by_category(category: Option<&str>) -> Vec<&'static CatalogEvent> {
    match category {
        None => CATALOG.iter().collect(),
        Some(wanted) => CATALOG
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(wanted))
            .collect(),
    }
}

/// Look up a catalog entry by id.
pub fn by_id(id: u32) -> Option<&'static CatalogEvent> {
    CATALOG.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_filter_is_case_insensitive() {
        let music = by_category(Some("MUSIC"));
        assert_eq!(music.len(), 2);
        assert!(music.iter().all(|e| e.category == "music"));
    }

    #[test]
    fn no_filter_returns_all() {
        assert_eq!(by_category(None).len(), CATALOG.len());
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(by_category(Some("opera")).is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }
}
