use serde::Serialize;

use crate::domain::models::restaurant::Restaurant;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: i64,
    pub total: i64,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}

/// First catalog restaurant the participant has not voted on yet, in
/// catalog order, or None once every restaurant is voted.
pub fn next_restaurant<'a>(catalog: &'a [Restaurant], voted_ids: &[i64]) -> Option<&'a Restaurant> {
    catalog.iter().find(|r| !voted_ids.contains(&r.id))
}

pub fn progress(votes_cast: i64, catalog_size: i64) -> Progress {
    Progress {
        current: votes_cast,
        total: catalog_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(ids: &[i64]) -> Vec<Restaurant> {
        ids.iter()
            .map(|&id| Restaurant {
                id,
                name: format!("Restaurant {}", id),
                cuisine: "Test".into(),
                rating: None,
                price_level: None,
                distance: None,
                description: None,
                image_url: None,
            })
            .collect()
    }

    #[test]
    fn test_next_restaurant_follows_catalog_order() {
        let catalog = catalog(&[1, 2, 3]);

        assert_eq!(next_restaurant(&catalog, &[]).map(|r| r.id), Some(1));
        assert_eq!(next_restaurant(&catalog, &[1]).map(|r| r.id), Some(2));
        // Skipping ahead still returns the earliest unvoted one
        assert_eq!(next_restaurant(&catalog, &[2, 3]).map(|r| r.id), Some(1));
    }

    #[test]
    fn test_next_restaurant_none_exactly_at_completion() {
        let catalog = catalog(&[1, 2]);

        assert!(next_restaurant(&catalog, &[1]).is_some());
        assert!(next_restaurant(&catalog, &[1, 2]).is_none());
        assert!(progress(2, 2).is_complete());
        assert!(!progress(1, 2).is_complete());
    }

    #[test]
    fn test_empty_catalog_never_completes() {
        assert!(!progress(0, 0).is_complete());
    }
}
