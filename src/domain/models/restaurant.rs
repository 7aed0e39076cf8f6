use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entry. Reference data seeded by migration, read-only at runtime;
/// catalog order for swiping and results is ascending id.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub distance: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Restaurant {
    pub fn price_display(&self) -> String {
        "$".repeat(self.price_level.unwrap_or(2) as usize)
    }

    /// Star string for display, half-star granularity: "★★★★½" for 4.5.
    pub fn rating_stars(&self) -> String {
        let Some(rating) = self.rating else {
            return String::new();
        };

        let full_stars = rating.floor() as usize;
        let half_star = rating - rating.floor() >= 0.5;

        let mut stars = "★".repeat(full_stars);
        if half_star {
            stars.push('½');
        }
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(rating: Option<f64>, price_level: Option<i64>) -> Restaurant {
        Restaurant {
            id: 1,
            name: "Sakura Garden".into(),
            cuisine: "Japanese".into(),
            rating,
            price_level,
            distance: Some("0.3 mi".into()),
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn test_price_display() {
        assert_eq!(restaurant(None, Some(3)).price_display(), "$$$");
        assert_eq!(restaurant(None, None).price_display(), "$$", "Missing price level defaults to 2");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(restaurant(Some(4.5), None).rating_stars(), "★★★★½");
        assert_eq!(restaurant(Some(4.0), None).rating_stars(), "★★★★");
        assert_eq!(restaurant(Some(3.9), None).rating_stars(), "★★★½");
        assert_eq!(restaurant(Some(3.4), None).rating_stars(), "★★★");
        assert_eq!(restaurant(None, None).rating_stars(), "");
    }
}
