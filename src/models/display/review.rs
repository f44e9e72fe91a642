//! Review display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, stars};
use crate::client::models::Review;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReviewDisplay {
    #[tabled(rename = "RATING")]
    pub rating: String,

    #[tabled(rename = "COMMENT")]
    pub comment: String,

    #[tabled(rename = "BY")]
    pub author: String,

    #[tabled(rename = "DATE")]
    pub date: String,
}

impl From<Review> for ReviewDisplay {
    fn from(review: Review) -> Self {
        let author = review.author();
        Self {
            rating: stars(review.rating),
            comment: review
                .comment
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "No comment provided.".to_string()),
            author,
            date: format_date(review.created_at.as_deref()),
        }
    }
}
