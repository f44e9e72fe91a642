//! Salon service models

use serde::{Deserialize, Serialize};

/// A bookable salon service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price in Kenyan shillings
    #[serde(default, alias = "base_price")]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Stylists offering this service (detail responses only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylists: Vec<StylistRef>,
}

/// Minimal stylist reference nested in other resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistRef {
    #[serde(alias = "stylist_id")]
    pub id: u64,

    #[serde(default)]
    pub name: String,
}

/// Body for `POST /services`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body for `PUT /services/:id`; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ServiceUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.price.is_none()
    }
}
