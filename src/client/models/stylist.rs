//! Stylist models

use serde::{Deserialize, Serialize};

/// A stylist working at the parlor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: u64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceRef>,
}

/// A service offered by a stylist.
///
/// The server nests these either directly or through a join record
/// (`{"service_id": 1, "service": {...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    #[serde(default, alias = "service_id")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Box<ServiceRef>>,
}

impl ServiceRef {
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.service.as_ref().and_then(|s| s.title()))
    }
}

impl Stylist {
    /// Titles of the services this stylist offers
    pub fn service_titles(&self) -> Vec<&str> {
        self.services.iter().filter_map(ServiceRef::title).collect()
    }
}

/// Body for `POST /stylists`
#[derive(Debug, Clone, Serialize)]
pub struct StylistRequest {
    pub name: String,
    pub bio: String,
    pub service_ids: Vec<u64>,
}

/// Body for `PUT /stylists/:id`
#[derive(Debug, Clone, Default, Serialize)]
pub struct StylistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ids: Option<Vec<u64>>,
}

impl StylistUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.service_ids.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_titles_from_either_shape() {
        let json = r#"{"id":3,"name":"Wanjiru","services":[
            {"id":1,"title":"Braids"},
            {"service_id":2,"stylist_id":3,"service":{"id":2,"title":"Nails"}}
        ]}"#;
        let stylist: Stylist = serde_json::from_str(json).unwrap();
        assert_eq!(stylist.service_titles(), vec!["Braids", "Nails"]);
    }

    #[test]
    fn test_stylist_without_services() {
        let stylist: Stylist = serde_json::from_str(r#"{"id":1,"name":"Amina"}"#).unwrap();
        assert!(stylist.bio.is_none());
        assert!(stylist.service_titles().is_empty());
    }
}
