//! Stylist display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{NONE, truncate_string};
use crate::client::models::Stylist;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StylistDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SERVICES")]
    pub services: String,

    #[tabled(rename = "BIO")]
    pub bio: String,
}

impl From<Stylist> for StylistDisplay {
    fn from(stylist: Stylist) -> Self {
        let titles = stylist.service_titles();
        let services = if titles.is_empty() {
            NONE.to_string()
        } else {
            titles.join(", ")
        };
        let bio = stylist
            .bio
            .as_deref()
            .filter(|b| !b.is_empty())
            .map(|b| truncate_string(b, 40))
            .unwrap_or_else(|| NONE.to_string());

        Self {
            id: stylist.id,
            name: stylist.name,
            services,
            bio,
        }
    }
}
