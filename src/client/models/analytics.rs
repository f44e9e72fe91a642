//! Admin analytics models

use serde::{Deserialize, Serialize};

/// `GET /admin/analytics/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub summary: Totals,

    #[serde(default)]
    pub bookings_per_service: Vec<ServiceCount>,

    #[serde(default)]
    pub bookings_per_stylist: Vec<StylistCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_stylists: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCount {
    pub service_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistCount {
    pub stylist_name: String,
    pub count: u64,
}
