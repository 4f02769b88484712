use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate metrics over every stored ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsReportDto {
    pub total_tickets: i64,
    pub open_tickets: i64,
    /// Mean tickets per calendar day (UTC) with at least one ticket, one decimal
    pub avg_tickets_per_day: f64,
    /// Count per priority; every priority is present
    pub priority_breakdown: BTreeMap<String, i64>,
    /// Count per category; every category is present
    pub category_breakdown: BTreeMap<String, i64>,
}
