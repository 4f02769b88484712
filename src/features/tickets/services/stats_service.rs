use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::StatsReportDto;
use crate::features::tickets::models::{TicketCategory, TicketPriority, TicketStatus};

/// Raw aggregates read from the store in one snapshot
#[derive(Debug, Clone, Default)]
pub struct TicketCounts {
    pub total: i64,
    pub open: i64,
    /// One entry per distinct created_at date
    pub per_day: Vec<i64>,
    pub by_priority: Vec<(TicketPriority, i64)>,
    pub by_category: Vec<(TicketCategory, i64)>,
}

/// Mean of the per-day counts, rounded half-up to one decimal place.
///
/// Works on the exact rational `sum / days` so boundaries like 1.05 round
/// up instead of depending on binary float representation.
pub fn average_per_day(per_day: &[i64]) -> f64 {
    let days = per_day.len() as i64;
    if days == 0 {
        return 0.0;
    }
    let sum: i64 = per_day.iter().sum();
    // floor(10 * sum / days + 1/2)
    let tenths = (20 * sum + days) / (2 * days);
    tenths as f64 / 10.0
}

/// Count per enumerated value, with zero for values that have no tickets
fn zero_filled<K, I>(
    all: I,
    counts: &[(K, i64)],
    label: fn(&K) -> &'static str,
) -> BTreeMap<String, i64>
where
    K: PartialEq,
    I: IntoIterator<Item = K>,
{
    all.into_iter()
        .map(|value| {
            let count = counts
                .iter()
                .filter(|(k, _)| *k == value)
                .map(|(_, c)| *c)
                .sum();
            (label(&value).to_string(), count)
        })
        .collect()
}

/// Assemble the report from raw counts
pub fn build_report(counts: &TicketCounts) -> StatsReportDto {
    StatsReportDto {
        total_tickets: counts.total,
        open_tickets: counts.open,
        avg_tickets_per_day: average_per_day(&counts.per_day),
        priority_breakdown: zero_filled(
            TicketPriority::ALL,
            &counts.by_priority,
            TicketPriority::as_str,
        ),
        category_breakdown: zero_filled(
            TicketCategory::ALL,
            &counts.by_category,
            TicketCategory::as_str,
        ),
    }
}

/// Service for ticket statistics
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Compute statistics over all tickets
    ///
    /// All reads run in one transaction so the numbers describe the same
    /// snapshot even while tickets are being written.
    pub async fn compute_stats(&self) -> Result<StatsReportDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin stats transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set stats isolation level: {:?}", e);
                AppError::Database(e)
            })?;

        let (total, open) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(*) AS total_tickets,
                COUNT(*) FILTER (WHERE status = $1) AS open_tickets
            FROM tickets
            "#,
        )
        .bind(TicketStatus::Open)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count tickets: {:?}", e);
            AppError::Database(e)
        })?;

        let per_day = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM tickets
            GROUP BY (created_at AT TIME ZONE 'UTC')::date
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count tickets per day: {:?}", e);
            AppError::Database(e)
        })?;

        let by_priority = sqlx::query_as::<_, (TicketPriority, i64)>(
            "SELECT priority, COUNT(*) FROM tickets GROUP BY priority",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count tickets by priority: {:?}", e);
            AppError::Database(e)
        })?;

        let by_category = sqlx::query_as::<_, (TicketCategory, i64)>(
            "SELECT category, COUNT(*) FROM tickets GROUP BY category",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count tickets by category: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to finish stats transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let report = build_report(&TicketCounts {
            total,
            open,
            per_day,
            by_priority,
            by_category,
        });

        tracing::debug!(
            "Ticket stats computed: total={}, open={}, avg_per_day={}",
            report.total_tickets,
            report.open_tickets,
            report.avg_tickets_per_day
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketCategory::*;
    use TicketPriority::*;
    use TicketStatus::*;

    type Row<'a> = (&'a str, TicketPriority, TicketCategory, TicketStatus);

    /// Counts as the store would report them for the given tickets
    fn counts_for(tickets: &[Row<'_>]) -> TicketCounts {
        let mut per_day: BTreeMap<&str, i64> = BTreeMap::new();
        let mut by_priority: Vec<(TicketPriority, i64)> = Vec::new();
        let mut by_category: Vec<(TicketCategory, i64)> = Vec::new();

        for (date, priority, category, _) in tickets {
            *per_day.entry(*date).or_default() += 1;
            match by_priority.iter_mut().find(|(p, _)| p == priority) {
                Some((_, c)) => *c += 1,
                None => by_priority.push((*priority, 1)),
            }
            match by_category.iter_mut().find(|(k, _)| k == category) {
                Some((_, c)) => *c += 1,
                None => by_category.push((*category, 1)),
            }
        }

        TicketCounts {
            total: tickets.len() as i64,
            open: tickets
                .iter()
                .filter(|(_, _, _, s)| *s == Open)
                .count() as i64,
            per_day: per_day.into_values().collect(),
            by_priority,
            by_category,
        }
    }

    #[test]
    fn test_empty_store_yields_zero_report() {
        let report = build_report(&TicketCounts::default());

        assert_eq!(report.total_tickets, 0);
        assert_eq!(report.open_tickets, 0);
        assert_eq!(report.avg_tickets_per_day, 0.0);
        assert_eq!(report.priority_breakdown.len(), 4);
        assert_eq!(report.category_breakdown.len(), 4);
        assert!(report.priority_breakdown.values().all(|c| *c == 0));
        assert!(report.category_breakdown.values().all(|c| *c == 0));
        for key in ["low", "medium", "high", "critical"] {
            assert_eq!(report.priority_breakdown.get(key), Some(&0));
        }
        for key in ["billing", "technical", "account", "general"] {
            assert_eq!(report.category_breakdown.get(key), Some(&0));
        }
    }

    #[test]
    fn test_same_day_tickets_average_to_group_size() {
        let counts = counts_for(&[
            ("2026-03-01", Low, Billing, Open),
            ("2026-03-01", High, Billing, Closed),
            ("2026-03-01", High, Account, Open),
        ]);

        let report = build_report(&counts);

        assert_eq!(report.avg_tickets_per_day, 3.0);
        assert_eq!(report.total_tickets, 3);
        assert_eq!(report.open_tickets, 2);
    }

    #[test]
    fn test_two_days_with_two_tickets_each() {
        let counts = counts_for(&[
            ("2026-03-01", Low, General, Open),
            ("2026-03-01", Low, General, Open),
            ("2026-03-02", Medium, Technical, Resolved),
            ("2026-03-02", Critical, Technical, InProgress),
        ]);

        assert_eq!(build_report(&counts).avg_tickets_per_day, 2.0);
    }

    #[test]
    fn test_breakdowns_sum_to_total_and_zero_fill() {
        let counts = counts_for(&[
            ("2026-03-01", High, Billing, Open),
            ("2026-03-02", High, Billing, Open),
            ("2026-03-04", Low, Technical, Closed),
        ]);

        let report = build_report(&counts);

        let priority_sum: i64 = report.priority_breakdown.values().sum();
        let category_sum: i64 = report.category_breakdown.values().sum();
        assert_eq!(priority_sum, report.total_tickets);
        assert_eq!(category_sum, report.total_tickets);
        assert_eq!(report.priority_breakdown["high"], 2);
        assert_eq!(report.priority_breakdown["low"], 1);
        assert_eq!(report.priority_breakdown["medium"], 0);
        assert_eq!(report.priority_breakdown["critical"], 0);
        assert_eq!(report.category_breakdown["billing"], 2);
        assert_eq!(report.category_breakdown["account"], 0);
        assert_eq!(report.category_breakdown["general"], 0);
        assert_eq!(report.avg_tickets_per_day, 1.0);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 21 tickets over 20 days = 1.05 exactly
        let mut per_day = vec![1; 19];
        per_day.push(2);
        assert_eq!(average_per_day(&per_day), 1.1);

        // 23 over 20 = 1.15
        let mut per_day = vec![1; 17];
        per_day.extend([2, 2, 2]);
        assert_eq!(average_per_day(&per_day), 1.2);

        // 39 over 20 = 1.95
        let mut per_day = vec![2; 19];
        per_day.push(1);
        assert_eq!(average_per_day(&per_day), 2.0);
    }

    #[test]
    fn test_average_rounds_down_below_half() {
        assert_eq!(average_per_day(&[2, 1, 1]), 1.3);
        assert_eq!(average_per_day(&[3, 1, 1]), 1.7);
        assert_eq!(average_per_day(&[1, 1, 1, 1, 1, 1]), 1.0);
    }

    #[test]
    fn test_report_serializes_expected_keys() {
        let value = serde_json::to_value(build_report(&TicketCounts::default())).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "total_tickets",
            "open_tickets",
            "avg_tickets_per_day",
            "priority_breakdown",
            "category_breakdown",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(value["avg_tickets_per_day"], serde_json::json!(0.0));
    }
}
