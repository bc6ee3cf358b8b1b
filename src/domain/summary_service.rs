//! Monthly summary domain logic.
//!
//! Derives a read-only view over a record list: the reward total for the
//! reference month plus a per-registrant breakdown. Pure computation,
//! cheap enough to redo on every render, so nothing is cached.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::models::record::RewardRecord;

/// Summed rewards for one registrant within the reference month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantTotal {
    pub registrant: String,
    pub amount: i64,
}

/// Monthly dashboard view: overall total and per-person breakdown,
/// largest earner first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    pub total: i64,
    pub per_registrant: Vec<RegistrantTotal>,
}

/// Stateless service computing monthly summaries.
#[derive(Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Total and per-registrant breakdown for the calendar month
    /// containing `reference_date`.
    ///
    /// A record counts when its month AND year match the reference date
    /// (calendar-month comparison, not a rolling 30-day window). The
    /// breakdown is sorted descending by summed amount; registrants with
    /// equal sums keep their first-encounter order.
    pub fn monthly_summary(
        &self,
        records: &[RewardRecord],
        reference_date: DateTime<Utc>,
    ) -> MonthlySummary {
        let mut total = 0;
        let mut per_registrant: Vec<RegistrantTotal> = Vec::new();

        for record in records
            .iter()
            .filter(|r| in_same_month(r.date, reference_date))
        {
            total += record.amount;
            match per_registrant
                .iter_mut()
                .find(|entry| entry.registrant == record.registrant)
            {
                Some(entry) => entry.amount += record.amount,
                None => per_registrant.push(RegistrantTotal {
                    registrant: record.registrant.clone(),
                    amount: record.amount,
                }),
            }
        }

        // sort_by is stable, so ties keep encounter order.
        per_registrant.sort_by(|a, b| b.amount.cmp(&a.amount));

        MonthlySummary {
            total,
            per_registrant,
        }
    }
}

fn in_same_month(date: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
    date.month() == reference.month() && date.year() == reference.year()
}
