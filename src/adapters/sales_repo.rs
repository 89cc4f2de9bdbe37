use crate::domain::model::SaleRecord;
use crate::domain::ports::SalesRepository;
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::validate_date_order;
use chrono::{NaiveDate, NaiveDateTime};

/// In-memory stand-in for a sales table.
#[derive(Debug, Clone)]
pub struct InMemorySalesRepository {
    records: Vec<SaleRecord>,
}

impl InMemorySalesRepository {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// Three January 2024 sales totalling $666.00.
    pub fn with_sample_data() -> Self {
        let sample = [
            ((2024, 1, 15), (14, 43, 40), 21100),
            ((2024, 1, 20), (9, 30, 0), 15000),
            ((2024, 1, 25), (16, 22, 15), 30500),
        ];

        let records = sample
            .iter()
            .filter_map(|&((y, m, d), (hh, mm, ss), charge_cents)| {
                NaiveDate::from_ymd_opt(y, m, d)
                    .and_then(|date| date.and_hms_opt(hh, mm, ss))
                    .map(|created_at| SaleRecord {
                        created_at,
                        charge_cents,
                    })
            })
            .collect();

        Self::new(records)
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }
}

impl Default for InMemorySalesRepository {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl SalesRepository for InMemorySalesRepository {
    fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<f64> {
        validate_date_order(start, end)?;

        let (count, cents) = self
            .records
            .iter()
            .filter(|sale| sale.created_at >= start && sale.created_at <= end)
            .try_fold((0usize, 0i64), |(n, sum), sale| {
                sum.checked_add(sale.charge_cents)
                    .map(|sum| (n + 1, sum))
                    .ok_or_else(|| SolidError::validation("sales total overflows"))
            })?;

        tracing::debug!("Matched {} sales between {} and {}", count, start, end);

        Ok(cents as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_datetime;

    fn range(start: &str, end: &str) -> (NaiveDateTime, NaiveDateTime) {
        (
            parse_datetime("start", start, false).unwrap(),
            parse_datetime("end", end, true).unwrap(),
        )
    }

    #[test]
    fn test_sample_data_loaded() {
        let repo = InMemorySalesRepository::with_sample_data();
        assert_eq!(repo.records().len(), 3);
    }

    #[test]
    fn test_between_whole_month() {
        let repo = InMemorySalesRepository::default();
        let (start, end) = range("2024-01-01", "2024-01-31");
        assert_eq!(repo.between(start, end).unwrap(), 666.0);
    }

    #[test]
    fn test_between_is_inclusive() {
        let repo = InMemorySalesRepository::default();
        let (start, end) = range("2024-01-15 14:43:40", "2024-01-20 09:30:00");
        assert_eq!(repo.between(start, end).unwrap(), 361.0);
    }

    #[test]
    fn test_between_bare_end_date_covers_whole_day() {
        let repo = InMemorySalesRepository::default();
        let (start, end) = range("2024-01-25", "2024-01-25");
        assert_eq!(repo.between(start, end).unwrap(), 305.0);
    }

    #[test]
    fn test_between_no_matches() {
        let repo = InMemorySalesRepository::default();
        let (start, end) = range("2023-01-01", "2023-12-31");
        assert_eq!(repo.between(start, end).unwrap(), 0.0);
    }

    #[test]
    fn test_between_rejects_inverted_range() {
        let repo = InMemorySalesRepository::default();
        let (end, start) = range("2024-01-01", "2024-01-31");
        assert!(matches!(
            repo.between(start, end),
            Err(SolidError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_between_rejects_overflowing_total() {
        let (at, _) = range("2024-02-01 12:00:00", "2024-02-01");
        let repo = InMemorySalesRepository::new(vec![
            SaleRecord {
                created_at: at,
                charge_cents: i64::MAX,
            },
            SaleRecord {
                created_at: at,
                charge_cents: 1,
            },
        ]);
        assert!(matches!(
            repo.between(at, at),
            Err(SolidError::ValidationError { .. })
        ));
    }
}
