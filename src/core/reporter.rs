use crate::core::{Result, SalesOutput, SalesRepository};
use chrono::NaiveDateTime;

/// Glues a sales source to an output format. Knows nothing about who is
/// asking; access checks happen before a report is requested.
pub struct SalesReporter<R: SalesRepository, O: SalesOutput> {
    repo: R,
    formatter: O,
}

impl<R: SalesRepository, O: SalesOutput> SalesReporter<R, O> {
    pub fn new(repo: R, formatter: O) -> Self {
        Self { repo, formatter }
    }

    pub fn report_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<String> {
        let sales = self.repo.between(start, end)?;
        tracing::debug!("Sales total between {} and {}: {}", start, end, sales);
        self.formatter.output(sales)
    }
}
