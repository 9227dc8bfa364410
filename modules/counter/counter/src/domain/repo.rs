use async_trait::async_trait;
use chrono::{DateTime, Utc};
use counter_sdk::CalculationRecord;

/// Values written on the first occurrence of a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub calculation_id: String,
    pub expression: String,
    pub representative_result: f64,
}

/// One page of a full scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub records: Vec<CalculationRecord>,
    /// Pass back to fetch the next page; `None` on the last page.
    pub next_token: Option<String>,
}

/// Write side of the counter store.
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Insert with `count = 1`, or add one to the existing count and refresh
    /// `last_updated_at`, as a single atomic step.
    ///
    /// `expression` and `representative_result` of an existing row are not touched.
    async fn increment_or_insert(
        &self,
        calculation: NewCalculation,
        now: DateTime<Utc>,
    ) -> anyhow::Result<CalculationRecord>;

    async fn find(&self, calculation_id: &str) -> anyhow::Result<Option<CalculationRecord>>;
}

/// Read-only paged scan over every record.
#[async_trait]
pub trait CounterScan: Send + Sync {
    /// Up to `limit` records ordered by id, starting after `after`.
    async fn scan_page(&self, after: Option<String>, limit: u64) -> anyhow::Result<ScanPage>;
}
