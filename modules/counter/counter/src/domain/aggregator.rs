//! Sum of all counts.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::DomainError;
use super::repo::CounterScan;

/// Read-only view that totals the counter store.
///
/// Constructed from [`CounterScan`] alone, so it cannot write.
pub struct Aggregator {
    scan: Arc<dyn CounterScan>,
    page_size: u64,
}

impl Aggregator {
    /// `page_size` below 1 is raised to 1.
    pub fn new(scan: Arc<dyn CounterScan>, page_size: u64) -> Self {
        Self {
            scan,
            page_size: page_size.max(1),
        }
    }

    /// Scan every page and add up the counts. An empty store totals 0.
    ///
    /// # Errors
    /// [`DomainError::Storage`] if any page fails or the sum overflows `u64`;
    /// [`DomainError::Unexpected`] if a continuation token does not advance.
    /// No partial total is returned.
    #[instrument(skip(self))]
    pub async fn total_count(&self) -> Result<u64, DomainError> {
        let mut total: u64 = 0;
        let mut pages: u64 = 0;
        let mut after: Option<String> = None;

        loop {
            let page = self.scan.scan_page(after.clone(), self.page_size).await?;
            pages += 1;

            for record in &page.records {
                total = total.checked_add(record.count).ok_or_else(|| {
                    DomainError::storage("total calculation count overflows u64")
                })?;
            }

            match page.next_token {
                None => break,
                Some(next) if after.as_deref() == Some(next.as_str()) => {
                    return Err(DomainError::Unexpected(format!(
                        "scan did not advance past '{next}'"
                    )));
                }
                Some(next) => after = Some(next),
            }
        }

        debug!(total, pages, "Aggregated calculation counts");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repo::ScanPage;
    use async_trait::async_trait;
    use chrono::Utc;
    use counter_sdk::CalculationRecord;
    use std::sync::Mutex;

    fn record(id: &str, count: u64) -> CalculationRecord {
        CalculationRecord {
            calculation_id: id.to_owned(),
            expression: id.to_owned(),
            representative_result: 0.0,
            count,
            last_updated_at: Utc::now(),
        }
    }

    // Serves sorted records with keyset semantics, like the real store.
    struct MockScan {
        records: Vec<CalculationRecord>,
        fail_on_page: Option<usize>,
        calls: Mutex<usize>,
    }

    impl MockScan {
        fn new(mut records: Vec<CalculationRecord>) -> Self {
            records.sort_by(|a, b| a.calculation_id.cmp(&b.calculation_id));
            Self {
                records,
                fail_on_page: None,
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CounterScan for MockScan {
        async fn scan_page(&self, after: Option<String>, limit: u64) -> anyhow::Result<ScanPage> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if self.fail_on_page == Some(call) {
                anyhow::bail!("connection reset");
            }

            let limit = usize::try_from(limit).unwrap();
            let remaining: Vec<_> = self
                .records
                .iter()
                .filter(|r| after.as_deref().is_none_or(|a| r.calculation_id.as_str() > a))
                .cloned()
                .collect();
            let has_more = remaining.len() > limit;
            let records: Vec<_> = remaining.into_iter().take(limit).collect();
            let next_token = if has_more {
                records.last().map(|r| r.calculation_id.clone())
            } else {
                None
            };
            Ok(ScanPage {
                records,
                next_token,
            })
        }
    }

    #[tokio::test]
    async fn test_empty_store_totals_zero() {
        let scan = Arc::new(MockScan::new(vec![]));
        let aggregator = Aggregator::new(scan.clone(), 10);
        assert_eq!(aggregator.total_count().await.unwrap(), 0);
        assert_eq!(scan.calls(), 1);
    }

    #[tokio::test]
    async fn test_single_page_total() {
        let scan = Arc::new(MockScan::new(vec![
            record("2 add 3", 3),
            record("sqrt(9)", 5),
        ]));
        let aggregator = Aggregator::new(scan, 10);
        assert_eq!(aggregator.total_count().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_total_spans_pages() {
        let records: Vec<_> = (1..=7).map(|i| record(&format!("sqrt({i})"), i)).collect();
        let scan = Arc::new(MockScan::new(records));
        let aggregator = Aggregator::new(scan.clone(), 3);

        assert_eq!(aggregator.total_count().await.unwrap(), 28);
        assert_eq!(scan.calls(), 3);
    }

    #[tokio::test]
    async fn test_failing_page_fails_whole_total() {
        let records: Vec<_> = (1..=6).map(|i| record(&format!("sin({i})"), 1)).collect();
        let mut scan = MockScan::new(records);
        scan.fail_on_page = Some(2);
        let aggregator = Aggregator::new(Arc::new(scan), 2);

        let err = aggregator.total_count().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn test_overflow_is_a_storage_error() {
        let scan = Arc::new(MockScan::new(vec![
            record("a", u64::MAX),
            record("b", 1),
        ]));
        let aggregator = Aggregator::new(scan, 10);
        assert!(matches!(
            aggregator.total_count().await,
            Err(DomainError::Storage(_))
        ));
    }

    struct StuckScan;

    #[async_trait]
    impl CounterScan for StuckScan {
        async fn scan_page(&self, _after: Option<String>, _limit: u64) -> anyhow::Result<ScanPage> {
            Ok(ScanPage {
                records: vec![record("x", 1)],
                next_token: Some("x".to_owned()),
            })
        }
    }

    #[tokio::test]
    async fn test_token_that_does_not_advance_is_rejected() {
        let aggregator = Aggregator::new(Arc::new(StuckScan), 1);
        assert!(matches!(
            aggregator.total_count().await,
            Err(DomainError::Unexpected(_))
        ));
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let aggregator = Aggregator::new(Arc::new(StuckScan), 0);
        assert_eq!(aggregator.page_size, 1);
    }
}
