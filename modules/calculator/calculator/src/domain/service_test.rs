#[cfg(test)]
mod tests {
    use super::super::*;
    use async_trait::async_trait;
    use calculator_sdk::{CalculationError, Operation};
    use chrono::Utc;
    use counter_sdk::{CalculationEvent, CalculationRecord, CounterClient, CounterError};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // Records every event it receives; optionally fails each call.
    #[derive(Default)]
    struct MockCounter {
        events: Mutex<Vec<CalculationEvent>>,
        fail: bool,
    }

    impl MockCounter {
        fn events(&self) -> Vec<CalculationEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CounterClient for MockCounter {
        async fn record(&self, event: CalculationEvent) -> Result<CalculationRecord, CounterError> {
            self.events.lock().unwrap().push(event);
            if self.fail {
                return Err(CounterError::Storage);
            }
            Ok(CalculationRecord {
                calculation_id: "mock".to_owned(),
                expression: "mock".to_owned(),
                representative_result: event.result.unwrap_or_default(),
                count: 1,
                last_updated_at: Utc::now(),
            })
        }

        async fn get(&self, calculation_id: &str) -> Result<CalculationRecord, CounterError> {
            Err(CounterError::NotFound(calculation_id.to_owned()))
        }

        async fn total_count(&self) -> Result<u64, CounterError> {
            Ok(0)
        }
    }

    fn service_with(counter: &Arc<MockCounter>) -> (service::Service, notifier::CountNotifier) {
        let client: Arc<dyn CounterClient> = counter.clone();
        let notifier = notifier::CountNotifier::new(client);
        (service::Service::new(Some(notifier.clone())), notifier)
    }

    async fn drain(notifier: &notifier::CountNotifier) {
        assert!(notifier.shutdown(Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn test_add_returns_sum_and_notifies_once() {
        let counter = Arc::new(MockCounter::default());
        let (service, notifier) = service_with(&counter);

        let result = service.compute("add", 5.0, Some(7.0)).unwrap();
        assert!((result - 12.0).abs() < f64::EPSILON);

        drain(&notifier).await;
        let events = counter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operation, Operation::Add);
        assert_eq!(events[0].operand2, Some(7.0));
        assert_eq!(events[0].result, Some(12.0));
    }

    #[tokio::test]
    async fn test_unary_notification_omits_second_operand() {
        let counter = Arc::new(MockCounter::default());
        let (service, notifier) = service_with(&counter);

        let result = service.compute("sqrt", 9.0, Some(100.0)).unwrap();
        assert!((result - 3.0).abs() < f64::EPSILON);

        drain(&notifier).await;
        let events = counter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operand2, None);
    }

    #[tokio::test]
    async fn test_failed_calculation_does_not_notify() {
        let counter = Arc::new(MockCounter::default());
        let (service, notifier) = service_with(&counter);

        let err = service.compute("divide", 1.0, Some(0.0)).unwrap_err();
        assert_eq!(
            err,
            error::DomainError::Calculation(CalculationError::DivisionByZero)
        );
        let err = service.compute("sqrt", -1.0, None).unwrap_err();
        assert_eq!(err.code(), "CALC_NEGATIVE_SQRT");

        drain(&notifier).await;
        assert!(counter.events().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_operation_is_rejected() {
        let counter = Arc::new(MockCounter::default());
        let (service, notifier) = service_with(&counter);

        let err = service.compute("modulo", 1.0, Some(2.0)).unwrap_err();
        assert_eq!(
            err,
            error::DomainError::Calculation(CalculationError::UnknownOperation("modulo".to_owned()))
        );

        drain(&notifier).await;
        assert!(counter.events().is_empty());
    }

    #[tokio::test]
    async fn test_missing_second_operand_is_rejected() {
        let service = service::Service::new(None);
        let err = service.compute("power", 2.0, None).unwrap_err();
        assert_eq!(err.code(), "CALC_MISSING_OPERAND");
    }

    #[tokio::test]
    async fn test_non_finite_operand_is_a_validation_error() {
        let service = service::Service::new(None);
        let err = service.compute("add", f64::NAN, Some(1.0)).unwrap_err();
        assert!(matches!(
            err,
            error::DomainError::Validation {
                field: "operand1",
                ..
            }
        ));
        let err = service.compute("add", 1.0, Some(f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            error::DomainError::Validation {
                field: "operand2",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unary_operation_ignores_non_finite_second_operand() {
        let counter = Arc::new(MockCounter::default());
        let (service, notifier) = service_with(&counter);

        let result = service.compute("sqrt", 9.0, Some(f64::NAN)).unwrap();
        assert!((result - 3.0).abs() < f64::EPSILON);

        drain(&notifier).await;
        let events = counter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operand2, None);
    }

    #[tokio::test]
    async fn test_counter_failure_does_not_affect_result() {
        let counter = Arc::new(MockCounter {
            fail: true,
            ..MockCounter::default()
        });
        let (service, notifier) = service_with(&counter);

        let result = service.compute("multiply", 3.0, Some(4.0)).unwrap();
        assert!((result - 12.0).abs() < f64::EPSILON);

        drain(&notifier).await;
        // One attempt, no retry.
        assert_eq!(counter.events().len(), 1);
        assert_eq!(notifier.pending(), 0);
    }

    #[tokio::test]
    async fn test_disabled_notifications_still_compute() {
        let service = service::Service::new(None);
        let result = service.compute("celsius_to_fahrenheit", 100.0, None).unwrap();
        assert!((result - 212.0).abs() < 1e-9);
    }
}
