//! Calculate over HTTP, then check the counter saw exactly one event.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator::CalculatorModule;
use calculator::config::CalculatorConfig;
use calculator_sdk::Operation;
use chrono::Utc;
use counter_sdk::{CalculationEvent, CalculationRecord, CounterClient, CounterError};
use tower::ServiceExt as _;

#[derive(Default)]
struct RecordingCounter {
    events: Mutex<Vec<CalculationEvent>>,
}

#[async_trait]
impl CounterClient for RecordingCounter {
    async fn record(&self, event: CalculationEvent) -> Result<CalculationRecord, CounterError> {
        self.events.lock().unwrap().push(event);
        Ok(CalculationRecord {
            calculation_id: "5 add 7".to_owned(),
            expression: "5 + 7".to_owned(),
            representative_result: 12.0,
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

async fn calculate(module: &CalculatorModule, body: &'static str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/calculator/v1/calculate")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = module.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn add_returns_result_and_notifies_counter_once() {
    let counter = Arc::new(RecordingCounter::default());
    let module = CalculatorModule::new(&CalculatorConfig::default(), counter.clone());

    let (status, json) = calculate(&module, r#"{"operand1":5,"operand2":7,"operation":"add"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], 12.0);

    assert!(module.shutdown(Duration::from_secs(5)).await);
    let events = counter.events.lock().unwrap().clone();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].operation, Operation::Add);
    assert_eq!(events[0].operand1, 5.0);
    assert_eq!(events[0].operand2, Some(7.0));
}

#[tokio::test]
async fn disabled_notifications_send_nothing() {
    let counter = Arc::new(RecordingCounter::default());
    let cfg = CalculatorConfig {
        notifications_enabled: false,
    };
    let module = CalculatorModule::new(&cfg, counter.clone());

    let (status, _) = calculate(&module, r#"{"operand1":9,"operation":"sqrt"}"#).await;
    assert_eq!(status, StatusCode::OK);

    assert!(module.shutdown(Duration::from_secs(1)).await);
    assert!(counter.events.lock().unwrap().is_empty());
}
