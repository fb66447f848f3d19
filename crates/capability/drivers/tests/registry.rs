//! 标准注册表的分发场景。

use async_trait::async_trait;
use domain::{
    BaselineEntry, BaselineForecast, FlexstatState, Point, RtacState, SourceLocator,
    TelemetryEnvelope,
};
use tokio::sync::Mutex;
use xbos_drivers::standard_registry;
use xbos_extract::{MemorySink, PointSink, SinkError};

struct FlakySink {
    accepted: Mutex<Vec<Point>>,
    budget: usize,
}

impl FlakySink {
    fn new(budget: usize) -> Self {
        Self {
            accepted: Mutex::new(Vec::new()),
            budget,
        }
    }
}

#[async_trait]
impl PointSink for FlakySink {
    async fn sink(&self, point: Point) -> Result<(), SinkError> {
        let mut accepted = self.accepted.lock().await;
        if accepted.len() >= self.budget {
            return Err(SinkError::Unavailable("forced failure".to_string()));
        }
        accepted.push(point);
        Ok(())
    }
}

#[test]
fn standard_registry_passes_consistency_check() {
    let registry = standard_registry().expect("registry");
    assert_eq!(registry.len(), 8);

    let equipment: Vec<&str> = registry.drivers().iter().map(|d| d.equipment).collect();
    assert!(equipment.contains(&"rtac"));
    assert!(equipment.contains(&"flexstat"));
    assert!(equipment.contains(&"parker"));
    assert!(equipment.contains(&"baseline"));
    assert!(equipment.contains(&"demand_response"));
    assert!(equipment.contains(&"constraints"));
    assert!(equipment.contains(&"rtac_actuation"));
    assert!(equipment.contains(&"parker_actuation"));
}

#[tokio::test]
async fn envelope_with_two_payloads_hits_both_drivers() {
    let registry = standard_registry().expect("registry");
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/site-a");
    let envelope = TelemetryEnvelope {
        rtac_state: Some(RtacState {
            time: 1_700_000_000_000_000_000,
            ac_frequency: Some(60.0),
            ..Default::default()
        }),
        baseline_forecast: Some(BaselineForecast {
            time: 1_700_000_000_000_000_000,
            predictions: vec![
                BaselineEntry {
                    forecast_time: 1_700_003_600_000_000_000,
                    power: Some(120.0),
                },
                BaselineEntry {
                    forecast_time: 1_700_007_200_000_000_000,
                    power: Some(95.0),
                },
            ],
        }),
        ..Default::default()
    };

    let emitted = registry
        .extract(&locator, &envelope, &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 3);

    let points = sink.take().await;
    let names: Vec<String> = points.iter().map(|p| p.tags["name"].clone()).collect();
    assert_eq!(names, vec!["ac_frequency", "power", "power"]);
    for point in &points {
        assert_eq!(point.collection, "xbos/orangebutton/site-a");
    }
}

#[tokio::test]
async fn empty_envelope_yields_no_points() {
    let registry = standard_registry().expect("registry");
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/site-a");
    let emitted = registry
        .extract(&locator, &TelemetryEnvelope::default(), &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 0);
    assert!(sink.is_empty().await);
}

#[tokio::test]
async fn first_sink_error_stops_the_dispatch() {
    let registry = standard_registry().expect("registry");
    let sink = FlakySink::new(1);
    let locator = SourceLocator::new("orangebutton/site-a");
    let envelope = TelemetryEnvelope {
        rtac_state: Some(RtacState {
            time: 1_700_000_000_000_000_000,
            ac_frequency: Some(60.0),
            pge_voltage: Some(480.0),
            ..Default::default()
        }),
        flexstat_state: Some(FlexstatState {
            time: 1_700_000_000_000_000_000,
            space_temp: Some(71.5),
            ..Default::default()
        }),
        ..Default::default()
    };

    let err = registry
        .extract(&locator, &envelope, &sink)
        .await
        .expect_err("sink failure");
    assert!(err.to_string().contains("forced failure"));

    // 首个错误上抛后不再尝试后续驱动，已交付的点保持原样
    let accepted = sink.accepted.lock().await;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].tags["name"], "ac_frequency");
}

#[tokio::test]
async fn same_field_name_on_different_resources_gets_distinct_identifiers() {
    let registry = standard_registry().expect("registry");
    let envelope = TelemetryEnvelope {
        rtac_state: Some(RtacState {
            time: 1_700_000_000_000_000_000,
            ac_frequency: Some(60.0),
            ..Default::default()
        }),
        ..Default::default()
    };

    let sink_a = MemorySink::new();
    registry
        .extract(&SourceLocator::new("orangebutton/rtac-1"), &envelope, &sink_a)
        .await
        .expect("extract");
    let sink_b = MemorySink::new();
    registry
        .extract(&SourceLocator::new("orangebutton/rtac-2"), &envelope, &sink_b)
        .await
        .expect("extract");

    let a = sink_a.take().await;
    let b = sink_b.take().await;
    assert_eq!(a[0].tags["name"], b[0].tags["name"]);
    assert_ne!(a[0].identifier, b[0].identifier);
}
