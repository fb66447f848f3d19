//! 分步预测与混合模式驱动的抽取场景。

use async_trait::async_trait;
use domain::{
    DemandResponseEntry, DemandResponseForecast, Point, RtacActuation, RtacSetpoint,
    SourceLocator, TelemetryEnvelope,
};
use tokio::sync::Mutex;
use xbos_drivers::{demand_response, rtac_actuation};
use xbos_extract::{MemorySink, PointSink, SinkError, run_driver};

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

fn dr_envelope() -> TelemetryEnvelope {
    TelemetryEnvelope {
        demand_response_forecast: Some(DemandResponseForecast {
            time: 1_700_000_000_000_000_000,
            predictions: vec![
                DemandResponseEntry {
                    forecast_time: 1_700_003_600_000_000_000,
                    price_energy: Some(0.18),
                    price_demand: Some(12.5),
                    ..Default::default()
                },
                DemandResponseEntry {
                    forecast_time: 1_700_007_200_000_000_000,
                    price_energy: Some(0.22),
                    ..Default::default()
                },
                DemandResponseEntry {
                    forecast_time: 1_700_010_800_000_000_000,
                    power_limit: Some(450.0),
                    ..Default::default()
                },
            ],
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn steps_are_monotonic_and_horizons_match_entries() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/dr");
    let emitted = run_driver(&demand_response::descriptor(), &locator, &dr_envelope(), &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 4);

    let points = sink.take().await;
    let steps: Vec<String> = points
        .iter()
        .map(|p| p.tags["prediction_step"].clone())
        .collect();
    assert_eq!(steps, vec!["1", "1", "2", "3"]);

    assert_eq!(points[0].tags["prediction_time"], "1700003600000000000");
    assert_eq!(points[2].tags["prediction_time"], "1700007200000000000");
    assert_eq!(points[3].tags["prediction_time"], "1700010800000000000");

    // 时间戳一律取信封消息时间
    for point in &points {
        assert_eq!(point.timestamps, vec![1_700_000_000_000_000_000]);
        assert_eq!(point.timestamps.len(), point.values.len());
    }
}

#[tokio::test]
async fn entry_without_present_fields_still_consumes_a_step() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/dr");
    let mut envelope = dr_envelope();
    envelope
        .demand_response_forecast
        .as_mut()
        .unwrap()
        .predictions[1] = DemandResponseEntry {
        forecast_time: 1_700_007_200_000_000_000,
        ..Default::default()
    };

    run_driver(&demand_response::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    let steps: Vec<String> = sink
        .take()
        .await
        .iter()
        .map(|p| p.tags["prediction_step"].clone())
        .collect();
    assert_eq!(steps, vec!["1", "1", "3"]);
}

#[tokio::test]
async fn sink_failure_mid_entry_returns_immediately() {
    // 条目 1 的第二个字段触发下游失败：只有第一个点已交付
    let sink = FlakySink::new(1);
    let locator = SourceLocator::new("orangebutton/dr");
    let err = run_driver(&demand_response::descriptor(), &locator, &dr_envelope(), &sink)
        .await
        .expect_err("sink failure");
    assert!(err.to_string().contains("forced failure"));

    let accepted = sink.accepted.lock().await;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].tags["name"], "price_energy");
    assert_eq!(accepted[0].tags["prediction_step"], "1");
}

#[tokio::test]
async fn combined_mode_runs_flat_flag_then_schedule() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let envelope = TelemetryEnvelope {
        rtac_actuation: Some(RtacActuation {
            time: 1_700_000_000_000_000_000,
            control_flag: Some(1.0),
            setpoints: vec![
                RtacSetpoint {
                    change_time: 1_700_003_600_000_000_000,
                    real_power_setpoint: Some(250_000.0),
                    ..Default::default()
                },
                RtacSetpoint {
                    change_time: 1_700_007_200_000_000_000,
                    real_power_setpoint: Some(100_000.0),
                    reactive_power_setpoint: Some(20_000.0),
                    ..Default::default()
                },
            ],
        }),
        ..Default::default()
    };

    let emitted = run_driver(&rtac_actuation::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    // control_flag + (change_time, real_power) + (change_time, real_power, reactive_power)
    assert_eq!(emitted, 6);

    let points = sink.take().await;
    // 平铺的控制标志先于设定序列，且不带预测标签
    assert_eq!(points[0].tags["name"], "control_flag");
    assert_eq!(points[0].tags["unit"], "T/F");
    assert!(!points[0].tags.contains_key("prediction_time"));
    assert!(!points[0].tags.contains_key("prediction_step"));

    // change_time 既是条目预测时间，也作为字段本身出点
    assert_eq!(points[1].tags["name"], "change_time");
    assert_eq!(points[1].values, vec![1_700_003_600_000_000_000i64 as f64]);
    assert_eq!(points[1].tags["prediction_time"], "1700003600000000000");
    assert_eq!(points[1].tags["prediction_step"], "1");

    let entry2: Vec<&Point> = points
        .iter()
        .filter(|p| p.tags.get("prediction_step").map(String::as_str) == Some("2"))
        .collect();
    assert_eq!(entry2.len(), 3);
    for point in entry2 {
        assert_eq!(point.tags["prediction_time"], "1700007200000000000");
        assert_eq!(point.timestamps, vec![1_700_000_000_000_000_000]);
    }
}

#[tokio::test]
async fn combined_mode_without_flag_still_walks_schedule() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let envelope = TelemetryEnvelope {
        rtac_actuation: Some(RtacActuation {
            time: 1_700_000_000_000_000_000,
            control_flag: None,
            setpoints: vec![RtacSetpoint {
                change_time: 1_700_003_600_000_000_000,
                active_power_output_limit: Some(500_000.0),
                ..Default::default()
            }],
        }),
        ..Default::default()
    };

    let emitted = run_driver(&rtac_actuation::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 2);
    let names: Vec<String> = sink
        .take()
        .await
        .into_iter()
        .map(|p| p.tags["name"].clone())
        .collect();
    assert_eq!(names, vec!["change_time", "active_power_output_limit"]);
}
