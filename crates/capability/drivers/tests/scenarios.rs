//! 平铺驱动的端到端抽取场景。

use async_trait::async_trait;
use domain::{FlexstatState, ParkerState, Point, RtacState, SourceLocator, TelemetryEnvelope};
use tokio::sync::Mutex;
use xbos_drivers::{flexstat, parker, rtac};
use xbos_extract::{COLLECTION_PREFIX, MemorySink, PointSink, SinkError, run_driver};

/// 写满额度后开始拒绝的下游。
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

fn rtac_envelope() -> TelemetryEnvelope {
    TelemetryEnvelope {
        rtac_state: Some(RtacState {
            time: 1_700_000_000_000_000_000,
            ac_frequency: Some(59.98),
            pge_voltage: Some(481.2),
            bess_availability: Some(1.0),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn three_present_fields_yield_three_points() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let emitted = run_driver(&rtac::descriptor(), &locator, &rtac_envelope(), &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 3);

    let points = sink.take().await;
    assert_eq!(points.len(), 3);
    for point in &points {
        assert_eq!(
            point.collection,
            format!("{COLLECTION_PREFIX}/orangebutton/rtac-1")
        );
        assert_eq!(point.timestamps.len(), point.values.len());
        assert_eq!(point.timestamps, vec![1_700_000_000_000_000_000]);
        assert!(point.tags.contains_key("unit"));
        assert!(point.tags.contains_key("name"));
        assert_eq!(point.tags.len(), 2);
    }
}

#[tokio::test]
async fn absent_field_contributes_no_point() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let mut envelope = rtac_envelope();
    envelope.rtac_state.as_mut().unwrap().pge_voltage = None;

    let emitted = run_driver(&rtac::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 2);
    let names: Vec<String> = sink
        .take()
        .await
        .into_iter()
        .map(|p| p.tags["name"].clone())
        .collect();
    assert_eq!(names, vec!["ac_frequency", "bess_availability"]);
}

#[tokio::test]
async fn predicate_miss_never_touches_the_sink() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let emitted = run_driver(
        &rtac::descriptor(),
        &locator,
        &TelemetryEnvelope::default(),
        &sink,
    )
    .await
    .expect("extract");
    assert_eq!(emitted, 0);
    assert!(sink.is_empty().await);
}

#[tokio::test]
async fn sink_failure_stops_the_flat_walk() {
    let sink = FlakySink::new(1);
    let locator = SourceLocator::new("orangebutton/rtac-1");
    let err = run_driver(&rtac::descriptor(), &locator, &rtac_envelope(), &sink)
        .await
        .expect_err("sink failure");
    assert!(err.to_string().contains("forced failure"));
    assert_eq!(sink.accepted.lock().await.len(), 1);
}

#[test]
fn snapshot_tables_carry_the_full_register_census() {
    assert_eq!(rtac::descriptor().field_names().len(), 28);
    assert_eq!(flexstat::descriptor().field_names().len(), 55);
    assert_eq!(parker::descriptor().field_names().len(), 93);
}

#[tokio::test]
async fn flexstat_binary_outputs_and_setback_fields_extract() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/flexstat-1");
    let envelope = TelemetryEnvelope {
        flexstat_state: Some(FlexstatState {
            time: 1_700_000_000_000_000_000,
            unocc_min_clg_setpt: Some(78.0),
            cool_1: Some(1.0),
            htg_call_fan: Some(0.0),
            ..Default::default()
        }),
        ..Default::default()
    };

    let emitted = run_driver(&flexstat::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 3);
    let points = sink.take().await;
    let names: Vec<String> = points.iter().map(|p| p.tags["name"].clone()).collect();
    assert_eq!(names, vec!["unocc_min_clg_setpt", "cool_1", "htg_call_fan"]);
    assert_eq!(points[0].tags["unit"], "F");
    assert_eq!(points[1].tags["unit"], "T/F");
}

#[tokio::test]
async fn parker_registers_and_condensor_alarms_extract() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/parker-1");
    let envelope = TelemetryEnvelope {
        parker_state: Some(ParkerState {
            time: 1_700_000_000_000_000_000,
            condensor_pre_alarm: Some(0.0),
            energy_saving_regulator_flag: Some(1.0),
            a4: Some(4.5),
            ..Default::default()
        }),
        ..Default::default()
    };

    let emitted = run_driver(&parker::descriptor(), &locator, &envelope, &sink)
        .await
        .expect("extract");
    assert_eq!(emitted, 3);
    let points = sink.take().await;
    let names: Vec<String> = points.iter().map(|p| p.tags["name"].clone()).collect();
    assert_eq!(
        names,
        vec!["condensor_pre_alarm", "energy_saving_regulator_flag", "a4"]
    );
    assert_eq!(points[2].tags["unit"], "C");
}

#[tokio::test]
async fn identifiers_are_stable_across_messages() {
    let sink = MemorySink::new();
    let locator = SourceLocator::new("orangebutton/rtac-1");
    run_driver(&rtac::descriptor(), &locator, &rtac_envelope(), &sink)
        .await
        .expect("extract");
    let first = sink.take().await;

    let mut later = rtac_envelope();
    later.rtac_state.as_mut().unwrap().time += 60_000_000_000;
    later.rtac_state.as_mut().unwrap().ac_frequency = Some(60.01);
    run_driver(&rtac::descriptor(), &locator, &later, &sink)
        .await
        .expect("extract");
    let second = sink.take().await;

    // 标识符只依赖（资源路径, 字段名），与消息内容和时间无关
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.tags["name"], b.tags["name"]);
        assert_eq!(a.identifier, b.identifier);
    }
}
