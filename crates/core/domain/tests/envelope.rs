use domain::{Point, RtacState, SourceLocator, TelemetryEnvelope};

#[test]
fn empty_envelope_carries_no_payload() {
    let envelope = TelemetryEnvelope::default();
    assert!(envelope.rtac_state.is_none());
    assert!(envelope.flexstat_state.is_none());
    assert!(envelope.parker_state.is_none());
    assert!(envelope.baseline_forecast.is_none());
    assert!(envelope.demand_response_forecast.is_none());
    assert!(envelope.constraints_forecast.is_none());
    assert!(envelope.rtac_actuation.is_none());
    assert!(envelope.parker_actuation.is_none());
}

#[test]
fn payload_fields_default_to_absent() {
    let state = RtacState::default();
    assert_eq!(state.time, 0);
    assert!(state.ac_frequency.is_none());
    assert!(state.heartbeat.is_none());
}

#[test]
fn locator_accepts_borrowed_and_owned_paths() {
    let a = SourceLocator::new("orangebutton/rtac-1");
    let b = SourceLocator::new(String::from("orangebutton/rtac-1"));
    assert_eq!(a.resource, b.resource);
}

#[test]
fn points_compare_by_value() {
    let point = Point {
        identifier: 42,
        collection: "xbos/orangebutton/rtac-1".to_string(),
        timestamps: vec![1_700_000_000_000_000_000],
        values: vec![60.0],
        tags: [("unit".to_string(), "Hz".to_string())].into(),
    };
    assert_eq!(point.clone(), point);
}
