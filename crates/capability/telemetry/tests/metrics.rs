use xbos_telemetry::{metrics, record_envelope, record_point_emitted};

#[test]
fn counters_are_monotonic() {
    let before = metrics().snapshot();
    record_envelope();
    record_point_emitted();
    record_point_emitted();
    let after = metrics().snapshot();
    assert!(after.envelopes >= before.envelopes + 1);
    assert!(after.points_emitted >= before.points_emitted + 2);
}
