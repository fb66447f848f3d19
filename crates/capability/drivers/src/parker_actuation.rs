//! Parker 执行计划：混合模式驱动（控制标志 + 温度设定序列）。

use domain::{ParkerSetpoint, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, EntryFieldSpec, FieldSpec, ForecastSpec};

fn entry(m: &TelemetryEnvelope, index: usize) -> Option<&ParkerSetpoint> {
    m.parker_actuation.as_ref()?.setpoints.get(index)
}

/// Parker 执行计划驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "parker_actuation",
        applies: |m: &TelemetryEnvelope| m.parker_actuation.is_some(),
        message_time: |m: &TelemetryEnvelope| m.parker_actuation.as_ref().map(|a| a.time),
        fields: vec![FieldSpec {
            name: "control_flag",
            unit: "T/F",
            accessor: |m: &TelemetryEnvelope| m.parker_actuation.as_ref()?.control_flag,
        }],
        forecast: Some(ForecastSpec {
            entries: |m: &TelemetryEnvelope| {
                m.parker_actuation
                    .as_ref()
                    .map(|a| a.setpoints.len())
                    .unwrap_or(0)
            },
            horizon: |m: &TelemetryEnvelope, i: usize| Some(entry(m, i)?.change_time),
            fields: vec![
                EntryFieldSpec {
                    name: "change_time",
                    unit: "nanoseconds",
                    accessor: |m: &TelemetryEnvelope, i: usize| {
                        Some(entry(m, i)?.change_time as f64)
                    },
                },
                EntryFieldSpec {
                    name: "setpoint",
                    unit: "F",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.setpoint,
                },
                EntryFieldSpec {
                    name: "differential",
                    unit: "F",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.differential,
                },
            ],
        }),
    }
}
