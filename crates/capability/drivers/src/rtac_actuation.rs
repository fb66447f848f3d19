//! RTAC 执行计划：混合模式驱动。
//!
//! 平铺的控制标志 + 分步的功率设定序列在一次抽取内完成；
//! `change_time` 既是条目的预测时间，也作为字段本身出点。

use domain::{RtacSetpoint, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, EntryFieldSpec, FieldSpec, ForecastSpec};

fn entry(m: &TelemetryEnvelope, index: usize) -> Option<&RtacSetpoint> {
    m.rtac_actuation.as_ref()?.setpoints.get(index)
}

/// RTAC 执行计划驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "rtac_actuation",
        applies: |m: &TelemetryEnvelope| m.rtac_actuation.is_some(),
        message_time: |m: &TelemetryEnvelope| m.rtac_actuation.as_ref().map(|a| a.time),
        fields: vec![FieldSpec {
            name: "control_flag",
            unit: "T/F",
            accessor: |m: &TelemetryEnvelope| m.rtac_actuation.as_ref()?.control_flag,
        }],
        forecast: Some(ForecastSpec {
            entries: |m: &TelemetryEnvelope| {
                m.rtac_actuation
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
                    name: "real_power_setpoint",
                    unit: "W",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.real_power_setpoint,
                },
                EntryFieldSpec {
                    name: "reactive_power_setpoint",
                    unit: "W",
                    accessor: |m: &TelemetryEnvelope, i: usize| {
                        entry(m, i)?.reactive_power_setpoint
                    },
                },
                EntryFieldSpec {
                    name: "active_power_output_limit",
                    unit: "W",
                    accessor: |m: &TelemetryEnvelope, i: usize| {
                        entry(m, i)?.active_power_output_limit
                    },
                },
            ],
        }),
    }
}
