//! RTAC 微电网控制器：平铺状态快照。

use domain::{RtacState, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, FieldSpec};

fn state(m: &TelemetryEnvelope) -> Option<&RtacState> {
    m.rtac_state.as_ref()
}

/// RTAC 驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "rtac",
        applies: |m: &TelemetryEnvelope| m.rtac_state.is_some(),
        message_time: |m: &TelemetryEnvelope| state(m).map(|s| s.time),
        fields: vec![
            FieldSpec {
                name: "heartbeat",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.heartbeat,
            },
            FieldSpec {
                name: "real_power_setpoint",
                unit: "W",
                accessor: |m: &TelemetryEnvelope| state(m)?.real_power_setpoint,
            },
            FieldSpec {
                name: "reactive_power_setpoint",
                unit: "VAR",
                accessor: |m: &TelemetryEnvelope| state(m)?.reactive_power_setpoint,
            },
            FieldSpec {
                name: "target_real_power",
                unit: "W",
                accessor: |m: &TelemetryEnvelope| state(m)?.target_real_power,
            },
            FieldSpec {
                name: "target_reactive_power",
                unit: "VAR",
                accessor: |m: &TelemetryEnvelope| state(m)?.target_reactive_power,
            },
            FieldSpec {
                name: "battery_total_capacity",
                unit: "Wh",
                accessor: |m: &TelemetryEnvelope| state(m)?.battery_total_capacity,
            },
            FieldSpec {
                name: "battery_current_stored_energy",
                unit: "Wh",
                accessor: |m: &TelemetryEnvelope| state(m)?.battery_current_stored_energy,
            },
            FieldSpec {
                name: "total_actual_real_power",
                unit: "W",
                accessor: |m: &TelemetryEnvelope| state(m)?.total_actual_real_power,
            },
            FieldSpec {
                name: "total_actual_reactive_power",
                unit: "VAR",
                accessor: |m: &TelemetryEnvelope| state(m)?.total_actual_reactive_power,
            },
            FieldSpec {
                name: "total_actual_apparent_power",
                unit: "VA",
                accessor: |m: &TelemetryEnvelope| state(m)?.total_actual_apparent_power,
            },
            FieldSpec {
                name: "active_power_output_limit",
                unit: "W",
                accessor: |m: &TelemetryEnvelope| state(m)?.active_power_output_limit,
            },
            FieldSpec {
                name: "current_power_production",
                unit: "W",
                accessor: |m: &TelemetryEnvelope| state(m)?.current_power_production,
            },
            FieldSpec {
                name: "ac_current_phase_a",
                unit: "A",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_current_phase_a,
            },
            FieldSpec {
                name: "ac_current_phase_b",
                unit: "A",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_current_phase_b,
            },
            FieldSpec {
                name: "ac_current_phase_c",
                unit: "A",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_current_phase_c,
            },
            FieldSpec {
                name: "ac_voltage_ab",
                unit: "V",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_voltage_ab,
            },
            FieldSpec {
                name: "ac_voltage_bc",
                unit: "V",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_voltage_bc,
            },
            FieldSpec {
                name: "ac_voltage_ca",
                unit: "V",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_voltage_ca,
            },
            FieldSpec {
                name: "ac_frequency",
                unit: "Hz",
                accessor: |m: &TelemetryEnvelope| state(m)?.ac_frequency,
            },
            FieldSpec {
                name: "islanding_state",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.islanding_state,
            },
            FieldSpec {
                name: "island_type",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.island_type,
            },
            FieldSpec {
                name: "bess_availability",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.bess_availability,
            },
            FieldSpec {
                name: "fault_condition",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.fault_condition,
            },
            FieldSpec {
                name: "pge_state",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.pge_state,
            },
            FieldSpec {
                name: "pcc_breaker_state",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.pcc_breaker_state,
            },
            FieldSpec {
                name: "pge_voltage",
                unit: "V",
                accessor: |m: &TelemetryEnvelope| state(m)?.pge_voltage,
            },
            FieldSpec {
                name: "pge_frequency",
                unit: "Hz",
                accessor: |m: &TelemetryEnvelope| state(m)?.pge_frequency,
            },
            FieldSpec {
                name: "bess_pv_breaker_state",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.bess_pv_breaker_state,
            },
        ],
        forecast: None,
    }
}
