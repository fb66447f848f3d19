//! Parker 制冷控制器：平铺状态快照。
//!
//! 字母数字命名的字段为控制器参数寄存器，沿用设备文档的原始编号。

use domain::{ParkerState, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, FieldSpec};

fn state(m: &TelemetryEnvelope) -> Option<&ParkerState> {
    m.parker_state.as_ref()
}

/// Parker 驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "parker",
        applies: |m: &TelemetryEnvelope| m.parker_state.is_some(),
        message_time: |m: &TelemetryEnvelope| state(m).map(|s| s.time),
        fields: vec![
            FieldSpec {
                name: "cabinet_temperature",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.cabinet_temperature,
            },
            FieldSpec {
                name: "evaporator_temperature",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.evaporator_temperature,
            },
            FieldSpec {
                name: "auxiliary_temperature",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.auxiliary_temperature,
            },
            FieldSpec {
                name: "active_setpoint",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.active_setpoint,
            },
            FieldSpec {
                name: "setpoint",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.setpoint,
            },
            FieldSpec {
                name: "compressor_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.compressor_status,
            },
            FieldSpec {
                name: "compressor_working_hours",
                unit: "hours",
                accessor: |m: &TelemetryEnvelope| state(m)?.compressor_working_hours,
            },
            FieldSpec {
                name: "clear_compressor_working_hours",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.clear_compressor_working_hours,
            },
            FieldSpec {
                name: "compressor_delay",
                unit: "seconds",
                accessor: |m: &TelemetryEnvelope| state(m)?.compressor_delay,
            },
            FieldSpec {
                name: "second_compressor_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.second_compressor_state,
            },
            FieldSpec {
                name: "time_until_defrost",
                unit: "seconds",
                accessor: |m: &TelemetryEnvelope| state(m)?.time_until_defrost,
            },
            FieldSpec {
                name: "current_defrost_counter",
                unit: "seconds",
                accessor: |m: &TelemetryEnvelope| state(m)?.current_defrost_counter,
            },
            FieldSpec {
                name: "next_defrost_counter",
                unit: "seconds",
                accessor: |m: &TelemetryEnvelope| state(m)?.next_defrost_counter,
            },
            FieldSpec {
                name: "defrost_control",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.defrost_control,
            },
            FieldSpec {
                name: "output_defrost_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_defrost_status,
            },
            FieldSpec {
                name: "output_defrost_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_defrost_state,
            },
            FieldSpec {
                name: "fans_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.fans_status,
            },
            FieldSpec {
                name: "light_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.light_status,
            },
            FieldSpec {
                name: "aux_output_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.aux_output_status,
            },
            FieldSpec {
                name: "output_k4_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_k4_status,
            },
            FieldSpec {
                name: "output_lux_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_lux_state,
            },
            FieldSpec {
                name: "output_aux_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_aux_state,
            },
            FieldSpec {
                name: "output_alarm_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.output_alarm_state,
            },
            FieldSpec {
                name: "on_standby_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.on_standby_status,
            },
            FieldSpec {
                name: "door_switch_input_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.door_switch_input_status,
            },
            FieldSpec {
                name: "multipurpose_input_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.multipurpose_input_status,
            },
            FieldSpec {
                name: "buzzer_control",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.buzzer_control,
            },
            FieldSpec {
                name: "start_resistors",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.start_resistors,
            },
            FieldSpec {
                name: "resistors_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.resistors_state,
            },
            FieldSpec {
                name: "resistors_activated_by_aux_key_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.resistors_activated_by_aux_key_status,
            },
            FieldSpec {
                name: "evaporator_valve_state",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.evaporator_valve_state,
            },
            FieldSpec {
                name: "energy_saving_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.energy_saving_status,
            },
            FieldSpec {
                name: "service_request_status",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.service_request_status,
            },
            FieldSpec {
                name: "num_alarms_in_history",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.num_alarms_in_history,
            },
            FieldSpec {
                name: "door_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.door_alarm,
            },
            FieldSpec {
                name: "probe1_failure_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.probe1_failure_alarm,
            },
            FieldSpec {
                name: "probe2_failure_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.probe2_failure_alarm,
            },
            FieldSpec {
                name: "probe3_failure_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.probe3_failure_alarm,
            },
            FieldSpec {
                name: "minimum_temperature_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.minimum_temperature_alarm,
            },
            FieldSpec {
                name: "maximum_temperature_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.maximum_temperature_alarm,
            },
            FieldSpec {
                name: "condensor_temperature_failure_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.condensor_temperature_failure_alarm,
            },
            FieldSpec {
                name: "condensor_pre_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.condensor_pre_alarm,
            },
            FieldSpec {
                name: "multipurpose_input_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.multipurpose_input_alarm,
            },
            FieldSpec {
                name: "power_failure_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.power_failure_alarm,
            },
            FieldSpec {
                name: "rtc_error_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.rtc_error_alarm,
            },
            FieldSpec {
                name: "compressor_blocked_alarm",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.compressor_blocked_alarm,
            },
            FieldSpec {
                name: "energy_saving_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.energy_saving_regulator_flag,
            },
            FieldSpec {
                name: "energy_saving_real_time_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.energy_saving_real_time_regulator_flag,
            },
            FieldSpec {
                name: "service_request_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.service_request_regulator_flag,
            },
            FieldSpec {
                name: "on_standby_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.on_standby_regulator_flag,
            },
            FieldSpec {
                name: "new_alarm_to_read_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.new_alarm_to_read_regulator_flag,
            },
            FieldSpec {
                name: "defrost_status_regulator_flag",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.defrost_status_regulator_flag,
            },
            FieldSpec {
                name: "p2",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.p2,
            },
            FieldSpec {
                name: "p3",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.p3,
            },
            FieldSpec {
                name: "r0",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.r0,
            },
            FieldSpec {
                name: "r1",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.r1,
            },
            FieldSpec {
                name: "r2",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.r2,
            },
            FieldSpec {
                name: "r3",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.r3,
            },
            FieldSpec {
                name: "r4",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.r4,
            },
            FieldSpec {
                name: "c0",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.c0,
            },
            FieldSpec {
                name: "c1",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.c1,
            },
            FieldSpec {
                name: "c2",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c2,
            },
            FieldSpec {
                name: "c3",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c3,
            },
            FieldSpec {
                name: "c4",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c4,
            },
            FieldSpec {
                name: "c5",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c5,
            },
            FieldSpec {
                name: "c6",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c6,
            },
            FieldSpec {
                name: "c7",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c7,
            },
            FieldSpec {
                name: "c8",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c8,
            },
            FieldSpec {
                name: "c9",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.c9,
            },
            FieldSpec {
                name: "d0",
                unit: "hours",
                accessor: |m: &TelemetryEnvelope| state(m)?.d0,
            },
            FieldSpec {
                name: "d1",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.d1,
            },
            FieldSpec {
                name: "d2",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.d2,
            },
            FieldSpec {
                name: "d3",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.d3,
            },
            FieldSpec {
                name: "d4",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.d4,
            },
            FieldSpec {
                name: "d5",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.d5,
            },
            FieldSpec {
                name: "d7",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.d7,
            },
            FieldSpec {
                name: "d8",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.d8,
            },
            FieldSpec {
                name: "d9",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.d9,
            },
            FieldSpec {
                name: "da",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.da,
            },
            FieldSpec {
                name: "a0",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.a0,
            },
            FieldSpec {
                name: "a1",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.a1,
            },
            FieldSpec {
                name: "a2",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.a2,
            },
            FieldSpec {
                name: "a3",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.a3,
            },
            FieldSpec {
                name: "a4",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.a4,
            },
            FieldSpec {
                name: "a5",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.a5,
            },
            FieldSpec {
                name: "a6",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.a6,
            },
            FieldSpec {
                name: "a7",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.a7,
            },
            FieldSpec {
                name: "a8",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.a8,
            },
            FieldSpec {
                name: "a9",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.a9,
            },
            FieldSpec {
                name: "f0",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.f0,
            },
            FieldSpec {
                name: "f1",
                unit: "C",
                accessor: |m: &TelemetryEnvelope| state(m)?.f1,
            },
            FieldSpec {
                name: "f2",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.f2,
            },
            FieldSpec {
                name: "f3",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.f3,
            },
        ],
        forecast: None,
    }
}
