//! FlexStat 恒温器：平铺状态快照。

use domain::{FlexstatState, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, FieldSpec};

fn state(m: &TelemetryEnvelope) -> Option<&FlexstatState> {
    m.flexstat_state.as_ref()
}

/// FlexStat 驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "flexstat",
        applies: |m: &TelemetryEnvelope| m.flexstat_state.is_some(),
        message_time: |m: &TelemetryEnvelope| state(m).map(|s| s.time),
        fields: vec![
            FieldSpec {
                name: "space_temp_sensor",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.space_temp_sensor,
            },
            FieldSpec {
                name: "minimum_proportional",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.minimum_proportional,
            },
            FieldSpec {
                name: "active_cooling_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.active_cooling_setpt,
            },
            FieldSpec {
                name: "active_heating_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.active_heating_setpt,
            },
            FieldSpec {
                name: "unocc_cooling_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.unocc_cooling_setpt,
            },
            FieldSpec {
                name: "unocc_heating_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.unocc_heating_setpt,
            },
            FieldSpec {
                name: "occ_min_clg_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occ_min_clg_setpt,
            },
            FieldSpec {
                name: "occ_max_htg_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occ_max_htg_setpt,
            },
            FieldSpec {
                name: "stage_delay",
                unit: "minutes",
                accessor: |m: &TelemetryEnvelope| state(m)?.stage_delay,
            },
            FieldSpec {
                name: "fan_shutoff_delay",
                unit: "seconds",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_shutoff_delay,
            },
            FieldSpec {
                name: "override_timer",
                unit: "hours",
                accessor: |m: &TelemetryEnvelope| state(m)?.override_timer,
            },
            FieldSpec {
                name: "occ_cooling_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occ_cooling_setpt,
            },
            FieldSpec {
                name: "occ_heating_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occ_heating_setpt,
            },
            FieldSpec {
                name: "current_mode_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.current_mode_setpt,
            },
            FieldSpec {
                name: "ui_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.ui_setpt,
            },
            FieldSpec {
                name: "cooling_need",
                unit: "percent",
                accessor: |m: &TelemetryEnvelope| state(m)?.cooling_need,
            },
            FieldSpec {
                name: "heating_need",
                unit: "percent",
                accessor: |m: &TelemetryEnvelope| state(m)?.heating_need,
            },
            FieldSpec {
                name: "unocc_min_clg_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.unocc_min_clg_setpt,
            },
            FieldSpec {
                name: "unocc_max_htg_setpt",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.unocc_max_htg_setpt,
            },
            FieldSpec {
                name: "min_setpt_diff",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.min_setpt_diff,
            },
            FieldSpec {
                name: "min_setpt_limit",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.min_setpt_limit,
            },
            FieldSpec {
                name: "space_temp",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.space_temp,
            },
            FieldSpec {
                name: "cooling_prop",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.cooling_prop,
            },
            FieldSpec {
                name: "heating_prop",
                unit: "F",
                accessor: |m: &TelemetryEnvelope| state(m)?.heating_prop,
            },
            FieldSpec {
                name: "cooling_intg",
                unit: "per hour",
                accessor: |m: &TelemetryEnvelope| state(m)?.cooling_intg,
            },
            FieldSpec {
                name: "heating_intg",
                unit: "per hour",
                accessor: |m: &TelemetryEnvelope| state(m)?.heating_intg,
            },
            FieldSpec {
                name: "app_main_type",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.app_main_type,
            },
            FieldSpec {
                name: "app_sub_type",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.app_sub_type,
            },
            FieldSpec {
                name: "fan_control_type",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_control_type,
            },
            FieldSpec {
                name: "oa_damper_option",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.oa_damper_option,
            },
            FieldSpec {
                name: "system_mode",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.system_mode,
            },
            FieldSpec {
                name: "fan_speed_output",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_speed_output,
            },
            FieldSpec {
                name: "ui_mode",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.ui_mode,
            },
            FieldSpec {
                name: "temperature_reference",
                unit: "",
                accessor: |m: &TelemetryEnvelope| state(m)?.temperature_reference,
            },
            FieldSpec {
                name: "fan",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan,
            },
            FieldSpec {
                name: "cool_1",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.cool_1,
            },
            FieldSpec {
                name: "cool_2",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.cool_2,
            },
            FieldSpec {
                name: "heat_1",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.heat_1,
            },
            FieldSpec {
                name: "bo_05",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.bo_05,
            },
            FieldSpec {
                name: "bo_06",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.bo_06,
            },
            FieldSpec {
                name: "occupancy_mode",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occupancy_mode,
            },
            FieldSpec {
                name: "setpt_override_mode",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.setpt_override_mode,
            },
            FieldSpec {
                name: "economizer_mode",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.economizer_mode,
            },
            FieldSpec {
                name: "low_limit_condition",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.low_limit_condition,
            },
            FieldSpec {
                name: "fan_alarm",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_alarm,
            },
            FieldSpec {
                name: "fan_need",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_need,
            },
            FieldSpec {
                name: "heating_cooling_mode",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.heating_cooling_mode,
            },
            FieldSpec {
                name: "occ_fan_auto_on",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.occ_fan_auto_on,
            },
            FieldSpec {
                name: "unocc_fan_auto_on",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.unocc_fan_auto_on,
            },
            FieldSpec {
                name: "f_c_flag",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.f_c_flag,
            },
            FieldSpec {
                name: "fan_status",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.fan_status,
            },
            FieldSpec {
                name: "ui_system_mode_active",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.ui_system_mode_active,
            },
            FieldSpec {
                name: "opt_start_enable",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.opt_start_enable,
            },
            FieldSpec {
                name: "setback_oat_lockout",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.setback_oat_lockout,
            },
            FieldSpec {
                name: "htg_call_fan",
                unit: "T/F",
                accessor: |m: &TelemetryEnvelope| state(m)?.htg_call_fan,
            },
        ],
        forecast: None,
    }
}
