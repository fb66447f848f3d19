//! 运行约束预测：分步预测序列。
//!
//! 字段为各物理量的上下界，统一无量纲（单位为空串）。
//! 字段名采用本仓库统一的 snake_case 规范。

use domain::{ConstraintsEntry, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, EntryFieldSpec, ForecastSpec};

fn entry(m: &TelemetryEnvelope, index: usize) -> Option<&ConstraintsEntry> {
    m.constraints_forecast.as_ref()?.predictions.get(index)
}

/// 约束预测驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "constraints",
        applies: |m: &TelemetryEnvelope| m.constraints_forecast.is_some(),
        message_time: |m: &TelemetryEnvelope| m.constraints_forecast.as_ref().map(|f| f.time),
        fields: Vec::new(),
        forecast: Some(ForecastSpec {
            entries: |m: &TelemetryEnvelope| {
                m.constraints_forecast
                    .as_ref()
                    .map(|f| f.predictions.len())
                    .unwrap_or(0)
            },
            horizon: |m: &TelemetryEnvelope, i: usize| Some(entry(m, i)?.forecast_time),
            fields: vec![
                EntryFieldSpec {
                    name: "t_rtu_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_rtu_max,
                },
                EntryFieldSpec {
                    name: "t_rtu_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_rtu_min,
                },
                EntryFieldSpec {
                    name: "t_ref_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_ref_max,
                },
                EntryFieldSpec {
                    name: "t_ref_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_ref_min,
                },
                EntryFieldSpec {
                    name: "t_fre_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_fre_max,
                },
                EntryFieldSpec {
                    name: "t_fre_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.t_fre_min,
                },
                EntryFieldSpec {
                    name: "soc_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.soc_max,
                },
                EntryFieldSpec {
                    name: "soc_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.soc_min,
                },
                EntryFieldSpec {
                    name: "u_cool_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_cool_min,
                },
                EntryFieldSpec {
                    name: "u_cool_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_cool_max,
                },
                EntryFieldSpec {
                    name: "u_heat_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_heat_min,
                },
                EntryFieldSpec {
                    name: "u_heat_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_heat_max,
                },
                EntryFieldSpec {
                    name: "u_charge_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_charge_min,
                },
                EntryFieldSpec {
                    name: "u_charge_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_charge_max,
                },
                EntryFieldSpec {
                    name: "u_discharge_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_discharge_max,
                },
                EntryFieldSpec {
                    name: "u_discharge_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_discharge_min,
                },
                EntryFieldSpec {
                    name: "u_ref_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_ref_min,
                },
                EntryFieldSpec {
                    name: "u_ref_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_ref_max,
                },
                EntryFieldSpec {
                    name: "u_fre_cool_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_fre_cool_min,
                },
                EntryFieldSpec {
                    name: "u_fre_cool_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_fre_cool_max,
                },
                EntryFieldSpec {
                    name: "demand",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.demand,
                },
                EntryFieldSpec {
                    name: "u_battery_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_battery_min,
                },
                EntryFieldSpec {
                    name: "u_battery_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.u_battery_max,
                },
                EntryFieldSpec {
                    name: "p_min",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.p_min,
                },
                EntryFieldSpec {
                    name: "p_max",
                    unit: "",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.p_max,
                },
            ],
        }),
    }
}
