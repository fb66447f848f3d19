//! 需求响应信号预测：分步预测序列。

use domain::{DemandResponseEntry, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, EntryFieldSpec, ForecastSpec};

fn entry(m: &TelemetryEnvelope, index: usize) -> Option<&DemandResponseEntry> {
    m.demand_response_forecast.as_ref()?.predictions.get(index)
}

/// 需求响应预测驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "demand_response",
        applies: |m: &TelemetryEnvelope| m.demand_response_forecast.is_some(),
        message_time: |m: &TelemetryEnvelope| m.demand_response_forecast.as_ref().map(|f| f.time),
        fields: Vec::new(),
        forecast: Some(ForecastSpec {
            entries: |m: &TelemetryEnvelope| {
                m.demand_response_forecast
                    .as_ref()
                    .map(|f| f.predictions.len())
                    .unwrap_or(0)
            },
            horizon: |m: &TelemetryEnvelope, i: usize| Some(entry(m, i)?.forecast_time),
            fields: vec![
                EntryFieldSpec {
                    name: "price_energy",
                    unit: "$/kWh",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.price_energy,
                },
                EntryFieldSpec {
                    name: "price_demand",
                    unit: "$/kW",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.price_demand,
                },
                EntryFieldSpec {
                    name: "signal_type",
                    unit: "int",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.signal_type,
                },
                EntryFieldSpec {
                    name: "power_limit",
                    unit: "kW",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.power_limit,
                },
                EntryFieldSpec {
                    name: "power_track",
                    unit: "kW",
                    accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.power_track,
                },
            ],
        }),
    }
}
