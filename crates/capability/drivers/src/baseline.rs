//! 基线功率预测：分步预测序列。

use domain::{BaselineEntry, TelemetryEnvelope};
use xbos_extract::{DriverDescriptor, EntryFieldSpec, ForecastSpec};

fn entry(m: &TelemetryEnvelope, index: usize) -> Option<&BaselineEntry> {
    m.baseline_forecast.as_ref()?.predictions.get(index)
}

/// 基线预测驱动描述符。
pub fn descriptor() -> DriverDescriptor {
    DriverDescriptor {
        equipment: "baseline",
        applies: |m: &TelemetryEnvelope| m.baseline_forecast.is_some(),
        message_time: |m: &TelemetryEnvelope| m.baseline_forecast.as_ref().map(|f| f.time),
        fields: Vec::new(),
        forecast: Some(ForecastSpec {
            entries: |m: &TelemetryEnvelope| {
                m.baseline_forecast
                    .as_ref()
                    .map(|f| f.predictions.len())
                    .unwrap_or(0)
            },
            horizon: |m: &TelemetryEnvelope, i: usize| Some(entry(m, i)?.forecast_time),
            fields: vec![EntryFieldSpec {
                name: "power",
                unit: "W",
                accessor: |m: &TelemetryEnvelope, i: usize| entry(m, i)?.power,
            }],
        }),
    }
}
