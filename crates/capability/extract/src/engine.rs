//! 通用抽取引擎：由描述符驱动的单遍历遍历。
//!
//! 一次调用处理一条信封：先走平铺字段表，再走可选的分步预测序列。
//! 除下游写出外无任何可失败操作；下游首个错误立即终止剩余遍历。

use crate::descriptor::DriverDescriptor;
use crate::identifier::point_identifier;
use crate::sink::{PointSink, SinkError};
use domain::{Point, SourceLocator, TelemetryEnvelope};
use std::collections::HashMap;
use tracing::debug;

/// 输出集合名前缀。
pub const COLLECTION_PREFIX: &str = "xbos";

/// 抽取错误：唯一来源是下游写出失败。
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// 按单个驱动描述符遍历信封，向下游逐点写出，返回写出的点数。
///
/// 谓词不命中时不产生点也不报错；已写出的点在失败后不回收。
pub async fn run_driver(
    driver: &DriverDescriptor,
    locator: &SourceLocator,
    envelope: &TelemetryEnvelope,
    sink: &dyn PointSink,
) -> Result<usize, ExtractError> {
    if !(driver.applies)(envelope) {
        return Ok(0);
    }
    let Some(message_time) = (driver.message_time)(envelope) else {
        debug!(
            equipment = driver.equipment,
            "payload without message time, skipped"
        );
        return Ok(0);
    };

    let mut emitted = 0usize;

    for field in &driver.fields {
        match (field.accessor)(envelope) {
            Some(value) => {
                let point = flat_point(locator, field.name, field.unit, message_time, value);
                deliver(sink, point).await?;
                emitted += 1;
            }
            None => xbos_telemetry::record_field_skipped(),
        }
    }

    if let Some(forecast) = &driver.forecast {
        let entry_count = (forecast.entries)(envelope);
        for index in 0..entry_count {
            // 步号每条目恒进一步，与该条目实际出点数无关
            let step = index + 1;
            let Some(horizon) = (forecast.horizon)(envelope, index) else {
                debug!(
                    equipment = driver.equipment,
                    index, "forecast entry without horizon, skipped"
                );
                continue;
            };
            for field in &forecast.fields {
                match (field.accessor)(envelope, index) {
                    Some(value) => {
                        let point = forecast_point(
                            locator,
                            field.name,
                            field.unit,
                            message_time,
                            value,
                            horizon,
                            step,
                        );
                        deliver(sink, point).await?;
                        emitted += 1;
                    }
                    None => xbos_telemetry::record_field_skipped(),
                }
            }
        }
    }

    Ok(emitted)
}

async fn deliver(sink: &dyn PointSink, point: Point) -> Result<(), ExtractError> {
    match sink.sink(point).await {
        Ok(()) => {
            xbos_telemetry::record_point_emitted();
            Ok(())
        }
        Err(err) => {
            xbos_telemetry::record_sink_failure();
            Err(ExtractError::Sink(err))
        }
    }
}

fn collection_for(locator: &SourceLocator) -> String {
    format!("{}/{}", COLLECTION_PREFIX, locator.resource)
}

/// 平铺点位：时间戳取信封消息时间，标签含 `unit` 与 `name`。
fn flat_point(
    locator: &SourceLocator,
    name: &str,
    unit: &str,
    message_time: i64,
    value: f64,
) -> Point {
    let mut tags = HashMap::with_capacity(2);
    tags.insert("unit".to_string(), unit.to_string());
    tags.insert("name".to_string(), name.to_string());
    Point {
        identifier: point_identifier(locator, name),
        collection: collection_for(locator),
        timestamps: vec![message_time],
        values: vec![value],
        tags,
    }
}

/// 预测点位：在平铺标签之上附加条目自身的预测时间与步号。
///
/// `prediction_time` 以纳秒十进制串写出，各驱动统一。
fn forecast_point(
    locator: &SourceLocator,
    name: &str,
    unit: &str,
    message_time: i64,
    value: f64,
    horizon: i64,
    step: usize,
) -> Point {
    let mut point = flat_point(locator, name, unit, message_time, value);
    point
        .tags
        .insert("prediction_time".to_string(), horizon.to_string());
    point
        .tags
        .insert("prediction_step".to_string(), step.to_string());
    point
}
