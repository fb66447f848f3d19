use std::collections::HashMap;

/// 数据来源定位：设备实例的资源路径段。
///
/// 同时用于输出集合命名（`xbos/<resource>`）与序列标识符派生。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub resource: String,
}

impl SourceLocator {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

/// 抽取输出的最小单元：一条带标签的时间序列片段。
///
/// 不变式：`timestamps.len() == values.len()`；`tags` 恒含 `unit` 与 `name`；
/// 预测类点位另含 `prediction_time` 与 `prediction_step`。
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// 序列标识符：仅由（资源路径, 字段名）确定的 128 位值。
    pub identifier: u128,
    /// 输出集合名（`xbos/<resource>`）。
    pub collection: String,
    /// 时间戳（纳秒，Unix epoch）。
    pub timestamps: Vec<i64>,
    /// 与时间戳一一对应的标量值。
    pub values: Vec<f64>,
    /// 写入时使用的标签。
    pub tags: HashMap<String, String>,
}
