//! 驱动描述符：每种设备类型的静态抽取描述。
//!
//! 描述符只含数据（谓词、时间取值、字段表），不含控制流；
//! 遍历逻辑统一在 `engine` 中。取值函数为无捕获 `fn` 指针，
//! 缺失字段以 `None` 表达。

use domain::TelemetryEnvelope;

/// 平铺字段的取值函数：`None` 表示本周期无数据。
pub type FieldAccessor = fn(&TelemetryEnvelope) -> Option<f64>;

/// 预测条目字段的取值函数：按条目下标取值。
pub type EntryFieldAccessor = fn(&TelemetryEnvelope, usize) -> Option<f64>;

/// 平铺字段描述：名称、单位与取值函数。
///
/// 单位允许为空串；是否出点由取值函数的 `Some`/`None` 决定，与数值无关。
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub unit: &'static str,
    pub accessor: FieldAccessor,
}

/// 预测序列中单条目的字段描述。
#[derive(Debug, Clone)]
pub struct EntryFieldSpec {
    pub name: &'static str,
    pub unit: &'static str,
    pub accessor: EntryFieldAccessor,
}

/// 分步预测序列的描述。
#[derive(Debug, Clone)]
pub struct ForecastSpec {
    /// 序列长度（载荷缺失时为 0）。
    pub entries: fn(&TelemetryEnvelope) -> usize,
    /// 条目自身的预测时间（纳秒）。
    pub horizon: fn(&TelemetryEnvelope, usize) -> Option<i64>,
    /// 条目内的字段表。
    pub fields: Vec<EntryFieldSpec>,
}

/// 单种设备类型的驱动描述符。
///
/// `fields` 与 `forecast` 可同时出现（如执行计划驱动：
/// 平铺的控制标志 + 分步的设定序列），引擎在一次调用内先走平铺表、
/// 再走预测序列。
#[derive(Debug, Clone)]
pub struct DriverDescriptor {
    /// 设备类型名（日志与注册表校验用）。
    pub equipment: &'static str,
    /// 适用谓词：该信封是否携带本设备的载荷。
    pub applies: fn(&TelemetryEnvelope) -> bool,
    /// 信封消息时间（纳秒）；所有输出点的时间戳来源。
    pub message_time: fn(&TelemetryEnvelope) -> Option<i64>,
    /// 平铺字段表。
    pub fields: Vec<FieldSpec>,
    /// 可选的分步预测序列。
    pub forecast: Option<ForecastSpec>,
}

impl DriverDescriptor {
    /// 描述符声明的全部字段名（平铺表 + 预测表），按声明顺序。
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.fields.iter().map(|field| field.name).collect();
        if let Some(forecast) = &self.forecast {
            names.extend(forecast.fields.iter().map(|field| field.name));
        }
        names
    }
}
