//! # 遥测抽取模块
//!
//! 将解码后的遥测信封转换为带标签的时间序列点位。
//!
//! ## 架构设计
//!
//! 1. **描述符层** (`descriptor.rs`)：每种设备一份声明式字段表
//! 2. **引擎层** (`engine.rs`)：由描述符驱动的通用遍历（平铺 / 分步预测 / 混合）
//! 3. **标识符层** (`identifier.rs`)：按（资源路径, 字段名）派生稳定序列标识
//! 4. **下游层** (`sink.rs`)：逐点写出的异步边界接口
//! 5. **注册表层** (`registry.rs`)：启动时构建一次的驱动表与信封分发
//!
//! ## 核心特性
//!
//! - **声明式驱动**：字段的名称、单位与取值函数集中在一张表里，
//!   引擎不含任何设备分支
//! - **缺失即跳过**：字段缺失是"本周期无数据"，不产生零值点
//! - **快速失败**：下游首个错误立即终止当前信封的剩余遍历，原样上抛
//! - **只读分发**：注册表初始化后不再变更，可被并发调用

pub mod descriptor;
pub mod engine;
pub mod identifier;
pub mod registry;
pub mod sink;

pub use descriptor::{DriverDescriptor, EntryFieldSpec, FieldSpec, ForecastSpec};
pub use engine::{COLLECTION_PREFIX, ExtractError, run_driver};
pub use identifier::point_identifier;
pub use registry::{DriverRegistry, RegistryError};
pub use sink::{MemorySink, NoopSink, PointSink, SinkError};
