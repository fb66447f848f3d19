//! 设备驱动描述符集合。
//!
//! 每个模块对应一种设备类型，只含声明式字段表（名称、单位、取值函数）；
//! 遍历逻辑统一在 `xbos-extract` 的引擎里。
//!
//! - 平铺快照：`rtac`、`flexstat`、`parker`
//! - 分步预测：`baseline`、`demand_response`、`constraints`
//! - 混合（控制标志 + 设定序列）：`rtac_actuation`、`parker_actuation`

pub mod baseline;
pub mod constraints;
pub mod demand_response;
pub mod flexstat;
pub mod parker;
pub mod parker_actuation;
pub mod rtac;
pub mod rtac_actuation;

use xbos_extract::{DriverRegistry, RegistryError};

/// 组装全部标准驱动的注册表（进程启动时调用一次）。
pub fn standard_registry() -> Result<DriverRegistry, RegistryError> {
    DriverRegistry::new(vec![
        rtac::descriptor(),
        flexstat::descriptor(),
        parker::descriptor(),
        baseline::descriptor(),
        demand_response::descriptor(),
        constraints::descriptor(),
        rtac_actuation::descriptor(),
        parker_actuation::descriptor(),
    ])
}
