//! 驱动注册表与信封分发。

use crate::descriptor::DriverDescriptor;
use crate::engine::{ExtractError, run_driver};
use crate::sink::PointSink;
use domain::{SourceLocator, TelemetryEnvelope};
use std::collections::HashSet;
use tracing::warn;

/// 注册表构建错误：描述符表的启动期一致性检查。
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate equipment: {0}")]
    DuplicateEquipment(String),
    #[error("duplicate field `{field}` in equipment `{equipment}`")]
    DuplicateField { equipment: String, field: String },
}

/// 驱动注册表：进程启动时构建一次，此后只读。
///
/// 无内部可变状态，可被多条信封并发分发；同一信封可命中多个驱动。
#[derive(Debug)]
pub struct DriverRegistry {
    drivers: Vec<DriverDescriptor>,
}

impl DriverRegistry {
    /// 构建注册表并做一致性检查：设备名不得重复，
    /// 单个描述符内的字段名不得重复（字段表与单位在同一张表里声明，
    /// 重名意味着描述符配置错误）。
    pub fn new(drivers: Vec<DriverDescriptor>) -> Result<Self, RegistryError> {
        let mut equipment_seen = HashSet::new();
        for driver in &drivers {
            if !equipment_seen.insert(driver.equipment) {
                return Err(RegistryError::DuplicateEquipment(
                    driver.equipment.to_string(),
                ));
            }
            let mut field_seen = HashSet::new();
            for name in driver.field_names() {
                if !field_seen.insert(name) {
                    return Err(RegistryError::DuplicateField {
                        equipment: driver.equipment.to_string(),
                        field: name.to_string(),
                    });
                }
            }
        }
        Ok(Self { drivers })
    }

    pub fn drivers(&self) -> &[DriverDescriptor] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// 分发一条信封：依次询问每个驱动的适用谓词，命中者交给抽取引擎。
    ///
    /// 谓词不命中不产生点也不报错；首个错误原样上抛，
    /// 其后的驱动不再尝试，已写出的点不回收。返回写出的总点数。
    pub async fn extract(
        &self,
        locator: &SourceLocator,
        envelope: &TelemetryEnvelope,
        sink: &dyn PointSink,
    ) -> Result<usize, ExtractError> {
        xbos_telemetry::record_envelope();
        let mut total = 0usize;
        for driver in &self.drivers {
            if !(driver.applies)(envelope) {
                continue;
            }
            xbos_telemetry::record_driver_matched();
            match run_driver(driver, locator, envelope, sink).await {
                Ok(emitted) => total += emitted,
                Err(err) => {
                    warn!(
                        equipment = driver.equipment,
                        resource = %locator.resource,
                        error = %err,
                        "extraction aborted"
                    );
                    return Err(err);
                }
            }
        }
        Ok(total)
    }
}
