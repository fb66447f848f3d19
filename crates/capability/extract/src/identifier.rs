//! 序列标识符派生。

use domain::SourceLocator;
use uuid::Uuid;

/// 全进程共享的命名空间常量。
///
/// 标识符仅由（资源路径, 字段名）决定，跨重启、跨驱动保持稳定，
/// 因此该常量一经采用不得变更。
const POINT_NAMESPACE: Uuid = Uuid::from_u128(0x0e4e_d1a0_c9f5_4fbd_93fe_0ed2_b7bf_34a8);

/// 按（资源路径, 字段名）派生稳定的 128 位序列标识符。
///
/// 采用 v5 UUID：对资源路径与字段名的字节拼接做命名空间哈希。
/// 纯函数，除哈希本身的抗碰撞性外不做额外去重。
pub fn point_identifier(locator: &SourceLocator, field_name: &str) -> u128 {
    let mut material = Vec::with_capacity(locator.resource.len() + field_name.len());
    material.extend_from_slice(locator.resource.as_bytes());
    material.extend_from_slice(field_name.as_bytes());
    Uuid::new_v5(&POINT_NAMESPACE, &material).as_u128()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_deterministic() {
        let locator = SourceLocator::new("site-a/rtac");
        assert_eq!(
            point_identifier(&locator, "heartbeat"),
            point_identifier(&locator, "heartbeat")
        );
    }

    #[test]
    fn identifier_distinguishes_field_names() {
        let locator = SourceLocator::new("site-a/rtac");
        assert_ne!(
            point_identifier(&locator, "heartbeat"),
            point_identifier(&locator, "ac_frequency")
        );
    }

    #[test]
    fn identifier_distinguishes_locators() {
        let a = SourceLocator::new("site-a/rtac");
        let b = SourceLocator::new("site-b/rtac");
        assert_ne!(
            point_identifier(&a, "heartbeat"),
            point_identifier(&b, "heartbeat")
        );
    }
}
