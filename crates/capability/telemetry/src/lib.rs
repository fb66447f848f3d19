//! 日志初始化与抽取计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 抽取计数快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub envelopes: u64,
    pub drivers_matched: u64,
    pub points_emitted: u64,
    pub fields_skipped: u64,
    pub sink_failures: u64,
}

/// 抽取计数器。
pub struct IngestMetrics {
    envelopes: AtomicU64,
    drivers_matched: AtomicU64,
    points_emitted: AtomicU64,
    fields_skipped: AtomicU64,
    sink_failures: AtomicU64,
}

impl IngestMetrics {
    pub fn new() -> Self {
        Self {
            envelopes: AtomicU64::new(0),
            drivers_matched: AtomicU64::new(0),
            points_emitted: AtomicU64::new(0),
            fields_skipped: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            envelopes: self.envelopes.load(Ordering::Relaxed),
            drivers_matched: self.drivers_matched.load(Ordering::Relaxed),
            points_emitted: self.points_emitted.load(Ordering::Relaxed),
            fields_skipped: self.fields_skipped.load(Ordering::Relaxed),
            sink_failures: self.sink_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for IngestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<IngestMetrics> = OnceLock::new();

/// 获取全局计数器实例。
pub fn metrics() -> &'static IngestMetrics {
    METRICS.get_or_init(IngestMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 记录分发的信封数。
pub fn record_envelope() {
    metrics().envelopes.fetch_add(1, Ordering::Relaxed);
}

/// 记录驱动谓词命中次数。
pub fn record_driver_matched() {
    metrics().drivers_matched.fetch_add(1, Ordering::Relaxed);
}

/// 记录成功写出的点数。
pub fn record_point_emitted() {
    metrics().points_emitted.fetch_add(1, Ordering::Relaxed);
}

/// 记录因字段缺失而跳过的次数。
pub fn record_field_skipped() {
    metrics().fields_skipped.fetch_add(1, Ordering::Relaxed);
}

/// 记录下游写出失败次数。
pub fn record_sink_failure() {
    metrics().sink_failures.fetch_add(1, Ordering::Relaxed);
}
