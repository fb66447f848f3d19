//! 点位下游边界。
//!
//! 引擎每产出一个点调用一次 `sink` 并等待其完成；本层不做重试，
//! 也不假设下游幂等，写入/重试策略归外部存储协作方所有。

use async_trait::async_trait;
use domain::Point;
use tokio::sync::Mutex;

/// 下游写入错误。
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("write rejected: {0}")]
    Rejected(String),
    #[error("downstream unavailable: {0}")]
    Unavailable(String),
}

/// 点位下游抽象：逐点同步交付。
#[async_trait]
pub trait PointSink: Send + Sync {
    async fn sink(&self, point: Point) -> Result<(), SinkError>;
}

/// 空下游（用于接线与测试）。
#[derive(Debug, Default)]
pub struct NoopSink;

#[async_trait]
impl PointSink for NoopSink {
    async fn sink(&self, _point: Point) -> Result<(), SinkError> {
        Ok(())
    }
}

/// 内存下游：按交付顺序收集点位（用于测试与本地检视）。
#[derive(Debug, Default)]
pub struct MemorySink {
    points: Mutex<Vec<Point>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取走已收集的点位并清空。
    pub async fn take(&self) -> Vec<Point> {
        std::mem::take(&mut *self.points.lock().await)
    }

    pub async fn is_empty(&self) -> bool {
        self.points.lock().await.is_empty()
    }
}

#[async_trait]
impl PointSink for MemorySink {
    async fn sink(&self, point: Point) -> Result<(), SinkError> {
        self.points.lock().await.push(point);
        Ok(())
    }
}
