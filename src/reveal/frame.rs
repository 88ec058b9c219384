use async_trait::async_trait;

/// 等待下一次渲染（布局提交之后的最早时机）
#[async_trait]
pub trait FrameScheduler: Send + Sync {
    async fn next_frame(&self);
}

/// 让出一次事件循环，等同于 "下一帧"
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldFrame;

#[async_trait]
impl FrameScheduler for YieldFrame {
    async fn next_frame(&self) {
        tokio::task::yield_now().await;
    }
}

/// 立即返回，用于同步测试
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateFrame;

#[async_trait]
impl FrameScheduler for ImmediateFrame {
    async fn next_frame(&self) {}
}
