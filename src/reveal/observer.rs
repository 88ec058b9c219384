// 视口相交检测能力
//
// 平台（浏览器 IntersectionObserver 等）通过这里的 trait 接入，
// 控制器只依赖这些接口

/// 相交检测参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// 视口外扩边距（像素），条目接近视口时即开始显示
    pub root_margin_px: u32,
    /// 相交比例阈值
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_px: 20,
            threshold: 0.1,
        }
    }
}

/// 一次相交回调中单个占位元素的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionReport<H> {
    pub handle: H,
    pub is_intersecting: bool,
}

impl<H> IntersectionReport<H> {
    pub fn intersecting(handle: H) -> Self {
        Self {
            handle,
            is_intersecting: true,
        }
    }
}

/// 单个相交检测实例
pub trait IntersectionObserver<H> {
    fn observe(&mut self, handle: &H);

    fn unobserve(&mut self, handle: &H);

    /// 停止观察所有元素
    fn disconnect(&mut self);
}

/// 创建相交检测实例
///
/// 平台不支持时返回 `None`
pub trait ObserverFactory<H> {
    type Observer: IntersectionObserver<H>;

    fn create(&self, options: &ObserverOptions) -> Option<Self::Observer>;
}
