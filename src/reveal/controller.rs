use std::collections::HashMap;
use std::hash::Hash;

use super::frame::FrameScheduler;
use super::observer::{IntersectionObserver, IntersectionReport, ObserverFactory, ObserverOptions};

/// 占位元素的显示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

/// 控制器所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// 无观察实例
    Idle,
    /// 新批次已就位，等待下一帧后开始观察
    Staged,
    Observing,
}

#[derive(Debug, Clone)]
struct RevealEntry<H> {
    handle: H,
    state: RevealState,
}

/// 渐进显示控制器
///
/// 每批渲染出的占位元素在接近视口时各显示一次：
/// - `bind` 丢弃上一批，新批次全部置为 `Pending`，下一帧后开始观察
/// - 相交回调把条目置为 `Visible` 并停止观察该元素，不会回退
/// - `release`（以及 drop）断开并丢弃观察实例
///
/// 平台不支持相交检测时所有条目直接置为 `Visible`。
pub struct RevealController<H, F>
where
    H: Clone + Eq + Hash + std::fmt::Debug,
    F: ObserverFactory<H>,
{
    factory: F,
    options: ObserverOptions,
    observer: Option<F::Observer>,
    entries: Vec<RevealEntry<H>>,
    index: HashMap<H, usize>,
    phase: RevealPhase,
}

impl<H, F> RevealController<H, F>
where
    H: Clone + Eq + Hash + std::fmt::Debug,
    F: ObserverFactory<H>,
{
    pub fn new(factory: F) -> Self {
        Self::with_options(factory, ObserverOptions::default())
    }

    pub fn with_options(factory: F, options: ObserverOptions) -> Self {
        Self {
            factory,
            options,
            observer: None,
            entries: Vec::new(),
            index: HashMap::new(),
            phase: RevealPhase::Idle,
        }
    }

    /// 接管新渲染的批次：重置、等待下一帧、开始观察
    pub async fn bind<S>(&mut self, batch: impl IntoIterator<Item = H>, frames: &S)
    where
        S: FrameScheduler + ?Sized,
    {
        self.stage(batch);
        frames.next_frame().await;
        self.commit();
    }

    /// 断开上一批的观察，新批次全部置为 `Pending`
    ///
    /// 同一批次中重复的元素只保留一个
    pub fn stage(&mut self, batch: impl IntoIterator<Item = H>) {
        self.release();

        for handle in batch {
            if self.index.contains_key(&handle) {
                continue;
            }
            self.index.insert(handle.clone(), self.entries.len());
            self.entries.push(RevealEntry {
                handle,
                state: RevealState::Pending,
            });
        }

        self.phase = RevealPhase::Staged;
        tracing::trace!("Staged reveal batch of {} placeholders", self.entries.len());
    }

    /// 布局提交后调用，开始观察当前批次
    pub fn commit(&mut self) {
        if self.phase != RevealPhase::Staged {
            return;
        }
        if self.entries.is_empty() {
            self.phase = RevealPhase::Idle;
            return;
        }

        match self.factory.create(&self.options) {
            Some(mut observer) => {
                for entry in &self.entries {
                    observer.observe(&entry.handle);
                }
                self.observer = Some(observer);
                self.phase = RevealPhase::Observing;
                tracing::trace!("Observing {} placeholders", self.entries.len());
            }
            None => {
                tracing::warn!("Intersection observer unavailable, revealing {} placeholders immediately", self.entries.len());
                for entry in &mut self.entries {
                    entry.state = RevealState::Visible;
                }
                self.phase = RevealPhase::Idle;
            }
        }
    }

    /// 相交回调，返回本次新显示的元素
    ///
    /// 不属于当前批次、已显示或未相交的元素会被忽略
    pub fn on_intersect(&mut self, reports: &[IntersectionReport<H>]) -> Vec<H> {
        if self.phase != RevealPhase::Observing {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for report in reports.iter().filter(|r| r.is_intersecting) {
            let Some(&idx) = self.index.get(&report.handle) else {
                continue;
            };
            let entry = &mut self.entries[idx];
            if entry.state == RevealState::Visible {
                continue;
            }

            entry.state = RevealState::Visible;
            if let Some(ref mut observer) = self.observer {
                observer.unobserve(&entry.handle);
            }
            revealed.push(entry.handle.clone());
        }

        // 全部显示后不再需要观察实例
        if self.pending_count() == 0 {
            self.disconnect_observer();
            self.phase = RevealPhase::Idle;
        }

        revealed
    }

    /// 断开并丢弃观察实例，丢弃当前批次
    pub fn release(&mut self) {
        self.disconnect_observer();
        self.entries.clear();
        self.index.clear();
        self.phase = RevealPhase::Idle;
    }

    fn disconnect_observer(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn state_of(&self, handle: &H) -> Option<RevealState> {
        self.index.get(handle).map(|&idx| self.entries[idx].state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.state == RevealState::Visible).count()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.len() - self.visible_count()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }
}

impl<H, F> Drop for RevealController<H, F>
where
    H: Clone + Eq + Hash + std::fmt::Debug,
    F: ObserverFactory<H>,
{
    fn drop(&mut self) {
        self.disconnect_observer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{FakeViewport, ImmediateFrame};

    fn controller(viewport: &FakeViewport<u32>) -> RevealController<u32, FakeViewport<u32>> {
        RevealController::new(viewport.clone())
    }

    #[tokio::test]
    async fn test_bind_observes_whole_batch() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);

        ctrl.bind(0..5, &ImmediateFrame).await;

        assert_eq!(ctrl.phase(), RevealPhase::Observing);
        assert_eq!(ctrl.pending_count(), 5);
        assert_eq!(viewport.observed_count(), 5);
        assert_eq!(viewport.last_options(), Some(ObserverOptions::default()));
    }

    #[test]
    fn test_stage_does_not_observe_before_commit() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);

        ctrl.stage(vec![1, 2, 3]);
        assert_eq!(ctrl.phase(), RevealPhase::Staged);
        assert_eq!(viewport.observed_count(), 0);
        assert!(ctrl.on_intersect(&[IntersectionReport::intersecting(1)]).is_empty());

        ctrl.commit();
        assert_eq!(viewport.observed_count(), 3);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1, 2, 3]);
        ctrl.commit();

        let revealed = ctrl.on_intersect(&viewport.scroll_to(&[1, 2]));
        assert_eq!(revealed, vec![1, 2]);
        assert!(!viewport.is_observed(&1));

        // 平台重复上报同一元素时也不会再次处理
        let revealed = ctrl.on_intersect(&[IntersectionReport::intersecting(1)]);
        assert!(revealed.is_empty());
        assert_eq!(ctrl.state_of(&1), Some(RevealState::Visible));
        assert_eq!(ctrl.state_of(&3), Some(RevealState::Pending));
    }

    #[test]
    fn test_non_intersecting_reports_are_ignored() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1]);
        ctrl.commit();

        let report = IntersectionReport {
            handle: 1,
            is_intersecting: false,
        };
        assert!(ctrl.on_intersect(&[report]).is_empty());
        assert_eq!(ctrl.state_of(&1), Some(RevealState::Pending));
        assert!(viewport.is_observed(&1));
    }

    #[test]
    fn test_unknown_handles_are_ignored() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1]);
        ctrl.commit();

        assert!(ctrl.on_intersect(&[IntersectionReport::intersecting(99)]).is_empty());
        assert_eq!(ctrl.pending_count(), 1);
    }

    #[test]
    fn test_last_reveal_drops_observer() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1, 2]);
        ctrl.commit();

        ctrl.on_intersect(&viewport.scroll_to(&[1, 2]));
        assert_eq!(ctrl.phase(), RevealPhase::Idle);
        assert!(!ctrl.has_observer());
        assert_eq!(viewport.disconnect_count(), 1);
        assert_eq!(ctrl.visible_count(), 2);
    }

    #[test]
    fn test_duplicate_handles_in_batch() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![4, 4, 5]);
        ctrl.commit();

        assert_eq!(ctrl.len(), 2);
        assert_eq!(viewport.observe_count(&4), 1);
    }

    #[test]
    fn test_release_disconnects() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1, 2, 3]);
        ctrl.commit();

        ctrl.release();
        assert_eq!(ctrl.phase(), RevealPhase::Idle);
        assert!(ctrl.is_empty());
        assert_eq!(viewport.observed_count(), 0);
        assert_eq!(viewport.disconnect_count(), 1);
    }

    #[test]
    fn test_release_while_staged_skips_commit() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1, 2]);
        ctrl.release();
        ctrl.commit();

        assert_eq!(viewport.instances_created(), 0);
        assert_eq!(ctrl.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_drop_disconnects() {
        let viewport = FakeViewport::new();
        {
            let mut ctrl = controller(&viewport);
            ctrl.stage(vec![1, 2]);
            ctrl.commit();
        }
        assert_eq!(viewport.observed_count(), 0);
        assert_eq!(viewport.disconnect_count(), 1);
    }

    #[test]
    fn test_unavailable_capability_fails_open() {
        let viewport = FakeViewport::unavailable();
        let mut ctrl = controller(&viewport);
        ctrl.stage(vec![1, 2, 3]);
        assert_eq!(ctrl.visible_count(), 0);

        ctrl.commit();
        assert_eq!(ctrl.visible_count(), 3);
        assert_eq!(ctrl.phase(), RevealPhase::Idle);
        assert!(!ctrl.has_observer());
    }

    #[test]
    fn test_empty_batch_creates_no_observer() {
        let viewport = FakeViewport::new();
        let mut ctrl = controller(&viewport);
        ctrl.stage(Vec::new());
        ctrl.commit();

        assert_eq!(ctrl.phase(), RevealPhase::Idle);
        assert_eq!(viewport.instances_created(), 0);
    }

    #[test]
    fn test_custom_options_are_passed_to_factory() {
        let viewport = FakeViewport::new();
        let options = ObserverOptions {
            root_margin_px: 200,
            threshold: 0.5,
        };
        let mut ctrl = RevealController::with_options(viewport.clone(), options);
        ctrl.stage(vec![1u32]);
        ctrl.commit();

        assert_eq!(viewport.last_options(), Some(options));
    }
}
