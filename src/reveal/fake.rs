// 同步的假视口，用于测试
//
// 模拟平台行为：只对仍在观察中的元素上报相交

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use super::observer::{IntersectionObserver, IntersectionReport, ObserverFactory, ObserverOptions};

struct ViewportState<H> {
    observed: HashSet<H>,
    observe_calls: HashMap<H, usize>,
    disconnects: usize,
    created: usize,
    last_options: Option<ObserverOptions>,
}

/// 假视口，同时充当观察实例工厂
pub struct FakeViewport<H> {
    state: Rc<RefCell<ViewportState<H>>>,
    available: bool,
}

impl<H> Clone for FakeViewport<H> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            available: self.available,
        }
    }
}

impl<H: Clone + Eq + Hash> FakeViewport<H> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                observed: HashSet::new(),
                observe_calls: HashMap::new(),
                disconnects: 0,
                created: 0,
                last_options: None,
            })),
            available: true,
        }
    }

    /// 不支持相交检测的平台
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// 将元素滚入视口，返回平台会上报的相交记录
    pub fn scroll_to(&self, handles: &[H]) -> Vec<IntersectionReport<H>> {
        let state = self.state.borrow();
        handles
            .iter()
            .filter(|h| state.observed.contains(*h))
            .cloned()
            .map(IntersectionReport::intersecting)
            .collect()
    }

    pub fn is_observed(&self, handle: &H) -> bool {
        self.state.borrow().observed.contains(handle)
    }

    pub fn observed_count(&self) -> usize {
        self.state.borrow().observed.len()
    }

    /// 元素被 `observe` 的累计次数
    pub fn observe_count(&self, handle: &H) -> usize {
        self.state.borrow().observe_calls.get(handle).copied().unwrap_or(0)
    }

    pub fn disconnect_count(&self) -> usize {
        self.state.borrow().disconnects
    }

    pub fn instances_created(&self) -> usize {
        self.state.borrow().created
    }

    pub fn last_options(&self) -> Option<ObserverOptions> {
        self.state.borrow().last_options
    }
}

impl<H: Clone + Eq + Hash> Default for FakeViewport<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// 假视口创建的观察实例
pub struct FakeObserver<H> {
    state: Rc<RefCell<ViewportState<H>>>,
}

impl<H: Clone + Eq + Hash> IntersectionObserver<H> for FakeObserver<H> {
    fn observe(&mut self, handle: &H) {
        let mut state = self.state.borrow_mut();
        state.observed.insert(handle.clone());
        *state.observe_calls.entry(handle.clone()).or_insert(0) += 1;
    }

    fn unobserve(&mut self, handle: &H) {
        self.state.borrow_mut().observed.remove(handle);
    }

    fn disconnect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.observed.clear();
        state.disconnects += 1;
    }
}

impl<H: Clone + Eq + Hash> ObserverFactory<H> for FakeViewport<H> {
    type Observer = FakeObserver<H>;

    fn create(&self, options: &ObserverOptions) -> Option<Self::Observer> {
        if !self.available {
            return None;
        }

        let mut state = self.state.borrow_mut();
        state.created += 1;
        state.last_options = Some(*options);
        Some(FakeObserver {
            state: Rc::clone(&self.state),
        })
    }
}
