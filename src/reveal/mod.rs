// 渐进显示
//
// 结果批次渲染为占位元素后，由控制器在元素接近视口时逐个显示

pub mod controller;
pub mod fake;
pub mod frame;
pub mod observer;

pub use controller::{RevealController, RevealPhase, RevealState};
pub use fake::{FakeObserver, FakeViewport};
pub use frame::{FrameScheduler, ImmediateFrame, YieldFrame};
pub use observer::{IntersectionObserver, IntersectionReport, ObserverFactory, ObserverOptions};
