use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 查询代次令牌
///
/// 每发出一次查询生成一个，完成时与当前令牌比较以丢弃过期响应
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 单调递增的令牌计数器
///
/// 克隆后共享同一个计数
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成新令牌并设为当前令牌
    pub fn mint(&self) -> GenerationToken {
        GenerationToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn current(&self) -> Option<GenerationToken> {
        match self.current.load(Ordering::SeqCst) {
            0 => None,
            value => Some(GenerationToken(value)),
        }
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let counter = GenerationCounter::new();
        assert!(counter.current().is_none());

        let t1 = counter.mint();
        let t2 = counter.mint();
        assert!(t2 > t1);
        assert!(!counter.is_current(t1));
        assert!(counter.is_current(t2));
        assert_eq!(counter.current(), Some(t2));
    }

    #[test]
    fn test_clones_share_state() {
        let counter = GenerationCounter::new();
        let shared = counter.clone();

        let token = counter.mint();
        assert!(shared.is_current(token));
        shared.mint();
        assert!(!counter.is_current(token));
    }
}
