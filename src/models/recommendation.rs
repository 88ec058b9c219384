use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户之间的番剧推荐
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Recommendation {
    /// 推荐发起人
    pub initiator: i64,
    /// 推荐接收人
    pub receiver: i64,
    /// 被推荐的番剧 ID
    pub anime: i64,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}
