use serde::{Deserialize, Serialize};

/// 目录条目（番剧）
///
/// 字段名与后端输出保持一致（PascalCase）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Anime {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(default)]
    pub sources: String,
    pub title: String,
    #[serde(rename = "Type", default)]
    pub kind: u8,
    #[serde(default)]
    pub episodes: u32,
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub duration_value: Option<f64>,
}

impl Anime {
    pub fn anime_type(&self) -> AnimeType {
        AnimeType::from_code(self.kind)
    }

    pub fn anime_status(&self) -> AnimeStatus {
        AnimeStatus::from_code(self.status)
    }
}

/// 番剧类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimeType {
    Unknown,
    Tv,
    Movie,
    Ova,
    Special,
    Ona,
    Music,
}

impl AnimeType {
    /// 未知代码统一视为 `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => AnimeType::Tv,
            2 => AnimeType::Movie,
            3 => AnimeType::Ova,
            4 => AnimeType::Special,
            5 => AnimeType::Ona,
            6 => AnimeType::Music,
            _ => AnimeType::Unknown,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            AnimeType::Unknown => 0,
            AnimeType::Tv => 1,
            AnimeType::Movie => 2,
            AnimeType::Ova => 3,
            AnimeType::Special => 4,
            AnimeType::Ona => 5,
            AnimeType::Music => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimeType::Unknown => "Unknown",
            AnimeType::Tv => "TV",
            AnimeType::Movie => "Movie",
            AnimeType::Ova => "OVA",
            AnimeType::Special => "Special",
            AnimeType::Ona => "ONA",
            AnimeType::Music => "Music",
        }
    }
}

impl std::fmt::Display for AnimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 播出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimeStatus {
    Unknown,
    Finished,
    Ongoing,
    Upcoming,
}

impl AnimeStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => AnimeStatus::Finished,
            2 => AnimeStatus::Ongoing,
            3 => AnimeStatus::Upcoming,
            _ => AnimeStatus::Unknown,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            AnimeStatus::Unknown => 0,
            AnimeStatus::Finished => 1,
            AnimeStatus::Ongoing => 2,
            AnimeStatus::Upcoming => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimeStatus::Unknown => "Unknown",
            AnimeStatus::Finished => "Finished",
            AnimeStatus::Ongoing => "Ongoing",
            AnimeStatus::Upcoming => "Upcoming",
        }
    }
}

impl std::fmt::Display for AnimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
