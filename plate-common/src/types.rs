use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A compact notation for a contiguous block of plate numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum PlateRange {
    /// Two boundaries of equal length, e.g. `A100BC` ~ `A111BC`
    Bounded { start: String, end: String },
    /// A single boundary whose last two characters span `00..99`
    Prefix { start: String },
}

impl PlateRange {
    pub fn bounded(start: impl Into<String>, end: impl Into<String>) -> Self {
        PlateRange::Bounded {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn prefix(start: impl Into<String>) -> Self {
        PlateRange::Prefix {
            start: start.into(),
        }
    }
}

impl std::fmt::Display for PlateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateRange::Bounded { start, end } => write!(f, "{} ~ {}", start, end),
            PlateRange::Prefix { start } => write!(f, "{}*", start),
        }
    }
}

/// Desirability level of a single plate, ordered from ordinary to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DesirabilityLevel {
    /// 普通号
    Ordinary = 1,
    /// 递增减
    Sequential = 2,
    /// 三连号 / 重复号
    Triple = 3,
    /// 四连号
    Quadra = 4,
    /// 五连号
    Penta = 5,
}

impl DesirabilityLevel {
    pub const ALL: [DesirabilityLevel; 5] = [
        DesirabilityLevel::Ordinary,
        DesirabilityLevel::Sequential,
        DesirabilityLevel::Triple,
        DesirabilityLevel::Quadra,
        DesirabilityLevel::Penta,
    ];

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for DesirabilityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DesirabilityLevel::Ordinary),
            2 => Ok(DesirabilityLevel::Sequential),
            3 => Ok(DesirabilityLevel::Triple),
            4 => Ok(DesirabilityLevel::Quadra),
            5 => Ok(DesirabilityLevel::Penta),
            _ => Err(format!("Desirability level out of range: {}", value)),
        }
    }
}

impl From<DesirabilityLevel> for u8 {
    fn from(level: DesirabilityLevel) -> Self {
        level.value()
    }
}

impl std::fmt::Display for DesirabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Mark a user put on a plate. No entry in the store means no mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateStatus {
    #[serde(rename = "favored")]
    Favored,
    #[serde(rename = "excluded")]
    Excluded,
}

impl PlateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlateStatus::Favored => "favored",
            PlateStatus::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for PlateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favored" | "favorite" => Ok(PlateStatus::Favored),
            "excluded" | "exclude" => Ok(PlateStatus::Excluded),
            _ => Err(format!("Unknown plate status: {}", s)),
        }
    }
}

/// One entry of the plate dataset.
///
/// Only `start`/`end` are interpreted; the rest rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// 牌证发放机关
    #[serde(default)]
    pub office: String,
    /// 号牌种类
    #[serde(rename = "type", default)]
    pub category: String,
    /// 投放日期, kept as the raw dataset string
    #[serde(default)]
    pub time: String,
    /// Any other fields of the source record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RangeRecord {
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            start: start.into(),
            end,
            office: String::new(),
            category: String::new(),
            time: String::new(),
            extra: Map::new(),
        }
    }

    pub fn range(&self) -> PlateRange {
        match &self.end {
            Some(end) => PlateRange::bounded(self.start.clone(), end.clone()),
            None => PlateRange::prefix(self.start.clone()),
        }
    }

    pub fn is_new_energy(&self) -> bool {
        self.category.contains("新能源")
    }
}

/// Top-level dataset document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "numberScopes", default)]
    pub number_scopes: Vec<RangeRecord>,
}

impl Dataset {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
