//! Usage profile types
//!
//! A usage profile is a list of [`UsageEntry`] values, normally one per
//! [`Category`] in canonical order. The engine accepts any subset and keeps the
//! caller's order.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Kind of AI tool usage tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Conversational assistants
    Chatbots,
    /// AI-backed search engines
    AiSearch,
    /// Image generators
    AiImageGen,
    /// Video generators
    AiVideoGen,
    /// Writing assistants
    AiWriting,
}

impl Category {
    /// All categories in canonical display order
    pub const ALL: [Category; 5] = [
        Category::Chatbots,
        Category::AiSearch,
        Category::AiImageGen,
        Category::AiVideoGen,
        Category::AiWriting,
    ];

    /// Stable snake_case identifier
    pub fn id(self) -> &'static str {
        match self {
            Category::Chatbots => "chatbots",
            Category::AiSearch => "ai_search",
            Category::AiImageGen => "ai_image_gen",
            Category::AiVideoGen => "ai_video_gen",
            Category::AiWriting => "ai_writing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| InputError::UnknownCategory(s.to_string()))
    }
}

/// Aggregation period
///
/// A flat day-count multiplier, not a calendar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl Period {
    /// All periods from shortest to longest
    pub const ALL: [Period; 4] = [Period::Daily, Period::Weekly, Period::Monthly, Period::Annual];

    /// Days covered by the period
    pub fn multiplier(self) -> f64 {
        match self {
            Period::Daily => 1.0,
            Period::Weekly => 7.0,
            Period::Monthly => 30.0,
            Period::Annual => 365.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Annual => "annual",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| InputError::UnknownPeriod(s.to_string()))
    }
}

/// Daily minutes spent in one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub category: Category,
    pub minutes_per_day: f64,
}

impl UsageEntry {
    pub fn new(category: Category, minutes_per_day: f64) -> Self {
        Self {
            category,
            minutes_per_day,
        }
    }

    /// Same category with minutes multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            category: self.category,
            minutes_per_day: self.minutes_per_day * factor,
        }
    }
}

/// Build a profile from `(category id, minutes)` pairs.
///
/// Ids that do not name a known category are dropped, so profiles written by a
/// newer client with extra categories still load.
pub fn parse_profile<'a, I>(pairs: I) -> Vec<UsageEntry>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    pairs
        .into_iter()
        .filter_map(|(id, minutes)| match id.parse::<Category>() {
            Ok(category) => Some(UsageEntry::new(category, minutes)),
            Err(_) => {
                log::debug!("skipping usage entry with unrecognized category '{}'", id);
                None
            }
        })
        .collect()
}

/// Sample profile shown before a user has entered their own usage
pub fn demo_profile() -> Vec<UsageEntry> {
    vec![
        UsageEntry::new(Category::Chatbots, 45.0),
        UsageEntry::new(Category::AiSearch, 20.0),
        UsageEntry::new(Category::AiImageGen, 10.0),
        UsageEntry::new(Category::AiVideoGen, 5.0),
        UsageEntry::new(Category::AiWriting, 15.0),
    ]
}
