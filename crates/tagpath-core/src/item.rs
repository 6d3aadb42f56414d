//! Item records: one normalized catalog entry per problem
//!
//! Raw records arrive in the shape produced by the problem fetcher:
//!
//! ```json
//! {
//!   "acRate": 52.759501704051125,
//!   "difficulty": "Easy",
//!   "frontendQuestionId": "1",
//!   "title": "Two Sum",
//!   "titleSlug": "two-sum",
//!   "topicTags": [{"name": "Array", "slug": "array"}, {"name": "Hash Table"}]
//! }
//! ```
//!
//! Every field is kept as a loose JSON value until conversion so that a bad
//! record is reported with the name of the field that failed.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bail_malformed;
use crate::error::{Result, TagpathError};

pub const FIELD_ID: &str = "frontendQuestionId";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_SLUG: &str = "titleSlug";
pub const FIELD_DIFFICULTY: &str = "difficulty";
pub const FIELD_AC_RATE: &str = "acRate";
pub const FIELD_TAGS: &str = "topicTags";

/// Problem difficulty, ordered Easy < Medium < Hard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Ordinal rank: Easy = 1, Medium = 2, Hard = 3
    pub fn ordinal(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Sort key for an optional difficulty. Missing difficulty ranks 0, before Easy.
    pub fn sort_rank(difficulty: Option<Difficulty>) -> u8 {
        difficulty.map_or(0, Difficulty::ordinal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected: Easy, Medium, Hard)",
                other
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw record as delivered by the ingestion collaborator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "frontendQuestionId", default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(rename = "titleSlug", default)]
    pub title_slug: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(rename = "acRate", default)]
    pub ac_rate: Option<Value>,
    #[serde(rename = "topicTags", default)]
    pub topic_tags: Option<Value>,
}

/// A normalized catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    id: u32,
    title: String,
    slug: String,
    difficulty: Option<Difficulty>,
    acceptance_rate: f64,
    tags: BTreeSet<String>,
}

impl ItemRecord {
    /// Construct a record, validating id, title and acceptance rate.
    ///
    /// Duplicate tags collapse. The slug is derived from the title.
    pub fn new<I, S>(
        id: u32,
        title: impl Into<String>,
        difficulty: Option<Difficulty>,
        acceptance_rate: f64,
        tags: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        if id == 0 {
            bail_malformed!(0, FIELD_ID, "must be a positive integer");
        }
        if title.trim().is_empty() {
            bail_malformed!(0, FIELD_TITLE, "must not be empty");
        }
        if !acceptance_rate.is_finite() || !(0.0..=100.0).contains(&acceptance_rate) {
            bail_malformed!(
                0,
                FIELD_AC_RATE,
                format!("{} is outside [0, 100]", acceptance_rate)
            );
        }

        Ok(ItemRecord {
            id,
            slug: slug::slugify(&title),
            title,
            difficulty,
            acceptance_rate,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Replace the derived slug with the one supplied by the source
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if !slug.trim().is_empty() {
            self.slug = slug;
        }
        self
    }

    /// Rewrite aliased tags to their canonical names, collapsing any duplicates
    pub fn with_tag_aliases(mut self, aliases: &HashMap<String, String>) -> Self {
        if aliases.is_empty() {
            return self;
        }
        self.tags = std::mem::take(&mut self.tags)
            .into_iter()
            .map(|tag| aliases.get(&tag).cloned().unwrap_or(tag))
            .collect();
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn acceptance_rate(&self) -> f64 {
        self.acceptance_rate
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Number of tags shared with another record
    pub fn shared_tag_count(&self, other: &ItemRecord) -> usize {
        // Walk the smaller set
        let (small, large) = if self.tags.len() <= other.tags.len() {
            (&self.tags, &other.tags)
        } else {
            (&other.tags, &self.tags)
        };
        small.iter().filter(|t| large.contains(*t)).count()
    }
}

impl TryFrom<RawRecord> for ItemRecord {
    type Error = TagpathError;

    /// Convert a raw record. Errors carry index 0; callers that know the
    /// record position re-tag with [`TagpathError::at_index`].
    fn try_from(raw: RawRecord) -> Result<Self> {
        let id = parse_id(raw.id.as_ref())?;
        let title = match raw.title.as_ref() {
            Some(Value::String(s)) => s.clone(),
            Some(other) => bail_malformed!(0, FIELD_TITLE, format!("is not a string: {}", other)),
            None => bail_malformed!(0, FIELD_TITLE, "is missing"),
        };
        let difficulty = parse_difficulty(raw.difficulty.as_ref())?;
        let acceptance_rate = parse_ac_rate(raw.ac_rate.as_ref())?;
        let tags = parse_tags(raw.topic_tags.as_ref())?;

        let record = ItemRecord::new(id, title, Some(difficulty), acceptance_rate, tags)?;
        match raw.title_slug {
            Some(Value::String(slug)) => Ok(record.with_slug(slug)),
            Some(Value::Null) | None => Ok(record),
            Some(other) => bail_malformed!(0, FIELD_SLUG, format!("is not a string: {}", other)),
        }
    }
}

fn parse_id(value: Option<&Value>) -> Result<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
        None => bail_malformed!(0, FIELD_ID, "is missing"),
    };

    match parsed.and_then(|n| u32::try_from(n).ok()) {
        Some(id) if id > 0 => Ok(id),
        _ => bail_malformed!(
            0,
            FIELD_ID,
            format!("is not a positive integer: {}", value.map_or(Value::Null, Clone::clone))
        ),
    }
}

fn parse_difficulty(value: Option<&Value>) -> Result<Difficulty> {
    match value {
        Some(Value::String(s)) => s
            .parse()
            .map_err(|reason: String| TagpathError::malformed(0, FIELD_DIFFICULTY, reason)),
        Some(other) => bail_malformed!(
            0,
            FIELD_DIFFICULTY,
            format!("is not a string: {}", other)
        ),
        None => bail_malformed!(0, FIELD_DIFFICULTY, "is missing"),
    }
}

fn parse_ac_rate(value: Option<&Value>) -> Result<f64> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| TagpathError::malformed(0, FIELD_AC_RATE, "is not a finite number")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| TagpathError::malformed(0, FIELD_AC_RATE, format!("is not numeric: {:?}", s))),
        Some(other) => bail_malformed!(0, FIELD_AC_RATE, format!("is not numeric: {}", other)),
        None => bail_malformed!(0, FIELD_AC_RATE, "is missing"),
    }
}

/// Tags come as `[{"name": ...}, ...]`; only the name is kept.
fn parse_tags(value: Option<&Value>) -> Result<Vec<String>> {
    let entries = match value {
        Some(Value::Array(entries)) => entries,
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(other) => bail_malformed!(0, FIELD_TAGS, format!("is not a list: {}", other)),
    };

    entries
        .iter()
        .map(|entry| match entry.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.clone()),
            _ => Err(TagpathError::malformed(
                0,
                FIELD_TAGS,
                format!("entry has no tag name: {}", entry),
            )),
        })
        .collect()
}
