//! Post summary and post document models

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::FrontMatter;
use crate::helpers::parse_date;

/// Listing entry for a post, as found in the index document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Unique identifier, also the post's file stem
    pub id: String,

    pub title: String,

    /// Publication date
    #[serde(deserialize_with = "deserialize_date", serialize_with = "serialize_date")]
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Accepts `YYYY-MM-DD` or a full ISO-8601 date-time
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date `{}`", raw)))
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

/// Full content of one post: header metadata plus markdown body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDocument {
    pub id: String,
    pub front_matter: FrontMatter,
    /// Markdown source with the header removed
    pub body: String,
}

impl PostDocument {
    /// Parse raw document text fetched for `id`
    pub fn parse(id: &str, raw: &str, fallback_title: &str) -> Self {
        let (front_matter, body) = FrontMatter::parse_with_fallback(raw, fallback_title);
        Self {
            id: id.to_string(),
            front_matter,
            body,
        }
    }

    pub fn title(&self) -> &str {
        self.front_matter.title()
    }

    /// Raw `date` value as written in the header
    pub fn date(&self) -> Option<&str> {
        self.front_matter.get("date")
    }

    pub fn author(&self) -> Option<&str> {
        self.front_matter.author()
    }
}
