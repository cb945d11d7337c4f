//! Book model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

/// Publication year as sent by clients: either a number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl YearValue {
    /// Resolve to a year. Zero, empty and non-numeric values count as not supplied.
    ///
    /// Strings are read like `parseInt`: optional sign, then leading digits,
    /// ignoring whatever follows (`"2023 edition"` is 2023).
    pub fn to_year(&self) -> Option<i32> {
        let year = match self {
            YearValue::Number(n) => i32::try_from(*n).ok()?,
            YearValue::Text(s) => i32::try_from(parse_leading_int(s)?).ok()?,
        };
        (year != 0).then_some(year)
    }
}

/// Read an integer the way `parseInt` does: optional sign, then leading digits
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub published_year: Option<YearValue>,
}

/// Update book request; every field is optional
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub published_year: Option<YearValue>,
}

/// Validated fields for a new record
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
}

/// Fields to overwrite on an existing record; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

impl From<&UpdateBook> for BookChanges {
    fn from(data: &UpdateBook) -> Self {
        Self {
            title: non_empty(data.title.as_deref()),
            author: non_empty(data.author.as_deref()),
            published_year: data.published_year.as_ref().and_then(YearValue::to_year),
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Book list query
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only books whose title contains this text (case-sensitive)
    pub title: Option<String>,
}

/// Confirmation returned after a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}
