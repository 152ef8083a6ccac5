use crate::error::{AppError, AppResult};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Ordered list of short string tags, stored as a JSON array.
///
/// Elements are trimmed, empty elements dropped, and a `,` inside an element
/// is rejected so the list always renders losslessly as a comma-joined string.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
#[serde(transparent)]
pub struct TagList(pub Vec<String>);

impl TagList {
    pub fn parse<I, S>(items: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Vec::new();
        for item in items {
            let tag = item.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            if tag.contains(',') {
                return Err(AppError::ValidationError(format!(
                    "List element must not contain ',': {tag}"
                )));
            }
            tags.push(tag.to_string());
        }
        Ok(Self(tags))
    }

    /// Exact element match, ignoring ASCII case.
    pub fn contains_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.0.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

/// Delivery slot name to hours window, e.g. `"morning" -> "6-9"`.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
#[serde(transparent)]
pub struct DeliverySlots(pub BTreeMap<String, String>);
