//! Typed view of the catalog's `volumes` payload.
//!
//! The upstream document is decoded once here. Each entry of `items` is
//! decoded on its own so that a single malformed volume does not take the
//! whole page down with it: entries without `volumeInfo` or a string title
//! are logged and skipped. Optional fields of the wrong type read as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: CatalogItem,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub title: String,
    #[serde(default, deserialize_with = "string_entries")]
    pub authors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub page_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub info_link: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keeps the string entries of an array; anything else is absent.
fn string_entries<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let strings: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    Ok((!strings.is_empty()).then_some(strings))
}

/// Decodes a catalog response body into its usable items.
///
/// A body without `items` is an empty result, not an error. The body itself
/// must be a JSON object.
pub fn parse_volumes(body: &str) -> Result<Vec<CatalogItem>, serde_json::Error> {
    let response: VolumesResponse = serde_json::from_str(body)?;

    let items = response
        .items
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<Volume>(raw) {
            Ok(volume) => Some(volume.volume_info),
            Err(e) => {
                warn!("Skipping malformed catalog item {}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(items)
}
