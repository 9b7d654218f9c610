use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One catalog entry as shown in the result list.
///
/// Every field is optional. Catalog payloads vary by endpoint, so a missing
/// or wrong-typed field reads as "not present" instead of failing the whole
/// response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookRecord {
    /// Provider key, e.g. "/works/OL27448W"
    pub key: Option<String>,
    pub title: Option<String>,
    pub author_names: Vec<String>,
    pub subjects: Vec<String>,
    pub first_publish_year: Option<i64>,
}

impl BookRecord {
    pub fn from_value(value: &Value) -> Self {
        let author_names = match string_list(value.get("author_name")) {
            names if !names.is_empty() => names,
            // Subject listings carry `authors: [{ "name": .. }]` instead
            _ => value
                .get("authors")
                .and_then(Value::as_array)
                .map(|authors| {
                    authors
                        .iter()
                        .filter_map(|a| a.get("name").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        };

        Self {
            key: string_field(value.get("key")),
            title: string_field(value.get("title")),
            author_names,
            subjects: string_list(value.get("subject")),
            first_publish_year: value.get("first_publish_year").and_then(whole_number),
        }
    }
}

impl<'de> Deserialize<'de> for BookRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Integer, or a float with no fractional part (`1954.0`).
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
