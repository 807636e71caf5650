use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;

/// Decode a stringified host value. `None` stands for a value JSON cannot
/// represent (`undefined`, functions).
pub fn parse_payload<T: DeserializeOwned>(text: Option<String>) -> anyhow::Result<T> {
    let text = text.ok_or_else(|| anyhow!("missing host payload"))?;
    serde_json::from_str(&text).with_context(|| format!("malformed host payload {text}"))
}
