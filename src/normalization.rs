use serde::{Deserialize, Deserializer};

/// The submitter recorded when none is given.
pub const ANONYMOUS: &str = "anonymous";

/// Returns the submitter ID to store: the given one, or
/// [`ANONYMOUS`] when it is missing or blank.
pub fn submitter_or_anonymous(submitter: Option<&str>) -> String {
    match submitter {
        Some(s) if !s.trim().is_empty() => s.to_owned(),
        _ => ANONYMOUS.to_owned(),
    }
}

/// Deserializes an optional `String`, treating blank values as absent.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let o: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(o.filter(|s| !s.trim().is_empty()))
}
