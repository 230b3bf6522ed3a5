use serde::{Deserialize, Deserializer};

/// Parses an optional integer query parameter, treating anything that is not
/// an integer as absent
///
/// `?page=abc` behaves exactly like a request without `page`.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accepts either a JSON integer or a string holding one
///
/// Quiz clients send the category id in both forms.
pub fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    to_i32(IntOrString::deserialize(deserializer)?)
}

/// Optional variant of [`int_or_numeric_string`]; a missing key or `null` is `None`
pub fn optional_int_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => to_i32(value).map(Some),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Optional free-text field that also accepts a bare JSON number
///
/// `5` is read as `"5"`; a missing key or `null` is `None`.
pub fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }),
    )
}

fn to_i32<E: serde::de::Error>(value: IntOrString) -> Result<i32, E> {
    let value = match value {
        IntOrString::Int(v) => v,
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("Wrong value {s}, can not parse to integer")))?,
    };
    i32::try_from(value).map_err(|_| E::custom(format!("{value} is out of range")))
}
