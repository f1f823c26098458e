use serde_json::{Map, Value};

/// Decodes a `k=v&k2=v2` query string into a filter mapping ready for the
/// normalizer. Malformed pairs are skipped rather than rejected.
pub fn parse_query_string(query: &str) -> Map<String, Value> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if !key.is_empty() => Some((
                    urlencoding::decode(key).ok()?.into_owned(),
                    Value::String(urlencoding::decode(value).ok()?.into_owned()),
                )),
                _ => None,
            }
        })
        .collect()
}
