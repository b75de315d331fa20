use serde::de::DeserializeOwned;

/// Parse a JSONL document line by line, skipping blank and malformed lines.
/// The request log is append-only and best-effort, so a torn tail line must
/// not poison listing.
pub(crate) fn parse_jsonl_tolerant<T>(raw: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str::<T>(line).ok())
        .collect()
}
