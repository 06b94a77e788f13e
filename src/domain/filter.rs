// src/domain/filter.rs

use crate::domain::Record;
use std::error::Error;
use std::fmt;

/// A query string was present but was not `key=v1,v2,...`.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedUrlError {
    pub query: String,
}

impl fmt::Display for MalformedUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed id filter in query string: {:?}", self.query)
    }
}

impl Error for MalformedUrlError {}

/// Extracts the identifier allow-list from a page URL.
///
/// `Ok(None)` means the URL has no query and nothing should be filtered.
/// Only the first parameter counts and its name is ignored, so
/// `?ids=1,2` and `?show=1,2` are the same filter.
pub fn parse_allow_list(page_url: &str) -> Result<Option<Vec<String>>, MalformedUrlError> {
    let Some((_, query)) = page_url.split_once('?') else {
        return Ok(None);
    };
    let query = query.split('#').next().unwrap_or("");
    let first = query.split('&').next().unwrap_or("");

    // The value runs from the first `=` to the next one, if any.
    let Some(raw) = first.split('=').nth(1) else {
        return Err(MalformedUrlError {
            query: query.to_string(),
        });
    };

    // `raw` holds no `=` or `&`, so it decodes as a single bare key.
    let value = url::form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(v, _)| v.into_owned())
        .unwrap_or_default();

    let ids = value
        .split(',')
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Some(ids))
}

/// Narrows `records` to the ids named in `page_url`, keeping source order.
/// A malformed filter is logged and the full set is shown instead.
pub fn filter_by_ids(records: &[Record], page_url: &str) -> Vec<Record> {
    let allow_list = match parse_allow_list(page_url) {
        Ok(Some(ids)) => ids,
        Ok(None) => return records.to_vec(),
        Err(e) => {
            tracing::warn!(url = page_url, error = %e, "ignoring id filter");
            return records.to_vec();
        }
    };

    records
        .iter()
        .filter(|r| allow_list.iter().any(|id| *id == r.primary_id))
        .cloned()
        .collect()
}
