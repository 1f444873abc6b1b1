//! Query string access that never rejects a request.
//!
//! `Query<T>` fails the whole request on a repeated key; listing pages read
//! the first occurrence instead and treat anything unreadable as absent.

use axum::http::Uri;

/// First value of `name` in the query string, percent-decoded.
pub fn first_query_value(uri: &Uri, name: &str) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
