//! Field normalization: URL resolution and multi-value splitting.

use url::Url;

/// Resolve an `href` found on `page_url` to an absolute URL.
///
/// - already absolute (has a scheme): returned unchanged
/// - `//host/path`: the page's scheme is prepended
/// - `/path`: joined directly to the page origin
/// - `path`: joined to the origin with a single inserted `/`
///
/// Returns `None` for blank input.
pub fn resolve_against_origin(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    if href.starts_with("//") {
        return Some(format!("{}:{}", page_url.scheme(), href));
    }

    let origin = page_url.origin().ascii_serialization();
    if href.starts_with('/') {
        Some(format!("{}{}", origin, href))
    } else {
        Some(format!("{}/{}", origin, href))
    }
}

/// Split a comma-separated hint into trimmed, non-empty pieces in source order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prefix `https://` onto scheme-less input such as `example.com`.
///
/// Input that already names a scheme is returned trimmed but otherwise
/// untouched, so `ftp://host` stays `ftp://host` for the caller to reject.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
