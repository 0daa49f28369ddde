//! DOM queries over fetched markup.
//!
//! Attribute names are lowercased by the HTML parser, and attribute values are
//! compared ASCII case-insensitively, so `<META PROPERTY="OG:Title">` and
//! `<meta content=".." property="og:title">` are the same tag.

use scraper::{ElementRef, Html, Selector};

/// A parsed page that answers metadata lookups.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parse markup. Malformed HTML never fails; the parser recovers.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// `content` of the first `<meta>` whose `property` or `name` equals `key`.
    ///
    /// A tag with an empty `content` counts as absent and the search continues.
    pub fn meta_content(&self, key: &str) -> Option<String> {
        let selector = Selector::parse("meta[content]").ok()?;
        self.html
            .select(&selector)
            .filter(|el| {
                attr_matches(el, "property", key) || attr_matches(el, "name", key)
            })
            .filter_map(|el| el.value().attr("content"))
            .find(|content| !content.is_empty())
            .map(str::to_string)
    }

    /// Text of the first `<title>`, trimmed. Blank titles count as absent.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// `href` of the first `<link rel="icon">` or `<link rel="shortcut icon">`.
    pub fn icon_href(&self) -> Option<String> {
        let selector = Selector::parse("link[rel][href]").ok()?;
        self.html
            .select(&selector)
            .filter(|el| el.value().attr("rel").is_some_and(is_icon_rel))
            .filter_map(|el| el.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty())
            .map(str::to_string)
    }
}

fn attr_matches(el: &ElementRef<'_>, attr: &str, expected: &str) -> bool {
    el.value()
        .attr(attr)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
}

/// `icon` or `shortcut icon`, any case and spacing. `apple-touch-icon` does not count.
fn is_icon_rel(rel: &str) -> bool {
    let tokens: Vec<String> = rel
        .split_ascii_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    matches!(
        tokens.iter().map(String::as_str).collect::<Vec<_>>().as_slice(),
        ["icon"] | ["shortcut", "icon"]
    )
}
