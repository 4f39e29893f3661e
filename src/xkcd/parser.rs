//! HTML parser for comic pages and the archive listing
//!
//! This module handles parsing HTML content to extract:
//! - The comic image, title and alt text (from `#comic img`)
//! - The comic number (from the canonical URL in a `meta` tag)
//! - Title → number pairs from the archive page

use crate::xkcd::comic::{Comic, ParseAnomaly, ParsedComic, NO_ALT_TEXT, NO_TITLE, UNKNOWN_NUMBER};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Page structure assumptions used when reading a comic page
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Zero-based position of the `meta` tag whose `content` is the canonical URL
    pub canonical_meta_position: usize,

    /// Image URL substituted when no comic image is found
    pub unavailable_image: String,
}

/// One comic listed on the archive page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Lowercased, whitespace-normalised link text
    pub title: String,

    /// Comic number taken from the link target
    pub number: i32,
}

/// Parses a comic page into a `ParsedComic`
///
/// # Extraction Rules
///
/// | Field | Source | Fallback |
/// |-------|--------|----------|
/// | title | `alt` of `#comic img` | `NO_TITLE` |
/// | alt text | `title` of `#comic img` | `NO_ALT_TEXT` |
/// | image URL | `src` of `#comic img` | `layout.unavailable_image` |
/// | number | second-to-last `/` segment of the Nth `meta` `content` | `UNKNOWN_NUMBER` |
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `page_url` - The URL the page was fetched from, for resolving relative image sources
/// * `layout` - Which `meta` tag to read and what image to fall back to
///
/// # Example
///
/// ```
/// use xkcd_bot::xkcd::{parse_comic_page, PageLayout};
/// use url::Url;
///
/// let html = r#"<html><head><meta charset="utf-8"><meta name="a"><meta name="b">
///     <meta property="og:url" content="https://xkcd.com/353/"></head>
///     <body><div id="comic"><img src="//imgs.xkcd.com/comics/python.png" alt="Python" title="Hover"></div></body></html>"#;
/// let layout = PageLayout {
///     canonical_meta_position: 3,
///     unavailable_image: "https://imgs.xkcd.com/comics/not_available.png".to_string(),
/// };
/// let parsed = parse_comic_page(html, &Url::parse("https://xkcd.com/353").unwrap(), &layout);
/// assert!(parsed.is_complete());
/// assert_eq!(parsed.comic().number, 353);
/// ```
pub fn parse_comic_page(html: &str, page_url: &Url, layout: &PageLayout) -> ParsedComic {
    let document = Html::parse_document(html);
    let mut anomalies = Vec::new();

    let number = extract_number(&document, layout.canonical_meta_position, &mut anomalies);

    let image = select_first(&document, "#comic img");
    let (title, alt_text, image_url) = match image {
        Some(image) => {
            let element = image.value();

            let title = element.attr("alt").map(str::to_string).unwrap_or_else(|| {
                anomalies.push(ParseAnomaly::MissingTitle);
                NO_TITLE.to_string()
            });

            let alt_text = element.attr("title").map(str::to_string).unwrap_or_else(|| {
                anomalies.push(ParseAnomaly::MissingAltText);
                NO_ALT_TEXT.to_string()
            });

            let image_url = element
                .attr("src")
                .and_then(|src| resolve_image(src, page_url))
                .unwrap_or_else(|| {
                    anomalies.push(ParseAnomaly::MissingImage);
                    layout.unavailable_image.clone()
                });

            (title, alt_text, image_url)
        }
        None => {
            anomalies.push(ParseAnomaly::MissingImage);
            (
                NO_TITLE.to_string(),
                NO_ALT_TEXT.to_string(),
                layout.unavailable_image.clone(),
            )
        }
    };

    ParsedComic::from_parts(
        Comic {
            number,
            title,
            alt_text,
            image_url,
        },
        anomalies,
    )
}

/// Parses the archive listing into title → number entries
///
/// Every `<a>` whose `href` looks like `/<number>/` becomes an entry; all other
/// anchors (navigation, external links, anchors without href) are skipped.
/// Entries are returned in document order, so later duplicates come last.
pub fn parse_archive(html: &str) -> Vec<ArchiveEntry> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|link| {
            let number = link.value().attr("href").and_then(parse_archive_href)?;
            let title = normalize_title(&link.text().collect::<String>());
            Some(ArchiveEntry { title, number })
        })
        .collect()
}

/// Reads the comic number from the canonical URL `meta` tag
fn extract_number(document: &Html, position: usize, anomalies: &mut Vec<ParseAnomaly>) -> i32 {
    let Ok(selector) = Selector::parse("meta") else {
        anomalies.push(ParseAnomaly::MissingCanonicalMeta { position });
        return UNKNOWN_NUMBER;
    };

    let Some(meta) = document.select(&selector).nth(position) else {
        anomalies.push(ParseAnomaly::MissingCanonicalMeta { position });
        return UNKNOWN_NUMBER;
    };

    let content = meta.value().attr("content").unwrap_or_default();
    match number_from_canonical(content) {
        Some(number) => number,
        None => {
            anomalies.push(ParseAnomaly::MalformedCanonicalUrl {
                content: content.to_string(),
            });
            UNKNOWN_NUMBER
        }
    }
}

/// `https://xkcd.com/353/` → 353
fn number_from_canonical(content: &str) -> Option<i32> {
    let segments: Vec<&str> = content.split('/').collect();
    if segments.len() < 2 {
        return None;
    }
    segments[segments.len() - 2].parse().ok()
}

/// `/353/` → 353, anything else → None
fn parse_archive_href(href: &str) -> Option<i32> {
    href.split('/')
        .nth(1)?
        .parse::<i32>()
        .ok()
        .filter(|number| *number > 0)
}

/// Resolves an image `src` to an absolute URL
///
/// xkcd serves protocol-relative sources (`//imgs.xkcd.com/...`); those always
/// get `https:`. Anything else is resolved against the page URL.
fn resolve_image(src: &str, page_url: &Url) -> Option<String> {
    let src = src.trim();

    if src.is_empty() {
        return None;
    }

    if src.starts_with("//") {
        return Some(format!("https:{}", src));
    }

    page_url.join(src).ok().map(|url| url.to_string())
}

fn normalize_title(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}
