//! Comic retrieval from the xkcd website
//!
//! This module contains everything that talks to xkcd.com:
//! - The `Comic` value and the tagged parse result
//! - HTML extraction for comic pages and the archive listing
//! - The HTTP fetcher
//! - The title → number name index

mod comic;
mod fetcher;
mod index;
mod parser;

pub use comic::{
    random_number, Comic, ParseAnomaly, ParsedComic, NO_ALT_TEXT, NO_TITLE, UNKNOWN_NUMBER,
};
pub use fetcher::{build_http_client, ComicFetcher, FetchResult};
pub use index::{IndexSnapshot, NameIndex};
pub use parser::{parse_archive, parse_comic_page, ArchiveEntry, PageLayout};
