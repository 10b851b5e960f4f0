// src/board/listing.rs

//! Forum listing parsing.
//!
//! The board API returns an HTML fragment in which each visible thread is
//! a `<h4><a href=".../Thread:<id>">title</a></h4>` heading. Titles come
//! back entity-decoded from the HTML parser.

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::Thread;

const HEADING_SELECTOR: &str = "h4 > a";
const THREAD_HREF_PATTERN: &str = r"/Thread:(\d+)$";

/// Parse a listing fragment and return the newest (strict maximum id)
/// thread, with an empty body.
///
/// Fails when the fragment contains no thread headings; the caller must
/// treat that as a transient condition and not proceed to rewriting.
pub fn newest_thread(listing_html: &str) -> Result<Thread> {
    let fragment = Html::parse_fragment(listing_html);
    let heading = Selector::parse(HEADING_SELECTOR)
        .map_err(|e| AppError::selector(HEADING_SELECTOR, format!("{e:?}")))?;
    let href_pattern =
        Regex::new(THREAD_HREF_PATTERN).map_err(|e| AppError::listing(e.to_string()))?;

    let mut newest: Option<Thread> = None;
    for anchor in fragment.select(&heading) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(caps) = href_pattern.captures(href) else {
            continue;
        };
        let Ok(id) = caps[1].parse::<u64>() else {
            continue;
        };

        if newest.as_ref().map_or(true, |t| id > t.id) {
            let title: String = anchor.text().collect::<String>().trim().to_string();
            newest = Some(Thread::new(id, title));
        }
    }

    newest.ok_or_else(|| AppError::listing("no threads found"))
}
