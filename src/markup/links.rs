// src/markup/links.rs

//! Internal wiki link target resolution.
//!
//! Maps a `[[...]]` link target to an absolute URL. Targets may address a
//! sister community (`w:c:<community>:Page`), MediaWiki (`mw:Page`),
//! Wikipedia (`wikipedia:Page` / `wp:Page`), or, by default, the community
//! wiki itself.

use crate::error::{AppError, Result};

const COMMUNITY_HOST: &str = "https://community.fandom.com/wiki/";
const MEDIAWIKI_HOST: &str = "https://mediawiki.org/wiki/";
const WIKIPEDIA_HOST: &str = "https://en.wikipedia.org/wiki/";

/// Resolve a wiki link target to an absolute URL.
///
/// The full original target (prefix included) is percent-encoded and
/// appended to the host chosen by its addressing scheme.
///
/// # Examples
/// ```
/// use herald::markup::links::resolve;
///
/// assert_eq!(
///     resolve("Main Page").unwrap(),
///     "https://community.fandom.com/wiki/Main_Page"
/// );
/// ```
pub fn resolve(target: &str) -> Result<String> {
    Ok(format!("{}{}", host_for(target)?, encode_target(target)))
}

/// Pick the destination host for a target, checking prefixes in order.
///
/// A recognized prefix with a missing community or page segment is a
/// malformed target, not a default-host link.
fn host_for(target: &str) -> Result<String> {
    if let Some(rest) = target.strip_prefix("w:c:") {
        let (community, page) = rest
            .split_once(':')
            .ok_or_else(|| AppError::MalformedLink(target.to_string()))?;
        if community.is_empty() || page.is_empty() {
            return Err(AppError::MalformedLink(target.to_string()));
        }
        return Ok(format!("https://{community}.fandom.com/wiki/"));
    }

    if let Some(rest) = target.strip_prefix("mw:") {
        return if rest.is_empty() {
            Err(AppError::MalformedLink(target.to_string()))
        } else {
            Ok(MEDIAWIKI_HOST.to_string())
        };
    }

    for prefix in ["wikipedia:", "wp:"] {
        if let Some(rest) = target.strip_prefix(prefix) {
            return if rest.is_empty() {
                Err(AppError::MalformedLink(target.to_string()))
            } else {
                Ok(WIKIPEDIA_HOST.to_string())
            };
        }
    }

    Ok(COMMUNITY_HOST.to_string())
}

/// Percent-encode a link target for URL embedding.
///
/// Wiki page names use `_` for spaces and keep `/` as a literal subpage
/// separator, so both are restored after encoding. `~` is the one byte the
/// encoder passes through that wiki URLs still want escaped.
fn encode_target(target: &str) -> String {
    urlencoding::encode(target)
        .replace("%20", "_")
        .replace("%2F", "/")
        .replace('~', "%7E")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host_with_space() {
        assert_eq!(
            resolve("Main Page").unwrap(),
            "https://community.fandom.com/wiki/Main_Page"
        );
    }

    #[test]
    fn test_cross_community() {
        assert_eq!(
            resolve("w:c:muppet:Kermit").unwrap(),
            "https://muppet.fandom.com/wiki/w%3Ac%3Amuppet%3AKermit"
        );
    }

    #[test]
    fn test_mediawiki() {
        assert_eq!(
            resolve("mw:Manual:Pywikibot").unwrap(),
            "https://mediawiki.org/wiki/mw%3AManual%3APywikibot"
        );
    }

    #[test]
    fn test_wikipedia_long_and_short_prefix() {
        assert_eq!(
            resolve("wp:Kermit_the_Frog").unwrap(),
            "https://en.wikipedia.org/wiki/wp%3AKermit_the_Frog"
        );
        assert_eq!(
            resolve("wikipedia:Kermit the Frog").unwrap(),
            "https://en.wikipedia.org/wiki/wikipedia%3AKermit_the_Frog"
        );
    }

    #[test]
    fn test_subpage_slash_stays_literal() {
        assert_eq!(
            resolve("Help:Links/Interwiki").unwrap(),
            "https://community.fandom.com/wiki/Help%3ALinks/Interwiki"
        );
    }

    #[test]
    fn test_punctuation_is_escaped() {
        assert_eq!(
            resolve("What's Up! (draft) ~notes~ 2*2").unwrap(),
            "https://community.fandom.com/wiki/What%27s_Up%21_%28draft%29_%7Enotes%7E_2%2A2"
        );
    }

    #[test]
    fn test_malformed_targets() {
        assert!(matches!(resolve("mw:"), Err(AppError::MalformedLink(_))));
        assert!(matches!(resolve("wp:"), Err(AppError::MalformedLink(_))));
        assert!(matches!(
            resolve("w:c:muppet"),
            Err(AppError::MalformedLink(_))
        ));
        assert!(matches!(
            resolve("w:c::Kermit"),
            Err(AppError::MalformedLink(_))
        ));
        assert!(matches!(
            resolve("w:c:muppet:"),
            Err(AppError::MalformedLink(_))
        ));
    }
}
