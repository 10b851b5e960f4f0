// src/markup/body.rs

//! Thread body assembly.
//!
//! Only list-item lines are announced. Each line starting with the `*`
//! bullet marker is stripped, rewritten, and re-bulleted with `•`; every
//! other line is dropped.

use crate::markup::InlineRewriter;

const BULLET_MARKER: char = '*';
const BULLET_GLYPH: char = '•';

/// Assemble the announcement body from a raw thread body.
///
/// Returns an empty string when no line carries the bullet marker; an
/// empty body is still a valid announcement.
pub fn assemble(raw: &str, rewriter: &InlineRewriter) -> String {
    let mut out = String::new();
    for line in raw.split('\n') {
        if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
            out.push(BULLET_GLYPH);
            out.push_str(&rewriter.rewrite(rest));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_bullets_drops_prose() {
        let raw = "*first\nnot a bullet\n*second";
        assert_eq!(assemble(raw, &InlineRewriter::new()), "•first\n•second\n");
    }

    #[test]
    fn test_empty_when_no_bullets() {
        let raw = "Intro paragraph\n\nClosing remarks";
        assert_eq!(assemble(raw, &InlineRewriter::new()), "");
    }

    #[test]
    fn test_strips_exactly_one_marker() {
        // A second `*` belongs to the content, not the marker.
        assert_eq!(assemble("**nested", &InlineRewriter::new()), "•*nested\n");
    }

    #[test]
    fn test_rewrites_styles_per_line() {
        let raw = "*'''Fixed''' the [[Main Page|front page]]\nskipped\n*see [https://example.com notes]";
        assert_eq!(
            assemble(raw, &InlineRewriter::new()),
            "•**Fixed** the [front page](https://community.fandom.com/wiki/Main_Page)\n\
             •see [notes](https://example.com)\n"
        );
    }

    #[test]
    fn test_crlf_is_not_special() {
        // Bodies are split on line feeds only; a stray `\r` stays in the line.
        let raw = "*first\r\n*second";
        assert_eq!(assemble(raw, &InlineRewriter::new()), "•first\r\n•second\n");
    }
}
