// src/markup/inline.rs

//! Inline style rewriting for a single body line.
//!
//! Converts wikitext bold (`'''`) and italic (`''`) runs plus bracket
//! links into Discord markdown. Style runs are handled with an explicit
//! token scan rather than in-band placeholder characters, so no input
//! byte can collide with the intermediate state.

use regex::{Captures, Regex};

use crate::markup::links;

/// Rewrites inline wikitext styling on bullet-stripped lines.
pub struct InlineRewriter {
    /// `[url display text]`
    external: Regex,
    /// `[[target]]` or `[[target|display text]]`
    internal: Regex,
}

/// One scanned segment of a line: literal text or a style delimiter.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Text(String),
    BoldMark,
    ItalicMark,
}

impl InlineRewriter {
    pub fn new() -> Self {
        Self {
            external: Regex::new(r"\[(https?://[^\s\]]+) +([^\]]+)\]").unwrap(),
            internal: Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]*))?\]\]").unwrap(),
        }
    }

    /// Convert one line of wikitext styling to Discord markdown.
    ///
    /// Order matters: style runs first, then external bracket links, then
    /// internal double-bracket links.
    pub fn rewrite(&self, line: &str) -> String {
        let styled = rewrite_styles(line);
        let external = self.external.replace_all(&styled, "[$2]($1)");
        self.internal
            .replace_all(&external, |caps: &Captures| self.rewrite_internal(caps))
            .into_owned()
    }

    /// Rewrite one `[[...]]` occurrence, leaving it untouched when the
    /// target cannot be resolved.
    fn rewrite_internal(&self, caps: &Captures) -> String {
        let target = &caps[1];
        let display = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(target);
        match links::resolve(target) {
            Ok(url) => format!("[{display}]({url})"),
            Err(err) => {
                log::warn!("leaving wiki link unresolved: {err}");
                caps[0].to_string()
            }
        }
    }
}

impl Default for InlineRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace paired `'''`/`''` runs with `**`/`_` delimiters.
///
/// Marks pair up left to right; a trailing unpaired mark renders back as
/// its literal quote run. All bold pairs collapse before any italic pair,
/// so a combined `'''''` run yields mirrored `**_text**_` delimiters, not
/// nested ones.
fn rewrite_styles(line: &str) -> String {
    let tokens = tokenize(line);

    let bold_total = tokens.iter().filter(|t| **t == Token::BoldMark).count();
    let italic_total = tokens.iter().filter(|t| **t == Token::ItalicMark).count();
    let mut bold_seen = 0;
    let mut italic_seen = 0;

    let mut out = String::with_capacity(line.len());
    for token in tokens {
        match token {
            Token::Text(s) => out.push_str(&s),
            Token::BoldMark => {
                bold_seen += 1;
                if bold_seen == bold_total && bold_total % 2 == 1 {
                    out.push_str("'''");
                } else {
                    out.push_str("**");
                }
            }
            Token::ItalicMark => {
                italic_seen += 1;
                if italic_seen == italic_total && italic_total % 2 == 1 {
                    out.push_str("''");
                } else {
                    out.push('_');
                }
            }
        }
    }
    out
}

/// Split a line into text and style-mark tokens.
///
/// A run of n apostrophes decomposes as n/3 bold marks, then an italic
/// mark if two remain, or a literal apostrophe if one does. This mirrors
/// longest-delimiter-first substitution: `'''''` is bold + italic.
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' {
            text.push(c);
            continue;
        }

        let mut run = 1usize;
        while chars.peek() == Some(&'\'') {
            chars.next();
            run += 1;
        }
        if run == 1 {
            text.push('\'');
            continue;
        }

        if !text.is_empty() {
            tokens.push(Token::Text(std::mem::take(&mut text)));
        }
        for _ in 0..run / 3 {
            tokens.push(Token::BoldMark);
        }
        match run % 3 {
            2 => tokens.push(Token::ItalicMark),
            1 => text.push('\''),
            _ => {}
        }
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}
