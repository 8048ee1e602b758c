//! Wrapping of bare URLs in `[url=...]` tags.
//!
//! Scanning runs over the tag token stream with two states. In `Scanning`,
//! text tokens are searched for URLs. An opening `[url]` or `[noparse]` tag
//! switches to `InsideExistingTag` until the matching closing tag, so text that
//! is already a link (or is meant to be literal) is never wrapped again.
//! Replacement happens after every match has been found.

use tracing::trace;

use super::label::display_label;
use super::token::{TagName, Token, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InsideExistingTag(TagName),
}

/// A bare URL found in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    start: usize,
    end: usize,
    url: String,
    label: String,
}

impl UrlMatch {
    fn at(word: &str, start: usize) -> Option<Self> {
        let label = display_label(word)?;
        Some(Self {
            start,
            end: start + word.len(),
            url: word.to_owned(),
            label,
        })
    }

    /// Byte offset of the first character of the URL.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the URL.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The URL as written.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Short label derived from the host.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Renders `[url=<url>]<label>[/url]`.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!("[url={}]{}[/url]", self.url, self.label)
    }
}

/// Finds bare URLs, left to right, without overlap.
///
/// A URL is a word starting with `http://` or `https://` that has a host. The
/// word ends at the next whitespace, markup tag or square bracket, since a
/// bracket cannot appear inside a `[url=...]` argument. Other trailing
/// punctuation is kept. Words inside `[url]...[/url]` or
/// `[noparse]...[/noparse]` are skipped.
#[must_use]
pub fn find_urls(text: &str) -> Vec<UrlMatch> {
    let mut matches = Vec::new();
    let mut state = ScanState::Scanning;
    let mut offset = 0;

    for token in tokenize(text) {
        state = match (state, token) {
            (ScanState::Scanning, Token::Open { tag, .. })
                if matches!(tag, TagName::Url | TagName::NoParse) =>
            {
                ScanState::InsideExistingTag(tag)
            }
            (ScanState::InsideExistingTag(open), Token::Close { tag, .. }) if tag == open => {
                ScanState::Scanning
            }
            (ScanState::Scanning, Token::Text(segment)) => {
                scan_segment(segment, offset, &mut matches);
                ScanState::Scanning
            }
            (current, _) => current,
        };
        offset += token.raw().len();
    }

    matches
}

fn scan_segment(segment: &str, base: usize, matches: &mut Vec<UrlMatch>) {
    let mut position = base;
    for piece in segment.split_inclusive(char::is_whitespace) {
        let word = piece
            .trim_end_matches(char::is_whitespace)
            .split(['[', ']'])
            .next()
            .unwrap_or_default();
        if let Some(found) = UrlMatch::at(word, position) {
            matches.push(found);
        }
        position += piece.len();
    }
}

/// Wraps every bare URL in `text` as `[url=<url>]<label>[/url]`.
///
/// All other text is preserved verbatim, and applying the function to its own
/// output changes nothing.
///
/// ```
/// use fchat_input::markup::auto_link_urls;
///
/// assert_eq!(
///     auto_link_urls("here is a cool link: http://www.google.com"),
///     "here is a cool link: [url=http://www.google.com]google.com[/url]",
/// );
/// ```
#[must_use]
pub fn auto_link_urls(text: &str) -> String {
    let matches = find_urls(text);
    if matches.is_empty() {
        return text.to_owned();
    }

    let mut output = String::with_capacity(text.len() + matches.len() * 16);
    let mut copied = 0;
    for found in &matches {
        output.push_str(text.get(copied..found.start).unwrap_or_default());
        output.push_str(&found.to_markup());
        copied = found.end;
    }
    output.push_str(text.get(copied..).unwrap_or_default());

    trace!(links = matches.len(), "wrapped bare urls");
    output
}
