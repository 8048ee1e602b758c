//! Tag grammar of the BBCode subset.
//!
//! A tag is `[name]`, `[name=argument]` or `[/name]` where `name` is one of
//! the [`TagName`]s (ASCII case-insensitive). Bracketed text that is not a
//! known tag, such as `[1]`, is ordinary text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tags understood by F-Chat clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagName {
    /// `[b]`
    Bold,
    /// `[i]`
    Italic,
    /// `[u]`
    Underline,
    /// `[s]`
    Strikethrough,
    /// `[sup]`
    Superscript,
    /// `[sub]`
    Subscript,
    /// `[color=red]`
    Color,
    /// `[url]` or `[url=target]`
    Url,
    /// `[user]`
    User,
    /// `[icon]`
    Icon,
    /// `[eicon]`
    Eicon,
    /// `[noparse]`
    NoParse,
    /// `[channel]`
    Channel,
    /// `[session=title]`
    Session,
}

impl TagName {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Superscript,
        Self::Subscript,
        Self::Color,
        Self::Url,
        Self::User,
        Self::Icon,
        Self::Eicon,
        Self::NoParse,
        Self::Channel,
        Self::Session,
    ];

    /// Returns the name as written inside brackets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
            Self::Strikethrough => "s",
            Self::Superscript => "sup",
            Self::Subscript => "sub",
            Self::Color => "color",
            Self::Url => "url",
            Self::User => "user",
            Self::Icon => "icon",
            Self::Eicon => "eicon",
            Self::NoParse => "noparse",
            Self::Channel => "channel",
            Self::Session => "session",
        }
    }

    /// Resolves a tag name, ignoring ASCII case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit of marked-up text. Each token borrows its raw source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text outside any tag.
    Text(&'a str),
    /// Opening tag.
    Open {
        /// Tag name.
        tag: TagName,
        /// Text after `=`, if any.
        argument: Option<&'a str>,
        /// Tag as written, brackets included.
        raw: &'a str,
    },
    /// Closing tag.
    Close {
        /// Tag name.
        tag: TagName,
        /// Tag as written, brackets included.
        raw: &'a str,
    },
}

impl<'a> Token<'a> {
    /// Returns the source text of the token.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        match *self {
            Self::Text(raw) | Self::Open { raw, .. } | Self::Close { raw, .. } => raw,
        }
    }
}

/// Reads a tag at the start of `input`, if one is there.
#[must_use]
pub fn read_tag(input: &str) -> Option<Token<'_>> {
    let after_open = input.strip_prefix('[')?;
    let body_end = after_open.find(']')?;
    let body = after_open.get(..body_end)?;
    if body.contains(['[', '\n']) {
        return None;
    }
    // '[' and ']' are one byte each.
    let raw = input.get(..body_end + 2)?;

    if let Some(name) = body.strip_prefix('/') {
        let tag = TagName::parse(name)?;
        return Some(Token::Close { tag, raw });
    }

    let (name, argument) = body
        .split_once('=')
        .map_or((body, None), |(name, argument)| (name, Some(argument)));
    let tag = TagName::parse(name)?;
    Some(Token::Open { tag, argument, raw })
}

/// Splits `input` into tag and text tokens.
///
/// Concatenating the raw text of every token reproduces `input` exactly.
#[must_use]
pub const fn tokenize(input: &str) -> Tokens<'_> {
    Tokens { rest: input }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(tag) = read_tag(self.rest) {
            self.rest = self.rest.get(tag.raw().len()..).unwrap_or_default();
            return Some(tag);
        }

        let text_end = self
            .rest
            .match_indices('[')
            .map(|(index, _)| index)
            .filter(|&index| index > 0)
            .find(|&index| self.rest.get(index..).and_then(read_tag).is_some())
            .unwrap_or(self.rest.len());

        let (text, rest) = self.rest.split_at_checked(text_end)?;
        self.rest = rest;
        Some(Token::Text(text))
    }
}
