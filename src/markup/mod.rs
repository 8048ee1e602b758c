//! BBCode-subset markup used in F-Chat messages.
//!
//! Both directions share the tag grammar in [`token`]:
//!
//! - [`auto_link_urls`] wraps bare URLs in outgoing text as
//!   `[url=...]label[/url]`, leaving existing links alone.
//! - [`parse_markup`] decodes incoming text into [`Span`]s, and
//!   [`render_markup`] / [`plain_text`] turn spans back into text.
//!
//! Nothing here can fail: text that does not parse as markup is kept as
//! literal text.

mod autolink;
mod label;
mod span;
pub mod token;

pub use autolink::{UrlMatch, auto_link_urls, find_urls};
pub use label::{display_label, host, strip_scheme};
pub use span::{Span, TaggedSpan, parse_markup, plain_text, render_markup};
pub use token::{TagName, Token, tokenize};

#[cfg(test)]
mod tests;
