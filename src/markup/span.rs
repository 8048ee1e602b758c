//! Decoding markup into spans and encoding it back.

use serde::{Deserialize, Serialize};

use super::token::{TagName, Token, tokenize};

/// A run of decoded markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// Literal text.
    Text(String),
    /// Text wrapped in a tag.
    Tagged(TaggedSpan),
}

/// A properly closed tag and its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    /// Tag name.
    pub tag: TagName,
    /// Text after `=` in the opening tag.
    pub argument: Option<String>,
    /// Nested spans.
    pub children: Vec<Span>,
}

impl TaggedSpan {
    /// For `[url]` spans, returns the link target: the tag argument, or the
    /// enclosed text for the `[url]target[/url]` form.
    #[must_use]
    pub fn link_target(&self) -> Option<String> {
        if self.tag != TagName::Url {
            return None;
        }
        self.argument
            .clone()
            .or_else(|| Some(plain_text(&self.children)))
            .filter(|target| !target.is_empty())
    }
}

struct Frame<'a> {
    tag: TagName,
    argument: Option<&'a str>,
    raw: &'a str,
    children: Vec<Span>,
}

impl Frame<'_> {
    fn into_span(self) -> Span {
        Span::Tagged(TaggedSpan {
            tag: self.tag,
            argument: self.argument.map(str::to_owned),
            children: self.children,
        })
    }

    /// Emits an unclosed tag as literal text followed by its contents.
    fn flatten_into(self, parent: &mut Vec<Span>) {
        push_text(parent, self.raw);
        for child in self.children {
            push_span(parent, child);
        }
    }
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Span::Text(last)) = spans.last_mut() {
        last.push_str(text);
    } else {
        spans.push(Span::Text(text.to_owned()));
    }
}

fn push_span(spans: &mut Vec<Span>, span: Span) {
    match span {
        Span::Text(text) => push_text(spans, &text),
        tagged @ Span::Tagged(_) => spans.push(tagged),
    }
}

fn current_children<'s>(stack: &'s mut [Frame<'_>], root: &'s mut Vec<Span>) -> &'s mut Vec<Span> {
    stack.last_mut().map_or(root, |frame| &mut frame.children)
}

fn close_frame(stack: &mut Vec<Frame<'_>>, root: &mut Vec<Span>, tag: TagName) {
    while let Some(frame) = stack.pop() {
        if frame.tag == tag {
            let span = frame.into_span();
            current_children(stack, root).push(span);
            return;
        }
        frame.flatten_into(current_children(stack, root));
    }
}

/// Decodes marked-up text into spans.
///
/// Properly nested tags become [`Span::Tagged`]. Closing tags without an
/// opener, and openers never closed, are kept as literal text. Everything
/// inside `[noparse]` is literal.
///
/// ```
/// use fchat_input::markup::{Span, TagName, parse_markup};
///
/// let spans = parse_markup("hi [b]there[/b]");
/// assert_eq!(spans.len(), 2);
/// assert!(matches!(&spans[1], Span::Tagged(span) if span.tag == TagName::Bold));
/// ```
#[must_use]
pub fn parse_markup(input: &str) -> Vec<Span> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for token in tokenize(input) {
        let in_noparse = stack
            .last()
            .is_some_and(|frame| frame.tag == TagName::NoParse);

        match token {
            Token::Close { tag, .. }
                if (!in_noparse || tag == TagName::NoParse)
                    && stack.iter().any(|frame| frame.tag == tag) =>
            {
                close_frame(&mut stack, &mut root, tag);
            }
            Token::Open { tag, argument, raw } if !in_noparse => stack.push(Frame {
                tag,
                argument,
                raw,
                children: Vec::new(),
            }),
            other => push_text(current_children(&mut stack, &mut root), other.raw()),
        }
    }

    while let Some(frame) = stack.pop() {
        frame.flatten_into(current_children(&mut stack, &mut root));
    }
    root
}

/// Encodes spans back into markup with lowercase tag names.
#[must_use]
pub fn render_markup(spans: &[Span]) -> String {
    let mut output = String::new();
    write_markup(spans, &mut output);
    output
}

fn write_markup(spans: &[Span], output: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => output.push_str(text),
            Span::Tagged(tagged) => {
                output.push('[');
                output.push_str(tagged.tag.as_str());
                if let Some(argument) = &tagged.argument {
                    output.push('=');
                    output.push_str(argument);
                }
                output.push(']');
                write_markup(&tagged.children, output);
                output.push_str("[/");
                output.push_str(tagged.tag.as_str());
                output.push(']');
            }
        }
    }
}

/// Returns the text of the spans with every tag removed.
#[must_use]
pub fn plain_text(spans: &[Span]) -> String {
    let mut output = String::new();
    write_plain(spans, &mut output);
    output
}

fn write_plain(spans: &[Span], output: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => output.push_str(text),
            Span::Tagged(tagged) => write_plain(&tagged.children, output),
        }
    }
}
