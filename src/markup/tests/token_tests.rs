//! Unit tests for the tag tokenizer.

use rstest::rstest;

use crate::markup::{TagName, Token, token::read_tag, tokenize};

#[rstest]
#[case("b", Some(TagName::Bold))]
#[case("SUP", Some(TagName::Superscript))]
#[case("noparse", Some(TagName::NoParse))]
#[case("bold", None)]
#[case("", None)]
fn tag_names_resolve_case_insensitively(#[case] name: &str, #[case] expected: Option<TagName>) {
    assert_eq!(TagName::parse(name), expected);
}

#[rstest]
fn every_tag_name_round_trips_through_its_spelling() {
    for tag in TagName::ALL {
        assert_eq!(TagName::parse(tag.as_str()), Some(tag));
    }
}

#[rstest]
fn read_tag_recognises_open_close_and_arguments() {
    assert_eq!(
        read_tag("[color=red]x"),
        Some(Token::Open {
            tag: TagName::Color,
            argument: Some("red"),
            raw: "[color=red]",
        })
    );
    assert_eq!(
        read_tag("[/I] tail"),
        Some(Token::Close {
            tag: TagName::Italic,
            raw: "[/I]",
        })
    );
    assert_eq!(
        read_tag("[url=http://a.com/?x=1]"),
        Some(Token::Open {
            tag: TagName::Url,
            argument: Some("http://a.com/?x=1"),
            raw: "[url=http://a.com/?x=1]",
        })
    );
}

#[rstest]
#[case("[1]")]
#[case("[b")]
#[case("b]")]
#[case("[/]")]
#[case("[b [i]")]
#[case("[b\n]")]
fn non_tags_are_not_read(#[case] input: &str) {
    assert_eq!(read_tag(input), None);
}

#[rstest]
fn tokenizer_splits_text_and_tags() {
    let tokens: Vec<_> = tokenize("a [b]bold[/b] [1] c").collect();

    assert_eq!(
        tokens,
        [
            Token::Text("a "),
            Token::Open {
                tag: TagName::Bold,
                argument: None,
                raw: "[b]",
            },
            Token::Text("bold"),
            Token::Close {
                tag: TagName::Bold,
                raw: "[/b]",
            },
            Token::Text(" [1] c"),
        ]
    );
}

#[rstest]
#[case("")]
#[case("plain")]
#[case("[[b]]x[/b]]")]
#[case("[b][i]é[/i][/b][")]
#[case("[url=http://[::1]/]x[/url]")]
fn token_raw_text_reassembles_the_input(#[case] input: &str) {
    let rebuilt: String = tokenize(input).map(|token| token.raw()).collect();
    assert_eq!(rebuilt, input);
}
