// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use attributed_text::TextRange;
use log::trace;

use crate::entity;
use crate::transform::{self, TagPosition, TagTransformer};
use crate::{Tag, TagInfo};

/// The result of [`tokenize`]: the text with all markup removed, plus the tags found in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// The input with tags removed, transformer output inserted and character references decoded.
    pub text: String,
    /// Every matched tag pair and self-closing tag, ordered by start position and then level.
    ///
    /// All ranges index into [`Tokenized::text`].
    pub tags: Vec<TagInfo>,
}

/// Splits `input` into plain text and tag occurrences.
///
/// Recognized syntax is `<name key="value" key='value'>`, `</name>` and `<name/>`, with names
/// made of ASCII letters, digits and `-`. Anything that does not parse as a tag is kept as
/// literal text, so this never fails. Closing tags pair with the innermost open tag of the
/// same name (ignoring ASCII case); closing tags without an opener are dropped, as are tags
/// still open at the end of the input.
///
/// Transformers are consulted in order for each tag occurrence, and the first one matching
/// rewrites the occurrence into literal text.
///
/// ```
/// use text_markup::{DEFAULT_TRANSFORMERS, tokenize};
///
/// let out = tokenize("hi <b>there</b><br>!", DEFAULT_TRANSFORMERS);
/// assert_eq!(out.text, "hi there\n!");
/// assert_eq!(out.tags.len(), 1);
/// assert_eq!(out.tags[0].tag.name(), "b");
/// assert_eq!(out.tags[0].range.as_range(), 3..8);
/// ```
pub fn tokenize(input: &str, transformers: &[TagTransformer]) -> Tokenized {
    let mut tokenizer = Tokenizer {
        transformers,
        text: String::with_capacity(input.len()),
        text_len: 0,
        stack: Vec::new(),
        tags: Vec::new(),
    };
    tokenizer.run(input);
    tokenizer.finish()
}

#[derive(Debug)]
struct OpenTag {
    tag: Tag,
    start: usize,
    level: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum HeadKind {
    Open,
    Close,
    SelfClosing,
}

#[derive(Debug)]
struct TagHead {
    tag: Tag,
    kind: HeadKind,
}

struct Tokenizer<'t> {
    transformers: &'t [TagTransformer],
    text: String,
    /// Length of `text` in characters.
    text_len: usize,
    stack: Vec<OpenTag>,
    tags: Vec<TagInfo>,
}

impl Tokenizer<'_> {
    fn run(&mut self, input: &str) {
        let mut rest = input;
        while !rest.is_empty() {
            let Some(special) = rest.find(['<', '&']) else {
                self.push_text(rest);
                break;
            };
            self.push_text(&rest[..special]);
            rest = &rest[special..];

            let consumed = if rest.starts_with('<') {
                match parse_head(rest) {
                    Some((head, consumed)) => {
                        self.handle_head(head);
                        consumed
                    }
                    None => {
                        self.push_char('<');
                        1
                    }
                }
            } else {
                match entity::decode_at(rest) {
                    Some((ch, consumed)) => {
                        self.push_char(ch);
                        consumed
                    }
                    None => {
                        self.push_char('&');
                        1
                    }
                }
            };
            rest = &rest[consumed..];
        }
    }

    fn push_text(&mut self, s: &str) {
        self.text.push_str(s);
        self.text_len += s.chars().count();
    }

    fn push_char(&mut self, ch: char) {
        self.text.push(ch);
        self.text_len += 1;
    }

    fn handle_head(&mut self, head: TagHead) {
        let position = match head.kind {
            HeadKind::Close => TagPosition::End,
            HeadKind::Open | HeadKind::SelfClosing => TagPosition::Start,
        };
        if let Some(transformer) = transform::find(self.transformers, head.tag.name(), position) {
            let replacement = transformer.replace(&head.tag);
            self.push_text(&replacement);
            return;
        }

        match head.kind {
            HeadKind::Open => self.stack.push(OpenTag {
                tag: head.tag,
                start: self.text_len,
                level: self.stack.len(),
            }),
            HeadKind::SelfClosing => self.tags.push(TagInfo {
                tag: head.tag,
                range: TextRange::new_unchecked(self.text_len, self.text_len),
                level: self.stack.len(),
            }),
            HeadKind::Close => {
                let name = head.tag.name();
                match self.stack.iter().rposition(|open| open.tag.is(name)) {
                    Some(ix) => {
                        let open = self.stack.remove(ix);
                        self.tags.push(TagInfo {
                            tag: open.tag,
                            range: TextRange::new_unchecked(open.start, self.text_len),
                            level: open.level,
                        });
                    }
                    None => trace!("dropping unmatched closing tag </{name}>"),
                }
            }
        }
    }

    fn finish(mut self) -> Tokenized {
        for open in &self.stack {
            trace!(
                "dropping tag <{}> left open at character {}",
                open.tag.name(),
                open.start
            );
        }
        self.tags
            .sort_by_key(|info| (info.range.start(), info.level));
        Tokenized {
            text: self.text,
            tags: self.tags,
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attribute_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

/// Parses a tag head at the start of `s`, which must begin with `<`.
///
/// Returns the head and the number of bytes it spans, including both angle brackets.
fn parse_head(s: &str) -> Option<(TagHead, usize)> {
    let bytes = s.as_bytes();
    let mut i = 1;
    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    let name_start = i;
    if !bytes.get(i)?.is_ascii_alphanumeric() {
        return None;
    }
    while bytes.get(i).copied().is_some_and(is_name_byte) {
        i += 1;
    }
    let mut tag = Tag::new(&s[name_start..i]);

    loop {
        let gap_start = i;
        while bytes.get(i)?.is_ascii_whitespace() {
            i += 1;
        }
        match *bytes.get(i)? {
            b'>' => {
                let kind = if closing {
                    HeadKind::Close
                } else {
                    HeadKind::Open
                };
                return Some((TagHead { tag, kind }, i + 1));
            }
            b'/' if !closing && bytes.get(i + 1) == Some(&b'>') => {
                return Some((
                    TagHead {
                        tag: tag.self_closing(),
                        kind: HeadKind::SelfClosing,
                    },
                    i + 2,
                ));
            }
            _ => {}
        }
        // Closing tags carry no attributes, and attributes must be separated by whitespace.
        if closing || i == gap_start {
            return None;
        }

        let key_start = i;
        while bytes.get(i).copied().is_some_and(is_attribute_name_byte) {
            i += 1;
        }
        if i == key_start {
            return None;
        }
        let key = &s[key_start..i];

        while bytes.get(i)?.is_ascii_whitespace() {
            i += 1;
        }
        if *bytes.get(i)? != b'=' {
            return None;
        }
        i += 1;
        while bytes.get(i)?.is_ascii_whitespace() {
            i += 1;
        }
        let quote = *bytes.get(i)?;
        if quote != b'"' && quote != b'\'' {
            return None;
        }
        i += 1;
        let value_len = s[i..].find(char::from(quote))?;
        tag.insert_attribute(key, entity::decode_all(&s[i..i + value_len]));
        i += value_len + 1;
    }
}
