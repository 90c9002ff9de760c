// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character reference decoding (`&amp;`, `&#38;`, `&#x26;`).

use alloc::string::String;

/// Longest reference body we look at before giving up, e.g. `#x10FFFF`.
const MAX_REFERENCE_LEN: usize = 8;

const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("gt", '>'),
    ("lt", '<'),
    ("nbsp", '\u{a0}'),
    ("quot", '"'),
];

/// Decodes the character reference at the start of `s`.
///
/// `s` must start with `&`. Returns the decoded character and the number of bytes
/// consumed, or `None` if `s` does not start with a complete, known reference.
pub(crate) fn decode_at(s: &str) -> Option<(char, usize)> {
    debug_assert!(s.starts_with('&'), "reference must start with `&`");
    let rest = &s[1..];
    let semi = rest.bytes().take(MAX_REFERENCE_LEN + 1).position(|b| b == b';')?;
    let body = &rest[..semi];
    let ch = if let Some(num) = body.strip_prefix('#') {
        // `from_str_radix` takes a leading sign, references don't.
        let value = match num.strip_prefix(['x', 'X']) {
            Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if num.starts_with(|c: char| c.is_ascii_digit()) => num.parse::<u32>().ok()?,
            _ => return None,
        };
        char::from_u32(value).filter(|c| *c != '\0')?
    } else {
        NAMED
            .iter()
            .find(|(name, _)| *name == body)
            .map(|(_, c)| *c)?
    };
    // `&` + body + `;`
    Some((ch, semi + 2))
}

/// Decodes every known character reference in `s`, leaving unknown ones untouched.
pub(crate) fn decode_all(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_at(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::{decode_all, decode_at};

    #[test]
    fn named_references() {
        assert_eq!(decode_at("&amp;rest"), Some(('&', 5)));
        assert_eq!(decode_at("&quot;"), Some(('"', 6)));
        assert_eq!(decode_at("&lt;b&gt;"), Some(('<', 4)));
    }

    #[test]
    fn numeric_references() {
        assert_eq!(decode_at("&#38;"), Some(('&', 5)));
        assert_eq!(decode_at("&#x5730;"), Some(('地', 8)));
        assert_eq!(decode_at("&#X41;"), Some(('A', 6)));
        assert_eq!(decode_at("&#0;"), None);
        assert_eq!(decode_at("&#xD800;"), None);
    }

    #[test]
    fn signed_numbers_are_not_references() {
        assert_eq!(decode_at("&#+65;"), None);
        assert_eq!(decode_at("&#x+41;"), None);
        assert_eq!(decode_at("&#-1;"), None);
        assert_eq!(decode_all("&#+65;&#65;"), "&#+65;A");
    }

    #[test]
    fn incomplete_or_unknown_references_stay_literal() {
        assert_eq!(decode_at("& b"), None);
        assert_eq!(decode_at("&amp"), None);
        assert_eq!(decode_at("&bogus;"), None);
        assert_eq!(decode_at("&averyveryverylongname;"), None);
        assert_eq!(decode_all("fish & chips &amp; peas &copy;"), "fish & chips & peas &copy;");
    }
}
