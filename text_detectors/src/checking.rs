// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in data detectors for links, phone numbers and dates.

use core::ops::Range;

use attributed_text::TextRange;
use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::pattern::CharCursor;

bitflags! {
    /// The kinds of data [`detect_checking`] looks for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CheckingTypes: u8 {
        /// Web addresses (`https://…`, `www.…`) and e-mail addresses.
        const LINK = 1 << 0;
        /// Phone numbers of 7 to 15 digits.
        const PHONE_NUMBER = 1 << 1;
        /// Calendar dates.
        const DATE = 1 << 2;
    }
}

/// The kind of a single [`CheckingMatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckingKind {
    /// A web or e-mail address.
    Link,
    /// A phone number.
    PhoneNumber,
    /// A calendar date.
    Date,
}

impl CheckingKind {
    /// The flag that enables detection of this kind.
    pub fn types(self) -> CheckingTypes {
        match self {
            Self::Link => CheckingTypes::LINK,
            Self::PhoneNumber => CheckingTypes::PHONE_NUMBER,
            Self::Date => CheckingTypes::DATE,
        }
    }

    /// Lower wins when candidates of different kinds overlap.
    fn priority(self) -> u8 {
        match self {
            Self::Link => 0,
            Self::Date => 1,
            Self::PhoneNumber => 2,
        }
    }
}

/// A piece of data found by [`detect_checking`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckingMatch {
    /// Character range of the match.
    pub range: TextRange,
    /// What was found.
    pub kind: CheckingKind,
    /// The matched text.
    pub text: String,
}

impl CheckingMatch {
    /// The address a link match points to.
    ///
    /// `www.` hosts get an `http://` scheme and e-mail addresses a `mailto:` scheme.
    /// Returns `None` for matches that aren't links.
    pub fn link_url(&self) -> Option<Url> {
        if self.kind != CheckingKind::Link {
            return None;
        }
        link_to_url(&self.text)
    }
}

fn link_to_url(text: &str) -> Option<Url> {
    if text.contains("://") {
        Url::parse(text).ok()
    } else if text.contains('@') {
        Url::parse(&format!("mailto:{text}")).ok()
    } else {
        Url::parse(&format!("http://{text}")).ok()
    }
}

static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:(?i:https?|ftp)://|(?i:www)\.)[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]+",
        r"|[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}",
    ))
    .expect("link regex should compile")
});

static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+[0-9]{1,3}[ .\-]?)?(?:\([0-9]{1,4}\)[ .\-]?)?[0-9](?:[ .\-]?[0-9])+")
        .expect("phone number regex should compile")
});

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<iso>(?P<iy>[0-9]{4})-(?P<im>[0-9]{2})-(?P<id>[0-9]{2}))",
        r"|(?P<slash>(?P<sa>[0-9]{1,2})/(?P<sb>[0-9]{1,2})/[0-9]{4})",
        r"|(?P<named>(?i:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?",
        r"|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.? ",
        r"(?P<nd>[0-9]{1,2})(?i:st|nd|rd|th)?,? [0-9]{4})",
    ))
    .expect("date regex should compile")
});

/// Scans `text` for the data kinds selected by `types`.
///
/// Matches are ordered by start. Within one call, overlapping candidates of different
/// kinds are resolved in favor of links, then dates, then phone numbers. Separate calls
/// don't know about each other and may return overlapping ranges.
///
/// ```
/// use text_detectors::{CheckingKind, CheckingTypes, detect_checking};
///
/// let found = detect_checking("see www.example.com or call 555-123-4567", CheckingTypes::all());
/// let kinds: Vec<_> = found.iter().map(|m| m.kind).collect();
/// assert_eq!(kinds, [CheckingKind::Link, CheckingKind::PhoneNumber]);
/// assert_eq!(found[0].link_url().unwrap().as_str(), "http://www.example.com/");
/// ```
pub fn detect_checking(text: &str, types: CheckingTypes) -> Vec<CheckingMatch> {
    let mut candidates: Vec<(Range<usize>, CheckingKind)> = Vec::new();
    if types.contains(CheckingTypes::LINK) {
        candidates.extend(links(text).map(|r| (r, CheckingKind::Link)));
    }
    if types.contains(CheckingTypes::DATE) {
        candidates.extend(dates(text).map(|r| (r, CheckingKind::Date)));
    }
    if types.contains(CheckingTypes::PHONE_NUMBER) {
        candidates.extend(phone_numbers(text).map(|r| (r, CheckingKind::PhoneNumber)));
    }

    // Candidates are grouped by priority; keep the ones that don't collide with a kept one.
    let mut kept: Vec<(Range<usize>, CheckingKind)> = Vec::with_capacity(candidates.len());
    for (range, kind) in candidates {
        let collides = kept.iter().any(|(other, other_kind)| {
            other_kind.priority() < kind.priority()
                && range.start < other.end
                && other.start < range.end
        });
        if !collides {
            kept.push((range, kind));
        }
    }
    kept.sort_by_key(|(range, kind)| (range.start, kind.priority()));

    let mut cursor = CharCursor::new(text);
    let found: Vec<_> = kept
        .into_iter()
        .map(|(range, kind)| CheckingMatch {
            text: text[range.clone()].to_owned(),
            range: cursor.char_range(range),
            kind,
        })
        .collect();
    log::trace!("found {} checking match(es) for {:?}", found.len(), types);
    found
}

fn links(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    LINK.find_iter(text).filter_map(move |m| {
        let trimmed = trim_link(m.as_str());
        let range = m.start()..m.start() + trimmed.len();
        (link_starts_clean(text, range.start) && link_to_url(trimmed).is_some()).then_some(range)
    })
}

/// Drops trailing sentence punctuation and unbalanced closing brackets.
fn trim_link(link: &str) -> &str {
    let mut link = link;
    loop {
        let Some(last) = link.chars().last() else {
            return link;
        };
        let drop = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '*' => true,
            ')' => link.matches('(').count() < link.matches(')').count(),
            ']' => link.matches('[').count() < link.matches(']').count(),
            _ => false,
        };
        if !drop {
            return link;
        }
        link = &link[..link.len() - last.len_utf8()];
    }
}

fn phone_numbers(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    PHONE_NUMBER.find_iter(text).filter_map(move |m| {
        let digits = m.as_str().bytes().filter(u8::is_ascii_digit).count();
        let isolated = starts_clean(text, m.start()) && ends_clean(text, m.end());
        ((7..=15).contains(&digits) && isolated).then(|| m.range())
    })
}

fn dates(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    DATE.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if !starts_clean(text, whole.start()) || !ends_clean(text, whole.end()) {
            return None;
        }
        let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());
        let valid = if caps.name("iso").is_some() {
            let (month, day) = (number("im")?, number("id")?);
            number("iy")? > 0 && (1..=12).contains(&month) && (1..=31).contains(&day)
        } else if caps.name("slash").is_some() {
            // Either day/month or month/day.
            let (a, b) = (number("sa")?, number("sb")?);
            (1..=31).contains(&a) && (1..=31).contains(&b) && (a <= 12 || b <= 12)
        } else {
            (1..=31).contains(&number("nd")?)
        };
        valid.then(|| whole.range())
    })
}

/// `true` if the character before byte `start` doesn't continue a word or number.
fn starts_clean(text: &str, start: usize) -> bool {
    !text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Like [`starts_clean`], but only ASCII word characters count.
///
/// Scripts written without spaces run straight into addresses, as in `你好https://…`.
fn link_starts_clean(text: &str, start: usize) -> bool {
    !text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `true` if the character at byte `end` doesn't continue a word or number.
fn ends_clean(text: &str, end: usize) -> bool {
    !text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
