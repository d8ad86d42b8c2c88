//! `{name}` placeholder substitution for URL templates.
//!
//! The template is split once into literal and placeholder segments and then
//! expanded by position, so a substituted value is never scanned again. A
//! value that itself contains `{other}` stays as written. Values are inserted
//! verbatim, without percent-encoding.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// A URL string tokenized into literal text and `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> UrlTemplate<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut rest = raw;

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find(['{', '}']) {
                Some(close) if after.as_bytes()[close] == b'}' => {
                    if open > 0 {
                        segments.push(Segment::Literal(&rest[..open]));
                    }
                    segments.push(Segment::Placeholder(&after[..close]));
                    rest = &after[close + 1..];
                }
                // A nested `{` restarts the placeholder; everything before it is text.
                Some(nested) => {
                    segments.push(Segment::Literal(&rest[..open + 1 + nested]));
                    rest = &after[nested..];
                }
                None => break,
            }
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Self { segments }
    }

    /// Placeholder names in order of appearance, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder that has a value in `params`. Unknown
    /// placeholders are written back as literal `{name}` text.
    pub fn expand(&self, params: &BTreeMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match params.get(*name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}
