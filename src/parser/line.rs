//! Tokenizer for single record lines
//!
//! A line is `LEVEL [@XREF@] TAG [VALUE]`. Only level-0 record headers carry
//! an xref in front of the tag; pointers such as `1 HUSB @I1@` arrive as the
//! value.

/// One tokenized line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    /// Nesting level
    pub level: u8,
    /// Cross-reference id in front of the tag
    pub xref: Option<&'a str>,
    /// Tag, e.g. `INDI` or `DATE`
    pub tag: &'a str,
    /// Rest of the line after the tag, trimmed
    pub value: Option<&'a str>,
}

impl<'a> GedcomLine<'a> {
    /// Tokenize a raw line; `None` when it has no numeric level or no tag
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim_start_matches('\u{feff}').trim();

        let (level, rest) = split_token(raw)?;
        let level = level.parse::<u8>().ok()?;

        let (first, rest) = split_token(rest)?;
        let (xref, tag, rest) = if is_xref(first) {
            let (tag, rest) = split_token(rest)?;
            (Some(first), tag, rest)
        } else {
            (None, first, rest)
        };

        let value = Some(rest.trim()).filter(|v| !v.is_empty());

        Some(Self {
            level,
            xref,
            tag,
            value,
        })
    }
}

fn is_xref(token: &str) -> bool {
    token.len() > 2 && token.starts_with('@') && token.ends_with('@')
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}
