//! URL templates with `:name` path placeholders.
//!
//! A template such as `/v1/service/:serviceId/notuses` is split into path
//! segments. A segment is made of literal text and placeholders; a
//! placeholder is `:` followed by an ASCII letter or `_`, then any ASCII
//! alphanumerics or `_` (so a port like `:8080` stays literal).
//!
//! Expansion produces decoded segment strings. Percent-encoding happens
//! when the segments are pushed onto a [`url::Url`](reqwest::Url), which
//! encodes each one as a single path segment.

/// One piece of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'t> {
    Literal(&'t str),
    Placeholder(&'t str),
}

/// A parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate<'t> {
    raw: &'t str,
    segments: Vec<Vec<Piece<'t>>>,
}

impl<'t> UrlTemplate<'t> {
    /// Parse a template. Parsing never fails; text that is not a valid
    /// placeholder is kept as a literal.
    pub fn parse(raw: &'t str) -> Self {
        let segments = raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(parse_segment)
            .collect();
        Self { raw, segments }
    }

    /// The template text as written.
    pub fn as_str(&self) -> &'t str {
        self.raw
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.segments.iter().flatten().filter_map(|piece| match piece {
            Piece::Placeholder(name) => Some(*name),
            Piece::Literal(_) => None,
        })
    }

    /// Returns true if the template declares this placeholder.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders().any(|p| p == name)
    }

    /// Substitute placeholder values and return the decoded path segments.
    ///
    /// A placeholder whose value is missing or empty contributes nothing; a
    /// segment that ends up empty is dropped entirely, so no `//` or
    /// trailing slash is ever produced.
    pub fn expand<'v, F>(&self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        self.segments
            .iter()
            .filter_map(|pieces| {
                let mut segment = String::new();
                for piece in pieces {
                    match piece {
                        Piece::Literal(text) => segment.push_str(text),
                        Piece::Placeholder(name) => {
                            if let Some(value) = lookup(*name) {
                                segment.push_str(value);
                            }
                        }
                    }
                }
                (!segment.is_empty()).then_some(segment)
            })
            .collect()
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn parse_segment(segment: &str) -> Vec<Piece<'_>> {
    let bytes = segment.as_bytes();
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b':' {
            i += 1;
            continue;
        }

        let name_start = i + 1;
        let mut name_end = name_start;
        while name_end < bytes.len() && is_name_byte(bytes[name_end]) {
            name_end += 1;
        }

        let name = &segment[name_start..name_end];
        if !name
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        {
            i = name_end.max(i + 1);
            continue;
        }

        if literal_start < i {
            pieces.push(Piece::Literal(&segment[literal_start..i]));
        }
        pieces.push(Piece::Placeholder(name));
        literal_start = name_end;
        i = name_end;
    }

    if literal_start < bytes.len() {
        pieces.push(Piece::Literal(&segment[literal_start..]));
    }
    pieces
}
