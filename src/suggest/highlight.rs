use std::ops::Range;

/// A run of text, emphasized or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// A field value split around the first match of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Highlighted<'a> {
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The field value with emphasis dropped
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    fn plain_only(text: &'a str) -> Self {
        Self {
            segments: vec![Segment {
                text,
                emphasized: false,
            }],
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`
///
/// Comparison is per character, so the returned range always falls on char
/// boundaries of `haystack`. An empty needle never matches.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle_len = needle.chars().count();
    if needle_len == 0 {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        let mut matched = 0;

        for n in needle.chars() {
            match rest.next() {
                Some((offset, h)) if chars_eq_ignore_case(h, n) => {
                    end = start + offset + h.len_utf8();
                    matched += 1;
                }
                _ => break,
            }
        }

        if matched == needle_len {
            return Some(start..end);
        }
    }
    None
}

/// Split `field` around the first case-insensitive occurrence of `input`
///
/// The match may sit at the start (match + rest), at the end (prefix +
/// match), or in between (prefix + match + suffix). Without a match the
/// whole field comes back as one plain segment.
pub fn highlight<'a>(field: &'a str, input: &str) -> Highlighted<'a> {
    let Some(range) = find_ignore_case(field, input) else {
        return Highlighted::plain_only(field);
    };

    let parts = [
        (&field[..range.start], false),
        (&field[range.clone()], true),
        (&field[range.end..], false),
    ];

    Highlighted {
        segments: parts
            .into_iter()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, emphasized)| Segment { text, emphasized })
            .collect(),
    }
}
