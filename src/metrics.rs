// src/metrics.rs
//! Pure text metrics.
//!
//! Every function here is total: absent text (`None`) and empty text are
//! valid input and produce a default (`0` or `None`) instead of an error.

use std::fmt;

/// The five statistics that can be taken from a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Bytes,
    Lines,
    Words,
    Chars,
    Longest,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Lines,
        Metric::Words,
        Metric::Chars,
        Metric::Bytes,
        Metric::Longest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Bytes => "Bytes",
            Metric::Lines => "Lines",
            Metric::Words => "Words",
            Metric::Chars => "Chars",
            Metric::Longest => "Longest",
        }
    }

    /// Computes this metric from already decoded text and the resource size.
    pub fn measure(self, text: Option<&str>, bytes: u64) -> MetricValue {
        match self {
            Metric::Bytes => MetricValue::Count(bytes),
            Metric::Lines => MetricValue::Count(line_count(text) as u64),
            Metric::Words => MetricValue::Count(word_count(text) as u64),
            Metric::Chars => MetricValue::Count(char_count(text) as u64),
            Metric::Longest => MetricValue::Line(longest_line(text).map(str::to_owned)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single metric: a count, or the longest line if there is one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetricValue {
    Count(u64),
    Line(Option<String>),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Line(Some(line)) => f.write_str(line),
            MetricValue::Line(None) => Ok(()),
        }
    }
}

/// Anything with a raw size in bytes, independent of text decoding.
pub trait ByteSource {
    fn byte_len(&self) -> u64;
}

impl ByteSource for std::fs::Metadata {
    fn byte_len(&self) -> u64 {
        self.len()
    }
}

impl ByteSource for [u8] {
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteSource for Vec<u8> {
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteSource for str {
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

pub fn byte_size<S: ByteSource + ?Sized>(source: &S) -> u64 {
    source.byte_len()
}

/// Counts maximal runs of non-whitespace characters.
///
/// Whitespace is Unicode `White_Space` (`char::is_whitespace`): U+0085 separates
/// words, U+FEFF does not.
pub fn word_count(text: Option<&str>) -> usize {
    match text {
        Some(text) => text.split_whitespace().count(),
        None => 0,
    }
}

/// Counts line terminators (`\n`).
///
/// Text with no terminator at all is one line, unless it is blank, in which
/// case it is zero lines. A final line without a terminator is not counted
/// once any terminator is present: `"a\nb"` is 1 line, `"a\nb\n"` is 2.
pub fn line_count(text: Option<&str>) -> usize {
    let Some(text) = text else {
        return 0;
    };

    match text.bytes().filter(|&b| b == b'\n').count() {
        0 if text.trim().is_empty() => 0,
        0 => 1,
        terminators => terminators,
    }
}

/// Returns the first line of maximal character length.
///
/// A trailing `\n` yields a trailing empty line, which can only win when
/// every line is empty.
pub fn longest_line(text: Option<&str>) -> Option<&str> {
    let text = text.filter(|t| !t.is_empty())?;

    let mut lines = text.split('\n');
    let mut longest = lines.next()?;
    let mut longest_len = longest.chars().count();
    for line in lines {
        let len = line.chars().count();
        if longest_len < len {
            longest = line;
            longest_len = len;
        }
    }
    Some(longest)
}

/// Number of characters (Unicode scalar values), without normalization.
///
/// An emoji such as `"🦀"` counts as 1, not as its two UTF-16 code units.
pub fn char_count(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.chars().count())
}
