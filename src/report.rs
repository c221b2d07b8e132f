// src/report.rs
use std::fmt;

use crate::metrics::{self, Metric, MetricValue};
use crate::reader::ResourceId;

/// All metrics of one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStats {
    pub id: ResourceId,
    pub bytes: u64,
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub longest: Option<String>,
}

impl FileStats {
    /// Builds the stats once the byte size and the decoded text are known.
    pub fn from_text(id: ResourceId, bytes: u64, text: Option<&str>) -> Self {
        Self {
            id,
            bytes,
            lines: metrics::line_count(text),
            words: metrics::word_count(text),
            chars: metrics::char_count(text),
            longest: metrics::longest_line(text).map(str::to_owned),
        }
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Bytes => MetricValue::Count(self.bytes),
            Metric::Lines => MetricValue::Count(self.lines as u64),
            Metric::Words => MetricValue::Count(self.words as u64),
            Metric::Chars => MetricValue::Count(self.chars as u64),
            Metric::Longest => MetricValue::Line(self.longest.clone()),
        }
    }

    pub fn longest_len(&self) -> usize {
        metrics::char_count(self.longest.as_deref())
    }
}

impl fmt::Display for FileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Lines: {}, Words: {}, Chars: {}, Bytes: {}, Longest: {}",
            self.id,
            self.lines,
            self.words,
            self.chars,
            self.bytes,
            self.longest_len()
        )
    }
}

/// Totals over several measured resources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub bytes: u64,
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub longest: Option<String>,
}

impl Summary {
    pub fn from_stats<'a>(stats: impl IntoIterator<Item = &'a FileStats>) -> Self {
        stats.into_iter().fold(Self::default(), |mut total, s| {
            total.files += 1;
            total.bytes += s.bytes;
            total.lines += s.lines;
            total.words += s.words;
            total.chars += s.chars;
            if let Some(line) = &s.longest {
                let current = metrics::char_count(total.longest.as_deref());
                if total.longest.is_none() || current < metrics::char_count(Some(line)) {
                    total.longest = Some(line.clone());
                }
            }
            total
        })
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Bytes => MetricValue::Count(self.bytes),
            Metric::Lines => MetricValue::Count(self.lines as u64),
            Metric::Words => MetricValue::Count(self.words as u64),
            Metric::Chars => MetricValue::Count(self.chars as u64),
            Metric::Longest => MetricValue::Line(self.longest.clone()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: Lines: {}, Words: {}, Chars: {}, Bytes: {}, Longest: {}",
            self.lines,
            self.words,
            self.chars,
            self.bytes,
            metrics::char_count(self.longest.as_deref())
        )
    }
}

/// One output line for a single metric, e.g. `notes.txt: 42`.
pub fn render_metric(id: &str, value: &MetricValue) -> String {
    format!("{id}: {value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(id: &str, text: &str) -> FileStats {
        FileStats::from_text(ResourceId::from(id), text.len() as u64, Some(text))
    }

    #[test]
    fn lorem_ipsum_file() {
        let s = stats("lorem.txt", "Lorem ipsum");
        assert_eq!(s.words, 2);
        assert_eq!(s.lines, 1);
        assert_eq!(s.chars, 11);
        assert_eq!(s.bytes, 11);
        assert_eq!(s.longest.as_deref(), Some("Lorem ipsum"));
        assert_eq!(
            s.to_string(),
            "lorem.txt: Lines: 1, Words: 2, Chars: 11, Bytes: 11, Longest: 11"
        );
    }

    #[test]
    fn empty_file() {
        let s = stats("empty.txt", "");
        assert_eq!(s.get(Metric::Words), MetricValue::Count(0));
        assert_eq!(s.get(Metric::Lines), MetricValue::Count(0));
        assert_eq!(s.get(Metric::Chars), MetricValue::Count(0));
        assert_eq!(s.get(Metric::Bytes), MetricValue::Count(0));
        assert_eq!(s.get(Metric::Longest), MetricValue::Line(None));
        assert_eq!(render_metric("empty.txt", &s.get(Metric::Longest)), "empty.txt: ");
    }

    #[test]
    fn get_agrees_with_measure() {
        let text = "first line\nsecond, longer line\n\nlast";
        let s = stats("f", text);
        for metric in Metric::ALL {
            assert_eq!(s.get(metric), metric.measure(Some(text), text.len() as u64));
        }
    }

    #[test]
    fn summary_totals() {
        let all = [
            stats("a", "one two\nthree\n"),
            stats("b", "four five six seven"),
            stats("c", ""),
        ];
        let total = Summary::from_stats(&all);
        assert_eq!(total.files, 3);
        assert_eq!(total.lines, 3);
        assert_eq!(total.words, 7);
        assert_eq!(total.chars, 14 + 19);
        assert_eq!(total.bytes, 14 + 19);
        assert_eq!(total.longest.as_deref(), Some("four five six seven"));
    }

    #[test]
    fn summary_longest_keeps_earliest_file_on_tie() {
        let all = [stats("a", "abc"), stats("b", "xyz")];
        let total = Summary::from_stats(&all);
        assert_eq!(total.get(Metric::Longest), MetricValue::Line(Some("abc".into())));
    }

    #[test]
    fn empty_summary() {
        let total = Summary::from_stats(std::iter::empty());
        assert_eq!(total, Summary::default());
        assert_eq!(
            total.to_string(),
            "total: Lines: 0, Words: 0, Chars: 0, Bytes: 0, Longest: 0"
        );
    }
}
