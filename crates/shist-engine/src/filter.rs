//! Entry selection.
//!
//! Stages run in a fixed order: pattern, count window, date range, index
//! range. Matching before windowing makes `-n 5 --grep git` mean "the last
//! five git commands".

use crate::date::{Timezone, parse_date_bound};
use crate::Result;
use regex::{Regex, RegexBuilder};
use shist_types::Entry;

/// Raw, user-supplied selection bounds.
#[derive(Debug, Clone, Default)]
pub struct SelectionArgs<'a> {
    pub pattern: Option<&'a str>,
    pub ignore_case: bool,
    pub count: Option<usize>,
    pub min_date: Option<&'a str>,
    pub max_date: Option<&'a str>,
    pub min_index: Option<i64>,
    pub max_index: Option<i64>,
}

/// Validated selection. All bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub pattern: Option<Regex>,
    /// Keep only the last N entries; zero keeps everything
    pub count: Option<usize>,
    pub min_date: Option<i64>,
    pub max_date: Option<i64>,
    /// Index bounds; values <= 0 are treated as unset
    pub min_index: Option<i64>,
    pub max_index: Option<i64>,
}

impl Selection {
    /// Validate raw bounds. Bad dates and patterns are reported here, before any read.
    pub fn parse(args: &SelectionArgs<'_>, timezone: Timezone) -> Result<Self> {
        let pattern = args
            .pattern
            .map(|p| RegexBuilder::new(p).case_insensitive(args.ignore_case).build())
            .transpose()?;
        let min_date = args
            .min_date
            .map(|d| parse_date_bound(d, timezone))
            .transpose()?;
        let max_date = args
            .max_date
            .map(|d| parse_date_bound(d, timezone))
            .transpose()?;

        Ok(Self {
            pattern,
            count: args.count,
            min_date,
            max_date,
            min_index: args.min_index,
            max_index: args.max_index,
        })
    }

    pub fn apply(&self, mut entries: Vec<Entry>) -> Vec<Entry> {
        let total = entries.len();

        if let Some(pattern) = &self.pattern {
            entries.retain(|e| pattern.is_match(e.command()));
        }

        if let Some(n) = self.count.filter(|n| *n > 0)
            && n < entries.len()
        {
            let skip = entries.len() - n;
            entries.drain(..skip);
        }

        entries.retain(|e| self.in_date_range(e) && self.in_index_range(e));

        tracing::debug!(total, selected = entries.len(), "applied selection");
        entries
    }

    /// Entries without a timestamp compare as epoch zero.
    fn in_date_range(&self, entry: &Entry) -> bool {
        let ts = entry.timestamp_or_epoch();
        self.min_date.is_none_or(|min| ts >= min) && self.max_date.is_none_or(|max| ts <= max)
    }

    fn in_index_range(&self, entry: &Entry) -> bool {
        let index = entry.index() as i64;
        let min = self.min_index.filter(|m| *m > 0);
        let max = self.max_index.filter(|m| *m > 0);
        min.is_none_or(|min| index >= min) && max.is_none_or(|max| index <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn entries(commands: &[(&str, i64)]) -> Vec<Entry> {
        commands
            .iter()
            .enumerate()
            .map(|(i, (cmd, ts))| Entry::single(i + 1, Some(*ts), 0, cmd))
            .collect()
    }

    fn indices(entries: &[Entry]) -> Vec<usize> {
        entries.iter().map(|e| e.index()).collect()
    }

    #[test]
    fn test_pattern_then_window() {
        let all = entries(&[("a", 1), ("b", 2), ("a", 3), ("c", 4), ("a", 5)]);
        let selection = Selection::parse(
            &SelectionArgs {
                pattern: Some("a"),
                count: Some(2),
                ..Default::default()
            },
            Timezone::Utc,
        )
        .unwrap();

        assert_eq!(indices(&selection.apply(all)), vec![3, 5]);
    }

    #[test]
    fn test_window_larger_than_sequence() {
        let all = entries(&[("a", 1), ("b", 2)]);
        let selection = Selection {
            count: Some(10),
            ..Default::default()
        };
        assert_eq!(indices(&selection.apply(all)), vec![1, 2]);
    }

    #[test]
    fn test_zero_count_keeps_everything() {
        let all = entries(&[("a", 1), ("b", 2), ("c", 3)]);
        let selection = Selection {
            count: Some(0),
            ..Default::default()
        };
        assert_eq!(selection.apply(all).len(), 3);
    }

    #[test]
    fn test_min_date_excludes_older_and_timestampless() {
        let all = vec![
            Entry::single(1, Some(50), 0, "old"),
            Entry::single(2, None, 0, "legacy"),
            Entry::single(3, Some(150), 0, "new"),
        ];
        let selection = Selection {
            min_date: Some(100),
            ..Default::default()
        };
        assert_eq!(indices(&selection.apply(all)), vec![3]);
    }

    #[test]
    fn test_max_date_keeps_timestampless() {
        let all = vec![
            Entry::single(1, None, 0, "legacy"),
            Entry::single(2, Some(100), 0, "edge"),
            Entry::single(3, Some(101), 0, "late"),
        ];
        let selection = Selection {
            max_date: Some(100),
            ..Default::default()
        };
        assert_eq!(indices(&selection.apply(all)), vec![1, 2]);
    }

    #[test]
    fn test_index_bounds_inclusive_and_nonpositive_unset() {
        let all = entries(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        let selection = Selection {
            min_index: Some(2),
            max_index: Some(4),
            ..Default::default()
        };
        assert_eq!(indices(&selection.apply(all.clone())), vec![2, 3, 4]);

        let unset = Selection {
            min_index: Some(0),
            max_index: Some(-1),
            ..Default::default()
        };
        assert_eq!(unset.apply(all).len(), 5);
    }

    #[test]
    fn test_index_filter_after_window() {
        let all = entries(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let selection = Selection {
            count: Some(2),
            max_index: Some(3),
            ..Default::default()
        };
        assert_eq!(indices(&selection.apply(all)), vec![3]);
    }

    #[test]
    fn test_ignore_case() {
        let all = entries(&[("Git status", 1), ("ls", 2)]);
        let selection = Selection::parse(
            &SelectionArgs {
                pattern: Some("^git"),
                ignore_case: true,
                ..Default::default()
            },
            Timezone::Utc,
        )
        .unwrap();
        assert_eq!(indices(&selection.apply(all)), vec![1]);
    }

    #[test]
    fn test_bad_inputs_are_config_errors() {
        let bad_pattern = Selection::parse(
            &SelectionArgs {
                pattern: Some("("),
                ..Default::default()
            },
            Timezone::Utc,
        );
        assert!(matches!(bad_pattern, Err(Error::InvalidPattern(_))));

        let bad_date = Selection::parse(
            &SelectionArgs {
                min_date: Some("last tuesday"),
                ..Default::default()
            },
            Timezone::Utc,
        );
        assert!(matches!(bad_date, Err(Error::InvalidDate(_))));
    }
}
