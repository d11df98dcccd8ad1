use std::ops::RangeInclusive;

/// Collapses ascending values into maximal runs of consecutive integers.
/// Repeated values fold into the run they repeat.
pub fn runs(sorted: &[i64]) -> Vec<RangeInclusive<i64>> {
    let mut runs = Vec::new();
    let Some((&first, rest)) = sorted.split_first() else {
        return runs;
    };

    let (mut start, mut previous) = (first, first);
    for &current in rest {
        if current == previous || previous.checked_add(1) == Some(current) {
            previous = current;
        } else {
            runs.push(start..=previous);
            start = current;
            previous = current;
        }
    }
    runs.push(start..=previous);
    runs
}

/// Renders a single run: the bare number, or `start..end`.
pub fn format_run(run: &RangeInclusive<i64>) -> String {
    if run.start() == run.end() {
        run.start().to_string()
    } else {
        format!("{}..{}", run.start(), run.end())
    }
}

/// Comma-joined runs in ascending order. An empty input formats as the
/// empty string, which parses back to an empty range.
pub fn format(sorted: &[i64]) -> String {
    runs(sorted)
        .iter()
        .map(format_run)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty() {
        assert_eq!(format(&[]), "");
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn test_format_runs() {
        assert_eq!(format(&[5]), "5");
        assert_eq!(format(&[5, 6, 7]), "5..7");
        assert_eq!(format(&[5, 7]), "5,7");
        assert_eq!(format(&[1, 2, 3, 10, 11, 13]), "1..3,10..11,13");
        assert_eq!(format(&[-3, -2, -1, 0, 1]), "-3..1");
    }

    #[test]
    fn test_runs_view() {
        assert_eq!(runs(&[1, 2, 3, 10, 11, 13]), vec![1..=3, 10..=11, 13..=13]);
    }

    #[test]
    fn test_repeated_values_fold() {
        assert_eq!(format(&[1, 1, 2, 2, 4]), "1..2,4");
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(format(&[i64::MAX - 1, i64::MAX]), "9223372036854775806..9223372036854775807");
        assert_eq!(format(&[i64::MIN, 0, i64::MAX]), "-9223372036854775808,0,9223372036854775807");
    }
}
