use tracing::warn;

use crate::source::CandidateSource;

/// Splits picker output into trimmed selections, dropping blank lines.
pub fn selected_lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Maps every selection in `output` back through `source`, in the order the
/// picker printed them.
///
/// Lines the source does not recognize are skipped with a warning.
pub fn map(output: &str, source: &(impl CandidateSource + ?Sized)) -> Vec<String> {
    selected_lines(output)
        .filter_map(|line| {
            let value = source.resolve(line);
            if value.is_none() {
                warn!(%line, "picker returned an unknown candidate, skipping");
            }
            value
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;
    use crate::source::Labeled;
    use crate::source::Plain;

    #[rstest]
    #[case("a\n\n b \n", &["a", "b"])]
    #[case("", &[])]
    #[case("\n \n\t\n", &[])]
    #[case("c\nb\na", &["c", "b", "a"])]
    #[case("x\r\ny\r\n", &["x", "y"])]
    fn selected_lines_works(#[case] output: &str, #[case] expected: &[&str]) {
        let lines: Vec<&str> = selected_lines(output).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn plain_passes_through() {
        let items: [&str; 0] = [];
        assert_eq!(map("a\n\n b \n", &Plain::new(&items)), ["a", "b"]);
    }

    #[test]
    fn labeled_maps_to_payloads() {
        let files = HashMap::from([
            ("foo.txt".to_owned(), "/abs/foo.txt".to_owned()),
            ("bar.txt".to_owned(), "/abs/bar.txt".to_owned()),
        ]);
        let source = Labeled::new(&files);

        assert_eq!(map("foo.txt\n", &source), ["/abs/foo.txt"]);
        assert_eq!(
            map("bar.txt\nfoo.txt\n", &source),
            ["/abs/bar.txt", "/abs/foo.txt"]
        );
    }

    #[test]
    fn labeled_skips_unknown() {
        let files = HashMap::from([("foo.txt".to_owned(), "/abs/foo.txt".to_owned())]);
        let source = Labeled::new(&files);

        let mapped = map("ghost\nfoo.txt\n", &source);
        assert_eq!(mapped, ["/abs/foo.txt"]);
        assert!(mapped.iter().all(|value| files.values().any(|v| v == value)));
    }
}
