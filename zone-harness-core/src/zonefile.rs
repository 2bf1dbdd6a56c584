//! Semantic zone-file comparison: normalization and diffing.
//!
//! Exports are compared as sets of normalized lines, so record order and
//! tab-versus-space field separators never produce false discrepancies.

use std::collections::HashSet;

/// Prefix of origin directive lines, which never participate in comparison.
const ORIGIN_PREFIX: &str = "$ORIGIN";

/// Converts raw zone-file text into a set of comparable record lines.
///
/// Tabs are replaced by single spaces and the text is split on newlines.
/// Origin directive lines are always dropped; lines carrying a
/// space-delimited `NS` or `SOA` type token are dropped unless
/// `include_authority` is set. Everything else is kept verbatim — blank
/// lines included, which participate in comparison as ordinary entries.
#[must_use]
pub fn normalize_zone(text: &str, include_authority: bool) -> HashSet<String> {
    let normalized = text.replace('\t', " ");
    let mut lines = HashSet::new();

    for line in normalized.split('\n') {
        if line.starts_with(ORIGIN_PREFIX) {
            continue;
        }
        if !include_authority && (line.contains(" NS ") || line.contains(" SOA ")) {
            continue;
        }
        lines.insert(line.to_string());
    }

    lines
}

/// Reports the symmetric difference between an expected and an actual record
/// set, one diagnostic message per discrepancy.
///
/// Returns an empty report when the two sets are equal. Message order follows
/// set iteration order and is unspecified; treat the report as an unordered
/// collection.
#[must_use]
pub fn diff_zones(expected: &HashSet<String>, actual: &HashSet<String>) -> Vec<String> {
    let mut remaining: HashSet<&str> = actual.iter().map(String::as_str).collect();
    let mut report = Vec::new();

    for record in expected {
        if !remaining.remove(record.as_str()) {
            report.push(format!("Expected record '{record}' missing"));
        }
    }
    for record in remaining {
        report.push(format!("Unexpected record '{record}' present"));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> HashSet<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn origin_lines_are_always_excluded() {
        let text = "$ORIGIN example.com.\na.example.com. 300 IN A 1.2.3.4\n";
        let lines = normalize_zone(text, true);
        assert!(!lines.iter().any(|l| l.starts_with("$ORIGIN")));
    }

    #[test]
    fn authority_lines_excluded_by_default() {
        let text = "$ORIGIN example.com.\n\
                    example.com. 300 IN NS ns1.example.com.\n\
                    a.example.com. 300 IN A 1.2.3.4";
        let lines = normalize_zone(text, false);
        assert_eq!(lines, set(&["a.example.com. 300 IN A 1.2.3.4"]));
    }

    #[test]
    fn authority_lines_kept_when_requested() {
        let text = "example.com. 300 IN NS ns1.example.com.\n\
                    example.com. 300 IN SOA ns1.example.com. admin. 1 2 3 4 5";
        let lines = normalize_zone(text, true);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn soa_lines_excluded_by_default() {
        let text = "example.com. 300 IN SOA ns1.example.com. admin. 1 2 3 4 5\n";
        let lines = normalize_zone(text, false);
        // Only the trailing blank line survives.
        assert_eq!(lines, set(&[""]));
    }

    #[test]
    fn tabs_are_equivalent_to_spaces() {
        let tabbed = normalize_zone("a.example.com.\t300\tIN\tA\t1.2.3.4\n", false);
        let spaced = normalize_zone("a.example.com. 300 IN A 1.2.3.4\n", false);
        assert_eq!(tabbed, spaced);
    }

    #[test]
    fn blank_lines_participate_in_comparison() {
        let lines = normalize_zone("\n\n", false);
        assert_eq!(lines, set(&[""]));
    }

    #[test]
    fn diff_reports_missing_and_unexpected() {
        let expected = set(&["a", "b"]);
        let actual = set(&["b", "c"]);
        let report = diff_zones(&expected, &actual);
        assert_eq!(report.len(), 2);
        assert!(report.contains(&"Expected record 'a' missing".to_string()));
        assert!(report.contains(&"Unexpected record 'c' present".to_string()));
    }

    #[test]
    fn diff_is_empty_for_equal_sets() {
        // Same sets built from different input orderings.
        let expected = normalize_zone("a 1 IN A x\nb 1 IN A y\n", false);
        let actual = normalize_zone("b 1 IN A y\na 1 IN A x\n", false);
        assert!(diff_zones(&expected, &actual).is_empty());
    }

    #[test]
    fn diff_ignores_tab_space_differences_end_to_end() {
        let expected = normalize_zone("a.example.com. 300 IN A 1.2.3.4\n", false);
        let actual = normalize_zone("a.example.com.\t300\tIN\tA\t1.2.3.4\n", false);
        assert!(diff_zones(&expected, &actual).is_empty());
    }
}
