//! Ordering for dotted game-version strings
//!
//! Version labels like "1.21.10" sort numerically per component, so that
//! "1.9" < "1.20" < "1.21.5" < "1.21.10". Plain lexicographic ordering gets
//! every one of those wrong.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Matches a dotted all-numeric version label
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)*$").unwrap());

/// Parse a version label into numeric components.
///
/// Returns `None` for anything that is not purely dotted digits
/// (snapshots, pre-releases, typos).
pub fn parse_version(label: &str) -> Option<Vec<u32>> {
    if !VERSION_RE.is_match(label) {
        return None;
    }
    label.split('.').map(|part| part.parse().ok()).collect()
}

/// Compare two version labels.
///
/// Numeric versions compare component-wise with missing components treated
/// as zero, so "1.21" == "1.21.0". Non-numeric labels sort after numeric
/// ones, falling back to string order among themselves.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(pa), Some(pb)) => {
            let len = pa.len().max(pb.len());
            for i in 0..len {
                let na = pa.get(i).copied().unwrap_or(0);
                let nb = pb.get(i).copied().unwrap_or(0);
                match na.cmp(&nb) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.21.5"), Some(vec![1, 21, 5]));
        assert_eq!(parse_version("1"), Some(vec![1]));
        assert_eq!(parse_version("24w14a"), None);
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("1..2"), None);
    }

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(compare_versions("1.9", "1.20"), Ordering::Less);
        assert_eq!(compare_versions("1.21.5", "1.21.10"), Ordering::Less);
        assert_eq!(compare_versions("1.21.10", "1.21.5"), Ordering::Greater);
        assert_eq!(compare_versions("1.21", "1.21.0"), Ordering::Equal);
    }

    #[test]
    fn test_non_numeric_sorts_last() {
        assert_eq!(compare_versions("1.21.5", "24w14a"), Ordering::Less);
        assert_eq!(compare_versions("24w14a", "1.9"), Ordering::Greater);
        assert_eq!(compare_versions("24w14a", "23w31a"), Ordering::Greater);
    }

    #[test]
    fn test_sort_full_list() {
        let mut versions = vec!["1.21.10", "24w14a", "1.9", "1.21.5", "1.20"];
        versions.sort_by(|a, b| compare_versions(a, b));
        assert_eq!(versions, vec!["1.9", "1.20", "1.21.5", "1.21.10", "24w14a"]);
    }
}
