//! Prefix completion over the command vocabulary.

/// Returns the names that start with `partial` (case-insensitive), preserving `names` order.
pub fn matching_commands<'a>(partial: &str, names: &[&'a str]) -> Vec<&'a str> {
    let partial = partial.to_lowercase();
    names
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().starts_with(&partial))
        .collect()
}

/// Longest prefix shared by every candidate, compared on lowercase text.
pub fn longest_common_prefix(candidates: &[&str]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };
    let rest = rest
        .iter()
        .map(|candidate| candidate.to_lowercase().chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    first
        .to_lowercase()
        .chars()
        .enumerate()
        .take_while(|(idx, ch)| rest.iter().all(|other| other.get(*idx) == Some(ch)))
        .map(|(_, ch)| ch)
        .collect()
}

/// Picks the entry after `current` in `matches`, wrapping to the start.
///
/// When `current` is not exactly one of the candidates the first candidate is chosen.
pub fn cycle_candidate<'a>(current: &str, matches: &[&'a str]) -> Option<&'a str> {
    if matches.is_empty() {
        return None;
    }
    let next = match matches
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(current))
    {
        Some(idx) => (idx + 1) % matches.len(),
        None => 0,
    };
    Some(matches[next])
}

/// Completes `partial` against `names` with single-shot semantics.
///
/// - empty input or no match: unchanged
/// - one match: the full name
/// - several matches sharing a prefix longer than the input: that prefix
/// - otherwise: the candidate after the input in declared order (first if the input is not
///   itself a candidate)
pub fn complete_input(partial: &str, names: &[&str]) -> String {
    if partial.is_empty() {
        return partial.to_string();
    }

    let matches = matching_commands(partial, names);
    match matches.as_slice() {
        [] => partial.to_string(),
        [only] => (*only).to_string(),
        _ => {
            let prefix = longest_common_prefix(&matches);
            if prefix.chars().count() > partial.chars().count() {
                prefix
            } else {
                cycle_candidate(partial, &matches)
                    .unwrap_or(partial)
                    .to_string()
            }
        }
    }
}

/// Returns whether completing `partial` would enter the ambiguous cycling branch.
pub(crate) fn is_ambiguous(partial: &str, names: &[&str]) -> bool {
    if partial.is_empty() {
        return false;
    }
    let matches = matching_commands(partial, names);
    matches.len() > 1
        && longest_common_prefix(&matches).chars().count() <= partial.chars().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NAMES: &[&str] = &["help", "home", "history", "hist"];

    #[test]
    fn matching_preserves_declared_order_and_ignores_case() {
        assert_eq!(matching_commands("HI", NAMES), vec!["history", "hist"]);
        assert!(matching_commands("zz", NAMES).is_empty());
    }

    #[test]
    fn common_prefix_of_candidates() {
        assert_eq!(longest_common_prefix(&["history", "hist"]), "hist");
        assert_eq!(longest_common_prefix(&["help", "home"]), "h");
        assert_eq!(longest_common_prefix(&["only"]), "only");
        assert_eq!(longest_common_prefix(&[]), "");
    }

    #[test]
    fn empty_and_unmatched_input_is_unchanged() {
        assert_eq!(complete_input("", NAMES), "");
        assert_eq!(complete_input("xyz", NAMES), "xyz");
    }

    #[test]
    fn single_match_completes_to_canonical_name() {
        assert_eq!(complete_input("HE", NAMES), "help");
        assert_eq!(complete_input("home", NAMES), "home");
    }

    #[test]
    fn shared_prefix_extends_partially() {
        assert_eq!(complete_input("hi", NAMES), "hist");
    }

    #[test]
    fn ambiguous_input_cycles_in_declared_order() {
        assert_eq!(complete_input("h", NAMES), "help");
        assert_eq!(complete_input("hist", NAMES), "history");
        assert!(is_ambiguous("hist", NAMES));
        assert!(!is_ambiguous("hi", NAMES));
    }

    #[test]
    fn cycle_wraps_and_defaults_to_first() {
        let matches = ["history", "hist"];
        assert_eq!(cycle_candidate("history", &matches), Some("hist"));
        assert_eq!(cycle_candidate("HIST", &matches), Some("history"));
        assert_eq!(cycle_candidate("h", &matches), Some("history"));
        assert_eq!(cycle_candidate("h", &[]), None);
    }
}
