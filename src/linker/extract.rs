//! Extraction of existing wiki-style links from document text.

use std::collections::HashSet;

use regex::Regex;

use crate::domain::WikiLink;

/// Returns the pattern matching a single wiki-style link.
///
/// Captures: target (everything up to `]`, `|`, or `#`), optional section
/// anchor, optional alias. The section group is greedy, so `[[a#b|c]]`
/// parses as section `b|c` with no alias; the serialized form round-trips
/// either way.
pub(crate) fn link_pattern() -> Regex {
    Regex::new(r"\[\[([^\]|#]+)(?:#([^\]]+))?(?:\|([^\]]+))?\]\]").unwrap()
}

pub(crate) fn link_from_captures(caps: &regex::Captures<'_>) -> WikiLink {
    WikiLink::new(
        &caps[1],
        caps.get(2).map(|m| m.as_str()),
        caps.get(3).map(|m| m.as_str()),
    )
}

/// Extracts the ordered sequence of distinct links occurring in `text`.
///
/// Links are deduplicated by their exact serialized form, not by target:
/// `[[Alpha]]` and `[[Alpha|A]]` are two distinct entries. First-seen order
/// is preserved.
pub fn extract_links(text: &str) -> Vec<WikiLink> {
    let re = link_pattern();
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for caps in re.captures_iter(text) {
        let link = link_from_captures(&caps);
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

/// Builds the exclusion set used by the mention scanner.
///
/// For every link occurrence in `text`, both the trimmed target and the
/// trimmed alias (or the target when no alias is present) are added in
/// lowercase.
pub fn linked_names(text: &str) -> HashSet<String> {
    let re = link_pattern();
    let mut names = HashSet::new();

    for caps in re.captures_iter(text) {
        let target = caps[1].trim();
        let alias = caps.get(3).map_or(target, |m| m.as_str().trim());
        names.insert(target.to_lowercase());
        names.insert(alias.to_lowercase());
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn serialized(text: &str) -> Vec<String> {
        extract_links(text).iter().map(ToString::to_string).collect()
    }

    // ===========================================
    // Link Extraction
    // ===========================================

    #[test]
    fn extracts_bare_link() {
        assert_eq!(serialized("See [[Alpha]]."), vec!["[[Alpha]]"]);
    }

    #[test]
    fn extracts_section_and_alias() {
        let links = extract_links("[[Alpha#Intro]] and [[Beta|B]]");
        assert_eq!(links[0].target(), "Alpha");
        assert_eq!(links[0].section(), Some("Intro"));
        assert_eq!(links[1].target(), "Beta");
        assert_eq!(links[1].alias(), Some("B"));
    }

    #[test]
    fn distinct_serialized_forms_are_kept() {
        let text = "See [[Alpha]] and [[Alpha|A]] and [[Beta]].";
        assert_eq!(serialized(text), vec!["[[Alpha]]", "[[Alpha|A]]", "[[Beta]]"]);
    }

    #[test]
    fn exact_duplicates_are_dropped() {
        let text = "[[Alpha]] then [[Beta]] then [[Alpha]] again";
        assert_eq!(serialized(text), vec!["[[Alpha]]", "[[Beta]]"]);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let text = "[[Gamma]] [[Alpha]] [[Beta]] [[Alpha]]";
        assert_eq!(serialized(text), vec!["[[Gamma]]", "[[Alpha]]", "[[Beta]]"]);
    }

    #[test]
    fn empty_brackets_do_not_match() {
        assert!(extract_links("[[]] and [[|alias]]").is_empty());
    }

    #[test]
    fn section_group_is_greedy_past_pipes() {
        // Quirk of the pattern: the section swallows the pipe. The
        // serialized form still round-trips.
        let links = extract_links("[[a#b|c]]");
        assert_eq!(links[0].section(), Some("b|c"));
        assert_eq!(links[0].alias(), None);
        assert_eq!(links[0].to_string(), "[[a#b|c]]");
    }

    // ===========================================
    // Exclusion Set
    // ===========================================

    #[test]
    fn linked_names_lowercases_targets() {
        let names = linked_names("[[Alpha]]");
        assert!(names.contains("alpha"));
    }

    #[test]
    fn linked_names_includes_alias_and_target() {
        let names = linked_names("[[Alpha|The First]]");
        assert!(names.contains("alpha"));
        assert!(names.contains("the first"));
    }

    #[test]
    fn linked_names_trims_whitespace() {
        let names = linked_names("[[ Alpha | A ]]");
        assert!(names.contains("alpha"));
        assert!(names.contains("a"));
    }

    #[test]
    fn linked_names_empty_for_plain_text() {
        assert!(linked_names("no links here").is_empty());
    }
}
