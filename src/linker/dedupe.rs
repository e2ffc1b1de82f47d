//! Duplicate link collapsing below the `links:` line.

use std::collections::HashSet;

use super::extract::{link_from_captures, link_pattern};

/// Demotes repeated links below the `links:` line to plain text.
///
/// The document is walked line by line. Everything up to and including the
/// first line starting with `links:` is left untouched, frontmatter
/// included. On every later line, each link occurrence is keyed by
/// `target#section` (or bare target): the first occurrence of a key keeps
/// its link form and marks the key seen; later occurrences are replaced by
/// their alias if present, else their bare target. Embeds (`![[...]]`) pass
/// through unchanged and do not mark their key seen.
///
/// Returns `Some(new_text)` when anything changed, `None` otherwise, so a
/// second run over the output always returns `None`.
pub fn collapse_duplicates(text: &str) -> Option<String> {
    let re = link_pattern();
    let mut seen: HashSet<String> = HashSet::new();
    let mut past_links_line = false;

    let mut out_lines: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if past_links_line {
            let mut rewritten = String::with_capacity(line.len());
            let mut last = 0;

            for caps in re.captures_iter(line) {
                let m = caps.get(0).unwrap();
                rewritten.push_str(&line[last..m.start()]);

                if line[..m.start()].ends_with('!') {
                    // Embed: never collapsed, never counted.
                    rewritten.push_str(m.as_str());
                } else {
                    let link = link_from_captures(&caps);
                    let key = link.dedupe_key();
                    if seen.contains(&key) {
                        rewritten.push_str(link.display_text());
                    } else {
                        seen.insert(key);
                        rewritten.push_str(m.as_str());
                    }
                }
                last = m.end();
            }
            rewritten.push_str(&line[last..]);
            out_lines.push(rewritten);
        } else {
            out_lines.push(line.to_string());
        }

        if line.starts_with("links:") {
            past_links_line = true;
        }
    }

    let updated = out_lines.join("\n");
    if updated != text { Some(updated) } else { None }
}
