//! Offset-safe link injection into article HTML.
//!
//! Each decision is evaluated against the current (possibly already
//! modified) document, never against offsets captured before insertion
//! began: paragraphs are re-scanned after every splice, so one insertion
//! can never invalidate the next. A decision whose anchor text cannot be
//! located verbatim is silently skipped.

use tracing::debug;

use crate::paragraph::extract_paragraphs;
use crate::patterns::{ANCHOR_OPEN, ANY_TAG};
use crate::selector::LinkDecision;

/// Count anchor tags in an HTML document.
///
/// Used by callers to decide whether linking is needed at all.
#[must_use]
pub fn count_existing_links(html: &str) -> usize {
    ANCHOR_OPEN.find_iter(html).count()
}

/// Rewrite HTML so each decision's anchor text is wrapped in a hyperlink.
///
/// Anchors are placed at the first whole-word-bounded occurrence inside a
/// paragraph that does not already contain link markup. Anchors shorter
/// than `min_anchor_chars` are rejected outright as unsafe.
#[must_use]
pub fn inject_links(html: &str, decisions: &[LinkDecision], min_anchor_chars: usize) -> String {
    let mut document = html.to_string();

    for decision in decisions {
        if decision.anchor_text.chars().count() < min_anchor_chars {
            debug!(anchor = %decision.anchor_text, "skipped: anchor too short");
            continue;
        }
        match splice_anchor(&document, decision) {
            Some(updated) => document = updated,
            None => {
                debug!(
                    anchor = %decision.anchor_text,
                    url = %decision.target_url,
                    "skipped: anchor not locatable"
                );
            }
        }
    }

    document
}

/// Insert one anchor into the current document, or `None` if no qualifying
/// occurrence exists.
fn splice_anchor(document: &str, decision: &LinkDecision) -> Option<String> {
    // Paragraph boundaries are re-derived from the current document so
    // earlier splices are already accounted for.
    for span in extract_paragraphs(document) {
        if span.has_existing_link {
            continue;
        }
        let slice = &document[span.start_offset..span.end_offset];
        let Some(local) = find_in_text_segments(slice, &decision.anchor_text) else {
            continue;
        };
        let at = span.start_offset + local;
        let end = at + decision.anchor_text.len();

        let mut updated = String::with_capacity(document.len() + decision.target_url.len() + 16);
        updated.push_str(&document[..at]);
        updated.push_str("<a href=\"");
        updated.push_str(&decision.target_url);
        updated.push_str("\">");
        updated.push_str(&document[at..end]);
        updated.push_str("</a>");
        updated.push_str(&document[end..]);
        return Some(updated);
    }

    None
}

/// Byte offset of the first whole-word occurrence of `needle` that lies
/// entirely outside tag markup in `slice`.
///
/// The paragraph slice is walked tag by tag and only the text between tags
/// is searched, so attribute values (the `<p>` tag's own and any inner
/// tag's, e.g. an `alt` text) can never host a match.
fn find_in_text_segments(slice: &str, needle: &str) -> Option<usize> {
    let mut cursor = 0;
    for tag in ANY_TAG.find_iter(slice) {
        if tag.start() > cursor {
            if let Some(pos) = find_whole_word(&slice[cursor..tag.start()], needle) {
                return Some(cursor + pos);
            }
        }
        cursor = tag.end();
    }
    if cursor < slice.len() {
        if let Some(pos) = find_whole_word(&slice[cursor..], needle) {
            return Some(cursor + pos);
        }
    }
    None
}

/// Byte offset of the first whole-word-bounded occurrence of `needle` in
/// `haystack`, if any.
fn find_whole_word(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    for (pos, matched) in haystack.match_indices(needle) {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[pos + matched.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(anchor: &str, url: &str) -> LinkDecision {
        LinkDecision {
            anchor_text: anchor.to_string(),
            target_url: url.to_string(),
            context_snippet: String::new(),
            score: 50.0,
        }
    }

    #[test]
    fn count_existing_links_counts_anchor_tags() {
        assert_eq!(count_existing_links("<p>no links</p>"), 0);
        assert_eq!(
            count_existing_links(r#"<p><a href="/a">one</a> and <a>two</a></p>"#),
            2
        );
    }

    #[test]
    fn injects_anchor_preserving_casing() {
        let html = "<p>Read about Sourdough Baking today with friends</p>";
        let result = inject_links(html, &[decision("Sourdough Baking", "/guides/sourdough")], 4);
        assert_eq!(
            result,
            r#"<p>Read about <a href="/guides/sourdough">Sourdough Baking</a> today with friends</p>"#
        );
    }

    #[test]
    fn skips_paragraphs_with_existing_links() {
        let html = r#"<p>Sourdough Baking is <a href="/x">linked</a> already</p><p>More Sourdough Baking talk here</p>"#;
        let result = inject_links(html, &[decision("Sourdough Baking", "/guides/sourdough")], 4);
        // The first paragraph is untouched; the second hosts the new link
        assert!(result.contains(r#"<p>Sourdough Baking is <a href="/x">linked</a> already</p>"#));
        assert!(result.contains(r#"More <a href="/guides/sourdough">Sourdough Baking</a> talk"#));
    }

    #[test]
    fn unlocatable_anchor_is_dropped_not_fatal() {
        let html = "<p>Nothing matching lives in this paragraph of text</p>";
        let decisions = vec![
            decision("phantom phrase", "/a"),
            decision("paragraph of text", "/b"),
        ];
        let result = inject_links(html, &decisions, 4);
        assert!(!result.contains(r#"href="/a""#));
        assert!(result.contains(r#"<a href="/b">paragraph of text</a>"#));
    }

    #[test]
    fn rejects_anchors_shorter_than_minimum() {
        let html = "<p>abc appears here in a sentence</p>";
        let result = inject_links(html, &[decision("abc", "/a")], 4);
        assert_eq!(result, html);
    }

    #[test]
    fn whole_word_boundary_prevents_substring_matches() {
        let html = "<p>The word bread appears in breadth and then bread stands alone</p>";
        let result = inject_links(html, &[decision("bread", "/bread")], 4);
        // "breadth" must not be split; the standalone "bread" gets the link.
        // The first standalone occurrence is "bread appears".
        assert!(result.contains("breadth and"));
        assert!(result.contains(r#"<a href="/bread">bread</a> appears"#));
    }

    #[test]
    fn later_decisions_see_earlier_insertions() {
        let html = "<p>First topic phrase sits here in the opening paragraph today</p>\
                    <p>Second topic phrase sits in the closing paragraph instead</p>";
        let decisions = vec![
            decision("First topic phrase", "/first"),
            decision("Second topic phrase", "/second"),
        ];
        let result = inject_links(html, &decisions, 4);
        assert!(result.contains(r#"<a href="/first">First topic phrase</a>"#));
        assert!(result.contains(r#"<a href="/second">Second topic phrase</a>"#));
    }

    #[test]
    fn injection_makes_paragraph_ineligible_for_second_anchor() {
        let html = "<p>Alpha phrase and beta phrase share this single paragraph of words</p>";
        let decisions = vec![decision("Alpha phrase", "/a"), decision("beta phrase", "/b")];
        let result = inject_links(html, &decisions, 4);
        // After the first splice the paragraph contains link markup, so the
        // second decision finds no qualifying paragraph.
        assert!(result.contains(r#"<a href="/a">Alpha phrase</a>"#));
        assert!(!result.contains(r#"href="/b""#));
    }

    #[test]
    fn inner_tag_attributes_never_host_an_anchor() {
        let html = r#"<p>See the photo <img alt="sourdough baking guide" src="/x.jpg"> before reading our sourdough baking guide in full</p>"#;
        let result = inject_links(html, &[decision("sourdough baking guide", "/guides/sourdough")], 4);
        // The alt text matches first by byte order but sits inside markup;
        // the link must land on the plain-text occurrence instead.
        assert!(result.contains(r#"<img alt="sourdough baking guide" src="/x.jpg">"#));
        assert!(result.contains(r#"our <a href="/guides/sourdough">sourdough baking guide</a> in full"#));
    }

    #[test]
    fn anchor_found_only_inside_markup_is_dropped() {
        let html = r#"<p>See the photo <img alt="sourdough baking guide" src="/x.jpg"> for a closer look at the crumb</p>"#;
        let result = inject_links(html, &[decision("sourdough baking guide", "/guides/sourdough")], 4);
        assert_eq!(result, html);
    }

    #[test]
    fn opening_tag_attributes_never_host_an_anchor() {
        let html = r#"<p class="lead story">The lead story phrase appears in this text as well today</p>"#;
        let result = inject_links(html, &[decision("lead story", "/lead")], 4);
        assert!(result.starts_with(r#"<p class="lead story">"#));
        assert!(result.contains(r#"The <a href="/lead">lead story</a> phrase"#));
    }

    #[test]
    fn find_in_text_segments_skips_tag_regions() {
        let slice = r#"<p>intro <em title="bread here">text</em> real bread here</p>"#;
        let em_close = slice.find("</em>").map_or(0, |i| i);
        match find_in_text_segments(slice, "bread here") {
            Some(pos) => {
                assert_eq!(&slice[pos..pos + "bread here".len()], "bread here");
                // Past the <em> tag, not inside its title attribute
                assert!(pos > em_close);
            }
            None => panic!("expected a match in the text segment"),
        }
    }

    #[test]
    fn empty_decision_list_returns_input_unchanged() {
        let html = "<p>Untouched content</p>";
        assert_eq!(inject_links(html, &[], 4), html);
    }

    #[test]
    fn find_whole_word_respects_boundaries() {
        assert_eq!(find_whole_word("the bread rises", "bread"), Some(4));
        assert_eq!(find_whole_word("breadth", "bread"), None);
        assert_eq!(find_whole_word("rye-bread loaf", "bread"), Some(4));
        assert_eq!(find_whole_word("", "bread"), None);
    }
}
