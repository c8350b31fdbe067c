//! Outline construction.
//!
//! Two passes over the content tree: the first records every identifier
//! already present, the second collects h1–h4 headings in document order and
//! gives the ones without an id (or repeating an earlier heading's id) a
//! fresh `heading-{index}[-{slug}]`.
//! Placement then runs over the flat heading list with a stack of open
//! entries.

use rustc_hash::FxHashSet;

use super::{Outline, OutlineNode};
use crate::heading::{is_outline_heading, level_from_tag, slugify};
use crate::node::Element;

/// Prefix of identifiers assigned to headings that have none.
pub const OUTLINE_ID_PREFIX: &str = "heading-";

/// Identifier for the heading at `index` (its position among h1–h4).
pub fn heading_id(index: usize, text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        format!("{OUTLINE_ID_PREFIX}{index}")
    } else {
        format!("{OUTLINE_ID_PREFIX}{index}-{slug}")
    }
}

/// Scan `content`, assign missing heading ids, and build the outline.
pub fn build(content: &mut Element) -> Outline {
    let mut taken = FxHashSet::default();
    content.for_each_element(&mut |elem: &Element| {
        if let Some(id) = elem.id() {
            taken.insert(id.to_string());
        }
    });

    let mut claimed = FxHashSet::default();
    let mut headings = Vec::new();
    content.for_each_element_mut(&mut |elem: &mut Element| {
        if !is_outline_heading(elem) {
            return;
        }
        let Some(level) = level_from_tag(&elem.tag) else {
            return;
        };
        let text = elem.text_content();
        let id = match elem.id().filter(|id| claimed.insert(id.to_string())) {
            Some(id) => id.to_string(),
            None => {
                let id = unique(heading_id(headings.len(), &text), &mut taken);
                claimed.insert(id.clone());
                elem.set_attr("id", id.as_str());
                id
            }
        };
        headings.push(OutlineNode::leaf(level, text, id));
    });

    if headings.is_empty() {
        tracing::debug!("no headings found");
        return Outline::Empty;
    }
    tracing::debug!(headings = headings.len(), "outline built");
    Outline::Forest(place(headings))
}

/// Suffix `id` until it collides with nothing already in the document.
fn unique(id: String, taken: &mut FxHashSet<String>) -> String {
    let mut candidate = id.clone();
    let mut n = 1;
    while taken.contains(&candidate) {
        candidate = format!("{id}-{n}");
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

/// Nest a flat, document-ordered heading list into a forest.
///
/// A heading becomes a child of the closest preceding heading with a
/// strictly smaller level; with no such heading it starts a top-level entry.
pub fn place(headings: impl IntoIterator<Item = OutlineNode>) -> Vec<OutlineNode> {
    let mut roots = Vec::new();
    let mut open: Vec<OutlineNode> = Vec::new();

    for node in headings {
        while open.last().is_some_and(|top| top.level >= node.level) {
            close(&mut open, &mut roots);
        }
        open.push(node);
    }
    while !open.is_empty() {
        close(&mut open, &mut roots);
    }
    roots
}

fn close(open: &mut Vec<OutlineNode>, roots: &mut Vec<OutlineNode>) {
    if let Some(done) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn content(headings: &[(u8, &str)]) -> Element {
        Element::new("div").children(headings.iter().map(|(level, text)| {
            Element::new(format!("h{level}")).text(*text)
        }))
    }

    fn shape(nodes: &[OutlineNode]) -> String {
        nodes
            .iter()
            .map(|n| {
                if n.has_children() {
                    format!("{}({})", n.text, shape(&n.children))
                } else {
                    n.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_intro_setup_next() {
        let mut doc = content(&[(1, "Intro"), (2, "Setup"), (1, "Next")]);
        let outline = build(&mut doc);
        assert_eq!(shape(outline.roots()), "Intro(Setup) Next");
        assert_eq!(outline.ids(), vec!["heading-0-intro", "heading-1-setup", "heading-2-next"]);

        let first = doc.first_child().unwrap();
        assert_eq!(first.id(), Some("heading-0-intro"));
    }

    #[test]
    fn test_existing_ids_are_kept() {
        let mut doc = Element::new("div")
            .child(Element::new("h1").with_id("start").text("Intro"))
            .child(Element::new("h2").text("Setup"));
        let outline = build(&mut doc);
        assert_eq!(outline.ids(), vec!["start", "heading-1-setup"]);
    }

    #[test]
    fn test_no_headings() {
        let mut doc = Element::new("div").child(Element::new("p").text("text"));
        assert_eq!(build(&mut doc), Outline::Empty);

        let mut deep = content(&[(5, "Five"), (6, "Six")]);
        assert!(build(&mut deep).is_empty());
    }

    #[test]
    fn test_level_four_nests_under_level_three() {
        let mut doc = content(&[(1, "A"), (2, "B"), (3, "C"), (4, "D"), (2, "E")]);
        assert_eq!(shape(build(&mut doc).roots()), "A(B(C(D)) E)");
    }

    #[test]
    fn test_skipped_levels() {
        let mut doc = content(&[(3, "Deep"), (1, "Top"), (3, "Child"), (2, "Mid"), (3, "Leaf")]);
        assert_eq!(shape(build(&mut doc).roots()), "Deep Top(Child Mid(Leaf))");
    }

    #[test]
    fn test_empty_text_gets_index_only_id() {
        let mut doc = content(&[(1, "!!!"), (2, "")]);
        assert_eq!(build(&mut doc).ids(), vec!["heading-0", "heading-1"]);
    }

    #[test]
    fn test_generated_id_avoids_existing() {
        let mut doc = Element::new("div")
            .child(Element::new("h1").text("Intro"))
            .child(Element::new("p").with_id("heading-0-intro"));
        assert_eq!(build(&mut doc).ids(), vec!["heading-0-intro-1"]);
    }

    #[test]
    fn test_repeated_existing_id_is_replaced() {
        let mut doc = Element::new("div")
            .child(Element::new("h1").with_id("dup").text("One"))
            .child(Element::new("h2").with_id("dup").text("Two"));
        let outline = build(&mut doc);
        assert_eq!(outline.ids(), vec!["dup", "heading-1-two"]);
        assert_eq!(doc.children_elements().nth(1).and_then(Element::id), Some("heading-1-two"));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let mut doc = content(&[(1, " Intro ")]);
        let outline = build(&mut doc);
        assert_eq!(outline.roots()[0].text, " Intro ");
        assert_eq!(outline.ids(), vec!["heading-0-intro"]);
    }

    #[test]
    fn test_nested_headings_are_found() {
        let mut doc = Element::new("div").child(
            Element::new("section").child(Element::new("h2").text("Inside")),
        );
        assert_eq!(build(&mut doc).ids(), vec!["heading-0-inside"]);
    }

    fn collect_parents<'a>(
        nodes: &'a [OutlineNode],
        parent: Option<&'a OutlineNode>,
        out: &mut Vec<(Option<u8>, u8)>,
    ) {
        for node in nodes {
            out.push((parent.map(|p| p.level), node.level));
            collect_parents(&node.children, Some(node), out);
        }
    }

    proptest! {
        #[test]
        fn prop_parents_have_smaller_levels(levels in prop::collection::vec(1u8..=4, 0..30)) {
            let headings: Vec<_> = levels.iter().map(|l| (*l, "Same")).collect();
            let mut doc = content(&headings);
            let outline = build(&mut doc);

            let mut pairs = Vec::new();
            collect_parents(outline.roots(), None, &mut pairs);
            prop_assert_eq!(pairs.len(), levels.len());
            for (parent, level) in pairs {
                if let Some(parent) = parent {
                    prop_assert!(parent < level);
                }
                if level == 2 {
                    if let Some(parent) = parent {
                        prop_assert_eq!(parent, 1);
                    }
                }
            }

            let ids = outline.ids();
            let distinct: FxHashSet<_> = ids.iter().collect();
            prop_assert_eq!(distinct.len(), ids.len());
        }

        #[test]
        fn prop_preorder_is_document_order(levels in prop::collection::vec(1u8..=4, 0..30)) {
            let texts: Vec<String> = (0..levels.len()).map(|i| format!("t{i}")).collect();
            let headings: Vec<_> = levels.iter().zip(&texts).map(|(l, t)| (*l, t.as_str())).collect();
            let outline = build(&mut content(&headings));
            let order: Vec<_> = outline.iter().map(|n| n.text.clone()).collect();
            prop_assert_eq!(order, texts);
        }
    }
}
