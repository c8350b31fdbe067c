//! Syntax highlighting engine interface.
//!
//! The engine itself is pluggable: `PlainHighlighter` only escapes, and
//! `SyntectHighlighter` (feature `syntect`) produces classed spans. Both
//! share the `highlight_all` pass that marks processed code regions with
//! the `hljs` class, so running it twice changes nothing.

use crate::node::{Element, Node, Text};
use crate::render::escape_html;

/// Class marking a code region as already highlighted.
pub const HIGHLIGHTED_CLASS: &str = "hljs";

/// Highlights code snippets into markup.
pub trait Highlight {
    /// Highlight `code` as `language`; `None` if the language is unknown.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;

    /// Highlight `code` with best-effort language detection.
    fn highlight_auto(&self, code: &str) -> String;

    /// Highlight with a language hint, falling back to detection.
    fn highlight_code(&self, code: &str, language: Option<&str>) -> String {
        language
            .filter(|lang| !lang.is_empty())
            .and_then(|lang| self.highlight(code, lang))
            .unwrap_or_else(|| self.highlight_auto(code))
    }

    /// Highlight every `pre > code` region under `root` not yet marked.
    ///
    /// Returns the number of regions highlighted by this call.
    fn highlight_all(&self, root: &mut Element) -> usize {
        let mut count = 0;
        root.for_each_element_mut(&mut |elem: &mut Element| {
            if elem.tag != "pre" {
                return;
            }
            for code in elem.children_elements_mut() {
                if code.tag != "code" || code.has_class(HIGHLIGHTED_CLASS) {
                    continue;
                }
                let language = language_of(code).map(str::to_string);
                let markup = self.highlight_code(&code.text_content(), language.as_deref());
                code.replace_children([Node::Text(Text::raw(markup))]);
                code.add_class(HIGHLIGHTED_CLASS);
                count += 1;
            }
        });
        count
    }
}

/// Language hint from a `language-xxx` (or `lang-xxx`) class.
pub fn language_of(code: &Element) -> Option<&str> {
    code.class()?.split_whitespace().find_map(|class| {
        class
            .strip_prefix("language-")
            .or_else(|| class.strip_prefix("lang-"))
            .filter(|lang| !lang.is_empty())
    })
}

impl<T: Highlight> Highlight for &T {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        (**self).highlight(code, language)
    }

    fn highlight_auto(&self, code: &str) -> String {
        (**self).highlight_auto(code)
    }
}

// =============================================================================
// PlainHighlighter
// =============================================================================

/// Escapes code without adding any highlighting markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlight for PlainHighlighter {
    fn highlight(&self, _code: &str, _language: &str) -> Option<String> {
        None
    }

    fn highlight_auto(&self, code: &str) -> String {
        escape_html(code)
    }
}

// =============================================================================
// SyntectHighlighter
// =============================================================================

#[cfg(feature = "syntect")]
pub use self::syntect_engine::SyntectHighlighter;

#[cfg(feature = "syntect")]
mod syntect_engine {
    use syntect::html::{ClassStyle, ClassedHTMLGenerator};
    use syntect::parsing::{SyntaxReference, SyntaxSet};
    use syntect::util::LinesWithEndings;

    use super::Highlight;
    use crate::render::escape_html;

    /// Class prefix for emitted token spans (`hljs-keyword`, ...).
    const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

    /// Highlighter backed by syntect's default syntax set.
    #[derive(Debug)]
    pub struct SyntectHighlighter {
        syntaxes: SyntaxSet,
    }

    impl Default for SyntectHighlighter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SyntectHighlighter {
        pub fn new() -> Self {
            Self {
                syntaxes: SyntaxSet::load_defaults_newlines(),
            }
        }

        fn render(&self, syntax: &SyntaxReference, code: &str) -> Option<String> {
            let mut generator =
                ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
            for line in LinesWithEndings::from(code) {
                generator.parse_html_for_line_which_includes_newline(line).ok()?;
            }
            Some(generator.finalize())
        }
    }

    impl Highlight for SyntectHighlighter {
        fn highlight(&self, code: &str, language: &str) -> Option<String> {
            let syntax = self.syntaxes.find_syntax_by_token(language)?;
            self.render(syntax, code)
        }

        fn highlight_auto(&self, code: &str) -> String {
            let syntax = code
                .lines()
                .next()
                .and_then(|line| self.syntaxes.find_syntax_by_first_line(line))
                .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
            self.render(syntax, code).unwrap_or_else(|| escape_html(code))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_known_language_emits_spans() {
            let html = SyntectHighlighter::new()
                .highlight("fn main() {}", "rust")
                .unwrap();
            assert!(html.contains("hljs-"));
        }

        #[test]
        fn test_unknown_language() {
            assert!(SyntectHighlighter::new().highlight("x", "no-such-lang").is_none());
        }
    }
}
