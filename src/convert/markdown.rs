//! Conversion from Markdown to content nodes
//!
//! Builds the content tree directly from `pulldown-cmark` events instead of
//! going through an HTML string, so headings, links and code blocks arrive
//! as real elements.
//!
//! # Flow
//!
//! ```text
//! markdown source
//!         │
//!         ▼ pulldown_cmark::Parser (ConvertOptions → Options)
//! Event stream
//!         │
//!         ▼ TreeBuilder (heading ids, code highlighting)
//! Vec<Node>  (children of div.post-content)
//! ```

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use rustc_hash::FxHashSet;

use super::{Convert, ConvertOptions};
use crate::error::ConvertError;
use crate::heading::{self, slugify};
use crate::highlight::{Highlight, PlainHighlighter, HIGHLIGHTED_CLASS};
use crate::node::{Element, Node, Text};

// =============================================================================
// MarkdownConverter
// =============================================================================

/// Markdown conversion engine.
///
/// Fenced code blocks with a language `H` recognizes are highlighted during
/// conversion; the rest are left for `Highlight::highlight_all`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter<H = PlainHighlighter> {
    options: ConvertOptions,
    highlighter: H,
}

impl MarkdownConverter {
    /// Create a converter that escapes code blocks without highlighting.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            highlighter: PlainHighlighter,
        }
    }
}

impl<H: Highlight> MarkdownConverter<H> {
    /// Replace the code-highlighting callback.
    pub fn with_highlighter<H2: Highlight>(self, highlighter: H2) -> MarkdownConverter<H2> {
        MarkdownConverter {
            options: self.options,
            highlighter,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl<H: Highlight> Convert for MarkdownConverter<H> {
    fn convert(&self, source: &str) -> Result<Vec<Node>, ConvertError> {
        Ok(from_markdown(source, &self.options, &self.highlighter))
    }
}

/// Convert markdown source to content nodes.
pub fn from_markdown<H: Highlight>(source: &str, options: &ConvertOptions, highlighter: &H) -> Vec<Node> {
    let events: Vec<Event<'_>> = Parser::new_ext(source, parser_options(options)).collect();
    let mut builder = TreeBuilder::new(options, highlighter);
    for event in &events {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            builder.heading_ids.insert(id.to_string());
        }
    }
    for event in events {
        builder.event(event);
    }
    builder.finish()
}

fn parser_options(options: &ConvertOptions) -> Options {
    let mut opts = Options::ENABLE_HEADING_ATTRIBUTES;
    if options.gfm {
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        opts.insert(Options::ENABLE_TASKLISTS);
        opts.insert(Options::ENABLE_FOOTNOTES);
    }
    opts
}

// =============================================================================
// TreeBuilder
// =============================================================================

/// Code block being collected
struct PendingCode {
    language: Option<String>,
    text: String,
}

/// Internal state for conversion
struct TreeBuilder<'a, H> {
    options: &'a ConvertOptions,
    highlighter: &'a H,
    /// Open elements; index 0 is a synthetic root
    stack: Vec<Element>,
    /// Elements pushed per open tag, popped together on its end
    frames: Vec<usize>,
    code: Option<PendingCode>,
    in_table_head: bool,
    /// Every heading id issued so far, explicit ones included
    heading_ids: FxHashSet<String>,
}

impl<'a, H: Highlight> TreeBuilder<'a, H> {
    fn new(options: &'a ConvertOptions, highlighter: &'a H) -> Self {
        Self {
            options,
            highlighter,
            stack: vec![Element::new("#root")],
            frames: Vec::new(),
            code: None,
            in_table_head: false,
            heading_ids: FxHashSet::default(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => match &mut self.code {
                Some(code) => code.text.push_str(&text),
                None => self.top().push_text(text.to_string()),
            },
            Event::Code(code) => self.top().push_elem(Element::new("code").text(code.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.top().push(Text::raw(html.to_string()));
            }
            Event::SoftBreak => {
                if self.options.line_breaks_significant {
                    self.top().push_elem(Element::new("br"));
                } else {
                    self.top().push_text("\n");
                }
            }
            Event::HardBreak => self.top().push_elem(Element::new("br")),
            Event::Rule => self.top().push_elem(Element::new("hr")),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input")
                    .attr("type", "checkbox")
                    .attr("disabled", "");
                if checked {
                    input.set_attr("checked", "");
                }
                self.top().push_elem(input);
            }
            Event::FootnoteReference(label) => {
                let link = Element::new("a")
                    .attr("href", format!("#{label}"))
                    .text(label.to_string());
                self.top()
                    .push_elem(Element::new("sup").with_class("footnote-reference").child(link));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let opened: Vec<Element> = match tag {
            Tag::Paragraph => vec![Element::new("p")],
            Tag::Heading { level, id, classes, .. } => {
                let mut elem = Element::new(format!("h{}", level as u8));
                if let Some(id) = id {
                    elem.set_attr("id", id.to_string());
                }
                if !classes.is_empty() {
                    let classes: Vec<&str> = classes.iter().map(|c| &**c).collect();
                    elem.set_attr("class", classes.join(" "));
                }
                vec![elem]
            }
            Tag::BlockQuote(..) => vec![Element::new("blockquote")],
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(PendingCode {
                    language,
                    text: String::new(),
                });
                vec![Element::new("pre")]
            }
            // Raw HTML blocks arrive as `Event::Html` children; no wrapper
            Tag::HtmlBlock => Vec::new(),
            Tag::List(Some(start)) => {
                let mut list = Element::new("ol");
                if start != 1 {
                    list.set_attr("start", start.to_string());
                }
                vec![list]
            }
            Tag::List(None) => vec![Element::new("ul")],
            Tag::Item => vec![Element::new("li")],
            Tag::FootnoteDefinition(label) => vec![Element::new("div")
                .with_class("footnote-definition")
                .with_id(label.to_string())],
            Tag::Table(_) => vec![Element::new("table")],
            Tag::TableHead => {
                self.in_table_head = true;
                vec![Element::new("thead"), Element::new("tr")]
            }
            Tag::TableRow => vec![Element::new("tr")],
            Tag::TableCell => vec![Element::new(if self.in_table_head { "th" } else { "td" })],
            Tag::Emphasis => vec![Element::new("em")],
            Tag::Strong => vec![Element::new("strong")],
            Tag::Strikethrough => vec![Element::new("del")],
            Tag::Link { dest_url, title, .. } => {
                let mut link = Element::new("a").attr("href", dest_url.to_string());
                if !title.is_empty() {
                    link.set_attr("title", title.to_string());
                }
                vec![link]
            }
            Tag::Image { dest_url, title, .. } => {
                let mut image = Element::new("img").attr("src", dest_url.to_string());
                if !title.is_empty() {
                    image.set_attr("title", title.to_string());
                }
                vec![image]
            }
            _ => vec![Element::new("span")],
        };

        self.frames.push(opened.len());
        self.stack.extend(opened);
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => self.finish_code(),
            TagEnd::TableHead => self.in_table_head = false,
            _ => {}
        }

        let count = self.frames.pop().unwrap_or(0);
        for _ in 0..count {
            self.close_top();
        }
    }

    fn finish_code(&mut self) {
        let Some(code) = self.code.take() else {
            return;
        };
        let markup = code
            .language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .and_then(|lang| self.highlighter.highlight(&code.text, lang));

        let mut code_elem = Element::new("code");
        if let Some(language) = &code.language {
            code_elem.add_class(&format!("language-{language}"));
        }
        // Unmarked blocks are left to a later `highlight_all` pass
        match markup {
            Some(markup) => {
                code_elem.add_class(HIGHLIGHTED_CLASS);
                code_elem.push(Text::raw(markup));
            }
            None => code_elem.push_text(code.text),
        }
        self.top().push_elem(code_elem);
    }

    /// Pop the innermost open element and attach it to its parent.
    fn close_top(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(mut elem) = self.stack.pop() else {
            return;
        };

        if heading::level_from_tag(&elem.tag).is_some() {
            self.assign_heading_id(&mut elem);
        } else if elem.tag == "img" {
            let alt = elem.text_content();
            elem.children.clear();
            elem.set_attr("alt", alt);
        }

        self.top().push_elem(elem);
    }

    /// `id_prefix + slug`, suffixed with `-1`, `-2`, ... until unused.
    fn assign_heading_id(&mut self, elem: &mut Element) {
        if !self.options.heading_auto_ids || elem.id().is_some() {
            return;
        }
        let slug = slugify(&elem.text_content());
        if slug.is_empty() {
            return;
        }

        let base = format!("{}{}", self.options.id_prefix, slug);
        let mut id = base.clone();
        let mut n = 1;
        while self.heading_ids.contains(&id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        self.heading_ids.insert(id.clone());
        elem.set_attr("id", id);
    }

    fn top(&mut self) -> &mut Element {
        // Index 0 is never popped
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn finish(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(root) => root.children.into_vec(),
            None => Vec::new(),
        }
    }
}
