//! The page the two views render into.
//!
//! Containers are held as explicit handles; nothing is looked up by id at
//! render time.

use crate::node::{Element, Node};
use crate::outline::Outline;
use crate::render::{render_element, RenderConfig};
use crate::renderer::{error_panel, loading_placeholder};

pub const POSTS_CONTAINER_ID: &str = "posts-container";
pub const POST_CONTAINER_ID: &str = "post-container";
pub const TOC_LIST_ID: &str = "toc_list";

/// Which container is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Document,
}

/// Container handles for the list view, the document view and its outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Catalog cards
    pub posts: Element,
    /// Rendered document, loading placeholder or error panel
    pub post: Element,
    /// Outline list (`<ul>`)
    pub toc: Element,
    visible: View,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            posts: Element::new("div").with_id(POSTS_CONTAINER_ID),
            post: Element::new("div").with_id(POST_CONTAINER_ID),
            toc: Element::new("ul").with_id(TOC_LIST_ID),
            visible: View::List,
        }
    }

    pub fn visible(&self) -> View {
        self.visible
    }

    /// Show the list view with `cards`.
    pub fn show_list(&mut self, cards: Vec<Node>) {
        self.posts.replace_children(cards);
        self.visible = View::List;
    }

    /// Show the document view with a loading placeholder and no outline.
    pub fn show_loading(&mut self) {
        self.post.replace_children([Node::from(loading_placeholder())]);
        self.toc.replace_children(Vec::new());
        self.visible = View::Document;
    }

    /// Show `content` and its outline in the document view.
    pub fn show_document(&mut self, content: Element, outline: &Outline) {
        self.post.replace_children([Node::from(content)]);
        self.toc.replace_children(outline.to_list_items());
        self.visible = View::Document;
    }

    /// Show the error panel in the document view.
    pub fn show_error(&mut self, message: &str) {
        self.post.replace_children([Node::from(error_panel(message))]);
        self.toc.replace_children(Outline::Empty.to_list_items());
        self.visible = View::Document;
    }

    /// HTML of the visible container.
    pub fn render_visible(&self, config: &RenderConfig) -> String {
        match self.visible {
            View::List => render_element(&self.posts, config),
            View::Document => render_element(&self.post, config),
        }
    }
}
