//! Parsed profile document and node lookup primitives
//!
//! Wraps a `scraper::Html` tree. Lookups take an ordered list of compiled
//! patterns and return the matches of the first pattern that matches
//! anything. Every selector walk is counted so callers can observe how much
//! tree traversal an accessor performed.

use scraper::{ElementRef, Html, Node};
use std::cell::Cell;
use tracing::debug;

use super::rules::FieldPattern;

/// Immutable parsed profile page
pub struct Document {
    html: Html,
    walks: Cell<usize>,
}

impl Document {
    /// Parse a full page snapshot. Malformed markup never fails; the tree
    /// builder recovers and its complaints are only logged.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            debug!("Tolerated {} HTML parse errors", html.errors.len());
        }
        Self {
            html,
            walks: Cell::new(0),
        }
    }

    /// First element matching the first pattern that matches anything
    pub fn find(&self, patterns: &[FieldPattern]) -> Option<ElementRef<'_>> {
        patterns.iter().find_map(|pattern| {
            self.record_walk();
            self.html
                .select(pattern.selector())
                .find(|element| pattern.accepts(*element))
        })
    }

    /// All elements matching the first pattern that matches anything
    pub fn find_all(&self, patterns: &[FieldPattern]) -> Vec<ElementRef<'_>> {
        for pattern in patterns {
            self.record_walk();
            let elements: Vec<_> = self
                .html
                .select(pattern.selector())
                .filter(|element| pattern.accepts(*element))
                .collect();
            if !elements.is_empty() {
                return elements;
            }
        }
        Vec::new()
    }

    /// Like [`Document::find`], restricted to descendants of `scope`
    pub fn find_in<'a>(&self, scope: ElementRef<'a>, patterns: &[FieldPattern]) -> Option<ElementRef<'a>> {
        patterns.iter().find_map(|pattern| {
            self.record_walk();
            scope
                .select(pattern.selector())
                .find(|element| pattern.accepts(*element))
        })
    }

    /// Like [`Document::find_all`], restricted to descendants of `scope`
    pub fn find_all_in<'a>(&self, scope: ElementRef<'a>, patterns: &[FieldPattern]) -> Vec<ElementRef<'a>> {
        for pattern in patterns {
            self.record_walk();
            let elements: Vec<_> = scope
                .select(pattern.selector())
                .filter(|element| pattern.accepts(*element))
                .collect();
            if !elements.is_empty() {
                return elements;
            }
        }
        Vec::new()
    }

    /// Number of selector walks performed over this document so far
    pub fn walk_count(&self) -> usize {
        self.walks.get()
    }

    fn record_walk(&self) {
        self.walks.set(self.walks.get() + 1);
    }
}

/// The element's single text child.
///
/// Absent when the element has no children or more than one. A lone element
/// child is descended into, so `<p><b>x</b></p>` reads as `x`. A lone comment
/// reads as its own text.
pub fn direct_text(element: ElementRef<'_>) -> Option<&str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Comment(comment) => Some(&**comment),
        Node::Element(_) => ElementRef::wrap(only).and_then(direct_text),
        _ => None,
    }
}

/// All text fragments of the subtree, in document order
pub fn text_fragments(element: ElementRef<'_>) -> impl Iterator<Item = &str> {
    element.text()
}

/// Whether any of the element's class tokens equals one of `tokens`
pub fn has_any_class(element: ElementRef<'_>, tokens: &[String]) -> bool {
    element
        .value()
        .classes()
        .any(|class| tokens.iter().any(|token| token == class))
}

pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}
