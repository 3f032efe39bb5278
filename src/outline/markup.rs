//! HTML adapter for summary and publication documents
//!
//! A summary document is an HTML fragment of nested lists:
//!
//! ```text
//! <ul>
//!   <li><span>Poder Executivo</span>
//!     <ul>
//!       <li><span><a identificador="123">Decreto 1</a></span></li>
//!     </ul>
//!   </li>
//! </ul>
//! ```
//!
//! An entry's subsections are the `li` children of its `ul` children, its label
//! is the text of its first `span`, and an entry with no subsections must carry
//! a `span > a[identificador]` link.

use super::node::{LeafPayload, SectionNode};
use crate::error::{Error, Result};
use scraper::{ElementRef, Html};

/// Attribute holding a publication's content identifier
const CONTENT_ID_ATTR: &str = "identificador";

/// Parse a summary document into an outline rooted at its `body`
///
/// # Errors
///
/// Returns [`Error::MalformedTree`] for an entry that has neither subsections
/// nor a usable publication link.
pub fn parse_outline(markup: &str) -> Result<SectionNode> {
    let document = Html::parse_document(markup);
    let body = body_of(&document)?;
    section_from_element(body)
}

/// Plain text of a document's body, markup stripped
pub fn extract_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    match body_of(&document) {
        Ok(body) => body.text().collect(),
        Err(_) => document.root_element().text().collect(),
    }
}

fn body_of(document: &Html) -> Result<ElementRef<'_>> {
    child_elements(document.root_element(), "body")
        .next()
        .ok_or_else(|| Error::malformed("document has no body"))
}

/// Entry being assembled while its subsections are still parsed
struct Frame<'a> {
    element: ElementRef<'a>,
    pending: std::vec::IntoIter<ElementRef<'a>>,
    children: Vec<SectionNode>,
}

impl<'a> Frame<'a> {
    fn open(element: ElementRef<'a>) -> Self {
        let entries: Vec<_> = child_elements(element, "ul")
            .flat_map(|list| child_elements(list, "li"))
            .collect();
        Self {
            element,
            pending: entries.into_iter(),
            children: Vec::new(),
        }
    }

    fn close(self) -> Result<SectionNode> {
        if self.children.is_empty() {
            leaf_from_element(self.element)
        } else {
            Ok(SectionNode::Section {
                label: label_of(self.element),
                children: self.children,
            })
        }
    }
}

/// Post-order walk with an explicit frame stack; list nesting in a summary
/// page is unbounded
fn section_from_element(root: ElementRef<'_>) -> Result<SectionNode> {
    let mut frames = vec![Frame::open(root)];

    loop {
        let next = match frames.last_mut() {
            Some(frame) => frame.pending.next(),
            None => break,
        };
        if let Some(entry) = next {
            frames.push(Frame::open(entry));
            continue;
        }

        let Some(done) = frames.pop() else { break };
        let node = done.close()?;
        match frames.last_mut() {
            Some(parent) => parent.children.push(node),
            None => return Ok(node),
        }
    }

    Err(Error::malformed("outline walk ended without a root"))
}

fn leaf_from_element(element: ElementRef<'_>) -> Result<SectionNode> {
    let link = child_elements(element, "span")
        .flat_map(|span| child_elements(span, "a"))
        .next()
        .ok_or_else(|| {
            Error::malformed(format!(
                "entry {:?} has neither subsections nor a publication link",
                label_of(element).unwrap_or_default()
            ))
        })?;

    let title = link.text().collect::<String>().trim().to_string();
    let content_id = link
        .value()
        .attr(CONTENT_ID_ATTR)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            Error::malformed(format!("publication link {title:?} has no content identifier"))
        })?;

    Ok(SectionNode::Leaf(LeafPayload {
        title,
        content_id: content_id.to_string(),
    }))
}

/// Text of the first `span` child up to its first nested element, trimmed
fn label_of(element: ElementRef<'_>) -> Option<String> {
    child_elements(element, "span").next().map(|span| {
        span.children()
            .map_while(|node| node.value().as_text().map(|text| &**text))
            .collect::<String>()
            .trim()
            .to_string()
    })
}

fn child_elements<'a>(
    element: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}
