//! Typed outline tree

use crate::types::PublicationSummary;

/// A node of an edition's table of contents
///
/// Built by [`parse_outline`](super::parse_outline) or by hand in tests, then
/// consumed by [`flatten`](super::flatten). A `Section` must have at least one
/// child; flattening rejects empty sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionNode {
    /// Heading grouping further entries
    Section {
        /// Heading text; `None` when the markup carried no heading
        label: Option<String>,
        /// Entries in document order
        children: Vec<SectionNode>,
    },
    /// Entry pointing at one publication
    Leaf(LeafPayload),
}

impl SectionNode {
    /// Section with a heading
    pub fn section(label: impl Into<String>, children: Vec<SectionNode>) -> Self {
        SectionNode::Section {
            label: Some(label.into()),
            children,
        }
    }

    /// Section without a heading, such as the edition root
    pub fn unlabeled(children: Vec<SectionNode>) -> Self {
        SectionNode::Section {
            label: None,
            children,
        }
    }

    /// Leaf entry
    pub fn leaf(title: impl Into<String>, content_id: impl Into<String>) -> Self {
        SectionNode::Leaf(LeafPayload {
            title: title.into(),
            content_id: content_id.into(),
        })
    }
}

impl Drop for SectionNode {
    // Unlinks descendants onto a heap stack so deep outlines drop without recursion
    fn drop(&mut self) {
        let SectionNode::Section { children, .. } = self else {
            return;
        };
        let mut stack = std::mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let SectionNode::Section { children, .. } = &mut node {
                stack.append(children);
            }
        }
    }
}

/// What a leaf entry links to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafPayload {
    /// Trimmed display text of the link
    pub title: String,
    /// Token used to fetch the full body
    pub content_id: String,
}

impl LeafPayload {
    /// Summary for this leaf located at `summary_stack`
    pub fn to_summary(&self, summary_stack: Vec<String>) -> PublicationSummary {
        PublicationSummary {
            title: self.title.clone(),
            content_id: self.content_id.clone(),
            summary_stack,
        }
    }
}
