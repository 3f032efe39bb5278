//! Outline flattening

use super::node::SectionNode;
use crate::error::{Error, Result};
use crate::types::PublicationSummary;

/// Flatten an edition outline into its publications, in document order
///
/// Every summary carries the labels of the sections enclosing its leaf,
/// outermost first. The root stands for the edition itself, so its own label
/// never appears. A section without a label contributes an empty string.
///
/// The walk uses an explicit stack, so outline depth is not limited by the
/// call stack. The tree is only borrowed; flattening the same tree twice
/// yields equal results.
///
/// # Errors
///
/// Returns [`Error::MalformedTree`] if any section (the root included) has
/// no children.
///
/// # Example
///
/// ```
/// use gazette_dl::outline::{SectionNode, flatten};
///
/// let root = SectionNode::unlabeled(vec![SectionNode::section(
///     "Secretaria da Fazenda",
///     vec![SectionNode::leaf("Portaria 1", "p1"), SectionNode::leaf("Portaria 2", "p2")],
/// )]);
///
/// let summaries = flatten(&root).unwrap();
/// assert_eq!(summaries.len(), 2);
/// assert_eq!(summaries[1].summary_stack, vec!["Secretaria da Fazenda"]);
/// ```
pub fn flatten(root: &SectionNode) -> Result<Vec<PublicationSummary>> {
    let root_children = match root {
        SectionNode::Leaf(payload) => return Ok(vec![payload.to_summary(Vec::new())]),
        SectionNode::Section { label, children } => {
            ensure_populated(label.as_deref(), children)?;
            children
        }
    };

    let mut summaries = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut frames = vec![root_children.iter()];

    while let Some(frame) = frames.last_mut() {
        match frame.next() {
            Some(SectionNode::Leaf(payload)) => summaries.push(payload.to_summary(path.clone())),
            Some(SectionNode::Section { label, children }) => {
                ensure_populated(label.as_deref(), children)?;
                path.push(label.clone().unwrap_or_default());
                frames.push(children.iter());
            }
            None => {
                frames.pop();
                // Root frame has no label on the path; popping an empty path is a no-op
                path.pop();
            }
        }
    }

    Ok(summaries)
}

fn ensure_populated(label: Option<&str>, children: &[SectionNode]) -> Result<()> {
    if children.is_empty() {
        return Err(Error::malformed(format!(
            "section {:?} has neither subsections nor a publication link",
            label.unwrap_or("")
        )));
    }
    Ok(())
}
