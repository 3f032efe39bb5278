//! Edition outlines
//!
//! An edition's summary document is a table of contents of arbitrary depth.
//! [`parse_outline`] turns the HTML into a typed [`SectionNode`] tree and
//! [`flatten`] walks that tree into one [`PublicationSummary`] per leaf, each
//! annotated with the labels of the sections above it.
//!
//! ```
//! use gazette_dl::outline::{flatten, parse_outline};
//!
//! let markup = r#"<ul><li><span>Poder Executivo</span><ul>
//!     <li><span><a identificador="42">Decreto 1</a></span></li>
//! </ul></li></ul>"#;
//!
//! let summaries = flatten(&parse_outline(markup).unwrap()).unwrap();
//! assert_eq!(summaries[0].content_id, "42");
//! assert_eq!(summaries[0].summary_stack, vec!["Poder Executivo"]);
//! ```
//!
//! [`PublicationSummary`]: crate::types::PublicationSummary

mod flatten;
mod markup;
mod node;

pub use flatten::flatten;
pub use markup::{extract_text, parse_outline};
pub use node::{LeafPayload, SectionNode};
