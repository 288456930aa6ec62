//! DMN Modeler Core Types and Definitions
//!
//! This crate provides the foundational types shared by the DMN decision
//! modeler. It includes:
//!
//! - **Identifiers**: Efficient string-interned element identifiers ([`identifier::Id`])
//! - **Identifier registry**: Per-document claimed identifiers and fresh id generation ([`ids::Ids`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The decision model and its diagram-interchange data ([`semantic`] module)
//! - **Draw**: Graphical shapes placed on the decision requirements canvas ([`draw`] module)

pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod ids;
pub mod semantic;
