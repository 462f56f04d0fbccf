//! Human-readable rendering of violations.
//!
//! The validation engine only produces typed [`Violation`](crate::validation::Violation)
//! values. A [`MessageCatalog`] turns them into text at the boundary, one
//! catalog per language, passed explicitly wherever text is needed.

mod catalog;

pub use catalog::MessageCatalog;
