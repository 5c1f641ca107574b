//! Concrete rewrite rules

pub mod line_filter;
pub mod literal;
pub mod ordered;

pub use line_filter::{filter_lines, FlattenListItems};
pub use literal::LiteralReplace;
pub use ordered::OrderedSubstitution;
