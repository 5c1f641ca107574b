//! # scrub
//!
//! A tool for scanning and rewriting static text content files.
//!
//! Exported HTML and JS content picks up smart punctuation, leftover list
//! markup, and stale identifier slugs on its way out of authoring tools.
//! This crate cleans that up with ordered, deterministic rewrite rules
//! applied to whole files: load, transform, save.
//!
//! The [`pipeline`] module holds the rule trait, the concrete rules, and a
//! registry of named rule sets; [`document`] handles file IO; [`scan`]
//! reports characters above code point 127; [`mapfile`] loads ordered
//! substitution lists for slug renames.

pub mod document;
pub mod mapfile;
pub mod pipeline;
pub mod scan;
