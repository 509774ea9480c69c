//! Primer Design Tool
//!
//! Picks a forward/reverse PCR primer pair from a DNA template using GC
//! content and Wallace-rule melting temperature filters.

pub mod primer;

pub use primer::*;
