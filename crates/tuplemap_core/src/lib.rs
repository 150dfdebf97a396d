//! Public library API for mapping positional value rows onto typed structs.

/// Column markers, type descriptors, coercion rules, and mapping entry points.
pub mod tuple;
