//! Integration tests for ijk crates.
//!
//! Property tests cover the algebraic laws of the vector layer across
//! random inputs; scenario tests pin concrete values and check that the
//! value-type and array-based surfaces agree.
