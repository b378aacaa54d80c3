//! Type classification for MAT-file (level 5) variables.

/// Raw code tables, forward mapping, classification, and header reading.
pub mod mat;
