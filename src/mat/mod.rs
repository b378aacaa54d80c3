mod bytes;
mod classify;
mod codes;
mod element;
mod error;
mod file;
mod header;
mod mapper;
mod record;
mod types;

/// Variable classifier entry points.
pub use classify::{Classification, classify, value_type_for};
/// Raw class/type code tables.
pub use codes::{ClassCode, TypeCode, class_label, type_label};
/// Matrix element header parsing.
pub use element::{ArrayFlags, Tag, VariableHeader, data_type_for_class, parse_matrix_header};
pub(crate) use element::read_tag;
/// Error and result aliases.
pub use error::{MatError, Result};
/// In-memory file and element scan types.
pub use file::{Element, ElementIter, MatFile, ScanOptions, VariableEntry, VariableScan};
/// File header representation.
pub use header::MatHeader;
/// Semantic to raw code mapping.
pub use mapper::{RawCodes, raw_codes, scalar_codes, wire_table};
/// Raw header metadata record.
pub use record::MetadataRecord;
/// Semantic variable taxonomy.
pub use types::{ValueType, VariableKind};
