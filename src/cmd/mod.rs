/// Record classification command.
pub mod classify;
/// File variable listing command.
pub mod inspect;
/// Forward code mapping command.
pub mod map;
/// Scalar wire table command.
pub mod table;
/// Shared CLI parsing and rendering helpers.
pub(crate) mod util;
