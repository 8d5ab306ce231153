//! Schema inference and description
//!
//! CSV columns arrive untyped. At load time each column gets a
//! [`ColumnKind`], which drives cell conversion and is reported on
//! `/schema`. Query processing ignores kinds and compares string forms.

mod descriptor;
mod types;

pub use descriptor::{describe, FieldInfo, Schema};
pub use types::ColumnKind;
