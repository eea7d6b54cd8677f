//! Variable tables
//!
//! A resolution ends in a [`ResolvedVariables`] table: a fixed set of named
//! values ([`Variable`]) derived from the descriptor, the variant key and the
//! resolved core library. Templates consume the table through
//! [`crate::template`].

mod api_version;
mod builder;
pub mod forge;
pub mod libraries;
mod schema;
mod table;

pub use api_version::ApiVersion;
pub use builder::VariableTableBuilder;
pub use forge::TomlDependencies;
pub use schema::{Variable, VariableDialect};
pub use table::ResolvedVariables;
