//! # Defaultable
//!
//! Populate zero-valued struct fields from declarative per-field default
//! annotations. Fields that already hold a non-zero value are never
//! overwritten - defaults fill gaps, they do not clobber explicit values.
//!
//! ## Example
//!
//! ```
//! use defaultable::{apply_defaults, Defaultable};
//!
//! #[derive(Default, Defaultable)]
//! struct ServerConfig {
//!     #[default_value("127.0.0.1")]
//!     host: String,
//!     #[default_value("8080")]
//!     port: i32,
//!     #[default_value("true")]
//!     keep_alive: bool,
//!     #[default_value("info,warn")]
//!     log_levels: Vec<String>,
//! }
//!
//! let mut config = ServerConfig {
//!     port: 9000,
//!     ..Default::default()
//! };
//! apply_defaults(&mut config);
//!
//! assert_eq!(config.host, "127.0.0.1");
//! assert_eq!(config.port, 9000); // explicit value kept
//! assert!(config.keep_alive);
//! assert_eq!(config.log_levels, ["info", "warn"]);
//! ```
//!
//! ## Supported field kinds
//!
//! `String`, signed integers (`i8` through `i64`, `isize`), floats (`f32`,
//! `f64`), `bool`, `Vec<String>`, and `Vec` of signed integers. List fields
//! append their comma-separated tokens on every call rather than testing for
//! emptiness. Fields of any other type are silently skipped.
//!
//! The per-type table of annotated fields is memoized process-wide, so
//! repeated application to the same type never rescans the field list.

mod cache;
mod field;
mod record;
pub mod value;

pub use cache::fields_with_default;
pub use field::{FieldKind, FieldMeta};
pub use record::{apply_defaults, Defaultable};

// Re-export the derive macro
pub use defaultable_macros::Defaultable;
