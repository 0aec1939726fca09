//! Populate configuration structs from environment variables
//!
//! `envtag` fills the fields of a struct from environment variables. Each field may
//! carry an `#[envconfig("...")]` annotation choosing the variable name, a default
//! value, and whether the value is required. Struct-typed fields are walked
//! recursively, so configuration can be grouped into nested structs without any
//! extra declaration.
//!
//! # Features
//!
//! - **Declarative**: per-field annotations with `#[derive(EnvConfig)]`
//! - **Nested groups**: untagged struct fields are loaded recursively
//! - **Typed**: strings, integers of every width, floats, booleans, durations and
//!   RFC 3339 timestamps
//! - **Precise errors**: the failing field, variable and text are reported
//!
//! # Annotation grammar
//!
//! An annotation is a comma separated list of `key=value` pairs:
//!
//! - `env=NAME`: read `NAME` instead of the upper-cased field name
//! - `default=VALUE`: used when the variable is unset or empty; converted exactly
//!   like an environment value
//! - `required=true`: fail when neither the variable nor a default is available
//!
//! Whitespace around keys and values is ignored and fragments without `=` are dropped.
//!
//! # Example
//!
//! ```rust
//! use envtag::EnvConfig;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Config {
//!     #[envconfig("env=APP_DATABASE_URL,required=true")]
//!     pub database_url: String,
//!
//!     #[envconfig("default=8080")]
//!     pub port: u16,
//!
//!     #[envconfig("env=APP_TIMEOUT,default=30s")]
//!     pub timeout: Duration,
//!
//!     // Untagged: read from LOG_LEVEL if set
//!     pub log_level: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("APP_DATABASE_URL", "postgres://localhost/db");
//! let mut config = Config::default();
//! envtag::load(&mut config)?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.timeout, Duration::from_secs(30));
//! #     Ok(())
//! # }
//! ```
//!
//! # Nested structs
//!
//! A struct-typed field without an annotation is loaded as its own scope. Variable
//! names inside it are not prefixed by the parent.
//!
//! ```rust
//! use envtag::EnvConfig;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Database {
//!     #[envconfig("env=DB_HOST,default=localhost")]
//!     pub host: String,
//! }
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Config {
//!     pub database: Database,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config: Config = envtag::from_env()?;
//! assert_eq!(config.database.host, "localhost");
//! #     Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Loading stops at the first failing field. Fields visited before it keep the
//! values already assigned; callers should discard the struct on error.

// Lets the derive's `::envtag` paths resolve inside this crate's own tests.
extern crate self as envtag;

mod coerce;
mod error;
pub mod field;
pub mod source;
pub mod tag;
mod walk;

pub use coerce::{parse_bool, ParseBoolError};
pub use envtag_derive::EnvConfig;
pub use error::{BoxError, LoadError};
pub use field::{EnvField, Field, Record, Slot};
pub use source::{ProcessEnv, Source};
pub use tag::{parse_tag, TagMap};
pub use walk::{from_env, load, load_from, load_struct, load_struct_from};
