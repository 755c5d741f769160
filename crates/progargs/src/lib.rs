//! Typed argument registry.
//!
//! Arguments are declared into named groups, each with an optional short
//! name, a long name, a default value (whose type becomes the argument's
//! type), a description and a required flag. A token vector is then parsed
//! once to populate them:
//!
//! ```
//! use progargs::Registry;
//!
//! let mut args = Registry::new();
//! args.new_group("Options")
//!     .add("c", "count", 1u32, "Number of runs", false)?
//!     .add("i", "input", String::new(), "Input file", true)?;
//!
//! args.parse(["-i", "data.nt", "--count", "3", "verbose"])?;
//! args.validate_required()?;
//!
//! assert_eq!(args.lookup("count")?.get::<u32>()?, 3);
//! assert!(args.has("verbose"));
//! # Ok::<(), progargs::ArgError>(())
//! ```
//!
//! Every failure is logged at error level through `tracing` before it is
//! returned, so a caller that just exits still leaves a readable cause.

mod arg;
mod error;
mod group;
mod help;
mod registry;
mod value;

pub use arg::ArgDef;
pub use error::{ArgError, Result};
pub use group::ArgGroup;
pub use help::{DEFAULT_COLUMN, DEFAULT_WRAP, HelpStyle};
pub use registry::{ArgRef, Registry};
pub use value::{ArgValue, Value, ValueType};
