//! Organize setup steps as an explicitly ordered sequence.
//!
//! Each step pairs an integer order key with a named, zero-argument
//! callable; [`run_all`] invokes the steps in ascending key order no matter
//! the order they were declared in. Duplicate keys are rejected at
//! registration instead of silently replacing an earlier step, and a `None`
//! subject is a silent no-op.
//!
//! ```
//! use std::cell::RefCell;
//! use ordered_init::{run_all, InitError, InitRunner, OrderedInit};
//!
//! struct Boot {
//!     log: RefCell<Vec<&'static str>>,
//! }
//!
//! impl OrderedInit for Boot {
//!     fn register<'a>(&'a self, runner: &mut InitRunner<'a>) -> Result<(), InitError> {
//!         runner.register(2, "database", move || self.log.borrow_mut().push("db"))?;
//!         runner.register(1, "logging", move || self.log.borrow_mut().push("log"))?;
//!         Ok(())
//!     }
//! }
//!
//! let boot = Boot { log: RefCell::new(Vec::new()) };
//! run_all(Some(&boot))?;
//! assert_eq!(*boot.log.borrow(), ["log", "db"]);
//! # Ok::<(), InitError>(())
//! ```
//!
//! For steps that already follow the `Initialize<digits><suffix>` naming
//! convention, [`InitRunner::register_named`] parses the key out of the name
//! and silently skips names that do not match.

mod error;
mod pattern;
mod runner;


pub use error::InitError;
pub use runner::{run_all, InitRunner, OrderedInit};
