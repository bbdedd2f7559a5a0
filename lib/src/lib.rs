#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Ask the user to pick from a list, using whichever fuzzy finder or menu
//! program is installed.
//!
//! ```no_run
//! use chooser::Environment;
//! use chooser::Options;
//! use chooser::SelectionContext;
//!
//! let context = SelectionContext::from_environment(&Environment::from_env());
//! let picked = Options::new(context).from_lines(&["apple", "banana", "cherry"])?;
//! # Ok::<(), chooser::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod invocation;
pub mod mapper;
pub mod registry;
pub mod select;
pub mod session;
pub mod source;
pub mod util;

mod options;

pub use context::Environment;
pub use context::SelectionContext;
pub use error::Error;
pub use error::ExecutionFailure;
pub use error::Result;
pub use invocation::Invocation;
pub use invocation::InvocationClass;
pub use options::Options;
pub use registry::Lookup;
pub use registry::PathLookup;
pub use session::PipeSession;
pub use source::CandidateSource;
