//! Argot Core Library
//!
//! This crate declares typed command-line parameters and parses raw argument
//! lists against them, in the POSIX `--long` / `-s` style.
//!
//! # Key Features
//!
//! - **Typed Parameters**: Any [`FromStr`](std::str::FromStr) type can be a parameter value
//! - **Range Policies**: Reject or clamp values outside an inclusive range
//! - **Flags and Counters**: Switches that set a boolean or count occurrences
//! - **Short Flag Groups**: `-vp 20` sets `-v` and passes `20` to `-p`
//! - **Verbatim Mode**: Everything after the first `--` is passed through untouched
//!
//! # Architecture
//!
//! - [`value`]: The conversion contract between text and parameter values
//! - [`parameters`]: The parameter types and the capability traits they implement
//! - [`parser`]: Token classification, the verbatim iterator and dispatch
//! - [`error`]: Error type shared by all of the above
//!
//! # Examples
//!
//! ```
//! use argot_core::parameters::{shared, AccumulatingParam, ParamRef, RangeLimitedParam};
//! use argot_core::parser::ArgParser;
//!
//! let verbosity = shared(AccumulatingParam::new(["verbose", "v"], "more output"));
//! let procs = shared(RangeLimitedParam::new(["procs", "p"], 1, 1, 32, "worker processes"));
//!
//! let parser = ArgParser::new([ParamRef::no_arg(&verbosity), ParamRef::one_arg(&procs)])?;
//! let extras = parser.parse_args(["-vv", "--procs=4", "--", "-v", "build"])?;
//!
//! assert_eq!(verbosity.borrow().value(), 2);
//! assert_eq!(*procs.borrow().value(), 4);
//! assert_eq!(extras, vec!["-v", "build"]);
//! # Ok::<(), argot_core::error::Error>(())
//! ```

pub mod error;
pub mod parameters;
pub mod parser;
pub mod value;

pub use error::{Error, Result};
pub use parser::ArgParser;
