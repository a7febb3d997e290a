//! Parameter declarations and the capabilities the parser dispatches on.
//!
//! Every parameter implements [`Parameter`] plus exactly one of the two
//! capability traits:
//! - [`NoArgParameter`]: switches such as `--verbose` or `-v`
//! - [`OneArgParameter`]: parameters that consume a value, as in
//!   `--procs 3`, `--procs=3` or `-p 3`
//!
//! Parameters are shared between the caller and the parser through
//! [`Shared`] handles, so every alias of a parameter updates one value that
//! the caller can read back after parsing.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use itertools::Itertools;

use crate::error::Result;

pub mod basic;
pub mod range;
pub mod switches;

// Re-exports for convenience
pub use basic::BasicParam;
pub use range::{ClampedRangeParam, RangeLimitedParam};
pub use switches::{AccumulatingParam, FlagParam};

/// A parameter handle shared by the caller and the parser.
pub type Shared<P> = Rc<RefCell<P>>;

/// Wraps a parameter so it can be registered with a parser and read back
/// afterwards.
pub fn shared<P>(parameter: P) -> Shared<P> {
    Rc::new(RefCell::new(parameter))
}

/// The capabilities common to every parameter.
pub trait Parameter {
    /// Every name this parameter answers to, without leading dashes.
    fn names(&self) -> &[String];

    /// Help text for this parameter, ending in a newline.
    fn help_text(&self) -> String;
}

/// A parameter that never takes a value.
pub trait NoArgParameter: Parameter {
    /// Processes one occurrence of the parameter.
    ///
    /// # Arguments
    ///
    /// * `name` - The alias the parameter was invoked under
    ///
    /// # Errors
    ///
    /// Implementations may reject the occurrence with an invalid-argument error.
    fn process(&mut self, name: &str) -> Result<()>;
}

/// A parameter that takes exactly one value.
pub trait OneArgParameter: Parameter {
    /// Processes one occurrence of the parameter with its value.
    ///
    /// # Arguments
    ///
    /// * `name` - The alias the parameter was invoked under
    /// * `arg` - The raw value from the command line
    ///
    /// # Errors
    ///
    /// Returns an error if `arg` cannot be converted or is not acceptable.
    fn process(&mut self, name: &str, arg: &str) -> Result<()>;
}

/// A registered parameter, tagged with its capability.
#[derive(Clone)]
pub enum ParamRef {
    NoArg(Rc<RefCell<dyn NoArgParameter>>),
    OneArg(Rc<RefCell<dyn OneArgParameter>>),
}

impl ParamRef {
    pub fn no_arg<P: NoArgParameter + 'static>(parameter: &Shared<P>) -> Self {
        let handle: Rc<RefCell<dyn NoArgParameter>> = parameter.clone();
        Self::NoArg(handle)
    }

    pub fn one_arg<P: OneArgParameter + 'static>(parameter: &Shared<P>) -> Self {
        let handle: Rc<RefCell<dyn OneArgParameter>> = parameter.clone();
        Self::OneArg(handle)
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::NoArg(parameter) => parameter.borrow().names().to_vec(),
            Self::OneArg(parameter) => parameter.borrow().names().to_vec(),
        }
    }

    #[must_use]
    pub fn help_text(&self) -> String {
        match self {
            Self::NoArg(parameter) => parameter.borrow().help_text(),
            Self::OneArg(parameter) => parameter.borrow().help_text(),
        }
    }

    #[must_use]
    pub fn takes_value(&self) -> bool {
        matches!(self, Self::OneArg(_))
    }
}

impl Debug for ParamRef {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let variant = if self.takes_value() { "OneArg" } else { "NoArg" };
        formatter
            .debug_tuple(variant)
            .field(&self.names())
            .finish()
    }
}

/// Renders `names` as they are typed: `-v` for one letter, `--verbose` otherwise.
pub(crate) fn alias_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            if name.chars().count() == 1 {
                format!("-{name}")
            } else {
                format!("--{name}")
            }
        })
        .join("|")
}

/// Formats one help entry: the alias line, an optional `<Type>` placeholder,
/// then the indented description.
pub(crate) fn format_help(names: &[String], placeholder: Option<&str>, description: &str) -> String {
    let mut help = alias_list(names);
    if let Some(placeholder) = placeholder {
        help.push_str(&format!("  <{placeholder}>"));
    }
    help.push_str(&format!("\n   {description}\n"));
    help
}

pub(crate) fn collect_names<N, S>(names: N) -> Vec<String>
where
    N: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
