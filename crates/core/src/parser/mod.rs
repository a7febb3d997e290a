//! The parse loop: classifies each token and dispatches it to the parameter
//! it names.
//!
//! Tokens that name no parameter are returned as extras, in input order.
//! The first error stops the parse; values set before it stay set.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::Error::{DuplicateAlias, EmptyAlias, MissingValue, NoAliases, UnknownParameter};
use crate::error::{Error, Result};
use crate::parameters::{NoArgParameter, OneArgParameter, ParamRef};

pub mod token;
pub mod verbatim;

// Re-exports for convenience
pub use token::Token;
pub use verbatim::{Mode, VerbatimIter, VERBATIM_MARKER};

/// Parses command-line tokens into a fixed set of parameters.
///
/// # Examples
///
/// ```
/// use argot_core::parameters::{shared, BasicParam, FlagParam, ParamRef};
/// use argot_core::parser::ArgParser;
///
/// let verbose = shared(FlagParam::new(["verbose", "v"], "print more output"));
/// let procs = shared(BasicParam::new(["procs", "p"], 1_u32, "how many processes"));
///
/// let parser = ArgParser::new([ParamRef::no_arg(&verbose), ParamRef::one_arg(&procs)])?;
/// let extras = parser.parse_args(["-vp", "8", "input.txt"])?;
///
/// assert!(verbose.borrow().value());
/// assert_eq!(*procs.borrow().value(), 8);
/// assert_eq!(extras, vec!["input.txt"]);
/// # Ok::<(), argot_core::error::Error>(())
/// ```
#[derive(Debug)]
pub struct ArgParser {
    params: Vec<ParamRef>,
    registry: IndexMap<String, ParamRef>,
}

impl ArgParser {
    /// Registers every alias of every parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A parameter has no names
    /// - A name is empty
    /// - A name is claimed twice, by one parameter or by two
    pub fn new<P>(params: P) -> Result<Self>
    where
        P: IntoIterator<Item = ParamRef>,
    {
        let params: Vec<ParamRef> = params.into_iter().collect();
        let mut registry = IndexMap::new();

        for param in &params {
            let names = param.names();
            if names.is_empty() {
                return Err(NoAliases);
            }
            for name in names {
                if name.is_empty() {
                    return Err(EmptyAlias);
                }
                if registry.contains_key(&name) {
                    return Err(DuplicateAlias(name));
                }
                registry.insert(name, param.clone());
            }
        }

        debug!(
            "Registered {} parameters under {} names",
            params.len(),
            registry.len()
        );

        Ok(Self { params, registry })
    }

    /// Every registered name, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Help text for every parameter, in declaration order.
    #[must_use]
    pub fn help_text(&self) -> String {
        self.params.iter().map(ParamRef::help_text).collect()
    }

    /// Parses `args`, updating the registered parameters, and returns the
    /// tokens that were not consumed by any parameter.
    ///
    /// Parameters are not reset first, so parsing again continues from the
    /// values the last parse left behind.
    ///
    /// # Errors
    ///
    /// Returns the first invalid-argument error met. Parameters processed
    /// before it keep their new values.
    pub fn parse_args<I, S>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut extras = Vec::new();
        let mut tokens = VerbatimIter::new(args.into_iter().map(Into::<String>::into));

        while let Some(arg) = tokens.next() {
            if tokens.is_verbatim() {
                trace!("Verbatim extra `{}`", arg);
                extras.push(arg);
                continue;
            }

            if let Err(error) = self.process_token(arg, &mut tokens, &mut extras) {
                debug!("Parsing stopped: {}", error);
                return Err(error);
            }
        }

        Ok(extras)
    }

    fn process_token<I>(
        &self,
        arg: String,
        tokens: &mut VerbatimIter<I>,
        extras: &mut Vec<String>,
    ) -> Result<()>
    where
        I: Iterator<Item = String>,
    {
        match Token::classify(&arg) {
            Token::Long {
                name,
                value: Some(value),
            } => {
                trace!("Long parameter `{}` with inline value", name);
                self.dispatch_with_value(name, value)
            }
            Token::Long { name, value: None } => {
                trace!("Long parameter `{}`", name);
                self.dispatch(name, tokens)
            }
            Token::Short(cluster) => {
                trace!("Short parameter group `{}`", cluster);
                let mut letters = cluster.chars();
                let Some(last) = letters.next_back() else {
                    return Ok(());
                };
                for letter in letters {
                    self.dispatch_leading(&letter.to_string())?;
                }
                self.dispatch(&last.to_string(), tokens)
            }
            Token::Extra => {
                trace!("Extra `{}`", arg);
                extras.push(arg);
                Ok(())
            }
        }
    }

    fn lookup(&self, name: &str) -> Result<&ParamRef> {
        self.registry
            .get(name)
            .ok_or_else(|| UnknownParameter(name.to_string()))
    }

    /// `--name=value`: only one-argument parameters accept it.
    fn dispatch_with_value(&self, name: &str, value: &str) -> Result<()> {
        match self.lookup(name)? {
            ParamRef::NoArg(_) => Err(Error::value_given_to_flag(name)),
            ParamRef::OneArg(param) => param.borrow_mut().process(name, value),
        }
    }

    /// A letter before the last one in a short group, which has no way to
    /// receive a value.
    fn dispatch_leading(&self, name: &str) -> Result<()> {
        match self.lookup(name)? {
            ParamRef::NoArg(param) => param.borrow_mut().process(name),
            ParamRef::OneArg(_) => Err(Error::value_required_in_cluster(name)),
        }
    }

    /// A name without an inline value; one-argument parameters take the
    /// next token.
    fn dispatch<I>(&self, name: &str, tokens: &mut VerbatimIter<I>) -> Result<()>
    where
        I: Iterator<Item = String>,
    {
        match self.lookup(name)? {
            ParamRef::NoArg(param) => param.borrow_mut().process(name),
            ParamRef::OneArg(param) => {
                let value = tokens
                    .next()
                    .ok_or_else(|| MissingValue(name.to_string()))?;
                param.borrow_mut().process(name, &value)
            }
        }
    }
}
