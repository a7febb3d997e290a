use std::str::FromStr;

use log::trace;

use crate::error::{Error, Result};
use crate::parameters::{collect_names, format_help, OneArgParameter, Parameter};
use crate::value::{parse_value, type_label};

/// A parameter holding one value of any [`FromStr`] type.
///
/// Every successful occurrence replaces the stored value.
#[derive(Debug, Clone)]
pub struct BasicParam<T> {
    names: Vec<String>,
    help: String,
    value: T,
}

impl<T: FromStr> BasicParam<T> {
    /// Creates a parameter with an initial (default) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::parameters::{BasicParam, OneArgParameter};
    ///
    /// let mut procs = BasicParam::new(["procs", "p"], 1_u32, "how many processes");
    /// procs.process("procs", "8")?;
    /// assert_eq!(*procs.value(), 8);
    /// # Ok::<(), argot_core::error::Error>(())
    /// ```
    pub fn new<N, S>(names: N, initial: T, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: collect_names(names),
            help: help.into(),
            value: initial,
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Converts `arg` without storing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConversionFailure`] naming `name` and `T` if `arg`
    /// does not parse.
    pub(crate) fn convert(&self, name: &str, arg: &str) -> Result<T> {
        parse_value(arg).ok_or_else(|| Error::conversion_failure(name, arg, type_label::<T>()))
    }

    pub(crate) fn set_value(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: FromStr> Parameter for BasicParam<T> {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn help_text(&self) -> String {
        format_help(&self.names, Some(&type_label::<T>()), &self.help)
    }
}

impl<T: FromStr> OneArgParameter for BasicParam<T> {
    fn process(&mut self, name: &str, arg: &str) -> Result<()> {
        let converted = self.convert(name, arg)?;
        trace!("Parameter `{}` set from `{}`", name, arg);
        self.set_value(converted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value() {
        let procs = BasicParam::new(["procs"], 2_i32, "how many procs?");
        assert_eq!(*procs.value(), 2);
    }

    #[test]
    fn test_process_replaces_value() {
        let mut procs = BasicParam::new(["procs"], 2_i32, "how many procs?");
        procs.process("procs", "10").unwrap();
        assert_eq!(*procs.value(), 10);
        procs.process("procs", "-3").unwrap();
        assert_eq!(procs.into_value(), -3);
    }

    #[test]
    fn test_string_param_takes_anything() {
        let mut arg = BasicParam::new(["arg"], "unset".to_string(), "a string arg");
        arg.process("arg", "string value").unwrap();
        assert_eq!(arg.value(), "string value");
    }

    #[test]
    fn test_conversion_failure_keeps_value() {
        let mut procs = BasicParam::new(["procs", "p"], 2_i32, "how many procs?");
        let error = procs.process("p", "lots").unwrap_err();

        assert_eq!(
            error,
            Error::ConversionFailure {
                name: "p".to_string(),
                value: "lots".to_string(),
                type_name: "i32".to_string(),
            }
        );
        assert_eq!(*procs.value(), 2);
    }

    #[test]
    fn test_help_text_has_type_placeholder() {
        let parse = BasicParam::new(["parse"], "cee".to_string(), "the parser to use");
        assert_eq!(parse.help_text(), "--parse  <String>\n   the parser to use\n");
    }
}
