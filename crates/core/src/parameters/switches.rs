use log::trace;

use crate::error::Result;
use crate::parameters::{collect_names, format_help, NoArgParameter, Parameter};

/// An on/off switch: `false` until the parameter appears, `true` after.
#[derive(Debug, Clone)]
pub struct FlagParam {
    names: Vec<String>,
    help: String,
    value: bool,
}

impl FlagParam {
    /// Creates an unset flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::parameters::FlagParam;
    ///
    /// let verbose = FlagParam::new(["verbose", "v"], "print more output");
    /// assert!(!verbose.value());
    /// ```
    pub fn new<N, S>(names: N, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: collect_names(names),
            help: help.into(),
            value: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Parameter for FlagParam {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn help_text(&self) -> String {
        format_help(&self.names, None, &self.help)
    }
}

impl NoArgParameter for FlagParam {
    fn process(&mut self, name: &str) -> Result<()> {
        trace!("Flag `{}` set", name);
        self.value = true;
        Ok(())
    }
}

/// Counts how many times the parameter appears, as in `-vvv`.
#[derive(Debug, Clone)]
pub struct AccumulatingParam {
    names: Vec<String>,
    help: String,
    value: u32,
}

impl AccumulatingParam {
    /// Creates a counter starting at zero.
    pub fn new<N, S>(names: N, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::starting_at(names, 0, help)
    }

    /// Creates a counter starting at `start`.
    pub fn starting_at<N, S>(names: N, start: u32, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: collect_names(names),
            help: help.into(),
            value: start,
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Parameter for AccumulatingParam {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn help_text(&self) -> String {
        format_help(&self.names, None, &self.help)
    }
}

impl NoArgParameter for AccumulatingParam {
    fn process(&mut self, name: &str) -> Result<()> {
        // Saturates rather than wrapping back to zero.
        self.value = self.value.saturating_add(1);
        trace!("Counter `{}` now at {}", name, self.value);
        Ok(())
    }
}
