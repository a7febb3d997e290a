//! One-argument parameters bounded by an inclusive `[min, max]` range.
//!
//! [`RangeLimitedParam`] rejects values outside the range and keeps its
//! previous value; [`ClampedRangeParam`] snaps them to the nearest bound.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use log::trace;

use crate::error::{Error, Result};
use crate::parameters::{BasicParam, OneArgParameter, Parameter};

/// A parameter that only accepts values inside `[min, max]`.
#[derive(Debug, Clone)]
pub struct RangeLimitedParam<T> {
    inner: BasicParam<T>,
    min: T,
    max: T,
}

impl<T: FromStr + PartialOrd + Display> RangeLimitedParam<T> {
    /// Creates a range-limited parameter. The help text is annotated with
    /// the range.
    pub fn new<N, S>(names: N, initial: T, min: T, max: T, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let help = format!("{} (range: {min} to {max})", help.into());
        Self {
            inner: BasicParam::new(names, initial, help),
            min,
            max,
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        self.inner.value()
    }

    #[must_use]
    pub fn min(&self) -> &T {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &T {
        &self.max
    }

    fn contains(&self, candidate: &T) -> bool {
        // Values that don't compare with the bounds (NaN) are outside.
        self.min <= *candidate && *candidate <= self.max
    }
}

impl<T: FromStr + PartialOrd + Display> Parameter for RangeLimitedParam<T> {
    fn names(&self) -> &[String] {
        self.inner.names()
    }

    fn help_text(&self) -> String {
        self.inner.help_text()
    }
}

impl<T: FromStr + PartialOrd + Display> OneArgParameter for RangeLimitedParam<T> {
    fn process(&mut self, name: &str, arg: &str) -> Result<()> {
        let candidate = self.inner.convert(name, arg)?;
        if !self.contains(&candidate) {
            return Err(Error::out_of_range(name, arg, &self.min, &self.max));
        }
        trace!("Parameter `{}` set from `{}`", name, arg);
        self.inner.set_value(candidate);
        Ok(())
    }
}

/// A parameter whose values are clamped into `[min, max]`.
#[derive(Debug, Clone)]
pub struct ClampedRangeParam<T> {
    inner: BasicParam<T>,
    min: T,
    max: T,
}

impl<T: FromStr + PartialOrd + Display + Clone> ClampedRangeParam<T> {
    /// Creates a clamped parameter. The help text is annotated with the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::parameters::{ClampedRangeParam, OneArgParameter};
    ///
    /// let mut jobs = ClampedRangeParam::new(["jobs", "j"], 4, 1, 16, "parallel jobs");
    /// jobs.process("jobs", "64")?;
    /// assert_eq!(*jobs.value(), 16);
    /// # Ok::<(), argot_core::error::Error>(())
    /// ```
    pub fn new<N, S>(names: N, initial: T, min: T, max: T, help: impl Into<String>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let help = format!("{} (range clamped between: {min} and {max})", help.into());
        Self {
            inner: BasicParam::new(names, initial, help),
            min,
            max,
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        self.inner.value()
    }

    #[must_use]
    pub fn min(&self) -> &T {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &T {
        &self.max
    }

    fn clamp(&self, candidate: T) -> T {
        match (
            candidate.partial_cmp(&self.min),
            candidate.partial_cmp(&self.max),
        ) {
            (Some(Ordering::Less) | None, _) => self.min.clone(),
            (_, Some(Ordering::Greater) | None) => self.max.clone(),
            _ => candidate,
        }
    }
}

impl<T: FromStr + PartialOrd + Display + Clone> Parameter for ClampedRangeParam<T> {
    fn names(&self) -> &[String] {
        self.inner.names()
    }

    fn help_text(&self) -> String {
        self.inner.help_text()
    }
}

impl<T: FromStr + PartialOrd + Display + Clone> OneArgParameter for ClampedRangeParam<T> {
    fn process(&mut self, name: &str, arg: &str) -> Result<()> {
        let candidate = self.inner.convert(name, arg)?;
        let clamped = self.clamp(candidate);
        trace!("Parameter `{}` set from `{}` to {}", name, arg, clamped);
        self.inner.set_value(clamped);
        Ok(())
    }
}
