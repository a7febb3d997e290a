use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::SequenceError;

/// A list of integers and inclusive ranges, written `12,14..32,105`.
///
/// Ranges must run from low to high. Negative numbers are allowed on
/// either side of a range: `-2..2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerSequence {
    ranges: Vec<RangeInclusive<i64>>,
}

impl IntegerSequence {
    /// An empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ranges(&self) -> &[RangeInclusive<i64>] {
        &self.ranges
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every integer in the sequence, in the order written, ranges expanded.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ranges.iter().flat_map(Clone::clone)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl From<Vec<RangeInclusive<i64>>> for IntegerSequence {
    fn from(ranges: Vec<RangeInclusive<i64>>) -> Self {
        Self { ranges }
    }
}

impl FromStr for IntegerSequence {
    type Err = SequenceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let ranges = input
            .split(',')
            .filter(|part| !part.is_empty())
            .map(parse_part)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ranges })
    }
}

fn parse_part(part: &str) -> Result<RangeInclusive<i64>, SequenceError> {
    match part.split_once("..") {
        Some((low, high)) => {
            let low = parse_integer(low)?;
            let high = parse_integer(high)?;
            if low > high {
                return Err(SequenceError::BackwardRange(low, high));
            }
            Ok(low..=high)
        }
        None => {
            let single = parse_integer(part)?;
            Ok(single..=single)
        }
    }
}

fn parse_integer(text: &str) -> Result<i64, SequenceError> {
    text.parse()
        .map_err(|_| SequenceError::NotAnInteger(text.to_string()))
}

impl Display for IntegerSequence {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.iter().join(","))
    }
}
