use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("`{}` is not an integer", .0)]
    NotAnInteger(String),

    #[error("Range `{}..{}` runs backwards; ranges must go from low to high", .0, .1)]
    BackwardRange(i64, i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("No date was given")]
    Empty,

    #[error("`{}` is not a date; expected YYYY-MM-DD, MM-DD, DD, today, yesterday or tomorrow", .0)]
    Malformed(String),

    #[error("Year {} is too small; write all four digits", .0)]
    ShortYear(u32),

    #[error("{}-{}-{} is not a valid calendar date", .year, .month, .day)]
    InvalidDate { year: i32, month: u32, day: u32 },
}
