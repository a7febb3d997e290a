//! The value types plugged into argot-core parameters and the parser.

use argot_core::error::Error;
use argot_core::parameters::{
    shared, BasicParam, ClampedRangeParam, OneArgParameter, ParamRef, Parameter,
    RangeLimitedParam,
};
use argot_core::parser::ArgParser;
use argot_values::{IntegerSequence, Ymd};

fn ymd(year: i32, month: u32, day: u32) -> Ymd {
    Ymd::from_ymd(year, month, day).unwrap()
}

#[test]
fn test_sequence_param_defaults_to_empty() {
    let param = BasicParam::new(["isa"], IntegerSequence::new(), "");
    assert!(param.value().to_vec().is_empty());
}

#[test]
fn test_sequence_param_process() {
    let mut param = BasicParam::new(["isa"], IntegerSequence::new(), "");

    param.process("isa", "1,10..12,3").unwrap();
    assert_eq!(param.value().to_vec(), vec![1, 10, 11, 12, 3]);

    param.process("isa", "").unwrap();
    assert!(param.value().is_empty());
}

#[test]
fn test_sequence_param_rejects_backward_range() {
    let mut param = BasicParam::new(["isa"], IntegerSequence::new(), "");
    param.process("isa", "1").unwrap();

    let error = param.process("isa", "14..12").unwrap_err();
    assert_eq!(
        error,
        Error::ConversionFailure {
            name: "isa".to_string(),
            value: "14..12".to_string(),
            type_name: "IntegerSequence".to_string(),
        }
    );
    assert_eq!(param.value().to_vec(), vec![1]);
}

#[test]
fn test_sequence_help_placeholder() {
    let param = BasicParam::new(["pages", "P"], IntegerSequence::new(), "pages to print");
    assert_eq!(
        param.help_text(),
        "--pages|-P  <IntegerSequence>\n   pages to print\n"
    );
}

#[test]
fn test_date_param_defaults_to_today() {
    let param = BasicParam::new(["da"], Ymd::default(), "");
    assert_eq!(*param.value(), Ymd::today());
}

#[test]
fn test_date_param_process() {
    let mut param = BasicParam::new(["da"], Ymd::default(), "");

    param.process("da", "2011-01-01").unwrap();
    assert_eq!(*param.value(), ymd(2011, 1, 1));

    param.process("da", "1977-06-02").unwrap();
    assert_eq!(*param.value(), ymd(1977, 6, 2));

    assert!(param.process("da", "2018-0-14").is_err());
    assert_eq!(*param.value(), ymd(1977, 6, 2));
}

#[test]
fn test_clamped_dates() {
    let mut param = ClampedRangeParam::new(
        ["date"],
        ymd(2022, 12, 1),
        ymd(2022, 11, 15),
        ymd(2022, 12, 15),
        "between nov 15 and dec 15 in year 2022",
    );
    assert_eq!(*param.value(), ymd(2022, 12, 1));

    param.process("date", "2022-11-14").unwrap();
    assert_eq!(*param.value(), ymd(2022, 11, 15));

    param.process("date", "2012-1-1").unwrap();
    assert_eq!(*param.value(), ymd(2022, 11, 15));

    param.process("date", "2023-12-1").unwrap();
    assert_eq!(*param.value(), ymd(2022, 12, 15));

    param.process("date", "2022-12-16").unwrap();
    assert_eq!(*param.value(), ymd(2022, 12, 15));

    param.process("date", "2022-12-03").unwrap();
    assert_eq!(*param.value(), ymd(2022, 12, 3));
}

#[test]
fn test_range_limited_dates() {
    let mut param = RangeLimitedParam::new(
        ["since"],
        ymd(2022, 12, 1),
        ymd(2022, 11, 15),
        ymd(2022, 12, 15),
        "start date",
    );

    let error = param.process("since", "2022-11-14").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Value `2022-11-14` given to parameter `since` is not between 2022-11-15 and 2022-12-15"
    );
    assert_eq!(*param.value(), ymd(2022, 12, 1));

    param.process("since", "2022-12-15").unwrap();
    assert_eq!(*param.value(), ymd(2022, 12, 15));
}

#[test]
fn test_value_types_through_parser() {
    let pages = shared(BasicParam::new(["pages", "P"], IntegerSequence::new(), "pages"));
    let since = shared(BasicParam::new(["since", "s"], ymd(2000, 1, 1), "start date"));
    let parser = ArgParser::new([ParamRef::one_arg(&pages), ParamRef::one_arg(&since)]).unwrap();

    let extras = parser
        .parse_args(["-P", "1..3,7", "--since=2021-05-04", "report.pdf"])
        .unwrap();

    assert_eq!(pages.borrow().value().to_vec(), vec![1, 2, 3, 7]);
    assert_eq!(*since.borrow().value(), ymd(2021, 5, 4));
    assert_eq!(extras, vec!["report.pdf"]);
}

#[test]
fn test_negative_sequence_values() {
    let pages = shared(BasicParam::new(["pages", "P"], IntegerSequence::new(), "pages"));
    let parser = ArgParser::new([ParamRef::one_arg(&pages)]).unwrap();

    // A separate value is taken as-is, even when it starts with a dash
    parser.parse_args(["--pages", "-2..2"]).unwrap();
    assert_eq!(pages.borrow().value().to_vec(), vec![-2, -1, 0, 1, 2]);

    parser.parse_args(["--pages=-5"]).unwrap();
    assert_eq!(pages.borrow().value().to_vec(), vec![-5]);
}
