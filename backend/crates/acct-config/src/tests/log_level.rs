use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_when_parsed_then_filter_matches() {
    let level = LogLevel::from_str("warn").unwrap();

    assert_that!(level.0, eq(LevelFilter::Warn));
}

#[test]
fn given_mixed_case_level_when_parsed_then_filter_matches() {
    let level = LogLevel::from_str("DEBUG").unwrap();

    assert_that!(level.0, eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_level_when_parsed_then_falls_back_to_info() {
    let level = LogLevel::from_str("verbose").unwrap();

    assert_that!(level.0, eq(LevelFilter::Info));
}
