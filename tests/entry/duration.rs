use temporal_iso8601::{parse, Field, Parser, Production};

use crate::entry::Result;

#[test]
fn every_field() -> Result {
    let r = Parser::new()
        .try_parse(Production::DurationString, "-P1Y2M3W4DT5H6M7.5S")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        sign: "-",
        duration_years: "1",
        duration_months: "2",
        duration_weeks: "3",
        duration_days: "4",
        duration_whole_hours: "5",
        duration_whole_minutes: "6",
        duration_whole_seconds: "7",
        duration_seconds_fraction: "5",
    }
    "#);
    Ok(())
}

#[test]
fn fractional_units() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::DurationString, "PT1.5H")?;
    assert_eq!(r.get(Field::DurationWholeHours), Some("1"));
    assert_eq!(r.get(Field::DurationHoursFraction), Some("5"));

    let r = p.try_parse(Production::DurationString, "P1DT2H3,25M")?;
    assert_eq!(r.duration_days(), Some("1"));
    assert_eq!(r.duration_whole_hours(), Some("2"));
    assert_eq!(r.duration_whole_minutes(), Some("3"));
    assert_eq!(r.duration_minutes_fraction(), Some("25"));

    Ok(())
}

#[test]
fn large_values() -> Result {
    let r = Parser::new()
        .try_parse(Production::DurationString, "P123456789012345678901D")?;
    assert_eq!(r.duration_days(), Some("123456789012345678901"));
    Ok(())
}

#[test]
fn rejected() {
    let cases = [
        "",
        "P",
        "PT",
        "-P",
        "P1",
        "1D",
        "P1DT",
        "PT1.5H30M",
        "PT1.5M30S",
        "P1.5D",
        "P1D1Y",
        "PT1S1M",
        "PT0.1234567891S",
        "P1Y ",
        "P-1D",
        "+-P1D",
    ];
    for input in cases {
        assert!(
            parse(Production::DurationString, input).is_none(),
            "DurationString unexpectedly matched {input:?}",
        );
    }
}

#[test]
fn errors() {
    let p = Parser::new();

    let err = p.try_parse(Production::DurationString, "P").unwrap_err();
    assert!(err.is_no_match());

    let err =
        p.try_parse(Production::DurationString, "PT1.5H30M").unwrap_err();
    assert!(err.is_trailing_input());
    insta::assert_snapshot!(
        err,
        @r#"parsed TemporalDurationString from "PT1.5H", but unparsed input "30M" remains (expected no unparsed input)"#,
    );
}
