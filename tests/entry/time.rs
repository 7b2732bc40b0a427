use temporal_iso8601::{parse, Parser, Production};

use crate::entry::Result;

#[test]
fn designated() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::TimeString, "T12")?;
    assert_eq!(r.time_hour(), Some("12"));
    assert_eq!(r.iter().count(), 1);

    let r = p.try_parse(Production::TimeString, "t12:30:15.123")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        time_hour: "12",
        time_minute: "30",
        time_second: "15",
        time_fractional_part: "123",
    }
    "#);

    // A leading designator removes any ambiguity with a month-day.
    let r = p.try_parse(Production::TimeString, "T1201")?;
    assert_eq!(r.time_hour(), Some("12"));
    assert_eq!(r.time_minute(), Some("01"));

    let r = p.try_parse(Production::TimeString, "T1230[u-ca=iso8601]")?;
    assert_eq!(r.calendar_name(), Some("iso8601"));

    Ok(())
}

#[test]
fn undesignated() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::TimeString, "12:01")?;
    assert_eq!(r.time_hour(), Some("12"));
    assert_eq!(r.time_minute(), Some("01"));

    let r = p.try_parse(Production::TimeString, "12:30:15")?;
    assert_eq!(r.time_second(), Some("15"));

    // February 30th isn't a valid month-day, so this can only be a time.
    let r = p.try_parse(Production::TimeString, "0230")?;
    assert_eq!(r.time_hour(), Some("02"));
    assert_eq!(r.time_minute(), Some("30"));

    // Neither is April 31st.
    let r = p.try_parse(Production::TimeString, "0431")?;
    assert_eq!(r.time_minute(), Some("31"));

    // And `13` isn't a month, so this can't be a year-month.
    let r = p.try_parse(Production::TimeString, "202113")?;
    assert_eq!(r.time_hour(), Some("20"));
    assert_eq!(r.time_minute(), Some("21"));
    assert_eq!(r.time_second(), Some("13"));

    // With a calendar annotation, ambiguity isn't checked.
    let r = p.try_parse(Production::TimeString, "1201[u-ca=gregory]")?;
    assert_eq!(r.time_hour(), Some("12"));
    assert_eq!(r.calendar_name(), Some("gregory"));

    Ok(())
}

#[test]
fn with_date() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::TimeString, "2021-07-06T12:30")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        date_year: "2021",
        date_month: "07",
        date_day: "06",
        time_hour: "12",
        time_minute: "30",
    }
    "#);

    let r = p.try_parse(Production::TimeString, "20210706 1230[u-ca=japanese]")?;
    assert_eq!(r.date_day(), Some("06"));
    assert_eq!(r.time_minute(), Some("30"));
    assert_eq!(r.calendar_name(), Some("japanese"));

    Ok(())
}

#[test]
fn ambiguous_rejected() {
    let cases = [
        // valid month-days
        "1201", "12-01", "1230", "0229", "0131", "1231",
        // year-months
        "202112", "2021-12",
    ];
    for input in cases {
        assert!(
            parse(Production::TimeString, input).is_none(),
            "TimeString unexpectedly matched {input:?}",
        );
    }
}

#[test]
fn rejected() {
    let cases = [
        "",
        "T",
        "2021-07-06",
        "20210706",
        "24:00",
        "12:60",
        "123",
        "12:3015",
        "T12:30Z",
        "12:30:15.",
        "T12[u-ca=gregory",
    ];
    for input in cases {
        assert!(
            parse(Production::TimeString, input).is_none(),
            "TimeString unexpectedly matched {input:?}",
        );
    }
}
