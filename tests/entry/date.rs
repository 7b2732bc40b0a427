use temporal_iso8601::{parse, Field, Parser, Production};

use crate::entry::Result;

#[test]
fn date_only() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::DateString, "2021-07-06")?;
    assert_eq!(r.date_year(), Some("2021"));
    assert_eq!(r.date_month(), Some("07"));
    assert_eq!(r.date_day(), Some("06"));
    assert_eq!(r.iter().count(), 3);

    let r = p.try_parse(Production::DateString, "20210706")?;
    assert_eq!(r.date_year(), Some("2021"));
    assert_eq!(r.date_month(), Some("07"));
    assert_eq!(r.date_day(), Some("06"));

    Ok(())
}

#[test]
fn date_with_time() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::DateString, "2021-07-06T12:30:15.5")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        date_year: "2021",
        date_month: "07",
        date_day: "06",
        time_hour: "12",
        time_minute: "30",
        time_second: "15",
        time_fractional_part: "5",
    }
    "#);

    let r = p.try_parse(Production::DateTimeString, "20210706t123015,25")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        date_year: "2021",
        date_month: "07",
        date_day: "06",
        time_hour: "12",
        time_minute: "30",
        time_second: "15",
        time_fractional_part: "25",
    }
    "#);

    let r = p.try_parse(Production::DateTimeString, "2021-07-06 12")?;
    assert_eq!(r.time_hour(), Some("12"));
    assert_eq!(r.time_minute(), None);

    let r = p.try_parse(Production::DateTimeString, "2021-12-31T23:59:60")?;
    assert_eq!(r.time_second(), Some("60"));

    Ok(())
}

#[test]
fn date_with_calendar() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::DateString, "2021-07-06[u-ca=gregory]")?;
    assert_eq!(r.calendar_name(), Some("gregory"));
    assert_eq!(r.span(Field::CalendarName), Some(16..23));

    let r = p.try_parse(
        Production::DateTimeString,
        "2021-07-06T12:30[u-ca=islamic-umalqura]",
    )?;
    assert_eq!(r.time_minute(), Some("30"));
    assert_eq!(r.calendar_name(), Some("islamic-umalqura"));

    Ok(())
}

#[test]
fn extended_years() -> Result {
    let p = Parser::new();

    let r = p.try_parse(Production::DateString, "+002021-01-01")?;
    assert_eq!(r.sign(), Some("+"));
    assert_eq!(r.date_year(), Some("+002021"));

    let r = p.try_parse(Production::DateString, "-271821-04-19")?;
    assert_eq!(r.sign(), Some("-"));
    assert_eq!(r.date_year(), Some("-271821"));

    let r = p.try_parse(Production::DateString, "\u{2212}0000010101")?;
    assert_eq!(r.sign(), Some("\u{2212}"));
    assert_eq!(r.date_year(), Some("\u{2212}000001"));
    assert_eq!(r.date_month(), Some("01"));

    Ok(())
}

#[test]
fn rejected() {
    let cases = [
        "",
        "2021",
        "2021-07",
        "2021-13-06",
        "2021-00-06",
        "2021-07-00",
        "2021-07-32",
        "2021-0706",
        "202107-06",
        "+2021-07-06",
        "21-07-06",
        "2021-07-06X",
        "2021-07-06T",
        "2021-07-06T24:00",
        "2021-07-06T12:",
        "2021-07-06T12:30:15.",
        "2021-07-06T12:30:15.1234567891",
        "2021-07-06[u-ca=gregory",
        "2021-07-06[u-ca=gregory][u-ca=iso8601]",
        "2021-07-06Z",
        "2021-07-06T12:30+05:00",
        " 2021-07-06",
    ];
    for input in cases {
        assert!(
            parse(Production::DateString, input).is_none(),
            "DateString unexpectedly matched {input:?}",
        );
        assert!(
            parse(Production::DateTimeString, input).is_none(),
            "DateTimeString unexpectedly matched {input:?}",
        );
    }
}

#[test]
fn errors() {
    let p = Parser::new();

    let err = p.try_parse(Production::DateString, "2021-13-06").unwrap_err();
    insta::assert_snapshot!(
        err,
        @r#"failed to parse "2021-13-06" as TemporalDateString"#,
    );

    let err = p
        .try_parse(Production::DateTimeString, "2021-07-06T12:30Z")
        .unwrap_err();
    insta::assert_snapshot!(
        err,
        @r#"parsed TemporalDateTimeString from "2021-07-06T12:30", but unparsed input "Z" remains (expected no unparsed input)"#,
    );
}
