use temporal_iso8601::{parse, Parser, Production};

use crate::entry::Result;

#[test]
fn year_month() -> Result {
    let p = Parser::new();

    for input in ["2021-07", "202107"] {
        let r = p.try_parse(Production::YearMonthString, input)?;
        assert_eq!(r.date_year(), Some("2021"), "{input}");
        assert_eq!(r.date_month(), Some("07"), "{input}");
        assert_eq!(r.date_day(), None, "{input}");
    }

    let r = p.try_parse(Production::YearMonthString, "+002021-07")?;
    assert_eq!(r.sign(), Some("+"));
    assert_eq!(r.date_year(), Some("+002021"));

    let r = p.try_parse(Production::YearMonthString, "2021-07[u-ca=iso8601]")?;
    assert_eq!(r.calendar_name(), Some("iso8601"));

    // A complete date string is a valid year-month string too.
    let r = p.try_parse(Production::YearMonthString, "2021-07-06T12")?;
    insta::assert_debug_snapshot!(r, @r#"
    ParseResult {
        date_year: "2021",
        date_month: "07",
        date_day: "06",
        time_hour: "12",
    }
    "#);

    Ok(())
}

#[test]
fn year_month_rejected() {
    let cases =
        ["", "2021", "2021-13", "2021-00", "2021-0706", "+2021-07", "21-07"];
    for input in cases {
        assert!(
            parse(Production::YearMonthString, input).is_none(),
            "YearMonthString unexpectedly matched {input:?}",
        );
    }
}

#[test]
fn month_day() -> Result {
    let p = Parser::new();

    for input in ["07-06", "--07-06", "0706", "--0706"] {
        let r = p.try_parse(Production::MonthDayString, input)?;
        assert_eq!(r.date_year(), None, "{input}");
        assert_eq!(r.date_month(), Some("07"), "{input}");
        assert_eq!(r.date_day(), Some("06"), "{input}");
    }

    let r = p.try_parse(Production::MonthDayString, "12-25[u-ca=gregory]")?;
    assert_eq!(r.calendar_name(), Some("gregory"));

    // Only the shape of a day is checked, not whether the month has it.
    let r = p.try_parse(Production::MonthDayString, "02-30")?;
    assert_eq!(r.date_day(), Some("30"));

    let r = p.try_parse(Production::MonthDayString, "2021-07-06")?;
    assert_eq!(r.date_year(), Some("2021"));

    Ok(())
}

#[test]
fn month_day_rejected() {
    let cases = ["", "07", "13-01", "07-32", "00-01", "-07-06", "---07-06"];
    for input in cases {
        assert!(
            parse(Production::MonthDayString, input).is_none(),
            "MonthDayString unexpectedly matched {input:?}",
        );
    }
}

#[test]
fn calendar() -> Result {
    let p = Parser::new();

    for input in ["gregory", "iso8601", "islamic-umalqura", "abc", "abcdefgh"] {
        let r = p.try_parse(Production::CalendarString, input)?;
        assert_eq!(r.calendar_name(), Some(input));
        assert_eq!(r.iter().count(), 1);
    }

    // Not a date, since `56` isn't a month. So it's a calendar name.
    let r = p.try_parse(Production::CalendarString, "12345678")?;
    assert_eq!(r.calendar_name(), Some("12345678"));

    let r = p.try_parse(Production::CalendarString, "2021-07-06")?;
    assert_eq!(r.date_day(), Some("06"));
    assert_eq!(r.calendar_name(), None);

    let r =
        p.try_parse(Production::CalendarString, "2021-07-06[u-ca=hebrew]")?;
    assert_eq!(r.calendar_name(), Some("hebrew"));

    // A name may start with something that looks like a date.
    for input in ["20210706-gregory", "20210101-abc"] {
        let r = p.try_parse(Production::CalendarString, input)?;
        assert_eq!(r.calendar_name(), Some(input), "{input}");
        assert_eq!(r.date_year(), None, "{input}");
        assert_eq!(r.iter().count(), 1, "{input}");
    }

    Ok(())
}

#[test]
fn calendar_prefers_date_when_nothing_matches_fully() {
    let p = Parser::new();

    for input in ["2021-07-06X", "20210706-ab", "20210706-gregory!"] {
        let err = p.try_parse(Production::CalendarString, input).unwrap_err();
        assert!(err.is_trailing_input(), "{input}: {err}");
    }
    let err =
        p.try_parse(Production::CalendarString, "20210706-ab").unwrap_err();
    insta::assert_snapshot!(
        err,
        @r#"parsed TemporalCalendarString from "20210706", but unparsed input "-ab" remains (expected no unparsed input)"#,
    );
}

#[test]
fn calendar_rejected() {
    let cases = [
        "",
        "ab",
        "abcdefghi",
        "gregory-",
        "-gregory",
        "gregory-ab",
        "[u-ca=gregory]",
        "greg ory",
    ];
    for input in cases {
        assert!(
            parse(Production::CalendarString, input).is_none(),
            "CalendarString unexpectedly matched {input:?}",
        );
    }
}
