use quickcheck::{quickcheck, TestResult};
use temporal_iso8601::{parse, Parser, Production};

quickcheck! {
    fn prop_valid_dates_parse(year: u16, month: u8, day: u8) -> TestResult {
        let (year, month, day) = (year % 10_000, month % 12 + 1, day % 31 + 1);
        let extended = format!("{year:04}-{month:02}-{day:02}");
        let basic = format!("{year:04}{month:02}{day:02}");
        for input in [extended, basic] {
            let Some(r) = parse(Production::DateString, &input) else {
                return TestResult::error(format!("{input:?} did not parse"));
            };
            let fields = (r.date_year(), r.date_month(), r.date_day());
            let (y, m, d) = (
                format!("{year:04}"),
                format!("{month:02}"),
                format!("{day:02}"),
            );
            let expected = (Some(&*y), Some(&*m), Some(&*d));
            if fields != expected {
                return TestResult::error(format!(
                    "{input:?} gave {fields:?}, expected {expected:?}",
                ));
            }
        }
        TestResult::passed()
    }

    fn prop_hour_range(hour: u8) -> bool {
        let hour = hour % 100;
        let input = format!("T{hour:02}");
        parse(Production::TimeString, &input).is_some() == (hour < 24)
    }

    fn prop_minute_range(minute: u8) -> bool {
        let minute = minute % 100;
        let input = format!("T12:{minute:02}");
        parse(Production::TimeString, &input).is_some() == (minute < 60)
    }

    fn prop_second_range(second: u8) -> bool {
        let second = second % 100;
        let input = format!("T12:30:{second:02}");
        parse(Production::TimeString, &input).is_some() == (second <= 60)
    }

    fn prop_month_range(month: u8) -> bool {
        let month = month % 100;
        let input = format!("2021-{month:02}");
        let ok = parse(Production::YearMonthString, &input).is_some();
        ok == (1..=12).contains(&month)
    }

    fn prop_day_range(day: u8) -> bool {
        let day = day % 100;
        let input = format!("--01-{day:02}");
        let ok = parse(Production::MonthDayString, &input).is_some();
        ok == (1..=31).contains(&day)
    }

    fn prop_duration_digits(years: u64, days: u32, hours: u16) -> bool {
        let input = format!("P{years}Y{days}DT{hours}H");
        let Some(r) = parse(Production::DurationString, &input) else {
            return false;
        };
        r.duration_years() == Some(&*years.to_string())
            && r.duration_days() == Some(&*days.to_string())
            && r.duration_whole_hours() == Some(&*hours.to_string())
            && r.duration_months().is_none()
    }

    fn prop_trailing_input_always_fails(year: u16, suffix: char) -> bool {
        let input = format!("{:04}-01-01{suffix}", year % 10_000);
        Parser::new()
            .try_parse(Production::DateString, &input)
            .map_or_else(|err| err.is_trailing_input(), |_| false)
    }
}
