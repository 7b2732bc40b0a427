/*!
The duration productions of the Temporal ISO 8601 grammar.

Durations look like `P1Y2M3W4DT5H6M7.5S`. Every unit is optional, but at
least one must be present, and units must appear in descending order. A
fractional value is only allowed on the smallest time unit present. So
`PT1.5H` and `PT1H30.5M` are fine, while `PT1.5H30M` is not.

Designators are case insensitive. That is, `p1y` is the same duration as
`P1Y`.
*/

use crate::{
    parser::grammar::Grammar,
    record::{Field, Fields, Span},
};

/// The spans captured by a duration. Units that weren't written are `None`.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct ParsedDuration {
    sign: Option<Span>,
    years: Option<Span>,
    months: Option<Span>,
    weeks: Option<Span>,
    days: Option<Span>,
    whole_hours: Option<Span>,
    hours_fraction: Option<Span>,
    whole_minutes: Option<Span>,
    minutes_fraction: Option<Span>,
    whole_seconds: Option<Span>,
    seconds_fraction: Option<Span>,
}

impl ParsedDuration {
    pub(super) fn record(&self, fields: &mut Fields) {
        fields.set(Field::Sign, self.sign);
        fields.set(Field::DurationYears, self.years);
        fields.set(Field::DurationMonths, self.months);
        fields.set(Field::DurationWeeks, self.weeks);
        fields.set(Field::DurationDays, self.days);
        fields.set(Field::DurationWholeHours, self.whole_hours);
        fields.set(Field::DurationHoursFraction, self.hours_fraction);
        fields.set(Field::DurationWholeMinutes, self.whole_minutes);
        fields.set(Field::DurationMinutesFraction, self.minutes_fraction);
        fields.set(Field::DurationWholeSeconds, self.whole_seconds);
        fields.set(Field::DurationSecondsFraction, self.seconds_fraction);
    }
}

impl<'i> Grammar<'i> {
    // Duration :
    //   Sign[opt] DurationDesignator DurationDate
    //   Sign[opt] DurationDesignator DurationTime
    pub(super) fn parse_duration(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let sign = tx.parse_sign();
        if !tx.parse_designator(b'P') {
            return None;
        }
        let duration = tx
            .parse_duration_date()
            .or_else(|| tx.parse_duration_time())?;
        tx.commit();
        Some(ParsedDuration { sign, ..duration })
    }

    // DurationDate :
    //   DurationYearsPart DurationTime[opt]
    //   DurationMonthsPart DurationTime[opt]
    //   DurationWeeksPart DurationTime[opt]
    //   DurationDaysPart DurationTime[opt]
    fn parse_duration_date(&mut self) -> Option<ParsedDuration> {
        let date = self
            .parse_duration_years_part()
            .or_else(|| self.parse_duration_months_part())
            .or_else(|| self.parse_duration_weeks_part())
            .or_else(|| self.parse_duration_days_part())?;
        let Some(time) = self.parse_duration_time() else {
            return Some(date);
        };
        Some(ParsedDuration {
            years: date.years,
            months: date.months,
            weeks: date.weeks,
            days: date.days,
            ..time
        })
    }

    // DurationYearsPart :
    //   DurationYears YearsDesignator DurationMonthsPart
    //   DurationYears YearsDesignator DurationWeeksPart
    //   DurationYears YearsDesignator DurationDaysPart[opt]
    fn parse_duration_years_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let years = tx.parse_decimal_digits()?;
        if !tx.parse_designator(b'Y') {
            return None;
        }
        let rest = tx
            .parse_duration_months_part()
            .or_else(|| tx.parse_duration_weeks_part())
            .or_else(|| tx.parse_duration_days_part())
            .unwrap_or_default();
        tx.commit();
        Some(ParsedDuration { years: Some(years), ..rest })
    }

    // DurationMonthsPart :
    //   DurationMonths MonthsDesignator DurationWeeksPart
    //   DurationMonths MonthsDesignator DurationDaysPart[opt]
    fn parse_duration_months_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let months = tx.parse_decimal_digits()?;
        if !tx.parse_designator(b'M') {
            return None;
        }
        let rest = tx
            .parse_duration_weeks_part()
            .or_else(|| tx.parse_duration_days_part())
            .unwrap_or_default();
        tx.commit();
        Some(ParsedDuration { months: Some(months), ..rest })
    }

    // DurationWeeksPart :
    //   DurationWeeks WeeksDesignator DurationDaysPart[opt]
    fn parse_duration_weeks_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let weeks = tx.parse_decimal_digits()?;
        if !tx.parse_designator(b'W') {
            return None;
        }
        let rest = tx.parse_duration_days_part().unwrap_or_default();
        tx.commit();
        Some(ParsedDuration { weeks: Some(weeks), ..rest })
    }

    // DurationDaysPart :
    //   DurationDays DaysDesignator
    fn parse_duration_days_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let days = tx.parse_decimal_digits()?;
        if !tx.parse_designator(b'D') {
            return None;
        }
        tx.commit();
        Some(ParsedDuration { days: Some(days), ..ParsedDuration::default() })
    }

    // DurationTime :
    //   TimeDesignator DurationHoursPart
    //   TimeDesignator DurationMinutesPart
    //   TimeDesignator DurationSecondsPart
    fn parse_duration_time(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        if !tx.parse_time_designator() {
            return None;
        }
        let time = tx
            .parse_duration_hours_part()
            .or_else(|| tx.parse_duration_minutes_part())
            .or_else(|| tx.parse_duration_seconds_part())?;
        tx.commit();
        Some(time)
    }

    // DurationHoursPart :
    //   DurationWholeHours DurationHoursFraction HoursDesignator
    //   DurationWholeHours HoursDesignator DurationMinutesPart
    //   DurationWholeHours HoursDesignator DurationSecondsPart[opt]
    fn parse_duration_hours_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let whole_hours = Some(tx.parse_decimal_digits()?);
        if let Some(fraction) = tx.parse_time_fraction() {
            if !tx.parse_designator(b'H') {
                return None;
            }
            tx.commit();
            return Some(ParsedDuration {
                whole_hours,
                hours_fraction: Some(fraction),
                ..ParsedDuration::default()
            });
        }
        if !tx.parse_designator(b'H') {
            return None;
        }
        let rest = tx
            .parse_duration_minutes_part()
            .or_else(|| tx.parse_duration_seconds_part())
            .unwrap_or_default();
        tx.commit();
        Some(ParsedDuration { whole_hours, ..rest })
    }

    // DurationMinutesPart :
    //   DurationWholeMinutes DurationMinutesFraction MinutesDesignator
    //   DurationWholeMinutes MinutesDesignator DurationSecondsPart[opt]
    fn parse_duration_minutes_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let whole_minutes = Some(tx.parse_decimal_digits()?);
        if let Some(fraction) = tx.parse_time_fraction() {
            if !tx.parse_designator(b'M') {
                return None;
            }
            tx.commit();
            return Some(ParsedDuration {
                whole_minutes,
                minutes_fraction: Some(fraction),
                ..ParsedDuration::default()
            });
        }
        if !tx.parse_designator(b'M') {
            return None;
        }
        let rest = tx.parse_duration_seconds_part().unwrap_or_default();
        tx.commit();
        Some(ParsedDuration { whole_minutes, ..rest })
    }

    // DurationSecondsPart :
    //   DurationWholeSeconds DurationSecondsFraction[opt] SecondsDesignator
    fn parse_duration_seconds_part(&mut self) -> Option<ParsedDuration> {
        let mut tx = self.transaction();
        let whole_seconds = Some(tx.parse_decimal_digits()?);
        let seconds_fraction = tx.parse_time_fraction();
        if !tx.parse_designator(b'S') {
            return None;
        }
        tx.commit();
        Some(ParsedDuration {
            whole_seconds,
            seconds_fraction,
            ..ParsedDuration::default()
        })
    }

    // DecimalDigits :
    //   DecimalDigit
    //   DecimalDigits DecimalDigit
    fn parse_decimal_digits(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.parse_decimal_digit() {
            return None;
        }
        while tx.parse_decimal_digit() {}
        Some(tx.commit())
    }

    /// Consumes the given ASCII uppercase designator, or its lowercase form.
    fn parse_designator(&mut self, upper: u8) -> bool {
        self.cursor.consume_if(|b| b.to_ascii_uppercase() == upper)
    }
}
