/// An entry production, i.e., a grammar start symbol that a whole string can
/// be recognized against.
///
/// Each variant corresponds to one of the `Temporal...String` productions of
/// the [Temporal ISO 8601 grammar]. Since this is a closed enumeration, there
/// is no such thing as an unsupported production at runtime.
///
/// Productions that require a time zone (for example, instant strings or
/// zoned datetime strings) are not provided, since recognition of UTC
/// offsets and time zone annotations is not implemented.
///
/// [Temporal ISO 8601 grammar]: https://tc39.es/proposal-temporal/#sec-temporal-iso8601grammar
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Production {
    /// `TemporalDateString`: a date, optionally followed by a time and a
    /// calendar annotation.
    ///
    /// e.g., `2021-07-06`, `20210706`, `2021-07-06T12:30[u-ca=gregory]`.
    DateString,
    /// `TemporalDateTimeString`: the same grammar as `DateString`.
    DateTimeString,
    /// `TemporalTimeString`: a time, optionally preceded by a date.
    ///
    /// A date without a time is not accepted. A time written without a
    /// leading `T` is rejected when it could also be read as a month-day
    /// (`1201`) or a year-month (`202112`).
    TimeString,
    /// `TemporalYearMonthString`: a full date string, or a year and month.
    ///
    /// e.g., `2021-07`, `+002021-07`, `202107[u-ca=iso8601]`.
    YearMonthString,
    /// `TemporalMonthDayString`: a full date string, or a month and day.
    ///
    /// e.g., `07-06`, `--07-06`, `0706`.
    MonthDayString,
    /// `TemporalCalendarString`: a full date string, or a bare calendar name.
    ///
    /// e.g., `gregory`, `islamic-umalqura`.
    CalendarString,
    /// `TemporalDurationString`: an ISO 8601 duration.
    ///
    /// e.g., `P1Y2M3W4DT5H6M7.5S`, `-PT1.5H`.
    DurationString,
}

impl Production {
    /// Every entry production.
    pub const ALL: [Production; 7] = [
        Production::DateString,
        Production::DateTimeString,
        Production::TimeString,
        Production::YearMonthString,
        Production::MonthDayString,
        Production::CalendarString,
        Production::DurationString,
    ];

    /// Returns the name of this production as it appears in the grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::Production;
    ///
    /// assert_eq!(Production::DateString.name(), "TemporalDateString");
    /// ```
    pub fn name(self) -> &'static str {
        use self::Production::*;

        match self {
            DateString => "TemporalDateString",
            DateTimeString => "TemporalDateTimeString",
            TimeString => "TemporalTimeString",
            YearMonthString => "TemporalYearMonthString",
            MonthDayString => "TemporalMonthDayString",
            CalendarString => "TemporalCalendarString",
            DurationString => "TemporalDurationString",
        }
    }
}

impl core::fmt::Display for Production {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Production {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
