use core::ops::Range;

/// A half-open byte range into the input given to the recognizer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Span {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    pub(crate) fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// A named component of the grammar that a successful parse may capture.
///
/// Each field corresponds to one terminal of interest in the Temporal
/// ISO 8601 grammar. Which fields are present in a [`ParseResult`] depends
/// on the [`Production`](crate::Production) that was parsed and on which
/// optional parts of the grammar the input actually used.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Field {
    /// The sign of an extended (six digit) year, or the sign of a duration.
    ///
    /// This is one of `+`, `-` or U+2212 MINUS SIGN.
    Sign,
    /// A year. Either four digits, or a sign followed by six digits. When
    /// a sign is present, it is included.
    DateYear,
    /// A two digit month in the range `01-12`.
    DateMonth,
    /// A two digit day in the range `01-31`.
    DateDay,
    /// A two digit hour in the range `00-23`.
    TimeHour,
    /// A two digit minute in the range `00-59`.
    TimeMinute,
    /// A two digit second in the range `00-60`.
    TimeSecond,
    /// One to nine digits following the decimal separator of a time.
    TimeFractionalPart,
    /// The name inside a `[u-ca=...]` calendar annotation, or a bare
    /// calendar name when parsing a calendar string.
    CalendarName,
    /// The digits before the `Y` designator of a duration.
    DurationYears,
    /// The digits before the `M` designator in the date part of a duration.
    DurationMonths,
    /// The digits before the `W` designator of a duration.
    DurationWeeks,
    /// The digits before the `D` designator of a duration.
    DurationDays,
    /// The integral digits before the `H` designator of a duration.
    DurationWholeHours,
    /// The fractional digits before the `H` designator of a duration.
    DurationHoursFraction,
    /// The integral digits before the `M` designator in the time part of a
    /// duration.
    DurationWholeMinutes,
    /// The fractional digits before the `M` designator in the time part of a
    /// duration.
    DurationMinutesFraction,
    /// The integral digits before the `S` designator of a duration.
    DurationWholeSeconds,
    /// The fractional digits before the `S` designator of a duration.
    DurationSecondsFraction,
}

impl Field {
    /// Every field, in the order in which they are reported by
    /// [`ParseResult::iter`].
    pub const ALL: [Field; 19] = [
        Field::Sign,
        Field::DateYear,
        Field::DateMonth,
        Field::DateDay,
        Field::TimeHour,
        Field::TimeMinute,
        Field::TimeSecond,
        Field::TimeFractionalPart,
        Field::CalendarName,
        Field::DurationYears,
        Field::DurationMonths,
        Field::DurationWeeks,
        Field::DurationDays,
        Field::DurationWholeHours,
        Field::DurationHoursFraction,
        Field::DurationWholeMinutes,
        Field::DurationMinutesFraction,
        Field::DurationWholeSeconds,
        Field::DurationSecondsFraction,
    ];

    /// Returns a short snake case name for this field.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::Field;
    ///
    /// assert_eq!(Field::TimeFractionalPart.name(), "time_fractional_part");
    /// ```
    pub fn name(self) -> &'static str {
        use self::Field::*;

        match self {
            Sign => "sign",
            DateYear => "date_year",
            DateMonth => "date_month",
            DateDay => "date_day",
            TimeHour => "time_hour",
            TimeMinute => "time_minute",
            TimeSecond => "time_second",
            TimeFractionalPart => "time_fractional_part",
            CalendarName => "calendar_name",
            DurationYears => "duration_years",
            DurationMonths => "duration_months",
            DurationWeeks => "duration_weeks",
            DurationDays => "duration_days",
            DurationWholeHours => "duration_whole_hours",
            DurationHoursFraction => "duration_hours_fraction",
            DurationWholeMinutes => "duration_whole_minutes",
            DurationMinutesFraction => "duration_minutes_fraction",
            DurationWholeSeconds => "duration_whole_seconds",
            DurationSecondsFraction => "duration_seconds_fraction",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The spans captured by an entry production, one optional slot per field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Fields {
    spans: [Option<Span>; Field::ALL.len()],
}

impl Fields {
    pub(crate) fn new() -> Fields {
        Fields::default()
    }

    pub(crate) fn get(&self, field: Field) -> Option<Span> {
        self.spans[field.index()]
    }

    pub(crate) fn set(&mut self, field: Field, span: Option<Span>) {
        self.spans[field.index()] = span;
    }
}

/// The components captured by a successful parse.
///
/// Each [`Field`] is either absent or refers to the exact substring of the
/// input that the corresponding grammar production matched. No numeric
/// interpretation or semantic validation is done. For example, a result for
/// `2021-02-31` is returned as-is even though February never has 31 days.
///
/// A `ParseResult` borrows the input it was parsed from, so it can never
/// outlive it.
///
/// # Example
///
/// ```
/// use temporal_iso8601::{parse, Field, Production};
///
/// let result = parse(Production::DateString, "2021-07-06T12:30:15.5").unwrap();
/// assert_eq!(result.date_year(), Some("2021"));
/// assert_eq!(result.time_second(), Some("15"));
/// assert_eq!(result.get(Field::TimeFractionalPart), Some("5"));
/// assert_eq!(result.span(Field::TimeFractionalPart), Some(20..21));
/// assert_eq!(result.calendar_name(), None);
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ParseResult<'i> {
    input: &'i str,
    fields: Fields,
}

impl<'i> ParseResult<'i> {
    pub(crate) fn new(input: &'i str, fields: Fields) -> ParseResult<'i> {
        ParseResult { input, fields }
    }

    /// Returns the complete input this result was parsed from.
    pub fn input(&self) -> &'i str {
        self.input
    }

    /// Returns the substring matched for the given field, if any.
    pub fn get(&self, field: Field) -> Option<&'i str> {
        let span = self.fields.get(field)?;
        Some(&self.input[span.range()])
    }

    /// Returns the byte range in the input matched for the given field, if
    /// any.
    pub fn span(&self, field: Field) -> Option<Range<usize>> {
        self.fields.get(field).map(Span::range)
    }

    /// Returns an iterator over every present field along with its matched
    /// substring, in the order given by [`Field::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'i str)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |&field| Some((field, self.get(field)?)))
    }

    /// Returns the sign of an extended year or duration, if present.
    pub fn sign(&self) -> Option<&'i str> {
        self.get(Field::Sign)
    }

    /// Returns the year, including its sign when it is an extended year.
    pub fn date_year(&self) -> Option<&'i str> {
        self.get(Field::DateYear)
    }

    /// Returns the two digit month.
    pub fn date_month(&self) -> Option<&'i str> {
        self.get(Field::DateMonth)
    }

    /// Returns the two digit day.
    pub fn date_day(&self) -> Option<&'i str> {
        self.get(Field::DateDay)
    }

    /// Returns the two digit hour.
    pub fn time_hour(&self) -> Option<&'i str> {
        self.get(Field::TimeHour)
    }

    /// Returns the two digit minute.
    pub fn time_minute(&self) -> Option<&'i str> {
        self.get(Field::TimeMinute)
    }

    /// Returns the two digit second. This may be `60`.
    pub fn time_second(&self) -> Option<&'i str> {
        self.get(Field::TimeSecond)
    }

    /// Returns the fractional second digits, without the separator.
    pub fn time_fractional_part(&self) -> Option<&'i str> {
        self.get(Field::TimeFractionalPart)
    }

    /// Returns the calendar name.
    pub fn calendar_name(&self) -> Option<&'i str> {
        self.get(Field::CalendarName)
    }

    /// Returns the digits of the years unit of a duration.
    pub fn duration_years(&self) -> Option<&'i str> {
        self.get(Field::DurationYears)
    }

    /// Returns the digits of the months unit of a duration.
    pub fn duration_months(&self) -> Option<&'i str> {
        self.get(Field::DurationMonths)
    }

    /// Returns the digits of the weeks unit of a duration.
    pub fn duration_weeks(&self) -> Option<&'i str> {
        self.get(Field::DurationWeeks)
    }

    /// Returns the digits of the days unit of a duration.
    pub fn duration_days(&self) -> Option<&'i str> {
        self.get(Field::DurationDays)
    }

    /// Returns the integral digits of the hours unit of a duration.
    pub fn duration_whole_hours(&self) -> Option<&'i str> {
        self.get(Field::DurationWholeHours)
    }

    /// Returns the fractional digits of the hours unit of a duration.
    pub fn duration_hours_fraction(&self) -> Option<&'i str> {
        self.get(Field::DurationHoursFraction)
    }

    /// Returns the integral digits of the minutes unit of a duration.
    pub fn duration_whole_minutes(&self) -> Option<&'i str> {
        self.get(Field::DurationWholeMinutes)
    }

    /// Returns the fractional digits of the minutes unit of a duration.
    pub fn duration_minutes_fraction(&self) -> Option<&'i str> {
        self.get(Field::DurationMinutesFraction)
    }

    /// Returns the integral digits of the seconds unit of a duration.
    pub fn duration_whole_seconds(&self) -> Option<&'i str> {
        self.get(Field::DurationWholeSeconds)
    }

    /// Returns the fractional digits of the seconds unit of a duration.
    pub fn duration_seconds_fraction(&self) -> Option<&'i str> {
        self.get(Field::DurationSecondsFraction)
    }
}

impl<'i> core::fmt::Debug for ParseResult<'i> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut dbg = f.debug_struct("ParseResult");
        for (field, value) in self.iter() {
            dbg.field(field.name(), &value);
        }
        dbg.finish()
    }
}

#[cfg(feature = "serde")]
impl<'i> serde::Serialize for ParseResult<'i> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.iter().count()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Field {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
