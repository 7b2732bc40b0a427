/*!
The date, time and calendar productions of the Temporal ISO 8601 grammar.

Each production is a method on [`Grammar`] named after the grammar rule it
implements, with the rule itself quoted in a comment above it. Productions
either return `true`/`Some` with the cursor advanced past what they matched,
or return `false`/`None` with the cursor exactly where it was. The latter is
guaranteed by wrapping every multi-step production in a [`Transaction`].

Alternatives are tried in order and the first one that matches wins. There
is no longest-match rule. Numeric ranges like "hour is 00 to 23" are
enforced with literal matching, exactly as the grammar writes them.

Productions never write into a shared result. Instead, productions that
capture text return the spans they matched, and entry productions assemble
those spans into [`Fields`] only once they have matched as a whole.
*/

use crate::{
    parser::{
        cursor::{Checkpoint, Cursor, Transaction},
        Parser,
    },
    record::{Field, Fields, Span},
    Production,
};

/// U+2212 MINUS SIGN, encoded as UTF-8.
const MINUS_SIGN: &[u8] = "\u{2212}".as_bytes();

/// The months that may be followed by a day of `31` in a `ValidMonthDay`.
const THIRTY_ONE_DAY_MONTHS: &[&[u8]] =
    &[b"01", b"03", b"05", b"07", b"08", b"10", b"12"];

/// The state of a single recognition: a cursor over the input and the
/// configuration it was started with.
#[derive(Clone, Debug)]
pub(crate) struct Grammar<'i> {
    pub(super) cursor: Cursor<'i>,
    parser: Parser,
}

impl<'i> Checkpoint for Grammar<'i> {
    fn offset(&self) -> usize {
        self.cursor.offset()
    }

    fn rewind(&mut self, offset: usize) {
        self.cursor.rewind(offset)
    }
}

/// A year, along with the sign of an extended year.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedYear {
    sign: Option<Span>,
    year: Span,
}

impl ParsedYear {
    fn record(&self, fields: &mut Fields) {
        fields.set(Field::Sign, self.sign);
        fields.set(Field::DateYear, Some(self.year));
    }
}

/// A complete calendar date.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedDate {
    year: ParsedYear,
    month: Span,
    day: Span,
}

impl ParsedDate {
    fn record(&self, fields: &mut Fields) {
        self.year.record(fields);
        fields.set(Field::DateMonth, Some(self.month));
        fields.set(Field::DateDay, Some(self.day));
    }
}

/// A year and month, without a day.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedYearMonth {
    year: ParsedYear,
    month: Span,
}

impl ParsedYearMonth {
    fn record(&self, fields: &mut Fields) {
        self.year.record(fields);
        fields.set(Field::DateMonth, Some(self.month));
    }
}

/// A month and day, without a year.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedMonthDay {
    month: Span,
    day: Span,
}

impl ParsedMonthDay {
    fn record(&self, fields: &mut Fields) {
        fields.set(Field::DateMonth, Some(self.month));
        fields.set(Field::DateDay, Some(self.day));
    }
}

/// A time of day. Only the hour is required.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedTime {
    hour: Span,
    minute: Option<Span>,
    second: Option<Span>,
    fraction: Option<Span>,
}

impl ParsedTime {
    fn record(&self, fields: &mut Fields) {
        fields.set(Field::TimeHour, Some(self.hour));
        fields.set(Field::TimeMinute, self.minute);
        fields.set(Field::TimeSecond, self.second);
        fields.set(Field::TimeFractionalPart, self.fraction);
    }
}

/// A recognized time zone.
///
/// This has no values because time zone recognition isn't implemented yet.
/// Every time zone production fails, so an optional time zone always ends
/// up as `None` and a required one always fails the production requiring
/// it.
#[derive(Clone, Copy, Debug)]
pub(super) enum ParsedTimeZone {}

impl ParsedTimeZone {
    fn record(&self, _fields: &mut Fields) {
        match *self {}
    }
}

/// A date, an optional time and an optional time zone.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedDateTime {
    date: ParsedDate,
    time: Option<ParsedTime>,
    time_zone: Option<ParsedTimeZone>,
}

impl ParsedDateTime {
    fn record(&self, fields: &mut Fields) {
        self.date.record(fields);
        if let Some(ref time) = self.time {
            time.record(fields);
        }
        if let Some(ref time_zone) = self.time_zone {
            time_zone.record(fields);
        }
    }
}

/// A time with an optional time zone and calendar annotation.
#[derive(Clone, Copy, Debug)]
pub(super) struct ParsedCalendarTime {
    time: ParsedTime,
    time_zone: Option<ParsedTimeZone>,
    calendar: Option<Span>,
}

impl ParsedCalendarTime {
    fn record(&self, fields: &mut Fields) {
        self.time.record(fields);
        if let Some(ref time_zone) = self.time_zone {
            time_zone.record(fields);
        }
        fields.set(Field::CalendarName, self.calendar);
    }
}

impl<'i> Grammar<'i> {
    /// Create the state for recognizing `input` with the given configuration.
    pub(crate) fn new(parser: &Parser, input: &'i [u8]) -> Grammar<'i> {
        Grammar { cursor: Cursor::new(input), parser: *parser }
    }

    /// Returns the number of bytes consumed so far.
    pub(crate) fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns true when all of the input has been consumed.
    pub(crate) fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Open a transaction at the current position.
    pub(super) fn transaction(&mut self) -> Transaction<'_, Grammar<'i>> {
        Transaction::new(self)
    }

    /// Run the given entry production and return the fields it captured.
    ///
    /// This does not check that the input was fully consumed. That's the
    /// job of the caller.
    pub(crate) fn parse_production(
        &mut self,
        production: Production,
    ) -> Option<Fields> {
        match production {
            Production::DateString => self.parse_temporal_date_string(),
            Production::DateTimeString => {
                self.parse_temporal_date_time_string()
            }
            Production::TimeString => self.parse_temporal_time_string(),
            Production::YearMonthString => {
                self.parse_temporal_year_month_string()
            }
            Production::MonthDayString => {
                self.parse_temporal_month_day_string()
            }
            Production::CalendarString => {
                self.parse_temporal_calendar_string()
            }
            Production::DurationString => {
                self.parse_temporal_duration_string()
            }
        }
    }

    // TemporalDateString :
    //   CalendarDateTime
    fn parse_temporal_date_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        self.parse_calendar_date_time(&mut fields)?;
        Some(fields)
    }

    // TemporalDateTimeString :
    //   CalendarDateTime
    fn parse_temporal_date_time_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        self.parse_calendar_date_time(&mut fields)?;
        Some(fields)
    }

    // TemporalTimeString :
    //   CalendarDateTimeTimeRequired
    //   CalendarTime
    fn parse_temporal_time_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        if let Some((datetime, calendar)) =
            self.parse_calendar_date_time_time_required()
        {
            datetime.record(&mut fields);
            fields.set(Field::CalendarName, calendar);
            return Some(fields);
        }
        self.parse_calendar_time()?.record(&mut fields);
        Some(fields)
    }

    // TemporalYearMonthString :
    //   CalendarDateTime
    //   DateSpecYearMonth Calendar[opt]
    //
    // The full datetime is tried first. Otherwise `2021-07-06` would have
    // its `2021-07` prefix matched as a year-month, and the whole string
    // would then be rejected because of the trailing `-06`.
    fn parse_temporal_year_month_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        if self.parse_calendar_date_time(&mut fields).is_some() {
            return Some(fields);
        }
        self.parse_date_spec_year_month()?.record(&mut fields);
        fields.set(Field::CalendarName, self.parse_calendar());
        Some(fields)
    }

    // TemporalMonthDayString :
    //   CalendarDateTime
    //   DateSpecMonthDay Calendar[opt]
    fn parse_temporal_month_day_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        if self.parse_calendar_date_time(&mut fields).is_some() {
            return Some(fields);
        }
        self.parse_date_spec_month_day()?.record(&mut fields);
        fields.set(Field::CalendarName, self.parse_calendar());
        Some(fields)
    }

    // TemporalCalendarString :
    //   CalendarDateTime
    //   CalendarName
    //
    // A date only wins when it covers all of the input. Otherwise a name
    // like `20210706-gregory` would be lost to its `20210706` prefix. When
    // neither alternative reaches the end, the date is preferred, so that
    // `2021-07-06X` is still reported as a date with trailing input.
    fn parse_temporal_calendar_string(&mut self) -> Option<Fields> {
        let date_matched = {
            let mut tx = self.transaction();
            let mut fields = Fields::new();
            let matched = tx.parse_calendar_date_time(&mut fields).is_some();
            if matched && tx.is_eof() {
                tx.commit();
                return Some(fields);
            }
            matched
        };
        let mut tx = self.transaction();
        if let Some(name) = tx.parse_calendar_name() {
            if tx.is_eof() || !date_matched {
                tx.commit();
                let mut fields = Fields::new();
                fields.set(Field::CalendarName, Some(name));
                return Some(fields);
            }
        }
        drop(tx);
        let mut fields = Fields::new();
        self.parse_calendar_date_time(&mut fields)?;
        Some(fields)
    }

    // TemporalDurationString :
    //   Duration
    fn parse_temporal_duration_string(&mut self) -> Option<Fields> {
        let mut fields = Fields::new();
        self.parse_duration()?.record(&mut fields);
        Some(fields)
    }

    // DecimalDigit : one of
    //   0 1 2 3 4 5 6 7 8 9
    pub(super) fn parse_decimal_digit(&mut self) -> bool {
        self.cursor.consume_if(|b| b.is_ascii_digit())
    }

    // NonZeroDigit : one of
    //   1 2 3 4 5 6 7 8 9
    fn parse_non_zero_digit(&mut self) -> bool {
        self.cursor.consume_if(|b| matches!(b, b'1'..=b'9'))
    }

    // ASCIISign : one of
    //   + -
    fn parse_ascii_sign(&mut self) -> bool {
        self.cursor.consume_byte(b'+') || self.cursor.consume_byte(b'-')
    }

    // Sign :
    //   ASCIISign
    //   U+2212
    pub(super) fn parse_sign(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        let unicode_minus = tx.parser.unicode_minus;
        let matched = tx.parse_ascii_sign()
            || (unicode_minus && tx.cursor.consume_literal(MINUS_SIGN));
        if !matched {
            return None;
        }
        Some(tx.commit())
    }

    // Hour :
    //   0 DecimalDigit
    //   1 DecimalDigit
    //   20
    //   21
    //   22
    //   23
    fn parse_hour(&mut self) -> bool {
        let mut tx = self.transaction();
        if tx.cursor.consume_byte(b'0') || tx.cursor.consume_byte(b'1') {
            if !tx.parse_decimal_digit() {
                return false;
            }
        } else if !tx.cursor.consume_any_literal(&[b"20", b"21", b"22", b"23"])
        {
            return false;
        }
        tx.commit();
        true
    }

    // MinuteSecond :
    //   0 DecimalDigit
    //   1 DecimalDigit
    //   2 DecimalDigit
    //   3 DecimalDigit
    //   4 DecimalDigit
    //   5 DecimalDigit
    fn parse_minute_second(&mut self) -> bool {
        let mut tx = self.transaction();
        if !tx.cursor.consume_if(|b| matches!(b, b'0'..=b'5')) {
            return false;
        }
        if !tx.parse_decimal_digit() {
            return false;
        }
        tx.commit();
        true
    }

    // DecimalSeparator : one of
    //   . ,
    fn parse_decimal_separator(&mut self) -> bool {
        self.cursor.consume_byte(b'.') || self.cursor.consume_byte(b',')
    }

    // DateTimeSeparator :
    //   <SP>
    //   T
    //   t
    fn parse_date_time_separator(&mut self) -> bool {
        self.cursor.consume_any_literal(&[b" ", b"T", b"t"])
    }

    // TimeDesignator : one of
    //   T t
    pub(super) fn parse_time_designator(&mut self) -> bool {
        self.cursor.consume_byte(b'T') || self.cursor.consume_byte(b't')
    }

    // DateFourDigitYear :
    //   DecimalDigit DecimalDigit DecimalDigit DecimalDigit
    //
    // DateExtendedYear :
    //   Sign DecimalDigit DecimalDigit DecimalDigit DecimalDigit DecimalDigit DecimalDigit
    //
    // DateYear :
    //   DateFourDigitYear
    //   DateExtendedYear
    //
    // A sign commits us to the extended year. That is, `+2021` is not a
    // valid year, even though `2021` is.
    fn parse_date_year(&mut self) -> Option<ParsedYear> {
        let mut tx = self.transaction();
        let sign = tx.parse_sign();
        let digits = if sign.is_some() { 6 } else { 4 };
        for _ in 0..digits {
            if !tx.parse_decimal_digit() {
                return None;
            }
        }
        let year = tx.commit();
        Some(ParsedYear { sign, year })
    }

    // DateMonth :
    //   0 NonZeroDigit
    //   10
    //   11
    //   12
    fn parse_date_month(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if tx.cursor.consume_byte(b'0') {
            if !tx.parse_non_zero_digit() {
                return None;
            }
        } else if !tx.cursor.consume_any_literal(&[b"10", b"11", b"12"]) {
            return None;
        }
        Some(tx.commit())
    }

    // DateDay :
    //   0 NonZeroDigit
    //   1 DecimalDigit
    //   2 DecimalDigit
    //   30
    //   31
    fn parse_date_day(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if tx.cursor.consume_byte(b'0') {
            if !tx.parse_non_zero_digit() {
                return None;
            }
        } else if tx.cursor.consume_byte(b'1') || tx.cursor.consume_byte(b'2')
        {
            if !tx.parse_decimal_digit() {
                return None;
            }
        } else if !tx.cursor.consume_any_literal(&[b"30", b"31"]) {
            return None;
        }
        Some(tx.commit())
    }

    // Date :
    //   DateYear - DateMonth - DateDay
    //   DateYear DateMonth DateDay
    fn parse_date(&mut self) -> Option<ParsedDate> {
        let mut tx = self.transaction();
        let year = tx.parse_date_year()?;
        let with_dashes = tx.cursor.consume_byte(b'-');
        let month = tx.parse_date_month()?;
        if with_dashes && !tx.cursor.consume_byte(b'-') {
            return None;
        }
        let day = tx.parse_date_day()?;
        tx.commit();
        Some(ParsedDate { year, month, day })
    }

    // DateSpecYearMonth :
    //   DateYear -[opt] DateMonth
    fn parse_date_spec_year_month(&mut self) -> Option<ParsedYearMonth> {
        let mut tx = self.transaction();
        let year = tx.parse_date_year()?;
        tx.cursor.consume_byte(b'-');
        let month = tx.parse_date_month()?;
        tx.commit();
        Some(ParsedYearMonth { year, month })
    }

    // DateSpecMonthDay :
    //   TwoDashes[opt] DateMonth -[opt] DateDay
    //
    // TwoDashes :
    //   --
    fn parse_date_spec_month_day(&mut self) -> Option<ParsedMonthDay> {
        let mut tx = self.transaction();
        tx.cursor.consume_literal(b"--");
        let month = tx.parse_date_month()?;
        tx.cursor.consume_byte(b'-');
        let day = tx.parse_date_day()?;
        tx.commit();
        Some(ParsedMonthDay { month, day })
    }

    // ValidMonthDay :
    //   DateMonth -[opt] 0 NonZeroDigit
    //   DateMonth -[opt] 1 DecimalDigit
    //   DateMonth -[opt] 2 DecimalDigit
    //   DateMonth -[opt] 30 but not one of 0230 or 02-30
    //   DateMonthWithThirtyOneDays -[opt] 31
    //
    // DateMonthWithThirtyOneDays : one of
    //   01 03 05 07 08 10 12
    fn parse_valid_month_day(&mut self) -> bool {
        let mut tx = self.transaction();
        let Some(month) = tx.parse_date_month() else { return false };
        let month = tx.cursor.slice(month);
        tx.cursor.consume_byte(b'-');
        if tx.cursor.consume_byte(b'0') {
            if !tx.parse_non_zero_digit() {
                return false;
            }
        } else if tx.cursor.consume_byte(b'1') || tx.cursor.consume_byte(b'2')
        {
            if !tx.parse_decimal_digit() {
                return false;
            }
        } else if tx.cursor.consume_literal(b"30") {
            if month == b"02" {
                return false;
            }
        } else if tx.cursor.consume_literal(b"31") {
            if !THIRTY_ONE_DAY_MONTHS.iter().any(|&m| m == month) {
                return false;
            }
        } else {
            return false;
        }
        tx.commit();
        true
    }

    // TimeHour :
    //   Hour
    fn parse_time_hour(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.parse_hour() {
            return None;
        }
        Some(tx.commit())
    }

    // TimeMinute :
    //   MinuteSecond
    fn parse_time_minute(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.parse_minute_second() {
            return None;
        }
        Some(tx.commit())
    }

    // TimeSecond :
    //   MinuteSecond
    //   60
    fn parse_time_second(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !(tx.parse_minute_second() || tx.cursor.consume_literal(b"60")) {
            return None;
        }
        Some(tx.commit())
    }

    // FractionalPart :
    //   DecimalDigit DecimalDigit[opt] DecimalDigit[opt] DecimalDigit[opt]
    //   DecimalDigit[opt] DecimalDigit[opt] DecimalDigit[opt]
    //   DecimalDigit[opt] DecimalDigit[opt]
    fn parse_fractional_part(&mut self) -> bool {
        if !self.parse_decimal_digit() {
            return false;
        }
        for _ in 0..8 {
            if !self.parse_decimal_digit() {
                break;
            }
        }
        true
    }

    // TimeFractionalPart :
    //   FractionalPart
    fn parse_time_fractional_part(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.parse_fractional_part() {
            return None;
        }
        Some(tx.commit())
    }

    // Fraction :
    //   DecimalSeparator TimeFractionalPart
    //
    // Only the digits are returned, not the separator.
    fn parse_fraction(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.parse_decimal_separator() {
            return None;
        }
        let fraction = tx.parse_time_fractional_part()?;
        tx.commit();
        Some(fraction)
    }

    // TimeFraction :
    //   Fraction
    pub(super) fn parse_time_fraction(&mut self) -> Option<Span> {
        self.parse_fraction()
    }

    // TimeZoneOffsetRequired :
    //   TimeZoneUTCOffset TimeZoneBracketedAnnotation[opt]
    //
    // TODO: Recognize UTC offsets (`Z`, `+05`, `-05:30`) and bracketed time
    // zone annotations. Until then, no time zone production ever matches.
    fn parse_time_zone_offset_required(&mut self) -> Option<ParsedTimeZone> {
        None
    }

    // TimeZoneNameRequired :
    //   TimeZoneUTCOffset[opt] TimeZoneBracketedAnnotation
    fn parse_time_zone_name_required(&mut self) -> Option<ParsedTimeZone> {
        None
    }

    // TimeZone :
    //   TimeZoneOffsetRequired
    //   TimeZoneNameRequired
    fn parse_time_zone(&mut self) -> Option<ParsedTimeZone> {
        self.parse_time_zone_offset_required()
            .or_else(|| self.parse_time_zone_name_required())
    }

    // CalChar :
    //   Alpha
    //   DecimalDigit
    //
    // CalendarNameComponent :
    //   CalChar CalChar CalChar CalChar[opt] CalChar[opt] CalChar[opt]
    //   CalChar[opt] CalChar[opt]
    fn parse_calendar_name_component(&mut self) -> bool {
        let mut tx = self.transaction();
        let mut len = 0;
        while len < 8 && tx.cursor.consume_if(|b| b.is_ascii_alphanumeric()) {
            len += 1;
        }
        if len < 3 {
            return false;
        }
        tx.commit();
        true
    }

    // CalendarNameTail :
    //   CalendarNameComponent
    //   CalendarNameComponent - CalendarNameTail
    //
    // CalendarName :
    //   CalendarNameTail
    fn parse_calendar_name(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        loop {
            if !tx.parse_calendar_name_component() {
                return None;
            }
            if !tx.cursor.consume_byte(b'-') {
                break;
            }
        }
        Some(tx.commit())
    }

    // Calendar :
    //   [u-ca= CalendarName ]
    fn parse_calendar(&mut self) -> Option<Span> {
        let mut tx = self.transaction();
        if !tx.cursor.consume_literal(b"[u-ca=") {
            return None;
        }
        let name = tx.parse_calendar_name()?;
        if !tx.cursor.consume_byte(b']') {
            return None;
        }
        tx.commit();
        Some(name)
    }

    // TimeSpec :
    //   TimeHour
    //   TimeHour : TimeMinute
    //   TimeHour TimeMinute
    //   TimeHour : TimeMinute : TimeSecond TimeFraction[opt]
    //   TimeHour TimeMinute TimeSecond TimeFraction[opt]
    //
    // Whether `:` is used is decided by what follows the hour, and from
    // then on it is all or nothing. So `12:3045` matches only `12:30`.
    fn parse_time_spec(&mut self) -> Option<ParsedTime> {
        let mut tx = self.transaction();
        let hour = tx.parse_time_hour()?;
        let mut time =
            ParsedTime { hour, minute: None, second: None, fraction: None };
        if tx.cursor.consume_byte(b':') {
            time.minute = Some(tx.parse_time_minute()?);
            if tx.cursor.consume_byte(b':') {
                time.second = Some(tx.parse_time_second()?);
                time.fraction = tx.parse_time_fraction();
            }
        } else if let Some(minute) = tx.parse_time_minute() {
            time.minute = Some(minute);
            if let Some(second) = tx.parse_time_second() {
                time.second = Some(second);
                time.fraction = tx.parse_time_fraction();
            }
        }
        tx.commit();
        Some(time)
    }

    // TimeSpecSeparator :
    //   DateTimeSeparator TimeSpec
    fn parse_time_spec_separator(&mut self) -> Option<ParsedTime> {
        let mut tx = self.transaction();
        if !tx.parse_date_time_separator() {
            return None;
        }
        let time = tx.parse_time_spec()?;
        tx.commit();
        Some(time)
    }

    // DateTime :
    //   Date TimeSpecSeparator[opt] TimeZone[opt]
    fn parse_date_time(&mut self) -> Option<ParsedDateTime> {
        let date = self.parse_date()?;
        let time = self.parse_time_spec_separator();
        let time_zone = self.parse_time_zone();
        Some(ParsedDateTime { date, time, time_zone })
    }

    // DateTimeTimeRequired :
    //   Date TimeSpecSeparator TimeZone[opt]
    fn parse_date_time_time_required(&mut self) -> Option<ParsedDateTime> {
        let mut tx = self.transaction();
        let date = tx.parse_date()?;
        let time = tx.parse_time_spec_separator()?;
        let time_zone = tx.parse_time_zone();
        tx.commit();
        Some(ParsedDateTime { date, time: Some(time), time_zone })
    }

    // CalendarDateTime :
    //   DateTime Calendar[opt]
    fn parse_calendar_date_time(&mut self, fields: &mut Fields) -> Option<()> {
        let datetime = self.parse_date_time()?;
        let calendar = self.parse_calendar();
        datetime.record(fields);
        fields.set(Field::CalendarName, calendar);
        Some(())
    }

    // CalendarDateTimeTimeRequired :
    //   DateTimeTimeRequired Calendar[opt]
    fn parse_calendar_date_time_time_required(
        &mut self,
    ) -> Option<(ParsedDateTime, Option<Span>)> {
        let datetime = self.parse_date_time_time_required()?;
        let calendar = self.parse_calendar();
        Some((datetime, calendar))
    }

    // CalendarTime :
    //   TimeDesignator TimeSpec TimeZone[opt] Calendar[opt]
    //   TimeSpec TimeZone[opt] Calendar
    //   TimeSpecWithOptionalTimeZoneNotAmbiguous
    fn parse_calendar_time(&mut self) -> Option<ParsedCalendarTime> {
        self.parse_calendar_time_designated()
            .or_else(|| self.parse_calendar_time_with_calendar())
            .or_else(|| self.parse_time_spec_not_ambiguous())
    }

    // TimeDesignator TimeSpec TimeZone[opt] Calendar[opt]
    fn parse_calendar_time_designated(
        &mut self,
    ) -> Option<ParsedCalendarTime> {
        let mut tx = self.transaction();
        if !tx.parse_time_designator() {
            return None;
        }
        let time = tx.parse_time_spec()?;
        let time_zone = tx.parse_time_zone();
        let calendar = tx.parse_calendar();
        tx.commit();
        Some(ParsedCalendarTime { time, time_zone, calendar })
    }

    // TimeSpec TimeZone[opt] Calendar
    fn parse_calendar_time_with_calendar(
        &mut self,
    ) -> Option<ParsedCalendarTime> {
        let mut tx = self.transaction();
        let time = tx.parse_time_spec()?;
        let time_zone = tx.parse_time_zone();
        let calendar = Some(tx.parse_calendar()?);
        tx.commit();
        Some(ParsedCalendarTime { time, time_zone, calendar })
    }

    // TimeSpecWithOptionalTimeZoneNotAmbiguous :
    //   TimeSpec TimeZone[opt] but not one of ValidMonthDay or
    //   DateSpecYearMonth
    fn parse_time_spec_not_ambiguous(&mut self) -> Option<ParsedCalendarTime> {
        let mut tx = self.transaction();
        let time = tx.parse_time_spec()?;
        let time_zone = tx.parse_time_zone();
        let matched = tx.cursor.slice(tx.matched());
        if tx.is_month_day_or_year_month(matched) {
            return None;
        }
        tx.commit();
        Some(ParsedCalendarTime { time, time_zone, calendar: None })
    }

    /// Returns true when the entirety of `text` is a `ValidMonthDay` or a
    /// `DateSpecYearMonth`.
    fn is_month_day_or_year_month(&self, text: &[u8]) -> bool {
        let mut month_day = Grammar::new(&self.parser, text);
        if month_day.parse_valid_month_day() && month_day.is_eof() {
            return true;
        }
        let mut year_month = Grammar::new(&self.parser, text);
        year_month.parse_date_spec_year_month().is_some()
            && year_month.is_eof()
    }
}
