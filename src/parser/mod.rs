/*!
A recognizer for the Temporal ISO 8601 grammar.

The public entry point of this module is [`Parser`]. It selects the grammar
production to start from, runs it over a fresh cursor and requires that the
production consume the entire input. Everything below that (the cursor, the
transactions and the productions themselves) is crate internal.
*/

use crate::{error::Error, record::ParseResult, Production};

use self::grammar::Grammar;

mod cursor;
mod duration;
mod grammar;

/// A configurable recognizer for the Temporal ISO 8601 grammar.
///
/// The configuration is fixed at construction time and every parse is
/// independent. In particular, a `Parser` holds no state between parses, so
/// it can be shared freely and may even be stored in a `static`:
///
/// ```
/// use temporal_iso8601::{Parser, Production};
///
/// static PARSER: Parser = Parser::new().unicode_minus(false);
///
/// assert!(PARSER.parse(Production::DateString, "-002021-07-06").is_some());
/// assert!(PARSER.parse(Production::DateString, "\u{2212}002021-07-06").is_none());
/// ```
///
/// For the default configuration, the free function [`parse`](crate::parse)
/// is a convenient shortcut.
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    unicode_minus: bool,
}

impl Parser {
    /// Create a new parser with the default configuration.
    pub const fn new() -> Parser {
        Parser { unicode_minus: true }
    }

    /// Set whether U+2212 MINUS SIGN is accepted as a sign.
    ///
    /// A sign appears before extended (six digit) years and before
    /// durations. An ASCII `+` or `-` is always accepted. By default, U+2212
    /// is accepted too.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::{Parser, Production};
    ///
    /// let input = "\u{2212}P1D";
    /// assert!(Parser::new().parse(Production::DurationString, input).is_some());
    ///
    /// let parser = Parser::new().unicode_minus(false);
    /// assert!(parser.parse(Production::DurationString, input).is_none());
    /// ```
    pub const fn unicode_minus(self, yes: bool) -> Parser {
        Parser { unicode_minus: yes }
    }

    /// Recognize the entirety of `input` as the given production.
    ///
    /// On success, the substrings matched by each field of the grammar are
    /// returned. If the production doesn't match, or if it matches only a
    /// prefix of `input`, then `None` is returned.
    ///
    /// This never allocates. Use [`Parser::try_parse`] to get an error
    /// describing which of the two failure modes occurred.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::{Parser, Production};
    ///
    /// let parser = Parser::new();
    /// let result = parser.parse(Production::YearMonthString, "2021-07").unwrap();
    /// assert_eq!(result.date_year(), Some("2021"));
    /// assert_eq!(result.date_month(), Some("07"));
    /// assert_eq!(result.date_day(), None);
    /// ```
    pub fn parse<'i>(
        &self,
        production: Production,
        input: &'i str,
    ) -> Option<ParseResult<'i>> {
        match self.recognize(production, input) {
            Recognized::Full(result) => Some(result),
            Recognized::Prefix(_) | Recognized::NoMatch => None,
        }
    }

    /// Recognize the entirety of `input` as the given production, and return
    /// an error when that isn't possible.
    ///
    /// This is like [`Parser::parse`], except that failure is reported with
    /// an [`Error`] that says whether the production matched nothing at all
    /// or matched only a prefix of `input`.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::{Parser, Production};
    ///
    /// let err = Parser::new()
    ///     .try_parse(Production::TimeString, "12:30Z")
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parsed TemporalTimeString from \"12:30\", but unparsed input \"Z\" \
    ///      remains (expected no unparsed input)",
    /// );
    /// ```
    pub fn try_parse<'i>(
        &self,
        production: Production,
        input: &'i str,
    ) -> Result<ParseResult<'i>, Error> {
        match self.recognize(production, input) {
            Recognized::Full(result) => Ok(result),
            Recognized::Prefix(end) => {
                let (consumed, unparsed) = input.split_at(end);
                Err(Error::trailing_input(production, consumed, unparsed))
            }
            Recognized::NoMatch => Err(Error::no_match(production, input)),
        }
    }

    fn recognize<'i>(
        &self,
        production: Production,
        input: &'i str,
    ) -> Recognized<'i> {
        trace!("attempting to parse {input:?} as {production}");
        let mut grammar = Grammar::new(self, input.as_bytes());
        let Some(fields) = grammar.parse_production(production) else {
            trace!("{production} did not match {input:?}");
            return Recognized::NoMatch;
        };
        if !grammar.is_eof() {
            let end = grammar.offset();
            debug!(
                "{production} matched {consumed:?}, but input {unparsed:?} \
                 remains, so the parse fails",
                consumed = &input[..end],
                unparsed = &input[end..],
            );
            return Recognized::Prefix(end);
        }
        Recognized::Full(ParseResult::new(input, fields))
    }
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

/// The outcome of running a production over an entire input.
enum Recognized<'i> {
    /// The production matched all of the input.
    Full(ParseResult<'i>),
    /// The production matched only the input up to the given byte offset.
    ///
    /// This offset always falls on a `char` boundary, since the grammar
    /// only ever consumes whole ASCII bytes or the complete UTF-8 encoding
    /// of U+2212.
    Prefix(usize),
    /// The production did not match at all.
    NoMatch,
}
