/*!
A recognizer for the ISO 8601 strings accepted by ECMAScript's Temporal.

Given an entry [`Production`] of the [Temporal ISO 8601 grammar] and an
input string, this crate decides whether the entire string matches the
production. On success, it reports the exact substrings that the grammar's
interesting terminals matched: the year, month and day, the hour, minute,
second and fractional second, the calendar name and the units of a duration.

This crate only recognizes. It does no numeric conversion and no semantic
validation. For example, `2021-02-31` is recognized as a date with a day of
`31`, and it is up to the caller to decide that February doesn't have 31
days.

# Example

```
use temporal_iso8601::{parse, Production};

let result = parse(Production::DateString, "2021-07-06[u-ca=gregory]").unwrap();
assert_eq!(result.date_year(), Some("2021"));
assert_eq!(result.date_month(), Some("07"));
assert_eq!(result.date_day(), Some("06"));
assert_eq!(result.calendar_name(), Some("gregory"));

// An invalid month never matches.
assert!(parse(Production::DateString, "2021-13-06").is_none());
// And a match must cover the whole input.
assert!(parse(Production::DateString, "2021-07-06X").is_none());
```

Durations are recognized too:

```
use temporal_iso8601::{parse, Production};

let result = parse(Production::DurationString, "-P1Y2M3W4DT5H6M7.5S").unwrap();
assert_eq!(result.sign(), Some("-"));
assert_eq!(result.duration_weeks(), Some("3"));
assert_eq!(result.duration_whole_seconds(), Some("7"));
assert_eq!(result.duration_seconds_fraction(), Some("5"));
```

# Matching rules

Each grammar production tries its alternatives in order, and the first one
that matches wins. Numeric ranges such as "an hour is `00` to `23`" are
enforced by the shape of the literals a production accepts. So `24` is
never an hour and `13` is never a month.

Since matching is purely lexical, an ambiguous string is resolved by the
grammar rather than by its meaning. For example, a
[`TimeString`](Production::TimeString) written without a leading `T` is
rejected when it could also be read as a month and day:

```
use temporal_iso8601::{parse, Production};

assert!(parse(Production::TimeString, "1201").is_none());
assert!(parse(Production::TimeString, "T1201").is_some());
assert!(parse(Production::TimeString, "12:01").is_some());
```

# Time zones

UTC offsets and bracketed time zone annotations are not recognized yet. A
production where a time zone is optional simply never matches one, and
productions that require a time zone are not offered.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`].
* **logging** - Emits trace and debug messages via the `log` crate while
recognizing input.
* **serde** - Implements `serde::Serialize` for [`ParseResult`], [`Field`]
and [`Production`].

[Temporal ISO 8601 grammar]: https://tc39.es/proposal-temporal/#sec-temporal-iso8601grammar
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    error::Error,
    parser::Parser,
    production::Production,
    record::{Field, ParseResult},
};

#[macro_use]
mod logging;

mod error;
mod parser;
mod production;
mod record;

/// Recognize the entirety of `input` as the given production, using the
/// default [`Parser`] configuration.
///
/// This returns `None` when the production does not match, and also when it
/// matches only a prefix of `input`. Use [`Parser::try_parse`] to find out
/// which.
///
/// # Example
///
/// ```
/// use temporal_iso8601::{parse, Production};
///
/// let result = parse(Production::DateString, "+002021-07-06").unwrap();
/// assert_eq!(result.sign(), Some("+"));
/// assert_eq!(result.date_year(), Some("+002021"));
///
/// assert!(parse(Production::DateString, "+2021-07-06").is_none());
/// ```
pub fn parse(production: Production, input: &str) -> Option<ParseResult<'_>> {
    Parser::new().parse(production, input)
}
