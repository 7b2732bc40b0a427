use alloc::boxed::Box;

use crate::Production;

/// An error that occurs when a string is not recognized by a production.
///
/// This is only returned by [`Parser::try_parse`](crate::Parser::try_parse).
/// The plain [`parse`](crate::parse) routines report failure as `None`.
///
/// There are exactly two ways for recognition to fail, and each has a
/// predicate:
///
/// * The production did not match a prefix of the input at all. See
/// [`Error::is_no_match`].
/// * The production matched, but not all of the input was consumed. See
/// [`Error::is_trailing_input`].
///
/// # Design
///
/// The error deliberately reports no position or "expected token" details.
/// The grammar is recognized with unbounded backtracking, so the point at
/// which the last alternative failed is rarely the point a human would
/// consider to be the mistake.
#[derive(Clone)]
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    NoMatch {
        production: Production,
        input: Box<str>,
    },
    TrailingInput {
        production: Production,
        consumed: Box<str>,
        unparsed: Box<str>,
    },
}

impl Error {
    #[inline(never)]
    #[cold]
    pub(crate) fn no_match(production: Production, input: &str) -> Error {
        Error::from(ErrorKind::NoMatch { production, input: input.into() })
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn trailing_input(
        production: Production,
        consumed: &str,
        unparsed: &str,
    ) -> Error {
        Error::from(ErrorKind::TrailingInput {
            production,
            consumed: consumed.into(),
            unparsed: unparsed.into(),
        })
    }

    /// Returns the production that failed to recognize the input.
    pub fn production(&self) -> Production {
        match *self.kind {
            ErrorKind::NoMatch { production, .. }
            | ErrorKind::TrailingInput { production, .. } => production,
        }
    }

    /// Returns true when no prefix of the input matched the production.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::{Parser, Production};
    ///
    /// let err = Parser::new()
    ///     .try_parse(Production::DateString, "2021-13-06")
    ///     .unwrap_err();
    /// assert!(err.is_no_match());
    /// ```
    pub fn is_no_match(&self) -> bool {
        matches!(*self.kind, ErrorKind::NoMatch { .. })
    }

    /// Returns true when a prefix of the input matched the production, but
    /// some input remained after it.
    ///
    /// # Example
    ///
    /// ```
    /// use temporal_iso8601::{Parser, Production};
    ///
    /// let err = Parser::new()
    ///     .try_parse(Production::DateString, "2021-07-06X")
    ///     .unwrap_err();
    /// assert!(err.is_trailing_input());
    /// ```
    pub fn is_trailing_input(&self) -> bool {
        matches!(*self.kind, ErrorKind::TrailingInput { .. })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.kind, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            NoMatch { production, ref input } => {
                write!(f, "failed to parse {input:?} as {production}")
            }
            TrailingInput { production, ref consumed, ref unparsed } => {
                write!(
                    f,
                    "parsed {production} from {consumed:?}, but unparsed \
                     input {unparsed:?} remains (expected no unparsed input)",
                )
            }
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind: Box::new(kind) }
    }
}
