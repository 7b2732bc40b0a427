/*!
Crate-internal logging macros.

When the `logging` feature is enabled, these forward to the macros of the
same name in the `log` crate. Otherwise they expand to nothing, and neither
their arguments nor the `log` dependency are compiled.

Every level of the `log` crate has a macro here. The recognizer itself only
logs at two of them: `trace` for every parse attempt and every production
that fails to match at all, and `debug` for the more surprising case of a
production that matched only a prefix of its input.
*/

// Some of these macros are never used, and without the `logging` feature
// none of their arguments are compiled. Which is fine. Squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! info {
    ($($tt:tt)*) => { log!(log::info!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
