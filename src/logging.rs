// Without the `logging` feature every call below compiles to nothing, and
// some of these macros are never used at all.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(::log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(::log::trace!($($tt)*)) }
}
