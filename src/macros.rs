//! Crate-internal macros.

/// Declare functions returning lazily built, process-wide hashers.
///
/// Each hasher is built on first use and shared afterwards. A hasher may
/// refer to itself inside its hashing closure (recursive text components),
/// but must not call its own accessor while it is being built.
macro_rules! static_hashers {
    ($($(#[$meta:meta])* $vis:vis fn $name:ident() -> $ty:ty = $init:expr;)+) => {
        $(
            $(#[$meta])*
            $vis fn $name() -> &'static $crate::hasher::Hasher<$ty> {
                static HASHER: ::std::sync::LazyLock<$crate::hasher::Hasher<$ty>> =
                    ::std::sync::LazyLock::new(|| $init);
                &HASHER
            }
        )+
    };
}
