/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Asserts an internal invariant in test builds, or when the calling crate is built with the `extra_checks` feature
///
/// The `cfg` is evaluated in the crate that expands the macro, so each crate that uses it declares its own
/// `extra_checks` feature.
///
#[macro_export]
macro_rules! extra_check {
    ($cond:expr) => {{
        #[cfg(any(test, feature = "extra_checks"))]
        {
            assert!($cond);
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(any(test, feature = "extra_checks"))]
        {
            assert!($cond, $($arg)+);
        }
    }};
}
