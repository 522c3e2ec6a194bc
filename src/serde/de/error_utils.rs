use core::fmt::Display;

use serde_core::de::Error;

#[cfg(all(debug_assertions, feature = "debug"))]
std::thread_local! {
    pub(super) static CALL_SITE_STACK: core::cell::RefCell<crate::serde::CallSiteStack> =
        const { core::cell::RefCell::new(crate::serde::CallSiteStack::new()) };
}

/// A helper function for generating a custom deserialization error message.
///
/// This function should be preferred over [`Error::custom`] as it will
/// include other useful information, such as the call-site stack.
#[cfg(all(debug_assertions, feature = "debug"))]
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    CALL_SITE_STACK.with_borrow(|stack| {
        if stack.is_empty() {
            E::custom(&msg)
        } else {
            E::custom(format_args!("{msg} (at {stack:?})"))
        }
    })
}

/// A helper function for generating a custom deserialization error message.
#[cfg(not(all(debug_assertions, feature = "debug")))]
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    E::custom(msg)
}
