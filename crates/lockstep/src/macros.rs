//! Panicking assertion macro for use in tests.

/// Assert that two sequences match element by element, panicking on failure.
///
/// The sequences and predicate are taken as present. Both sequences are
/// evaluated before the predicate, so closure parameter types are inferred
/// from the element types. Trailing arguments are formatted with `format!`,
/// but only if the assertion fails.
///
/// ```text
/// assert_iterable_matches!(|e, a| a > e, vec![1, 2], vec![2, 3]);
/// assert_iterable_matches!(lockstep::equals, names, ids, "user {}", user);
/// ```
#[macro_export]
macro_rules! assert_iterable_matches {
    ($predicate:expr, $expected:expr, $actual:expr $(,)?) => {
        match ($expected, $actual) {
            (expected, actual) => {
                let predicate = $crate::predicate_for(&expected, &actual, $predicate);
                if let ::std::result::Result::Err(error) = $crate::assert_iterable_matches(
                    ::std::option::Option::Some(predicate),
                    ::std::option::Option::Some(expected),
                    ::std::option::Option::Some(actual),
                ) {
                    ::std::panic!("{}", error);
                }
            }
        }
    };
    ($predicate:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        match ($expected, $actual) {
            (expected, actual) => {
                let predicate = $crate::predicate_for(&expected, &actual, $predicate);
                if let ::std::result::Result::Err(error) =
                    $crate::assert_iterable_matches_with_supplier(
                        ::std::option::Option::Some(predicate),
                        ::std::option::Option::Some(expected),
                        ::std::option::Option::Some(actual),
                        || ::std::format!($($arg)+),
                    )
                {
                    ::std::panic!("{}", error);
                }
            }
        }
    };
}
