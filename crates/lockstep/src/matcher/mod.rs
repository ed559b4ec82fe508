//! The lockstep matcher.
//!
//! Walks an expected and an actual sequence together, one element from each
//! side per step, and asks the predicate whether the pair matches.
//!
//! # Consumption
//!
//! Each sequence is turned into a single iterator up front and never
//! restarted. The walk pulls at most one element per side per step and stops
//! at the first rejected pair. When one side runs out first, the remaining
//! elements of the other side are counted on the same iterator, without
//! calling the predicate, to report exact total lengths.

use std::fmt::Display;

use lockstep_report::preconditions::not_null;
use lockstep_report::MessageContext;

use crate::error::{
    actual_iterable_null, contents_mismatch, expected_iterable_null, lengths_differ,
    PREDICATE_MUST_NOT_BE_NULL,
};
use crate::MatchError;

/// Assert that `expected` and `actual` match element by element.
///
/// Both sequences absent is a match. Exactly one absent is a failure naming
/// the absent side. An absent predicate is a precondition violation, checked
/// before anything else.
///
/// Elements of both sequences must implement [`Display`]; failures render
/// them as `<value>`. Tuples, `Vec`s, `Option`s and other types without a
/// `Display` impl have to be mapped or wrapped first.
///
/// A closure written inline inside `Some(..)` needs its parameter types
/// spelled out. Pass it through [`predicate_for`] to have them inferred from
/// the sequences instead.
pub fn assert_iterable_matches<P, E, A>(
    predicate: Option<P>,
    expected: Option<E>,
    actual: Option<A>,
) -> Result<(), MatchError>
where
    E: IntoIterator,
    A: IntoIterator,
    E::Item: Display,
    A::Item: Display,
    P: FnMut(&E::Item, &A::Item) -> bool,
{
    match_iterables(predicate, expected, actual, MessageContext::Absent)
}

/// Like [`assert_iterable_matches`], prefixing any failure with `message`.
pub fn assert_iterable_matches_with_message<P, E, A>(
    predicate: Option<P>,
    expected: Option<E>,
    actual: Option<A>,
    message: &str,
) -> Result<(), MatchError>
where
    E: IntoIterator,
    A: IntoIterator,
    E::Item: Display,
    A::Item: Display,
    P: FnMut(&E::Item, &A::Item) -> bool,
{
    match_iterables(predicate, expected, actual, MessageContext::literal(message))
}

/// Like [`assert_iterable_matches`], prefixing any failure with the output of
/// `supplier`. The supplier is only called if the match fails.
pub fn assert_iterable_matches_with_supplier<P, E, A, S>(
    predicate: Option<P>,
    expected: Option<E>,
    actual: Option<A>,
    supplier: S,
) -> Result<(), MatchError>
where
    E: IntoIterator,
    A: IntoIterator,
    E::Item: Display,
    A::Item: Display,
    P: FnMut(&E::Item, &A::Item) -> bool,
    S: FnOnce() -> String,
{
    match_iterables(
        predicate,
        expected,
        actual,
        MessageContext::supplier(supplier),
    )
}

/// Return `predicate` unchanged, with its parameter types tied to the element
/// types of `expected` and `actual`.
///
/// ```text
/// let (expected, actual) = (vec![1, 2], vec![2, 3]);
/// let predicate = predicate_for(&expected, &actual, |e, a| a > e);
/// assert_iterable_matches(Some(predicate), Some(expected), Some(actual))
/// ```
pub fn predicate_for<E, A, P>(_expected: &E, _actual: &A, predicate: P) -> P
where
    E: IntoIterator,
    A: IntoIterator,
    P: FnMut(&E::Item, &A::Item) -> bool,
{
    predicate
}

/// Equality predicate between an expected and an actual element.
pub fn equals<E, A>(expected: &E, actual: &A) -> bool
where
    E: PartialEq<A> + ?Sized,
    A: ?Sized,
{
    expected == actual
}

#[tracing::instrument(level = "trace", skip_all)]
fn match_iterables<P, E, A>(
    predicate: Option<P>,
    expected: Option<E>,
    actual: Option<A>,
    message: MessageContext<'_>,
) -> Result<(), MatchError>
where
    E: IntoIterator,
    A: IntoIterator,
    E::Item: Display,
    A::Item: Display,
    P: FnMut(&E::Item, &A::Item) -> bool,
{
    let mut predicate = not_null(predicate, PREDICATE_MUST_NOT_BE_NULL)?;

    let (mut expected, mut actual) = match (expected, actual) {
        (None, None) => {
            tracing::trace!("both iterables absent");
            return Ok(());
        }
        (None, Some(_)) => return Err(expected_iterable_null(message)),
        (Some(_), None) => return Err(actual_iterable_null(message)),
        (Some(expected), Some(actual)) => (expected.into_iter(), actual.into_iter()),
    };

    let mut processed: usize = 0;

    loop {
        let Some(expected_element) = expected.next() else {
            let remaining_actual = actual.count();
            if remaining_actual == 0 {
                tracing::trace!(processed, "iterables match");
                return Ok(());
            }
            tracing::debug!(processed, remaining_actual, "expected iterable is shorter");
            return Err(lengths_differ(
                processed,
                processed + remaining_actual,
                message,
            ));
        };

        let Some(actual_element) = actual.next() else {
            // The element just pulled from `expected` counts towards its length.
            let remaining_expected = 1 + expected.count();
            tracing::debug!(processed, remaining_expected, "actual iterable is shorter");
            return Err(lengths_differ(
                processed + remaining_expected,
                processed,
                message,
            ));
        };

        if !predicate(&expected_element, &actual_element) {
            tracing::debug!(index = processed, "iterable contents do not match");
            return Err(contents_mismatch(
                processed,
                &expected_element,
                &actual_element,
                message,
            ));
        }

        processed += 1;
    }
}
