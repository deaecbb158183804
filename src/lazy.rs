//! Deferred evaluation helpers: short-circuit operators written as ordinary
//! functions over zero-argument thunks.
//!
//! Each function takes its right-hand side as `impl FnOnce() -> _`, so the
//! caller hands over an unevaluated expression wrapped in a closure and the
//! callee decides whether it ever runs. The short-circuited branch must not
//! run; `FnOnce` makes "at most once" part of the signature.

/// Logical AND over a deferred right-hand side.
///
/// When `lhs` is false the answer is already known and `rhs` is never
/// invoked.
pub fn and_lazy(lhs: bool, rhs: impl FnOnce() -> bool) -> bool {
    if lhs {
        rhs()
    } else {
        false
    }
}

/// Logical OR over a deferred right-hand side.
///
/// When `lhs` is true the answer is already known and `rhs` is never
/// invoked.
pub fn or_lazy(lhs: bool, rhs: impl FnOnce() -> bool) -> bool {
    if lhs {
        true
    } else {
        rhs()
    }
}

/// Null-coalescing fallback: the stored value when present, otherwise the
/// thunk's result.
///
/// This is `Option::unwrap_or_else` spelled out as a match, kept here so the
/// snippets can show the mechanism rather than the shortcut.
pub fn value_or_lazy<T>(optional: Option<T>, default: impl FnOnce() -> T) -> T {
    match optional {
        Some(value) => value,
        None => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Wraps a result in a thunk that counts how often it runs.
    fn counted<'a, T: 'a>(calls: &'a Cell<u32>, result: T) -> impl FnOnce() -> T + 'a {
        move || {
            calls.set(calls.get() + 1);
            result
        }
    }

    #[test]
    fn and_short_circuits_on_false() {
        let calls = Cell::new(0);
        assert!(!and_lazy(false, counted(&calls, true)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_evaluates_thunk_once_on_true() {
        let calls = Cell::new(0);
        assert!(and_lazy(true, counted(&calls, true)));
        assert!(!and_lazy(true, counted(&calls, false)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn or_short_circuits_on_true() {
        let calls = Cell::new(0);
        assert!(or_lazy(true, counted(&calls, false)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_evaluates_thunk_once_on_false() {
        let calls = Cell::new(0);
        assert!(or_lazy(false, counted(&calls, true)));
        assert!(!or_lazy(false, counted(&calls, false)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn present_value_skips_the_default() {
        let calls = Cell::new(0);
        assert_eq!(value_or_lazy(Some(42), counted(&calls, 0)), 42);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn absent_value_computes_the_default_once() {
        let calls = Cell::new(0);
        assert_eq!(value_or_lazy(None, counted(&calls, 1)), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn works_with_owning_thunks() {
        let fallback = String::from("fallback");
        let value = value_or_lazy(None, move || fallback);
        assert_eq!(value, "fallback");
    }
}
