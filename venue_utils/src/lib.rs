/// Returns the version of this build, as reported by `venue --version` and the
/// diagnostic endpoint.
pub fn venue_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Outcome {
        Sent(u32),
        Rejected,
    }

    #[test]
    fn assert_matches_pattern() {
        assert_matches!(Outcome::Rejected, Outcome::Rejected);
        assert_matches!(Outcome::Sent(3), Outcome::Sent(n) if *n == 3);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_mismatch() {
        assert_matches!(Outcome::Sent(1), Outcome::Rejected);
    }
}
