//! Shared helpers for integration tests.

/// Skips the test when any of the named environment variables is unset.
#[macro_export]
macro_rules! skip_if_unset {
    ($($var:expr),+ $(,)?) => {
        $(
            if std::env::var($var).is_err() {
                println!("Skipping test: {} not set", $var);
                return;
            }
        )+
    };
}

/// Unwraps a `Result`, failing the test with context on `Err`.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $msg:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) => panic!("{}: {e}", $msg),
        }
    };
}
