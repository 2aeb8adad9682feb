//! Integration-test-only crate. All tests live under `tests/`.
