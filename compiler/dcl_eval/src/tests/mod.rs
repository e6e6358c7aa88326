//! Operator and conversion tests.
