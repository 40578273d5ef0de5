//! Tests for the country registry
