//! Tests for the delimited-text scanner and writer

mod roundtrip_tests;
