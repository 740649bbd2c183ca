//! Unit tests for type_guards

mod asserts_test;
