//! Integration tests for the result aggregate.

mod accessors;
mod concurrency;
mod determinism_json;
mod patterns;
mod status;
