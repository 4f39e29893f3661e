//! Integration tests for xkcd-bot
//!
//! These tests use wiremock to stand in for xkcd.com and exercise the fetcher,
//! name index, navigator and command router end-to-end.

mod common;
mod fetcher_tests;
mod index_tests;
mod navigator_tests;
