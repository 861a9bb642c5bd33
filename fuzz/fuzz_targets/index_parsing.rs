// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index parsing.
//!
//! The index is fetched over the network and may be truncated, an HTML
//! error page, or anything else. Parsing must reject it cleanly.

#![no_main]

use glean::{FetchTicket, IndexLoader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut loader = IndexLoader::default();
    let ticket: FetchTicket = match loader.begin() {
        Some(ticket) => ticket,
        None => return,
    };

    // INVARIANT: parse failures leave the loader retryable
    if loader.complete(&ticket, Ok(data.to_vec())).is_err() {
        assert!(loader.index().is_none());
        assert!(loader.begin().is_some());
    }
});
