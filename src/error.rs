// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Error types for the fallible surface of this crate.
//!
//! `feed` never fails: untrusted byte streams from a host program must never
//! kill the session, so every malformed or out-of-range input is absorbed by
//! clamping or silent drop (see [`crate::parser`] and [`crate::screen`]).
//! `resize` is the one operation that can fail, if the new buffers cannot be
//! allocated.

/// Errors that can occur while resizing a [`crate::Screen`].
#[derive(thiserror::Error, Debug)]
pub enum ResizeError {
    /// Allocating the new `chars`/`attrs`/`dirty_line` buffers failed. The
    /// screen retains its previous buffers and dimensions untouched.
    #[error("could not allocate a {width}x{height} screen buffer")]
    Allocation { width: usize, height: usize },
}
