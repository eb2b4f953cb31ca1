// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Printable-character output and delete-character (DCH).

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

/// Prints one character. `vte` hands printable bytes back as a decoded
/// `char`; this crate has no Unicode model (the data it emulates is 8-bit),
/// so codepoints outside `0x20..=0xFF` are replaced with `?` rather than
/// silently truncated, and the substitution is logged.
pub(crate) fn print_char(performer: &mut AnsiPerformer<'_>, c: char) {
    let byte = match c as u32 {
        cp @ 0x20..=0xFF => cp as u8,
        _ => {
            tracing::warn!(codepoint = c as u32, "replacing non-8-bit codepoint with '?'");
            b'?'
        }
    };
    performer.screen.display_char(byte);
}

pub(crate) fn delete_chars(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as usize;
    performer.screen.delete_characters(n);
}
