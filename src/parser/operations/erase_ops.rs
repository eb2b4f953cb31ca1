// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Erase-in-display (ED) and erase-in-line (EL) CSI dispatches.

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

pub(crate) fn erase_in_display(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    match params.nth_or(0, 0) {
        0 => performer.screen.erase_display_from_cursor(),
        1 => performer.screen.erase_display_to_cursor(),
        2 => performer.screen.erase_display(),
        other => tracing::warn!(param = other, "ignoring unrecognized ED parameter"),
    }
}

pub(crate) fn erase_in_line(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    match params.nth_or(0, 0) {
        0 => performer.screen.erase_line_from_cursor(),
        1 => performer.screen.erase_line_to_cursor(),
        2 => performer.screen.erase_line(),
        other => tracing::warn!(param = other, "ignoring unrecognized EL parameter"),
    }
}
