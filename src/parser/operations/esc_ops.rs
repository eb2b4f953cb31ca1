// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Single-character ESC dispatches: IND, NEL, RI, RIS.

use crate::parser::AnsiPerformer;

/// `ESC D` (IND): linefeed.
pub(crate) fn index(performer: &mut AnsiPerformer<'_>) {
    performer.screen.linefeed();
}

/// `ESC E` (NEL): carriage return, then linefeed.
pub(crate) fn next_line(performer: &mut AnsiPerformer<'_>) {
    performer.screen.carriage_return();
    performer.screen.linefeed();
}

/// `ESC M` (RI): reverse index.
pub(crate) fn reverse_index(performer: &mut AnsiPerformer<'_>) {
    performer.screen.reverse_index();
}

/// `ESC c` (RIS): full reset — clears the display, homes the cursor,
/// restores default margins and attributes.
pub(crate) fn full_reset(performer: &mut AnsiPerformer<'_>) {
    performer.screen.full_reset();
}
