// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! C0 control dispatch: backspace, tab, linefeed family, carriage return.

use crate::parser::AnsiPerformer;

pub(crate) fn handle_backspace(performer: &mut AnsiPerformer<'_>) {
    performer.screen.backspace();
}

pub(crate) fn handle_tab(performer: &mut AnsiPerformer<'_>) {
    performer.screen.horizontal_tab();
}

pub(crate) fn handle_line_feed(performer: &mut AnsiPerformer<'_>) {
    performer.screen.linefeed();
}

pub(crate) fn handle_carriage_return(performer: &mut AnsiPerformer<'_>) {
    performer.screen.carriage_return();
}
