// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Cursor-motion CSI dispatches: CUU, CUD, CUF, CUB, CHA, CUP/HVP.

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

pub(crate) fn cursor_up(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as i32;
    performer.screen.move_relative(0, -n);
}

pub(crate) fn cursor_down(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as i32;
    performer.screen.move_relative(0, n);
}

pub(crate) fn cursor_forward(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as i32;
    performer.screen.move_relative(n, 0);
}

pub(crate) fn cursor_backward(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as i32;
    performer.screen.move_relative(-n, 0);
}

pub(crate) fn cursor_column_absolute(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let col = params.nth_at_least_one(0) as i32 - 1;
    performer.screen.move_column_absolute(col);
}

pub(crate) fn cursor_position(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let row = params.nth_at_least_one(0) as i32 - 1;
    let col = params.nth_at_least_one(1) as i32 - 1;
    performer.screen.move_absolute(col, row);
}
