// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Insert-line (IL) and delete-line (DL) CSI dispatches.

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

pub(crate) fn insert_lines(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as usize;
    performer.screen.insert_lines(n);
}

pub(crate) fn delete_lines(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let n = params.nth_at_least_one(0) as usize;
    performer.screen.delete_lines(n);
}
