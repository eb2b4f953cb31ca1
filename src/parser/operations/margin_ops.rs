// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! DECSTBM: set top/bottom scroll margins.

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

pub(crate) fn set_scroll_region(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let top = params.nth_at_least_one(0) as usize - 1;
    let bottom = if params.has_nth(1) {
        params.nth_at_least_one(1) as usize - 1
    } else {
        performer.screen.height() - 1
    };
    performer.screen.set_margins(top, bottom);
}
