// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) CSI dispatch.

use crate::parser::params_ext::ParamsExt;
use crate::parser::AnsiPerformer;

pub(crate) fn set_graphic_rendition(performer: &mut AnsiPerformer<'_>, params: &vte::Params) {
    let values = params.all_truncated();
    if values.is_empty() {
        performer.screen.select_graphic_rendition(&[0]);
    } else {
        performer.screen.select_graphic_rendition(&values);
    }
}
