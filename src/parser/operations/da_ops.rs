// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Device Attributes (DA) query reply.

use crate::parser::AnsiPerformer;

/// The bit-exact DA reply: `ESC [ ? 6 c`.
const DA_REPLY: [u8; 5] = [0x1B, 0x5B, 0x3F, 0x36, 0x63];

pub(crate) fn report_device_attributes(performer: &mut AnsiPerformer<'_>) {
    (performer.host_writer)(&DA_REPLY);
}
