// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! The byte-driven command parser.
//!
//! State tracking (`Ground`/`Escape`/`CSI`, the parameter accumulator, and
//! the private-marker byte) is owned entirely by [`vte::Parser`] — the
//! ECMA-48/DEC-ANSI state machine this crate depends on rather than
//! hand-rolls. This module implements [`vte::Perform`] for [`AnsiPerformer`],
//! translating each decoded dispatch into a call on a borrowed
//! [`crate::screen::Screen`], and forwards exactly one sequence — the DA
//! reply — to a caller-supplied host-writer closure.

pub(crate) mod operations;
pub(crate) mod params_ext;

use crate::screen::Screen;

/// Bridges `vte`'s parser callbacks to a [`Screen`] and an optional
/// host-writer sink, for the lifetime of a single [`crate::Vt102Core::feed`]
/// call.
pub(crate) struct AnsiPerformer<'a> {
    screen: &'a mut Screen,
    host_writer: &'a mut dyn FnMut(&[u8]),
}

impl<'a> AnsiPerformer<'a> {
    pub(crate) fn new(screen: &'a mut Screen, host_writer: &'a mut dyn FnMut(&[u8])) -> Self {
        Self { screen, host_writer }
    }
}

impl vte::Perform for AnsiPerformer<'_> {
    fn print(&mut self, c: char) {
        operations::char_ops::print_char(self, c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            0x08 => operations::control_ops::handle_backspace(self),
            0x09 => operations::control_ops::handle_tab(self),
            0x0A | 0x0B | 0x0C => operations::control_ops::handle_line_feed(self),
            0x0D => operations::control_ops::handle_carriage_return(self),
            other => tracing::trace!(byte = other, "ignoring C0 control"),
        }
    }

    fn hook(&mut self, _params: &vte::Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        // DCS is out of scope for this core; accepted and silently dropped.
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        // Out of scope: this core never dispatches OSC.
    }

    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        // `?` as the first byte after `[` marks a private-mode sequence
        // (DEC private parameters, e.g. `CSI ? 6 c`). None of this crate's
        // dispatches have a private-marker form distinct from their public
        // one, so any sequence carrying the marker is dropped rather than
        // dispatched as if it were the public form.
        if intermediates.contains(&b'?') {
            tracing::trace!(final_byte = %action, "ignoring private-marker CSI sequence");
            return;
        }
        match action {
            'A' => operations::cursor_ops::cursor_up(self, params),
            'B' => operations::cursor_ops::cursor_down(self, params),
            'C' => operations::cursor_ops::cursor_forward(self, params),
            'D' => operations::cursor_ops::cursor_backward(self, params),
            'G' => operations::cursor_ops::cursor_column_absolute(self, params),
            'H' | 'f' => operations::cursor_ops::cursor_position(self, params),
            'J' => operations::erase_ops::erase_in_display(self, params),
            'K' => operations::erase_ops::erase_in_line(self, params),
            'L' => operations::line_ops::insert_lines(self, params),
            'M' => operations::line_ops::delete_lines(self, params),
            'P' => operations::char_ops::delete_chars(self, params),
            'c' => operations::da_ops::report_device_attributes(self),
            'm' => operations::sgr_ops::set_graphic_rendition(self, params),
            'r' => operations::margin_ops::set_scroll_region(self, params),
            other => tracing::warn!(final_byte = %other, "ignoring unrecognized CSI dispatch"),
        }
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, byte: u8) {
        match byte {
            b'D' => operations::esc_ops::index(self),
            b'E' => operations::esc_ops::next_line(self),
            b'M' => operations::esc_ops::reverse_index(self),
            b'c' => operations::esc_ops::full_reset(self),
            other => tracing::warn!(byte = other, "ignoring unrecognized ESC dispatch"),
        }
    }
}
