// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Select Graphic Rendition: updates the current foreground/background
//! color indices that new characters inherit.

use super::Screen;

impl Screen {
    /// Applies a sequence of SGR parameters in order.
    ///
    /// `7` is a one-shot, non-sticky swap of `cur_fg`/`cur_bg` — a
    /// deliberate divergence from the standard sticky "reverse video"
    /// attribute, preserved intentionally.
    pub fn select_graphic_rendition(&mut self, params: &[u16]) {
        for &p in params {
            match p {
                0 => {
                    self.cur_fg = 7;
                    self.cur_bg = 0;
                }
                7 => std::mem::swap(&mut self.cur_fg, &mut self.cur_bg),
                30..=37 => self.cur_fg = (p - 30) as u8,
                39 => self.cur_fg = 7,
                40..=47 => self.cur_bg = (p - 40) as u8,
                49 => self.cur_bg = 0,
                other => tracing::warn!(param = other, "ignoring unrecognized SGR parameter"),
            }
        }
        self.mark_screen_dirty();
    }
}
