// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Grid resizing. The one fallible operation this crate exposes: if the new
//! buffers cannot be allocated, the screen is left completely untouched.

use crate::error::ResizeError;

use super::Screen;

impl Screen {
    /// Resizes the grid to `(w, h)`, clamped to a minimum of `10x2`.
    /// Preserves the top-left `min(w, w') x min(h, h')` region of the old
    /// grid, resets the scroll region to `(0, h'-1)`, and clamps the
    /// cursor into the new grid.
    ///
    /// On allocation failure the screen retains its previous buffers and
    /// dimensions unchanged.
    pub fn resize(&mut self, w: usize, h: usize) -> Result<(), ResizeError> {
        let new_w = w.max(10);
        let new_h = h.max(2);
        let cell_count = new_w
            .checked_mul(new_h)
            .ok_or(ResizeError::Allocation { width: new_w, height: new_h })?;

        let mut new_chars: Vec<u8> = Vec::new();
        let mut new_attrs: Vec<u8> = Vec::new();
        let mut new_dirty: Vec<bool> = Vec::new();
        new_chars
            .try_reserve_exact(cell_count)
            .map_err(|_| ResizeError::Allocation { width: new_w, height: new_h })?;
        new_attrs
            .try_reserve_exact(cell_count)
            .map_err(|_| ResizeError::Allocation { width: new_w, height: new_h })?;
        new_dirty
            .try_reserve_exact(new_h)
            .map_err(|_| ResizeError::Allocation { width: new_w, height: new_h })?;

        new_chars.resize(cell_count, b' ');
        new_attrs.resize(cell_count, 0);
        new_dirty.resize(new_h, true);

        let copy_w = self.width.min(new_w);
        let copy_h = self.height.min(new_h);
        for y in 0..copy_h {
            let old_start = y * self.width;
            let new_start = y * new_w;
            new_chars[new_start..new_start + copy_w]
                .copy_from_slice(&self.chars[old_start..old_start + copy_w]);
            new_attrs[new_start..new_start + copy_w]
                .copy_from_slice(&self.attrs[old_start..old_start + copy_w]);
        }

        self.chars = new_chars;
        self.attrs = new_attrs;
        self.dirty_line = new_dirty;
        self.width = new_w;
        self.height = new_h;
        self.screen_dirty = true;

        self.margin_top = 0;
        self.margin_bottom = new_h - 1;
        self.cursor_x = self.cursor_x.min(new_w - 1);
        self.cursor_y = self.cursor_y.min(new_h - 1);

        tracing::debug!(width = new_w, height = new_h, "screen resized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clamps_to_minimum_dimensions() {
        let mut s = Screen::new(20, 10);
        s.resize(1, 1).unwrap();
        assert_eq!((s.width(), s.height()), (10, 2));
    }

    #[test]
    fn resize_preserves_top_left_region() {
        let mut s = Screen::new(5, 3);
        for ch in b"ABCDE" {
            s.display_char(*ch);
        }
        s.resize(3, 5).unwrap();
        assert_eq!(&s.chars()[0..3], b"ABC");
    }

    #[test]
    fn resize_clamps_cursor_and_resets_margins() {
        let mut s = Screen::new(20, 20);
        s.set_margins(2, 10);
        s.move_absolute(15, 15);
        s.resize(10, 5).unwrap();
        assert_eq!(s.cursor(), (9, 4));
        assert_eq!(s.margins(), (0, 4));
    }

    #[test]
    fn resize_to_same_size_is_idempotent_on_contents() {
        let mut s = Screen::new(10, 5);
        for ch in b"Hello" {
            s.display_char(*ch);
        }
        let before_chars = s.chars().to_vec();
        let before_cursor = s.cursor();
        s.resize(10, 5).unwrap();
        assert_eq!(s.chars(), &before_chars[..]);
        assert_eq!(s.cursor(), before_cursor);
    }
}
