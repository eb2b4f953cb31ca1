// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Property-based invariants over arbitrary byte streams: cursor/margin
//! bounds, color-index range, stability under plain text, resize
//! idempotence, and per-row dirty marking.

use proptest::prelude::*;
use vt102_core::Vt102Core;

const WIDTH: usize = 80;
const HEIGHT: usize = 24;

proptest! {
    #[test]
    fn cursor_and_margins_stay_in_bounds(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut t = Vt102Core::new(WIDTH, HEIGHT);
        for b in bytes {
            t.feed(b);
            let (cx, cy) = t.cursor();
            let (top, bottom) = t.margins();
            prop_assert!(cx < t.width());
            prop_assert!(top < bottom);
            prop_assert!(bottom <= t.height() - 1);
            prop_assert!(cy >= top && cy <= bottom);
        }
    }

    #[test]
    fn attribute_color_indices_stay_in_range(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut t = Vt102Core::new(WIDTH, HEIGHT);
        t.feed_bytes(&bytes);
        for &a in t.attrs() {
            prop_assert_eq!(a & 0x08, 0);
            prop_assert_eq!((a >> 4) & 0x08, 0);
        }
    }

    #[test]
    fn plain_text_never_touches_margins_or_colors(
        bytes in prop::collection::vec(0x20u8..=0x7E, 0..256)
    ) {
        let mut t = Vt102Core::new(WIDTH, HEIGHT);
        let margins_before = t.margins();
        let colors_before = t.screen().current_colors();
        t.feed_bytes(&bytes);
        prop_assert_eq!(t.margins(), margins_before);
        prop_assert_eq!(t.screen().current_colors(), colors_before);
    }

    #[test]
    fn resize_to_same_dimensions_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut t = Vt102Core::new(WIDTH, HEIGHT);
        t.feed_bytes(&bytes);
        let chars_before = t.chars().to_vec();
        let cursor_before = t.cursor();
        t.resize(WIDTH, HEIGHT).unwrap();
        prop_assert_eq!(t.chars(), &chars_before[..]);
        prop_assert_eq!(t.cursor(), cursor_before);
    }

    #[test]
    fn every_mutating_operation_marks_its_row_dirty(bytes in prop::collection::vec(any::<u8>(), 1..256)) {
        let mut t = Vt102Core::new(WIDTH, HEIGHT);
        t.clear_dirty();
        let row_before = t.cursor().1;
        t.feed_bytes(&bytes);
        if t.screen_dirty() {
            let touched_a_row = t.dirty_lines().iter().any(|&d| d);
            let cursor_only_motion = row_before == t.cursor().1 && !touched_a_row;
            prop_assert!(touched_a_row || cursor_only_motion);
        }
    }
}
