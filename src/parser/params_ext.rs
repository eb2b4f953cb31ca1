// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Extraction helpers over [`vte::Params`].
//!
//! `vte::Params` iterates parameter *positions* in CSI-sequence order; each
//! position yields a slice of sub-parameters (colon-separated, e.g.
//! `38:2:255:0:0`). This crate's dispatch table never uses sub-parameters,
//! so every extraction here takes only the first sub-parameter of a
//! position and ignores the rest — exactly what a VT102 parser that
//! predates colon sub-parameters would do.
//!
//! Positions beyond the 16th are never inspected, enforcing the parameter
//! cap from the data model: `vte::Params` itself tolerates more, but this
//! crate's CSI dispatches never look past position 15.

const MAX_PARAMS: usize = 16;

pub(crate) trait ParamsExt {
    /// The first sub-parameter at position `n` (0-indexed), or `None` if
    /// that position was not supplied or lies past the 16-parameter cap.
    fn nth_raw(&self, n: usize) -> Option<u16>;

    /// The first sub-parameter of every position, truncated to the
    /// 16-parameter cap. Used by SGR, which iterates every parameter in
    /// the sequence rather than addressing positions by name.
    fn all_truncated(&self) -> Vec<u16>;

    /// `nth_raw(n)`, or `1` if missing or explicitly `0` — the
    /// `max(1, p)` default most CSI dispatches use (CUU, CUD, IL, DL, ...).
    fn nth_at_least_one(&self, n: usize) -> u16 { self.nth_raw(n).unwrap_or(0).max(1) }

    /// `nth_raw(n)`, or `default` if missing. Does not special-case an
    /// explicit `0`; used by dispatches (DECSTBM's second parameter) whose
    /// "defaulted" case is distinguished from "explicitly zero".
    fn nth_or(&self, n: usize, default: u16) -> u16 { self.nth_raw(n).unwrap_or(default) }

    /// Whether position `n` was supplied at all.
    fn has_nth(&self, n: usize) -> bool { self.nth_raw(n).is_some() }
}

impl ParamsExt for vte::Params {
    fn nth_raw(&self, n: usize) -> Option<u16> {
        if n >= MAX_PARAMS {
            return None;
        }
        self.iter().nth(n).and_then(|sub| sub.first().copied())
    }

    fn all_truncated(&self) -> Vec<u16> {
        self.iter()
            .take(MAX_PARAMS)
            .map(|sub| sub.first().copied().unwrap_or(0))
            .collect()
    }
}
