// Copyright (c) 2025 vt102-core contributors. Licensed under Apache License, Version 2.0.

//! Thin dispatch shims: each function here extracts the parameters a CSI or
//! ESC dispatch needs and forwards to the corresponding
//! [`crate::screen::Screen`] method. No operation here holds any logic of
//! its own beyond parameter extraction and defaulting.

pub(crate) mod char_ops;
pub(crate) mod control_ops;
pub(crate) mod cursor_ops;
pub(crate) mod da_ops;
pub(crate) mod erase_ops;
pub(crate) mod esc_ops;
pub(crate) mod line_ops;
pub(crate) mod margin_ops;
pub(crate) mod sgr_ops;
