// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Render pass attachment access.

/// What happens to an attachment's contents when a render pass begins.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachmentLoadOp {
    /// Keep the previous contents.
    #[default]
    Load = 0,
    Clear,
    /// Contents are undefined; the pass overwrites them.
    Discard,
}

/// What happens to an attachment's contents when a render pass ends.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachmentStoreOp {
    #[default]
    Store = 0,
    Discard,
}
