// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Blend state.
//!
//! Each of the [`MAX_RENDER_TARGETS`] render targets carries its own color and alpha blend
//! equations, an optional logic operation and a write mask.  When
//! [`BlendDesc::independent_blend_enable`] is false backends only read the first target.

use std::ops::BitOr;

/// Render targets addressable by one blend description.
pub const MAX_RENDER_TARGETS: usize = 8;

/// A blend equation operand.
///
/// `Src1*` factors read the second output of a dual-source pixel shader.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendFactor {
    #[default]
    Undefined = 0,
    Zero,
    One,
    SrcColor,
    InvSrcColor,
    SrcAlpha,
    InvSrcAlpha,
    DestAlpha,
    InvDestAlpha,
    DestColor,
    InvDestColor,
    SrcAlphaSat,
    /// The constant blend factor set on the command list.
    BlendFactor,
    InvBlendFactor,
    Src1Color,
    InvSrc1Color,
    Src1Alpha,
    InvSrc1Alpha,
}

impl BlendFactor {
    pub const ALL: [BlendFactor; 17] = [
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::SrcColor,
        BlendFactor::InvSrcColor,
        BlendFactor::SrcAlpha,
        BlendFactor::InvSrcAlpha,
        BlendFactor::DestAlpha,
        BlendFactor::InvDestAlpha,
        BlendFactor::DestColor,
        BlendFactor::InvDestColor,
        BlendFactor::SrcAlphaSat,
        BlendFactor::BlendFactor,
        BlendFactor::InvBlendFactor,
        BlendFactor::Src1Color,
        BlendFactor::InvSrc1Color,
        BlendFactor::Src1Alpha,
        BlendFactor::InvSrc1Alpha,
    ];
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOperation {
    #[default]
    Undefined = 0,
    Add,
    Subtract,
    RevSubtract,
    Min,
    Max,
}

impl BlendOperation {
    pub const ALL: [BlendOperation; 5] = [
        BlendOperation::Add,
        BlendOperation::Subtract,
        BlendOperation::RevSubtract,
        BlendOperation::Min,
        BlendOperation::Max,
    ];
}

/// A bitwise operation applied between the shader output and the render target.
///
/// Unlike the other pipeline enums this one has no undefined value; `Clear` is zero.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOperation {
    Clear = 0,
    Set,
    Copy,
    CopyInverted,
    Noop,
    Invert,
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Equiv,
    AndReverse,
    AndInverted,
    OrReverse,
    OrInverted,
}

impl LogicOperation {
    pub const ALL: [LogicOperation; 16] = [
        LogicOperation::Clear,
        LogicOperation::Set,
        LogicOperation::Copy,
        LogicOperation::CopyInverted,
        LogicOperation::Noop,
        LogicOperation::Invert,
        LogicOperation::And,
        LogicOperation::Nand,
        LogicOperation::Or,
        LogicOperation::Nor,
        LogicOperation::Xor,
        LogicOperation::Equiv,
        LogicOperation::AndReverse,
        LogicOperation::AndInverted,
        LogicOperation::OrReverse,
        LogicOperation::OrInverted,
    ];
}

/// Color channels written to a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorMask(u8);

impl ColorMask {
    pub const NONE: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const BLUE: Self = Self(4);
    pub const ALPHA: Self = Self(8);
    pub const ALL: Self = Self(0xF);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ColorMask {
    fn default() -> Self {
        ColorMask::ALL
    }
}

impl BitOr for ColorMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Blend state of one render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetBlendDesc {
    pub blend_enable: bool,
    pub logic_operation_enable: bool,
    pub src_blend: BlendFactor,
    pub dest_blend: BlendFactor,
    pub blend_op: BlendOperation,
    pub src_blend_alpha: BlendFactor,
    pub dest_blend_alpha: BlendFactor,
    pub blend_op_alpha: BlendOperation,
    pub logic_op: LogicOperation,
    pub render_target_write_mask: ColorMask,
}

impl Default for RenderTargetBlendDesc {
    fn default() -> Self {
        RenderTargetBlendDesc {
            blend_enable: false,
            logic_operation_enable: false,
            src_blend: BlendFactor::One,
            dest_blend: BlendFactor::Zero,
            blend_op: BlendOperation::Add,
            src_blend_alpha: BlendFactor::One,
            dest_blend_alpha: BlendFactor::Zero,
            blend_op_alpha: BlendOperation::Add,
            logic_op: LogicOperation::Noop,
            render_target_write_mask: ColorMask::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlendDesc {
    pub alpha_to_coverage_enable: bool,
    pub independent_blend_enable: bool,
    pub render_targets: [RenderTargetBlendDesc; MAX_RENDER_TARGETS],
}
