// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Engine enum to Direct3D enum tables.
//!
//! Each table accepts every engine value including `Undefined`.  Rejected inputs are logged and
//! return the documented fallback, which is the zero "unset" value unless stated otherwise.

use crate::imp::d3d::types::{
    Blend, BlendOp, ColorWriteEnable, ComparisonFunc, CullMode, FillMode, InputClassification,
    PrimitiveTopology, StencilOp, TextureAddressMode,
};
use crate::pipeline::{
    BlendFactor, BlendOperation, ColorMask, InputElementFrequency,
    PrimitiveTopology as EnginePrimitiveTopology,
};
use crate::sampler;

/// Unknown functions log an error and return `ALWAYS`.
pub fn comparison_func_to_d3d_comparison_func(
    func: sampler::ComparisonFunction,
) -> ComparisonFunc {
    use sampler::ComparisonFunction as F;
    match func {
        F::Never => ComparisonFunc::NEVER,
        F::Less => ComparisonFunc::LESS,
        F::Equal => ComparisonFunc::EQUAL,
        F::LessEqual => ComparisonFunc::LESS_EQUAL,
        F::Greater => ComparisonFunc::GREATER,
        F::NotEqual => ComparisonFunc::NOT_EQUAL,
        F::GreaterEqual => ComparisonFunc::GREATER_EQUAL,
        F::Always => ComparisonFunc::ALWAYS,
        F::Unknown => {
            logwise::error_sync!("Unknown comparison function");
            ComparisonFunc::ALWAYS
        }
    }
}

/// Unknown modes log an error and return `CLAMP`.
pub fn texture_address_mode_to_d3d_address_mode(
    mode: sampler::TextureAddressMode,
) -> TextureAddressMode {
    use sampler::TextureAddressMode as M;
    match mode {
        M::Wrap => TextureAddressMode::WRAP,
        M::Mirror => TextureAddressMode::MIRROR,
        M::Clamp => TextureAddressMode::CLAMP,
        M::Border => TextureAddressMode::BORDER,
        M::MirrorOnce => TextureAddressMode::MIRROR_ONCE,
        M::Unknown => {
            logwise::error_sync!("Unknown texture address mode");
            TextureAddressMode::CLAMP
        }
    }
}

pub fn fill_mode_to_d3d_fill_mode(fill_mode: crate::pipeline::FillMode) -> FillMode {
    use crate::pipeline::FillMode as F;
    match fill_mode {
        F::Wireframe => FillMode::WIREFRAME,
        F::Solid => FillMode::SOLID,
        F::Undefined => {
            logwise::error_sync!("Undefined fill mode");
            FillMode(0)
        }
    }
}

pub fn cull_mode_to_d3d_cull_mode(cull_mode: crate::pipeline::CullMode) -> CullMode {
    use crate::pipeline::CullMode as C;
    match cull_mode {
        C::None => CullMode::NONE,
        C::Front => CullMode::FRONT,
        C::Back => CullMode::BACK,
        C::Undefined => {
            logwise::error_sync!("Undefined cull mode");
            CullMode(0)
        }
    }
}

pub fn blend_factor_to_d3d_blend(factor: BlendFactor) -> Blend {
    match factor {
        BlendFactor::Zero => Blend::ZERO,
        BlendFactor::One => Blend::ONE,
        BlendFactor::SrcColor => Blend::SRC_COLOR,
        BlendFactor::InvSrcColor => Blend::INV_SRC_COLOR,
        BlendFactor::SrcAlpha => Blend::SRC_ALPHA,
        BlendFactor::InvSrcAlpha => Blend::INV_SRC_ALPHA,
        BlendFactor::DestAlpha => Blend::DEST_ALPHA,
        BlendFactor::InvDestAlpha => Blend::INV_DEST_ALPHA,
        BlendFactor::DestColor => Blend::DEST_COLOR,
        BlendFactor::InvDestColor => Blend::INV_DEST_COLOR,
        BlendFactor::SrcAlphaSat => Blend::SRC_ALPHA_SAT,
        BlendFactor::BlendFactor => Blend::BLEND_FACTOR,
        BlendFactor::InvBlendFactor => Blend::INV_BLEND_FACTOR,
        BlendFactor::Src1Color => Blend::SRC1_COLOR,
        BlendFactor::InvSrc1Color => Blend::INV_SRC1_COLOR,
        BlendFactor::Src1Alpha => Blend::SRC1_ALPHA,
        BlendFactor::InvSrc1Alpha => Blend::INV_SRC1_ALPHA,
        BlendFactor::Undefined => {
            logwise::error_sync!("Undefined blend factor");
            Blend(0)
        }
    }
}

pub fn blend_operation_to_d3d_blend_op(op: BlendOperation) -> BlendOp {
    match op {
        BlendOperation::Add => BlendOp::ADD,
        BlendOperation::Subtract => BlendOp::SUBTRACT,
        BlendOperation::RevSubtract => BlendOp::REV_SUBTRACT,
        BlendOperation::Min => BlendOp::MIN,
        BlendOperation::Max => BlendOp::MAX,
        BlendOperation::Undefined => {
            logwise::error_sync!("Undefined blend operation");
            BlendOp(0)
        }
    }
}

/// The wrapping engine ops map to `INCR` and `DECR`, which wrap in Direct3D.
pub fn stencil_op_to_d3d_stencil_op(op: crate::pipeline::StencilOp) -> StencilOp {
    use crate::pipeline::StencilOp as S;
    match op {
        S::Keep => StencilOp::KEEP,
        S::Zero => StencilOp::ZERO,
        S::Replace => StencilOp::REPLACE,
        S::IncrSat => StencilOp::INCR_SAT,
        S::DecrSat => StencilOp::DECR_SAT,
        S::Invert => StencilOp::INVERT,
        S::IncrWrap => StencilOp::INCR,
        S::DecrWrap => StencilOp::DECR,
        S::Undefined => {
            logwise::error_sync!("Undefined stencil operation");
            StencilOp(0)
        }
    }
}

/// `Undefined` is a valid topology and maps to `UNDEFINED`.  Patch lists outside `1..=32`
/// control points are logged and also return `UNDEFINED`.
pub fn topology_to_d3d_topology(topology: EnginePrimitiveTopology) -> PrimitiveTopology {
    match topology {
        EnginePrimitiveTopology::Undefined => PrimitiveTopology::UNDEFINED,
        EnginePrimitiveTopology::PointList => PrimitiveTopology::POINTLIST,
        EnginePrimitiveTopology::LineList => PrimitiveTopology::LINELIST,
        EnginePrimitiveTopology::LineStrip => PrimitiveTopology::LINESTRIP,
        EnginePrimitiveTopology::TriangleList => PrimitiveTopology::TRIANGLELIST,
        EnginePrimitiveTopology::TriangleStrip => PrimitiveTopology::TRIANGLESTRIP,
        EnginePrimitiveTopology::ControlPointPatchList(n)
            if (1..=EnginePrimitiveTopology::MAX_CONTROL_POINTS).contains(&n) =>
        {
            PrimitiveTopology(PrimitiveTopology::CONTROL_POINT_PATCHLIST_1.0 + i32::from(n) - 1)
        }
        EnginePrimitiveTopology::ControlPointPatchList(n) => {
            logwise::error_sync!(
                "Patch list with {n} control points is out of range [1, {max}]",
                n = n,
                max = EnginePrimitiveTopology::MAX_CONTROL_POINTS
            );
            PrimitiveTopology::UNDEFINED
        }
    }
}

pub fn input_frequency_to_d3d_classification(
    frequency: InputElementFrequency,
) -> InputClassification {
    match frequency {
        InputElementFrequency::PerVertex => InputClassification::PER_VERTEX_DATA,
        InputElementFrequency::PerInstance => InputClassification::PER_INSTANCE_DATA,
        InputElementFrequency::Undefined => {
            logwise::error_sync!("Undefined input element frequency");
            InputClassification::PER_VERTEX_DATA
        }
    }
}

pub const fn color_mask_to_d3d_write_enable(mask: ColorMask) -> ColorWriteEnable {
    // same bit layout
    ColorWriteEnable(mask.bits())
}
