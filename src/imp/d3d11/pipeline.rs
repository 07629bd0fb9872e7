// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! D3D11 pipeline state descriptions.

use crate::imp::d3d::structured::{D3dDepthStencilDesc, D3dSamplerDesc};
use crate::imp::d3d::tables::{
    blend_factor_to_d3d_blend, blend_operation_to_d3d_blend_op, color_mask_to_d3d_write_enable,
    cull_mode_to_d3d_cull_mode, fill_mode_to_d3d_fill_mode,
};
use crate::imp::d3d::types::{
    Blend, BlendOp, Bool, ColorWriteEnable, CullMode, FillMode, bool_to_d3d_bool,
};
use crate::pipeline::{BlendDesc, MAX_RENDER_TARGETS, RasterizerDesc, RenderTargetBlendDesc};

/// `D3D11_DEPTH_STENCIL_DESC`
pub type D3D11DepthStencilDesc = D3dDepthStencilDesc;
/// `D3D11_SAMPLER_DESC`
pub type D3D11SamplerDesc = D3dSamplerDesc;

/// `D3D11_RASTERIZER_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D3D11RasterizerDesc {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    pub front_counter_clockwise: Bool,
    pub depth_bias: i32,
    pub depth_bias_clamp: f32,
    pub slope_scaled_depth_bias: f32,
    pub depth_clip_enable: Bool,
    pub scissor_enable: Bool,
    pub multisample_enable: Bool,
    pub antialiased_line_enable: Bool,
}

pub fn rasterizer_desc_to_d3d11_rasterizer_desc(desc: &RasterizerDesc) -> D3D11RasterizerDesc {
    let antialiased_line_enable = bool_to_d3d_bool(desc.antialiased_line_enable);
    D3D11RasterizerDesc {
        fill_mode: fill_mode_to_d3d_fill_mode(desc.fill_mode),
        cull_mode: cull_mode_to_d3d_cull_mode(desc.cull_mode),
        front_counter_clockwise: bool_to_d3d_bool(desc.front_counter_clockwise),
        depth_bias: desc.depth_bias,
        depth_bias_clamp: desc.depth_bias_clamp,
        slope_scaled_depth_bias: desc.slope_scaled_depth_bias,
        depth_clip_enable: bool_to_d3d_bool(desc.depth_clip_enable),
        scissor_enable: bool_to_d3d_bool(desc.scissor_enable),
        multisample_enable: antialiased_line_enable,
        antialiased_line_enable,
    }
}

/// `D3D11_RENDER_TARGET_BLEND_DESC`.  There are no logic operation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11RenderTargetBlendDesc {
    pub blend_enable: Bool,
    pub src_blend: Blend,
    pub dest_blend: Blend,
    pub blend_op: BlendOp,
    pub src_blend_alpha: Blend,
    pub dest_blend_alpha: Blend,
    pub blend_op_alpha: BlendOp,
    pub render_target_write_mask: ColorWriteEnable,
}

/// `D3D11_BLEND_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11BlendDesc {
    pub alpha_to_coverage_enable: Bool,
    pub independent_blend_enable: Bool,
    pub render_target: [D3D11RenderTargetBlendDesc; MAX_RENDER_TARGETS],
}

fn render_target_blend_desc_to_d3d11(rt: &RenderTargetBlendDesc) -> D3D11RenderTargetBlendDesc {
    if rt.logic_operation_enable {
        logwise::error_sync!("Logical operations on render targets are not supported by D3D11 device");
    }
    D3D11RenderTargetBlendDesc {
        blend_enable: bool_to_d3d_bool(rt.blend_enable),
        src_blend: blend_factor_to_d3d_blend(rt.src_blend),
        dest_blend: blend_factor_to_d3d_blend(rt.dest_blend),
        blend_op: blend_operation_to_d3d_blend_op(rt.blend_op),
        src_blend_alpha: blend_factor_to_d3d_blend(rt.src_blend_alpha),
        dest_blend_alpha: blend_factor_to_d3d_blend(rt.dest_blend_alpha),
        blend_op_alpha: blend_operation_to_d3d_blend_op(rt.blend_op_alpha),
        render_target_write_mask: color_mask_to_d3d_write_enable(rt.render_target_write_mask),
    }
}

/// Render targets that enable a logic operation log an error and are converted without it.
pub fn blend_desc_to_d3d11_blend_desc(desc: &BlendDesc) -> D3D11BlendDesc {
    D3D11BlendDesc {
        alpha_to_coverage_enable: bool_to_d3d_bool(desc.alpha_to_coverage_enable),
        independent_blend_enable: bool_to_d3d_bool(desc.independent_blend_enable),
        render_target: desc.render_targets.map(|rt| render_target_blend_desc_to_d3d11(&rt)),
    }
}
