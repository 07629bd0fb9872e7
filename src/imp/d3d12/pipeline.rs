// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! D3D12 pipeline state descriptions.

use crate::imp::d3d::filter::filter_type_to_d3d_filter;
use crate::imp::d3d::structured::{D3dDepthStencilDesc, D3dSamplerDesc};
use crate::imp::d3d::tables::{
    blend_factor_to_d3d_blend, blend_operation_to_d3d_blend_op, color_mask_to_d3d_write_enable,
    comparison_func_to_d3d_comparison_func, cull_mode_to_d3d_cull_mode,
    fill_mode_to_d3d_fill_mode, texture_address_mode_to_d3d_address_mode,
};
use crate::imp::d3d::types::{
    Blend, BlendOp, Bool, ColorWriteEnable, ComparisonFunc, CullMode, FillMode, Filter,
    TextureAddressMode, bool_to_d3d_bool,
};
use crate::imp::d3d12::types::{
    ConservativeRasterizationMode, LogicOp, ShaderVisibility, StaticBorderColor,
};
use crate::pipeline::{
    BlendDesc, LogicOperation, MAX_RENDER_TARGETS, RasterizerDesc, RenderTargetBlendDesc,
};
use crate::sampler::SamplerDesc;

/// `D3D12_DEPTH_STENCIL_DESC`
pub type D3D12DepthStencilDesc = D3dDepthStencilDesc;
/// `D3D12_SAMPLER_DESC`
pub type D3D12SamplerDesc = D3dSamplerDesc;

/// `D3D12_RASTERIZER_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D3D12RasterizerDesc {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    pub front_counter_clockwise: Bool,
    pub depth_bias: i32,
    pub depth_bias_clamp: f32,
    pub slope_scaled_depth_bias: f32,
    pub depth_clip_enable: Bool,
    pub multisample_enable: Bool,
    pub antialiased_line_enable: Bool,
    pub forced_sample_count: u32,
    pub conservative_raster: ConservativeRasterizationMode,
}

/// D3D12 has no scissor enable; scissor rects are always applied.
pub fn rasterizer_desc_to_d3d12_rasterizer_desc(desc: &RasterizerDesc) -> D3D12RasterizerDesc {
    let antialiased_line_enable = bool_to_d3d_bool(desc.antialiased_line_enable);
    D3D12RasterizerDesc {
        fill_mode: fill_mode_to_d3d_fill_mode(desc.fill_mode),
        cull_mode: cull_mode_to_d3d_cull_mode(desc.cull_mode),
        front_counter_clockwise: bool_to_d3d_bool(desc.front_counter_clockwise),
        depth_bias: desc.depth_bias,
        depth_bias_clamp: desc.depth_bias_clamp,
        slope_scaled_depth_bias: desc.slope_scaled_depth_bias,
        depth_clip_enable: bool_to_d3d_bool(desc.depth_clip_enable),
        multisample_enable: antialiased_line_enable,
        antialiased_line_enable,
        forced_sample_count: 0,
        conservative_raster: ConservativeRasterizationMode::OFF,
    }
}

/// `D3D12_RENDER_TARGET_BLEND_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D12RenderTargetBlendDesc {
    pub blend_enable: Bool,
    pub logic_op_enable: Bool,
    pub src_blend: Blend,
    pub dest_blend: Blend,
    pub blend_op: BlendOp,
    pub src_blend_alpha: Blend,
    pub dest_blend_alpha: Blend,
    pub blend_op_alpha: BlendOp,
    pub logic_op: LogicOp,
    pub render_target_write_mask: ColorWriteEnable,
}

/// `D3D12_BLEND_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D12BlendDesc {
    pub alpha_to_coverage_enable: Bool,
    pub independent_blend_enable: Bool,
    pub render_target: [D3D12RenderTargetBlendDesc; MAX_RENDER_TARGETS],
}

/// The two enumerations share their numbering.
pub const fn logic_operation_to_d3d12_logic_op(op: LogicOperation) -> LogicOp {
    LogicOp(op as i32)
}

fn render_target_blend_desc_to_d3d12(rt: &RenderTargetBlendDesc) -> D3D12RenderTargetBlendDesc {
    D3D12RenderTargetBlendDesc {
        blend_enable: bool_to_d3d_bool(rt.blend_enable),
        logic_op_enable: bool_to_d3d_bool(rt.logic_operation_enable),
        src_blend: blend_factor_to_d3d_blend(rt.src_blend),
        dest_blend: blend_factor_to_d3d_blend(rt.dest_blend),
        blend_op: blend_operation_to_d3d_blend_op(rt.blend_op),
        src_blend_alpha: blend_factor_to_d3d_blend(rt.src_blend_alpha),
        dest_blend_alpha: blend_factor_to_d3d_blend(rt.dest_blend_alpha),
        blend_op_alpha: blend_operation_to_d3d_blend_op(rt.blend_op_alpha),
        logic_op: logic_operation_to_d3d12_logic_op(rt.logic_op),
        render_target_write_mask: color_mask_to_d3d_write_enable(rt.render_target_write_mask),
    }
}

/// Logic operations are supported on every render target.
pub fn blend_desc_to_d3d12_blend_desc(desc: &BlendDesc) -> D3D12BlendDesc {
    D3D12BlendDesc {
        alpha_to_coverage_enable: bool_to_d3d_bool(desc.alpha_to_coverage_enable),
        independent_blend_enable: bool_to_d3d_bool(desc.independent_blend_enable),
        render_target: desc.render_targets.map(|rt| render_target_blend_desc_to_d3d12(&rt)),
    }
}

/// Static samplers only support three border colors.  Any other color logs an error and
/// becomes opaque black.
///
/// ```
/// # #[cfg(feature = "backend_d3d12")] {
/// use states_and_views::d3d12::{StaticBorderColor, border_color_to_d3d12_static_border_color};
///
/// assert_eq!(
///     border_color_to_d3d12_static_border_color([1.0, 1.0, 1.0, 1.0]),
///     StaticBorderColor::OPAQUE_WHITE
/// );
/// assert_eq!(
///     border_color_to_d3d12_static_border_color([0.5, 0.0, 0.0, 1.0]),
///     StaticBorderColor::OPAQUE_BLACK
/// );
/// # }
/// ```
pub fn border_color_to_d3d12_static_border_color(border_color: [f32; 4]) -> StaticBorderColor {
    match border_color {
        [0.0, 0.0, 0.0, 0.0] => StaticBorderColor::TRANSPARENT_BLACK,
        [0.0, 0.0, 0.0, 1.0] => StaticBorderColor::OPAQUE_BLACK,
        [1.0, 1.0, 1.0, 1.0] => StaticBorderColor::OPAQUE_WHITE,
        _ => {
            logwise::error_sync!(
                "D3D12 static samplers only allow transparent black (0,0,0,0), opaque black (0,0,0,1) or opaque white (1,1,1,1) as border colors. Got {color}",
                color = logwise::privacy::LogIt(&border_color)
            );
            StaticBorderColor::OPAQUE_BLACK
        }
    }
}

/// `D3D12_STATIC_SAMPLER_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D3D12StaticSamplerDesc {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunc,
    pub border_color: StaticBorderColor,
    pub min_lod: f32,
    pub max_lod: f32,
    pub shader_register: u32,
    pub register_space: u32,
    pub shader_visibility: ShaderVisibility,
}

pub fn sampler_desc_to_d3d12_static_sampler_desc(
    desc: &SamplerDesc,
    shader_register: u32,
    register_space: u32,
    shader_visibility: ShaderVisibility,
) -> D3D12StaticSamplerDesc {
    D3D12StaticSamplerDesc {
        filter: filter_type_to_d3d_filter(desc.min_filter, desc.mag_filter, desc.mip_filter),
        address_u: texture_address_mode_to_d3d_address_mode(desc.address_u),
        address_v: texture_address_mode_to_d3d_address_mode(desc.address_v),
        address_w: texture_address_mode_to_d3d_address_mode(desc.address_w),
        mip_lod_bias: desc.mip_lod_bias,
        max_anisotropy: desc.max_anisotropy,
        comparison_func: comparison_func_to_d3d_comparison_func(desc.comparison_func),
        border_color: border_color_to_d3d12_static_border_color(desc.border_color),
        min_lod: desc.min_lod,
        max_lod: desc.max_lod,
        shader_register,
        register_space,
        shader_visibility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imp::d3d::types::{FALSE, TRUE};
    use crate::pipeline::{BlendFactor, ColorMask};
    use crate::sampler::{FilterType, TextureAddressMode as EngineAddressMode};

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rasterizer_defaults() {
        let desc = rasterizer_desc_to_d3d12_rasterizer_desc(&RasterizerDesc::default());
        assert_eq!(desc.fill_mode, FillMode::SOLID);
        assert_eq!(desc.cull_mode, CullMode::BACK);
        assert_eq!(desc.depth_clip_enable, TRUE);
        assert_eq!(desc.front_counter_clockwise, FALSE);
        assert_eq!(desc.multisample_enable, FALSE);
        assert_eq!(desc.forced_sample_count, 0);
        assert_eq!(desc.conservative_raster, ConservativeRasterizationMode::OFF);

        let lines = RasterizerDesc {
            antialiased_line_enable: true,
            ..RasterizerDesc::default()
        };
        let desc = rasterizer_desc_to_d3d12_rasterizer_desc(&lines);
        assert_eq!(desc.multisample_enable, TRUE);
        assert_eq!(desc.antialiased_line_enable, TRUE);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn logic_ops_are_kept() {
        for op in LogicOperation::ALL {
            assert_eq!(logic_operation_to_d3d12_logic_op(op).0, op as i32);
        }
        let mut desc = BlendDesc::default();
        desc.render_targets[3].logic_operation_enable = true;
        desc.render_targets[3].logic_op = LogicOperation::Xor;
        desc.render_targets[0].blend_enable = true;
        desc.render_targets[0].src_blend = BlendFactor::SrcAlpha;
        desc.render_targets[0].dest_blend = BlendFactor::InvSrcAlpha;
        desc.render_targets[0].render_target_write_mask = ColorMask::RED | ColorMask::ALPHA;

        let d3d = blend_desc_to_d3d12_blend_desc(&desc);
        assert_eq!(d3d.render_target[3].logic_op_enable, TRUE);
        assert_eq!(d3d.render_target[3].logic_op, LogicOp::XOR);
        assert_eq!(d3d.render_target[0].blend_enable, TRUE);
        assert_eq!(d3d.render_target[0].src_blend, Blend::SRC_ALPHA);
        assert_eq!(d3d.render_target[0].dest_blend, Blend::INV_SRC_ALPHA);
        assert_eq!(d3d.render_target[0].logic_op, LogicOp::NOOP);
        assert_eq!(d3d.render_target[0].render_target_write_mask.0, 0x9);
        assert_eq!(d3d.render_target[1].render_target_write_mask, ColorWriteEnable::ALL);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn border_colors() {
        assert_eq!(
            border_color_to_d3d12_static_border_color([0.0; 4]),
            StaticBorderColor::TRANSPARENT_BLACK
        );
        assert_eq!(
            border_color_to_d3d12_static_border_color([0.0, 0.0, 0.0, 1.0]),
            StaticBorderColor::OPAQUE_BLACK
        );
        assert_eq!(
            border_color_to_d3d12_static_border_color([1.0, 1.0, 1.0, 0.0]),
            StaticBorderColor::OPAQUE_BLACK
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn static_sampler() {
        let desc = SamplerDesc {
            min_filter: FilterType::Linear,
            mag_filter: FilterType::Linear,
            mip_filter: FilterType::Linear,
            address_u: EngineAddressMode::Border,
            border_color: [1.0, 1.0, 1.0, 1.0],
            ..SamplerDesc::default()
        };
        let d3d = sampler_desc_to_d3d12_static_sampler_desc(&desc, 2, 1, ShaderVisibility::PIXEL);
        assert_eq!(d3d.filter, Filter::MIN_MAG_MIP_LINEAR);
        assert_eq!(d3d.address_u, TextureAddressMode::BORDER);
        assert_eq!(d3d.border_color, StaticBorderColor::OPAQUE_WHITE);
        assert_eq!(d3d.shader_register, 2);
        assert_eq!(d3d.register_space, 1);
        assert_eq!(d3d.shader_visibility, ShaderVisibility::PIXEL);
    }
}
