// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Descriptor structs whose layout D3D11 and D3D12 share.
//!
//! Rasterizer and blend descriptors differ between the two APIs and live in the backend
//! modules.  Depth-stencil, input layout and sampler descriptors are field-for-field identical.

use crate::imp::d3d::dxgi::type_to_dxgi_format;
use crate::imp::d3d::filter::filter_type_to_d3d_filter;
use crate::imp::d3d::tables::{
    comparison_func_to_d3d_comparison_func, input_frequency_to_d3d_classification,
    stencil_op_to_d3d_stencil_op, texture_address_mode_to_d3d_address_mode,
};
use crate::imp::d3d::types::{
    Bool, ComparisonFunc, DepthStencilOpDesc, DepthWriteMask, Filter, InputClassification,
    InputElementDesc, TextureAddressMode, bool_to_d3d_bool,
};
use crate::pipeline::{DepthStencilDesc, InputLayoutDesc, StencilOpDesc};
use crate::sampler::SamplerDesc;

/// `D3D12_DEPTH_STENCIL_DESC` / `D3D11_DEPTH_STENCIL_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3dDepthStencilDesc {
    pub depth_enable: Bool,
    pub depth_write_mask: DepthWriteMask,
    pub depth_func: ComparisonFunc,
    pub stencil_enable: Bool,
    pub stencil_read_mask: u8,
    pub stencil_write_mask: u8,
    pub front_face: DepthStencilOpDesc,
    pub back_face: DepthStencilOpDesc,
}

pub fn stencil_op_desc_to_d3d_stencil_op_desc(desc: &StencilOpDesc) -> DepthStencilOpDesc {
    DepthStencilOpDesc {
        stencil_fail_op: stencil_op_to_d3d_stencil_op(desc.stencil_fail_op),
        stencil_depth_fail_op: stencil_op_to_d3d_stencil_op(desc.stencil_depth_fail_op),
        stencil_pass_op: stencil_op_to_d3d_stencil_op(desc.stencil_pass_op),
        stencil_func: comparison_func_to_d3d_comparison_func(desc.stencil_func),
    }
}

pub fn depth_stencil_desc_to_d3d_depth_stencil_desc(desc: &DepthStencilDesc) -> D3dDepthStencilDesc {
    D3dDepthStencilDesc {
        depth_enable: bool_to_d3d_bool(desc.depth_enable),
        depth_write_mask: if desc.depth_write_enable {
            DepthWriteMask::ALL
        } else {
            DepthWriteMask::ZERO
        },
        depth_func: comparison_func_to_d3d_comparison_func(desc.depth_func),
        stencil_enable: bool_to_d3d_bool(desc.stencil_enable),
        stencil_read_mask: desc.stencil_read_mask,
        stencil_write_mask: desc.stencil_write_mask,
        front_face: stencil_op_desc_to_d3d_stencil_op_desc(&desc.front_face),
        back_face: stencil_op_desc_to_d3d_stencil_op_desc(&desc.back_face),
    }
}

/// One input element per layout element, in order.
///
/// Per-vertex elements have a step rate of zero.  Automatic offsets pass through unchanged as
/// `APPEND_ALIGNED_ELEMENT`.
pub fn input_layout_to_d3d_input_elements(layout: &InputLayoutDesc) -> Vec<InputElementDesc> {
    layout
        .elements
        .iter()
        .map(|element| {
            let input_slot_class = input_frequency_to_d3d_classification(element.frequency);
            InputElementDesc {
                semantic_name: element.hlsl_semantic.clone(),
                semantic_index: element.input_index,
                format: type_to_dxgi_format(
                    element.value_type,
                    element.num_components,
                    element.is_normalized,
                ),
                input_slot: element.buffer_slot,
                aligned_byte_offset: element.relative_offset,
                input_slot_class,
                instance_data_step_rate: if input_slot_class
                    == InputClassification::PER_VERTEX_DATA
                {
                    0
                } else {
                    element.instance_data_step_rate
                },
            }
        })
        .collect()
}

/// `D3D12_SAMPLER_DESC` / `D3D11_SAMPLER_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D3dSamplerDesc {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunc,
    pub border_color: [f32; 4],
    pub min_lod: f32,
    pub max_lod: f32,
}

pub fn sampler_desc_to_d3d_sampler_desc(desc: &SamplerDesc) -> D3dSamplerDesc {
    D3dSamplerDesc {
        filter: filter_type_to_d3d_filter(desc.min_filter, desc.mag_filter, desc.mip_filter),
        address_u: texture_address_mode_to_d3d_address_mode(desc.address_u),
        address_v: texture_address_mode_to_d3d_address_mode(desc.address_v),
        address_w: texture_address_mode_to_d3d_address_mode(desc.address_w),
        mip_lod_bias: desc.mip_lod_bias,
        max_anisotropy: desc.max_anisotropy,
        comparison_func: comparison_func_to_d3d_comparison_func(desc.comparison_func),
        border_color: desc.border_color,
        min_lod: desc.min_lod,
        max_lod: desc.max_lod,
    }
}
