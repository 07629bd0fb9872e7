// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Direct3D 11 backend.

Shares its enumerations with D3D12.  The differences are in the descriptors: rasterizer
descriptions carry a scissor enable, render targets have no logic operations and raw buffers are
read through `BUFFEREX` shader resource views.
*/

mod pipeline;
mod types;
mod views;

pub use crate::imp::d3d::adapter::{
    AdapterProbe, DxgiAdapterDesc, check_adapter_compatibility, dxgi_adapter_desc_to_adapter_info,
    enumerate_adapters, feature_level_to_d3d_feature_level, find_compatible_adapters,
};
pub use crate::imp::d3d::dxgi::{
    DxgiFormat, dxgi_format_to_tex_format, tex_format_to_dxgi_format, type_to_dxgi_format,
};
pub use crate::imp::d3d::filter::filter_type_to_d3d_filter;
pub use crate::imp::d3d::structured::{
    depth_stencil_desc_to_d3d_depth_stencil_desc, input_layout_to_d3d_input_elements,
    sampler_desc_to_d3d_sampler_desc, stencil_op_desc_to_d3d_stencil_op_desc,
};
pub use crate::imp::d3d::tables::{
    blend_factor_to_d3d_blend, blend_operation_to_d3d_blend_op, color_mask_to_d3d_write_enable,
    comparison_func_to_d3d_comparison_func, cull_mode_to_d3d_cull_mode,
    fill_mode_to_d3d_fill_mode, input_frequency_to_d3d_classification,
    stencil_op_to_d3d_stencil_op, texture_address_mode_to_d3d_address_mode,
    topology_to_d3d_topology,
};
pub use crate::imp::d3d::types::*;

pub use pipeline::*;
pub use types::*;
pub use views::*;
