// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
View dimension dispatch shared by the D3D backends.

Both backends describe views as a format plus a tagged union keyed by dimension.  The union
members differ slightly between D3D11 and D3D12, so this module only decides which member a view
uses and which engine fields land in it.  Each backend then builds its own descriptor from the
resulting shape.
*/

use crate::imp::Error;
use crate::imp::d3d::dxgi::{DxgiFormat, tex_format_to_dxgi_format, type_to_dxgi_format};
use crate::pixel_formats::ValueType;
use crate::views::{
    BindFlags, BufferDesc, BufferMode, BufferViewDesc, ResourceDimension, TextureViewDesc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MipRange {
    pub most_detailed_mip: u32,
    pub mip_levels: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SliceRange {
    pub first_array_slice: u32,
    pub array_size: u32,
}

impl MipRange {
    fn of(desc: &TextureViewDesc) -> Self {
        MipRange {
            most_detailed_mip: desc.most_detailed_mip,
            mip_levels: desc.num_mip_levels,
        }
    }
}

impl SliceRange {
    fn of(desc: &TextureViewDesc) -> Self {
        SliceRange {
            first_array_slice: desc.first_array_slice,
            array_size: desc.num_array_slices,
        }
    }
}

/// Union member of a shader resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SrvShape {
    Unknown,
    Tex1D(MipRange),
    Tex1DArray(MipRange, SliceRange),
    Tex2D(MipRange),
    Tex2DMS,
    Tex2DArray(MipRange, SliceRange),
    Tex2DMSArray(SliceRange),
    Tex3D(MipRange),
    TexCube(MipRange),
    TexCubeArray {
        mips: MipRange,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
}

/// Union member of a render target, depth-stencil or unordered access view.  These address a
/// single mip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TargetShape {
    Unknown,
    Tex1D {
        mip_slice: u32,
    },
    Tex1DArray {
        mip_slice: u32,
        slices: SliceRange,
    },
    Tex2D {
        mip_slice: u32,
    },
    Tex2DMS,
    Tex2DArray {
        mip_slice: u32,
        slices: SliceRange,
    },
    Tex2DMSArray(SliceRange),
    Tex3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

fn unexpected_view(desc: &TextureViewDesc) {
    logwise::error_sync!(
        "Unexpected view type {view_type} for texture dimension {dim}",
        view_type = logwise::privacy::LogIt(&desc.view_type),
        dim = logwise::privacy::LogIt(&desc.texture_dim)
    );
}

pub(crate) fn srv_shape(desc: &TextureViewDesc, sample_count: u32) -> (DxgiFormat, SrvShape) {
    let format = tex_format_to_dxgi_format(desc.format, BindFlags::SHADER_RESOURCE);
    let mips = MipRange::of(desc);
    let slices = SliceRange::of(desc);
    let multisampled = sample_count > 1;
    let shape = match desc.texture_dim {
        ResourceDimension::Tex1D => SrvShape::Tex1D(mips),
        ResourceDimension::Tex1DArray => SrvShape::Tex1DArray(mips, slices),
        ResourceDimension::Tex2D if multisampled => SrvShape::Tex2DMS,
        ResourceDimension::Tex2D => SrvShape::Tex2D(mips),
        ResourceDimension::Tex2DArray if multisampled => SrvShape::Tex2DMSArray(slices),
        ResourceDimension::Tex2DArray => SrvShape::Tex2DArray(mips, slices),
        ResourceDimension::Tex3D => SrvShape::Tex3D(mips),
        ResourceDimension::TexCube => SrvShape::TexCube(mips),
        ResourceDimension::TexCubeArray => SrvShape::TexCubeArray {
            mips,
            first_2d_array_face: desc.first_array_slice,
            num_cubes: desc.num_array_slices / 6,
        },
        ResourceDimension::Undefined | ResourceDimension::Buffer => {
            unexpected_view(desc);
            SrvShape::Unknown
        }
    };
    (format, shape)
}

/// Shape shared by the single-mip views.  Unordered access views are never multisampled.
fn target_shape(desc: &TextureViewDesc, multisampled: bool) -> TargetShape {
    let mip_slice = desc.most_detailed_mip;
    let slices = SliceRange::of(desc);
    match desc.texture_dim {
        ResourceDimension::Tex1D => TargetShape::Tex1D { mip_slice },
        ResourceDimension::Tex1DArray => TargetShape::Tex1DArray { mip_slice, slices },
        ResourceDimension::Tex2D if multisampled => TargetShape::Tex2DMS,
        ResourceDimension::Tex2D => TargetShape::Tex2D { mip_slice },
        ResourceDimension::Tex2DArray if multisampled => TargetShape::Tex2DMSArray(slices),
        ResourceDimension::Tex2DArray => TargetShape::Tex2DArray { mip_slice, slices },
        ResourceDimension::Tex3D => TargetShape::Tex3D {
            mip_slice,
            first_w_slice: desc.first_depth_slice(),
            w_size: desc.num_depth_slices(),
        },
        ResourceDimension::TexCube
        | ResourceDimension::TexCubeArray
        | ResourceDimension::Undefined
        | ResourceDimension::Buffer => {
            unexpected_view(desc);
            TargetShape::Unknown
        }
    }
}

pub(crate) fn rtv_shape(desc: &TextureViewDesc, sample_count: u32) -> (DxgiFormat, TargetShape) {
    let format = tex_format_to_dxgi_format(desc.format, BindFlags::RENDER_TARGET);
    (format, target_shape(desc, sample_count > 1))
}

/// Depth-stencil views of 3D textures do not exist.
pub(crate) fn dsv_shape(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> Result<(DxgiFormat, TargetShape), Error> {
    if desc.texture_dim == ResourceDimension::Tex3D {
        logwise::error_sync!("Depth stencil views are not supported for 3D textures");
        return Err(Error::DepthStencilViewOn3DTexture);
    }
    let format = tex_format_to_dxgi_format(desc.format, BindFlags::DEPTH_STENCIL);
    Ok((format, target_shape(desc, sample_count > 1)))
}

pub(crate) fn uav_shape(desc: &TextureViewDesc) -> (DxgiFormat, TargetShape) {
    let format = tex_format_to_dxgi_format(desc.format, BindFlags::UNORDERED_ACCESS);
    (format, target_shape(desc, false))
}

/// Element range and format of a buffer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BufferLayout {
    pub format: DxgiFormat,
    pub first_element: u32,
    pub num_elements: u32,
    /// A raw view without a format addresses 32-bit words.
    pub raw: bool,
}

pub(crate) fn buffer_view_layout(
    buffer: &BufferDesc,
    view: &BufferViewDesc,
) -> Result<BufferLayout, Error> {
    let value_type = view.format.value_type;
    let typed_raw = buffer.mode == BufferMode::Raw && value_type != ValueType::Undefined;
    let raw = buffer.mode == BufferMode::Raw && value_type == ValueType::Undefined;

    let format = if buffer.mode == BufferMode::Formatted || typed_raw {
        type_to_dxgi_format(value_type, view.format.num_components, view.format.is_normalized)
    } else {
        DxgiFormat::UNKNOWN
    };

    let stride = match buffer.mode {
        BufferMode::Formatted | BufferMode::Structured => buffer.element_byte_stride,
        BufferMode::Raw if typed_raw => buffer.element_byte_stride,
        BufferMode::Raw => 4,
        BufferMode::Undefined => 0,
    };

    let mut layout = BufferLayout {
        format,
        first_element: 0,
        num_elements: 0,
        raw,
    };
    if stride != 0 {
        for (field, value) in [("offset", view.byte_offset), ("width", view.byte_width)] {
            if value % stride != 0 {
                logwise::error_sync!(
                    "Byte {field} ({value}) is not multiple of element byte stride ({stride})",
                    field = field,
                    value = value,
                    stride = stride
                );
                return Err(Error::UnalignedBufferView {
                    field,
                    value,
                    stride,
                });
            }
        }
        layout.first_element = view.byte_offset / stride;
        layout.num_elements = view.byte_width / stride;
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::TextureFormat;
    use crate::views::{BufferFormat, BufferViewType, TextureViewType};

    fn view(dim: ResourceDimension) -> TextureViewDesc {
        TextureViewDesc {
            view_type: TextureViewType::RenderTarget,
            texture_dim: dim,
            format: TextureFormat::RGBA8UNorm,
            most_detailed_mip: 2,
            num_mip_levels: 1,
            first_array_slice: 3,
            num_array_slices: 4,
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn target_shapes() {
        let (_, shape) = rtv_shape(&view(ResourceDimension::Tex2DArray), 4);
        assert_eq!(
            shape,
            TargetShape::Tex2DMSArray(SliceRange {
                first_array_slice: 3,
                array_size: 4
            })
        );
        let (_, shape) = uav_shape(&view(ResourceDimension::Tex2D));
        assert_eq!(shape, TargetShape::Tex2D { mip_slice: 2 });
        let (_, shape) = rtv_shape(&view(ResourceDimension::TexCube), 1);
        assert_eq!(shape, TargetShape::Unknown);
        assert_eq!(
            dsv_shape(&view(ResourceDimension::Tex3D), 1),
            Err(Error::DepthStencilViewOn3DTexture)
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn structured_layout() {
        let buffer = BufferDesc {
            size_in_bytes: 1024,
            bind_flags: BindFlags::SHADER_RESOURCE,
            mode: BufferMode::Structured,
            element_byte_stride: 16,
        };
        let view = BufferViewDesc {
            view_type: BufferViewType::ShaderResource,
            format: BufferFormat::default(),
            byte_offset: 64,
            byte_width: 256,
        };
        let layout = buffer_view_layout(&buffer, &view).unwrap();
        assert_eq!(layout.first_element, 4);
        assert_eq!(layout.num_elements, 16);
        assert_eq!(layout.format, DxgiFormat::UNKNOWN);
        assert!(!layout.raw);

        let unaligned = BufferViewDesc {
            byte_width: 250,
            ..view
        };
        assert_eq!(
            buffer_view_layout(&buffer, &unaligned),
            Err(Error::UnalignedBufferView {
                field: "width",
                value: 250,
                stride: 16
            })
        );
    }
}
