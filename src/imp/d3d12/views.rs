// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
D3D12 view descriptors.

Each descriptor is a format plus one member of the native dimension union, modelled here as an
enum whose variants carry that member's fields.  Fields the engine has no counterpart for are
filled with their neutral values: plane slice 0, no minimum LOD clamp and the identity component
mapping.
*/

use crate::imp::Error;
use crate::imp::d3d::dxgi::DxgiFormat;
use crate::imp::d3d::types::{DsvDimension, RtvDimension, SrvDimension, UavDimension};
use crate::imp::d3d::views::{
    SrvShape, TargetShape, buffer_view_layout, dsv_shape, rtv_shape, srv_shape, uav_shape,
};
use crate::imp::d3d12::types::{
    BufferSrvFlags, BufferUavFlags, DEFAULT_SHADER_4_COMPONENT_MAPPING, DsvFlags,
};
use crate::views::{
    BindFlags, BufferDesc, BufferMode, BufferViewDesc, BufferViewType, TextureViewDesc,
    TextureViewType,
};

/// Union member of `D3D12_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum D3D12SrvView {
    #[default]
    Unknown,
    Buffer {
        first_element: u64,
        num_elements: u32,
        structure_byte_stride: u32,
        flags: BufferSrvFlags,
    },
    Texture1D {
        most_detailed_mip: u32,
        mip_levels: u32,
        resource_min_lod_clamp: f32,
    },
    Texture1DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
        resource_min_lod_clamp: f32,
    },
    Texture2D {
        most_detailed_mip: u32,
        mip_levels: u32,
        plane_slice: u32,
        resource_min_lod_clamp: f32,
    },
    Texture2DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
        resource_min_lod_clamp: f32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        most_detailed_mip: u32,
        mip_levels: u32,
        resource_min_lod_clamp: f32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
        resource_min_lod_clamp: f32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
        resource_min_lod_clamp: f32,
    },
}

/// `D3D12_SHADER_RESOURCE_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct D3D12ShaderResourceViewDesc {
    pub format: DxgiFormat,
    pub shader_4_component_mapping: u32,
    pub view: D3D12SrvView,
}

impl D3D12ShaderResourceViewDesc {
    pub fn view_dimension(&self) -> SrvDimension {
        match self.view {
            D3D12SrvView::Unknown => SrvDimension::UNKNOWN,
            D3D12SrvView::Buffer { .. } => SrvDimension::BUFFER,
            D3D12SrvView::Texture1D { .. } => SrvDimension::TEXTURE1D,
            D3D12SrvView::Texture1DArray { .. } => SrvDimension::TEXTURE1DARRAY,
            D3D12SrvView::Texture2D { .. } => SrvDimension::TEXTURE2D,
            D3D12SrvView::Texture2DArray { .. } => SrvDimension::TEXTURE2DARRAY,
            D3D12SrvView::Texture2DMS => SrvDimension::TEXTURE2DMS,
            D3D12SrvView::Texture2DMSArray { .. } => SrvDimension::TEXTURE2DMSARRAY,
            D3D12SrvView::Texture3D { .. } => SrvDimension::TEXTURE3D,
            D3D12SrvView::TextureCube { .. } => SrvDimension::TEXTURECUBE,
            D3D12SrvView::TextureCubeArray { .. } => SrvDimension::TEXTURECUBEARRAY,
        }
    }
}

/// Union member of `D3D12_RENDER_TARGET_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D12RtvView {
    #[default]
    Unknown,
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D12_RENDER_TARGET_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D12RenderTargetViewDesc {
    pub format: DxgiFormat,
    pub view: D3D12RtvView,
}

impl D3D12RenderTargetViewDesc {
    pub fn view_dimension(&self) -> RtvDimension {
        match self.view {
            D3D12RtvView::Unknown => RtvDimension::UNKNOWN,
            D3D12RtvView::Texture1D { .. } => RtvDimension::TEXTURE1D,
            D3D12RtvView::Texture1DArray { .. } => RtvDimension::TEXTURE1DARRAY,
            D3D12RtvView::Texture2D { .. } => RtvDimension::TEXTURE2D,
            D3D12RtvView::Texture2DArray { .. } => RtvDimension::TEXTURE2DARRAY,
            D3D12RtvView::Texture2DMS => RtvDimension::TEXTURE2DMS,
            D3D12RtvView::Texture2DMSArray { .. } => RtvDimension::TEXTURE2DMSARRAY,
            D3D12RtvView::Texture3D { .. } => RtvDimension::TEXTURE3D,
        }
    }
}

/// Union member of `D3D12_DEPTH_STENCIL_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D12DsvView {
    #[default]
    Unknown,
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
}

/// `D3D12_DEPTH_STENCIL_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D12DepthStencilViewDesc {
    pub format: DxgiFormat,
    pub flags: DsvFlags,
    pub view: D3D12DsvView,
}

impl D3D12DepthStencilViewDesc {
    pub fn view_dimension(&self) -> DsvDimension {
        match self.view {
            D3D12DsvView::Unknown => DsvDimension::UNKNOWN,
            D3D12DsvView::Texture1D { .. } => DsvDimension::TEXTURE1D,
            D3D12DsvView::Texture1DArray { .. } => DsvDimension::TEXTURE1DARRAY,
            D3D12DsvView::Texture2D { .. } => DsvDimension::TEXTURE2D,
            D3D12DsvView::Texture2DArray { .. } => DsvDimension::TEXTURE2DARRAY,
            D3D12DsvView::Texture2DMS => DsvDimension::TEXTURE2DMS,
            D3D12DsvView::Texture2DMSArray { .. } => DsvDimension::TEXTURE2DMSARRAY,
        }
    }
}

/// Union member of `D3D12_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D12UavView {
    #[default]
    Unknown,
    Buffer {
        first_element: u64,
        num_elements: u32,
        structure_byte_stride: u32,
        counter_offset_in_bytes: u64,
        flags: BufferUavFlags,
    },
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D12_UNORDERED_ACCESS_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D12UnorderedAccessViewDesc {
    pub format: DxgiFormat,
    pub view: D3D12UavView,
}

impl D3D12UnorderedAccessViewDesc {
    pub fn view_dimension(&self) -> UavDimension {
        match self.view {
            D3D12UavView::Unknown => UavDimension::UNKNOWN,
            D3D12UavView::Buffer { .. } => UavDimension::BUFFER,
            D3D12UavView::Texture1D { .. } => UavDimension::TEXTURE1D,
            D3D12UavView::Texture1DArray { .. } => UavDimension::TEXTURE1DARRAY,
            D3D12UavView::Texture2D { .. } => UavDimension::TEXTURE2D,
            D3D12UavView::Texture2DArray { .. } => UavDimension::TEXTURE2DARRAY,
            D3D12UavView::Texture3D { .. } => UavDimension::TEXTURE3D,
        }
    }
}

/// A shader resource view of a texture.  `sample_count` is the texture's.
pub fn texture_view_desc_to_d3d12_srv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> D3D12ShaderResourceViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::ShaderResource);
    let (format, shape) = srv_shape(desc, sample_count);
    let resource_min_lod_clamp = 0.0;
    let view = match shape {
        SrvShape::Unknown => D3D12SrvView::Unknown,
        SrvShape::Tex1D(mips) => D3D12SrvView::Texture1D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            resource_min_lod_clamp,
        },
        SrvShape::Tex1DArray(mips, slices) => D3D12SrvView::Texture1DArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
            resource_min_lod_clamp,
        },
        SrvShape::Tex2D(mips) => D3D12SrvView::Texture2D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            plane_slice: 0,
            resource_min_lod_clamp,
        },
        SrvShape::Tex2DMS => D3D12SrvView::Texture2DMS,
        SrvShape::Tex2DArray(mips, slices) => D3D12SrvView::Texture2DArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
            plane_slice: 0,
            resource_min_lod_clamp,
        },
        SrvShape::Tex2DMSArray(slices) => D3D12SrvView::Texture2DMSArray {
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        SrvShape::Tex3D(mips) => D3D12SrvView::Texture3D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            resource_min_lod_clamp,
        },
        SrvShape::TexCube(mips) => D3D12SrvView::TextureCube {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            resource_min_lod_clamp,
        },
        SrvShape::TexCubeArray {
            mips,
            first_2d_array_face,
            num_cubes,
        } => D3D12SrvView::TextureCubeArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_2d_array_face,
            num_cubes,
            resource_min_lod_clamp,
        },
    };
    D3D12ShaderResourceViewDesc {
        format,
        shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
        view,
    }
}

pub fn texture_view_desc_to_d3d12_rtv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> D3D12RenderTargetViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::RenderTarget);
    let (format, shape) = rtv_shape(desc, sample_count);
    let view = match shape {
        TargetShape::Unknown => D3D12RtvView::Unknown,
        TargetShape::Tex1D { mip_slice } => D3D12RtvView::Texture1D { mip_slice },
        TargetShape::Tex1DArray { mip_slice, slices } => D3D12RtvView::Texture1DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Tex2D { mip_slice } => D3D12RtvView::Texture2D {
            mip_slice,
            plane_slice: 0,
        },
        TargetShape::Tex2DMS => D3D12RtvView::Texture2DMS,
        TargetShape::Tex2DArray { mip_slice, slices } => D3D12RtvView::Texture2DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
            plane_slice: 0,
        },
        TargetShape::Tex2DMSArray(slices) => D3D12RtvView::Texture2DMSArray {
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Tex3D {
            mip_slice,
            first_w_slice,
            w_size,
        } => D3D12RtvView::Texture3D {
            mip_slice,
            first_w_slice,
            w_size,
        },
    };
    D3D12RenderTargetViewDesc { format, view }
}

/// Fails for 3D textures, which cannot be depth-stencil targets.
pub fn texture_view_desc_to_d3d12_dsv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> Result<D3D12DepthStencilViewDesc, Error> {
    debug_assert_eq!(desc.view_type, TextureViewType::DepthStencil);
    let (format, shape) = dsv_shape(desc, sample_count)?;
    let view = match shape {
        TargetShape::Tex1D { mip_slice } => D3D12DsvView::Texture1D { mip_slice },
        TargetShape::Tex1DArray { mip_slice, slices } => D3D12DsvView::Texture1DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Tex2D { mip_slice } => D3D12DsvView::Texture2D { mip_slice },
        TargetShape::Tex2DMS => D3D12DsvView::Texture2DMS,
        TargetShape::Tex2DArray { mip_slice, slices } => D3D12DsvView::Texture2DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Tex2DMSArray(slices) => D3D12DsvView::Texture2DMSArray {
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Unknown | TargetShape::Tex3D { .. } => D3D12DsvView::Unknown,
    };
    Ok(D3D12DepthStencilViewDesc {
        format,
        flags: DsvFlags::NONE,
        view,
    })
}

/// Unordered access views are never multisampled, so no sample count is needed.
pub fn texture_view_desc_to_d3d12_uav_desc(desc: &TextureViewDesc) -> D3D12UnorderedAccessViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::UnorderedAccess);
    let (format, shape) = uav_shape(desc);
    let view = match shape {
        TargetShape::Tex1D { mip_slice } => D3D12UavView::Texture1D { mip_slice },
        TargetShape::Tex1DArray { mip_slice, slices } => D3D12UavView::Texture1DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        TargetShape::Tex2D { mip_slice } => D3D12UavView::Texture2D {
            mip_slice,
            plane_slice: 0,
        },
        TargetShape::Tex2DArray { mip_slice, slices } => D3D12UavView::Texture2DArray {
            mip_slice,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
            plane_slice: 0,
        },
        TargetShape::Tex3D {
            mip_slice,
            first_w_slice,
            w_size,
        } => D3D12UavView::Texture3D {
            mip_slice,
            first_w_slice,
            w_size,
        },
        TargetShape::Unknown | TargetShape::Tex2DMS | TargetShape::Tex2DMSArray(_) => {
            D3D12UavView::Unknown
        }
    };
    D3D12UnorderedAccessViewDesc { format, view }
}

fn structure_byte_stride(buffer: &BufferDesc) -> u32 {
    if buffer.mode == BufferMode::Structured {
        buffer.element_byte_stride
    } else {
        0
    }
}

/// A shader resource view of a buffer.
///
/// Raw buffers viewed without a format become `R32_TYPELESS` views with the `RAW` flag.
pub fn buffer_view_desc_to_d3d12_srv_desc(
    buffer: &BufferDesc,
    view: &BufferViewDesc,
) -> Result<D3D12ShaderResourceViewDesc, Error> {
    debug_assert_eq!(view.view_type, BufferViewType::ShaderResource);
    debug_assert!(
        buffer.bind_flags.contains(BindFlags::SHADER_RESOURCE),
        "buffer was not created with the shader resource bind flag"
    );
    let layout = buffer_view_layout(buffer, view)?;
    let (format, flags) = if layout.raw {
        (DxgiFormat::R32_TYPELESS, BufferSrvFlags::RAW)
    } else {
        (layout.format, BufferSrvFlags::NONE)
    };
    Ok(D3D12ShaderResourceViewDesc {
        format,
        shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
        view: D3D12SrvView::Buffer {
            first_element: u64::from(layout.first_element),
            num_elements: layout.num_elements,
            structure_byte_stride: structure_byte_stride(buffer),
            flags,
        },
    })
}

/// An unordered access view of a buffer.  No counter is attached.
pub fn buffer_view_desc_to_d3d12_uav_desc(
    buffer: &BufferDesc,
    view: &BufferViewDesc,
) -> Result<D3D12UnorderedAccessViewDesc, Error> {
    debug_assert_eq!(view.view_type, BufferViewType::UnorderedAccess);
    debug_assert!(
        buffer.bind_flags.contains(BindFlags::UNORDERED_ACCESS),
        "buffer was not created with the unordered access bind flag"
    );
    let layout = buffer_view_layout(buffer, view)?;
    let (format, flags) = if layout.raw {
        (DxgiFormat::R32_TYPELESS, BufferUavFlags::RAW)
    } else {
        (layout.format, BufferUavFlags::NONE)
    };
    Ok(D3D12UnorderedAccessViewDesc {
        format,
        view: D3D12UavView::Buffer {
            first_element: u64::from(layout.first_element),
            num_elements: layout.num_elements,
            structure_byte_stride: structure_byte_stride(buffer),
            counter_offset_in_bytes: 0,
            flags,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::{TextureFormat, ValueType};
    use crate::views::{BufferFormat, ResourceDimension};

    fn texture_view(view_type: TextureViewType, dim: ResourceDimension) -> TextureViewDesc {
        TextureViewDesc {
            view_type,
            texture_dim: dim,
            format: TextureFormat::RGBA8UNorm,
            most_detailed_mip: 1,
            num_mip_levels: 3,
            first_array_slice: 6,
            num_array_slices: 12,
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn srv_cube_array() {
        let desc = texture_view_desc_to_d3d12_srv_desc(
            &texture_view(TextureViewType::ShaderResource, ResourceDimension::TexCubeArray),
            1,
        );
        assert_eq!(desc.view_dimension(), SrvDimension::TEXTURECUBEARRAY);
        assert_eq!(desc.format, DxgiFormat::R8G8B8A8_UNORM);
        assert_eq!(desc.shader_4_component_mapping, 0x1688);
        assert_eq!(
            desc.view,
            D3D12SrvView::TextureCubeArray {
                most_detailed_mip: 1,
                mip_levels: 3,
                first_2d_array_face: 6,
                num_cubes: 2,
                resource_min_lod_clamp: 0.0,
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn multisampled_views() {
        let srv = texture_view_desc_to_d3d12_srv_desc(
            &texture_view(TextureViewType::ShaderResource, ResourceDimension::Tex2D),
            4,
        );
        assert_eq!(srv.view, D3D12SrvView::Texture2DMS);
        let rtv = texture_view_desc_to_d3d12_rtv_desc(
            &texture_view(TextureViewType::RenderTarget, ResourceDimension::Tex2DArray),
            4,
        );
        assert_eq!(
            rtv.view,
            D3D12RtvView::Texture2DMSArray {
                first_array_slice: 6,
                array_size: 12
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rtv_3d_uses_depth_slices() {
        let rtv = texture_view_desc_to_d3d12_rtv_desc(
            &texture_view(TextureViewType::RenderTarget, ResourceDimension::Tex3D),
            1,
        );
        assert_eq!(rtv.view_dimension(), RtvDimension::TEXTURE3D);
        assert_eq!(
            rtv.view,
            D3D12RtvView::Texture3D {
                mip_slice: 1,
                first_w_slice: 6,
                w_size: 12
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn dsv() {
        let mut view = texture_view(TextureViewType::DepthStencil, ResourceDimension::Tex2D);
        view.format = TextureFormat::D32Float;
        let dsv = texture_view_desc_to_d3d12_dsv_desc(&view, 1).unwrap();
        assert_eq!(dsv.format, DxgiFormat::D32_FLOAT);
        assert_eq!(dsv.flags, DsvFlags::NONE);
        assert_eq!(dsv.view, D3D12DsvView::Texture2D { mip_slice: 1 });

        view.texture_dim = ResourceDimension::Tex3D;
        assert_eq!(
            texture_view_desc_to_d3d12_dsv_desc(&view, 1),
            Err(Error::DepthStencilViewOn3DTexture)
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn uav_cube_is_unknown() {
        let uav = texture_view_desc_to_d3d12_uav_desc(&texture_view(
            TextureViewType::UnorderedAccess,
            ResourceDimension::TexCube,
        ));
        assert_eq!(uav.view_dimension(), UavDimension::UNKNOWN);
        assert_eq!(uav.format, DxgiFormat::R8G8B8A8_UNORM);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn raw_buffer_views() {
        let buffer = BufferDesc {
            size_in_bytes: 256,
            bind_flags: BindFlags::SHADER_RESOURCE | BindFlags::UNORDERED_ACCESS,
            mode: BufferMode::Raw,
            element_byte_stride: 0,
        };
        let view = BufferViewDesc {
            view_type: BufferViewType::ShaderResource,
            format: BufferFormat::default(),
            byte_offset: 16,
            byte_width: 64,
        };
        let srv = buffer_view_desc_to_d3d12_srv_desc(&buffer, &view).unwrap();
        assert_eq!(srv.format, DxgiFormat::R32_TYPELESS);
        assert_eq!(
            srv.view,
            D3D12SrvView::Buffer {
                first_element: 4,
                num_elements: 16,
                structure_byte_stride: 0,
                flags: BufferSrvFlags::RAW,
            }
        );

        let uav_view = BufferViewDesc {
            view_type: BufferViewType::UnorderedAccess,
            byte_offset: 6,
            ..view
        };
        assert_eq!(
            buffer_view_desc_to_d3d12_uav_desc(&buffer, &uav_view),
            Err(Error::UnalignedBufferView {
                field: "offset",
                value: 6,
                stride: 4
            })
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn formatted_buffer_uav() {
        let buffer = BufferDesc {
            size_in_bytes: 1024,
            bind_flags: BindFlags::UNORDERED_ACCESS,
            mode: BufferMode::Formatted,
            element_byte_stride: 16,
        };
        let view = BufferViewDesc {
            view_type: BufferViewType::UnorderedAccess,
            format: BufferFormat {
                value_type: ValueType::Float32,
                num_components: 4,
                is_normalized: false,
            },
            byte_offset: 32,
            byte_width: 512,
        };
        let uav = buffer_view_desc_to_d3d12_uav_desc(&buffer, &view).unwrap();
        assert_eq!(uav.format, DxgiFormat::R32G32B32A32_FLOAT);
        assert_eq!(uav.view_dimension(), UavDimension::BUFFER);
        assert_eq!(
            uav.view,
            D3D12UavView::Buffer {
                first_element: 2,
                num_elements: 32,
                structure_byte_stride: 0,
                counter_offset_in_bytes: 0,
                flags: BufferUavFlags::NONE,
            }
        );
    }
}
