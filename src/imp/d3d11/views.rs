// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
D3D11 view descriptors.

These are the D3D12 unions minus plane slices, minimum LOD clamps and component mappings.  Raw
buffers are read through the `BUFFEREX` member.
*/

use crate::imp::Error;
use crate::imp::d3d::dxgi::DxgiFormat;
use crate::imp::d3d::types::{DsvDimension, RtvDimension, SrvDimension, UavDimension};
use crate::imp::d3d::views::{
    SrvShape, TargetShape, buffer_view_layout, dsv_shape, rtv_shape, srv_shape, uav_shape,
};
use crate::imp::d3d11::types::{BufferExSrvFlags, BufferUavFlags, DsvFlags};
use crate::pixel_formats::ValueType;
use crate::views::{
    BindFlags, BufferDesc, BufferMode, BufferViewDesc, BufferViewType, TextureViewDesc,
    TextureViewType,
};

/// Raw shader resource views must start on a 16-byte boundary.
const RAW_OFFSET_ALIGNMENT: u32 = 16;

/// Union member of `D3D11_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D11SrvView {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
    },
    Texture1D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture1DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture2DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
    BufferEx {
        first_element: u32,
        num_elements: u32,
        flags: BufferExSrvFlags,
    },
}

/// `D3D11_SHADER_RESOURCE_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11ShaderResourceViewDesc {
    pub format: DxgiFormat,
    pub view: D3D11SrvView,
}

impl D3D11ShaderResourceViewDesc {
    pub fn view_dimension(&self) -> SrvDimension {
        match self.view {
            D3D11SrvView::Unknown => SrvDimension::UNKNOWN,
            D3D11SrvView::Buffer { .. } => SrvDimension::BUFFER,
            D3D11SrvView::Texture1D { .. } => SrvDimension::TEXTURE1D,
            D3D11SrvView::Texture1DArray { .. } => SrvDimension::TEXTURE1DARRAY,
            D3D11SrvView::Texture2D { .. } => SrvDimension::TEXTURE2D,
            D3D11SrvView::Texture2DArray { .. } => SrvDimension::TEXTURE2DARRAY,
            D3D11SrvView::Texture2DMS => SrvDimension::TEXTURE2DMS,
            D3D11SrvView::Texture2DMSArray { .. } => SrvDimension::TEXTURE2DMSARRAY,
            D3D11SrvView::Texture3D { .. } => SrvDimension::TEXTURE3D,
            D3D11SrvView::TextureCube { .. } => SrvDimension::TEXTURECUBE,
            D3D11SrvView::TextureCubeArray { .. } => SrvDimension::TEXTURECUBEARRAY,
            D3D11SrvView::BufferEx { .. } => SrvDimension::BUFFEREX,
        }
    }
}

/// Union member shared by `D3D11_RENDER_TARGET_VIEW_DESC`, `D3D11_DEPTH_STENCIL_VIEW_DESC` and
/// `D3D11_UNORDERED_ACCESS_VIEW_DESC` for textures.  Each view type only uses some members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D11TargetView {
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
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

impl From<TargetShape> for D3D11TargetView {
    fn from(shape: TargetShape) -> Self {
        match shape {
            TargetShape::Unknown => D3D11TargetView::Unknown,
            TargetShape::Tex1D { mip_slice } => D3D11TargetView::Texture1D { mip_slice },
            TargetShape::Tex1DArray { mip_slice, slices } => D3D11TargetView::Texture1DArray {
                mip_slice,
                first_array_slice: slices.first_array_slice,
                array_size: slices.array_size,
            },
            TargetShape::Tex2D { mip_slice } => D3D11TargetView::Texture2D { mip_slice },
            TargetShape::Tex2DMS => D3D11TargetView::Texture2DMS,
            TargetShape::Tex2DArray { mip_slice, slices } => D3D11TargetView::Texture2DArray {
                mip_slice,
                first_array_slice: slices.first_array_slice,
                array_size: slices.array_size,
            },
            TargetShape::Tex2DMSArray(slices) => D3D11TargetView::Texture2DMSArray {
                first_array_slice: slices.first_array_slice,
                array_size: slices.array_size,
            },
            TargetShape::Tex3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => D3D11TargetView::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            },
        }
    }
}

/// `D3D11_RENDER_TARGET_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11RenderTargetViewDesc {
    pub format: DxgiFormat,
    pub view: D3D11TargetView,
}

impl D3D11RenderTargetViewDesc {
    pub fn view_dimension(&self) -> RtvDimension {
        match self.view {
            D3D11TargetView::Unknown => RtvDimension::UNKNOWN,
            D3D11TargetView::Texture1D { .. } => RtvDimension::TEXTURE1D,
            D3D11TargetView::Texture1DArray { .. } => RtvDimension::TEXTURE1DARRAY,
            D3D11TargetView::Texture2D { .. } => RtvDimension::TEXTURE2D,
            D3D11TargetView::Texture2DArray { .. } => RtvDimension::TEXTURE2DARRAY,
            D3D11TargetView::Texture2DMS => RtvDimension::TEXTURE2DMS,
            D3D11TargetView::Texture2DMSArray { .. } => RtvDimension::TEXTURE2DMSARRAY,
            D3D11TargetView::Texture3D { .. } => RtvDimension::TEXTURE3D,
        }
    }
}

/// `D3D11_DEPTH_STENCIL_VIEW_DESC`.  Never holds [`D3D11TargetView::Texture3D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11DepthStencilViewDesc {
    pub format: DxgiFormat,
    pub flags: DsvFlags,
    pub view: D3D11TargetView,
}

impl D3D11DepthStencilViewDesc {
    pub fn view_dimension(&self) -> DsvDimension {
        match self.view {
            D3D11TargetView::Texture1D { .. } => DsvDimension::TEXTURE1D,
            D3D11TargetView::Texture1DArray { .. } => DsvDimension::TEXTURE1DARRAY,
            D3D11TargetView::Texture2D { .. } => DsvDimension::TEXTURE2D,
            D3D11TargetView::Texture2DArray { .. } => DsvDimension::TEXTURE2DARRAY,
            D3D11TargetView::Texture2DMS => DsvDimension::TEXTURE2DMS,
            D3D11TargetView::Texture2DMSArray { .. } => DsvDimension::TEXTURE2DMSARRAY,
            D3D11TargetView::Unknown | D3D11TargetView::Texture3D { .. } => DsvDimension::UNKNOWN,
        }
    }
}

/// Union member of `D3D11_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum D3D11UavView {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
        flags: BufferUavFlags,
    },
    Texture(D3D11TargetView),
}

/// `D3D11_UNORDERED_ACCESS_VIEW_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct D3D11UnorderedAccessViewDesc {
    pub format: DxgiFormat,
    pub view: D3D11UavView,
}

impl D3D11UnorderedAccessViewDesc {
    pub fn view_dimension(&self) -> UavDimension {
        match self.view {
            D3D11UavView::Unknown => UavDimension::UNKNOWN,
            D3D11UavView::Buffer { .. } => UavDimension::BUFFER,
            D3D11UavView::Texture(view) => match view {
                D3D11TargetView::Texture1D { .. } => UavDimension::TEXTURE1D,
                D3D11TargetView::Texture1DArray { .. } => UavDimension::TEXTURE1DARRAY,
                D3D11TargetView::Texture2D { .. } => UavDimension::TEXTURE2D,
                D3D11TargetView::Texture2DArray { .. } => UavDimension::TEXTURE2DARRAY,
                D3D11TargetView::Texture3D { .. } => UavDimension::TEXTURE3D,
                D3D11TargetView::Unknown
                | D3D11TargetView::Texture2DMS
                | D3D11TargetView::Texture2DMSArray { .. } => UavDimension::UNKNOWN,
            },
        }
    }
}

pub fn texture_view_desc_to_d3d11_srv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> D3D11ShaderResourceViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::ShaderResource);
    let (format, shape) = srv_shape(desc, sample_count);
    let view = match shape {
        SrvShape::Unknown => D3D11SrvView::Unknown,
        SrvShape::Tex1D(mips) => D3D11SrvView::Texture1D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
        },
        SrvShape::Tex1DArray(mips, slices) => D3D11SrvView::Texture1DArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        SrvShape::Tex2D(mips) => D3D11SrvView::Texture2D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
        },
        SrvShape::Tex2DMS => D3D11SrvView::Texture2DMS,
        SrvShape::Tex2DArray(mips, slices) => D3D11SrvView::Texture2DArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        SrvShape::Tex2DMSArray(slices) => D3D11SrvView::Texture2DMSArray {
            first_array_slice: slices.first_array_slice,
            array_size: slices.array_size,
        },
        SrvShape::Tex3D(mips) => D3D11SrvView::Texture3D {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
        },
        SrvShape::TexCube(mips) => D3D11SrvView::TextureCube {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
        },
        SrvShape::TexCubeArray {
            mips,
            first_2d_array_face,
            num_cubes,
        } => D3D11SrvView::TextureCubeArray {
            most_detailed_mip: mips.most_detailed_mip,
            mip_levels: mips.mip_levels,
            first_2d_array_face,
            num_cubes,
        },
    };
    D3D11ShaderResourceViewDesc { format, view }
}

pub fn texture_view_desc_to_d3d11_rtv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> D3D11RenderTargetViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::RenderTarget);
    let (format, shape) = rtv_shape(desc, sample_count);
    D3D11RenderTargetViewDesc {
        format,
        view: shape.into(),
    }
}

/// Fails for 3D textures.
pub fn texture_view_desc_to_d3d11_dsv_desc(
    desc: &TextureViewDesc,
    sample_count: u32,
) -> Result<D3D11DepthStencilViewDesc, Error> {
    debug_assert_eq!(desc.view_type, TextureViewType::DepthStencil);
    let (format, shape) = dsv_shape(desc, sample_count)?;
    Ok(D3D11DepthStencilViewDesc {
        format,
        flags: DsvFlags::NONE,
        view: shape.into(),
    })
}

pub fn texture_view_desc_to_d3d11_uav_desc(desc: &TextureViewDesc) -> D3D11UnorderedAccessViewDesc {
    debug_assert_eq!(desc.view_type, TextureViewType::UnorderedAccess);
    let (format, shape) = uav_shape(desc);
    let view = match shape {
        TargetShape::Unknown | TargetShape::Tex2DMS | TargetShape::Tex2DMSArray(_) => {
            D3D11UavView::Unknown
        }
        shape => D3D11UavView::Texture(shape.into()),
    };
    D3D11UnorderedAccessViewDesc { format, view }
}

/// A shader resource view of a buffer.
///
/// A raw buffer viewed without a format becomes a `BUFFEREX` view of 32-bit words.  Its byte offset
/// must be a multiple of 16 and its width a multiple of 4.
///
/// ```
/// # #[cfg(feature = "backend_d3d11")] {
/// use states_and_views::Error;
/// use states_and_views::d3d11::buffer_view_desc_to_d3d11_srv_desc;
/// use states_and_views::views::{BindFlags, BufferDesc, BufferMode, BufferViewDesc, BufferViewType};
///
/// let buffer = BufferDesc {
///     size_in_bytes: 256,
///     bind_flags: BindFlags::SHADER_RESOURCE,
///     mode: BufferMode::Raw,
///     element_byte_stride: 0,
/// };
/// let view = BufferViewDesc {
///     view_type: BufferViewType::ShaderResource,
///     byte_offset: 8,
///     byte_width: 64,
///     ..BufferViewDesc::default()
/// };
/// assert_eq!(
///     buffer_view_desc_to_d3d11_srv_desc(&buffer, &view),
///     Err(Error::UnalignedRawBufferOffset { offset: 8 })
/// );
/// # }
/// ```
pub fn buffer_view_desc_to_d3d11_srv_desc(
    buffer: &BufferDesc,
    view: &BufferViewDesc,
) -> Result<D3D11ShaderResourceViewDesc, Error> {
    debug_assert_eq!(view.view_type, BufferViewType::ShaderResource);
    debug_assert!(
        buffer.bind_flags.contains(BindFlags::SHADER_RESOURCE),
        "buffer was not created with the shader resource bind flag"
    );
    if buffer.mode == BufferMode::Raw && view.format.value_type == ValueType::Undefined {
        if view.byte_offset % RAW_OFFSET_ALIGNMENT != 0 {
            logwise::error_sync!(
                "Byte offset ({offset}) is not multiple of 16",
                offset = view.byte_offset
            );
            return Err(Error::UnalignedRawBufferOffset {
                offset: view.byte_offset,
            });
        }
        // The shared layout checks the width against the word size.
        let layout = buffer_view_layout(buffer, view)?;
        return Ok(D3D11ShaderResourceViewDesc {
            format: DxgiFormat::R32_TYPELESS,
            view: D3D11SrvView::BufferEx {
                first_element: layout.first_element,
                num_elements: layout.num_elements,
                flags: BufferExSrvFlags::RAW,
            },
        });
    }
    let layout = buffer_view_layout(buffer, view)?;
    Ok(D3D11ShaderResourceViewDesc {
        format: layout.format,
        view: D3D11SrvView::Buffer {
            first_element: layout.first_element,
            num_elements: layout.num_elements,
        },
    })
}

pub fn buffer_view_desc_to_d3d11_uav_desc(
    buffer: &BufferDesc,
    view: &BufferViewDesc,
) -> Result<D3D11UnorderedAccessViewDesc, Error> {
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
    Ok(D3D11UnorderedAccessViewDesc {
        format,
        view: D3D11UavView::Buffer {
            first_element: layout.first_element,
            num_elements: layout.num_elements,
            flags,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::TextureFormat;
    use crate::views::{BufferFormat, ResourceDimension};

    fn texture_view(view_type: TextureViewType, dim: ResourceDimension) -> TextureViewDesc {
        TextureViewDesc {
            view_type,
            texture_dim: dim,
            format: TextureFormat::RGBA8UNorm,
            most_detailed_mip: 0,
            num_mip_levels: 4,
            first_array_slice: 2,
            num_array_slices: 3,
        }
    }

    fn raw_buffer() -> BufferDesc {
        BufferDesc {
            size_in_bytes: 512,
            bind_flags: BindFlags::SHADER_RESOURCE | BindFlags::UNORDERED_ACCESS,
            mode: BufferMode::Raw,
            element_byte_stride: 0,
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn srv_2d_array() {
        let srv = texture_view_desc_to_d3d11_srv_desc(
            &texture_view(TextureViewType::ShaderResource, ResourceDimension::Tex2DArray),
            1,
        );
        assert_eq!(srv.view_dimension(), SrvDimension::TEXTURE2DARRAY);
        assert_eq!(
            srv.view,
            D3D11SrvView::Texture2DArray {
                most_detailed_mip: 0,
                mip_levels: 4,
                first_array_slice: 2,
                array_size: 3,
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn target_views() {
        let rtv = texture_view_desc_to_d3d11_rtv_desc(
            &texture_view(TextureViewType::RenderTarget, ResourceDimension::Tex2D),
            8,
        );
        assert_eq!(rtv.view_dimension(), RtvDimension::TEXTURE2DMS);

        let mut depth = texture_view(TextureViewType::DepthStencil, ResourceDimension::Tex1DArray);
        depth.format = TextureFormat::D24UNormS8UInt;
        let dsv = texture_view_desc_to_d3d11_dsv_desc(&depth, 1).unwrap();
        assert_eq!(dsv.format, DxgiFormat::D24_UNORM_S8_UINT);
        assert_eq!(dsv.view_dimension(), DsvDimension::TEXTURE1DARRAY);

        depth.texture_dim = ResourceDimension::Tex3D;
        assert_eq!(
            texture_view_desc_to_d3d11_dsv_desc(&depth, 1),
            Err(Error::DepthStencilViewOn3DTexture)
        );

        let uav = texture_view_desc_to_d3d11_uav_desc(&texture_view(
            TextureViewType::UnorderedAccess,
            ResourceDimension::Tex3D,
        ));
        assert_eq!(uav.view_dimension(), UavDimension::TEXTURE3D);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn raw_srv_uses_bufferex() {
        let view = BufferViewDesc {
            view_type: BufferViewType::ShaderResource,
            format: BufferFormat::default(),
            byte_offset: 32,
            byte_width: 128,
        };
        let srv = buffer_view_desc_to_d3d11_srv_desc(&raw_buffer(), &view).unwrap();
        assert_eq!(srv.format, DxgiFormat::R32_TYPELESS);
        assert_eq!(srv.view_dimension(), SrvDimension::BUFFEREX);
        assert_eq!(
            srv.view,
            D3D11SrvView::BufferEx {
                first_element: 8,
                num_elements: 32,
                flags: BufferExSrvFlags::RAW,
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn raw_srv_alignment() {
        let view = BufferViewDesc {
            view_type: BufferViewType::ShaderResource,
            format: BufferFormat::default(),
            byte_offset: 20,
            byte_width: 128,
        };
        assert_eq!(
            buffer_view_desc_to_d3d11_srv_desc(&raw_buffer(), &view),
            Err(Error::UnalignedRawBufferOffset { offset: 20 })
        );
        let view = BufferViewDesc {
            byte_offset: 16,
            byte_width: 10,
            ..view
        };
        assert_eq!(
            buffer_view_desc_to_d3d11_srv_desc(&raw_buffer(), &view),
            Err(Error::UnalignedBufferView {
                field: "width",
                value: 10,
                stride: 4
            })
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn raw_uav_does_not_need_16_byte_offset() {
        let view = BufferViewDesc {
            view_type: BufferViewType::UnorderedAccess,
            format: BufferFormat::default(),
            byte_offset: 4,
            byte_width: 8,
        };
        let uav = buffer_view_desc_to_d3d11_uav_desc(&raw_buffer(), &view).unwrap();
        assert_eq!(
            uav.view,
            D3D11UavView::Buffer {
                first_element: 1,
                num_elements: 2,
                flags: BufferUavFlags::RAW,
            }
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn structured_srv() {
        let buffer = BufferDesc {
            size_in_bytes: 1024,
            bind_flags: BindFlags::SHADER_RESOURCE,
            mode: BufferMode::Structured,
            element_byte_stride: 32,
        };
        let view = BufferViewDesc {
            view_type: BufferViewType::ShaderResource,
            format: BufferFormat::default(),
            byte_offset: 64,
            byte_width: 320,
        };
        let srv = buffer_view_desc_to_d3d11_srv_desc(&buffer, &view).unwrap();
        assert_eq!(srv.format, DxgiFormat::UNKNOWN);
        assert_eq!(
            srv.view,
            D3D11SrvView::Buffer {
                first_element: 2,
                num_elements: 10
            }
        );
    }
}
