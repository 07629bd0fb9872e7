// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture and buffer view descriptions.
//!
//! A view selects part of a resource (a mip range, an array range, a byte range) and the way a
//! pipeline binds it.  Views are described here without reference to any backend; the backend
//! modules build their native descriptors from these, e.g.
//! [`crate::d3d12::texture_view_desc_to_d3d12_srv_desc`].
//!
//! # Examples
//!
//! ```
//! use states_and_views::pixel_formats::TextureFormat;
//! use states_and_views::views::{ResourceDimension, TextureViewDesc, TextureViewType};
//!
//! // Every face of the second and third cube in a cube array.
//! let view = TextureViewDesc {
//!     view_type: TextureViewType::ShaderResource,
//!     texture_dim: ResourceDimension::TexCubeArray,
//!     format: TextureFormat::RGBA8UNorm,
//!     num_mip_levels: 1,
//!     first_array_slice: 6,
//!     num_array_slices: 12,
//!     ..TextureViewDesc::default()
//! };
//! assert_eq!(view.num_array_slices / 6, 2);
//! ```

use crate::pixel_formats::{TextureFormat, ValueType};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// The shape of a resource.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceDimension {
    #[default]
    Undefined = 0,
    Buffer,
    Tex1D,
    Tex1DArray,
    /// Multisampled when the texture's sample count is greater than one.
    Tex2D,
    Tex2DArray,
    Tex3D,
    TexCube,
    TexCubeArray,
}

impl ResourceDimension {
    /// Every texture dimension.
    pub const TEXTURES: [ResourceDimension; 7] = [
        ResourceDimension::Tex1D,
        ResourceDimension::Tex1DArray,
        ResourceDimension::Tex2D,
        ResourceDimension::Tex2DArray,
        ResourceDimension::Tex3D,
        ResourceDimension::TexCube,
        ResourceDimension::TexCubeArray,
    ];
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureViewType {
    #[default]
    Undefined = 0,
    ShaderResource,
    RenderTarget,
    DepthStencil,
    UnorderedAccess,
}

/// Ways a resource may be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BindFlags(u32);

impl BindFlags {
    pub const NONE: Self = Self(0);
    pub const VERTEX_BUFFER: Self = Self(0x1);
    pub const INDEX_BUFFER: Self = Self(0x2);
    pub const UNIFORM_BUFFER: Self = Self(0x4);
    pub const SHADER_RESOURCE: Self = Self(0x8);
    pub const STREAM_OUTPUT: Self = Self(0x10);
    pub const RENDER_TARGET: Self = Self(0x20);
    pub const DEPTH_STENCIL: Self = Self(0x40);
    pub const UNORDERED_ACCESS: Self = Self(0x80);
    pub const INDIRECT_DRAW_ARGS: Self = Self(0x100);
    pub const INPUT_ATTACHMENT: Self = Self(0x200);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for BindFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BindFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BindFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A view of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureViewDesc {
    pub view_type: TextureViewType,
    pub texture_dim: ResourceDimension,
    pub format: TextureFormat,
    /// First mip visible to the view.  Render target, depth-stencil and unordered access
    /// views address exactly this mip.
    pub most_detailed_mip: u32,
    pub num_mip_levels: u32,
    /// First array slice, or first depth slice for a 3D texture.
    pub first_array_slice: u32,
    /// Array slice count, or depth slice count for a 3D texture.  Cube arrays use a multiple of 6.
    pub num_array_slices: u32,
}

impl TextureViewDesc {
    pub const fn first_depth_slice(&self) -> u32 {
        self.first_array_slice
    }

    pub const fn num_depth_slices(&self) -> u32 {
        self.num_array_slices
    }
}

/// How a buffer's contents are interpreted by views.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferMode {
    #[default]
    Undefined = 0,
    /// Elements of a typed format.
    Formatted,
    /// Elements of a fixed-size structure.
    Structured,
    /// Untyped 32-bit words, optionally viewed through a format.
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferDesc {
    pub size_in_bytes: u64,
    pub bind_flags: BindFlags,
    pub mode: BufferMode,
    /// Size of one element for formatted and structured buffers.
    pub element_byte_stride: u32,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferViewType {
    #[default]
    Undefined = 0,
    ShaderResource,
    UnorderedAccess,
}

/// Element format of a formatted buffer view.
///
/// A raw buffer viewed with an `Undefined` value type is a typeless 32-bit view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferFormat {
    pub value_type: ValueType,
    pub num_components: u32,
    pub is_normalized: bool,
}

impl Default for BufferFormat {
    fn default() -> Self {
        BufferFormat {
            value_type: ValueType::Undefined,
            num_components: 0,
            is_normalized: true,
        }
    }
}

/// A view of a byte range of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferViewDesc {
    pub view_type: BufferViewType,
    pub format: BufferFormat,
    /// Must be a multiple of the element stride.
    pub byte_offset: u32,
    /// Must be a multiple of the element stride.
    pub byte_width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn bind_flags_compose() {
        let flags = BindFlags::SHADER_RESOURCE | BindFlags::DEPTH_STENCIL;
        assert_eq!(flags.bits(), 0x48);
        assert!(flags.contains(BindFlags::DEPTH_STENCIL));
        assert!(!flags.contains(BindFlags::RENDER_TARGET));
        assert!(BindFlags::default().is_empty());
    }
}
