// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Direct3D enumerations shared by D3D11 and D3D12.

The two APIs number these identically, so one newtype serves both.  Zero is never a valid value
for the translated enums; conversions return it when they reject their input.
*/

use crate::imp::d3d::dxgi::DxgiFormat;
use std::ops::BitOr;

/// Declares a transparent newtype over a native enum with its named values.
macro_rules! d3d_enum {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $($(#[$value_meta:meta])* $value:ident = $number:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $($(#[$value_meta])* pub const $value: Self = Self($number);)*
        }
    };
}
pub(crate) use d3d_enum;

/// `BOOL`
pub type Bool = i32;
pub const TRUE: Bool = 1;
pub const FALSE: Bool = 0;

pub const fn bool_to_d3d_bool(value: bool) -> Bool {
    if value { TRUE } else { FALSE }
}

d3d_enum! {
    /// `D3D12_COMPARISON_FUNC` / `D3D11_COMPARISON_FUNC`
    ComparisonFunc(i32) {
        NEVER = 1,
        LESS = 2,
        EQUAL = 3,
        LESS_EQUAL = 4,
        GREATER = 5,
        NOT_EQUAL = 6,
        GREATER_EQUAL = 7,
        ALWAYS = 8,
    }
}

d3d_enum! {
    /// `D3D12_TEXTURE_ADDRESS_MODE` / `D3D11_TEXTURE_ADDRESS_MODE`
    TextureAddressMode(i32) {
        WRAP = 1,
        MIRROR = 2,
        CLAMP = 3,
        BORDER = 4,
        MIRROR_ONCE = 5,
    }
}

d3d_enum! {
    /// `D3D12_FILTER` / `D3D11_FILTER`
    ///
    /// Bits 4, 2 and 0 select linear min, mag and mip filtering.  `0x55` is anisotropic.
    /// Bits 7 and 8 hold the reduction: standard, comparison, minimum or maximum.
    Filter(i32) {
        MIN_MAG_MIP_POINT = 0,
        MIN_MAG_POINT_MIP_LINEAR = 0x1,
        MIN_POINT_MAG_LINEAR_MIP_POINT = 0x4,
        MIN_POINT_MAG_MIP_LINEAR = 0x5,
        MIN_LINEAR_MAG_MIP_POINT = 0x10,
        MIN_LINEAR_MAG_POINT_MIP_LINEAR = 0x11,
        MIN_MAG_LINEAR_MIP_POINT = 0x14,
        MIN_MAG_MIP_LINEAR = 0x15,
        ANISOTROPIC = 0x55,
        COMPARISON_MIN_MAG_MIP_POINT = 0x80,
        COMPARISON_MIN_MAG_MIP_LINEAR = 0x95,
        COMPARISON_ANISOTROPIC = 0xd5,
        MINIMUM_MIN_MAG_MIP_POINT = 0x100,
        MINIMUM_ANISOTROPIC = 0x155,
        MAXIMUM_MIN_MAG_MIP_POINT = 0x180,
        MAXIMUM_ANISOTROPIC = 0x1d5,
    }
}

d3d_enum! {
    /// `D3D12_FILL_MODE` / `D3D11_FILL_MODE`
    FillMode(i32) {
        WIREFRAME = 2,
        SOLID = 3,
    }
}

d3d_enum! {
    /// `D3D12_CULL_MODE` / `D3D11_CULL_MODE`
    CullMode(i32) {
        NONE = 1,
        FRONT = 2,
        BACK = 3,
    }
}

d3d_enum! {
    /// `D3D12_BLEND` / `D3D11_BLEND`
    Blend(i32) {
        ZERO = 1,
        ONE = 2,
        SRC_COLOR = 3,
        INV_SRC_COLOR = 4,
        SRC_ALPHA = 5,
        INV_SRC_ALPHA = 6,
        DEST_ALPHA = 7,
        INV_DEST_ALPHA = 8,
        DEST_COLOR = 9,
        INV_DEST_COLOR = 10,
        SRC_ALPHA_SAT = 11,
        BLEND_FACTOR = 14,
        INV_BLEND_FACTOR = 15,
        SRC1_COLOR = 16,
        INV_SRC1_COLOR = 17,
        SRC1_ALPHA = 18,
        INV_SRC1_ALPHA = 19,
    }
}

d3d_enum! {
    /// `D3D12_BLEND_OP` / `D3D11_BLEND_OP`
    BlendOp(i32) {
        ADD = 1,
        SUBTRACT = 2,
        REV_SUBTRACT = 3,
        MIN = 4,
        MAX = 5,
    }
}

d3d_enum! {
    /// `D3D12_STENCIL_OP` / `D3D11_STENCIL_OP`
    StencilOp(i32) {
        KEEP = 1,
        ZERO = 2,
        REPLACE = 3,
        INCR_SAT = 4,
        DECR_SAT = 5,
        INVERT = 6,
        INCR = 7,
        DECR = 8,
    }
}

d3d_enum! {
    /// `D3D12_DEPTH_WRITE_MASK` / `D3D11_DEPTH_WRITE_MASK`
    DepthWriteMask(i32) {
        ZERO = 0,
        ALL = 1,
    }
}

d3d_enum! {
    /// `D3D_PRIMITIVE_TOPOLOGY`
    ///
    /// Patch lists with `n` control points are `CONTROL_POINT_PATCHLIST_1 + n - 1`.
    PrimitiveTopology(i32) {
        UNDEFINED = 0,
        POINTLIST = 1,
        LINELIST = 2,
        LINESTRIP = 3,
        TRIANGLELIST = 4,
        TRIANGLESTRIP = 5,
        CONTROL_POINT_PATCHLIST_1 = 33,
        CONTROL_POINT_PATCHLIST_32 = 64,
    }
}

d3d_enum! {
    /// `D3D12_INPUT_CLASSIFICATION` / `D3D11_INPUT_CLASSIFICATION`
    InputClassification(i32) {
        PER_VERTEX_DATA = 0,
        PER_INSTANCE_DATA = 1,
    }
}

d3d_enum! {
    /// `D3D12_COLOR_WRITE_ENABLE` / `D3D11_COLOR_WRITE_ENABLE`
    ColorWriteEnable(u8) {
        RED = 1,
        GREEN = 2,
        BLUE = 4,
        ALPHA = 8,
        ALL = 0xF,
    }
}

impl BitOr for ColorWriteEnable {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

d3d_enum! {
    /// `D3D_FEATURE_LEVEL`
    D3dFeatureLevel(u32) {
        LEVEL_10_0 = 0xa000,
        LEVEL_10_1 = 0xa100,
        LEVEL_11_0 = 0xb000,
        LEVEL_11_1 = 0xb100,
        LEVEL_12_0 = 0xc000,
        LEVEL_12_1 = 0xc100,
    }
}

d3d_enum! {
    /// `D3D_SRV_DIMENSION`
    SrvDimension(i32) {
        UNKNOWN = 0,
        BUFFER = 1,
        TEXTURE1D = 2,
        TEXTURE1DARRAY = 3,
        TEXTURE2D = 4,
        TEXTURE2DARRAY = 5,
        TEXTURE2DMS = 6,
        TEXTURE2DMSARRAY = 7,
        TEXTURE3D = 8,
        TEXTURECUBE = 9,
        TEXTURECUBEARRAY = 10,
    }
}

d3d_enum! {
    /// `D3D12_RTV_DIMENSION` / `D3D11_RTV_DIMENSION`
    RtvDimension(i32) {
        UNKNOWN = 0,
        BUFFER = 1,
        TEXTURE1D = 2,
        TEXTURE1DARRAY = 3,
        TEXTURE2D = 4,
        TEXTURE2DARRAY = 5,
        TEXTURE2DMS = 6,
        TEXTURE2DMSARRAY = 7,
        TEXTURE3D = 8,
    }
}

d3d_enum! {
    /// `D3D12_DSV_DIMENSION` / `D3D11_DSV_DIMENSION`
    DsvDimension(i32) {
        UNKNOWN = 0,
        TEXTURE1D = 1,
        TEXTURE1DARRAY = 2,
        TEXTURE2D = 3,
        TEXTURE2DARRAY = 4,
        TEXTURE2DMS = 5,
        TEXTURE2DMSARRAY = 6,
    }
}

d3d_enum! {
    /// `D3D12_UAV_DIMENSION` / `D3D11_UAV_DIMENSION`
    UavDimension(i32) {
        UNKNOWN = 0,
        BUFFER = 1,
        TEXTURE1D = 2,
        TEXTURE1DARRAY = 3,
        TEXTURE2D = 4,
        TEXTURE2DARRAY = 5,
        TEXTURE3D = 8,
    }
}

/// `D3D12_DEPTH_STENCILOP_DESC` / `D3D11_DEPTH_STENCILOP_DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DepthStencilOpDesc {
    pub stencil_fail_op: StencilOp,
    pub stencil_depth_fail_op: StencilOp,
    pub stencil_pass_op: StencilOp,
    pub stencil_func: ComparisonFunc,
}

/// `D3D12_INPUT_ELEMENT_DESC` / `D3D11_INPUT_ELEMENT_DESC`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InputElementDesc {
    pub semantic_name: String,
    pub semantic_index: u32,
    pub format: DxgiFormat,
    pub input_slot: u32,
    /// `D3D12_APPEND_ALIGNED_ELEMENT` (`0xFFFFFFFF`) asks the runtime to pack the element.
    pub aligned_byte_offset: u32,
    pub input_slot_class: InputClassification,
    pub instance_data_step_rate: u32,
}
