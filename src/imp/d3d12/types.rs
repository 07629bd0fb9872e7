// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Direct3D 12 enumerations with no D3D11 counterpart.

use crate::imp::d3d::types::d3d_enum;
use std::fmt::{Debug, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// `D3D12_RESOURCE_STATES`
///
/// `COMMON` and `PRESENT` are both zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct D3D12ResourceStates(pub u32);

impl D3D12ResourceStates {
    pub const COMMON: Self = Self(0);
    pub const VERTEX_AND_CONSTANT_BUFFER: Self = Self(0x1);
    pub const INDEX_BUFFER: Self = Self(0x2);
    pub const RENDER_TARGET: Self = Self(0x4);
    pub const UNORDERED_ACCESS: Self = Self(0x8);
    pub const DEPTH_WRITE: Self = Self(0x10);
    pub const DEPTH_READ: Self = Self(0x20);
    pub const NON_PIXEL_SHADER_RESOURCE: Self = Self(0x40);
    pub const PIXEL_SHADER_RESOURCE: Self = Self(0x80);
    pub const STREAM_OUT: Self = Self(0x100);
    pub const INDIRECT_ARGUMENT: Self = Self(0x200);
    pub const COPY_DEST: Self = Self(0x400);
    pub const COPY_SOURCE: Self = Self(0x800);
    pub const RESOLVE_DEST: Self = Self(0x1000);
    pub const RESOLVE_SOURCE: Self = Self(0x2000);
    pub const PRESENT: Self = Self(0);
    pub const GENERIC_READ: Self = Self(0xAC3);

    /// Highest single-bit state.  The reverse conversion table is sized from it.
    pub const MAX_BIT: Self = Self::RESOLVE_SOURCE;

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Debug for D3D12ResourceStates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "D3D12ResourceStates({:#x})", self.0)
    }
}

impl BitOr for D3D12ResourceStates {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for D3D12ResourceStates {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

d3d_enum! {
    /// `D3D12_LOGIC_OP`
    LogicOp(i32) {
        CLEAR = 0,
        SET = 1,
        COPY = 2,
        COPY_INVERTED = 3,
        NOOP = 4,
        INVERT = 5,
        AND = 6,
        NAND = 7,
        OR = 8,
        NOR = 9,
        XOR = 10,
        EQUIV = 11,
        AND_REVERSE = 12,
        AND_INVERTED = 13,
        OR_REVERSE = 14,
        OR_INVERTED = 15,
    }
}

d3d_enum! {
    /// `D3D12_CONSERVATIVE_RASTERIZATION_MODE`
    ConservativeRasterizationMode(i32) {
        OFF = 0,
        ON = 1,
    }
}

d3d_enum! {
    /// `D3D12_STATIC_BORDER_COLOR`
    StaticBorderColor(i32) {
        TRANSPARENT_BLACK = 0,
        OPAQUE_BLACK = 1,
        OPAQUE_WHITE = 2,
    }
}

d3d_enum! {
    /// `D3D12_SHADER_VISIBILITY`
    ShaderVisibility(i32) {
        ALL = 0,
        VERTEX = 1,
        HULL = 2,
        DOMAIN = 3,
        GEOMETRY = 4,
        PIXEL = 5,
    }
}

d3d_enum! {
    /// `D3D12_QUERY_TYPE`
    ///
    /// Conversions return `-1` for queries that have no D3D12 type.
    D3D12QueryType(i32) {
        OCCLUSION = 0,
        BINARY_OCCLUSION = 1,
        TIMESTAMP = 2,
        PIPELINE_STATISTICS = 3,
    }
}

d3d_enum! {
    /// `D3D12_QUERY_HEAP_TYPE`
    ///
    /// Conversions return `-1` for queries that have no heap.
    D3D12QueryHeapType(i32) {
        OCCLUSION = 0,
        TIMESTAMP = 1,
        PIPELINE_STATISTICS = 2,
    }
}

d3d_enum! {
    /// `D3D12_RENDER_PASS_BEGINNING_ACCESS_TYPE`
    BeginningAccessType(i32) {
        DISCARD = 0,
        PRESERVE = 1,
        CLEAR = 2,
        NO_ACCESS = 3,
    }
}

d3d_enum! {
    /// `D3D12_RENDER_PASS_ENDING_ACCESS_TYPE`
    EndingAccessType(i32) {
        DISCARD = 0,
        PRESERVE = 1,
        RESOLVE = 2,
        NO_ACCESS = 3,
    }
}

d3d_enum! {
    /// `D3D12_BUFFER_SRV_FLAGS`
    BufferSrvFlags(u32) {
        NONE = 0,
        RAW = 1,
    }
}

d3d_enum! {
    /// `D3D12_BUFFER_UAV_FLAGS`
    BufferUavFlags(u32) {
        NONE = 0,
        RAW = 1,
    }
}

d3d_enum! {
    /// `D3D12_DSV_FLAGS`
    DsvFlags(u32) {
        NONE = 0,
        READ_ONLY_DEPTH = 1,
        READ_ONLY_STENCIL = 2,
    }
}

/// `D3D12_DEFAULT_SHADER_4_COMPONENT_MAPPING`: each component reads its own channel.
pub const DEFAULT_SHADER_4_COMPONENT_MAPPING: u32 = 0x1688;
