// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Direct3D 11 enumerations with no D3D12 counterpart.

use crate::imp::d3d::types::{SrvDimension, d3d_enum};

impl SrvDimension {
    /// `D3D11_SRV_DIMENSION_BUFFEREX`, the only way D3D11 exposes a raw buffer to shaders.
    pub const BUFFEREX: Self = Self(11);
}

d3d_enum! {
    /// `D3D11_BUFFEREX_SRV_FLAG`
    BufferExSrvFlags(u32) {
        NONE = 0,
        RAW = 1,
    }
}

d3d_enum! {
    /// `D3D11_BUFFER_UAV_FLAG`
    BufferUavFlags(u32) {
        NONE = 0,
        RAW = 1,
        APPEND = 2,
        COUNTER = 4,
    }
}

d3d_enum! {
    /// `D3D11_DSV_FLAG`
    DsvFlags(u32) {
        NONE = 0,
        READ_ONLY_DEPTH = 1,
        READ_ONLY_STENCIL = 2,
    }
}
