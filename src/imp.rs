// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Backend selection.  D3D11 and D3D12 share most of their vocabulary through `d3d`.

mod error;

pub use error::Error;

#[cfg(any(feature = "backend_d3d12", feature = "backend_d3d11"))]
pub(crate) mod d3d;

#[cfg(feature = "backend_d3d12")]
pub mod d3d12;

#[cfg(feature = "backend_d3d11")]
pub mod d3d11;
