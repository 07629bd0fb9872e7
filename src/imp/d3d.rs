// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Vocabulary shared by the D3D11 and D3D12 backends.

pub mod adapter;
pub mod dxgi;
pub mod filter;
pub mod structured;
pub mod tables;
pub mod types;
pub(crate) mod views;
