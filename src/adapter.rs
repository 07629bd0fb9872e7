// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Graphics adapters.
//!
//! An adapter is a physical or software GPU.  This module describes adapters in backend-neutral
//! terms; the D3D backends fill [`AdapterInfo`] from DXGI and check whether an adapter can run
//! a device at a given [`FeatureLevel`].

/// Direct3D feature level.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FeatureLevel {
    Level10_0,
    Level10_1,
    #[default]
    Level11_0,
    Level11_1,
    Level12_0,
    Level12_1,
}

impl FeatureLevel {
    pub const ALL: [FeatureLevel; 6] = [
        FeatureLevel::Level10_0,
        FeatureLevel::Level10_1,
        FeatureLevel::Level11_0,
        FeatureLevel::Level11_1,
        FeatureLevel::Level12_0,
        FeatureLevel::Level12_1,
    ];
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdapterVendor {
    #[default]
    Unknown = 0,
    Nvidia,
    Amd,
    Intel,
    Arm,
    Qualcomm,
    ImgTech,
    Msft,
}

/// Maps a PCI vendor id to a known vendor.
///
/// ```
/// use states_and_views::adapter::{vendor_id_to_adapter_vendor, AdapterVendor};
/// assert_eq!(vendor_id_to_adapter_vendor(0x10DE), AdapterVendor::Nvidia);
/// assert_eq!(vendor_id_to_adapter_vendor(0xFFFF), AdapterVendor::Unknown);
/// ```
pub const fn vendor_id_to_adapter_vendor(vendor_id: u32) -> AdapterVendor {
    match vendor_id {
        0x1002 => AdapterVendor::Amd,
        0x10DE => AdapterVendor::Nvidia,
        0x8086 => AdapterVendor::Intel,
        0x13B5 => AdapterVendor::Arm,
        0x5143 => AdapterVendor::Qualcomm,
        0x1010 => AdapterVendor::ImgTech,
        0x1414 => AdapterVendor::Msft,
        _ => AdapterVendor::Unknown,
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdapterType {
    #[default]
    Unknown = 0,
    Software,
    Hardware,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AdapterInfo {
    pub description: String,
    pub adapter_type: AdapterType,
    pub vendor: AdapterVendor,
    pub vendor_id: u32,
    pub device_id: u32,
    pub num_outputs: u32,
    /// Bytes of memory only the GPU can access.
    pub device_local_memory: u64,
    /// Bytes of system memory the GPU can access.
    pub host_visible_memory: u64,
    /// Bytes of memory shared between CPU and GPU on unified architectures.
    pub unified_memory: u64,
}

/// The kind of device an adapter is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    D3D11,
    D3D12,
}
