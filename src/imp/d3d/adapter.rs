// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Adapter enumeration for the D3D backends.

Device creation itself is the caller's business.  An [`AdapterProbe`] answers whether a device of
a given API and feature level can be created on an adapter, and this module selects which
question to ask and turns DXGI adapter descriptions into [`AdapterInfo`].
*/

use crate::adapter::{
    AdapterInfo, AdapterType, DeviceType, FeatureLevel, vendor_id_to_adapter_vendor,
};
use crate::imp::d3d::types::D3dFeatureLevel;

pub const fn feature_level_to_d3d_feature_level(level: FeatureLevel) -> D3dFeatureLevel {
    match level {
        FeatureLevel::Level10_0 => D3dFeatureLevel::LEVEL_10_0,
        FeatureLevel::Level10_1 => D3dFeatureLevel::LEVEL_10_1,
        FeatureLevel::Level11_0 => D3dFeatureLevel::LEVEL_11_0,
        FeatureLevel::Level11_1 => D3dFeatureLevel::LEVEL_11_1,
        FeatureLevel::Level12_0 => D3dFeatureLevel::LEVEL_12_0,
        FeatureLevel::Level12_1 => D3dFeatureLevel::LEVEL_12_1,
    }
}

/// `DXGI_ADAPTER_FLAG_SOFTWARE`
pub const DXGI_ADAPTER_FLAG_SOFTWARE: u32 = 2;

/// The parts of `DXGI_ADAPTER_DESC1` the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DxgiAdapterDesc {
    pub description: String,
    pub vendor_id: u32,
    pub device_id: u32,
    pub dedicated_video_memory: u64,
    pub shared_system_memory: u64,
    pub flags: u32,
}

/// Output count is not part of the description; it starts at zero.
pub fn dxgi_adapter_desc_to_adapter_info(desc: &DxgiAdapterDesc) -> AdapterInfo {
    AdapterInfo {
        description: desc.description.clone(),
        adapter_type: if desc.flags & DXGI_ADAPTER_FLAG_SOFTWARE != 0 {
            AdapterType::Software
        } else {
            AdapterType::Hardware
        },
        vendor: vendor_id_to_adapter_vendor(desc.vendor_id),
        vendor_id: desc.vendor_id,
        device_id: desc.device_id,
        num_outputs: 0,
        device_local_memory: desc.dedicated_video_memory,
        host_visible_memory: desc.shared_system_memory,
        unified_memory: 0,
    }
}

/// Native device-creation checks, implemented by the caller.
pub trait AdapterProbe {
    type Adapter;

    fn can_create_d3d11_device(&self, adapter: &Self::Adapter, level: D3dFeatureLevel) -> bool;
    fn can_create_d3d12_device(&self, adapter: &Self::Adapter, level: D3dFeatureLevel) -> bool;
    fn adapter_desc(&self, adapter: &Self::Adapter) -> DxgiAdapterDesc;
    fn num_outputs(&self, adapter: &Self::Adapter) -> u32;
}

pub fn check_adapter_compatibility<P: AdapterProbe>(
    device_type: DeviceType,
    probe: &P,
    adapter: &P::Adapter,
    min_level: FeatureLevel,
) -> bool {
    let level = feature_level_to_d3d_feature_level(min_level);
    match device_type {
        DeviceType::D3D11 => probe.can_create_d3d11_device(adapter, level),
        DeviceType::D3D12 => probe.can_create_d3d12_device(adapter, level),
    }
}

/// Adapters that support `device_type` at `min_level` or above, in enumeration order.
pub fn find_compatible_adapters<P: AdapterProbe>(
    device_type: DeviceType,
    probe: &P,
    adapters: impl IntoIterator<Item = P::Adapter>,
    min_level: FeatureLevel,
) -> Vec<P::Adapter> {
    adapters
        .into_iter()
        .filter(|adapter| check_adapter_compatibility(device_type, probe, adapter, min_level))
        .collect()
}

/// [`AdapterInfo`] for each compatible adapter, with its output count filled in.
pub fn enumerate_adapters<P: AdapterProbe>(
    device_type: DeviceType,
    probe: &P,
    adapters: impl IntoIterator<Item = P::Adapter>,
    min_level: FeatureLevel,
) -> Vec<AdapterInfo> {
    find_compatible_adapters(device_type, probe, adapters, min_level)
        .iter()
        .map(|adapter| {
            let mut info = dxgi_adapter_desc_to_adapter_info(&probe.adapter_desc(adapter));
            info.num_outputs = probe.num_outputs(adapter);
            info
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AdapterVendor;

    /// Adapter `i` supports D3D11 up to `d3d11[i]` and D3D12 up to `d3d12[i]`.
    struct FakeProbe {
        d3d11: Vec<D3dFeatureLevel>,
        d3d12: Vec<D3dFeatureLevel>,
    }

    impl AdapterProbe for FakeProbe {
        type Adapter = usize;
        fn can_create_d3d11_device(&self, adapter: &usize, level: D3dFeatureLevel) -> bool {
            self.d3d11[*adapter].0 >= level.0
        }
        fn can_create_d3d12_device(&self, adapter: &usize, level: D3dFeatureLevel) -> bool {
            self.d3d12[*adapter].0 >= level.0
        }
        fn adapter_desc(&self, adapter: &usize) -> DxgiAdapterDesc {
            DxgiAdapterDesc {
                description: format!("adapter {adapter}"),
                vendor_id: 0x10DE,
                device_id: *adapter as u32,
                dedicated_video_memory: 8 << 30,
                shared_system_memory: 16 << 30,
                flags: if *adapter == 1 { DXGI_ADAPTER_FLAG_SOFTWARE } else { 0 },
            }
        }
        fn num_outputs(&self, adapter: &usize) -> u32 {
            *adapter as u32 + 1
        }
    }

    fn probe() -> FakeProbe {
        FakeProbe {
            d3d11: vec![D3dFeatureLevel::LEVEL_11_1, D3dFeatureLevel::LEVEL_10_0],
            d3d12: vec![D3dFeatureLevel(0), D3dFeatureLevel::LEVEL_12_0],
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn dispatches_on_device_type() {
        let probe = probe();
        assert_eq!(
            find_compatible_adapters(DeviceType::D3D11, &probe, 0..2, FeatureLevel::Level11_0),
            vec![0]
        );
        assert_eq!(
            find_compatible_adapters(DeviceType::D3D12, &probe, 0..2, FeatureLevel::Level11_0),
            vec![1]
        );
        assert!(find_compatible_adapters(DeviceType::D3D12, &probe, 0..2, FeatureLevel::Level12_1)
            .is_empty());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn adapter_info() {
        let infos = enumerate_adapters(DeviceType::D3D12, &probe(), 0..2, FeatureLevel::Level11_0);
        assert_eq!(infos.len(), 1);
        let info = &infos[0];
        assert_eq!(info.adapter_type, AdapterType::Software);
        assert_eq!(info.vendor, AdapterVendor::Nvidia);
        assert_eq!(info.device_id, 1);
        assert_eq!(info.num_outputs, 2);
        assert_eq!(info.device_local_memory, 8 << 30);
        assert_eq!(info.host_visible_memory, 16 << 30);
        assert_eq!(info.unified_memory, 0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn feature_level_values() {
        assert_eq!(feature_level_to_d3d_feature_level(FeatureLevel::Level10_0).0, 0xa000);
        assert_eq!(feature_level_to_d3d_feature_level(FeatureLevel::Level12_1).0, 0xc100);
    }
}
