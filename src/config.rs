// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Engine creation settings.

use crate::adapter::FeatureLevel;
use crate::queries::QueryType;

/// Let the backend pick the adapter.
pub const DEFAULT_ADAPTER_ID: u32 = 0xFFFF_FFFF;

/// Capacity of each query pool, indexed by [`QueryType`].
///
/// A duration query occupies two slots of the duration pool's backend heap, but counts once here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryPoolSizes([u32; QueryType::NUM_TYPES]);

impl QueryPoolSizes {
    pub const fn new(sizes: [u32; QueryType::NUM_TYPES]) -> Self {
        QueryPoolSizes(sizes)
    }

    pub const fn get(&self, query_type: QueryType) -> u32 {
        self.0[query_type as usize]
    }

    pub fn set(&mut self, query_type: QueryType, size: u32) {
        self.0[query_type as usize] = size;
    }

    pub fn with(mut self, query_type: QueryType, size: u32) -> Self {
        self.set(query_type, size);
        self
    }
}

impl Default for QueryPoolSizes {
    fn default() -> Self {
        // Undefined is ignored.
        QueryPoolSizes([0, 128, 128, 512, 128, 256])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineD3D12CreateInfo {
    pub adapter_id: u32,
    pub minimum_feature_level: FeatureLevel,
    pub query_pool_sizes: QueryPoolSizes,
}

impl Default for EngineD3D12CreateInfo {
    fn default() -> Self {
        EngineD3D12CreateInfo {
            adapter_id: DEFAULT_ADAPTER_ID,
            minimum_feature_level: FeatureLevel::Level11_0,
            query_pool_sizes: QueryPoolSizes::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineD3D11CreateInfo {
    pub adapter_id: u32,
    pub minimum_feature_level: FeatureLevel,
}

impl Default for EngineD3D11CreateInfo {
    fn default() -> Self {
        EngineD3D11CreateInfo {
            adapter_id: DEFAULT_ADAPTER_ID,
            minimum_feature_level: FeatureLevel::Level11_0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn default_pool_sizes() {
        let sizes = QueryPoolSizes::default();
        assert_eq!(sizes.get(QueryType::Undefined), 0);
        assert_eq!(sizes.get(QueryType::Timestamp), 512);
        assert_eq!(sizes.get(QueryType::Duration), 256);
        let sizes = sizes.with(QueryType::Occlusion, 4);
        assert_eq!(sizes.get(QueryType::Occlusion), 4);
    }
}
