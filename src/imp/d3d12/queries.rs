// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Query type and query heap type mapping.
//!
//! Duration queries are pairs of timestamps, so they use the timestamp query and heap types.
//! Binary occlusion queries live in occlusion heaps.

use crate::imp::d3d12::types::{D3D12QueryHeapType, D3D12QueryType};
use crate::queries::QueryType;

/// `Undefined` logs an error and returns `D3D12QueryType(-1)`.
pub fn query_type_to_d3d12_query_type(query_type: QueryType) -> D3D12QueryType {
    match query_type {
        QueryType::Occlusion => D3D12QueryType::OCCLUSION,
        QueryType::BinaryOcclusion => D3D12QueryType::BINARY_OCCLUSION,
        QueryType::Timestamp | QueryType::Duration => D3D12QueryType::TIMESTAMP,
        QueryType::PipelineStatistics => D3D12QueryType::PIPELINE_STATISTICS,
        QueryType::Undefined => {
            logwise::error_sync!("Unexpected query type");
            D3D12QueryType(-1)
        }
    }
}

/// `Undefined` logs an error and returns `D3D12QueryHeapType(-1)`.
pub fn query_type_to_d3d12_query_heap_type(query_type: QueryType) -> D3D12QueryHeapType {
    match query_type {
        QueryType::Occlusion | QueryType::BinaryOcclusion => D3D12QueryHeapType::OCCLUSION,
        QueryType::Timestamp | QueryType::Duration => D3D12QueryHeapType::TIMESTAMP,
        QueryType::PipelineStatistics => D3D12QueryHeapType::PIPELINE_STATISTICS,
        QueryType::Undefined => {
            logwise::error_sync!("Unexpected query type");
            D3D12QueryHeapType(-1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn duration_is_timestamp() {
        assert_eq!(
            query_type_to_d3d12_query_type(QueryType::Duration),
            query_type_to_d3d12_query_type(QueryType::Timestamp)
        );
        assert_eq!(
            query_type_to_d3d12_query_heap_type(QueryType::Duration),
            query_type_to_d3d12_query_heap_type(QueryType::Timestamp)
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn binary_occlusion_shares_heap() {
        assert_eq!(
            query_type_to_d3d12_query_type(QueryType::BinaryOcclusion),
            D3D12QueryType::BINARY_OCCLUSION
        );
        assert_eq!(
            query_type_to_d3d12_query_heap_type(QueryType::BinaryOcclusion),
            D3D12QueryHeapType::OCCLUSION
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn every_type_maps() {
        for t in QueryType::ALL {
            assert!(query_type_to_d3d12_query_type(t).0 >= 0);
            assert!(query_type_to_d3d12_query_heap_type(t).0 >= 0);
        }
        assert_eq!(query_type_to_d3d12_query_type(QueryType::Undefined).0, -1);
        assert_eq!(query_type_to_d3d12_query_heap_type(QueryType::Undefined).0, -1);
    }
}
