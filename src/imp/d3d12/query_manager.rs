// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Query heap slot allocation.

The device owns one query heap per query type and a single readback buffer that every query
resolves into.  [`QueryManager`] tracks which heap slots are free and where each slot's data lands
in the resolve buffer.  Creating the native heaps and buffer is the device's job; it sizes them
with [`QueryManager::heap_count`] and [`QueryManager::resolve_buffer_size`].

Slots are handed out first-in first-out, so a freshly released slot is reused as late as
possible.
*/

use crate::bittricks::align_up;
use crate::config::QueryPoolSizes;
use crate::imp::d3d12::queries::query_type_to_d3d12_query_heap_type;
use crate::imp::d3d12::types::D3D12QueryHeapType;
use crate::queries::{PipelineStatistics, QueryType};
use std::collections::VecDeque;
use std::fmt::Write;
use wasm_safe_mutex::Mutex;

/// Offsets passed to `ResolveQueryData` must be multiples of this.
pub const RESOLVE_BUFFER_ALIGNMENT: u32 = 8;

/// Size of `D3D12_QUERY_DATA_PIPELINE_STATISTICS`.
pub const PIPELINE_STATISTICS_DATA_SIZE: u32 = 11 * 8;

/// Bytes one query resolves to.
pub fn query_data_size(query_type: QueryType) -> u32 {
    match query_type {
        QueryType::Occlusion
        | QueryType::BinaryOcclusion
        | QueryType::Timestamp
        | QueryType::Duration => 8,
        QueryType::PipelineStatistics => PIPELINE_STATISTICS_DATA_SIZE,
        QueryType::Undefined => {
            logwise::error_sync!("Unexpected query type");
            0
        }
    }
}

const QUERY_TYPES: [QueryType; QueryType::NUM_TYPES] = [
    QueryType::Undefined,
    QueryType::Occlusion,
    QueryType::BinaryOcclusion,
    QueryType::Timestamp,
    QueryType::PipelineStatistics,
    QueryType::Duration,
];

#[derive(Debug)]
struct HeapInfo {
    heap_type: D3D12QueryHeapType,
    heap_count: u32,
    resolve_offsets: Vec<u32>,
}

struct FreeList {
    available: VecDeque<u32>,
    max_allocated: u32,
}

/// Query heap bookkeeping for one device.
///
/// `Send + Sync`; allocation and release may happen on any thread.
pub struct QueryManager {
    heaps: Vec<HeapInfo>,
    free_lists: Mutex<Vec<FreeList>>,
    resolve_buffer_size: u32,
}

impl QueryManager {
    /// Lays out one heap per query type.
    ///
    /// Duration heaps hold two timestamps per pool entry.
    pub fn new(pool_sizes: &QueryPoolSizes) -> Self {
        let mut resolve_buffer_size = 0;
        let mut heaps = Vec::with_capacity(QueryType::NUM_TYPES);
        let mut free_lists = Vec::with_capacity(QueryType::NUM_TYPES);
        for query_type in QUERY_TYPES {
            if query_type == QueryType::Undefined {
                heaps.push(HeapInfo {
                    heap_type: D3D12QueryHeapType(-1),
                    heap_count: 0,
                    resolve_offsets: Vec::new(),
                });
                free_lists.push(FreeList {
                    available: VecDeque::new(),
                    max_allocated: 0,
                });
                continue;
            }
            let heap_count = pool_sizes.get(query_type) * query_type.backend_query_count();
            let aligned_size = align_up(query_data_size(query_type), RESOLVE_BUFFER_ALIGNMENT);
            let resolve_offsets = (0..heap_count)
                .map(|i| resolve_buffer_size + i * aligned_size)
                .collect();
            resolve_buffer_size += heap_count * aligned_size;
            heaps.push(HeapInfo {
                heap_type: query_type_to_d3d12_query_heap_type(query_type),
                heap_count,
                resolve_offsets,
            });
            free_lists.push(FreeList {
                available: (0..heap_count).collect(),
                max_allocated: 0,
            });
        }
        QueryManager {
            heaps,
            free_lists: Mutex::new(free_lists),
            resolve_buffer_size,
        }
    }

    pub fn heap_type(&self, query_type: QueryType) -> D3D12QueryHeapType {
        self.heap(query_type)
            .map_or(D3D12QueryHeapType(-1), |heap| heap.heap_type)
    }

    /// Number of entries in the native heap for `query_type`.
    pub fn heap_count(&self, query_type: QueryType) -> u32 {
        self.heap(query_type).map_or(0, |heap| heap.heap_count)
    }

    /// Size in bytes of the readback buffer all queries resolve into.
    pub fn resolve_buffer_size(&self) -> u32 {
        self.resolve_buffer_size
    }

    /// Where slot `index` of `query_type` resolves to, or `None` if the heap has no such slot.
    pub fn resolve_offset(&self, query_type: QueryType, index: u32) -> Option<u32> {
        let offset = self
            .heap(query_type)?
            .resolve_offsets
            .get(index as usize)
            .copied();
        if offset.is_none() {
            logwise::error_sync!(
                "{query_type} query index {index} is out of range [0, {count})",
                query_type = query_type.name(),
                index = index,
                count = self.heap_count(query_type)
            );
        }
        offset
    }

    fn heap(&self, query_type: QueryType) -> Option<&HeapInfo> {
        let heap = self.heaps.get(query_type as usize);
        if heap.is_none() {
            let query_type_u8 = query_type as u8;
            logwise::error_sync!(
                "No query heap for query type ({query_type})",
                query_type = query_type_u8
            );
        }
        heap
    }

    /// Takes a free slot, or `None` when the pool is exhausted.
    pub fn allocate(&self, query_type: QueryType) -> Option<u32> {
        let heap_count = self.heap_count(query_type);
        let mut free_lists = self.free_lists.lock_sync();
        let free_list = free_lists.get_mut(query_type as usize)?;
        let index = free_list.available.pop_front()?;
        let allocated = heap_count - free_list.available.len() as u32;
        free_list.max_allocated = free_list.max_allocated.max(allocated);
        logwise::trace_sync!(
            "Allocated {query_type} query {index}",
            query_type = query_type.name(),
            index = index
        );
        Some(index)
    }

    /// Returns a slot taken by [`allocate`](Self::allocate).
    pub fn release(&self, query_type: QueryType, index: u32) {
        if index >= self.heap_count(query_type) {
            logwise::error_sync!(
                "Released {query_type} query index {index} is out of range",
                query_type = query_type.name(),
                index = index
            );
            return;
        }
        let mut free_lists = self.free_lists.lock_sync();
        let Some(free_list) = free_lists.get_mut(query_type as usize) else {
            return;
        };
        debug_assert!(
            !free_list.available.contains(&index),
            "query index {index} is already in the available list"
        );
        free_list.available.push_back(index);
        logwise::trace_sync!(
            "Released {query_type} query {index}",
            query_type = query_type.name(),
            index = index
        );
    }

    /// Slots of `query_type` currently handed out.
    pub fn outstanding(&self, query_type: QueryType) -> u32 {
        let free_lists = self.free_lists.lock_sync();
        let available = free_lists
            .get(query_type as usize)
            .map_or(0, |free_list| free_list.available.len() as u32);
        self.heap_count(query_type) - available
    }

    fn resolved_bytes<'a>(
        &self,
        query_type: QueryType,
        index: u32,
        resolve_buffer: &'a [u8],
    ) -> Option<&'a [u8]> {
        let offset = self.resolve_offset(query_type, index)? as usize;
        let size = query_data_size(query_type) as usize;
        let bytes = resolve_buffer.get(offset..offset + size);
        if bytes.is_none() {
            logwise::error_sync!(
                "Resolve buffer of {len} bytes does not hold query data at offset {offset}",
                len = resolve_buffer.len(),
                offset = offset
            );
        }
        bytes
    }

    /// The 64-bit value slot `index` resolved to.
    ///
    /// Not for pipeline statistics; see [`read_pipeline_statistics`](Self::read_pipeline_statistics).
    pub fn read_query_data(
        &self,
        query_type: QueryType,
        index: u32,
        resolve_buffer: &[u8],
    ) -> Option<u64> {
        debug_assert_ne!(query_type, QueryType::PipelineStatistics);
        let bytes = self.resolved_bytes(query_type, index, resolve_buffer)?;
        let bytes: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
        Some(u64::from_le_bytes(bytes))
    }

    /// Decodes a resolved `D3D12_QUERY_DATA_PIPELINE_STATISTICS`.
    pub fn read_pipeline_statistics(
        &self,
        index: u32,
        resolve_buffer: &[u8],
    ) -> Option<PipelineStatistics> {
        let bytes = self.resolved_bytes(QueryType::PipelineStatistics, index, resolve_buffer)?;
        let mut counters = [0u64; 11];
        for (counter, chunk) in counters.iter_mut().zip(bytes.chunks_exact(8)) {
            let chunk: [u8; 8] = chunk.try_into().ok()?;
            *counter = u64::from_le_bytes(chunk);
        }
        let [
            ia_vertices,
            ia_primitives,
            vs_invocations,
            gs_invocations,
            gs_primitives,
            c_invocations,
            c_primitives,
            ps_invocations,
            hs_invocations,
            ds_invocations,
            cs_invocations,
        ] = counters;
        Some(PipelineStatistics {
            input_vertices: ia_vertices,
            input_primitives: ia_primitives,
            gs_primitives,
            clipping_invocations: c_invocations,
            clipping_primitives: c_primitives,
            vs_invocations,
            gs_invocations,
            ps_invocations,
            hs_invocations,
            ds_invocations,
            cs_invocations,
        })
    }
}

impl std::fmt::Debug for QueryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryManager")
            .field("heaps", &self.heaps)
            .field("resolve_buffer_size", &self.resolve_buffer_size)
            .finish_non_exhaustive()
    }
}

impl Drop for QueryManager {
    fn drop(&mut self) {
        let free_lists = self.free_lists.lock_sync();
        let mut report = String::from("D3D12 query manager peak usage:");
        for query_type in QueryType::ALL {
            let heap_count = self.heap_count(query_type);
            let Some(free_list) = free_lists.get(query_type as usize) else {
                continue;
            };
            let outstanding = heap_count - free_list.available.len() as u32;
            if outstanding == 1 {
                logwise::error_sync!(
                    "One query of type {query_type} has not been returned to the query manager",
                    query_type = query_type.name()
                );
            } else if outstanding > 1 {
                logwise::error_sync!(
                    "{outstanding} queries of type {query_type} have not been returned to the query manager",
                    outstanding = outstanding,
                    query_type = query_type.name()
                );
            }
            let _ = write!(
                report,
                "\n{:<30}: {:>4}/{:>4}",
                query_type.name(),
                free_list.max_allocated,
                heap_count
            );
        }
        logwise::info_sync!("{report}", report = logwise::privacy::LogIt(&report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pools() -> QueryPoolSizes {
        QueryPoolSizes::new([0, 2, 1, 3, 2, 2])
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn layout() {
        let manager = QueryManager::new(&small_pools());
        assert_eq!(manager.heap_count(QueryType::Duration), 4);
        assert_eq!(manager.heap_count(QueryType::Timestamp), 3);
        assert_eq!(manager.heap_type(QueryType::Duration), D3D12QueryHeapType::TIMESTAMP);
        assert_eq!(
            manager.heap_type(QueryType::BinaryOcclusion),
            D3D12QueryHeapType::OCCLUSION
        );
        // 2 + 1 + 3 occlusion/binary/timestamp slots, 2 statistics slots, 4 duration slots.
        assert_eq!(manager.resolve_buffer_size(), 6 * 8 + 2 * 88 + 4 * 8);
        assert_eq!(manager.resolve_offset(QueryType::Occlusion, 1), Some(8));
        assert_eq!(manager.resolve_offset(QueryType::BinaryOcclusion, 0), Some(16));
        assert_eq!(manager.resolve_offset(QueryType::PipelineStatistics, 1), Some(48 + 88));
        assert_eq!(manager.resolve_offset(QueryType::Duration, 0), Some(48 + 176));
        for query_type in QueryType::ALL {
            for i in 0..manager.heap_count(query_type) {
                assert_eq!(manager.resolve_offset(query_type, i).unwrap() % 8, 0);
            }
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn allocation_is_fifo() {
        let manager = QueryManager::new(&small_pools());
        assert_eq!(manager.allocate(QueryType::Occlusion), Some(0));
        assert_eq!(manager.allocate(QueryType::Occlusion), Some(1));
        assert_eq!(manager.allocate(QueryType::Occlusion), None);
        manager.release(QueryType::Occlusion, 0);
        assert_eq!(manager.outstanding(QueryType::Occlusion), 1);
        assert_eq!(manager.allocate(QueryType::Occlusion), Some(0));
        manager.release(QueryType::Occlusion, 1);
        manager.release(QueryType::Occlusion, 0);
        assert_eq!(manager.allocate(QueryType::Occlusion), Some(1));
        manager.release(QueryType::Occlusion, 1);
        assert_eq!(manager.outstanding(QueryType::Occlusion), 0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn reads_resolved_data() {
        let manager = QueryManager::new(&small_pools());
        let mut buffer = vec![0u8; manager.resolve_buffer_size() as usize];
        let offset = manager.resolve_offset(QueryType::Timestamp, 2).unwrap() as usize;
        buffer[offset..offset + 8].copy_from_slice(&1234u64.to_le_bytes());
        assert_eq!(
            manager.read_query_data(QueryType::Timestamp, 2, &buffer),
            Some(1234)
        );

        let offset = manager.resolve_offset(QueryType::PipelineStatistics, 0).unwrap() as usize;
        for i in 0..11u64 {
            let at = offset + i as usize * 8;
            buffer[at..at + 8].copy_from_slice(&(i + 1).to_le_bytes());
        }
        let stats = manager.read_pipeline_statistics(0, &buffer).unwrap();
        assert_eq!(stats.input_vertices, 1);
        assert_eq!(stats.vs_invocations, 3);
        assert_eq!(stats.gs_primitives, 5);
        assert_eq!(stats.clipping_invocations, 6);
        assert_eq!(stats.ps_invocations, 8);
        assert_eq!(stats.cs_invocations, 11);

        assert_eq!(manager.read_query_data(QueryType::Timestamp, 2, &buffer[..8]), None);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn out_of_range_slots() {
        let manager = QueryManager::new(&small_pools());
        assert_eq!(manager.resolve_offset(QueryType::Undefined, 0), None);
        assert_eq!(manager.resolve_offset(QueryType::Timestamp, 3), None);
        assert_eq!(manager.heap_count(QueryType::Undefined), 0);
        assert_eq!(manager.heap_type(QueryType::Undefined), D3D12QueryHeapType(-1));
        let buffer = vec![0u8; manager.resolve_buffer_size() as usize];
        assert_eq!(manager.read_query_data(QueryType::Timestamp, 3, &buffer), None);

        manager.release(QueryType::Timestamp, 7);
        assert_eq!(manager.outstanding(QueryType::Timestamp), 0);
        for i in 0..3 {
            assert_eq!(manager.allocate(QueryType::Timestamp), Some(i));
        }
        assert_eq!(manager.allocate(QueryType::Timestamp), None);
        for i in 0..3 {
            manager.release(QueryType::Timestamp, i);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "already in the available list")]
    fn double_release_asserts() {
        let manager = std::mem::ManuallyDrop::new(QueryManager::new(&small_pools()));
        manager.release(QueryType::Timestamp, 0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn manager_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryManager>();
    }
}
