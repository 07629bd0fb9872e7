// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
D3D12 query objects.

A [`Query`] owns one heap slot, or two for a duration query, from a shared [`QueryManager`].
Recording the begin and end markers is the command list's job; the query only remembers which
fence value must complete before its resolved data may be read.
*/

use crate::imp::Error;
use crate::imp::d3d12::query_manager::QueryManager;
use crate::imp::d3d12::queries::query_type_to_d3d12_query_type;
use crate::imp::d3d12::types::D3D12QueryType;
use crate::queries::duration::TimestampQuery;
use crate::queries::{QueryData, QueryDesc, QueryType};
use std::sync::Arc;

#[derive(Debug)]
pub struct Query {
    manager: Arc<QueryManager>,
    desc: QueryDesc,
    heap_indices: Vec<u32>,
    end_fence_value: Option<u64>,
}

impl Query {
    /// Takes heap slots from `manager`.  Nothing is allocated if any slot is unavailable.
    pub fn new(manager: &Arc<QueryManager>, desc: QueryDesc) -> Result<Self, Error> {
        let query_type = desc.query_type;
        let count = query_type.backend_query_count();
        let mut heap_indices = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match manager.allocate(query_type) {
                Some(index) => heap_indices.push(index),
                None => {
                    for index in heap_indices {
                        manager.release(query_type, index);
                    }
                    logwise::warn_sync!(
                        "Failed to allocate D3D12 query for type {query_type}. Increase the query pool size in the engine create info.",
                        query_type = query_type.name()
                    );
                    return Err(Error::QueryPoolExhausted { query_type });
                }
            }
        }
        Ok(Query {
            manager: manager.clone(),
            desc,
            heap_indices,
            end_fence_value: None,
        })
    }

    pub fn desc(&self) -> &QueryDesc {
        &self.desc
    }

    pub fn d3d12_query_type(&self) -> D3D12QueryType {
        query_type_to_d3d12_query_type(self.desc.query_type)
    }

    /// Heap slot written by the begin marker.  For a duration query this is the start timestamp.
    pub fn begin_heap_index(&self) -> u32 {
        self.heap_indices[0]
    }

    /// Heap slot written and resolved by the end marker.
    pub fn end_heap_index(&self) -> u32 {
        self.heap_indices[self.heap_indices.len() - 1]
    }

    /// Starts a new measurement, discarding any earlier one.  Timestamps have no begin marker.
    pub fn begin(&mut self) {
        debug_assert_ne!(
            self.desc.query_type,
            QueryType::Timestamp,
            "timestamp queries are only ended"
        );
        self.end_fence_value = None;
    }

    /// Data is ready once the queue's completed fence value reaches `fence_value`.
    pub fn end(&mut self, fence_value: u64) {
        self.end_fence_value = Some(fence_value);
    }

    /// Forgets the last measurement.
    pub fn invalidate(&mut self) {
        self.end_fence_value = None;
    }

    /// The measurement, or `None` while the GPU has not finished it or if the query was never
    /// ended.
    pub fn get_data(
        &self,
        completed_fence_value: u64,
        resolve_buffer: &[u8],
        timestamp_frequency: u64,
    ) -> Option<QueryData> {
        let end_fence_value = self.end_fence_value?;
        if completed_fence_value < end_fence_value {
            return None;
        }
        let query_type = self.desc.query_type;
        let read = |index| self.manager.read_query_data(query_type, index, resolve_buffer);
        match query_type {
            QueryType::Occlusion => Some(QueryData::Occlusion {
                num_samples: read(self.heap_indices[0])?,
            }),
            // The low bit is 0 or 1 and the rest are zero.
            QueryType::BinaryOcclusion => Some(QueryData::BinaryOcclusion {
                any_sample_passed: read(self.heap_indices[0])? != 0,
            }),
            QueryType::Timestamp => Some(QueryData::Timestamp {
                counter: read(self.heap_indices[0])?,
                frequency: timestamp_frequency,
            }),
            QueryType::PipelineStatistics => self
                .manager
                .read_pipeline_statistics(self.heap_indices[0], resolve_buffer)
                .map(QueryData::PipelineStatistics),
            QueryType::Duration => {
                let start = read(self.heap_indices[0])?;
                let end = read(self.heap_indices[1])?;
                Some(QueryData::Duration {
                    duration: end.wrapping_sub(start),
                    frequency: timestamp_frequency,
                })
            }
            QueryType::Undefined => {
                logwise::error_sync!("Unexpected query type");
                None
            }
        }
    }
}

impl Drop for Query {
    fn drop(&mut self) {
        for index in &self.heap_indices {
            self.manager.release(self.desc.query_type, *index);
        }
    }
}

/// The parts of a command queue a query reads from.
pub trait QueryQueue {
    /// Fence value the next submission will signal.
    fn next_fence_value(&self) -> u64;
    fn completed_fence_value(&self) -> u64;
    /// Ticks per second, from `ID3D12CommandQueue::GetTimestampFrequency`.
    fn timestamp_frequency(&self) -> u64;
    /// Calls `read` with the mapped resolve buffer.
    fn with_resolve_buffer<R>(&self, read: impl FnOnce(&[u8]) -> R) -> R;
}

/// A timestamp [`Query`] bound to the queue it is submitted on.
#[derive(Debug)]
pub struct QueuedQuery<C> {
    query: Query,
    queue: C,
}

impl<C: QueryQueue> QueuedQuery<C> {
    pub fn new(query: Query, queue: C) -> Self {
        debug_assert_eq!(query.desc().query_type, QueryType::Timestamp);
        QueuedQuery { query, queue }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl<C: QueryQueue> TimestampQuery for QueuedQuery<C> {
    fn end(&mut self) {
        let fence_value = self.queue.next_fence_value();
        self.query.end(fence_value);
    }

    fn timestamp(&mut self) -> Option<(u64, u64)> {
        let completed = self.queue.completed_fence_value();
        let frequency = self.queue.timestamp_frequency();
        let data = self
            .queue
            .with_resolve_buffer(|buffer| self.query.get_data(completed, buffer, frequency))?;
        match data {
            QueryData::Timestamp { counter, frequency } => Some((counter, frequency)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryPoolSizes;

    fn manager() -> Arc<QueryManager> {
        Arc::new(QueryManager::new(&QueryPoolSizes::new([0, 1, 1, 2, 1, 1])))
    }

    fn write(manager: &QueryManager, buffer: &mut [u8], query_type: QueryType, index: u32, value: u64) {
        let offset = manager.resolve_offset(query_type, index).unwrap() as usize;
        buffer[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn duration_owns_two_slots() {
        let manager = manager();
        let query = Query::new(&manager, QueryDesc::new(QueryType::Duration, "frame")).unwrap();
        assert_eq!(manager.outstanding(QueryType::Duration), 2);
        assert_ne!(query.begin_heap_index(), query.end_heap_index());
        assert_eq!(query.d3d12_query_type(), D3D12QueryType::TIMESTAMP);
        drop(query);
        assert_eq!(manager.outstanding(QueryType::Duration), 0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn exhaustion_rolls_back() {
        let manager = manager();
        let held = Query::new(&manager, QueryDesc::new(QueryType::Occlusion, "a")).unwrap();
        assert_eq!(
            Query::new(&manager, QueryDesc::new(QueryType::Occlusion, "b")).err(),
            Some(Error::QueryPoolExhausted {
                query_type: QueryType::Occlusion
            })
        );
        assert_eq!(manager.outstanding(QueryType::Occlusion), 1);
        drop(held);
        assert!(Query::new(&manager, QueryDesc::new(QueryType::Occlusion, "c")).is_ok());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn data_waits_for_fence() {
        let manager = manager();
        let mut buffer = vec![0u8; manager.resolve_buffer_size() as usize];
        let mut query = Query::new(&manager, QueryDesc::new(QueryType::Duration, "d")).unwrap();
        write(&manager, &mut buffer, QueryType::Duration, query.begin_heap_index(), 100);
        write(&manager, &mut buffer, QueryType::Duration, query.end_heap_index(), 350);

        assert_eq!(query.get_data(10, &buffer, 1000), None);
        query.begin();
        query.end(5);
        assert_eq!(query.get_data(4, &buffer, 1000), None);
        let data = query.get_data(5, &buffer, 1000).unwrap();
        assert_eq!(
            data,
            QueryData::Duration {
                duration: 250,
                frequency: 1000
            }
        );
        assert_eq!(data.duration_seconds(), Some(0.25));
        query.invalidate();
        assert_eq!(query.get_data(5, &buffer, 1000), None);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn binary_occlusion() {
        let manager = manager();
        let mut buffer = vec![0u8; manager.resolve_buffer_size() as usize];
        let mut query =
            Query::new(&manager, QueryDesc::new(QueryType::BinaryOcclusion, "b")).unwrap();
        write(&manager, &mut buffer, QueryType::BinaryOcclusion, query.end_heap_index(), 1);
        query.begin();
        query.end(1);
        assert_eq!(
            query.get_data(1, &buffer, 0),
            Some(QueryData::BinaryOcclusion {
                any_sample_passed: true
            })
        );
    }
}
