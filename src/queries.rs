// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! GPU queries.
//!
//! A query measures something on the GPU between a begin and an end marker, or at a single
//! point for timestamps.  Results arrive asynchronously; callers poll rather than wait.
//!
//! A [`QueryType::Duration`] query is not a native concept on D3D backends.  It is built from
//! two timestamp queries whose counters are subtracted.  [`duration::DurationQueryHelper`]
//! does the same thing one level up, pairing independent timestamp queries over several frames.

pub mod duration;

/// Kind of GPU query.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[default]
    Undefined = 0,
    /// Number of samples that passed the depth and stencil tests.
    Occlusion = 1,
    /// Whether any sample passed the depth and stencil tests.
    BinaryOcclusion = 2,
    /// GPU counter value at the end marker.
    Timestamp = 3,
    PipelineStatistics = 4,
    /// GPU counter difference between the begin and end markers.
    Duration = 5,
}

impl QueryType {
    /// Number of query types, including `Undefined`.  Arrays indexed by query type use this length.
    pub const NUM_TYPES: usize = QueryType::Duration as usize + 1;

    pub const ALL: [QueryType; Self::NUM_TYPES - 1] = [
        QueryType::Occlusion,
        QueryType::BinaryOcclusion,
        QueryType::Timestamp,
        QueryType::PipelineStatistics,
        QueryType::Duration,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            QueryType::Undefined => "QUERY_TYPE_UNDEFINED",
            QueryType::Occlusion => "QUERY_TYPE_OCCLUSION",
            QueryType::BinaryOcclusion => "QUERY_TYPE_BINARY_OCCLUSION",
            QueryType::Timestamp => "QUERY_TYPE_TIMESTAMP",
            QueryType::PipelineStatistics => "QUERY_TYPE_PIPELINE_STATISTICS",
            QueryType::Duration => "QUERY_TYPE_DURATION",
        }
    }

    /// Backend queries needed for one engine query.
    pub const fn backend_query_count(self) -> u32 {
        match self {
            QueryType::Duration => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryDesc {
    pub query_type: QueryType,
    pub name: String,
}

impl QueryDesc {
    pub fn new(query_type: QueryType, name: impl Into<String>) -> Self {
        QueryDesc {
            query_type,
            name: name.into(),
        }
    }
}

/// Pipeline statistics counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineStatistics {
    pub input_vertices: u64,
    pub input_primitives: u64,
    pub gs_primitives: u64,
    /// Primitives sent to the clipper.
    pub clipping_invocations: u64,
    /// Primitives that survived clipping.
    pub clipping_primitives: u64,
    pub vs_invocations: u64,
    pub gs_invocations: u64,
    pub ps_invocations: u64,
    pub hs_invocations: u64,
    pub ds_invocations: u64,
    pub cs_invocations: u64,
}

/// A query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryData {
    Occlusion { num_samples: u64 },
    BinaryOcclusion { any_sample_passed: bool },
    /// `frequency` is in ticks per second.
    Timestamp { counter: u64, frequency: u64 },
    PipelineStatistics(PipelineStatistics),
    Duration { duration: u64, frequency: u64 },
}

impl QueryData {
    pub const fn query_type(&self) -> QueryType {
        match self {
            QueryData::Occlusion { .. } => QueryType::Occlusion,
            QueryData::BinaryOcclusion { .. } => QueryType::BinaryOcclusion,
            QueryData::Timestamp { .. } => QueryType::Timestamp,
            QueryData::PipelineStatistics(_) => QueryType::PipelineStatistics,
            QueryData::Duration { .. } => QueryType::Duration,
        }
    }

    /// Seconds measured by a duration query.  `None` for other results or a zero frequency.
    pub fn duration_seconds(&self) -> Option<f64> {
        match *self {
            QueryData::Duration {
                duration,
                frequency,
            } if frequency != 0 => Some(duration as f64 / frequency as f64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn query_types_index_pool_arrays() {
        for (i, t) in QueryType::ALL.iter().enumerate() {
            assert_eq!(*t as usize, i + 1);
        }
        assert_eq!(QueryType::NUM_TYPES, QueryType::ALL.len() + 1);
        assert_eq!(QueryType::Duration.backend_query_count(), 2);
        assert_eq!(QueryType::Timestamp.backend_query_count(), 1);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn duration_seconds() {
        let d = QueryData::Duration {
            duration: 500,
            frequency: 1000,
        };
        assert_eq!(d.duration_seconds(), Some(0.5));
        assert_eq!(d.query_type(), QueryType::Duration);
        let zero = QueryData::Duration {
            duration: 500,
            frequency: 0,
        };
        assert_eq!(zero.duration_seconds(), None);
    }
}
