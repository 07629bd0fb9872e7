use crate::queries::QueryType;
use std::fmt::Display;

/// Failures that abort construction of a view or query.
///
/// Invalid enum inputs are not errors; they are logged and replaced with a safe default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    DepthStencilViewOn3DTexture,
    UnalignedBufferView {
        field: &'static str,
        value: u32,
        stride: u32,
    },
    UnalignedRawBufferOffset {
        offset: u32,
    },
    QueryPoolExhausted {
        query_type: QueryType,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DepthStencilViewOn3DTexture => {
                write!(f, "Depth stencil views are not supported for 3D textures")
            }
            Error::UnalignedBufferView {
                field,
                value,
                stride,
            } => write!(
                f,
                "Byte {field} ({value}) is not multiple of element byte stride ({stride})"
            ),
            Error::UnalignedRawBufferOffset { offset } => {
                write!(f, "Byte offset ({offset}) is not multiple of 16")
            }
            Error::QueryPoolExhausted { query_type } => write!(
                f,
                "Failed to allocate query for type {}. Increase the query pool size in the engine create info.",
                query_type.name()
            ),
        }
    }
}
