// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0

/// How vertices are assembled into primitives.
///
/// `Undefined` is a valid topology.  It leaves the backend topology unset, which pipelines that
/// only use compute shaders rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    #[default]
    Undefined,
    TriangleList,
    TriangleStrip,
    PointList,
    LineList,
    LineStrip,
    /// A patch list for tessellation.  Between 1 and [`PrimitiveTopology::MAX_CONTROL_POINTS`]
    /// control points are allowed.
    ControlPointPatchList(u8),
}

impl PrimitiveTopology {
    pub const MAX_CONTROL_POINTS: u8 = 32;

    /// Every valid topology, including `Undefined` and all patch lists.
    pub fn all() -> impl Iterator<Item = PrimitiveTopology> {
        [
            PrimitiveTopology::Undefined,
            PrimitiveTopology::TriangleList,
            PrimitiveTopology::TriangleStrip,
            PrimitiveTopology::PointList,
            PrimitiveTopology::LineList,
            PrimitiveTopology::LineStrip,
        ]
        .into_iter()
        .chain((1..=Self::MAX_CONTROL_POINTS).map(PrimitiveTopology::ControlPointPatchList))
    }
}
