// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Fixed-function pipeline descriptions.
//!
//! These are the backend-neutral halves of a pipeline state object: how primitives are
//! assembled, rasterized, tested against depth and stencil, and blended into render targets.
//! Backends consume them through their conversion functions, for example
//! [`crate::d3d12::rasterizer_desc_to_d3d12_rasterizer_desc`].
//!
//! Every description implements [`Default`] with the engine's default state, so the usual way
//! to build one is struct update syntax:
//!
//! ```
//! use states_and_views::pipeline::{CullMode, RasterizerDesc};
//!
//! let desc = RasterizerDesc {
//!     cull_mode: CullMode::None,
//!     ..RasterizerDesc::default()
//! };
//! assert!(desc.depth_clip_enable);
//! ```

pub mod blend;
pub mod depth_stencil;
pub mod input_layout;
pub mod rasterizer;
pub mod topology;

pub use blend::{
    BlendDesc, BlendFactor, BlendOperation, ColorMask, LogicOperation, MAX_RENDER_TARGETS,
    RenderTargetBlendDesc,
};
pub use depth_stencil::{DepthStencilDesc, StencilOp, StencilOpDesc};
pub use input_layout::{
    InputElementFrequency, InputLayoutDesc, LAYOUT_ELEMENT_AUTO_OFFSET, LAYOUT_ELEMENT_AUTO_STRIDE,
    LayoutElement,
};
pub use rasterizer::{CullMode, FillMode, RasterizerDesc};
pub use topology::PrimitiveTopology;
