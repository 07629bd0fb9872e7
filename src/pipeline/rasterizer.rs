// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0

/// How triangles are filled.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    #[default]
    Undefined = 0,
    Wireframe,
    Solid,
}

impl FillMode {
    pub const ALL: [FillMode; 2] = [FillMode::Wireframe, FillMode::Solid];
}

/// Which triangle faces are discarded.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    #[default]
    Undefined = 0,
    None,
    Front,
    Back,
}

impl CullMode {
    pub const ALL: [CullMode; 3] = [CullMode::None, CullMode::Front, CullMode::Back];
}

/// Rasterizer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizerDesc {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    /// Counter-clockwise triangles are front-facing.
    pub front_counter_clockwise: bool,
    pub depth_clip_enable: bool,
    /// Only backends with a fixed-function scissor switch honor this.
    pub scissor_enable: bool,
    /// Also enables multisample rasterization on D3D backends.
    pub antialiased_line_enable: bool,
    pub depth_bias: i32,
    pub depth_bias_clamp: f32,
    pub slope_scaled_depth_bias: f32,
}

impl Default for RasterizerDesc {
    fn default() -> Self {
        RasterizerDesc {
            fill_mode: FillMode::Solid,
            cull_mode: CullMode::Back,
            front_counter_clockwise: false,
            depth_clip_enable: true,
            scissor_enable: false,
            antialiased_line_enable: false,
            depth_bias: 0,
            depth_bias_clamp: 0.0,
            slope_scaled_depth_bias: 0.0,
        }
    }
}
