// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler state.
//!
//! A sampler combines three filters (minification, magnification and mip), an address mode
//! per texture coordinate, an optional comparison function and a border color.
//!
//! Filters come in classes.  Regular filters sample normally, comparison filters compare the
//! sample against a reference value, and minimum/maximum filters reduce the footprint to its
//! smallest or largest texel.  All three filters of one sampler must share a class.
//!
//! # Examples
//!
//! ```
//! use states_and_views::sampler::{FilterType, SamplerDesc, TextureAddressMode};
//!
//! let shadow = SamplerDesc {
//!     min_filter: FilterType::ComparisonLinear,
//!     mag_filter: FilterType::ComparisonLinear,
//!     mip_filter: FilterType::ComparisonPoint,
//!     address_u: TextureAddressMode::Border,
//!     border_color: [1.0, 1.0, 1.0, 1.0],
//!     ..SamplerDesc::default()
//! };
//! assert!(shadow.min_filter.is_comparison());
//! ```

/// Texture filter.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    #[default]
    Unknown = 0,
    Point,
    Linear,
    Anisotropic,
    ComparisonPoint,
    ComparisonLinear,
    ComparisonAnisotropic,
    MinimumPoint,
    MinimumLinear,
    MinimumAnisotropic,
    MaximumPoint,
    MaximumLinear,
    MaximumAnisotropic,
}

impl FilterType {
    /// Every valid filter, excluding `Unknown`.
    pub const ALL: [FilterType; 12] = [
        FilterType::Point,
        FilterType::Linear,
        FilterType::Anisotropic,
        FilterType::ComparisonPoint,
        FilterType::ComparisonLinear,
        FilterType::ComparisonAnisotropic,
        FilterType::MinimumPoint,
        FilterType::MinimumLinear,
        FilterType::MinimumAnisotropic,
        FilterType::MaximumPoint,
        FilterType::MaximumLinear,
        FilterType::MaximumAnisotropic,
    ];

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            FilterType::ComparisonPoint
                | FilterType::ComparisonLinear
                | FilterType::ComparisonAnisotropic
        )
    }

    pub const fn is_anisotropic(self) -> bool {
        matches!(
            self,
            FilterType::Anisotropic
                | FilterType::ComparisonAnisotropic
                | FilterType::MinimumAnisotropic
                | FilterType::MaximumAnisotropic
        )
    }
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureAddressMode {
    #[default]
    Unknown = 0,
    Wrap,
    Mirror,
    Clamp,
    /// Use [`SamplerDesc::border_color`].
    Border,
    /// Mirror once around zero, then clamp.
    MirrorOnce,
}

impl TextureAddressMode {
    pub const ALL: [TextureAddressMode; 5] = [
        TextureAddressMode::Wrap,
        TextureAddressMode::Mirror,
        TextureAddressMode::Clamp,
        TextureAddressMode::Border,
        TextureAddressMode::MirrorOnce,
    ];
}

/// Comparison used by comparison samplers and by depth/stencil tests.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonFunction {
    #[default]
    Unknown = 0,
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl ComparisonFunction {
    pub const ALL: [ComparisonFunction; 8] = [
        ComparisonFunction::Never,
        ComparisonFunction::Less,
        ComparisonFunction::Equal,
        ComparisonFunction::LessEqual,
        ComparisonFunction::Greater,
        ComparisonFunction::NotEqual,
        ComparisonFunction::GreaterEqual,
        ComparisonFunction::Always,
    ];
}

/// A complete sampler description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerDesc {
    pub min_filter: FilterType,
    pub mag_filter: FilterType,
    /// Only point, linear and the anisotropic filters are meaningful here.
    pub mip_filter: FilterType,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunction,
    /// RGBA border color used by [`TextureAddressMode::Border`].
    pub border_color: [f32; 4],
    pub min_lod: f32,
    pub max_lod: f32,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        SamplerDesc {
            min_filter: FilterType::Linear,
            mag_filter: FilterType::Linear,
            mip_filter: FilterType::Linear,
            address_u: TextureAddressMode::Clamp,
            address_v: TextureAddressMode::Clamp,
            address_w: TextureAddressMode::Clamp,
            mip_lod_bias: 0.0,
            max_anisotropy: 0,
            comparison_func: ComparisonFunction::Never,
            border_color: [0.0; 4],
            min_lod: 0.0,
            max_lod: f32::MAX,
        }
    }
}
