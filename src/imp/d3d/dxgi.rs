// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! DXGI formats.
//!
//! [`TextureFormat`] discriminants equal the DXGI values for the same layout, so both directions are
//! plain tables.  Depth formats are adjusted for the way a texture is bound; see
//! [`tex_format_to_dxgi_format`].

use crate::pixel_formats::{TextureFormat, ValueType};
use crate::views::BindFlags;
use std::sync::LazyLock;

/// `DXGI_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct DxgiFormat(pub u32);

impl DxgiFormat {
    pub const UNKNOWN: Self = Self(0);
    pub const R32G32B32A32_TYPELESS: Self = Self(1);
    pub const R32G32B32A32_FLOAT: Self = Self(2);
    pub const R32G32B32A32_UINT: Self = Self(3);
    pub const R32G32B32A32_SINT: Self = Self(4);
    pub const R32G32B32_TYPELESS: Self = Self(5);
    pub const R32G32B32_FLOAT: Self = Self(6);
    pub const R32G32B32_UINT: Self = Self(7);
    pub const R32G32B32_SINT: Self = Self(8);
    pub const R16G16B16A16_TYPELESS: Self = Self(9);
    pub const R16G16B16A16_FLOAT: Self = Self(10);
    pub const R16G16B16A16_UNORM: Self = Self(11);
    pub const R16G16B16A16_UINT: Self = Self(12);
    pub const R16G16B16A16_SNORM: Self = Self(13);
    pub const R16G16B16A16_SINT: Self = Self(14);
    pub const R32G32_TYPELESS: Self = Self(15);
    pub const R32G32_FLOAT: Self = Self(16);
    pub const R32G32_UINT: Self = Self(17);
    pub const R32G32_SINT: Self = Self(18);
    pub const R32G8X24_TYPELESS: Self = Self(19);
    pub const D32_FLOAT_S8X24_UINT: Self = Self(20);
    pub const R32_FLOAT_X8X24_TYPELESS: Self = Self(21);
    pub const X32_TYPELESS_G8X24_UINT: Self = Self(22);
    pub const R10G10B10A2_TYPELESS: Self = Self(23);
    pub const R10G10B10A2_UNORM: Self = Self(24);
    pub const R10G10B10A2_UINT: Self = Self(25);
    pub const R11G11B10_FLOAT: Self = Self(26);
    pub const R8G8B8A8_TYPELESS: Self = Self(27);
    pub const R8G8B8A8_UNORM: Self = Self(28);
    pub const R8G8B8A8_UNORM_SRGB: Self = Self(29);
    pub const R8G8B8A8_UINT: Self = Self(30);
    pub const R8G8B8A8_SNORM: Self = Self(31);
    pub const R8G8B8A8_SINT: Self = Self(32);
    pub const R16G16_TYPELESS: Self = Self(33);
    pub const R16G16_FLOAT: Self = Self(34);
    pub const R16G16_UNORM: Self = Self(35);
    pub const R16G16_UINT: Self = Self(36);
    pub const R16G16_SNORM: Self = Self(37);
    pub const R16G16_SINT: Self = Self(38);
    pub const R32_TYPELESS: Self = Self(39);
    pub const D32_FLOAT: Self = Self(40);
    pub const R32_FLOAT: Self = Self(41);
    pub const R32_UINT: Self = Self(42);
    pub const R32_SINT: Self = Self(43);
    pub const R24G8_TYPELESS: Self = Self(44);
    pub const D24_UNORM_S8_UINT: Self = Self(45);
    pub const R24_UNORM_X8_TYPELESS: Self = Self(46);
    pub const X24_TYPELESS_G8_UINT: Self = Self(47);
    pub const R8G8_TYPELESS: Self = Self(48);
    pub const R8G8_UNORM: Self = Self(49);
    pub const R8G8_UINT: Self = Self(50);
    pub const R8G8_SNORM: Self = Self(51);
    pub const R8G8_SINT: Self = Self(52);
    pub const R16_TYPELESS: Self = Self(53);
    pub const R16_FLOAT: Self = Self(54);
    pub const D16_UNORM: Self = Self(55);
    pub const R16_UNORM: Self = Self(56);
    pub const R16_UINT: Self = Self(57);
    pub const R16_SNORM: Self = Self(58);
    pub const R16_SINT: Self = Self(59);
    pub const R8_TYPELESS: Self = Self(60);
    pub const R8_UNORM: Self = Self(61);
    pub const R8_UINT: Self = Self(62);
    pub const R8_SNORM: Self = Self(63);
    pub const R8_SINT: Self = Self(64);
    pub const A8_UNORM: Self = Self(65);
    pub const R1_UNORM: Self = Self(66);
    pub const R9G9B9E5_SHAREDEXP: Self = Self(67);
    pub const R8G8_B8G8_UNORM: Self = Self(68);
    pub const G8R8_G8B8_UNORM: Self = Self(69);
    pub const BC1_TYPELESS: Self = Self(70);
    pub const BC1_UNORM: Self = Self(71);
    pub const BC1_UNORM_SRGB: Self = Self(72);
    pub const BC2_TYPELESS: Self = Self(73);
    pub const BC2_UNORM: Self = Self(74);
    pub const BC2_UNORM_SRGB: Self = Self(75);
    pub const BC3_TYPELESS: Self = Self(76);
    pub const BC3_UNORM: Self = Self(77);
    pub const BC3_UNORM_SRGB: Self = Self(78);
    pub const BC4_TYPELESS: Self = Self(79);
    pub const BC4_UNORM: Self = Self(80);
    pub const BC4_SNORM: Self = Self(81);
    pub const BC5_TYPELESS: Self = Self(82);
    pub const BC5_UNORM: Self = Self(83);
    pub const BC5_SNORM: Self = Self(84);
    pub const B5G6R5_UNORM: Self = Self(85);
    pub const B5G5R5A1_UNORM: Self = Self(86);
    pub const B8G8R8A8_UNORM: Self = Self(87);
    pub const B8G8R8X8_UNORM: Self = Self(88);
    pub const R10G10B10_XR_BIAS_A2_UNORM: Self = Self(89);
    pub const B8G8R8A8_TYPELESS: Self = Self(90);
    pub const B8G8R8A8_UNORM_SRGB: Self = Self(91);
    pub const B8G8R8X8_TYPELESS: Self = Self(92);
    pub const B8G8R8X8_UNORM_SRGB: Self = Self(93);
    pub const BC6H_TYPELESS: Self = Self(94);
    pub const BC6H_UF16: Self = Self(95);
    pub const BC6H_SF16: Self = Self(96);
    pub const BC7_TYPELESS: Self = Self(97);
    pub const BC7_UNORM: Self = Self(98);
    pub const BC7_UNORM_SRGB: Self = Self(99);
}

const fn raw_dxgi_format(format: TextureFormat) -> DxgiFormat {
    match format {
        TextureFormat::Unknown => DxgiFormat::UNKNOWN,
        TextureFormat::RGBA32Typeless => DxgiFormat::R32G32B32A32_TYPELESS,
        TextureFormat::RGBA32Float => DxgiFormat::R32G32B32A32_FLOAT,
        TextureFormat::RGBA32UInt => DxgiFormat::R32G32B32A32_UINT,
        TextureFormat::RGBA32SInt => DxgiFormat::R32G32B32A32_SINT,
        TextureFormat::RGB32Typeless => DxgiFormat::R32G32B32_TYPELESS,
        TextureFormat::RGB32Float => DxgiFormat::R32G32B32_FLOAT,
        TextureFormat::RGB32UInt => DxgiFormat::R32G32B32_UINT,
        TextureFormat::RGB32SInt => DxgiFormat::R32G32B32_SINT,
        TextureFormat::RGBA16Typeless => DxgiFormat::R16G16B16A16_TYPELESS,
        TextureFormat::RGBA16Float => DxgiFormat::R16G16B16A16_FLOAT,
        TextureFormat::RGBA16UNorm => DxgiFormat::R16G16B16A16_UNORM,
        TextureFormat::RGBA16UInt => DxgiFormat::R16G16B16A16_UINT,
        TextureFormat::RGBA16SNorm => DxgiFormat::R16G16B16A16_SNORM,
        TextureFormat::RGBA16SInt => DxgiFormat::R16G16B16A16_SINT,
        TextureFormat::RG32Typeless => DxgiFormat::R32G32_TYPELESS,
        TextureFormat::RG32Float => DxgiFormat::R32G32_FLOAT,
        TextureFormat::RG32UInt => DxgiFormat::R32G32_UINT,
        TextureFormat::RG32SInt => DxgiFormat::R32G32_SINT,
        TextureFormat::R32G8X24Typeless => DxgiFormat::R32G8X24_TYPELESS,
        TextureFormat::D32FloatS8X24UInt => DxgiFormat::D32_FLOAT_S8X24_UINT,
        TextureFormat::R32FloatX8X24Typeless => DxgiFormat::R32_FLOAT_X8X24_TYPELESS,
        TextureFormat::X32TypelessG8X24UInt => DxgiFormat::X32_TYPELESS_G8X24_UINT,
        TextureFormat::RGB10A2Typeless => DxgiFormat::R10G10B10A2_TYPELESS,
        TextureFormat::RGB10A2UNorm => DxgiFormat::R10G10B10A2_UNORM,
        TextureFormat::RGB10A2UInt => DxgiFormat::R10G10B10A2_UINT,
        TextureFormat::R11G11B10Float => DxgiFormat::R11G11B10_FLOAT,
        TextureFormat::RGBA8Typeless => DxgiFormat::R8G8B8A8_TYPELESS,
        TextureFormat::RGBA8UNorm => DxgiFormat::R8G8B8A8_UNORM,
        TextureFormat::RGBA8UNormSRGB => DxgiFormat::R8G8B8A8_UNORM_SRGB,
        TextureFormat::RGBA8UInt => DxgiFormat::R8G8B8A8_UINT,
        TextureFormat::RGBA8SNorm => DxgiFormat::R8G8B8A8_SNORM,
        TextureFormat::RGBA8SInt => DxgiFormat::R8G8B8A8_SINT,
        TextureFormat::RG16Typeless => DxgiFormat::R16G16_TYPELESS,
        TextureFormat::RG16Float => DxgiFormat::R16G16_FLOAT,
        TextureFormat::RG16UNorm => DxgiFormat::R16G16_UNORM,
        TextureFormat::RG16UInt => DxgiFormat::R16G16_UINT,
        TextureFormat::RG16SNorm => DxgiFormat::R16G16_SNORM,
        TextureFormat::RG16SInt => DxgiFormat::R16G16_SINT,
        TextureFormat::R32Typeless => DxgiFormat::R32_TYPELESS,
        TextureFormat::D32Float => DxgiFormat::D32_FLOAT,
        TextureFormat::R32Float => DxgiFormat::R32_FLOAT,
        TextureFormat::R32UInt => DxgiFormat::R32_UINT,
        TextureFormat::R32SInt => DxgiFormat::R32_SINT,
        TextureFormat::R24G8Typeless => DxgiFormat::R24G8_TYPELESS,
        TextureFormat::D24UNormS8UInt => DxgiFormat::D24_UNORM_S8_UINT,
        TextureFormat::R24UNormX8Typeless => DxgiFormat::R24_UNORM_X8_TYPELESS,
        TextureFormat::X24TypelessG8UInt => DxgiFormat::X24_TYPELESS_G8_UINT,
        TextureFormat::RG8Typeless => DxgiFormat::R8G8_TYPELESS,
        TextureFormat::RG8UNorm => DxgiFormat::R8G8_UNORM,
        TextureFormat::RG8UInt => DxgiFormat::R8G8_UINT,
        TextureFormat::RG8SNorm => DxgiFormat::R8G8_SNORM,
        TextureFormat::RG8SInt => DxgiFormat::R8G8_SINT,
        TextureFormat::R16Typeless => DxgiFormat::R16_TYPELESS,
        TextureFormat::R16Float => DxgiFormat::R16_FLOAT,
        TextureFormat::D16UNorm => DxgiFormat::D16_UNORM,
        TextureFormat::R16UNorm => DxgiFormat::R16_UNORM,
        TextureFormat::R16UInt => DxgiFormat::R16_UINT,
        TextureFormat::R16SNorm => DxgiFormat::R16_SNORM,
        TextureFormat::R16SInt => DxgiFormat::R16_SINT,
        TextureFormat::R8Typeless => DxgiFormat::R8_TYPELESS,
        TextureFormat::R8UNorm => DxgiFormat::R8_UNORM,
        TextureFormat::R8UInt => DxgiFormat::R8_UINT,
        TextureFormat::R8SNorm => DxgiFormat::R8_SNORM,
        TextureFormat::R8SInt => DxgiFormat::R8_SINT,
        TextureFormat::A8UNorm => DxgiFormat::A8_UNORM,
        TextureFormat::R1UNorm => DxgiFormat::R1_UNORM,
        TextureFormat::RGB9E5SharedExp => DxgiFormat::R9G9B9E5_SHAREDEXP,
        TextureFormat::RG8B8G8UNorm => DxgiFormat::R8G8_B8G8_UNORM,
        TextureFormat::G8R8G8B8UNorm => DxgiFormat::G8R8_G8B8_UNORM,
        TextureFormat::BC1Typeless => DxgiFormat::BC1_TYPELESS,
        TextureFormat::BC1UNorm => DxgiFormat::BC1_UNORM,
        TextureFormat::BC1UNormSRGB => DxgiFormat::BC1_UNORM_SRGB,
        TextureFormat::BC2Typeless => DxgiFormat::BC2_TYPELESS,
        TextureFormat::BC2UNorm => DxgiFormat::BC2_UNORM,
        TextureFormat::BC2UNormSRGB => DxgiFormat::BC2_UNORM_SRGB,
        TextureFormat::BC3Typeless => DxgiFormat::BC3_TYPELESS,
        TextureFormat::BC3UNorm => DxgiFormat::BC3_UNORM,
        TextureFormat::BC3UNormSRGB => DxgiFormat::BC3_UNORM_SRGB,
        TextureFormat::BC4Typeless => DxgiFormat::BC4_TYPELESS,
        TextureFormat::BC4UNorm => DxgiFormat::BC4_UNORM,
        TextureFormat::BC4SNorm => DxgiFormat::BC4_SNORM,
        TextureFormat::BC5Typeless => DxgiFormat::BC5_TYPELESS,
        TextureFormat::BC5UNorm => DxgiFormat::BC5_UNORM,
        TextureFormat::BC5SNorm => DxgiFormat::BC5_SNORM,
        TextureFormat::B5G6R5UNorm => DxgiFormat::B5G6R5_UNORM,
        TextureFormat::B5G5R5A1UNorm => DxgiFormat::B5G5R5A1_UNORM,
        TextureFormat::BGRA8UNorm => DxgiFormat::B8G8R8A8_UNORM,
        TextureFormat::BGRX8UNorm => DxgiFormat::B8G8R8X8_UNORM,
        TextureFormat::R10G10B10XRBiasA2UNorm => DxgiFormat::R10G10B10_XR_BIAS_A2_UNORM,
        TextureFormat::BGRA8Typeless => DxgiFormat::B8G8R8A8_TYPELESS,
        TextureFormat::BGRA8UNormSRGB => DxgiFormat::B8G8R8A8_UNORM_SRGB,
        TextureFormat::BGRX8Typeless => DxgiFormat::B8G8R8X8_TYPELESS,
        TextureFormat::BGRX8UNormSRGB => DxgiFormat::B8G8R8X8_UNORM_SRGB,
        TextureFormat::BC6HTypeless => DxgiFormat::BC6H_TYPELESS,
        TextureFormat::BC6HUF16 => DxgiFormat::BC6H_UF16,
        TextureFormat::BC6HSF16 => DxgiFormat::BC6H_SF16,
        TextureFormat::BC7Typeless => DxgiFormat::BC7_TYPELESS,
        TextureFormat::BC7UNorm => DxgiFormat::BC7_UNORM,
        TextureFormat::BC7UNormSRGB => DxgiFormat::BC7_UNORM_SRGB,
    }
}

/// Adjusts depth formats for the bind flags they are created with.
///
/// A depth texture that is also sampled needs a typeless resource format.  A view that only
/// binds depth needs the `D*` format, and a view that only reads needs the matching `R*` format.
fn correct_dxgi_format(format: DxgiFormat, bind_flags: BindFlags) -> DxgiFormat {
    let mut format = format;
    if bind_flags.contains(BindFlags::DEPTH_STENCIL) && bind_flags != BindFlags::DEPTH_STENCIL {
        format = match format {
            DxgiFormat::R32_TYPELESS | DxgiFormat::R32_FLOAT | DxgiFormat::D32_FLOAT => {
                DxgiFormat::R32_TYPELESS
            }
            DxgiFormat::R24G8_TYPELESS
            | DxgiFormat::D24_UNORM_S8_UINT
            | DxgiFormat::R24_UNORM_X8_TYPELESS
            | DxgiFormat::X24_TYPELESS_G8_UINT => DxgiFormat::R24G8_TYPELESS,
            DxgiFormat::R16_TYPELESS | DxgiFormat::R16_UNORM | DxgiFormat::D16_UNORM => {
                DxgiFormat::R16_TYPELESS
            }
            DxgiFormat::R32G8X24_TYPELESS
            | DxgiFormat::D32_FLOAT_S8X24_UINT
            | DxgiFormat::R32_FLOAT_X8X24_TYPELESS
            | DxgiFormat::X32_TYPELESS_G8X24_UINT => DxgiFormat::R32G8X24_TYPELESS,
            other => {
                logwise::error_sync!(
                    "Unsupported depth-stencil format {format}",
                    format = other.0
                );
                other
            }
        };
    }

    if bind_flags == BindFlags::DEPTH_STENCIL {
        format = match format {
            DxgiFormat::R32_TYPELESS | DxgiFormat::R32_FLOAT => DxgiFormat::D32_FLOAT,
            DxgiFormat::R24G8_TYPELESS
            | DxgiFormat::R24_UNORM_X8_TYPELESS
            | DxgiFormat::X24_TYPELESS_G8_UINT => DxgiFormat::D24_UNORM_S8_UINT,
            DxgiFormat::R16_TYPELESS | DxgiFormat::R16_UNORM => DxgiFormat::D16_UNORM,
            other => other,
        };
    }

    if bind_flags == BindFlags::SHADER_RESOURCE || bind_flags == BindFlags::UNORDERED_ACCESS {
        format = match format {
            DxgiFormat::R32_TYPELESS | DxgiFormat::D32_FLOAT => DxgiFormat::R32_FLOAT,
            DxgiFormat::R24G8_TYPELESS
            | DxgiFormat::D24_UNORM_S8_UINT
            | DxgiFormat::X24_TYPELESS_G8_UINT => DxgiFormat::R24_UNORM_X8_TYPELESS,
            DxgiFormat::R16_TYPELESS | DxgiFormat::D16_UNORM => DxgiFormat::R16_UNORM,
            other => other,
        };
    }
    format
}

/// The DXGI format of `format` when bound with `bind_flags`.
///
/// Empty bind flags return the format unchanged.
///
/// ```
/// # #[cfg(feature = "backend_d3d12")] {
/// use states_and_views::d3d12::{DxgiFormat, tex_format_to_dxgi_format};
/// use states_and_views::pixel_formats::TextureFormat;
/// use states_and_views::views::BindFlags;
///
/// let depth = TextureFormat::D32Float;
/// assert_eq!(tex_format_to_dxgi_format(depth, BindFlags::NONE), DxgiFormat::D32_FLOAT);
/// assert_eq!(
///     tex_format_to_dxgi_format(depth, BindFlags::DEPTH_STENCIL | BindFlags::SHADER_RESOURCE),
///     DxgiFormat::R32_TYPELESS
/// );
/// assert_eq!(tex_format_to_dxgi_format(depth, BindFlags::SHADER_RESOURCE), DxgiFormat::R32_FLOAT);
/// # }
/// ```
pub fn tex_format_to_dxgi_format(format: TextureFormat, bind_flags: BindFlags) -> DxgiFormat {
    let dxgi_format = raw_dxgi_format(format);
    if bind_flags.is_empty() {
        dxgi_format
    } else {
        correct_dxgi_format(dxgi_format, bind_flags)
    }
}

static DXGI_TO_TEX_FORMAT: LazyLock<[TextureFormat; TextureFormat::COUNT]> = LazyLock::new(|| {
    let mut map = [TextureFormat::Unknown; TextureFormat::COUNT];
    for format in TextureFormat::ALL {
        map[raw_dxgi_format(format).0 as usize] = format;
    }
    map
});

/// The engine format for a DXGI format.  Formats newer than `BC7_UNORM_SRGB` are logged and
/// return [`TextureFormat::Unknown`].
pub fn dxgi_format_to_tex_format(format: DxgiFormat) -> TextureFormat {
    match DXGI_TO_TEX_FORMAT.get(format.0 as usize) {
        Some(tex_format) => *tex_format,
        None => {
            logwise::error_sync!(
                "DXGI texture format ({format}) is out of allowed range [0, {max}]",
                format = format.0,
                max = DxgiFormat::BC7_UNORM_SRGB.0
            );
            TextureFormat::Unknown
        }
    }
}

/// The DXGI format of a vertex attribute or formatted buffer element.
///
/// Only component counts that DXGI can express are accepted.  Anything else is logged and returns
/// [`DxgiFormat::UNKNOWN`].
pub fn type_to_dxgi_format(
    value_type: ValueType,
    num_components: u32,
    is_normalized: bool,
) -> DxgiFormat {
    match (value_type, num_components) {
        (ValueType::Float16, 1) => DxgiFormat::R16_FLOAT,
        (ValueType::Float16, 2) => DxgiFormat::R16G16_FLOAT,
        (ValueType::Float16, 4) => DxgiFormat::R16G16B16A16_FLOAT,

        (ValueType::Float32, 1) => DxgiFormat::R32_FLOAT,
        (ValueType::Float32, 2) => DxgiFormat::R32G32_FLOAT,
        (ValueType::Float32, 3) => DxgiFormat::R32G32B32_FLOAT,
        (ValueType::Float32, 4) => DxgiFormat::R32G32B32A32_FLOAT,

        (ValueType::Int32, 1) => DxgiFormat::R32_SINT,
        (ValueType::Int32, 2) => DxgiFormat::R32G32_SINT,
        (ValueType::Int32, 3) => DxgiFormat::R32G32B32_SINT,
        (ValueType::Int32, 4) => DxgiFormat::R32G32B32A32_SINT,

        (ValueType::Uint32, 1) => DxgiFormat::R32_UINT,
        (ValueType::Uint32, 2) => DxgiFormat::R32G32_UINT,
        (ValueType::Uint32, 3) => DxgiFormat::R32G32B32_UINT,
        (ValueType::Uint32, 4) => DxgiFormat::R32G32B32A32_UINT,

        (ValueType::Int16, 1) if is_normalized => DxgiFormat::R16_SNORM,
        (ValueType::Int16, 2) if is_normalized => DxgiFormat::R16G16_SNORM,
        (ValueType::Int16, 4) if is_normalized => DxgiFormat::R16G16B16A16_SNORM,
        (ValueType::Int16, 1) => DxgiFormat::R16_SINT,
        (ValueType::Int16, 2) => DxgiFormat::R16G16_SINT,
        (ValueType::Int16, 4) => DxgiFormat::R16G16B16A16_SINT,

        (ValueType::Uint16, 1) if is_normalized => DxgiFormat::R16_UNORM,
        (ValueType::Uint16, 2) if is_normalized => DxgiFormat::R16G16_UNORM,
        (ValueType::Uint16, 4) if is_normalized => DxgiFormat::R16G16B16A16_UNORM,
        (ValueType::Uint16, 1) => DxgiFormat::R16_UINT,
        (ValueType::Uint16, 2) => DxgiFormat::R16G16_UINT,
        (ValueType::Uint16, 4) => DxgiFormat::R16G16B16A16_UINT,

        (ValueType::Int8, 1) if is_normalized => DxgiFormat::R8_SNORM,
        (ValueType::Int8, 2) if is_normalized => DxgiFormat::R8G8_SNORM,
        (ValueType::Int8, 4) if is_normalized => DxgiFormat::R8G8B8A8_SNORM,
        (ValueType::Int8, 1) => DxgiFormat::R8_SINT,
        (ValueType::Int8, 2) => DxgiFormat::R8G8_SINT,
        (ValueType::Int8, 4) => DxgiFormat::R8G8B8A8_SINT,

        (ValueType::Uint8, 1) if is_normalized => DxgiFormat::R8_UNORM,
        (ValueType::Uint8, 2) if is_normalized => DxgiFormat::R8G8_UNORM,
        (ValueType::Uint8, 4) if is_normalized => DxgiFormat::R8G8B8A8_UNORM,
        (ValueType::Uint8, 1) => DxgiFormat::R8_UINT,
        (ValueType::Uint8, 2) => DxgiFormat::R8G8_UINT,
        (ValueType::Uint8, 4) => DxgiFormat::R8G8B8A8_UINT,

        (value_type, num_components) => {
            logwise::error_sync!(
                "Unsupported combination of value type {value_type} and {num_components} components",
                value_type = logwise::privacy::LogIt(&value_type),
                num_components = num_components
            );
            DxgiFormat::UNKNOWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn discriminants_match_dxgi() {
        for format in TextureFormat::ALL {
            assert_eq!(raw_dxgi_format(format).0, format as u32);
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn inverse_map() {
        for format in TextureFormat::ALL {
            assert_eq!(dxgi_format_to_tex_format(raw_dxgi_format(format)), format);
        }
        assert_eq!(dxgi_format_to_tex_format(DxgiFormat(115)), TextureFormat::Unknown);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn depth_correction() {
        let ds_srv = BindFlags::DEPTH_STENCIL | BindFlags::SHADER_RESOURCE;
        assert_eq!(
            tex_format_to_dxgi_format(TextureFormat::D24UNormS8UInt, ds_srv),
            DxgiFormat::R24G8_TYPELESS
        );
        assert_eq!(
            tex_format_to_dxgi_format(TextureFormat::R24G8Typeless, BindFlags::DEPTH_STENCIL),
            DxgiFormat::D24_UNORM_S8_UINT
        );
        assert_eq!(
            tex_format_to_dxgi_format(TextureFormat::D16UNorm, BindFlags::UNORDERED_ACCESS),
            DxgiFormat::R16_UNORM
        );
        assert_eq!(
            tex_format_to_dxgi_format(TextureFormat::D32FloatS8X24UInt, ds_srv),
            DxgiFormat::R32G8X24_TYPELESS
        );
        // color formats pass through
        assert_eq!(
            tex_format_to_dxgi_format(TextureFormat::RGBA8UNorm, BindFlags::RENDER_TARGET),
            DxgiFormat::R8G8B8A8_UNORM
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn vertex_formats() {
        assert_eq!(type_to_dxgi_format(ValueType::Float32, 3, false), DxgiFormat::R32G32B32_FLOAT);
        assert_eq!(type_to_dxgi_format(ValueType::Uint8, 4, true), DxgiFormat::R8G8B8A8_UNORM);
        assert_eq!(type_to_dxgi_format(ValueType::Uint8, 4, false), DxgiFormat::R8G8B8A8_UINT);
        assert_eq!(type_to_dxgi_format(ValueType::Int16, 2, true), DxgiFormat::R16G16_SNORM);
        assert_eq!(type_to_dxgi_format(ValueType::Float16, 1, false), DxgiFormat::R16_FLOAT);
        assert_eq!(type_to_dxgi_format(ValueType::Float16, 3, false), DxgiFormat::UNKNOWN);
        assert_eq!(type_to_dxgi_format(ValueType::Uint8, 3, true), DxgiFormat::UNKNOWN);
        assert_eq!(type_to_dxgi_format(ValueType::Undefined, 1, false), DxgiFormat::UNKNOWN);
    }
}
