// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Backend-neutral texture formats and vertex value types.
//!
//! [`TextureFormat`] enumerates every uncompressed and block-compressed format a texture or
//! view may use.  The discriminants follow the DXGI numbering, which keeps the D3D format
//! tables a straight lookup.  Backends that do not share this numbering translate through
//! their own tables.
//!
//! [`ValueType`] describes a single component of a vertex attribute or formatted buffer
//! element.  Combined with a component count and a normalization flag it selects a backend
//! format; see [`crate::d3d12::type_to_dxgi_format`].
//!
//! # Examples
//!
//! ```
//! use states_and_views::pixel_formats::{TextureFormat, ValueType};
//!
//! assert_eq!(TextureFormat::ALL.len(), TextureFormat::COUNT);
//! assert!(TextureFormat::D24UNormS8UInt.is_depth_stencil());
//! assert_eq!(ValueType::Float16.byte_size(), 2);
//! ```

/// A texture format.
///
/// `Unknown` is the "no format" sentinel.  For a buffer view it means the view is raw.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    #[default]
    Unknown = 0,
    RGBA32Typeless = 1,
    RGBA32Float = 2,
    RGBA32UInt = 3,
    RGBA32SInt = 4,
    RGB32Typeless = 5,
    RGB32Float = 6,
    RGB32UInt = 7,
    RGB32SInt = 8,
    RGBA16Typeless = 9,
    RGBA16Float = 10,
    RGBA16UNorm = 11,
    RGBA16UInt = 12,
    RGBA16SNorm = 13,
    RGBA16SInt = 14,
    RG32Typeless = 15,
    RG32Float = 16,
    RG32UInt = 17,
    RG32SInt = 18,
    R32G8X24Typeless = 19,
    D32FloatS8X24UInt = 20,
    R32FloatX8X24Typeless = 21,
    X32TypelessG8X24UInt = 22,
    RGB10A2Typeless = 23,
    RGB10A2UNorm = 24,
    RGB10A2UInt = 25,
    R11G11B10Float = 26,
    RGBA8Typeless = 27,
    RGBA8UNorm = 28,
    RGBA8UNormSRGB = 29,
    RGBA8UInt = 30,
    RGBA8SNorm = 31,
    RGBA8SInt = 32,
    RG16Typeless = 33,
    RG16Float = 34,
    RG16UNorm = 35,
    RG16UInt = 36,
    RG16SNorm = 37,
    RG16SInt = 38,
    R32Typeless = 39,
    D32Float = 40,
    R32Float = 41,
    R32UInt = 42,
    R32SInt = 43,
    R24G8Typeless = 44,
    D24UNormS8UInt = 45,
    R24UNormX8Typeless = 46,
    X24TypelessG8UInt = 47,
    RG8Typeless = 48,
    RG8UNorm = 49,
    RG8UInt = 50,
    RG8SNorm = 51,
    RG8SInt = 52,
    R16Typeless = 53,
    R16Float = 54,
    D16UNorm = 55,
    R16UNorm = 56,
    R16UInt = 57,
    R16SNorm = 58,
    R16SInt = 59,
    R8Typeless = 60,
    R8UNorm = 61,
    R8UInt = 62,
    R8SNorm = 63,
    R8SInt = 64,
    A8UNorm = 65,
    R1UNorm = 66,
    RGB9E5SharedExp = 67,
    RG8B8G8UNorm = 68,
    G8R8G8B8UNorm = 69,
    BC1Typeless = 70,
    BC1UNorm = 71,
    BC1UNormSRGB = 72,
    BC2Typeless = 73,
    BC2UNorm = 74,
    BC2UNormSRGB = 75,
    BC3Typeless = 76,
    BC3UNorm = 77,
    BC3UNormSRGB = 78,
    BC4Typeless = 79,
    BC4UNorm = 80,
    BC4SNorm = 81,
    BC5Typeless = 82,
    BC5UNorm = 83,
    BC5SNorm = 84,
    B5G6R5UNorm = 85,
    B5G5R5A1UNorm = 86,
    BGRA8UNorm = 87,
    BGRX8UNorm = 88,
    R10G10B10XRBiasA2UNorm = 89,
    BGRA8Typeless = 90,
    BGRA8UNormSRGB = 91,
    BGRX8Typeless = 92,
    BGRX8UNormSRGB = 93,
    BC6HTypeless = 94,
    BC6HUF16 = 95,
    BC6HSF16 = 96,
    BC7Typeless = 97,
    BC7UNorm = 98,
    BC7UNormSRGB = 99,
}

impl TextureFormat {
    pub const COUNT: usize = 100;

    /// Every format, in discriminant order.
    pub const ALL: [TextureFormat; Self::COUNT] = [
        TextureFormat::Unknown,
        TextureFormat::RGBA32Typeless,
        TextureFormat::RGBA32Float,
        TextureFormat::RGBA32UInt,
        TextureFormat::RGBA32SInt,
        TextureFormat::RGB32Typeless,
        TextureFormat::RGB32Float,
        TextureFormat::RGB32UInt,
        TextureFormat::RGB32SInt,
        TextureFormat::RGBA16Typeless,
        TextureFormat::RGBA16Float,
        TextureFormat::RGBA16UNorm,
        TextureFormat::RGBA16UInt,
        TextureFormat::RGBA16SNorm,
        TextureFormat::RGBA16SInt,
        TextureFormat::RG32Typeless,
        TextureFormat::RG32Float,
        TextureFormat::RG32UInt,
        TextureFormat::RG32SInt,
        TextureFormat::R32G8X24Typeless,
        TextureFormat::D32FloatS8X24UInt,
        TextureFormat::R32FloatX8X24Typeless,
        TextureFormat::X32TypelessG8X24UInt,
        TextureFormat::RGB10A2Typeless,
        TextureFormat::RGB10A2UNorm,
        TextureFormat::RGB10A2UInt,
        TextureFormat::R11G11B10Float,
        TextureFormat::RGBA8Typeless,
        TextureFormat::RGBA8UNorm,
        TextureFormat::RGBA8UNormSRGB,
        TextureFormat::RGBA8UInt,
        TextureFormat::RGBA8SNorm,
        TextureFormat::RGBA8SInt,
        TextureFormat::RG16Typeless,
        TextureFormat::RG16Float,
        TextureFormat::RG16UNorm,
        TextureFormat::RG16UInt,
        TextureFormat::RG16SNorm,
        TextureFormat::RG16SInt,
        TextureFormat::R32Typeless,
        TextureFormat::D32Float,
        TextureFormat::R32Float,
        TextureFormat::R32UInt,
        TextureFormat::R32SInt,
        TextureFormat::R24G8Typeless,
        TextureFormat::D24UNormS8UInt,
        TextureFormat::R24UNormX8Typeless,
        TextureFormat::X24TypelessG8UInt,
        TextureFormat::RG8Typeless,
        TextureFormat::RG8UNorm,
        TextureFormat::RG8UInt,
        TextureFormat::RG8SNorm,
        TextureFormat::RG8SInt,
        TextureFormat::R16Typeless,
        TextureFormat::R16Float,
        TextureFormat::D16UNorm,
        TextureFormat::R16UNorm,
        TextureFormat::R16UInt,
        TextureFormat::R16SNorm,
        TextureFormat::R16SInt,
        TextureFormat::R8Typeless,
        TextureFormat::R8UNorm,
        TextureFormat::R8UInt,
        TextureFormat::R8SNorm,
        TextureFormat::R8SInt,
        TextureFormat::A8UNorm,
        TextureFormat::R1UNorm,
        TextureFormat::RGB9E5SharedExp,
        TextureFormat::RG8B8G8UNorm,
        TextureFormat::G8R8G8B8UNorm,
        TextureFormat::BC1Typeless,
        TextureFormat::BC1UNorm,
        TextureFormat::BC1UNormSRGB,
        TextureFormat::BC2Typeless,
        TextureFormat::BC2UNorm,
        TextureFormat::BC2UNormSRGB,
        TextureFormat::BC3Typeless,
        TextureFormat::BC3UNorm,
        TextureFormat::BC3UNormSRGB,
        TextureFormat::BC4Typeless,
        TextureFormat::BC4UNorm,
        TextureFormat::BC4SNorm,
        TextureFormat::BC5Typeless,
        TextureFormat::BC5UNorm,
        TextureFormat::BC5SNorm,
        TextureFormat::B5G6R5UNorm,
        TextureFormat::B5G5R5A1UNorm,
        TextureFormat::BGRA8UNorm,
        TextureFormat::BGRX8UNorm,
        TextureFormat::R10G10B10XRBiasA2UNorm,
        TextureFormat::BGRA8Typeless,
        TextureFormat::BGRA8UNormSRGB,
        TextureFormat::BGRX8Typeless,
        TextureFormat::BGRX8UNormSRGB,
        TextureFormat::BC6HTypeless,
        TextureFormat::BC6HUF16,
        TextureFormat::BC6HSF16,
        TextureFormat::BC7Typeless,
        TextureFormat::BC7UNorm,
        TextureFormat::BC7UNormSRGB,
    ];

    /// Formats with a depth component.
    pub const fn is_depth_stencil(self) -> bool {
        matches!(
            self,
            TextureFormat::D32FloatS8X24UInt
                | TextureFormat::D32Float
                | TextureFormat::D24UNormS8UInt
                | TextureFormat::D16UNorm
        )
    }

    /// Typeless formats that can back both a depth-stencil view and a readable view.
    pub const fn is_typeless(self) -> bool {
        matches!(
            self,
            TextureFormat::RGBA32Typeless
                | TextureFormat::RGB32Typeless
                | TextureFormat::RGBA16Typeless
                | TextureFormat::RG32Typeless
                | TextureFormat::R32G8X24Typeless
                | TextureFormat::RGB10A2Typeless
                | TextureFormat::RGBA8Typeless
                | TextureFormat::RG16Typeless
                | TextureFormat::R32Typeless
                | TextureFormat::R24G8Typeless
                | TextureFormat::RG8Typeless
                | TextureFormat::R16Typeless
                | TextureFormat::R8Typeless
                | TextureFormat::BC1Typeless
                | TextureFormat::BC2Typeless
                | TextureFormat::BC3Typeless
                | TextureFormat::BC4Typeless
                | TextureFormat::BC5Typeless
                | TextureFormat::BGRA8Typeless
                | TextureFormat::BGRX8Typeless
                | TextureFormat::BC6HTypeless
                | TextureFormat::BC7Typeless
        )
    }
}

/// The type of one component of a vertex attribute or formatted buffer element.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Undefined = 0,
    Int8,
    Int16,
    Int32,
    Uint8,
    Uint16,
    Uint32,
    Float16,
    Float32,
}

impl ValueType {
    /// Size of one component in bytes.  `Undefined` has no size.
    pub const fn byte_size(self) -> u32 {
        match self {
            ValueType::Undefined => 0,
            ValueType::Int8 | ValueType::Uint8 => 1,
            ValueType::Int16 | ValueType::Uint16 | ValueType::Float16 => 2,
            ValueType::Int32 | ValueType::Uint32 | ValueType::Float32 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn all_is_in_discriminant_order() {
        for (i, f) in TextureFormat::ALL.iter().enumerate() {
            assert_eq!(*f as usize, i);
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn depth_formats() {
        let depth: Vec<_> = TextureFormat::ALL
            .iter()
            .filter(|f| f.is_depth_stencil())
            .collect();
        assert_eq!(depth.len(), 4);
        assert!(TextureFormat::R24G8Typeless.is_typeless());
        assert!(!TextureFormat::R24UNormX8Typeless.is_depth_stencil());
    }
}
