// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Backend-neutral resource states.
//!
//! A resource state describes how a GPU resource is currently being used.  Backends translate
//! these flags into their own barrier vocabulary; see
//! [`crate::d3d12::resource_state_flags_to_d3d12_resource_states`].
//!
//! # Examples
//!
//! ```
//! use states_and_views::resource_state::ResourceState;
//!
//! let state = ResourceState::VERTEX_BUFFER | ResourceState::CONSTANT_BUFFER;
//! assert!(state.contains(ResourceState::VERTEX_BUFFER));
//! assert!(!state.is_single_state());
//! assert!(ResourceState::GENERIC_READ.contains(state));
//! ```

use crate::bittricks::SetBits;
use std::fmt::{Debug, Formatter};
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of resource state flags.
///
/// Every named constant other than [`ResourceState::UNKNOWN`] and
/// [`ResourceState::GENERIC_READ`] has exactly one bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResourceState(u32);

impl ResourceState {
    /// The state is unknown to the engine and is managed by the application.
    pub const UNKNOWN: Self = Self(0);
    /// The resource state is known to the engine, but is undefined.
    pub const UNDEFINED: Self = Self(1 << 0);
    pub const VERTEX_BUFFER: Self = Self(1 << 1);
    pub const CONSTANT_BUFFER: Self = Self(1 << 2);
    pub const INDEX_BUFFER: Self = Self(1 << 3);
    pub const RENDER_TARGET: Self = Self(1 << 4);
    pub const UNORDERED_ACCESS: Self = Self(1 << 5);
    pub const DEPTH_WRITE: Self = Self(1 << 6);
    pub const DEPTH_READ: Self = Self(1 << 7);
    pub const SHADER_RESOURCE: Self = Self(1 << 8);
    pub const STREAM_OUT: Self = Self(1 << 9);
    pub const INDIRECT_ARGUMENT: Self = Self(1 << 10);
    pub const COPY_DEST: Self = Self(1 << 11);
    pub const COPY_SOURCE: Self = Self(1 << 12);
    pub const RESOLVE_DEST: Self = Self(1 << 13);
    pub const RESOLVE_SOURCE: Self = Self(1 << 14);
    /// Read as an input attachment of a render pass.
    pub const INPUT_ATTACHMENT: Self = Self(1 << 15);
    /// Ready to be presented to the swap chain.
    pub const PRESENT: Self = Self(1 << 16);

    /// The highest single-bit flag.  Tables indexed by bit position are sized from this.
    pub const MAX_BIT: Self = Self::PRESENT;

    pub const GENERIC_READ: Self = Self(
        Self::VERTEX_BUFFER.0
            | Self::CONSTANT_BUFFER.0
            | Self::INDEX_BUFFER.0
            | Self::SHADER_RESOURCE.0
            | Self::INDIRECT_ARGUMENT.0
            | Self::COPY_SOURCE.0,
    );

    /// Every bit that names a valid flag.
    pub const ALL_BITS: u32 = (Self::MAX_BIT.0 << 1) - 1;

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Wraps raw bits without validation.  Converters check the range.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// Wraps raw bits, rejecting bits above [`ResourceState::MAX_BIT`].
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL_BITS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when exactly one flag is set.
    pub const fn is_single_state(self) -> bool {
        self.0.is_power_of_two()
    }

    /// The single-bit flags making up this state, lowest bit first.
    pub fn iter(self) -> impl Iterator<Item = ResourceState> {
        SetBits::new(self.0).map(|bit| ResourceState(1 << bit))
    }

    fn flag_name(self) -> Option<&'static str> {
        Some(match self {
            Self::UNDEFINED => "UNDEFINED",
            Self::VERTEX_BUFFER => "VERTEX_BUFFER",
            Self::CONSTANT_BUFFER => "CONSTANT_BUFFER",
            Self::INDEX_BUFFER => "INDEX_BUFFER",
            Self::RENDER_TARGET => "RENDER_TARGET",
            Self::UNORDERED_ACCESS => "UNORDERED_ACCESS",
            Self::DEPTH_WRITE => "DEPTH_WRITE",
            Self::DEPTH_READ => "DEPTH_READ",
            Self::SHADER_RESOURCE => "SHADER_RESOURCE",
            Self::STREAM_OUT => "STREAM_OUT",
            Self::INDIRECT_ARGUMENT => "INDIRECT_ARGUMENT",
            Self::COPY_DEST => "COPY_DEST",
            Self::COPY_SOURCE => "COPY_SOURCE",
            Self::RESOLVE_DEST => "RESOLVE_DEST",
            Self::RESOLVE_SOURCE => "RESOLVE_SOURCE",
            Self::INPUT_ATTACHMENT => "INPUT_ATTACHMENT",
            Self::PRESENT => "PRESENT",
            _ => return None,
        })
    }
}

impl Debug for ResourceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "ResourceState(UNKNOWN)");
        }
        write!(f, "ResourceState(")?;
        for (i, flag) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " | ")?;
            }
            match flag.flag_name() {
                Some(name) => write!(f, "{name}")?,
                None => write!(f, "{:#x}", flag.0)?,
            }
        }
        write!(f, ")")
    }
}

impl BitOr for ResourceState {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ResourceState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ResourceState {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for ResourceState {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn flags_are_single_bits_up_to_max() {
        let flags: Vec<_> = ResourceState::from_bits_retain(ResourceState::ALL_BITS)
            .iter()
            .collect();
        assert_eq!(flags.len(), 17);
        assert!(flags.iter().all(|f| f.is_single_state()));
        assert_eq!(*flags.last().unwrap(), ResourceState::MAX_BIT);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn generic_read_composition() {
        assert_eq!(ResourceState::GENERIC_READ.bits(), 0x150E);
        assert!(!ResourceState::GENERIC_READ.intersects(ResourceState::RENDER_TARGET));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn from_bits_rejects_unknown_flags() {
        assert!(ResourceState::from_bits(0x1_FFFF).is_some());
        assert!(ResourceState::from_bits(0x2_0000).is_none());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn debug_lists_flags() {
        let s = ResourceState::COPY_DEST | ResourceState::RENDER_TARGET;
        assert_eq!(format!("{s:?}"), "ResourceState(RENDER_TARGET | COPY_DEST)");
        assert_eq!(format!("{:?}", ResourceState::UNKNOWN), "ResourceState(UNKNOWN)");
    }
}
