// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
[`ResourceState`] to [`D3D12ResourceStates`] and back.

Both directions work one bit at a time.  A table indexed by bit position holds the translation of
every single-bit flag, and a multi-bit value is the union of its bits' translations.  The tables
are built at compile time and sized from each type's `MAX_BIT`.

The mapping is not one-to-one:

| engine | D3D12 |
|---|---|
| `VERTEX_BUFFER`, `CONSTANT_BUFFER` | `VERTEX_AND_CONSTANT_BUFFER` |
| `SHADER_RESOURCE` | `NON_PIXEL_SHADER_RESOURCE \| PIXEL_SHADER_RESOURCE` |
| `INPUT_ATTACHMENT` | `PIXEL_SHADER_RESOURCE` |
| `UNDEFINED`, `PRESENT` | `COMMON` (zero) |

so converting a D3D12 value back can name more engine states than went in.
*/

use crate::bittricks::{SetBits, bit_position, is_single_bit};
use crate::imp::d3d12::types::D3D12ResourceStates;
use crate::resource_state::ResourceState;

const NUM_ENGINE_BITS: usize = bit_position(ResourceState::MAX_BIT.bits()) as usize + 1;
const NUM_D3D12_BITS: usize = bit_position(D3D12ResourceStates::MAX_BIT.bits()) as usize + 1;

const fn resource_state_flag_to_d3d12_resource_state(flag: ResourceState) -> D3D12ResourceStates {
    debug_assert!(is_single_bit(flag.bits()), "only a single state flag can be converted");
    match flag {
        ResourceState::UNDEFINED => D3D12ResourceStates::COMMON,
        ResourceState::VERTEX_BUFFER => D3D12ResourceStates::VERTEX_AND_CONSTANT_BUFFER,
        ResourceState::CONSTANT_BUFFER => D3D12ResourceStates::VERTEX_AND_CONSTANT_BUFFER,
        ResourceState::INDEX_BUFFER => D3D12ResourceStates::INDEX_BUFFER,
        ResourceState::RENDER_TARGET => D3D12ResourceStates::RENDER_TARGET,
        ResourceState::UNORDERED_ACCESS => D3D12ResourceStates::UNORDERED_ACCESS,
        ResourceState::DEPTH_WRITE => D3D12ResourceStates::DEPTH_WRITE,
        ResourceState::DEPTH_READ => D3D12ResourceStates::DEPTH_READ,
        ResourceState::SHADER_RESOURCE => D3D12ResourceStates(
            D3D12ResourceStates::NON_PIXEL_SHADER_RESOURCE.bits()
                | D3D12ResourceStates::PIXEL_SHADER_RESOURCE.bits(),
        ),
        ResourceState::STREAM_OUT => D3D12ResourceStates::STREAM_OUT,
        ResourceState::INDIRECT_ARGUMENT => D3D12ResourceStates::INDIRECT_ARGUMENT,
        ResourceState::COPY_DEST => D3D12ResourceStates::COPY_DEST,
        ResourceState::COPY_SOURCE => D3D12ResourceStates::COPY_SOURCE,
        ResourceState::RESOLVE_DEST => D3D12ResourceStates::RESOLVE_DEST,
        ResourceState::RESOLVE_SOURCE => D3D12ResourceStates::RESOLVE_SOURCE,
        ResourceState::INPUT_ATTACHMENT => D3D12ResourceStates::PIXEL_SHADER_RESOURCE,
        ResourceState::PRESENT => D3D12ResourceStates::PRESENT,
        _ => {
            debug_assert!(false, "unexpected resource state flag");
            D3D12ResourceStates::COMMON
        }
    }
}

const fn d3d12_resource_state_to_resource_state_flags(state: D3D12ResourceStates) -> ResourceState {
    debug_assert!(is_single_bit(state.bits()), "only a single D3D12 state bit can be converted");
    match state {
        D3D12ResourceStates::VERTEX_AND_CONSTANT_BUFFER => ResourceState::from_bits_retain(
            ResourceState::VERTEX_BUFFER.bits() | ResourceState::CONSTANT_BUFFER.bits(),
        ),
        D3D12ResourceStates::INDEX_BUFFER => ResourceState::INDEX_BUFFER,
        D3D12ResourceStates::RENDER_TARGET => ResourceState::RENDER_TARGET,
        D3D12ResourceStates::UNORDERED_ACCESS => ResourceState::UNORDERED_ACCESS,
        D3D12ResourceStates::DEPTH_WRITE => ResourceState::DEPTH_WRITE,
        D3D12ResourceStates::DEPTH_READ => ResourceState::DEPTH_READ,
        D3D12ResourceStates::NON_PIXEL_SHADER_RESOURCE => ResourceState::SHADER_RESOURCE,
        D3D12ResourceStates::PIXEL_SHADER_RESOURCE => ResourceState::SHADER_RESOURCE,
        D3D12ResourceStates::STREAM_OUT => ResourceState::STREAM_OUT,
        D3D12ResourceStates::INDIRECT_ARGUMENT => ResourceState::INDIRECT_ARGUMENT,
        D3D12ResourceStates::COPY_DEST => ResourceState::COPY_DEST,
        D3D12ResourceStates::COPY_SOURCE => ResourceState::COPY_SOURCE,
        D3D12ResourceStates::RESOLVE_DEST => ResourceState::RESOLVE_DEST,
        D3D12ResourceStates::RESOLVE_SOURCE => ResourceState::RESOLVE_SOURCE,
        _ => {
            debug_assert!(false, "unexpected D3D12 resource state");
            ResourceState::UNKNOWN
        }
    }
}

static RESOURCE_STATE_FLAG_TO_D3D12: [D3D12ResourceStates; NUM_ENGINE_BITS] = {
    let mut table = [D3D12ResourceStates::COMMON; NUM_ENGINE_BITS];
    let mut bit = 0;
    while bit < NUM_ENGINE_BITS {
        table[bit] =
            resource_state_flag_to_d3d12_resource_state(ResourceState::from_bits_retain(1 << bit));
        bit += 1;
    }
    table
};

static D3D12_STATE_TO_RESOURCE_STATE_FLAGS: [ResourceState; NUM_D3D12_BITS] = {
    let mut table = [ResourceState::UNKNOWN; NUM_D3D12_BITS];
    let mut bit = 0;
    while bit < NUM_D3D12_BITS {
        table[bit] = d3d12_resource_state_to_resource_state_flags(D3D12ResourceStates(1 << bit));
        bit += 1;
    }
    table
};

/// Translates every flag in `state_flags`.
///
/// `UNKNOWN` and `UNDEFINED` translate to `COMMON`.
pub fn resource_state_flags_to_d3d12_resource_states(
    state_flags: ResourceState,
) -> D3D12ResourceStates {
    debug_assert!(
        state_flags.bits() <= ResourceState::ALL_BITS,
        "resource state flags are out of range"
    );
    let mut d3d12_states = D3D12ResourceStates::COMMON;
    for bit in SetBits::new(state_flags.bits()) {
        match RESOURCE_STATE_FLAG_TO_D3D12.get(bit as usize) {
            Some(states) => d3d12_states |= *states,
            None => logwise::error_sync!(
                "Resource state bit {bit} has no D3D12 equivalent",
                bit = bit
            ),
        }
    }
    d3d12_states
}

/// Translates a D3D12 state back to engine flags.
///
/// Zero is `PRESENT` (equivalently `COMMON`).
///
/// ```
/// # #[cfg(feature = "backend_d3d12")] {
/// use states_and_views::d3d12::{D3D12ResourceStates, d3d12_resource_states_to_resource_state_flags};
/// use states_and_views::resource_state::ResourceState;
///
/// let state = d3d12_resource_states_to_resource_state_flags(D3D12ResourceStates::GENERIC_READ);
/// assert_eq!(state, ResourceState::GENERIC_READ);
/// # }
/// ```
pub fn d3d12_resource_states_to_resource_state_flags(
    d3d12_states: D3D12ResourceStates,
) -> ResourceState {
    if d3d12_states == D3D12ResourceStates::PRESENT {
        return ResourceState::PRESENT;
    }
    let mut state_flags = ResourceState::UNKNOWN;
    for bit in SetBits::new(d3d12_states.bits()) {
        match D3D12_STATE_TO_RESOURCE_STATE_FLAGS.get(bit as usize) {
            Some(flags) => state_flags |= *flags,
            None => {
                debug_assert!(false, "D3D12 resource state bit {bit} is out of range");
                logwise::error_sync!(
                    "D3D12 resource state bit {bit} has no engine equivalent",
                    bit = bit
                );
            }
        }
    }
    state_flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_flags() -> impl Iterator<Item = ResourceState> {
        ResourceState::from_bits_retain(ResourceState::ALL_BITS).iter()
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn tables_cover_every_bit() {
        assert_eq!(RESOURCE_STATE_FLAG_TO_D3D12.len(), 17);
        assert_eq!(D3D12_STATE_TO_RESOURCE_STATE_FLAGS.len(), 14);
        assert!(
            D3D12_STATE_TO_RESOURCE_STATE_FLAGS
                .iter()
                .all(|flags| !flags.is_empty())
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn individual_flags() {
        let convert = resource_state_flags_to_d3d12_resource_states;
        assert_eq!(convert(ResourceState::UNKNOWN), D3D12ResourceStates::COMMON);
        assert_eq!(convert(ResourceState::UNDEFINED), D3D12ResourceStates::COMMON);
        assert_eq!(convert(ResourceState::PRESENT), D3D12ResourceStates::PRESENT);
        assert_eq!(
            convert(ResourceState::CONSTANT_BUFFER),
            D3D12ResourceStates::VERTEX_AND_CONSTANT_BUFFER
        );
        assert_eq!(
            convert(ResourceState::SHADER_RESOURCE),
            D3D12ResourceStates::NON_PIXEL_SHADER_RESOURCE
                | D3D12ResourceStates::PIXEL_SHADER_RESOURCE
        );
        assert_eq!(
            convert(ResourceState::INPUT_ATTACHMENT),
            D3D12ResourceStates::PIXEL_SHADER_RESOURCE
        );
        assert_eq!(
            convert(ResourceState::RESOLVE_SOURCE),
            D3D12ResourceStates::RESOLVE_SOURCE
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn generic_read_both_ways() {
        assert_eq!(
            resource_state_flags_to_d3d12_resource_states(ResourceState::GENERIC_READ),
            D3D12ResourceStates::GENERIC_READ
        );
        assert_eq!(
            d3d12_resource_states_to_resource_state_flags(D3D12ResourceStates::GENERIC_READ),
            ResourceState::GENERIC_READ
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn backend_values_are_stable() {
        for flag in single_flags() {
            if flag == ResourceState::INPUT_ATTACHMENT {
                continue;
            }
            let d3d12 = resource_state_flags_to_d3d12_resource_states(flag);
            let back = d3d12_resource_states_to_resource_state_flags(d3d12);
            assert_eq!(
                resource_state_flags_to_d3d12_resource_states(back),
                d3d12,
                "{flag:?}"
            );
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn composition_is_union() {
        let flags: Vec<_> = single_flags().collect();
        for a in &flags {
            for b in &flags {
                assert_eq!(
                    resource_state_flags_to_d3d12_resource_states(*a | *b),
                    resource_state_flags_to_d3d12_resource_states(*a)
                        | resource_state_flags_to_d3d12_resource_states(*b)
                );
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_flags_assert() {
        resource_state_flags_to_d3d12_resource_states(ResourceState::from_bits_retain(1 << 20));
    }
}
