#![cfg(feature = "backend_d3d12")]

use states_and_views::d3d12::{
    D3D12ResourceStates, d3d12_resource_states_to_resource_state_flags,
    resource_state_flags_to_d3d12_resource_states,
};
use states_and_views::resource_state::ResourceState;

/// The states a render target texture passes through in a typical frame.
const FRAME: [ResourceState; 5] = [
    ResourceState::RENDER_TARGET,
    ResourceState::RESOLVE_SOURCE,
    ResourceState::SHADER_RESOURCE,
    ResourceState::COPY_SOURCE,
    ResourceState::PRESENT,
];

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn frame_barriers() {
    let d3d12: Vec<D3D12ResourceStates> = FRAME
        .iter()
        .map(|state| resource_state_flags_to_d3d12_resource_states(*state))
        .collect();
    assert_eq!(
        d3d12,
        [
            D3D12ResourceStates::RENDER_TARGET,
            D3D12ResourceStates::RESOLVE_SOURCE,
            D3D12ResourceStates::NON_PIXEL_SHADER_RESOURCE
                | D3D12ResourceStates::PIXEL_SHADER_RESOURCE,
            D3D12ResourceStates::COPY_SOURCE,
            D3D12ResourceStates::PRESENT,
        ]
    );
    // Each barrier's before state reads back as the engine state that produced it.
    for (state, native) in FRAME.iter().zip(&d3d12) {
        assert_eq!(d3d12_resource_states_to_resource_state_flags(*native), *state);
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn read_states_combine() {
    let reading = ResourceState::GENERIC_READ;
    let native = resource_state_flags_to_d3d12_resource_states(reading);
    assert_eq!(native, D3D12ResourceStates::GENERIC_READ);
    assert!(native.contains(D3D12ResourceStates::INDIRECT_ARGUMENT));

    let write_and_read = ResourceState::DEPTH_READ | ResourceState::SHADER_RESOURCE;
    let native = resource_state_flags_to_d3d12_resource_states(write_and_read);
    assert_eq!(native.bits(), 0x20 | 0x40 | 0x80);
    assert_eq!(d3d12_resource_states_to_resource_state_flags(native), write_and_read);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn lossy_states() {
    // Vertex and constant buffers share one D3D12 state.
    let native = resource_state_flags_to_d3d12_resource_states(ResourceState::CONSTANT_BUFFER);
    assert_eq!(native, D3D12ResourceStates::VERTEX_AND_CONSTANT_BUFFER);
    assert_eq!(
        d3d12_resource_states_to_resource_state_flags(native),
        ResourceState::VERTEX_BUFFER | ResourceState::CONSTANT_BUFFER
    );

    // An input attachment is read by the pixel shader and comes back as a shader resource.
    let native = resource_state_flags_to_d3d12_resource_states(ResourceState::INPUT_ATTACHMENT);
    assert_eq!(native, D3D12ResourceStates::PIXEL_SHADER_RESOURCE);
    assert_eq!(
        d3d12_resource_states_to_resource_state_flags(native),
        ResourceState::SHADER_RESOURCE
    );

    assert_eq!(
        resource_state_flags_to_d3d12_resource_states(ResourceState::UNDEFINED),
        D3D12ResourceStates::COMMON
    );
    assert_eq!(
        resource_state_flags_to_d3d12_resource_states(ResourceState::UNKNOWN),
        D3D12ResourceStates::COMMON
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn translation_is_stable() {
    let all = ResourceState::from_bits(ResourceState::ALL_BITS).unwrap();
    // Input attachments widen to a full shader resource on the way back.
    for flag in all.iter().filter(|flag| *flag != ResourceState::INPUT_ATTACHMENT) {
        let native = resource_state_flags_to_d3d12_resource_states(flag);
        let back = d3d12_resource_states_to_resource_state_flags(native);
        assert_eq!(
            resource_state_flags_to_d3d12_resource_states(back),
            native,
            "{flag:?}"
        );
    }
}
