/*! states_and_views translates engine-level GPU descriptions into Direct3D 11 and Direct3D 12
  vocabulary.

A renderer describes its resources once, in backend-neutral terms: resource states as a bitmask,
views by dimension and mip/slice range, samplers by filter type, pipeline state as plain structs.
Each backend then needs the same information spelled in its own enumerations and descriptor
unions.  This crate is that spelling, and nothing else.  It creates no device objects.

| Engine concept           | D3D12                                   | D3D11                             |
|--------------------------|-----------------------------------------|-----------------------------------|
| [`resource_state::ResourceState`] | `D3D12_RESOURCE_STATES`, both ways | n/a                               |
| [`views::TextureViewDesc`] | SRV/RTV/DSV/UAV descriptors            | SRV/RTV/DSV/UAV descriptors       |
| [`views::BufferViewDesc`]  | buffer SRV/UAV, raw via a flag         | buffer SRV/UAV, raw via `BUFFEREX` |
| [`sampler::SamplerDesc`]   | sampler and static sampler             | sampler                           |
| [`pipeline`] descriptions  | rasterizer, blend (with logic ops), depth-stencil, input layout | rasterizer (with scissor), blend, depth-stencil, input layout |
| [`queries::QueryType`]     | query types, heap types, heap slot manager | n/a                          |
| [`render_pass`] load/store | beginning/ending access types          | n/a                               |

# Invalid input

Enum inputs outside their legal range are programming errors.  They are logged through
[logwise](https://docs.rs/logwise) and replaced with a harmless default (usually the backend's
zero value), and where a hard invariant is involved they also trip a `debug_assert!`.  The few
conversions that cannot produce anything meaningful return [`Error`].

```
# #[cfg(feature = "backend_d3d12")] {
use states_and_views::d3d12::{D3D12ResourceStates, resource_state_flags_to_d3d12_resource_states};
use states_and_views::resource_state::ResourceState;

let states = resource_state_flags_to_d3d12_resource_states(
    ResourceState::COPY_SOURCE | ResourceState::INDEX_BUFFER,
);
assert_eq!(states, D3D12ResourceStates::COPY_SOURCE | D3D12ResourceStates::INDEX_BUFFER);
# }
```

# Backends

Both backends are compiled by default and can be turned off with the `backend_d3d12` and
`backend_d3d11` features.  Everything here is plain data, so the crate builds and tests on any
platform, including wasm32.
*/

pub mod adapter;
pub mod config;
pub mod pipeline;
pub mod pixel_formats;
pub mod queries;
pub mod render_pass;
pub mod resource_state;
pub mod sampler;
pub mod views;

mod bittricks;
mod imp;

pub use imp::Error;

#[cfg(feature = "backend_d3d12")]
pub use imp::d3d12;

#[cfg(feature = "backend_d3d11")]
pub use imp::d3d11;
