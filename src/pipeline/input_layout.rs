// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Vertex input layout.

use crate::pixel_formats::ValueType;

/// Place the element immediately after the previous one in the same buffer slot.
pub const LAYOUT_ELEMENT_AUTO_OFFSET: u32 = 0xFFFF_FFFF;
/// Compute the buffer stride from the elements bound to the slot.
pub const LAYOUT_ELEMENT_AUTO_STRIDE: u32 = 0xFFFF_FFFF;

/// How often an element advances.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputElementFrequency {
    #[default]
    Undefined = 0,
    PerVertex,
    PerInstance,
}

/// One vertex shader input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutElement {
    pub hlsl_semantic: String,
    /// Semantic index, and the input location for backends without semantics.
    pub input_index: u32,
    pub buffer_slot: u32,
    pub num_components: u32,
    pub value_type: ValueType,
    /// Integer types are read as normalized floats.  Ignored for float types.
    pub is_normalized: bool,
    pub relative_offset: u32,
    pub stride: u32,
    pub frequency: InputElementFrequency,
    /// Instances drawn before a per-instance element advances.
    pub instance_data_step_rate: u32,
}

impl Default for LayoutElement {
    fn default() -> Self {
        LayoutElement {
            hlsl_semantic: "ATTRIB".to_string(),
            input_index: 0,
            buffer_slot: 0,
            num_components: 0,
            value_type: ValueType::Float32,
            is_normalized: true,
            relative_offset: LAYOUT_ELEMENT_AUTO_OFFSET,
            stride: LAYOUT_ELEMENT_AUTO_STRIDE,
            frequency: InputElementFrequency::PerVertex,
            instance_data_step_rate: 1,
        }
    }
}

impl LayoutElement {
    /// A per-vertex element at `input_index` in `buffer_slot` with automatic offset and stride.
    pub fn new(input_index: u32, buffer_slot: u32, num_components: u32, value_type: ValueType) -> Self {
        LayoutElement {
            input_index,
            buffer_slot,
            num_components,
            value_type,
            ..LayoutElement::default()
        }
    }

    pub fn per_instance(mut self, step_rate: u32) -> Self {
        self.frequency = InputElementFrequency::PerInstance;
        self.instance_data_step_rate = step_rate;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InputLayoutDesc {
    pub elements: Vec<LayoutElement>,
}
