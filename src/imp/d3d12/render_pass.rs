// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Render pass attachment access for `ID3D12GraphicsCommandList4::BeginRenderPass`.

use crate::imp::d3d12::types::{BeginningAccessType, EndingAccessType};
use crate::render_pass::{AttachmentLoadOp, AttachmentStoreOp};

pub fn attachment_load_op_to_d3d12_beginning_access_type(
    load_op: AttachmentLoadOp,
) -> BeginningAccessType {
    match load_op {
        AttachmentLoadOp::Load => BeginningAccessType::PRESERVE,
        AttachmentLoadOp::Clear => BeginningAccessType::CLEAR,
        AttachmentLoadOp::Discard => BeginningAccessType::DISCARD,
    }
}

pub fn attachment_store_op_to_d3d12_ending_access_type(
    store_op: AttachmentStoreOp,
) -> EndingAccessType {
    match store_op {
        AttachmentStoreOp::Store => EndingAccessType::PRESERVE,
        AttachmentStoreOp::Discard => EndingAccessType::DISCARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn load_ops() {
        let convert = attachment_load_op_to_d3d12_beginning_access_type;
        assert_eq!(AttachmentLoadOp::default(), AttachmentLoadOp::Load);
        assert_eq!(AttachmentLoadOp::Load as u8, 0);
        assert_eq!(convert(AttachmentLoadOp::Load), BeginningAccessType::PRESERVE);
        assert_eq!(convert(AttachmentLoadOp::Clear), BeginningAccessType::CLEAR);
        assert_eq!(convert(AttachmentLoadOp::Discard), BeginningAccessType::DISCARD);
        assert_eq!(convert(AttachmentLoadOp::default()), BeginningAccessType::PRESERVE);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn store_ops() {
        let convert = attachment_store_op_to_d3d12_ending_access_type;
        assert_eq!(AttachmentStoreOp::default(), AttachmentStoreOp::Store);
        assert_eq!(AttachmentStoreOp::Store as u8, 0);
        assert_eq!(convert(AttachmentStoreOp::Store), EndingAccessType::PRESERVE);
        assert_eq!(convert(AttachmentStoreOp::Discard), EndingAccessType::DISCARD);
        assert_eq!(convert(AttachmentStoreOp::default()), EndingAccessType::PRESERVE);
    }
}
