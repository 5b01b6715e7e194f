//! Conversions from the decoded Caffe messages into crate-native records.
//! All direct proto-field access lives here.
//!
//! Messages are taken by value so weight vectors move instead of being
//! copied; large models hold most of their bytes in `BlobProto::data`.
//!
//! Text fields are decoded as bytes and converted lossily: the C++ runtime
//! never validated them, so layer names that are not UTF-8 do occur.

use prost::bytes::Bytes;

use crate::{BlobInfo, BlobProto, CaffeModel, LayerInfo, LayerParameter, NetParameter};

/// Create CaffeModel from a decoded NetParameter
pub(crate) fn model_from_net_parameter(net: NetParameter) -> CaffeModel {
    CaffeModel {
        name: net.name.map(text_from_bytes),
        input_size: net.input.len(),
        input_shape_size: net.input_shape.len(),
        input_dim_size: net.input_dim.len(),
        has_state: net.state.is_some(),
        has_debug_info: net.debug_info.is_some(),
        has_force_backward: net.force_backward.is_some(),
        layers: net.layer.into_iter().map(layer_from_proto).collect(),
        legacy_layers_size: net.layers.len(),
    }
}

/// Create LayerInfo from a LayerParameter
pub(crate) fn layer_from_proto(layer: LayerParameter) -> LayerInfo {
    LayerInfo {
        name: layer.name.map(text_from_bytes),
        layer_type: layer.r#type.map(text_from_bytes),
        bottom: layer.bottom.into_iter().map(text_from_bytes).collect(),
        top: layer.top.into_iter().map(text_from_bytes).collect(),
        blobs: layer.blobs.into_iter().map(blob_from_proto).collect(),
    }
}

/// Create BlobInfo from a BlobProto
pub(crate) fn blob_from_proto(blob: BlobProto) -> BlobInfo {
    BlobInfo {
        shape: blob.shape.map(|s| s.dim),
        num: blob.num,
        channels: blob.channels,
        height: blob.height,
        width: blob.width,
        data: blob.data,
        double_data: blob.double_data,
    }
}

/// Decode a proto2 `string` payload, replacing invalid UTF-8 sequences
pub(crate) fn text_from_bytes(bytes: Bytes) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}
