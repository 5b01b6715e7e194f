use prost::Message;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::types::{LABEL_WIDTH, or_placeholder};
use crate::{Error, ExportConfig, LayerInfo, LogSink, NetParameter, Result, proto_adapter, sinkln};

/// Largest model file the loader accepts, in bytes
pub const MAX_MESSAGE_BYTES: u64 = i32::MAX as u64;

/// Main Caffe model container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaffeModel {
    pub(crate) name: Option<String>,
    pub(crate) input_size: usize,
    pub(crate) input_shape_size: usize,
    pub(crate) input_dim_size: usize,
    pub(crate) has_state: bool,
    pub(crate) has_debug_info: bool,
    pub(crate) has_force_backward: bool,
    pub(crate) layers: Vec<LayerInfo>,
    pub(crate) legacy_layers_size: usize,
}

/// Counts gathered while walking a model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub layers: usize,
    pub blobs: usize,
    pub files_written: usize,
    pub files_skipped: usize,
}

impl CaffeModel {
    /// Load a binary `.caffemodel` from file path
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let len = file.metadata()?.len();
        if len > MAX_MESSAGE_BYTES {
            return Err(Error::TooLarge {
                path: path.to_path_buf(),
                len,
            });
        }

        let mut buffer = Vec::with_capacity(len as usize);
        file.read_to_end(&mut buffer)?;
        Self::load_from_bytes(&buffer)
    }

    /// Load a binary `.caffemodel` from byte slice
    pub fn load_from_bytes(data: &[u8]) -> Result<Self> {
        let net = NetParameter::decode(data)?;
        Ok(proto_adapter::model_from_net_parameter(net))
    }

    /// Network name, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Layers in definition order
    pub fn layers(&self) -> &[LayerInfo] {
        &self.layers
    }

    pub fn layer_size(&self) -> usize {
        self.layers.len()
    }

    /// Number of entries in the deprecated `layers` field. Those layers are
    /// counted but never walked.
    pub fn legacy_layers_size(&self) -> usize {
        self.legacy_layers_size
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn input_shape_size(&self) -> usize {
        self.input_shape_size
    }

    pub fn input_dim_size(&self) -> usize {
        self.input_dim_size
    }

    pub fn has_state(&self) -> bool {
        self.has_state
    }

    pub fn has_debug_info(&self) -> bool {
        self.has_debug_info
    }

    pub fn has_force_backward(&self) -> bool {
        self.has_force_backward
    }

    /// Get layer by name
    pub fn get_layer(&self, name: &str) -> Option<&LayerInfo> {
        self.layers.iter().find(|l| l.name() == Some(name))
    }

    /// Get all layers of a specific type
    pub fn get_layers_by_type(&self, layer_type: &str) -> Vec<&LayerInfo> {
        self.layers.iter().filter(|l| l.is_type(layer_type)).collect()
    }

    /// Total number of weight blobs across all layers
    pub fn blob_count(&self) -> usize {
        self.layers.iter().map(|l| l.blob_size()).sum()
    }

    /// Print the net-level fields
    pub fn describe<W: Write>(&self, sink: &mut LogSink<W>) {
        let w = LABEL_WIDTH;
        let flag = |present: bool| u8::from(present);

        sinkln!(sink, "[State]: Parsing net parameters...");
        sinkln!(sink, "  {:<w$}=  {}", "name", or_placeholder(self.name()));
        sinkln!(sink, "  {:<w$}=  {}", "input_size", self.input_size);
        sinkln!(sink, "  {:<w$}=  {}", "input_shape_size", self.input_shape_size);
        sinkln!(sink, "  {:<w$}=  {}", "input_dim_size", self.input_dim_size);
        sinkln!(sink, "  {:<w$}=  {}", "has_state", flag(self.has_state));
        sinkln!(sink, "  {:<w$}=  {}", "has_debug_info", flag(self.has_debug_info));
        sinkln!(sink, "  {:<w$}=  {}", "has_forced_backword", flag(self.has_force_backward));
        sinkln!(sink, "  {:<w$}=  {}", "layer_size", self.layer_size());
        sinkln!(sink, "  {:<w$}=  {}", "layers_size", self.legacy_layers_size);
    }

    /// Print the whole tree and dump every layer's weight blobs into
    /// `config.out_dir`.
    ///
    /// Never fails: missing fields print as `N/A` and output files that cannot
    /// be written are reported on the sink and counted as skipped.
    pub fn walk<W: Write>(&self, config: &ExportConfig, sink: &mut LogSink<W>) -> WalkSummary {
        self.describe(sink);

        let mut summary = WalkSummary::default();
        sinkln!(sink, "[State]: Parsing layer parameters...");
        for (layer_idx, layer) in self.layers.iter().enumerate() {
            let outcome = layer.walk(layer_idx, config, sink);
            summary.layers += 1;
            summary.blobs += layer.blob_size();
            summary.files_written += outcome.written;
            summary.files_skipped += outcome.skipped;
        }
        summary
    }
}
