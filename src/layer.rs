use std::io::Write;

use crate::blob::ExportOutcome;
use crate::types::{LABEL_WIDTH, or_placeholder};
use crate::{BlobInfo, ExportConfig, LogSink, WeightDescriptor, sinkln};

/// Information about a Caffe layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerInfo {
    pub(crate) name: Option<String>,
    pub(crate) layer_type: Option<String>,
    pub(crate) bottom: Vec<String>,
    pub(crate) top: Vec<String>,
    pub(crate) blobs: Vec<BlobInfo>,
}

impl LayerInfo {
    /// Layer name, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Layer type tag such as `Convolution`, if one was set
    pub fn layer_type(&self) -> Option<&str> {
        self.layer_type.as_deref()
    }

    /// Names of the tensors this layer consumes
    pub fn bottom(&self) -> &[String] {
        &self.bottom
    }

    /// Names of the tensors this layer produces
    pub fn top(&self) -> &[String] {
        &self.top
    }

    pub fn blobs(&self) -> &[BlobInfo] {
        &self.blobs
    }

    pub fn bottom_size(&self) -> usize {
        self.bottom.len()
    }

    pub fn top_size(&self) -> usize {
        self.top.len()
    }

    pub fn blob_size(&self) -> usize {
        self.blobs.len()
    }

    /// Check if this is a specific layer type
    pub fn is_type(&self, layer_type: &str) -> bool {
        self.layer_type.as_deref() == Some(layer_type)
    }

    /// Print the layer section header and its fields, then dump every blob.
    ///
    /// `layer_idx` names the output files when the layer has no name.
    pub fn walk<W: Write>(
        &self,
        layer_idx: usize,
        config: &ExportConfig,
        sink: &mut LogSink<W>,
    ) -> ExportOutcome {
        let w = LABEL_WIDTH;
        sinkln!(sink);
        sinkln!(sink, "[State]: Parsing Layer-{}", layer_idx);
        sinkln!(sink, "  {:<w$}=  {}", "name", or_placeholder(self.name()));
        sinkln!(sink, "  {:<w$}=  {}", "type", or_placeholder(self.layer_type()));
        sinkln!(sink, "  {:<w$}=  {}", "bottom_size", self.bottom_size());
        sinkln!(sink, "  {:<w$}=  {}", "top_size", self.top_size());
        sinkln!(sink, "  {:<w$}=  {}", "blob_size", self.blob_size());

        let mut outcome = ExportOutcome::default();
        for (blob_idx, blob) in self.blobs.iter().enumerate() {
            sinkln!(sink, "  ---- Blob-{} ----", blob_idx);
            let wdesc = WeightDescriptor::new(self.name(), layer_idx, blob_idx);
            let blob_outcome = blob.export(&wdesc, config, sink);
            outcome.written += blob_outcome.written;
            outcome.skipped += blob_outcome.skipped;
        }
        outcome
    }
}
