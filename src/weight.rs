use std::path::{Path, PathBuf};

/// Identifies one weight blob while it is being dumped
///
/// Only used to name output files. The owning layer is referenced by name
/// when it has one and by its position in the net otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightDescriptor<'a> {
    pub host_layer: Option<&'a str>,
    pub host_layer_idx: usize,
    pub blob_idx: usize,
}

impl<'a> WeightDescriptor<'a> {
    pub fn new(host_layer: Option<&'a str>, host_layer_idx: usize, blob_idx: usize) -> Self {
        WeightDescriptor {
            host_layer,
            host_layer_idx,
            blob_idx,
        }
    }

    /// `layer_<name-or-idx>.weight<blob_idx>`, shared by both dump files
    pub fn file_stem(&self) -> String {
        let layer = match self.host_layer {
            Some(name) => sanitize_layer_name(name),
            None => self.host_layer_idx.to_string(),
        };
        format!("layer_{}.weight{}", layer, self.blob_idx)
    }

    pub fn text_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.txt", self.file_stem()))
    }

    pub fn data_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.data", self.file_stem()))
    }
}

/// Replace path separators so a layer name always maps to a single file
pub fn sanitize_layer_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '#' } else { c })
        .collect()
}
