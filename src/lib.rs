//! # caffemodel-parser
//!
//! Inspect binary Caffe models and dump their weights.
//!
//! This crate decodes a `.caffemodel` (a serialized `NetParameter`) and:
//! - Reports the net, each layer and each weight blob on a [`LogSink`]
//! - Writes every blob's `data` to `layer_<name>.weight<i>.txt`, one value per line
//! - Writes the same values to `layer_<name>.weight<i>.data` as binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use caffemodel_parser::{CaffeModel, ExportConfig, LogSink};
//!
//! let model = CaffeModel::load_from_file("bvlc_alexnet.caffemodel")?;
//! let config = ExportConfig::new("./caffedata");
//! config.prepare()?;
//!
//! let mut sink = LogSink::create(&config.log_path())?;
//! let summary = model.walk(&config, &mut sink);
//! println!("{} layers, {} blobs", summary.layers, summary.blobs);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// include generated protobuf code inside a small module so we can silence
// lints and doc warnings originating from the generated file only.
#[allow(clippy::all)]
#[allow(rustdoc::all)]
mod caffe_generated {
    include!(concat!(env!("OUT_DIR"), "/caffe.rs"));
}

pub use caffe_generated::*;

pub mod blob;
pub mod config;
pub mod error;
pub mod layer;
pub mod model;
pub(crate) mod proto_adapter;
pub mod sink;
pub mod types;
pub mod weight;

pub use blob::{BlobInfo, ExportOutcome};
pub use config::ExportConfig;
pub use error::{Error, Result};
pub use layer::LayerInfo;
pub use model::{CaffeModel, WalkSummary};
pub use sink::LogSink;
pub use types::{DataLayout, PLACEHOLDER};
pub use weight::WeightDescriptor;
