use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::{LABEL_WIDTH, format_value, or_placeholder};
use crate::{DataLayout, Error, ExportConfig, LogSink, Result, WeightDescriptor, sinkln};

/// Learned parameters of a layer together with their shape metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlobInfo {
    pub(crate) shape: Option<Vec<i64>>,
    pub(crate) num: Option<i32>,
    pub(crate) channels: Option<i32>,
    pub(crate) height: Option<i32>,
    pub(crate) width: Option<i32>,
    pub(crate) data: Vec<f32>,
    pub(crate) double_data: Vec<f64>,
}

/// Files produced (or skipped) while dumping one blob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOutcome {
    pub written: usize,
    pub skipped: usize,
}

impl ExportOutcome {
    fn record(&mut self, result: &Result<()>) {
        match result {
            Ok(()) => self.written += 1,
            Err(_) => self.skipped += 1,
        }
    }
}

impl BlobInfo {
    /// Shape dimensions, if the blob carries a `BlobShape`
    pub fn shape(&self) -> Option<&[i64]> {
        self.shape.as_deref()
    }

    /// Legacy 4D shape `(num, channels, height, width)`, each independently optional
    pub fn legacy_dims(&self) -> [Option<i32>; 4] {
        [self.num, self.channels, self.height, self.width]
    }

    /// Single precision values, the ones that get exported
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn double_data(&self) -> &[f64] {
        &self.double_data
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn double_data_size(&self) -> usize {
        self.double_data.len()
    }

    /// Shape as `[d0, d1, ...]`, or the placeholder when no shape is set
    pub fn shape_string(&self) -> String {
        match &self.shape {
            Some(dims) => {
                let dims: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                format!("[{}]", dims.join(", "))
            }
            None => or_placeholder::<&str>(None),
        }
    }

    /// Print the blob's metadata
    pub fn describe<W: Write>(&self, sink: &mut LogSink<W>) {
        let w = LABEL_WIDTH;
        sinkln!(sink, "    {:<w$}= {}", "shape", self.shape_string());
        sinkln!(sink, "    {:<w$}= {}", "num", or_placeholder(self.num));
        sinkln!(sink, "    {:<w$}= {}", "channel", or_placeholder(self.channels));
        sinkln!(sink, "    {:<w$}= {}", "height", or_placeholder(self.height));
        sinkln!(sink, "    {:<w$}= {}", "width", or_placeholder(self.width));
        sinkln!(sink, "    {:<w$}= {}", "data_size", self.data_size());
        sinkln!(sink, "    {:<w$}= {}", "double_data_size", self.double_data_size());
    }

    /// Print the blob's metadata and dump `data` to a `.txt` and a `.data` file.
    ///
    /// A file that cannot be written is reported on the sink and skipped; the
    /// other file is still attempted.
    pub fn export<W: Write>(
        &self,
        wdesc: &WeightDescriptor<'_>,
        config: &ExportConfig,
        sink: &mut LogSink<W>,
    ) -> ExportOutcome {
        self.describe(sink);

        let mut outcome = ExportOutcome::default();

        let text_path = wdesc.text_path(config.out_dir());
        let result = self.write_dump(&text_path, sink, |out| self.write_text(out));
        outcome.record(&result);

        let data_path = wdesc.data_path(config.out_dir());
        let result = self.write_dump(&data_path, sink, |out| {
            self.write_binary(out, config.layout)
        });
        outcome.record(&result);

        outcome
    }

    fn write_dump<W, F>(&self, path: &Path, sink: &mut LogSink<W>, body: F) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
    {
        let result = File::create(path)
            .map_err(|source| Error::OutputOpen {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|file| {
                sinkln!(sink, "[State]: Writing weight to `{}'...", path.display());
                let mut out = BufWriter::new(file);
                body(&mut out)?;
                out.flush()?;
                Ok(())
            });

        if let Err(e) = &result {
            match e {
                Error::OutputOpen { .. } => sinkln!(sink, "[Error]: {}", e),
                _ => sinkln!(sink, "[Error]: Failed writing `{}': {}", path.display(), e),
            }
        }
        result
    }

    /// One fixed-point value per line
    pub fn write_text<O: Write>(&self, out: &mut O) -> io::Result<()> {
        for &value in &self.data {
            writeln!(out, "{}", format_value(value))?;
        }
        Ok(())
    }

    /// Binary dump of `data` in the requested layout
    pub fn write_binary<O: Write>(&self, out: &mut O, layout: DataLayout) -> io::Result<()> {
        for &value in &self.data {
            out.write_all(&value.to_le_bytes())?;
            if layout.is_interleaved() {
                writeln!(out, "{}", format_value(value))?;
            }
        }
        Ok(())
    }

    /// Size in bytes of the binary dump for `layout`
    pub fn binary_len(&self, layout: DataLayout) -> usize {
        self.data.iter().map(|&v| layout.element_len(v)).sum()
    }
}
