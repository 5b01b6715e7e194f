use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Error, Result};

/// Write one formatted line to a [`LogSink`]
///
/// ```rust
/// use caffemodel_parser::{LogSink, sinkln};
///
/// let mut sink = LogSink::new(Vec::new(), false);
/// sinkln!(sink, "[Info]: {} layers", 3);
/// assert_eq!(sink.into_inner(), b"[Info]: 3 layers\n");
/// ```
#[macro_export]
macro_rules! sinkln {
    ($sink:expr) => {
        $sink.line(format_args!(""))
    };
    ($sink:expr, $($arg:tt)*) => {
        $sink.line(format_args!($($arg)*))
    };
}

/// Destination for the tool's report: a writer, optionally mirrored to stdout
pub struct LogSink<W: Write> {
    writer: W,
    mirror: bool,
}

impl LogSink<BufWriter<File>> {
    /// Create (truncating) a log file, mirroring every line to stdout
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::LogOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LogSink::new(BufWriter::new(file), true))
    }
}

impl<W: Write> LogSink<W> {
    pub fn new(writer: W, mirror: bool) -> Self {
        LogSink { writer, mirror }
    }

    /// Append one line. Failures to write the log or its stdout mirror are
    /// ignored: a full disk or a closed pipe never interrupts the dump itself.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = writeln!(self.writer, "{}", args);
        if self.mirror {
            let _ = writeln!(io::stdout().lock(), "{}", args);
        }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> W {
        let _ = self.writer.flush();
        self.writer
    }
}
