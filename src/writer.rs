//! Output writer for sorted address lists.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Address, Error, OutputFormat, Result};

/// Render the health-check shell fragment for one proxy address.
///
/// The fragment expects `$user`, `$pass`, `$port`, `$URL` and
/// `$error_occurred` to be set by the surrounding script. A request that
/// returns no HTTP status within 3 seconds prints `Error:<addr>`; a success
/// prints `*`.
pub fn render_script(addr: &Address) -> String {
    format!(
        concat!(
            "response=$(curl -m 3 -x http://$user:$pass@{ip}:$port $URL --silent ",
            "--write-out \"%{{http_code}}\" --output /dev/null)\n",
            "if [ \"$response\" -eq \"000\" ]; then\n",
            "\tif [ $error_occurred -eq 0 ]; then\n",
            "\t\techo \"\"\n",
            "\t\terror_occurred=1\n",
            "\tfi\n",
            "\techo \"Error:{ip}\"\n",
            "else\n",
            "\techo -n \"*\"\n",
            "\terror_occurred=0\n",
            "fi\n",
            "sleep 0.01\n",
        ),
        ip = addr
    )
}

/// Writes one output unit per address.
#[derive(Debug, Clone)]
pub struct AddressWriter {
    format: OutputFormat,
    progress: bool,
}

impl AddressWriter {
    /// Create a writer for the given format. Progress printing is on.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            progress: true,
        }
    }

    /// Enable or disable printing each address to stdout as it is written.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the output unit for one address, including its line terminator.
    pub fn render(&self, addr: &Address) -> String {
        match self.format {
            OutputFormat::Plain => format!("{}\n", addr),
            OutputFormat::Script => format!("{}\n", render_script(addr)),
        }
    }

    /// Write all units to a sink.
    ///
    /// Stops at the first failed write. Returns the number of units written.
    /// The sink is not flushed. Progress lines go to stdout; failures there
    /// (a closed pipe, say) are ignored and never affect the sink.
    pub fn write_to<W: Write>(&self, out: &mut W, addresses: &[Address]) -> io::Result<usize> {
        let stdout = io::stdout();
        let progress = self.progress.then(|| stdout.lock());
        self.write_with_progress(out, progress, addresses)
    }

    /// Same as [`write_to`](Self::write_to), with progress lines sent to
    /// `progress` instead of stdout.
    pub fn write_with_progress<W: Write, P: Write>(
        &self,
        out: &mut W,
        mut progress: Option<P>,
        addresses: &[Address],
    ) -> io::Result<usize> {
        for (count, addr) in addresses.iter().enumerate() {
            if let Some(console) = progress.as_mut() {
                if let Err(e) = writeln!(console, "{}", addr) {
                    log::debug!("Progress output disabled: {}", e);
                    progress = None;
                }
            }
            if let Err(e) = out.write_all(self.render(addr).as_bytes()) {
                log::warn!("Write failed after {} entries", count);
                return Err(e);
            }
        }
        if let Some(console) = progress.as_mut() {
            let _ = console.flush();
        }
        Ok(addresses.len())
    }

    /// Create or truncate `path` and write all units to it.
    ///
    /// Buffered output is flushed even when a write fails part way.
    pub fn write_file(&self, path: impl AsRef<Path>, addresses: &[Address]) -> Result<usize> {
        let path = path.as_ref();
        let write_err = |source: io::Error| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|source| Error::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let written = match self.write_to(&mut out, addresses) {
            Ok(n) => n,
            Err(e) => {
                let _ = out.flush();
                return Err(write_err(e));
            }
        };
        out.flush().map_err(write_err)?;

        log::info!(
            "Wrote {} {} entries to {:?}",
            written,
            self.format,
            path
        );
        Ok(written)
    }
}
