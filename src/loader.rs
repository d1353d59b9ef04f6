//! Address list loader.
//!
//! Input files hold one entry per line in the form `address[:suffix]`. The
//! suffix (usually a port, sometimes credentials) is ignored. Lines that do
//! not yield an address are skipped without error.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::{Address, Error, Result};

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Line-oriented address parser.
pub struct AddressLoader;

impl AddressLoader {
    /// Parse a single line.
    ///
    /// The host part is everything before the first `:`, or the text inside
    /// `[...]` when the line starts with a bracket (`[2001:db8::1]:8080`).
    pub fn parse_line(line: &str) -> Option<Address> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        let host = match line.trim_start().strip_prefix('[') {
            Some(rest) => &rest[..rest.find(']')?],
            None => line.split(':').next().unwrap_or(line),
        };

        host.trim().parse().ok()
    }

    /// Read addresses from a reader, in input order.
    ///
    /// Lines that are not valid UTF-8 are treated like any other
    /// unparsable line. Only I/O failures are errors.
    pub fn read<R: BufRead>(mut reader: R) -> io::Result<Vec<Address>> {
        let mut addresses = Vec::new();
        let mut buf = Vec::new();
        let mut skipped = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let parsed = std::str::from_utf8(&buf)
                .ok()
                .and_then(Self::parse_line);

            match parsed {
                Some(addr) => addresses.push(addr),
                None => {
                    if !buf.iter().all(u8::is_ascii_whitespace) {
                        skipped += 1;
                    }
                }
            }
        }

        log::debug!(
            "Parsed {} addresses, skipped {} lines",
            addresses.len(),
            skipped
        );

        Ok(addresses)
    }

    /// Load addresses from a file, decompressing gzip input transparently.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Address>> {
        let path = path.as_ref();
        let read_err = |source: io::Error| Error::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let read = if is_gzip(reader.fill_buf().map_err(read_err)?) {
            log::debug!("Decompressing gzip input: {:?}", path);
            Self::read(BufReader::new(GzDecoder::new(reader)))
        } else {
            Self::read(reader)
        };
        let addresses = read.map_err(read_err)?;

        log::info!("Loaded {} addresses from {:?}", addresses.len(), path);
        Ok(addresses)
    }
}

fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[..2] == GZIP_MAGIC
}

/// Read addresses from any reader. Convenience wrapper over [`AddressLoader::read`].
pub fn read_addresses<R: Read>(reader: R) -> io::Result<Vec<Address>> {
    AddressLoader::read(BufReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_line_with_suffix() {
        assert_eq!(AddressLoader::parse_line("10.0.0.5:8080"), Some(addr("10.0.0.5")));
        assert_eq!(
            AddressLoader::parse_line("10.0.0.5:8080:user:pass"),
            Some(addr("10.0.0.5"))
        );
        assert_eq!(AddressLoader::parse_line("10.0.0.5"), Some(addr("10.0.0.5")));
        assert_eq!(AddressLoader::parse_line("10.0.0.1:x\r\n"), Some(addr("10.0.0.1")));
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert_eq!(AddressLoader::parse_line("notanip"), None);
        assert_eq!(AddressLoader::parse_line(""), None);
        assert_eq!(AddressLoader::parse_line(":8080"), None);
        assert_eq!(AddressLoader::parse_line("300.1.1.1:80"), None);
    }

    #[test]
    fn test_parse_line_bare_ipv6_hits_first_colon() {
        // "2001" is not an address
        assert_eq!(AddressLoader::parse_line("2001:db8::1"), None);
    }

    #[test]
    fn test_parse_line_bracketed_ipv6() {
        assert_eq!(
            AddressLoader::parse_line("[2001:db8::1]:8080"),
            Some(addr("2001:db8::1"))
        );
        assert_eq!(AddressLoader::parse_line("[::1]"), Some(addr("::1")));
        assert_eq!(AddressLoader::parse_line("[::1"), None);
    }

    #[test]
    fn test_read_keeps_file_order() {
        let text = "10.0.0.5:8080\n10.0.0.1:3128\nnotanip\n\n10.0.0.5:9999";
        let addrs = read_addresses(text.as_bytes()).unwrap();
        assert_eq!(addrs, vec![addr("10.0.0.5"), addr("10.0.0.1"), addr("10.0.0.5")]);
    }

    #[test]
    fn test_read_skips_invalid_utf8() {
        let mut data = b"10.0.0.1:80\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b'\n']);
        data.extend_from_slice(b"10.0.0.2:80\n");

        let addrs = read_addresses(&data[..]).unwrap();
        assert_eq!(addrs, vec![addr("10.0.0.1"), addr("10.0.0.2")]);
    }

    #[test]
    fn test_load_file_missing() {
        let result = AddressLoader::load_file("/nonexistent/ipsort/input.txt");
        assert!(matches!(result, Err(Error::FileOpen { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_file_read_error() {
        // Opening a directory succeeds on Unix; reading it does not.
        let dir = tempfile::tempdir().unwrap();

        let err = AddressLoader::load_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_load_file_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"10.0.0.2:80\n10.0.0.1:80\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let addrs = AddressLoader::load_file(&path).unwrap();
        assert_eq!(addrs, vec![addr("10.0.0.2"), addr("10.0.0.1")]);
    }

    #[test]
    fn test_load_file_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(AddressLoader::load_file(&path).unwrap().is_empty());
    }
}
