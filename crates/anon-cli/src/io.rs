//! Input and output streams, optionally compressed by file extension

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

const STDIO: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Codec {
    Plain,
    Gzip,
    Zstd,
}

impl Codec {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Codec::Gzip,
            Some("zst") => Codec::Zstd,
            _ => Codec::Plain,
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file =
        File::open(path).with_context(|| format!("Cannot open input file {}", path.display()))?;

    Ok(match Codec::for_path(path) {
        Codec::Plain => Box::new(BufReader::new(file)),
        Codec::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Codec::Zstd => Box::new(BufReader::new(
            zstd::stream::read::Decoder::new(file)
                .with_context(|| format!("Cannot read zstd stream {}", path.display()))?,
        )),
    })
}

/// Output stream; call [`Output::finish`] to flush and write any trailer
pub enum Output {
    Plain(Box<dyn Write>),
    Gzip(GzEncoder<BufWriter<File>>),
    Zstd(zstd::stream::write::Encoder<'static, BufWriter<File>>),
}

pub fn open_output(path: &Path) -> Result<Output> {
    if is_stdio(path) {
        return Ok(Output::Plain(Box::new(BufWriter::new(io::stdout()))));
    }

    let file = File::create(path)
        .with_context(|| format!("Cannot create output file {}", path.display()))?;
    let file = BufWriter::new(file);

    Ok(match Codec::for_path(path) {
        Codec::Plain => Output::Plain(Box::new(file)),
        Codec::Gzip => Output::Gzip(GzEncoder::new(file, Compression::default())),
        Codec::Zstd => Output::Zstd(
            zstd::stream::write::Encoder::new(file, 0)
                .with_context(|| format!("Cannot start zstd stream {}", path.display()))?,
        ),
    })
}

impl Output {
    pub fn finish(self) -> io::Result<()> {
        match self {
            Output::Plain(mut writer) => writer.flush(),
            Output::Gzip(encoder) => encoder.finish()?.flush(),
            Output::Zstd(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Plain(writer) => writer.write(buf),
            Output::Gzip(writer) => writer.write(buf),
            Output::Zstd(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Plain(writer) => writer.flush(),
            Output::Gzip(writer) => writer.flush(),
            Output::Zstd(writer) => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn round_trip(name: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let text = "línea uno\r\nline two\nno newline";

        let mut output = open_output(&path).unwrap();
        output.write_all(text.as_bytes()).unwrap();
        output.finish().unwrap();

        let mut read_back = String::new();
        open_input(&path).unwrap().read_to_string(&mut read_back).unwrap();
        assert_eq!(read_back, text);
    }

    #[test]
    fn test_codec_for_path() {
        assert_eq!(Codec::for_path(Path::new("a.txt")), Codec::Plain);
        assert_eq!(Codec::for_path(Path::new("a.txt.gz")), Codec::Gzip);
        assert_eq!(Codec::for_path(Path::new("dir/a.zst")), Codec::Zstd);
        assert_eq!(Codec::for_path(Path::new("-")), Codec::Plain);
    }

    #[test]
    fn test_plain_round_trip() {
        round_trip("doc.txt");
    }

    #[test]
    fn test_gzip_round_trip() {
        round_trip("doc.txt.gz");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.gz");
        let mut output = open_output(&path).unwrap();
        output.write_all(b"hello").unwrap();
        output.finish().unwrap();
        assert_eq!(&std::fs::read(&path).unwrap()[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_zstd_round_trip() {
        round_trip("doc.txt.zst");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_input(&dir.path().join("missing.txt")).err().unwrap();
        assert!(err.to_string().contains("Cannot open input file"));
    }
}
