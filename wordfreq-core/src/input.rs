//! Reading raw text from files and stdin.
//!
//! Acquiring text is outside the pipeline proper; these helpers only turn
//! bytes into a `String` and report failures with the offending path.

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a piece of input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(arg.to_path_buf())
        }
    }

    fn path(&self) -> &Path {
        match self {
            Source::Stdin => Path::new("<stdin>"),
            Source::File(path) => path,
        }
    }

    /// Maps command-line arguments to sources.
    ///
    /// No arguments means stdin. Stdin can only be drained once, so repeated
    /// `-` arguments after the first are dropped.
    pub fn from_args(args: &[PathBuf]) -> Vec<Source> {
        if args.is_empty() {
            return vec![Source::Stdin];
        }

        let mut stdin_seen = false;
        let mut sources = Vec::with_capacity(args.len());
        for arg in args {
            let source = Source::from_arg(arg);
            if source == Source::Stdin {
                if stdin_seen {
                    tracing::warn!("stdin listed more than once; reading it once");
                    continue;
                }
                stdin_seen = true;
            }
            sources.push(source);
        }
        sources
    }

    /// Reads the whole source as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = match self {
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(|source| Error::Read {
                        path: self.path().to_path_buf(),
                        source,
                    })?;
                buf
            }
            Source::File(path) => fs::read(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?,
        };

        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path().display());
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            path: self.path().to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(Source::from_arg(Path::new("-")), Source::Stdin);
        assert_eq!(
            Source::from_arg(Path::new("book.txt")),
            Source::File(PathBuf::from("book.txt"))
        );
    }

    #[test]
    fn no_args_means_stdin() {
        assert_eq!(Source::from_args(&[]), [Source::Stdin]);
    }

    #[test]
    fn repeated_stdin_kept_once() {
        let args: Vec<PathBuf> = ["-", "a.txt", "-", "-"].iter().map(PathBuf::from).collect();
        assert_eq!(
            Source::from_args(&args),
            [Source::Stdin, Source::File(PathBuf::from("a.txt"))]
        );
    }

    #[test]
    fn repeated_files_are_kept() {
        let args: Vec<PathBuf> = ["a.txt", "a.txt"].iter().map(PathBuf::from).collect();
        assert_eq!(Source::from_args(&args).len(), 2);
    }

    #[test]
    fn reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("Héllo wörld".as_bytes()).unwrap();

        let text = Source::File(file.path().to_path_buf()).read_to_string().unwrap();
        assert_eq!(text, "Héllo wörld");
    }

    #[test]
    fn invalid_utf8_reported_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff, 0xfe]).unwrap();

        let source = Source::File(file.path().to_path_buf());
        match source.read_to_string() {
            Err(Error::InvalidUtf8 { path }) => assert_eq!(path, file.path()),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reported() {
        let source = Source::File(PathBuf::from("/nonexistent/input.txt"));
        let err = source.read_to_string().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }
}
