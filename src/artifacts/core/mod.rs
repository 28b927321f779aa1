//! Output utilities shared by commands
//!
//! Commands write through a plain `std::io::Write`; `OutputTarget` decides
//! whether that ends up on stdout, in the pager or in a file.

use anyhow::Context;
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "@@ -1,3 +1,3 @@")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Pager,
    File(PathBuf),
}

impl OutputTarget {
    /// A file when one is given, the pager on an interactive terminal, stdout otherwise
    pub fn select(output: Option<PathBuf>, no_pager: bool) -> Self {
        match output {
            Some(path) => OutputTarget::File(path),
            None if !no_pager && io::stdout().is_terminal() => OutputTarget::Pager,
            None => OutputTarget::Stdout,
        }
    }

    /// Whether the target ends up on a terminal, where colors make sense
    pub fn is_interactive(&self) -> bool {
        match self {
            OutputTarget::Stdout => io::stdout().is_terminal(),
            OutputTarget::Pager => true,
            OutputTarget::File(_) => false,
        }
    }

    /// Opens a writer for the target; the pager, if any, must be shown with
    /// `minus::page_all` once everything has been written
    pub fn open(&self) -> anyhow::Result<(Box<dyn Write>, Option<Pager>)> {
        match self {
            OutputTarget::Stdout => Ok((Box::new(io::stdout()), None)),
            OutputTarget::Pager => {
                let pager = Pager::new();
                Ok((Box::new(PagerWriter::new(pager.clone())), Some(pager)))
            }
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create output file {}", path.display()))?;
                Ok((Box::new(BufWriter::new(file)), None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_file_wins_over_pager() {
        let target = OutputTarget::select(Some(PathBuf::from("out.diff")), false);

        assert_eq!(target, OutputTarget::File(PathBuf::from("out.diff")));
        assert!(!target.is_interactive());
    }

    #[test]
    fn disabled_pager_falls_back_to_stdout() {
        assert_eq!(OutputTarget::select(None, true), OutputTarget::Stdout);
    }

    #[test]
    fn file_target_writes_to_disk() -> Result<(), Box<dyn std::error::Error>> {
        let dir = assert_fs::TempDir::new()?;
        let path = dir.path().join("out.diff");

        let (mut writer, pager) = OutputTarget::File(path.clone()).open()?;
        writeln!(writer, "+added")?;
        drop(writer);

        assert!(pager.is_none());
        assert_eq!(std::fs::read_to_string(path)?, "+added\n");

        Ok(())
    }
}
