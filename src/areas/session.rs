use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// The workspace plus the writer commands print to
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Session {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Session {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn workspace_resolves_against_the_canonical_directory() -> anyhow::Result<()> {
        let dir = assert_fs::TempDir::new()?;
        let session = Session::new(&dir.path().to_string_lossy(), Box::new(Vec::<u8>::new()))?;

        assert_eq!(
            session.workspace().resolve(Path::new("org.txt")),
            dir.path().canonicalize()?.join("org.txt")
        );

        Ok(())
    }
}
