use crate::areas::workspace::Workspace;
use log::debug;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Everything a command needs: where files are read from and where output goes.
pub struct Session {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        debug!("session rooted at {}", path.display());

        Ok(Session {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
