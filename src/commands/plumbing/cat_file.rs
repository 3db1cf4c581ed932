use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print a stored object's content, resolving abbreviated ids
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = self.database().resolve_prefix(object_id)?;
        let object = self.database().parse_object(&object_id)?;

        write!(self.writer(), "{}", object.display())?;

        Ok(())
    }
}
