use super::*;

pub(super) fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&LocalStore) -> Result<()>,
{
    let cwd = std::env::current_dir().context("get current dir")?;
    let store = LocalStore::discover(&cwd)?;
    f(&store)
}
