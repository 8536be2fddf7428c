use std::env;
use std::path::{Path, PathBuf};

pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if looks_like_workspace_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find workspace root (no Cargo.toml with xtask/ found)");
        }
    }
}

fn looks_like_workspace_root(dir: &Path) -> bool {
    dir.join("Cargo.toml").is_file() && dir.join("xtask").is_dir()
}
