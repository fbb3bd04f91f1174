use cardctl_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `CARDCTL_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.cardctl/`
/// 3. Walk upward from `cwd` looking for a docker-compose file
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_root_from(&cwd)
}

fn find_root_from(start: &Path) -> PathBuf {
    if let Some(dir) = walk_up(start, |d| d.join(paths::CARDCTL_DIR).is_dir()) {
        return dir;
    }
    if let Some(dir) = walk_up(start, |d| {
        paths::COMPOSE_FILES.iter().any(|f| d.join(f).is_file())
    }) {
        return dir;
    }
    start.to_path_buf()
}

fn walk_up(start: &Path, is_root: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start.ancestors().find(|d| is_root(d)).map(Path::to_path_buf)
}
