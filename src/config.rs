use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static DEFAULT_SIZE_HINT: OnceLock<usize> = OnceLock::new();

/// Default rendering size hint in pixels (4 px per module incl. quiet zone)
pub(crate) fn default_size_hint() -> usize {
    *DEFAULT_SIZE_HINT.get_or_init(|| parse_env_usize("LABEL_QR_SIZE_HINT", 116))
}
