use rand::Rng as _;
use rand::distr::Alphanumeric;
use uuid::Uuid;

/// A collision-free fixture id: `<prefix>-<uuid-v4>`, hyphen-free uuid form.
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// A short random alphanumeric suffix, handy for per-run table or attribute
/// names.
pub fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
