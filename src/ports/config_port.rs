//! Configuration access port trait.

/// Typed getters distinguish "key absent" (`None`) from "present but
/// unparsable" (`Some(Err(raw))`, carrying the raw text) so callers can
/// substitute a default with a warning instead of silently swallowing the
/// bad value.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Option<Result<i64, String>>;
    fn get_double(&self, section: &str, key: &str) -> Option<Result<f64, String>>;
    fn get_bool(&self, section: &str, key: &str) -> Option<Result<bool, String>>;
    /// Comma-separated list value; `None` when the key is absent.
    fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>>;
}
