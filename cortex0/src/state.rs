//! The state protocol — mutable key-value data shared across trials.

use serde_json::Value;

/// Mutable key-value state for one session run.
///
/// Reads and writes are deliberately recoverable: an absent key or a
/// rejected write is logged and ignored, never fatal. A typo in a trial
/// callback must not crash a live participant session.
///
/// `Value::Null` is the explicit "absent" sentinel. Storing it is
/// rejected, so `get` returning a value always means the key was
/// deliberately written.
pub trait StateStore: Send + Sync {
    /// The value of `key`, or `None` (with an error log) when absent.
    fn get(&self, key: &str) -> Option<Value>;

    /// Set `key` to `value`. `Value::Null` is rejected with an error log.
    /// Keys not declared at construction are accepted with a warning;
    /// state is expected to be pre-declared, not grown mid-run.
    fn set(&self, key: &str, value: Value);

    /// Restore every key to its construction-time value. Idempotent.
    fn reset(&self);

    /// The keys currently declared.
    fn keys(&self) -> Vec<String>;
}
