//! Manipulation linking and type-witness coercion.

use crate::linked::LinkedMap;
use cortex0::config::ManipulationValue;
use cortex0::error::LinkError;
use cortex0::host::HostPlatform;
use std::collections::HashMap;

/// Named experimental variables whose values may be assigned externally
/// (for example by a between-subjects randomisation service) instead of
/// using the configured defaults.
pub struct Manipulations {
    inner: LinkedMap<ManipulationValue>,
}

impl Manipulations {
    /// Build from the configured defaults.
    pub fn new(defaults: HashMap<String, ManipulationValue>) -> Self {
        Self {
            inner: LinkedMap::new("manipulation", defaults),
        }
    }

    /// Substitute every default with the host-assigned value.
    ///
    /// The host stores everything as a string; the configured default's
    /// variant decides the interpretation. A name the host cannot bind, or
    /// a numeric that does not parse, is a linking gap: logged and the
    /// default kept, never fatal. Local development is a supported path.
    pub fn link(&mut self, host: &dyn HostPlatform) -> Result<(), LinkError> {
        self.inner.link_with(|name, value| match host.manipulation(name) {
            Ok(raw) => match coerce(value, &raw) {
                Some(linked) => *value = linked,
                None => tracing::warn!(
                    manipulation = name,
                    raw = %raw,
                    "manipulation value not numeric, keeping default"
                ),
            },
            Err(error) => tracing::warn!(
                manipulation = name,
                error = %error,
                "manipulation was not bound"
            ),
        })
    }

    /// Local path: the defaults already hold the values to run with.
    pub fn link_local(&mut self) -> Result<(), LinkError> {
        self.inner.link_with(|_, _| {})
    }

    /// The value of one manipulation.
    pub fn get(&self, name: &str) -> Result<&ManipulationValue, LinkError> {
        self.inner.get(name)
    }

    /// The full mapping; only valid once linked.
    pub fn get_all(&self) -> Result<&HashMap<String, ManipulationValue>, LinkError> {
        self.inner.get_all()
    }

    /// Number of configured manipulations.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no manipulations are configured.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether linking has completed.
    pub fn is_linked(&self) -> bool {
        self.inner.is_linked()
    }
}

/// The coercion table. The host's returned value is always a string; the
/// default's variant is the type witness:
/// - `Number` → parsed as `f64` (`None` when unparsable)
/// - `Boolean` → compared against the literal `"true"`
/// - `Text` → kept verbatim
fn coerce(witness: &ManipulationValue, raw: &str) -> Option<ManipulationValue> {
    match witness {
        ManipulationValue::Number(_) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .map(ManipulationValue::Number),
        ManipulationValue::Boolean(_) => Some(ManipulationValue::Boolean(raw == "true")),
        ManipulationValue::Text(_) => Some(ManipulationValue::Text(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_witness_compares_against_true_literal() {
        let witness = ManipulationValue::Boolean(false);
        assert_eq!(
            coerce(&witness, "true"),
            Some(ManipulationValue::Boolean(true))
        );
        assert_eq!(
            coerce(&witness, "false"),
            Some(ManipulationValue::Boolean(false))
        );
        // Anything that isn't the exact literal is false.
        assert_eq!(
            coerce(&witness, "TRUE"),
            Some(ManipulationValue::Boolean(false))
        );
    }

    #[test]
    fn number_witness_parses() {
        let witness = ManipulationValue::Number(0.0);
        assert_eq!(coerce(&witness, "1"), Some(ManipulationValue::Number(1.0)));
        assert_eq!(
            coerce(&witness, "2.5"),
            Some(ManipulationValue::Number(2.5))
        );
        assert_eq!(coerce(&witness, "not a number"), None);
    }

    #[test]
    fn text_witness_keeps_raw_string() {
        let witness = ManipulationValue::Text("default".to_owned());
        assert_eq!(
            coerce(&witness, "true"),
            Some(ManipulationValue::Text("true".to_owned()))
        );
    }
}
