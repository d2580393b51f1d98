use std::collections::BTreeMap;
use std::sync::Arc;

use super::SignalModel;

/// Named signal models.
///
/// Looking up a name that was never registered scores 0.0 rather than
/// failing, so a dimension list may mention signals a deployment lacks.
#[derive(Clone, Default)]
pub struct SignalRegistry {
    models: BTreeMap<String, Arc<dyn SignalModel>>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a model under `name`.
    pub fn register(&mut self, name: impl Into<String>, model: impl SignalModel + 'static) {
        self.models.insert(name.into(), Arc::new(model));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, model: impl SignalModel + 'static) -> Self {
        self.register(name, model);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Score of `name` at `hour`, clamped to [0.0, 1.0]. Unregistered names
    /// and NaN scores contribute 0.0.
    pub fn score(&self, name: &str, hour: u32) -> f64 {
        match self.models.get(name) {
            Some(model) => {
                let raw = model.score(hour);
                if raw.is_nan() {
                    0.0
                } else {
                    raw.clamp(0.0, 1.0)
                }
            }
            None => 0.0,
        }
    }
}

impl std::fmt::Debug for SignalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalRegistry")
            .field("signals", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::HourlyProfile;

    #[test]
    fn unregistered_signal_scores_zero() {
        let registry = SignalRegistry::new();
        assert_eq!(registry.score("load", 3), 0.0);
    }

    #[test]
    fn scores_are_clamped_to_unit_interval() {
        let registry = SignalRegistry::new()
            .with("hot", HourlyProfile::flat(1.7))
            .with("cold", HourlyProfile::flat(-0.2))
            .with("broken", |_hour: u32| f64::NAN);
        assert_eq!(registry.score("hot", 0), 1.0);
        assert_eq!(registry.score("cold", 0), 0.0);
        assert_eq!(registry.score("broken", 0), 0.0);
    }

    #[test]
    fn register_replaces_existing_model() {
        let mut registry = SignalRegistry::new();
        registry.register("load", HourlyProfile::flat(0.1));
        registry.register("load", HourlyProfile::flat(0.9));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.score("load", 5), 0.9);
    }
}
