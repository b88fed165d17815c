use std::fmt;

use crate::value::Mapping;

/// Capability traits the outer dispatch layer reports for a destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The type exposes properties dynamically at runtime.
    DynamicProvider,
    /// The type behaves as a mapping from string keys to values.
    StringMapping,
}

/// Default-construction mechanism injected for concrete destination types.
pub type BagFactory = dyn Fn() -> Mapping + Send + Sync;

/// Shape of a decode destination, supplied per call by the outer dispatch
/// layer and immutable for the duration of that call.
pub struct Destination {
    dynamic_bag: bool,
    value_type: bool,
    capabilities: Vec<Capability>,
    factory: Option<Box<BagFactory>>,
}

impl Destination {
    /// The generic dynamic-bag marker: objects decode into the default bag.
    pub fn dynamic_bag() -> Self {
        Self {
            dynamic_bag: true,
            value_type: false,
            capabilities: vec![Capability::DynamicProvider, Capability::StringMapping],
            factory: None,
        }
    }

    /// A concrete reference type with the given capabilities; `factory`
    /// stands in for its default construction mechanism.
    pub fn concrete(
        capabilities: &[Capability],
        factory: impl Fn() -> Mapping + Send + Sync + 'static,
    ) -> Self {
        Self {
            dynamic_bag: false,
            value_type: false,
            capabilities: dedup(capabilities),
            factory: Some(Box::new(factory)),
        }
    }

    /// A reference type without a construction mechanism. Used to describe
    /// shapes that fail the eligibility check.
    pub fn reference(capabilities: &[Capability]) -> Self {
        Self {
            dynamic_bag: false,
            value_type: false,
            capabilities: dedup(capabilities),
            factory: None,
        }
    }

    /// A value type; never eligible for this decoder.
    pub fn value_type(capabilities: &[Capability]) -> Self {
        Self {
            dynamic_bag: false,
            value_type: true,
            capabilities: dedup(capabilities),
            factory: None,
        }
    }

    pub fn is_dynamic_bag(&self) -> bool {
        self.dynamic_bag
    }

    pub fn is_value_type(&self) -> bool {
        self.value_type
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// The empty mapping a decoded object starts from: the default bag for
    /// the dynamic-bag marker, the injected construction mechanism otherwise.
    pub(crate) fn new_bag(&self) -> Mapping {
        match &self.factory {
            Some(factory) if !self.dynamic_bag => factory(),
            _ => Mapping::new(),
        }
    }
}

fn dedup(capabilities: &[Capability]) -> Vec<Capability> {
    let mut out = Vec::with_capacity(capabilities.len());
    for &cap in capabilities {
        if !out.contains(&cap) {
            out.push(cap);
        }
    }
    out
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("dynamic_bag", &self.dynamic_bag)
            .field("value_type", &self.value_type)
            .field("capabilities", &self.capabilities)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_are_deduplicated() {
        let dest = Destination::reference(&[
            Capability::StringMapping,
            Capability::StringMapping,
            Capability::DynamicProvider,
        ]);
        assert_eq!(
            dest.capabilities(),
            [Capability::StringMapping, Capability::DynamicProvider]
        );
    }

    #[test]
    fn marker_ignores_injected_state_and_builds_default_bag() {
        let dest = Destination::dynamic_bag();
        assert!(dest.is_dynamic_bag());
        assert!(dest.new_bag().is_empty());
    }

    #[test]
    fn concrete_destination_uses_factory() {
        let dest = Destination::concrete(
            &[Capability::DynamicProvider, Capability::StringMapping],
            || {
                let mut bag = Mapping::new();
                bag.insert(
                    "seeded".to_string(),
                    crate::value::Value::Scalar(crate::value::Scalar::Null),
                );
                bag
            },
        );
        assert_eq!(dest.new_bag().len(), 1);
    }
}
