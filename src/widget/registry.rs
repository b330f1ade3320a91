//! Named widget factories.
//!
//! A [`WidgetRegistry`] maps plugin IDs to [`WidgetPlugin`] descriptors. It
//! is an ordinary owned value: hosts create one and pass it by reference.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::widget::traits::Widget;

/// Errors from plugin validation and registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("widget plugin id is required")]
    MissingId,
    #[error("widget plugin {0} has no factory")]
    MissingFactory(String),
    #[error("widget plugin already registered: {0}")]
    Duplicate(String),
}

type Factory = Box<dyn Fn() -> Box<dyn Widget>>;

/// Descriptor of a third-party widget.
#[derive(Default)]
pub struct WidgetPlugin {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub categories: Vec<String>,
    factory: Option<Factory>,
}

impl fmt::Debug for WidgetPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetPlugin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("categories", &self.categories)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

impl WidgetPlugin {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_owned(), ..Self::default() }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_owned();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.push(category.to_owned());
        self
    }

    pub fn with_factory(mut self, factory: impl Fn() -> Box<dyn Widget> + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Check the descriptor is usable: a non-blank ID and a factory.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(RegistryError::MissingId);
        }
        if self.factory.is_none() {
            return Err(RegistryError::MissingFactory(id.to_owned()));
        }
        Ok(())
    }

    /// Build a fresh widget instance.
    pub fn create(&self) -> Option<Box<dyn Widget>> {
        self.factory.as_ref().map(|factory| factory())
    }
}

/// Plugins keyed by trimmed ID, listed in ID order.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    plugins: BTreeMap<String, WidgetPlugin>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add `plugin`. An ID may only be registered once.
    pub fn register(&mut self, mut plugin: WidgetPlugin) -> Result<(), RegistryError> {
        plugin.validate()?;
        let id = plugin.id.trim().to_owned();
        if self.plugins.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        debug!(plugin = %id, version = %plugin.version, "registered widget plugin");
        plugin.id.clone_from(&id);
        self.plugins.insert(id, plugin);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&WidgetPlugin> {
        self.plugins.get(id.trim())
    }

    /// All plugins sorted by ID.
    pub fn list(&self) -> Vec<&WidgetPlugin> {
        self.plugins.values().collect()
    }

    /// Instantiate the widget registered under `id`.
    pub fn create(&self, id: &str) -> Option<Box<dyn Widget>> {
        self.get(id).and_then(WidgetPlugin::create)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::testing::probe::Probe;
    use pretty_assertions::assert_eq;

    fn gauge() -> WidgetPlugin {
        WidgetPlugin::new("acme.gauge")
            .with_name("Gauge")
            .with_version("1.2.0")
            .with_category("charts")
            .with_factory(|| Box::new(Probe::new("Gauge", Size::new(10, 1))))
    }

    #[test]
    fn validate_requires_id_and_factory() {
        assert_eq!(WidgetPlugin::new("  ").validate(), Err(RegistryError::MissingId));
        assert_eq!(
            WidgetPlugin::new("x").validate(),
            Err(RegistryError::MissingFactory("x".into()))
        );
        assert_eq!(gauge().validate(), Ok(()));
    }

    #[test]
    fn register_and_create() {
        let mut registry = WidgetRegistry::new();
        registry.register(gauge()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("acme.gauge").map(|p| p.name.as_str()), Some("Gauge"));
        let widget = registry.create("acme.gauge").unwrap();
        assert_eq!(widget.style_type(), "Gauge");
        assert!(registry.create("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_after_trimming() {
        let mut registry = WidgetRegistry::new();
        registry.register(gauge()).unwrap();
        let dup = WidgetPlugin::new(" acme.gauge ").with_factory(|| Box::new(Probe::new("Other", Size::ZERO)));
        let err = registry.register(dup).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("acme.gauge".into()));
        assert_eq!(err.to_string(), "widget plugin already registered: acme.gauge");
    }

    #[test]
    fn invalid_plugins_are_not_stored() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.register(WidgetPlugin::new("")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn list_is_sorted_by_id() {
        let mut registry = WidgetRegistry::new();
        for id in ["zeta", "alpha", "mid"] {
            registry
                .register(WidgetPlugin::new(id).with_factory(|| Box::new(Probe::new("P", Size::ZERO))))
                .unwrap();
        }
        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}
