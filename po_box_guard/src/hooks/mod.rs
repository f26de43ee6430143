use crate::checkout::{AddressData, ErrorSink, validate_addresses};
use crate::errors::GuardError;
use crate::store::{SettingsStore, load_settings};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// The checkout stage the guard binds to: after field submission, before the
/// order is created, so an appended error still blocks checkout.
pub const AFTER_CHECKOUT_VALIDATION: &str = "after_checkout_validation";

/// A callback bound to a pipeline stage: receives the submitted fields and
/// the pipeline's error collector.
pub type ValidationHook = Box<dyn Fn(&AddressData, &mut dyn ErrorSink) + Send + Sync>;

/// Named pipeline stages, each holding its hooks in registration order.
///
/// The host pipeline owns an instance of this registry, lets plugins register
/// against named stages, and dispatches each stage at the matching point of
/// its checkout flow.
#[derive(Default)]
pub struct HookRegistry {
    stages: IndexMap<String, Vec<ValidationHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hook to the named stage. Hooks run in registration order.
    pub fn register(&mut self, stage: &str, hook: ValidationHook) {
        self.stages.entry(stage.to_string()).or_default().push(hook);
        debug!("Registered hook for stage '{}'", stage);
    }

    /// Runs every hook of the named stage, in order, against the submitted
    /// data and the pipeline's error collector.
    pub fn dispatch(
        &self,
        stage: &str,
        data: &AddressData,
        errors: &mut dyn ErrorSink,
    ) -> Result<(), GuardError> {
        let hooks = self
            .stages
            .get(stage)
            .ok_or_else(|| GuardError::UnknownStage(stage.to_string()))?;

        for hook in hooks {
            hook(data, errors);
        }
        Ok(())
    }
}

/// Installs the PO Box check at the post-submission, pre-order-creation
/// stage. Each invocation reads a fresh settings snapshot from `store`, so
/// admin saves take effect on the next checkout without re-registration.
pub fn register_po_box_guard(registry: &mut HookRegistry, store: Arc<dyn SettingsStore>) {
    registry.register(
        AFTER_CHECKOUT_VALIDATION,
        Box::new(move |data, errors| {
            let settings = load_settings(store.as_ref());
            validate_addresses(data, errors, &settings);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::ValidationErrors;
    use crate::settings::GuardSettings;
    use crate::store::{MemoryStore, SETTINGS_KEY};
    use std::collections::HashMap;

    #[test]
    fn test_dispatching_unknown_stage_is_an_error() {
        let registry = HookRegistry::new();
        let mut errors = ValidationErrors::new();

        let result = registry.dispatch("no_such_stage", &HashMap::new(), &mut errors);

        assert!(
            matches!(&result, Err(GuardError::UnknownStage(stage)) if stage == "no_such_stage"),
            "Expected UnknownStage error, but got {:?}",
            result
        );
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let mut registry = HookRegistry::new();
        registry.register(
            AFTER_CHECKOUT_VALIDATION,
            Box::new(|_, errors| errors.add("validation", "first".to_string())),
        );
        registry.register(
            AFTER_CHECKOUT_VALIDATION,
            Box::new(|_, errors| errors.add("validation", "second".to_string())),
        );
        let mut errors = ValidationErrors::new();

        registry
            .dispatch(AFTER_CHECKOUT_VALIDATION, &HashMap::new(), &mut errors)
            .unwrap();

        assert_eq!(errors.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_registered_guard_blocks_po_box_checkout() {
        let store = Arc::new(MemoryStore::new());
        store.set(
            SETTINGS_KEY,
            GuardSettings {
                disable_shipping_po_box: true,
                disable_billing_po_box: false,
            }
            .to_props(),
        );
        let mut registry = HookRegistry::new();
        register_po_box_guard(&mut registry, store);

        let data = HashMap::from([(
            "shipping_address_1".to_string(),
            "PO Box 42".to_string(),
        )]);
        let mut errors = ValidationErrors::new();
        registry
            .dispatch(AFTER_CHECKOUT_VALIDATION, &data, &mut errors)
            .unwrap();

        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_registered_guard_sees_later_settings_changes() {
        let store = Arc::new(MemoryStore::new());
        let mut registry = HookRegistry::new();
        register_po_box_guard(&mut registry, store.clone());

        let data = HashMap::from([(
            "billing_address_1".to_string(),
            "Post Office Box 9".to_string(),
        )]);

        // Unconfigured store: default-open, nothing rejected.
        let mut errors = ValidationErrors::new();
        registry
            .dispatch(AFTER_CHECKOUT_VALIDATION, &data, &mut errors)
            .unwrap();
        assert!(errors.is_empty());

        // Flip the billing flag; next dispatch picks it up.
        store.set(
            SETTINGS_KEY,
            GuardSettings {
                disable_shipping_po_box: false,
                disable_billing_po_box: true,
            }
            .to_props(),
        );
        let mut errors = ValidationErrors::new();
        registry
            .dispatch(AFTER_CHECKOUT_VALIDATION, &data, &mut errors)
            .unwrap();
        assert_eq!(errors.len(), 1);
    }
}
