use tracing::warn;

use crate::config::{SessionConfig, DIGIT_SLOT_COUNT};

/// Sorted list of usable animation names, fixed for the lifetime of a
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationCatalog {
    names: Vec<String>,
}

impl AnimationCatalog {
    /// Sorts `names` and drops every entry in the exclusion set.
    pub fn from_names(names: Vec<String>, excluded: &[String]) -> Self {
        let mut names: Vec<String> = names
            .into_iter()
            .filter(|name| !excluded.iter().any(|bad| bad == name))
            .collect();
        names.sort();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|entry| entry == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One catalog index per digit key 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBindings {
    indices: [usize; DIGIT_SLOT_COUNT],
}

impl SlotBindings {
    /// Resolves the configured default animation name for each digit
    /// slot. A default missing from the catalog is a configuration
    /// warning, not an error: the slot falls back to its own index
    /// (clamped into the catalog for short catalogs).
    pub fn from_defaults(catalog: &AnimationCatalog, config: &SessionConfig) -> Self {
        let mut indices = [0usize; DIGIT_SLOT_COUNT];
        for (slot, default_name) in config.default_slot_animations.iter().enumerate() {
            indices[slot] = match catalog.index_of(default_name) {
                Some(index) => index,
                None => {
                    warn!(slot, default = %default_name, "default_binding_missing");
                    slot.min(catalog.len().saturating_sub(1))
                }
            };
        }
        Self { indices }
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.indices.get(slot).copied()
    }

    /// Rebinds a digit slot to a catalog entry. An out-of-range slot
    /// or catalog index is ignored: the boundary layer owns
    /// validation, the core only refuses to corrupt state.
    pub fn set(&mut self, slot: usize, catalog_index: usize, catalog: &AnimationCatalog) {
        if slot >= DIGIT_SLOT_COUNT || catalog_index >= catalog.len() {
            warn!(slot, catalog_index, "slot_binding_rejected");
            return;
        }
        self.indices[slot] = catalog_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(names: &[&str]) -> AnimationCatalog {
        AnimationCatalog::from_names(names.iter().map(|name| name.to_string()).collect(), &[])
    }

    #[test]
    fn catalog_sorts_and_excludes_bad_entries() {
        let catalog = AnimationCatalog::from_names(
            vec![
                "anim_c".to_string(),
                "ANIMATION_TEST".to_string(),
                "anim_a".to_string(),
                "anim_b".to_string(),
            ],
            &["ANIMATION_TEST".to_string()],
        );
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["anim_a", "anim_b", "anim_c"]);
    }

    #[test]
    fn default_bindings_resolve_by_name() {
        let mut config = SessionConfig::default();
        config.default_slot_animations[0] = "anim_b".to_string();
        config.default_slot_animations[1] = "anim_a".to_string();
        let catalog = catalog_of(&["anim_a", "anim_b"]);

        let bindings = SlotBindings::from_defaults(&catalog, &config);
        assert_eq!(bindings.get(0), Some(1));
        assert_eq!(bindings.get(1), Some(0));
    }

    #[test]
    fn missing_default_falls_back_to_slot_index() {
        let config = SessionConfig::default();
        let catalog = catalog_of(&[
            "zz_anim_0",
            "zz_anim_1",
            "zz_anim_2",
            "zz_anim_3",
            "zz_anim_4",
            "zz_anim_5",
            "zz_anim_6",
            "zz_anim_7",
            "zz_anim_8",
            "zz_anim_9",
        ]);

        let bindings = SlotBindings::from_defaults(&catalog, &config);
        for slot in 0..DIGIT_SLOT_COUNT {
            assert_eq!(bindings.get(slot), Some(slot));
        }
    }

    #[test]
    fn fallback_clamps_into_short_catalogs() {
        let config = SessionConfig::default();
        let catalog = catalog_of(&["only_a", "only_b"]);

        let bindings = SlotBindings::from_defaults(&catalog, &config);
        for slot in 0..DIGIT_SLOT_COUNT {
            let index = bindings.get(slot).expect("slot");
            assert!(catalog.name(index).is_some());
        }
    }

    #[test]
    fn rebind_rejects_out_of_range_slot_and_index() {
        let config = SessionConfig::default();
        let catalog = catalog_of(&["anim_a", "anim_b"]);
        let mut bindings = SlotBindings::from_defaults(&catalog, &config);
        let before = bindings;

        bindings.set(DIGIT_SLOT_COUNT, 0, &catalog);
        bindings.set(3, catalog.len(), &catalog);
        assert_eq!(bindings, before);

        bindings.set(3, 1, &catalog);
        assert_eq!(bindings.get(3), Some(1));
    }
}
