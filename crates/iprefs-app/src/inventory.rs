//! Installed editor and shell discovery
//!
//! The pane doesn't probe the system itself. It asks an
//! [`IntegrationsInventory`] what is available; the settings file provides
//! the default implementation.

use iprefs_core::prelude::*;
use iprefs_core::Shell;

use crate::config::InventorySettings;

/// Source of the available editor and shell lists
pub trait IntegrationsInventory {
    /// Editor names, in display order
    fn available_editors(&self) -> Vec<String>;

    /// Shells, in display order
    fn available_shells(&self) -> Vec<Shell>;
}

impl IntegrationsInventory for InventorySettings {
    fn available_editors(&self) -> Vec<String> {
        self.available_editors
            .iter()
            .map(|editor| editor.trim())
            .filter(|editor| !editor.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Unknown labels are skipped, and duplicates keep their first position
    fn available_shells(&self) -> Vec<Shell> {
        let mut shells = Vec::with_capacity(self.available_shells.len());
        for label in &self.available_shells {
            match label.parse::<Shell>() {
                Ok(shell) if !shells.contains(&shell) => shells.push(shell),
                Ok(_) => {}
                Err(e) => warn!("Skipping shell from inventory: {}", e),
            }
        }
        shells
    }
}
