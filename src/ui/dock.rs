// src/ui/dock.rs
//! Panel dock registry.
//!
//! Hosts dock tool panels by name, and a panel name maps to at most one
//! live instance. [`PanelDock`] makes that state explicit: panels are
//! registered on first open (create-on-demand) and keep a single open/close
//! flag per name afterwards.

use std::collections::BTreeMap;

/// Open/close registry for named dockable panels
#[derive(Debug, Default)]
pub struct PanelDock {
    panels: BTreeMap<String, bool>,
}

impl PanelDock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the named panel, registering it on first use. Opening an
    /// already-open panel is a no-op, never a second instance.
    pub fn open(&mut self, name: &str) {
        self.panels.insert(name.to_string(), true);
    }

    /// Closes the named panel; the registration stays for reopening
    pub fn close(&mut self, name: &str) {
        if let Some(open) = self.panels.get_mut(name) {
            *open = false;
        }
    }

    pub fn toggle(&mut self, name: &str) {
        let entry = self.panels.entry(name.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Whether the named panel is currently open
    pub fn is_open(&self, name: &str) -> bool {
        self.panels.get(name).copied().unwrap_or(false)
    }

    /// Names of all registered panels, open or not
    pub fn panel_names(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_registers_on_demand() {
        let mut dock = PanelDock::new();
        assert!(!dock.is_open("Lighting Manager"));
        dock.open("Lighting Manager");
        assert!(dock.is_open("Lighting Manager"));
    }

    #[test]
    fn one_instance_per_name() {
        let mut dock = PanelDock::new();
        dock.open("Lighting Manager");
        dock.open("Lighting Manager");
        assert_eq!(dock.panel_names().count(), 1);
    }

    #[test]
    fn close_keeps_registration() {
        let mut dock = PanelDock::new();
        dock.open("Lighting Manager");
        dock.close("Lighting Manager");
        assert!(!dock.is_open("Lighting Manager"));
        assert_eq!(dock.panel_names().count(), 1);
    }

    #[test]
    fn toggle_flips_state() {
        let mut dock = PanelDock::new();
        dock.toggle("Renamer");
        assert!(dock.is_open("Renamer"));
        dock.toggle("Renamer");
        assert!(!dock.is_open("Renamer"));
    }
}
