//! Zentrale Konfiguration des Selektionssubsystems.
//!
//! `SelectOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Hover-Hervorhebungsfarbe (RGBA: Hellblau).
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.6, 0.6, 0.8, 1.0];
/// Selektionsfarbe (RGBA: Grün).
pub const SELECTION_COLOR: [f32; 4] = [0.1, 0.8, 0.1, 1.0];

// ── Pick ────────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Selektions-Optionen.
/// Wird als `cad_scene_select.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOptions {
    /// Hover-Hervorhebung aktiv
    pub highlight_enabled: bool,
    /// Klick-Selektion aktiv
    pub selection_enabled: bool,
    /// Hover-Hervorhebungsfarbe (RGBA)
    pub highlight_color: [f32; 4],
    /// Selektionsfarbe (RGBA)
    pub selection_color: [f32; 4],
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f32,
    /// Volle Trefferliste statt Einzel-Pick auswerten
    #[serde(default)]
    pub want_picked_list: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            highlight_enabled: true,
            selection_enabled: true,
            highlight_color: HIGHLIGHT_COLOR,
            selection_color: SELECTION_COLOR,
            pick_radius_px: PICK_RADIUS_PX,
            want_picked_list: false,
        }
    }
}

/// Serde-Default für `pick_radius_px` (Abwärtskompatibilität bestehender
/// TOML-Dateien).
fn default_pick_radius_px() -> f32 {
    PICK_RADIUS_PX
}

impl SelectOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cad_scene_select"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cad_scene_select.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip_toml() {
        let opts = SelectOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: SelectOptions = toml::from_str(&toml_str).expect("Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_fehlende_felder_bekommen_defaults() {
        let partial = r#"
highlight_enabled = false
selection_enabled = true
highlight_color = [1.0, 0.0, 0.0, 1.0]
selection_color = [0.0, 1.0, 0.0, 1.0]
"#;
        let opts: SelectOptions = toml::from_str(partial).expect("Teil-Konfiguration");
        assert!(!opts.highlight_enabled);
        assert_eq!(opts.pick_radius_px, PICK_RADIUS_PX);
        assert!(!opts.want_picked_list);
    }
}
