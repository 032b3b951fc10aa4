//! Zentrale Konfiguration für den Track Drawer.
//!
//! `TrackOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Abstand der Begrenzungen zur Mittellinie (halbe Streckenbreite).
pub const BOUNDARY_OFFSET: f64 = 150.0;
/// Minimaler Radius eines fahrbaren Mittellinien-Bogens.
pub const MIN_RADIUS: f64 = 155.0;
/// Minimale Bogenlänge eines fahrbaren Mittellinien-Bogens.
pub const MIN_ARC_LENGTH: f64 = 100.0;

// ── Hütchen ─────────────────────────────────────────────────────────

/// Maximaler Hütchen-Abstand auf langen Bögen.
pub const MAX_CONE_SPACING: f64 = 500.0;
/// Hütchen-Abstand auf mittellangen Bögen.
pub const MEDIUM_CONE_SPACING: f64 = 250.0;
/// Hütchen-Abstand auf kurzen Bögen.
pub const SHORT_CONE_SPACING: f64 = 150.0;
/// Verschiebung je Achse beim Rausch-Modell.
pub const NOISE_MAGNITUDE: f64 = 20.0;

// ── Ziel ────────────────────────────────────────────────────────────

/// Zeiger innerhalb dieses Radius rastet exakt auf den Zielpunkt ein.
pub const FINISH_SNAP_RADIUS: f64 = 40.0;
/// Zeiger innerhalb dieses Radius blendet den Ziel-Hinweis ein.
pub const FINISH_PROMPT_RADIUS: f64 = 400.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Mittellinie eines gültigen Bogens (RGBA: Grau).
pub const CENTERLINE_COLOR_VALID: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Mittellinie eines ungültigen Bogens (RGBA: Rot).
pub const CENTERLINE_COLOR_INVALID: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Linke Begrenzung (RGBA: Blau).
pub const CONE_COLOR_BLUE: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
/// Rechte Begrenzung (RGBA: Gelb).
pub const CONE_COLOR_YELLOW: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Start/Ziel-Hütchen (RGBA: Orange).
pub const CONE_COLOR_ORANGE: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Strecken-Optionen.
/// Wird als `track_drawer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Abstand der Begrenzungen zur Mittellinie
    pub boundary_offset: f64,
    /// Mindestradius für gültige Bögen
    pub min_radius: f64,
    /// Mindest-Bogenlänge für gültige Bögen
    pub min_arc_length: f64,

    // ── Hütchen ─────────────────────────────────────────────────
    /// Hütchen-Abstand auf Bögen ab 1500 Einheiten
    pub max_cone_spacing: f64,
    /// Hütchen-Abstand auf Bögen ab 300 Einheiten
    pub medium_cone_spacing: f64,
    /// Hütchen-Abstand auf kürzeren Bögen
    pub short_cone_spacing: f64,
    /// Rausch-Verschiebung je Achse
    pub noise_magnitude: f64,
    /// Fester Seed für das Rausch-Modell (`None` = zufällig)
    #[serde(default)]
    pub noise_seed: Option<u64>,

    // ── Ziel ────────────────────────────────────────────────────
    /// Einrast-Radius am Zielpunkt
    pub finish_snap_radius: f64,
    /// Anzeige-Radius des Ziel-Hinweises
    pub finish_prompt_radius: f64,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe gültiger Mittellinien
    #[serde(default = "default_centerline_color_valid")]
    pub centerline_color_valid: [f32; 4],
    /// Farbe ungültiger Mittellinien
    #[serde(default = "default_centerline_color_invalid")]
    pub centerline_color_invalid: [f32; 4],
    /// Farbe blauer Hütchen
    #[serde(default = "default_cone_color_blue")]
    pub cone_color_blue: [f32; 4],
    /// Farbe gelber Hütchen
    #[serde(default = "default_cone_color_yellow")]
    pub cone_color_yellow: [f32; 4],
    /// Farbe oranger Hütchen
    #[serde(default = "default_cone_color_orange")]
    pub cone_color_orange: [f32; 4],
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            boundary_offset: BOUNDARY_OFFSET,
            min_radius: MIN_RADIUS,
            min_arc_length: MIN_ARC_LENGTH,

            max_cone_spacing: MAX_CONE_SPACING,
            medium_cone_spacing: MEDIUM_CONE_SPACING,
            short_cone_spacing: SHORT_CONE_SPACING,
            noise_magnitude: NOISE_MAGNITUDE,
            noise_seed: None,

            finish_snap_radius: FINISH_SNAP_RADIUS,
            finish_prompt_radius: FINISH_PROMPT_RADIUS,

            centerline_color_valid: CENTERLINE_COLOR_VALID,
            centerline_color_invalid: CENTERLINE_COLOR_INVALID,
            cone_color_blue: CONE_COLOR_BLUE,
            cone_color_yellow: CONE_COLOR_YELLOW,
            cone_color_orange: CONE_COLOR_ORANGE,
        }
    }
}

fn default_centerline_color_valid() -> [f32; 4] {
    CENTERLINE_COLOR_VALID
}

fn default_centerline_color_invalid() -> [f32; 4] {
    CENTERLINE_COLOR_INVALID
}

fn default_cone_color_blue() -> [f32; 4] {
    CONE_COLOR_BLUE
}

fn default_cone_color_yellow() -> [f32; 4] {
    CONE_COLOR_YELLOW
}

fn default_cone_color_orange() -> [f32; 4] {
    CONE_COLOR_ORANGE
}

impl TrackOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
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

    /// Prüft alle Maße auf endliche Werte.
    ///
    /// Begrenzungsabstand, Mindestradius und Hütchen-Abstände müssen strikt
    /// positiv sein, die übrigen Maße dürfen nicht negativ sein.
    pub fn validate(&self) -> anyhow::Result<()> {
        let positive = [
            ("boundary_offset", self.boundary_offset),
            ("min_radius", self.min_radius),
            ("max_cone_spacing", self.max_cone_spacing),
            ("medium_cone_spacing", self.medium_cone_spacing),
            ("short_cone_spacing", self.short_cone_spacing),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{} muss positiv sein, ist {}", name, value);
            }
        }
        let non_negative = [
            ("min_arc_length", self.min_arc_length),
            ("noise_magnitude", self.noise_magnitude),
            ("finish_snap_radius", self.finish_snap_radius),
            ("finish_prompt_radius", self.finish_prompt_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} darf nicht negativ sein, ist {}", name, value);
            }
        }
        Ok(())
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
            .unwrap_or_else(|_| std::path::PathBuf::from("track-drawer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("track_drawer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let options = TrackOptions {
            boundary_offset: 120.0,
            noise_seed: Some(42),
            ..TrackOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: TrackOptions = toml::from_str(&text).expect("Parsen erwartet");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_colors_fall_back_to_defaults() {
        let text = r#"
            boundary_offset = 150.0
            min_radius = 155.0
            min_arc_length = 100.0
            max_cone_spacing = 500.0
            medium_cone_spacing = 250.0
            short_cone_spacing = 150.0
            noise_magnitude = 20.0
            finish_snap_radius = 40.0
            finish_prompt_radius = 400.0
        "#;
        let parsed: TrackOptions = toml::from_str(text).expect("Parsen erwartet");
        assert_eq!(parsed, TrackOptions::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(TrackOptions::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_spacing_and_nan_offset() {
        let zero_spacing = TrackOptions {
            medium_cone_spacing: 0.0,
            ..TrackOptions::default()
        };
        assert!(zero_spacing.validate().is_err());
        let nan_offset = TrackOptions {
            boundary_offset: f64::NAN,
            ..TrackOptions::default()
        };
        assert!(nan_offset.validate().is_err());
        let negative_snap = TrackOptions {
            finish_snap_radius: -1.0,
            ..TrackOptions::default()
        };
        assert!(negative_snap.validate().is_err());
    }

    #[test]
    fn test_load_file_with_zero_spacings_uses_defaults() {
        let options = TrackOptions {
            max_cone_spacing: 0.0,
            medium_cone_spacing: 0.0,
            short_cone_spacing: 0.0,
            noise_seed: Some(9),
            ..TrackOptions::default()
        };
        let path = std::env::temp_dir().join("track_drawer_zero_spacing.toml");
        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = TrackOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, TrackOptions::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("track_drawer_does_not_exist.toml");
        assert_eq!(TrackOptions::load_from_file(&path), TrackOptions::default());
    }
}
