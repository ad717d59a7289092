use serde::{Deserialize, Serialize};

/// Everything the invitation page renders besides the guest itself.
///
/// The invitation is one parameterized template: event details plus a theme
/// (palette, optional slideshow, optional map links). Defaults are compiled
/// in; a JSON file can replace them wholesale at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventConfig {
    pub graduate: String,
    pub program: String,
    pub school: String,
    pub ceremony: EventDetails,
    pub celebration: EventDetails,
    pub closing_note: String,
    pub theme: InvitationTheme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub venue: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvitationTheme {
    pub palette: Palette,
    /// Background slideshow image URLs; empty disables the slideshow.
    pub slideshow: Vec<String>,
    /// External map links for the venues; empty hides the section.
    pub map_links: Vec<MapLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLink {
    pub label: String,
    pub url: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            graduate: "Noemí Rocha Choque".into(),
            program: "Sistemas Informáticos".into(),
            school: "Colegio Nuestra Señora del Socavón".into(),
            ceremony: EventDetails {
                title: "Acto de Graduación".into(),
                date: "Jueves, 12 de Diciembre 2024".into(),
                time: Some("14:30 (2:30 PM)".into()),
                venue: "Hall de la Gobernación de Oruro".into(),
            },
            celebration: EventDetails {
                title: "Festejo de Celebración".into(),
                date: "Después del acto de graduación".into(),
                time: None,
                venue: "Pagador entre San Felipe y Arce N° 6660".into(),
            },
            closing_note: "¡Espero contar con tu presencia en este día tan especial!".into(),
            theme: InvitationTheme::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#6b1b3d".into(),
            secondary: "#c9a961".into(),
            background: "#f5f3f0".into(),
            text: "#2c2421".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips() {
        let config = EventConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EventConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.graduate, config.graduate);
        assert_eq!(back.theme.palette.primary, "#6b1b3d");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: EventConfig =
            serde_json::from_str(r#"{"graduate":"Someone Else"}"#).unwrap();
        assert_eq!(config.graduate, "Someone Else");
        assert_eq!(config.ceremony.title, "Acto de Graduación");
        assert!(config.theme.slideshow.is_empty());
    }
}
