use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed set of selectable map styles. Switching styles swaps the tile
/// source on the client without remounting the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Streets,
    Outdoor,
    Dark,
    Light,
    Satellite,
}

impl MapStyle {
    pub const ALL: [MapStyle; 5] = [
        MapStyle::Streets,
        MapStyle::Outdoor,
        MapStyle::Dark,
        MapStyle::Light,
        MapStyle::Satellite,
    ];

    /// Stable identifier used in API payloads and the settings panel
    pub fn id(&self) -> &'static str {
        match self {
            MapStyle::Streets => "streets",
            MapStyle::Outdoor => "outdoor",
            MapStyle::Dark => "dark",
            MapStyle::Light => "light",
            MapStyle::Satellite => "satellite",
        }
    }

    /// Display name shown on the settings panel
    pub fn label(&self) -> &'static str {
        match self {
            MapStyle::Streets => "Streets",
            MapStyle::Outdoor => "Outdoor",
            MapStyle::Dark => "Dark",
            MapStyle::Light => "Light",
            MapStyle::Satellite => "Satellite",
        }
    }

    /// MapTiler style id backing this style
    fn provider_id(&self) -> &'static str {
        match self {
            MapStyle::Streets => "streets-v2",
            MapStyle::Outdoor => "outdoor-v2",
            MapStyle::Dark => "streets-v2-dark",
            MapStyle::Light => "streets-v2-light",
            MapStyle::Satellite => "satellite",
        }
    }

    /// Parse an identifier, falling back to `Streets` for unknown values
    pub fn from_id(id: &str) -> MapStyle {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or(MapStyle::Streets)
    }

    /// Full provider style URL for this style
    pub fn style_url(&self, api_key: &str) -> String {
        format!(
            "https://api.maptiler.com/maps/{}/style.json?key={}",
            self.provider_id(),
            api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips() {
        for style in MapStyle::ALL {
            assert_eq!(MapStyle::from_id(style.id()), style);
        }
    }

    #[test]
    fn test_from_id_falls_back_to_streets() {
        assert_eq!(MapStyle::from_id("terrain"), MapStyle::Streets);
        assert_eq!(MapStyle::from_id(""), MapStyle::Streets);
    }

    #[test]
    fn test_style_url_embeds_key_and_provider_id() {
        let url = MapStyle::Satellite.style_url("abc123");
        assert_eq!(
            url,
            "https://api.maptiler.com/maps/satellite/style.json?key=abc123"
        );
        assert!(MapStyle::Streets
            .style_url("k")
            .contains("/maps/streets-v2/"));
    }
}
