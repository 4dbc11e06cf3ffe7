use bevy::prelude::*;
use constants::palette::WHITE_WARM;
use serde::{Deserialize, Serialize};

/// One floating caption: the text, a hex color, and a relative size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    pub color: String,
    pub size: f32,
}

impl CaptionEntry {
    /// Parsed caption color; malformed hex falls back to warm white rather
    /// than failing the whole manifest.
    pub fn color(&self) -> Color {
        Srgba::hex(&self.color)
            .map(Color::Srgba)
            .unwrap_or(WHITE_WARM)
    }
}

/// One framed photo, referenced by asset path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub image: String,
}

/// Scene content manifest as a Bevy asset. Mirrors the JSON structure
/// exactly; everything that is *content* rather than configuration lives
/// here so the scene can be re-dressed without a rebuild.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    pub captions: Vec<CaptionEntry>,
    pub photos: Vec<PhotoEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "captions": [
            { "text": "Merry Christmas", "color": "#FFD700", "size": 1.5 },
            { "text": "2025", "color": "#E0BFB8", "size": 1.2 }
        ],
        "photos": [
            { "image": "photos/img1.jpg" },
            { "image": "photos/img2.jpg" }
        ]
    }"##;

    #[test]
    fn manifest_json_round_trips() {
        let manifest: SceneManifest = serde_json::from_str(SAMPLE).expect("sample must parse");
        assert_eq!(manifest.captions.len(), 2);
        assert_eq!(manifest.photos.len(), 2);
        assert_eq!(manifest.captions[0].text, "Merry Christmas");
        assert_eq!(manifest.photos[1].image, "photos/img2.jpg");

        let encoded = serde_json::to_string(&manifest).expect("manifest must serialize");
        let decoded: SceneManifest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.captions[1].size, 1.2);
    }

    #[test]
    fn malformed_color_falls_back_instead_of_failing() {
        let entry = CaptionEntry {
            text: "x".into(),
            color: "not-a-color".into(),
            size: 1.0,
        };
        assert_eq!(entry.color(), WHITE_WARM);

        let gold = CaptionEntry {
            text: "x".into(),
            color: "#FFD700".into(),
            size: 1.0,
        };
        assert_ne!(gold.color(), WHITE_WARM);
    }
}
