//! Sound-effect records and their mapping to remote rows.

use serde::{Deserialize, Deserializer, Serialize};
use sfx_api_client::SoundEffectRow;
use sfx_core::validation::Validator;
use sfx_search::Searchable;
use std::fmt;
use std::str::FromStr;

/// Marker content for the default "plus in a circle" SVG icon.
pub const DEFAULT_SVG: &str = "DEFAULT_SVG";

/// Markup the [`DEFAULT_SVG`] marker stands for.
pub const DEFAULT_SVG_MARKUP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M12 8v8"/><path d="M8 12h8"/></svg>"#;

/// How an icon's `content` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Inline SVG markup, or the [`DEFAULT_SVG`] marker
    #[default]
    Svg,
    /// Image URL or data URI
    Image,
    /// Name of a named icon component
    Component,
}

impl IconKind {
    /// Wire name used in rows and JSON
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Image => "image",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "image" => Ok(Self::Image),
            "component" => Ok(Self::Component),
            other => Err(format!("unknown icon type '{other}'")),
        }
    }
}

/// Icon shown next to a sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Content interpretation
    #[serde(rename = "type")]
    pub kind: IconKind,
    /// Markup, URL or component name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Tint color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Rendered size in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Default for Icon {
    fn default() -> Self {
        Self::default_svg(None)
    }
}

impl Icon {
    /// The default SVG icon with an optional color
    #[must_use]
    pub fn default_svg(color: Option<&str>) -> Self {
        Self {
            kind: IconKind::Svg,
            content: DEFAULT_SVG.to_string(),
            color: color.map(str::to_string),
            size: None,
        }
    }

    /// Inline SVG markup
    pub fn svg(markup: impl Into<String>, color: &str) -> Self {
        Self {
            kind: IconKind::Svg,
            content: markup.into(),
            color: Some(color.to_string()),
            size: None,
        }
    }

    /// Whether this is the default SVG (marker or empty svg content)
    #[must_use]
    pub fn is_default_svg(&self) -> bool {
        self.kind == IconKind::Svg && (self.content.is_empty() || self.content == DEFAULT_SVG)
    }

    /// Displayable content, expanding the default marker to markup
    #[must_use]
    pub fn resolved_content(&self) -> &str {
        if self.is_default_svg() {
            DEFAULT_SVG_MARKUP
        } else {
            &self.content
        }
    }
}

/// One playable sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEffect {
    /// Unique id within the library
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category
    pub category: String,
    /// Free-text description; missing or null reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Audio file path or URL
    pub file: String,
    /// Icon
    #[serde(default)]
    pub icon: Icon,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SoundEffect {
    /// Create a sound with the default icon
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            file: file.into(),
            icon: Icon::default(),
        }
    }

    /// Builder-style method to set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style method to set the icon
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Check the fields required before saving
    ///
    /// Name, category and file must be non-blank; a color, when present,
    /// must be `#rgb` or `#rrggbb`.
    pub fn validate(&self) -> sfx_core::Result<()> {
        let mut validator = Validator::new()
            .required("name", &self.name)
            .required("category", &self.category)
            .required("file", &self.file);

        if let Some(color) = self.icon.color.as_deref().filter(|c| !c.is_empty()) {
            validator = validator.hex_color("icon.color", color);
        }

        validator.validate().into_result()
    }

    /// Row for the remote table, owned by `owner_id`
    #[must_use]
    pub fn to_row(&self, owner_id: &str) -> SoundEffectRow {
        let icon_content = if self.icon.is_default_svg() {
            DEFAULT_SVG.to_string()
        } else {
            self.icon.content.clone()
        };

        SoundEffectRow {
            id: self.id,
            user_id: owner_id.to_string(),
            name: self.name.clone(),
            category: self.category.clone(),
            description: Some(self.description.clone()),
            file: self.file.clone(),
            icon_type: self.icon.kind.as_str().to_string(),
            icon_content,
            icon_color: Some(self.icon.color.clone().unwrap_or_default()),
            created_at: None,
        }
    }
}

impl From<SoundEffectRow> for SoundEffect {
    fn from(row: SoundEffectRow) -> Self {
        // unknown kinds fall back to svg so the sound stays usable
        let kind = row.icon_type.parse().unwrap_or_default();

        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            description: row.description.unwrap_or_default(),
            file: row.file,
            icon: Icon {
                kind,
                content: row.icon_content,
                color: row.icon_color.filter(|c| !c.is_empty()),
                size: None,
            },
        }
    }
}

impl Searchable for SoundEffect {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfx_core::ErrorCode;

    fn rain() -> SoundEffect {
        SoundEffect::new(5, "Rain", "Nature", "/sounds/rain.mp3")
            .with_description("Gentle rainfall ambience")
            .with_icon(Icon::default_svg(Some("#00bcd4")))
    }

    #[test]
    fn test_row_round_trip_keeps_fields() {
        let sound = rain();
        let row = sound.to_row("owner-1");
        assert_eq!(row.user_id, "owner-1");
        assert_eq!(row.icon_type, "svg");
        assert_eq!(row.icon_content, DEFAULT_SVG);
        assert_eq!(SoundEffect::from(row), sound);
    }

    #[test]
    fn test_empty_svg_content_becomes_marker() {
        let mut sound = rain();
        sound.icon.content.clear();
        assert_eq!(sound.to_row("o").icon_content, DEFAULT_SVG);
    }

    #[test]
    fn test_missing_color_is_empty_on_the_wire_and_none_back() {
        let sound = SoundEffect::new(9, "Pop", "UI", "/sounds/pop.mp3");
        let row = sound.to_row("o");
        assert_eq!(row.icon_color.as_deref(), Some(""));
        assert_eq!(SoundEffect::from(row).icon.color, None);
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let json = r#"{"id":1,"name":"A","category":"B","description":null,"file":"f"}"#;
        let sound: SoundEffect = serde_json::from_str(json).unwrap();
        assert_eq!(sound.description, "");
        assert!(sound.icon.is_default_svg());

        let json = r#"{"id":1,"name":"A","category":"B","file":"f"}"#;
        let sound: SoundEffect = serde_json::from_str(json).unwrap();
        assert_eq!(sound.description, "");
    }

    #[test]
    fn test_icon_json_shape() {
        let json = serde_json::to_value(Icon::default_svg(Some("#fff"))).unwrap();
        assert_eq!(json["type"], "svg");
        assert_eq!(json["content"], DEFAULT_SVG);
        assert!(json.get("size").is_none());
    }

    #[test]
    fn test_unknown_icon_kind_falls_back_to_svg() {
        let mut row = rain().to_row("o");
        row.icon_type = "emoji".to_string();
        assert_eq!(SoundEffect::from(row).icon.kind, IconKind::Svg);
    }

    #[test]
    fn test_validate() {
        assert!(rain().validate().is_ok());

        let blank = SoundEffect::new(1, " ", "", "/sounds/x.mp3");
        let err = blank.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("name"));
        assert!(err.message.contains("category"));

        let bad_color = rain().with_icon(Icon::default_svg(Some("teal")));
        assert!(bad_color.validate().is_err());
    }

    #[test]
    fn test_resolved_content() {
        assert_eq!(Icon::default().resolved_content(), DEFAULT_SVG_MARKUP);
        let image = Icon {
            kind: IconKind::Image,
            content: "https://cdn/x.png".to_string(),
            color: None,
            size: Some(24),
        };
        assert_eq!(image.resolved_content(), "https://cdn/x.png");
    }
}
