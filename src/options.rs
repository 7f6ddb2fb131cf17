//! Option payloads forwarded to the render service
//!
//! Every field is optional and omitted from the JSON body when unset, so
//! defaulted options serialize to exactly `{}`, the shape the service
//! treats as "use renderer defaults".

use clap::ValueEnum;
use serde::Serialize;

/// Screenshot options understood by the service's renderer
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Viewport width in pixels (service default: 1200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Viewport height in pixels (service default: 800)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Device scale factor (service default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Output image format (service default: png)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    /// JPEG quality 0-100; the service ignores it for PNG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// Capture the full scrollable page instead of the viewport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
}

/// Image format accepted by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// Sanitizer options understood by the service
///
/// `<script>` tags are always stripped server-side; these only add to that.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeOptions {
    /// Strip inline `on*` event handler attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_event_handlers: Option<bool>,
    /// Tags to remove entirely
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_options_serialize_empty() {
        let json = serde_json::to_string(&RenderOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_render_options_use_service_field_names() {
        let options = RenderOptions {
            width: Some(640),
            format: Some(ImageFormat::Jpeg),
            quality: Some(80),
            full_page: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "width": 640,
                "type": "jpeg",
                "quality": 80,
                "fullPage": true
            })
        );
    }

    #[test]
    fn test_default_sanitize_options_serialize_empty() {
        let json = serde_json::to_string(&SanitizeOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_sanitize_options_use_service_field_names() {
        let options = SanitizeOptions {
            remove_event_handlers: Some(true),
            remove_tags: vec!["iframe".to_string(), "style".to_string()],
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "removeEventHandlers": true,
                "removeTags": ["iframe", "style"]
            })
        );
    }
}
