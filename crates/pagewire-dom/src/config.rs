//! Mount configuration for the widget layer.

use serde::Deserialize;

use pagewire_core::{DEFAULT_PLACEHOLDER, FLASH_HIDE_DELAY_MS};

/// Element ids, selectors, class names, and timing targeted by the
/// mount step.
///
/// Defaults reproduce the markup contract of the server templates. A
/// page can override any subset of fields through a JSON `<script>`
/// tag; unknown fields are ignored and missing ones keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Review modal root.
    pub modal_id: String,
    /// Button that opens the review modal.
    pub modal_trigger_id: String,
    /// Profile dropdown root.
    pub profile_menu_id: String,
    /// Icon that toggles the profile dropdown.
    pub profile_trigger_id: String,
    /// Class marking the dropdown as open.
    pub menu_active_class: String,
    /// Selector matching every star in the rating row.
    pub star_selector: String,
    /// Hidden form field mirroring the rating.
    pub rating_input_id: String,
    /// Selector matching flash messages.
    pub flash_selector: String,
    /// Delay before a flash message starts hiding, in milliseconds.
    pub flash_delay_ms: u32,
    /// Cover-image file input.
    pub file_input_id: String,
    /// Text node showing the selected file's name.
    pub file_label_id: String,
    /// Image node showing the preview.
    pub preview_image_id: String,
    /// Label text while no file is selected.
    pub label_placeholder: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            modal_id: "Modal".to_string(),
            modal_trigger_id: "openModal".to_string(),
            profile_menu_id: "profileMenu".to_string(),
            profile_trigger_id: "profileTrigger".to_string(),
            menu_active_class: "active".to_string(),
            star_selector: ".star-rating .star".to_string(),
            rating_input_id: "ratingValue".to_string(),
            flash_selector: ".flash".to_string(),
            flash_delay_ms: FLASH_HIDE_DELAY_MS,
            file_input_id: "cover".to_string(),
            file_label_id: "coverFileName".to_string(),
            preview_image_id: "coverImagePreview".to_string(),
            label_placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl MountConfig {
    /// Parse a page-supplied JSON override.
    ///
    /// Malformed JSON logs a warning and falls back to the defaults
    /// rather than failing the mount.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Invalid mount config, using defaults: {}", err);
                Self::default()
            }
        }
    }
}
