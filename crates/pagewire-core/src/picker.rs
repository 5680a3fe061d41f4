//! Cover-image file picker: name label plus asynchronous preview.

use crate::view::PageView;

/// Label text shown while no file is selected.
pub const DEFAULT_PLACEHOLDER: &str = "No file selected";

/// Token tying an asynchronous file read to the selection that started it.
///
/// Tickets are issued in selection order; only the most recent one is
/// live. Reads can finish out of order, so a completion presenting an
/// old ticket is discarded instead of overwriting a newer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// File picker controller.
///
/// Label mode sets a text node to the selected file's name (or the
/// placeholder when the selection is cleared). Preview mode hands the
/// adapter a [`ReadTicket`] per selection; the adapter reads the file
/// as a data URL and reports back with the ticket.
#[derive(Debug, Clone)]
pub struct CoverPicker<N> {
    label: Option<N>,
    preview: Option<N>,
    placeholder: String,
    /// Sequence number of the latest selection.
    seq: u64,
}

impl<N: Clone + PartialEq> CoverPicker<N> {
    /// Create a picker over an optional label and preview-image node.
    pub fn new(label: Option<N>, preview: Option<N>, placeholder: impl Into<String>) -> Self {
        Self {
            label,
            preview,
            placeholder: placeholder.into(),
            seq: 0,
        }
    }

    /// Handle a selection change. `name` is the first selected file's
    /// name, or `None` when the selection was cleared.
    ///
    /// Returns a ticket when the adapter should read the file for the
    /// preview. Every call supersedes all earlier tickets, including
    /// clearing calls that return no ticket of their own.
    pub fn on_selection<V: PageView<Node = N>>(
        &mut self,
        view: &mut V,
        name: Option<&str>,
    ) -> Option<ReadTicket> {
        self.seq += 1;
        if let Some(label) = &self.label {
            match name {
                Some(name) => view.set_text(label, name),
                None => view.set_text(label, &self.placeholder),
            }
        }
        match (name, &self.preview) {
            (Some(_), Some(_)) => Some(ReadTicket(self.seq)),
            _ => None,
        }
    }

    /// Apply a finished read to the preview image.
    ///
    /// Returns true iff the result was applied. Stale tickets leave
    /// the preview untouched.
    pub fn on_read_complete<V: PageView<Node = N>>(
        &mut self,
        view: &mut V,
        ticket: ReadTicket,
        data_url: &str,
    ) -> bool {
        if ticket.0 != self.seq {
            log::debug!("discarding stale preview read");
            return false;
        }
        match &self.preview {
            Some(preview) => {
                view.set_image_src(preview, data_url);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePage;

    const LABEL: u32 = 1;
    const PREVIEW: u32 = 2;

    fn picker() -> CoverPicker<u32> {
        CoverPicker::new(Some(LABEL), Some(PREVIEW), DEFAULT_PLACEHOLDER)
    }

    #[test]
    fn test_label_shows_file_name() {
        let mut page = FakePage::new();
        let mut picker = picker();

        picker.on_selection(&mut page, Some("cover.png"));
        assert_eq!(page.text(LABEL), Some("cover.png"));
    }

    #[test]
    fn test_label_resets_to_placeholder_on_clear() {
        let mut page = FakePage::new();
        let mut picker = picker();

        picker.on_selection(&mut page, Some("cover.png"));
        picker.on_selection(&mut page, None);
        assert_eq!(page.text(LABEL), Some(DEFAULT_PLACEHOLDER));
    }

    #[test]
    fn test_preview_read_lands() {
        let mut page = FakePage::new();
        let mut picker = picker();

        let ticket = picker.on_selection(&mut page, Some("cover.png")).unwrap();
        assert!(picker.on_read_complete(&mut page, ticket, "data:image/png;base64,AAAA"));
        assert!(page.image_src(PREVIEW).unwrap().starts_with("data:"));
    }

    #[test]
    fn test_stale_read_does_not_overwrite_newer_selection() {
        let mut page = FakePage::new();
        let mut picker = picker();

        let first = picker.on_selection(&mut page, Some("a.png")).unwrap();
        let second = picker.on_selection(&mut page, Some("b.png")).unwrap();

        // Reads finish out of order: b lands first, then a's stale read.
        assert!(picker.on_read_complete(&mut page, second, "data:image/png;base64,BBBB"));
        assert!(!picker.on_read_complete(&mut page, first, "data:image/png;base64,AAAA"));
        assert_eq!(page.image_src(PREVIEW), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn test_clearing_selection_invalidates_inflight_read() {
        let mut page = FakePage::new();
        let mut picker = picker();

        let ticket = picker.on_selection(&mut page, Some("a.png")).unwrap();
        assert_eq!(picker.on_selection(&mut page, None), None);

        assert!(!picker.on_read_complete(&mut page, ticket, "data:image/png;base64,AAAA"));
        assert_eq!(page.image_src(PREVIEW), None);
    }

    #[test]
    fn test_no_ticket_without_preview_node() {
        let mut page = FakePage::new();
        let mut picker = CoverPicker::new(Some(LABEL), None, DEFAULT_PLACEHOLDER);

        assert_eq!(picker.on_selection(&mut page, Some("cover.png")), None);
        assert_eq!(page.text(LABEL), Some("cover.png"));
    }

    #[test]
    fn test_preview_only_picker_skips_label() {
        let mut page = FakePage::new();
        let mut picker = CoverPicker::new(None, Some(PREVIEW), DEFAULT_PLACEHOLDER);

        let ticket = picker.on_selection(&mut page, Some("cover.png")).unwrap();
        assert_eq!(page.text(LABEL), None);
        assert!(picker.on_read_complete(&mut page, ticket, "data:image/png;base64,AAAA"));
    }
}
