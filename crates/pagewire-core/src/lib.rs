//! PageWire Core Library
//!
//! Platform-agnostic widget controllers for the PageWire page-enhancement
//! layer: outside-click dismissal, star rating, flash-message lifecycle,
//! and the cover-image file picker. Controllers mutate the page through
//! the [`PageView`] capability trait; the DOM binding lives in
//! `pagewire-dom`.

pub mod dismiss;
pub mod error;
pub mod flash;
pub mod picker;
pub mod rating;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use dismiss::{Appearance, Dismissible};
pub use error::{WidgetError, WidgetResult};
pub use flash::{FlashMessage, FlashPhase, FLASH_HIDE_DELAY_MS, HIDE_CLASS};
pub use picker::{CoverPicker, ReadTicket, DEFAULT_PLACEHOLDER};
pub use rating::{parse_ordinal, Star, StarRating, FILLED_CLASS};
pub use view::PageView;
