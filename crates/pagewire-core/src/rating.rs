//! Discrete-value selector (star rating).

use crate::error::{WidgetError, WidgetResult};
use crate::view::PageView;

/// Class applied to stars at or below the current rating.
pub const FILLED_CLASS: &str = "filled";

/// One selectable star and its ordinal value.
#[derive(Debug, Clone)]
pub struct Star<N> {
    /// The star's element.
    pub node: N,
    /// 1-based position in the row.
    pub value: u8,
}

/// Parse a star ordinal from its attribute text.
///
/// Ordinals arrive as attribute strings; comparing those directly
/// misorders values past 9, so they are coerced to integers at the
/// boundary and range-checked against the star count.
pub fn parse_ordinal(raw: &str, max: u8) -> WidgetResult<u8> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| WidgetError::InvalidOrdinal(raw.to_string()))?;
    if value == 0 || value > max {
        return Err(WidgetError::OrdinalOutOfRange { value, max });
    }
    Ok(value)
}

/// Star-rating controller.
///
/// Holds the current rating and repaints the whole row on every
/// selection: a star is filled iff its value is at or below the rating
/// (closed range, left-to-right fill). The backing form field is
/// mirrored in the same call, so a surrounding form submission always
/// carries the current value.
#[derive(Debug, Clone)]
pub struct StarRating<N> {
    stars: Vec<Star<N>>,
    /// Hidden form field mirroring the rating.
    backing: Option<N>,
    rating: u8,
}

impl<N: Clone + PartialEq> StarRating<N> {
    /// Build a controller from its stars and optional backing field.
    ///
    /// `initial` is the backing field's rendered value. Anything
    /// unparseable or out of range falls back to 0 (unrated). The
    /// initial fill is server-rendered, so the constructor does not
    /// repaint.
    pub fn new(stars: Vec<Star<N>>, backing: Option<N>, initial: Option<&str>) -> Self {
        let max = stars.len() as u8;
        let rating = initial
            .and_then(|raw| parse_ordinal(raw, max).ok())
            .unwrap_or(0);
        Self {
            stars,
            backing,
            rating,
        }
    }

    /// Get the current rating (0 = unrated).
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Number of stars in the row.
    pub fn star_count(&self) -> u8 {
        self.stars.len() as u8
    }

    /// Select rating `value`, repaint the row, and mirror the backing field.
    pub fn select<V: PageView<Node = N>>(&mut self, view: &mut V, value: u8) -> WidgetResult<()> {
        if value == 0 || value > self.star_count() {
            return Err(WidgetError::OrdinalOutOfRange {
                value,
                max: self.star_count(),
            });
        }
        self.rating = value;
        for star in &self.stars {
            view.set_class(&star.node, FILLED_CLASS, star.value <= self.rating);
        }
        if let Some(backing) = &self.backing {
            view.set_value(backing, &self.rating.to_string());
        }
        log::debug!("rating set to {}", self.rating);
        Ok(())
    }
}
