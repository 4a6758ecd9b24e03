//! Time-slider projection for the AR viewer.
//!
//! The viewer's 0..=100 slider blends between the present-day photograph and
//! an aged rendition of the monument. This module keeps that projection pure:
//! era, century label, and CSS filter percentages all derive from the
//! position.

/// Which era the slider currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Modern,
    Ancient,
}

/// A slider position projected onto the viewer's display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineView {
    position: u8,
}

impl TimelineView {
    /// Positions above the midpoint read as the ancient era.
    const MIDPOINT: u8 = 50;

    /// Clamp an arbitrary position into the 0..=100 range.
    #[must_use]
    pub fn from_position(position: u8) -> Self {
        Self {
            position: position.min(100),
        }
    }

    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub const fn era(&self) -> Era {
        if self.position > Self::MIDPOINT {
            Era::Ancient
        } else {
            Era::Modern
        }
    }

    /// Label for the projected time period, e.g. "13th Century" or "2024 CE".
    #[must_use]
    pub fn century_label(&self) -> String {
        if matches!(self.era(), Era::Ancient) {
            let century = 13 + u32::from(self.position - Self::MIDPOINT) / 10;
            format!("{century}th Century")
        } else {
            "2024 CE".to_string()
        }
    }

    /// Sepia percentage applied to the monument image.
    #[must_use]
    pub fn sepia_pct(&self) -> u32 {
        if self.position > Self::MIDPOINT {
            u32::from(self.position - Self::MIDPOINT) * 2
        } else {
            0
        }
    }

    /// Brightness percentage applied to the monument image.
    #[must_use]
    pub fn brightness_pct(&self) -> u32 {
        100 - u32::from(self.position) * 3 / 10
    }

    /// The combined CSS filter string for the viewer image.
    #[must_use]
    pub fn css_filter(&self) -> String {
        format!(
            "sepia({}%) brightness({}%)",
            self.sepia_pct(),
            self.brightness_pct()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_day_has_no_aging() {
        let view = TimelineView::from_position(0);
        assert_eq!(view.era(), Era::Modern);
        assert_eq!(view.century_label(), "2024 CE");
        assert_eq!(view.sepia_pct(), 0);
        assert_eq!(view.brightness_pct(), 100);
    }

    #[test]
    fn full_slider_is_deep_antiquity() {
        let view = TimelineView::from_position(100);
        assert_eq!(view.era(), Era::Ancient);
        assert_eq!(view.century_label(), "18th Century");
        assert_eq!(view.sepia_pct(), 100);
        assert_eq!(view.brightness_pct(), 70);
    }

    #[test]
    fn just_past_midpoint_reads_thirteenth_century() {
        let view = TimelineView::from_position(51);
        assert_eq!(view.era(), Era::Ancient);
        assert_eq!(view.century_label(), "13th Century");
        assert_eq!(view.css_filter(), "sepia(2%) brightness(85%)");
    }

    #[test]
    fn out_of_range_positions_clamp() {
        assert_eq!(TimelineView::from_position(255).position(), 100);
    }
}
