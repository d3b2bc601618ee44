//! Overlay placement math.

use crate::geometry::{Point, Rect, Size};

/// Which side of the anchor the overlay sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    Above,
    /// Below the anchor.
    Below,
    /// To the left of the anchor.
    Left,
    /// To the right of the anchor.
    Right,
}

/// How the overlay aligns along the anchor's edge.
///
/// For [`Side::Above`]/[`Side::Below`] the alignment runs horizontally
/// (start = left edges flush); for [`Side::Left`]/[`Side::Right`] it runs
/// vertically (start = top edges flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Flush with the anchor's start edge.
    Start,
    /// Centered on the anchor.
    #[default]
    Center,
    /// Flush with the anchor's end edge.
    End,
}

/// Placement strategy for positioning an overlay relative to an anchor.
///
/// Twelve anchored placements (four sides, three alignments each) plus
/// [`Center`](OverlayPlacement::Center), which centers the overlay over the
/// anchor and is the conventional placement for modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayPlacement {
    /// Anchored to a side of the anchor rect.
    Anchored {
        /// The side of the anchor.
        side: Side,
        /// The alignment along that side.
        alignment: Alignment,
    },
    /// Centered over the anchor. Modal dialogs use this.
    Center,
}

impl OverlayPlacement {
    /// Below the anchor, centered. The default for menus and popovers.
    pub const BELOW: Self = Self::Anchored {
        side: Side::Below,
        alignment: Alignment::Center,
    };

    /// Below the anchor, left edges flush. The usual dropdown placement.
    pub const BELOW_START: Self = Self::Anchored {
        side: Side::Below,
        alignment: Alignment::Start,
    };

    /// Above the anchor, centered.
    pub const ABOVE: Self = Self::Anchored {
        side: Side::Above,
        alignment: Alignment::Center,
    };

    /// Right of the anchor, top edges flush. The usual submenu placement.
    pub const RIGHT_START: Self = Self::Anchored {
        side: Side::Right,
        alignment: Alignment::Start,
    };

    /// Whether this is the centered modal-dialog placement.
    pub fn is_center(&self) -> bool {
        matches!(self, Self::Center)
    }

    /// Calculate the overlay position given anchor geometry and overlay
    /// size.
    ///
    /// When `available_bounds` is provided, an anchored overlay that would
    /// overflow flips to the opposite side of the anchor, and any remaining
    /// overflow shifts the overlay back inside the bounds.
    pub fn calculate_position(
        &self,
        anchor_rect: Rect,
        overlay_size: Size,
        available_bounds: Option<Rect>,
    ) -> Point {
        let mut pos = self.initial_position(anchor_rect, overlay_size);

        if let Some(bounds) = available_bounds {
            pos = self.apply_flip(pos, overlay_size, bounds, anchor_rect);
            pos = Self::apply_shift(pos, overlay_size, bounds);
        }

        pos
    }

    fn initial_position(&self, anchor: Rect, size: Size) -> Point {
        let center = anchor.center();
        match self {
            Self::Center => Point::new(
                center.x - size.width / 2.0,
                center.y - size.height / 2.0,
            ),
            Self::Anchored { side, alignment } => {
                let main = match side {
                    Side::Above => anchor.origin.y - size.height,
                    Side::Below => anchor.bottom(),
                    Side::Left => anchor.origin.x - size.width,
                    Side::Right => anchor.right(),
                };
                match side {
                    Side::Above | Side::Below => {
                        let x = match alignment {
                            Alignment::Start => anchor.origin.x,
                            Alignment::Center => center.x - size.width / 2.0,
                            Alignment::End => anchor.right() - size.width,
                        };
                        Point::new(x, main)
                    }
                    Side::Left | Side::Right => {
                        let y = match alignment {
                            Alignment::Start => anchor.origin.y,
                            Alignment::Center => center.y - size.height / 2.0,
                            Alignment::End => anchor.bottom() - size.height,
                        };
                        Point::new(main, y)
                    }
                }
            }
        }
    }

    fn apply_flip(&self, pos: Point, size: Size, bounds: Rect, anchor: Rect) -> Point {
        let Self::Anchored { side, .. } = self else {
            return pos;
        };
        let mut result = pos;
        let rect = Rect::new(pos.x, pos.y, size.width, size.height);

        match side {
            Side::Below if rect.bottom() > bounds.bottom() => {
                result.y = anchor.origin.y - size.height;
            }
            Side::Above if rect.origin.y < bounds.origin.y => {
                result.y = anchor.bottom();
            }
            Side::Left if rect.origin.x < bounds.origin.x => {
                result.x = anchor.right();
            }
            Side::Right if rect.right() > bounds.right() => {
                result.x = anchor.origin.x - size.width;
            }
            _ => {}
        }

        result
    }

    fn apply_shift(pos: Point, size: Size, bounds: Rect) -> Point {
        let mut result = pos;

        if result.x < bounds.origin.x {
            result.x = bounds.origin.x;
        } else if result.x + size.width > bounds.right() {
            result.x = bounds.right() - size.width;
        }

        if result.y < bounds.origin.y {
            result.y = bounds.origin.y;
        } else if result.y + size.height > bounds.bottom() {
            result.y = bounds.bottom() - size.height;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect::new(100.0, 100.0, 80.0, 30.0);
    const SIZE: Size = Size::new(200.0, 150.0);

    #[test]
    fn test_below_centered() {
        let pos = OverlayPlacement::BELOW.calculate_position(ANCHOR, SIZE, None);
        // Horizontally centered on the anchor, flush under it.
        assert_eq!(pos, Point::new(40.0, 130.0));
    }

    #[test]
    fn test_alignment_edges() {
        let start = OverlayPlacement::BELOW_START.calculate_position(ANCHOR, SIZE, None);
        assert_eq!(start.x, 100.0);

        let end = OverlayPlacement::Anchored {
            side: Side::Below,
            alignment: Alignment::End,
        }
        .calculate_position(ANCHOR, SIZE, None);
        assert_eq!(end.x, 180.0 - 200.0);
    }

    #[test]
    fn test_center_placement() {
        let pos = OverlayPlacement::Center.calculate_position(ANCHOR, SIZE, None);
        assert_eq!(pos, Point::new(40.0, 40.0));
        assert!(OverlayPlacement::Center.is_center());
        assert!(!OverlayPlacement::BELOW.is_center());
    }

    #[test]
    fn test_flip_when_overflowing() {
        // Anchor near the bottom of a 400x200 viewport: Below overflows and
        // flips above.
        let bounds = Rect::new(0.0, 0.0, 400.0, 200.0);
        let anchor = Rect::new(100.0, 160.0, 80.0, 30.0);
        let pos = OverlayPlacement::BELOW.calculate_position(anchor, SIZE, Some(bounds));
        assert_eq!(pos.y, 160.0 - 150.0);
    }

    #[test]
    fn test_shift_keeps_overlay_in_bounds() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 400.0);
        // Anchor hugging the left edge: centering would push x negative.
        let anchor = Rect::new(0.0, 100.0, 40.0, 30.0);
        let pos = OverlayPlacement::BELOW.calculate_position(anchor, SIZE, Some(bounds));
        assert_eq!(pos.x, 0.0);

        // Hugging the right edge: shifted back inside.
        let anchor = Rect::new(380.0, 100.0, 20.0, 30.0);
        let pos = OverlayPlacement::BELOW.calculate_position(anchor, SIZE, Some(bounds));
        assert_eq!(pos.x, 400.0 - 200.0);
    }

    #[test]
    fn test_submenu_placement() {
        let pos = OverlayPlacement::RIGHT_START.calculate_position(ANCHOR, SIZE, None);
        assert_eq!(pos, Point::new(180.0, 100.0));
    }
}
