#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// What the strip looks like right now; built by the page from the DOM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryViewport {
    /// Whether a record with this gallery is open
    pub open: bool,
    pub image_count: usize,
    /// How many images fit side by side in the strip
    pub images_in_view: usize,
}

/// Relative smooth scroll to apply to the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub delta_px: f64,
    pub smooth: bool,
}

/// Turns left/right clicks into scroll commands of one image width.
///
/// Bounds are left to the browser: scrolling past either end clamps natively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryScroller {
    pub step_px: f64,
}

impl GalleryScroller {
    pub fn new(step_px: f64) -> Self {
        Self { step_px }
    }

    pub fn command(&self, direction: ScrollDirection, viewport: &GalleryViewport) -> Option<ScrollCommand> {
        if !viewport.open || viewport.image_count <= viewport.images_in_view {
            return None;
        }

        let delta_px = match direction {
            ScrollDirection::Left => -self.step_px,
            ScrollDirection::Right => self.step_px,
        };
        Some(ScrollCommand {
            delta_px,
            smooth: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(open: bool, image_count: usize, images_in_view: usize) -> GalleryViewport {
        GalleryViewport {
            open,
            image_count,
            images_in_view,
        }
    }

    #[test]
    fn test_directional_step() {
        let scroller = GalleryScroller::new(320.0);
        let vp = viewport(true, 5, 2);

        let left = scroller.command(ScrollDirection::Left, &vp).unwrap();
        let right = scroller.command(ScrollDirection::Right, &vp).unwrap();
        assert_eq!(left.delta_px, -320.0);
        assert_eq!(right.delta_px, 320.0);
        assert!(left.smooth && right.smooth);
    }

    #[test]
    fn test_noop_when_closed() {
        let scroller = GalleryScroller::new(320.0);
        assert_eq!(scroller.command(ScrollDirection::Right, &viewport(false, 5, 2)), None);
    }

    #[test]
    fn test_noop_when_everything_fits() {
        let scroller = GalleryScroller::new(320.0);
        assert_eq!(scroller.command(ScrollDirection::Left, &viewport(true, 3, 3)), None);
        assert_eq!(scroller.command(ScrollDirection::Right, &viewport(true, 0, 1)), None);
    }
}
