//! Host environment queries.

/// Reports the width of the area hosting a board.
///
/// A board reads the width exactly once, when it is built, to choose its
/// orientation. Later changes are not observed.
///
/// Any `Fn() -> f32` closure is a viewport:
///
/// ```
/// # use fretboard::viewport::Viewport;
/// let phone = || 390.0;
/// assert_eq!(phone.width(), 390.0);
/// ```
pub trait Viewport {
    fn width(&self) -> f32;
}

/// A viewport of constant width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f32);

impl Viewport for FixedViewport {
    fn width(&self) -> f32 {
        self.0
    }
}

impl<F> Viewport for F
where
    F: Fn() -> f32,
{
    fn width(&self) -> f32 {
        self()
    }
}
