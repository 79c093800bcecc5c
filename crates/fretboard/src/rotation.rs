//! Tap-to-rotate for marker labels.
//!
//! A [`RotationToggle`] holds the current label angle of one board. Each
//! tap over the board flips the angle between upright and a quarter turn,
//! then rotates every marker label about its own anchor. While the host
//! reports a mode in [`SUPPRESSED_MODES`], taps leave the angle unchanged.
//!
//! The board never reapplies the rotation on its own. Callers that rebuild
//! markers call [`RotationToggle::apply_current_rotation`] afterwards so new
//! labels follow the active angle.

use std::fmt;

use log::debug;

use fretboard_core::{draw::RenderLayer, geometry::Point};

use crate::surface::Fretboard;

/// Modes in which marker labels must stay upright.
pub const SUPPRESSED_MODES: [&str; 2] = ["chord", "scale"];

/// Angle applied to marker labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Upright,
    Quarter,
}

impl Rotation {
    pub fn degrees(self) -> f32 {
        match self {
            Self::Upright => 0.0,
            Self::Quarter => 90.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Upright => Self::Quarter,
            Self::Quarter => Self::Upright,
        }
    }
}

/// Read-only source of the host's current interaction mode.
///
/// Any `Fn() -> Option<String>` closure is a mode provider.
pub trait ModeProvider {
    fn current_mode(&self) -> Option<String>;
}

/// A provider that never reports a mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMode;

impl ModeProvider for NoMode {
    fn current_mode(&self) -> Option<String> {
        None
    }
}

/// A provider that always reports the same mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMode(pub String);

impl FixedMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }
}

impl ModeProvider for FixedMode {
    fn current_mode(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<F> ModeProvider for F
where
    F: Fn() -> Option<String>,
{
    fn current_mode(&self) -> Option<String> {
        self()
    }
}

/// Input consumed by the toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A tap or touch ended at `position`, in board canvas coordinates.
    TapEnded { position: Point },
}

/// Rotation state of one board's marker labels.
///
/// # Examples
///
/// ```
/// # use fretboard::rotation::{FixedMode, NoMode, Rotation, RotationToggle};
/// let mut toggle = RotationToggle::new(NoMode);
/// assert_eq!(toggle.toggle(), Rotation::Quarter);
/// assert_eq!(toggle.toggle(), Rotation::Upright);
///
/// let mut locked = RotationToggle::new(FixedMode::new("chord"));
/// assert_eq!(locked.toggle(), Rotation::Upright);
/// ```
pub struct RotationToggle<M = NoMode> {
    rotation: Rotation,
    mode: M,
}

impl<M: ModeProvider> RotationToggle<M> {
    /// Creates an upright toggle reading modes from `mode`.
    pub fn new(mode: M) -> Self {
        Self {
            rotation: Rotation::default(),
            mode,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns true when the host is in a mode that locks labels upright.
    pub fn is_suppressed(&self) -> bool {
        self.mode
            .current_mode()
            .is_some_and(|mode| SUPPRESSED_MODES.contains(&mode.as_str()))
    }

    /// Flips the angle unless suppressed, returning the resulting angle.
    pub fn toggle(&mut self) -> Rotation {
        if self.is_suppressed() {
            debug!(rotation:? = self.rotation; "Rotation toggle suppressed by mode");
            return self.rotation;
        }
        self.rotation = self.rotation.toggled();
        debug!(degrees = self.rotation.degrees(); "Rotation toggled");
        self.rotation
    }

    /// Handles a pointer event for `board`.
    ///
    /// A tap inside the board's canvas toggles the angle. When the angle
    /// changes it is reapplied to the marker labels. Returns whether the
    /// angle changed.
    pub fn handle_event(&mut self, event: PointerEvent, board: &mut Fretboard) -> bool {
        match event {
            PointerEvent::TapEnded { position } => {
                if !board.geometry().canvas_bounds().contains(position) {
                    return false;
                }
                let before = self.rotation;
                if self.toggle() == before {
                    return false;
                }
                self.apply_current_rotation(board);
                true
            }
        }
    }

    /// Rotates every marker label of `board` to the current angle, each
    /// about its own anchor.
    pub fn apply_current_rotation(&self, board: &mut Fretboard) {
        let degrees = self.rotation.degrees();
        let mut rotated = 0_usize;
        board
            .scene_mut()
            .for_each_text_mut(RenderLayer::Markers, |text| {
                text.set_rotation(degrees);
                rotated += 1;
            });
        debug!(degrees, rotated; "Applied marker label rotation");
    }
}

impl<M> fmt::Debug for RotationToggle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationToggle")
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use fretboard_core::instrument::InstrumentConfig;

    use super::*;
    use crate::{marker::MarkerOptions, viewport::FixedViewport};

    fn labelled_board() -> Fretboard {
        let mut board = Fretboard::create(&FixedViewport(1024.0), InstrumentConfig::default());
        board.set_marker((1, 3), MarkerOptions::new().with_text("1"));
        board.set_marker((2, 5), MarkerOptions::new().with_text("3"));
        board.set_marker((3, 7), MarkerOptions::default());
        board
    }

    fn tap_inside(board: &Fretboard) -> PointerEvent {
        PointerEvent::TapEnded {
            position: board.geometry().board_bounds().center(),
        }
    }

    #[test]
    fn test_rotation_values() {
        assert_eq!(Rotation::default(), Rotation::Upright);
        assert_eq!(Rotation::Upright.degrees(), 0.0);
        assert_eq!(Rotation::Quarter.degrees(), 90.0);
        assert_eq!(Rotation::Upright.toggled().toggled(), Rotation::Upright);
    }

    #[test]
    fn test_toggle_pair_restores_angle() {
        let mut toggle = RotationToggle::new(NoMode);
        let start = toggle.rotation();
        toggle.toggle();
        toggle.toggle();
        assert_eq!(toggle.rotation(), start);
    }

    #[test]
    fn test_suppressed_modes() {
        for mode in SUPPRESSED_MODES {
            let mut toggle = RotationToggle::new(FixedMode::new(mode));
            assert!(toggle.is_suppressed());
            assert_eq!(toggle.toggle(), Rotation::Upright);
        }

        let mut toggle = RotationToggle::new(FixedMode::new("note"));
        assert!(!toggle.is_suppressed());
        assert_eq!(toggle.toggle(), Rotation::Quarter);
    }

    #[test]
    fn test_mode_is_read_on_every_toggle() {
        let mode = RefCell::new(None::<String>);
        let mut toggle = RotationToggle::new(|| mode.borrow().clone());

        assert_eq!(toggle.toggle(), Rotation::Quarter);
        *mode.borrow_mut() = Some("scale".to_string());
        assert_eq!(toggle.toggle(), Rotation::Quarter);
        *mode.borrow_mut() = None;
        assert_eq!(toggle.toggle(), Rotation::Upright);
    }

    #[test]
    fn test_tap_rotates_marker_labels() {
        let mut board = labelled_board();
        let mut toggle = RotationToggle::new(NoMode);

        let event = tap_inside(&board);
        assert!(toggle.handle_event(event, &mut board));

        let texts = board.scene().text_nodes(RenderLayer::Markers);
        assert_eq!(texts.len(), 2);
        for text in texts {
            assert_eq!(text.rotation(), Some(90.0));
            let anchor = text.anchor();
            assert_eq!(
                text.transform(),
                Some(format!("rotate(90 {} {})", anchor.x(), anchor.y()))
            );
        }

        assert!(
            board
                .scene()
                .text_nodes(RenderLayer::Labels)
                .iter()
                .all(|label| label.rotation().is_none())
        );
    }

    #[test]
    fn test_tap_outside_board_is_ignored() {
        let mut board = labelled_board();
        let mut toggle = RotationToggle::new(NoMode);

        let event = PointerEvent::TapEnded {
            position: Point::new(-10.0, -10.0),
        };
        assert!(!toggle.handle_event(event, &mut board));
        assert_eq!(toggle.rotation(), Rotation::Upright);
        assert!(
            board
                .scene()
                .text_nodes(RenderLayer::Markers)
                .iter()
                .all(|text| text.rotation().is_none())
        );
    }

    #[test]
    fn test_suppressed_tap_keeps_labels_upright() {
        let mut board = labelled_board();
        let mut toggle = RotationToggle::new(FixedMode::new("chord"));

        let event = tap_inside(&board);
        assert!(!toggle.handle_event(event, &mut board));
        assert!(
            board
                .scene()
                .text_nodes(RenderLayer::Markers)
                .iter()
                .all(|text| text.rotation().is_none() && text.transform().is_none())
        );
        assert!(!board.render_svg().contains("rotate("));
    }

    #[test]
    fn test_apply_after_rebuild() {
        let mut board = labelled_board();
        let mut toggle = RotationToggle::new(NoMode);
        toggle.toggle();

        board.clear_markers();
        board.set_marker((4, 2), MarkerOptions::new().with_text("5"));
        assert_eq!(
            board.scene().text_nodes(RenderLayer::Markers)[0].rotation(),
            None
        );

        toggle.apply_current_rotation(&mut board);
        assert_eq!(
            board.scene().text_nodes(RenderLayer::Markers)[0].rotation(),
            Some(90.0)
        );
    }

    #[test]
    fn test_debug_omits_provider() {
        let toggle = RotationToggle::new(|| None::<String>);
        assert!(format!("{toggle:?}").contains("Upright"));
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::cell::RefCell;

    use proptest::prelude::*;

    use super::*;

    fn mode_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("chord".to_string())),
            Just(Some("scale".to_string())),
            "[a-z]{1,8}".prop_map(Some),
        ]
    }

    /// Two toggles under the same mode return to the starting angle.
    fn check_toggle_pair_is_identity(
        start: Rotation,
        mode: Option<String>,
    ) -> Result<(), TestCaseError> {
        let current = RefCell::new(None::<String>);
        let mut toggle = RotationToggle::new(|| current.borrow().clone());
        if start == Rotation::Quarter {
            toggle.toggle();
        }
        prop_assert_eq!(toggle.rotation(), start);

        *current.borrow_mut() = mode;
        toggle.toggle();
        toggle.toggle();
        prop_assert_eq!(toggle.rotation(), start);
        Ok(())
    }

    /// Suppressed modes never change the angle.
    fn check_suppressed_mode_freezes_angle(
        start: Rotation,
        taps: usize,
    ) -> Result<(), TestCaseError> {
        let current = RefCell::new(None::<String>);
        let mut toggle = RotationToggle::new(|| current.borrow().clone());
        if start == Rotation::Quarter {
            toggle.toggle();
        }

        for (i, mode) in SUPPRESSED_MODES.iter().cycle().take(taps).enumerate() {
            *current.borrow_mut() = Some((*mode).to_string());
            prop_assert_eq!(toggle.toggle(), start, "tap {}", i);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn toggle_pair_is_identity(
            start in prop_oneof![Just(Rotation::Upright), Just(Rotation::Quarter)],
            mode in mode_strategy(),
        ) {
            check_toggle_pair_is_identity(start, mode)?;
        }

        #[test]
        fn suppressed_mode_freezes_angle(
            start in prop_oneof![Just(Rotation::Upright), Just(Rotation::Quarter)],
            taps in 0usize..10,
        ) {
            check_suppressed_mode_freezes_angle(start, taps)?;
        }
    }
}
