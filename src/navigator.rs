//! Step Navigator
//!
//! Derives the active section and the transition progress towards the next section
//! from the scroll position of the calculator document.
//!
//! # Inputs
//!
//! The renderer measures every section's `[top, bottom)` row band while laying the
//! document out ([`SectionGeometry`]) and reports the scroll offset and viewport height
//! after each scroll or resize. Two observers turn that into updates:
//!
//! | Observer              | Fires on                          | Sets               |
//! |-----------------------|-----------------------------------|--------------------|
//! | [`observe_scroll`]    | every offset change               | section + progress |
//! | [`VisibilityObserver`]| a section entering the track band | section only       |
//!
//! Both feed [`StepNavigator`], which applies the scroll update first and the visibility
//! update second. Under a normal layout they agree; when they don't, the last write wins.
//!
//! # Jumps
//!
//! [`StepNavigator::jump_to`] sets the target section immediately, clears progress and
//! returns the scroll target. The caller animates towards it with [`ScrollAnimation`];
//! every animation frame is an ordinary scroll update.

use tracing::{debug, info};

use crate::types::Section;

// ============================================================================
// Geometry
// ============================================================================

/// Row band a section occupies in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBand {
    pub section: Section,
    /// First row of the section
    pub top: u32,
    /// One past the last row of the section
    pub bottom: u32,
}

impl SectionBand {
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Bands of every section, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionGeometry {
    bands: Vec<SectionBand>,
}

impl SectionGeometry {
    /// Build the geometry from bands listed in page order
    pub fn new(bands: Vec<SectionBand>) -> Self {
        debug_assert!(
            bands.windows(2).all(|pair| pair[0].section < pair[1].section),
            "section bands must be in page order"
        );
        Self { bands }
    }

    /// Geometry of sections stacked back to back, each `heights[i]` rows tall,
    /// starting at `start`
    pub fn stacked(start: u32, heights: [u32; 4]) -> Self {
        let mut top = start;
        let bands = Section::ALL
            .iter()
            .zip(heights)
            .map(|(&section, height)| {
                let band = SectionBand {
                    section,
                    top,
                    bottom: top + height,
                };
                top = band.bottom;
                band
            })
            .collect();
        Self { bands }
    }

    pub fn bands(&self) -> &[SectionBand] {
        &self.bands
    }

    pub fn band(&self, section: Section) -> Option<&SectionBand> {
        self.bands.iter().find(|band| band.section == section)
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

// ============================================================================
// Navigator State
// ============================================================================

/// Transition progress from one section towards the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub from: Section,
    /// Fraction of the way to the next section, in `[0, 1]`
    pub ratio: f64,
}

/// Active section plus optional transition progress
///
/// `active == None` is the state above the first section. The last section never
/// carries progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepState {
    pub active: Option<Section>,
    pub progress: Option<Progress>,
}

impl StepState {
    pub const NONE: Self = Self {
        active: None,
        progress: None,
    };

    pub const fn at(section: Section) -> Self {
        Self {
            active: Some(section),
            progress: None,
        }
    }
}

/// Outcome of the scroll observer for one offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    /// Above the first section's band
    BeforeFirst,
    /// Inside a section's band
    Inside {
        section: Section,
        progress: Option<Progress>,
    },
    /// At or below the end of the last section
    PastLast { section: Section },
}

impl ScrollUpdate {
    pub const fn state(self) -> StepState {
        match self {
            Self::BeforeFirst => StepState::NONE,
            Self::Inside { section, progress } => StepState {
                active: Some(section),
                progress,
            },
            Self::PastLast { section } => StepState::at(section),
        }
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Scroll observer: locate `offset` among the section bands.
///
/// Every band is shifted up by `fixed_offset` (header plus stepper rows), so a section
/// becomes active as soon as its top reaches the bottom of the sticky chrome. Returns
/// `None` when the offset sits in a gap between bands, which leaves the state as is.
pub fn observe_scroll(
    geometry: &SectionGeometry,
    offset: u32,
    fixed_offset: u32,
) -> Option<ScrollUpdate> {
    let bands = geometry.bands();
    let (first, last) = (bands.first()?, bands.last()?);

    let offset = i64::from(offset);
    let shift = |row: u32| i64::from(row) - i64::from(fixed_offset);

    if offset < shift(first.top) {
        return Some(ScrollUpdate::BeforeFirst);
    }

    for (i, band) in bands.iter().enumerate() {
        if offset >= shift(band.top) && offset < shift(band.bottom) {
            let progress = bands.get(i + 1).map(|next| {
                let distance = f64::from(next.top.saturating_sub(band.top));
                let scrolled = (offset - shift(band.top)) as f64;
                let ratio = if distance > 0.0 {
                    clamp01(scrolled / distance)
                } else {
                    1.0
                };
                Progress {
                    from: band.section,
                    ratio,
                }
            });
            return Some(ScrollUpdate::Inside {
                section: band.section,
                progress,
            });
        }
    }

    if offset >= shift(last.bottom) {
        return Some(ScrollUpdate::PastLast {
            section: last.section,
        });
    }

    None
}

// ============================================================================
// Visibility Observer
// ============================================================================

/// Tracking band of the visibility observer, relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBand {
    /// Rows cut from the top of the viewport
    pub top_margin: u32,
    /// Fraction of the viewport height cut from the bottom, in `[0, 1)`
    pub bottom_fraction: f64,
    /// Minimum visible fraction of a section to count as intersecting, in `(0, 1]`
    pub threshold: f64,
}

impl Default for TrackBand {
    fn default() -> Self {
        Self {
            top_margin: 6,
            bottom_fraction: 0.5,
            threshold: 0.1,
        }
    }
}

/// Intersection-style observer.
///
/// Remembers which sections intersected the tracking band on the previous call and
/// reports the ones that newly entered it, in page order.
#[derive(Debug, Clone, Default)]
pub struct VisibilityObserver {
    band: TrackBand,
    intersecting: [bool; 4],
}

impl VisibilityObserver {
    pub fn new(band: TrackBand) -> Self {
        Self {
            band,
            intersecting: [false; 4],
        }
    }

    pub fn track_band(&self) -> TrackBand {
        self.band
    }

    /// Row range `[start, end)` the tracking band covers at this scroll position
    pub fn band_rows(&self, scroll: u32, viewport_height: u32) -> (f64, f64) {
        let scroll = f64::from(scroll);
        let height = f64::from(viewport_height);
        let start = scroll + f64::from(self.band.top_margin);
        let end = scroll + height * (1.0 - self.band.bottom_fraction);
        (start, end)
    }

    /// Whether a section currently counts as intersecting
    pub fn is_intersecting(&self, section: Section) -> bool {
        self.intersecting[section.index()]
    }

    /// Recompute intersections and return the sections that newly entered the band
    pub fn observe(
        &mut self,
        geometry: &SectionGeometry,
        scroll: u32,
        viewport_height: u32,
    ) -> Vec<Section> {
        let (start, end) = self.band_rows(scroll, viewport_height);
        let mut entered = Vec::new();

        for band in geometry.bands() {
            let height = f64::from(band.height());
            let visible_top = f64::from(band.top).max(start);
            let visible_bottom = f64::from(band.bottom).min(end);
            let overlap = (visible_bottom - visible_top).max(0.0);
            let now = height > 0.0 && overlap > 0.0 && overlap / height >= self.band.threshold;

            let slot = &mut self.intersecting[band.section.index()];
            if now && !*slot {
                entered.push(band.section);
            }
            *slot = now;
        }

        entered
    }

    /// Forget previous intersections (next call reports every visible section)
    pub fn reset(&mut self) {
        self.intersecting = [false; 4];
    }
}

// ============================================================================
// Step Indicator
// ============================================================================

/// Display status of one step of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Rendering of the connecting line between a step and the next one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Connector {
    /// Partially filled line, fraction in `[0, 1]`
    Gradient(f64),
    Completed,
    Default,
}

/// Status of `section` given the active section
pub fn step_status(active: Option<Section>, section: Section) -> StepStatus {
    match active {
        Some(active) if section.index() < active.index() => StepStatus::Completed,
        Some(active) if section == active => StepStatus::Active,
        _ => StepStatus::Pending,
    }
}

/// Connector after `section` given the navigator state
///
/// Only the active section's own progress draws a gradient.
pub fn connector(state: &StepState, section: Section) -> Connector {
    match (state.active, state.progress) {
        (Some(active), Some(progress)) if active == section && progress.from == section => {
            Connector::Gradient(progress.ratio)
        }
        (Some(active), _) if section.index() < active.index() => Connector::Completed,
        _ => Connector::Default,
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Single reducer for the active section
#[derive(Debug, Clone)]
pub struct StepNavigator {
    state: StepState,
    visibility: VisibilityObserver,
    fixed_offset: u32,
    jump_padding: u32,
}

impl StepNavigator {
    /// `fixed_offset` is the height of the sticky chrome (header plus stepper) and
    /// `jump_padding` the extra rows left above a section after a jump.
    pub fn new(fixed_offset: u32, jump_padding: u32, track: TrackBand) -> Self {
        Self {
            state: StepState::NONE,
            visibility: VisibilityObserver::new(track),
            fixed_offset,
            jump_padding,
        }
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    pub fn active(&self) -> Option<Section> {
        self.state.active
    }

    pub fn progress(&self) -> Option<Progress> {
        self.state.progress
    }

    pub fn fixed_offset(&self) -> u32 {
        self.fixed_offset
    }

    pub fn visibility(&self) -> &VisibilityObserver {
        &self.visibility
    }

    /// Run both observers for a new scroll position or viewport size.
    ///
    /// The scroll observer is applied first, then every section that newly entered the
    /// visibility band, so the visibility observer has the last word.
    pub fn on_viewport(&mut self, geometry: &SectionGeometry, scroll: u32, viewport_height: u32) {
        let before = self.state.active;

        if let Some(update) = observe_scroll(geometry, scroll, self.fixed_offset) {
            self.state = update.state();
        }

        for section in self.visibility.observe(geometry, scroll, viewport_height) {
            self.state.active = Some(section);
        }

        // progress only ever belongs to the active, non-last section
        if let Some(progress) = self.state.progress {
            if self.state.active != Some(progress.from) || progress.from.is_last() {
                self.state.progress = None;
            }
        }

        if self.state.active != before {
            debug!(
                from = ?before,
                to = ?self.state.active,
                scroll,
                "Active section changed"
            );
        }
    }

    /// Scroll offset that brings `section` just below the sticky chrome
    pub fn jump_target(&self, geometry: &SectionGeometry, section: Section) -> Option<u32> {
        let band = geometry.band(section)?;
        Some(band.top.saturating_sub(self.fixed_offset + self.jump_padding))
    }

    /// Jump to a section: activate it, drop progress until the next scroll update and
    /// return the scroll offset to animate to.
    pub fn jump_to(&mut self, geometry: &SectionGeometry, section: Section) -> Option<u32> {
        let target = self.jump_target(geometry, section)?;
        info!(section = %section, target, "Jumping to section");
        self.state = StepState::at(section);
        Some(target)
    }

    pub fn step_status(&self, section: Section) -> StepStatus {
        step_status(self.state.active, section)
    }

    pub fn connector(&self, section: Section) -> Connector {
        connector(&self.state, section)
    }
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new(6, 0, TrackBand::default())
    }
}

// ============================================================================
// Smooth Scroll
// ============================================================================

/// Smooth scroll from one offset to another over a fixed number of frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: u32,
    to: u32,
    frames: u32,
    frame: u32,
}

impl ScrollAnimation {
    pub fn new(from: u32, to: u32, frames: u32) -> Self {
        Self {
            from,
            to,
            frames: frames.max(1),
            frame: 0,
        }
    }

    pub const fn target(&self) -> u32 {
        self.to
    }

    pub const fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advance one frame and return the new offset, or `None` once finished.
    /// The last frame always lands exactly on the target.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        if self.is_finished() {
            return Some(self.to);
        }

        // ease-out cubic
        let t = f64::from(self.frame) / f64::from(self.frames);
        let eased = 1.0 - (1.0 - t).powi(3);
        let delta = f64::from(self.to) - f64::from(self.from);
        let offset = f64::from(self.from) + delta * eased;
        Some(offset.round().max(0.0) as u32)
    }
}

// ============================================================================
// Tests
// ============================================================================
