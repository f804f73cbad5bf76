// File: crates/forecast-core/src/interaction.rs
// Summary: Hover slot, pointer hit-testing and tooltip content for the price chart.

use crate::dates::format_date;
use crate::geometry::{dist2, RectF};
use crate::layout::{ChartGeometry, ScreenPoint};
use crate::series::SeriesKind;
use crate::text::format_rupees;
use crate::types::MARKER_RADIUS;

/// Tooltip box size and its offset above the hovered point.
pub const TOOLTIP_WIDTH: f64 = 160.0;
pub const TOOLTIP_HEIGHT: f64 = 35.0;
pub const TOOLTIP_LIFT: f64 = 45.0;

/// Reference to one drawn point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoverTarget {
    pub kind: SeriesKind,
    pub offset: usize,
}

/// Single last-write-wins hover slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    active: Option<HoverTarget>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub target: HoverTarget,
    /// Anchor: the hovered point.
    pub x: f64,
    pub y: f64,
    pub rect: RectF,
    pub date_text: String,
    pub price_text: String,
}

impl HoverState {
    pub fn new() -> Self { Self::default() }

    pub fn set_hover(&mut self, target: Option<HoverTarget>) {
        self.active = target;
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.active
    }

    /// Pointer left the chart area.
    pub fn pointer_leave(&mut self) {
        self.active = None;
    }

    /// Point entered under the pointer. Leaves the slot alone when the pointer
    /// is over empty space, matching marker enter-only semantics.
    pub fn pointer_move(&mut self, geometry: &ChartGeometry, x: f64, y: f64) -> Option<HoverTarget> {
        if let Some(p) = hit_test(geometry, x, y) {
            self.active = Some(HoverTarget { kind: p.kind, offset: p.offset });
        }
        self.active
    }

    /// Tooltip for the active target, if it still resolves against `geometry`.
    pub fn tooltip(&self, geometry: &ChartGeometry) -> Option<Tooltip> {
        let target = self.active?;
        let p = geometry.point(target.kind, target.offset)?;
        Some(tooltip_for(target, p))
    }
}

/// Topmost marker within the hit radius. Forecast markers draw last, so they win ties.
pub fn hit_test(geometry: &ChartGeometry, x: f64, y: f64) -> Option<&ScreenPoint> {
    let r2 = MARKER_RADIUS * MARKER_RADIUS;
    geometry
        .all_points()
        .filter(|p| dist2(p.x, p.y, x, y) <= r2)
        .last()
}

fn tooltip_for(target: HoverTarget, p: &ScreenPoint) -> Tooltip {
    Tooltip {
        target,
        x: p.x,
        y: p.y,
        rect: RectF::from_ltwh(p.x - TOOLTIP_WIDTH / 2.0, p.y - TOOLTIP_LIFT, TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
        date_text: format_date(p.date),
        price_text: format_rupees(p.price as i64),
    }
}
