//! Surface elements of the timer face and the code that paints them
//!
//! Elements are created once, in back-to-front order, by [`Scene::build`].
//! Every paint method is safe to call redundantly.

use super::layout::{self, Rect};
use super::palette;
use super::projector::{self, SweepTicker};
use crate::animation::{BorderTone, RingSpinner};
use crate::state::Phase;
use crate::surface::{Color, DisplaySurface, ElementId};

/// Handles to every element on the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub title: ElementId,
    pub phase_label: ElementId,
    pub minutes: ElementId,
    pub colon: ElementId,
    pub seconds: ElementId,
    pub ring: [ElementId; 4],
    pub spinners: [ElementId; 2],
    pub slice_dots: Vec<ElementId>,
    pub round_dots: Vec<ElementId>,
    pub progress_background: ElementId,
    pub progress_fill: ElementId,
    pub sweep_ticker: ElementId,
    pub border: [ElementId; 4],
}

impl Scene {
    /// Create all elements with their fixed geometry and colors
    pub fn build<S: DisplaySurface>(
        surface: &mut S,
        title_text: &str,
        slices_per_round: u32,
        rounds: u32,
    ) -> Self {
        let title = text_element(surface, layout::TITLE_FONT, palette::ACCENT, layout::TITLE_POS);
        surface.set_text(title, title_text);

        let phase_label =
            text_element(surface, layout::TITLE_FONT, palette::TEXT, layout::TITLE_POS);
        let minutes =
            text_element(surface, layout::TIMER_FONT, palette::TEXT, layout::TIMER_MINUTES_POS);
        let colon =
            text_element(surface, layout::TIMER_FONT, palette::TEXT, layout::TIMER_COLON_POS);
        let seconds =
            text_element(surface, layout::TIMER_FONT, palette::TEXT, layout::TIMER_SECONDS_POS);

        let ring = layout::ring_edges(layout::RING).map(|edge| rect_element(surface, edge, None));

        let spinner = |surface: &mut S| {
            let id = surface.create_rectangle();
            surface.set_size(id, layout::SPINNER_SIZE as u32, layout::SPINNER_SIZE as u32);
            surface.set_color(id, palette::BACKGROUND);
            id
        };
        let spinners = [spinner(&mut *surface), spinner(&mut *surface)];

        let slice_dots = dot_row(surface, slices_per_round, layout::SLICE_ROW_Y);
        let round_dots = dot_row(surface, rounds, layout::ROUND_ROW_Y);

        let bar = layout::PROGRESS_BAR;
        let progress_background = rect_element(surface, bar, Some(palette::PROGRESS_BACKGROUND));
        let progress_fill = rect_element(surface, Rect { w: 0, ..bar }, Some(palette::WORK));
        let sweep_ticker = rect_element(
            surface,
            Rect { w: layout::SWEEP_TICKER_WIDTH, ..bar },
            Some(palette::ACCENT),
        );

        let border = layout::border_edges()
            .map(|edge| rect_element(surface, edge, Some(palette::BACKGROUND)));

        Self {
            title,
            phase_label,
            minutes,
            colon,
            seconds,
            ring,
            spinners,
            slice_dots,
            round_dots,
            progress_background,
            progress_fill,
            sweep_ticker,
            border,
        }
    }

    /// Label, ring and fill take the phase identity
    pub fn paint_phase<S: DisplaySurface>(&self, surface: &mut S, phase: Phase) {
        let label = phase.label();
        let color = phase.color();
        surface.set_text(self.phase_label, label);
        surface.set_color(self.phase_label, color);
        surface.move_to(
            self.phase_label,
            projector::right_aligned_x(label, layout::TITLE_FONT),
            layout::LABEL_Y,
        );
        surface.set_color(self.progress_fill, color);
        self.paint_ring(surface, color);
    }

    pub fn paint_ring<S: DisplaySurface>(&self, surface: &mut S, color: Color) {
        for edge in self.ring {
            surface.set_color(edge, color);
        }
    }

    /// Empty the bar and park the ticker at its start
    pub fn reset_progress<S: DisplaySurface>(&self, surface: &mut S) {
        let bar = layout::PROGRESS_BAR;
        surface.set_size(self.progress_fill, 0, bar.h as u32);
        surface.move_to(self.sweep_ticker, bar.x, bar.y);
    }

    pub fn paint_timer_text<S: DisplaySurface>(
        &self,
        surface: &mut S,
        remaining_seconds: i64,
        colon_visible: bool,
    ) {
        let (mm, ss) = projector::format_mm_ss(remaining_seconds);
        surface.set_text(self.minutes, &mm);
        surface.set_text(self.seconds, &ss);
        surface.set_text(self.colon, projector::colon_text(colon_visible));
    }

    /// Resize the fill and, on a new second, restart the ticker sweep
    pub fn paint_progress<S: DisplaySurface>(
        &self,
        surface: &mut S,
        elapsed: i64,
        total: i64,
        sweep: &mut SweepTicker,
    ) {
        let bar = layout::PROGRESS_BAR;
        let width = projector::bar_fill_width(elapsed, total, bar.w);
        surface.set_size(self.progress_fill, width.max(0) as u32, bar.h as u32);

        if let Some(step) = sweep.update(elapsed, bar) {
            surface.move_to(self.sweep_ticker, step.from_x, bar.y);
            surface.animate_to(self.sweep_ticker, step.to_x, bar.y, layout::SWEEP_DURATION_MS);
        }
    }

    /// Color one slice dot; indices outside the row are ignored
    pub fn mark_slice<S: DisplaySurface>(&self, surface: &mut S, index: u32, filled: bool) {
        if let Some(&dot) = self.slice_dots.get(index as usize) {
            surface.set_color(dot, dot_color(filled));
        }
    }

    pub fn reset_slice_row<S: DisplaySurface>(&self, surface: &mut S) {
        for index in 0..self.slice_dots.len() as u32 {
            self.mark_slice(surface, index, false);
        }
    }

    /// Fill the first `completed_rounds` round dots
    pub fn paint_round_dots<S: DisplaySurface>(&self, surface: &mut S, completed_rounds: u32) {
        for (index, &dot) in self.round_dots.iter().enumerate() {
            surface.set_color(dot, dot_color((index as u32) < completed_rounds));
        }
    }

    pub fn paint_border<S: DisplaySurface>(&self, surface: &mut S, tone: BorderTone) {
        let color = match tone {
            BorderTone::Accent => palette::ACCENT,
            BorderTone::Background => palette::BACKGROUND,
        };
        for edge in self.border {
            surface.set_color(edge, color);
        }
    }

    pub fn place_spinners<S: DisplaySurface>(&self, surface: &mut S, spinner: &RingSpinner) {
        if let Some(((x1, y1), (x2, y2))) = spinner.positions() {
            surface.move_to(self.spinners[0], x1, y1);
            surface.move_to(self.spinners[1], x2, y2);
        }
    }
}

fn dot_color(filled: bool) -> Color {
    if filled { palette::ACCENT } else { palette::PROGRESS_BACKGROUND }
}

fn text_element<S: DisplaySurface>(
    surface: &mut S,
    font: crate::surface::Font,
    color: Color,
    (x, y): (i32, i32),
) -> ElementId {
    let id = surface.create_text();
    surface.set_font(id, font);
    surface.set_color(id, color);
    surface.move_to(id, x, y);
    id
}

fn rect_element<S: DisplaySurface>(surface: &mut S, rect: Rect, color: Option<Color>) -> ElementId {
    let id = surface.create_rectangle();
    let (w, h) = rect.size();
    surface.set_size(id, w, h);
    surface.move_to(id, rect.x, rect.y);
    if let Some(color) = color {
        surface.set_color(id, color);
    }
    id
}

fn dot_row<S: DisplaySurface>(surface: &mut S, count: u32, y: i32) -> Vec<ElementId> {
    let start = projector::dot_row_start_x(count);
    (0..count.min(layout::MAX_DOTS))
        .map(|index| {
            let size = layout::DOT_SIZE;
            rect_element(
                surface,
                Rect::new(projector::dot_x(start, index), y, size, size),
                Some(palette::PROGRESS_BACKGROUND),
            )
        })
        .collect()
}
