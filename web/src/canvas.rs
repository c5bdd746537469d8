use bitflags::bitflags;
use floodgrid_core::{Coord, Coord2, Rgb};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT = 1;
    }
}

impl MouseButtons {
    pub(crate) fn from_event(event: &MouseEvent) -> Self {
        Self::from_bits_truncate(event.buttons())
    }
}

/// Maps a pixel offset along one axis onto a cell index, clamped to the grid.
pub(crate) fn pixel_to_cell(offset: i32, extent: i32, cells_per_axis: Coord) -> Coord {
    if extent <= 0 || cells_per_axis == 0 {
        return 0;
    }
    let offset = i64::from(offset.clamp(0, extent - 1));
    let cell = offset * i64::from(cells_per_axis) / i64::from(extent);
    Coord::try_from(cell)
        .unwrap_or(Coord::MAX)
        .min(cells_per_axis - 1)
}

/// `(row, col)` of the cell under a mouse event on `canvas`.
pub(crate) fn event_to_cell(
    event: &MouseEvent,
    canvas: &HtmlCanvasElement,
    cells_per_axis: Coord,
) -> Coord2 {
    let (width, height) = display_size(canvas);
    (
        pixel_to_cell(event.offset_y(), height, cells_per_axis),
        pixel_to_cell(event.offset_x(), width, cells_per_axis),
    )
}

/// Size in CSS pixels, which is what mouse offsets are measured in.
fn display_size(canvas: &HtmlCanvasElement) -> (i32, i32) {
    let or_backing = |css: i32, backing: u32| match css {
        0 => i32::try_from(backing).unwrap_or(i32::MAX),
        css => css,
    };
    (
        or_backing(canvas.client_width(), canvas.width()),
        or_backing(canvas.client_height(), canvas.height()),
    )
}

pub(crate) fn rgb_style((r, g, b): Rgb) -> String {
    format!("rgb({}, {}, {})", r, g, b)
}

/// Draws square cells onto a 2d canvas context.
pub(crate) struct Painter {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    cell_width: f64,
    cell_height: f64,
}

impl Painter {
    pub(crate) fn new(canvas: &HtmlCanvasElement, cells_per_axis: Coord) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                log::error!("canvas has no 2d context");
                return None;
            }
            Err(err) => {
                log::error!("failed to get 2d context: {:?}", err);
                return None;
            }
        };
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        let cells = f64::from(cells_per_axis.max(1));
        Some(Self {
            context,
            width,
            height,
            cell_width: width / cells,
            cell_height: height / cells,
        })
    }

    pub(crate) fn from_ref(canvas_ref: &NodeRef, cells_per_axis: Coord) -> Option<Self> {
        let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
        Self::new(&canvas, cells_per_axis)
    }

    fn origin(&self, (row, col): Coord2) -> (f64, f64) {
        (
            f64::from(col) * self.cell_width,
            f64::from(row) * self.cell_height,
        )
    }

    pub(crate) fn clear(&self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    pub(crate) fn fill_cell(&self, coords: Coord2, rgb: Rgb) {
        let (x, y) = self.origin(coords);
        self.context.set_fill_style_str(&rgb_style(rgb));
        self.context
            .fill_rect(x, y, self.cell_width, self.cell_height);
    }

    pub(crate) fn stroke_cell(&self, coords: Coord2, style: &str) {
        let (x, y) = self.origin(coords);
        self.context.set_stroke_style_str(style);
        self.context
            .stroke_rect(x, y, self.cell_width, self.cell_height);
    }

    /// Centers `text` in the cell, sized to its height.
    pub(crate) fn label_cell(&self, coords: Coord2, text: &str) {
        let (x, y) = self.origin(coords);
        let font_px = (self.cell_height * 0.5).round();
        self.context.set_font(&format!("{}px Arial", font_px));
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");
        self.context.set_fill_style_str("#000");
        if let Err(err) = self.context.fill_text(
            text,
            x + self.cell_width / 2.0,
            y + self.cell_height / 2.0,
        ) {
            log::error!("failed to draw {:?} at {:?}: {:?}", text, coords, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_to_cells_by_integer_division() {
        assert_eq!(pixel_to_cell(0, 450, 9), 0);
        assert_eq!(pixel_to_cell(49, 450, 9), 0);
        assert_eq!(pixel_to_cell(50, 450, 9), 1);
        assert_eq!(pixel_to_cell(449, 450, 9), 8);
    }

    #[test]
    fn pixels_outside_the_canvas_are_clamped() {
        assert_eq!(pixel_to_cell(-20, 450, 9), 0);
        assert_eq!(pixel_to_cell(450, 450, 9), 8);
        assert_eq!(pixel_to_cell(9000, 300, 3), 2);
    }

    #[test]
    fn degenerate_canvas_maps_to_the_first_cell() {
        assert_eq!(pixel_to_cell(10, 0, 9), 0);
        assert_eq!(pixel_to_cell(10, 100, 0), 0);
    }

    #[test]
    fn rgb_style_is_css() {
        assert_eq!(rgb_style((255, 0, 16)), "rgb(255, 0, 16)");
    }

    #[test]
    fn only_the_left_button_is_tracked() {
        let left_and_right = MouseButtons::from_bits_truncate(0b0011);
        let right_and_middle = MouseButtons::from_bits_truncate(0b0110);

        assert_eq!(left_and_right, MouseButtons::LEFT);
        assert!(right_and_middle.is_empty());
    }
}
