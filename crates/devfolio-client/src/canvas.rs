//! `Surface` implementation over an HTML canvas 2D context.

use devfolio_core::{Color, Font, Surface, TextAlign, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Size of the browser window's layout viewport.
pub fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Inner size of a layout element.
pub fn element_viewport(element: &web_sys::Element) -> Viewport {
    Viewport::new(
        f64::from(element.client_width()),
        f64::from(element.client_height()),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(v: f64) -> u32 {
    v.max(0.0).round() as u32
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Acquires the 2D context. `None` when the browser refuses one.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let viewport = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Some(Self {
            canvas,
            ctx,
            viewport,
        })
    }

    /// Resizes the backing store. This also resets the context state.
    pub fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(to_px(viewport.width));
        self.canvas.set_height(to_px(viewport.height));
        self.viewport = viewport;
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace(&self, points: &[(f64, f64)]) -> bool {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        let _ = self.ctx.rotate(radians);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x, y, radius.max(0.0), 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.to_css_rgba());
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css_rgba());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if self.trace(points) {
            self.ctx.close_path();
            self.ctx.set_fill_style_str(&color.to_css_rgba());
            self.ctx.fill();
        }
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
        if self.trace(points) {
            self.ctx.set_stroke_style_str(&color.to_css_rgba());
            self.ctx.set_line_width(width);
            self.ctx.stroke();
        }
    }

    fn stroke_gradient_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        from_color: Color,
        to_color: Color,
        width: f64,
    ) {
        let gradient = self.ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
        let stops = gradient
            .add_color_stop(0.0, &from_color.to_css_rgba())
            .and_then(|()| gradient.add_color_stop(1.0, &to_color.to_css_rgba()));
        if stops.is_err() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color) {
        self.ctx.set_font(&font.css());
        match font.align {
            TextAlign::Start => {
                self.ctx.set_text_align("start");
                self.ctx.set_text_baseline("alphabetic");
            }
            TextAlign::Center => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
            }
        }
        self.ctx.set_fill_style_str(&color.to_css_rgba());
        let _ = self.ctx.fill_text(text, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_canvas() -> HtmlCanvasElement {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("canvas").ok())
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
            .expect("canvas element")
    }

    #[wasm_bindgen_test]
    fn test_resize_sets_backing_store() {
        let mut surface = CanvasSurface::new(detached_canvas()).expect("2d context");
        surface.resize(Viewport::new(320.4, 199.6));

        assert_eq!(surface.canvas().width(), 320);
        assert_eq!(surface.canvas().height(), 200);
        assert_eq!(surface.viewport(), Viewport::new(320.4, 199.6));
    }

    #[wasm_bindgen_test]
    fn test_drawing_primitives_do_not_throw() {
        let mut surface = CanvasSurface::new(detached_canvas()).expect("2d context");
        surface.resize(Viewport::new(64.0, 64.0));
        surface.clear();
        surface.save();
        surface.translate(10.0, 10.0);
        surface.rotate(0.5);
        surface.set_alpha(0.5);
        surface.fill_circle(0.0, 0.0, 3.0, Color::WHITE);
        surface.fill_polygon(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)], Color::WHITE);
        surface.stroke_polyline(&[], Color::WHITE, 1.0);
        surface.stroke_gradient_line((0.0, 0.0), (5.0, 5.0), Color::WHITE, Color::WHITE, 0.5);
        surface.fill_text("{}", 0.0, 0.0, &Font::mono_centered(12.0), Color::WHITE);
        surface.restore();
    }
}
