use crate::core::{Blend, GlitchBar, Link, Painter, RadialGradient, Rgba, SurfaceSize};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backing the particle field.
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Painter for CanvasPainter {
    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        let style = self.canvas.style();
        _ = style.set_property("width", "100%");
        _ = style.set_property("height", "100%");
    }

    fn clear(&mut self, size: SurfaceSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn vignette(&mut self, g: &RadialGradient, alpha: f32, size: SurfaceSize) {
        let Ok(grad) = self.ctx.create_radial_gradient(
            g.inner.x as f64,
            g.inner.y as f64,
            g.inner_radius as f64,
            g.outer.x as f64,
            g.outer.y as f64,
            g.outer_radius as f64,
        ) else {
            return;
        };
        for s in &g.stops {
            _ = grad.add_color_stop(s.offset, &s.color.css());
        }
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
        self.ctx.restore();
    }

    fn begin_layer(&mut self, blend: Blend, alpha: f32) {
        self.ctx.save();
        _ = self.ctx.set_global_composite_operation(blend.as_str());
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn end_layer(&mut self) {
        self.ctx.restore();
    }

    fn link(&mut self, link: &Link) {
        let grad = self.ctx.create_linear_gradient(
            link.from.x as f64,
            link.from.y as f64,
            link.to.x as f64,
            link.to.y as f64,
        );
        for s in &link.stops() {
            _ = grad.add_color_stop(s.offset, &s.color.css());
        }
        self.ctx.set_line_width(link.width as f64);
        self.ctx.set_stroke_style_canvas_gradient(&grad);
        self.ctx.begin_path();
        self.ctx.move_to(link.from.x as f64, link.from.y as f64);
        self.ctx.line_to(link.to.x as f64, link.to.y as f64);
        self.ctx.stroke();
    }

    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn bar(&mut self, bar: &GlitchBar, width: f32) {
        self.ctx.set_global_alpha(bar.alpha as f64);
        self.ctx.set_fill_style_str(&bar.color.css());
        self.ctx
            .fill_rect(0.0, bar.y as f64, width as f64, bar.height as f64);
    }
}
