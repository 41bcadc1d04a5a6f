use game_core::{Color, Surface};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::StartupError;

const FONT_FAMILY: &str = "'Courier New', monospace";

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last styles pushed to the context, to skip redundant string churn
    fill: Option<Color>,
    font_px: Option<f32>,
}

impl CanvasSurface {
    pub fn from_document(document: &Document, id: &str) -> Result<Self, StartupError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| StartupError::MissingCanvas(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| StartupError::NotACanvas(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| StartupError::NoContext(id.to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartupError::NoContext(id.to_string()))?;

        Ok(Self {
            canvas,
            ctx,
            fill: None,
            font_px: None,
        })
    }

    pub fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn set_fill(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }

    fn set_font(&mut self, font_px: f32) {
        if self.font_px != Some(font_px) {
            self.ctx.set_font(&format!("{}px {}", font_px, FONT_FAMILY));
            self.font_px = Some(font_px);
        }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Color) {
        self.set_fill(color);
        self.set_font(font_px);
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            warn!("fillText({:?}) failed: {:?}", text, err);
        }
    }

    fn measure_text(&mut self, text: &str, font_px: f32) -> f32 {
        self.set_font(font_px);
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(err) => {
                warn!("measureText({:?}) failed: {:?}", text, err);
                0.0
            }
        }
    }
}
