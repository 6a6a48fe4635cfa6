//! Static Chart Renderer
//! Draws a [`ParallelChart`] with Plotters, to SVG or PNG.
//!
//! Layout (inside the margins):
//! 1. Background layer: light gray, nearly transparent polylines
//! 2. Foreground layer: polylines colored by outcome
//! 3. One vertical axis per dimension with ticks, label above
//! 4. Two-entry legend near the top-right corner

use super::layout::ParallelChart;
use crate::data::{Rgb, NEUTRAL_GRAY};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing error: {0}")]
    Drawing(String),
}

const BACKGROUND_OPACITY: f64 = 0.1;
const FOREGROUND_OPACITY: f64 = 0.4;
const LABEL_FONT_SIZE: f64 = 11.0;
const TICK_FONT_SIZE: f64 = 10.0;
const TICK_LENGTH: i32 = 6;
const LEGEND_RADIUS: i32 = 6;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to an SVG document in memory.
    pub fn render_svg_string(chart: &ParallelChart) -> Result<String, RenderError> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, chart.config.outer_size())
                .into_drawing_area();
            Self::draw(&root, chart).map_err(|e| RenderError::Drawing(e.to_string()))?;
        }
        Ok(buffer)
    }

    /// Render to an SVG file.
    pub fn render_svg_file(chart: &ParallelChart, path: &Path) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, chart.config.outer_size()).into_drawing_area();
        Self::draw(&root, chart).map_err(|e| RenderError::Drawing(e.to_string()))?;
        log::info!("Chart saved to {}", path.display());
        Ok(())
    }

    /// Render to a PNG file.
    pub fn render_png_file(chart: &ParallelChart, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, chart.config.outer_size()).into_drawing_area();
        Self::draw(&root, chart).map_err(|e| RenderError::Drawing(e.to_string()))?;
        log::info!("Chart saved to {}", path.display());
        Ok(())
    }

    /// Full redraw of the chart onto any backend.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &ParallelChart,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let margin = chart.config.margin;
        let area = root.margin(
            margin.top.round() as i32,
            margin.bottom.round() as i32,
            margin.left.round() as i32,
            margin.right.round() as i32,
        );

        let background = ShapeStyle {
            color: to_rgb(NEUTRAL_GRAY).mix(BACKGROUND_OPACITY),
            filled: false,
            stroke_width: 1,
        };
        for line in &chart.lines {
            area.draw(&PathElement::new(pixels(&line.points), background))?;
        }

        for line in &chart.lines {
            let foreground = ShapeStyle {
                color: to_rgb(line.color).mix(FOREGROUND_OPACITY),
                filled: false,
                stroke_width: 1,
            };
            area.draw(&PathElement::new(pixels(&line.points), foreground))?;
        }

        Self::draw_axes(&area, chart)?;
        Self::draw_legend(&area, chart)?;

        root.present()?;
        Ok(())
    }

    fn draw_axes<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        chart: &ParallelChart,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let height = chart.config.height.round() as i32;
        let tick_style = TextStyle::from(("sans-serif", TICK_FONT_SIZE).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let label_style = TextStyle::from(("sans-serif", LABEL_FONT_SIZE).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for axis in &chart.axes {
            let x = axis.x.round() as i32;
            area.draw(&PathElement::new(vec![(x, 0), (x, height)], &BLACK))?;

            for tick in &axis.ticks {
                let y = tick.y.round() as i32;
                area.draw(&PathElement::new(vec![(x - TICK_LENGTH, y), (x, y)], &BLACK))?;
                area.draw(&Text::new(
                    tick.text.clone(),
                    (x - TICK_LENGTH - 3, y),
                    tick_style.clone(),
                ))?;
            }

            area.draw(&Text::new(axis.label.to_string(), (x, -10), label_style.clone()))?;
        }
        Ok(())
    }

    fn draw_legend<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        chart: &ParallelChart,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let text_style = TextStyle::from(("sans-serif", LABEL_FONT_SIZE).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));

        for entry in &chart.legend {
            let (x, y) = (entry.x.round() as i32, entry.y.round() as i32);
            area.draw(&Circle::new(
                (x, y),
                LEGEND_RADIUS,
                to_rgb(entry.color).filled(),
            ))?;
            area.draw(&Text::new(
                entry.label.to_string(),
                (x + 12, y),
                text_style.clone(),
            ))?;
        }
        Ok(())
    }
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn pixels(points: &[(f64, f64)]) -> Vec<(i32, i32)> {
    points
        .iter()
        .map(|&(x, y)| (x.round() as i32, y.round() as i32))
        .collect()
}
