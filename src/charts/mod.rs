//! Charts module - Scales, layout and rendering

mod layout;
mod plotter;
mod renderer;
mod scale;

pub use layout::{AxisGeometry, ChartConfig, ChartLine, LegendEntry, Margin, ParallelChart, Tick};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use scale::{LinearScale, PointScale};
