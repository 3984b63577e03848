pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 260.0;

pub const PAD_LEFT: f64 = 30.0;
pub const PAD_RIGHT: f64 = 10.0;
pub const PAD_TOP: f64 = 10.0;
pub const PAD_BOTTOM: f64 = 20.0;

pub const MARKER_RADIUS: f64 = 3.0;
pub const LABEL_EVERY: usize = 5;
pub const EMPTY_LABEL: &str = "no data yet";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Axis,
    Series,
}

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn polyline(&mut self, points: &[Point], stroke: Stroke);
    fn marker(&mut self, center: Point, radius: f64);
    fn text(&mut self, at: Point, label: &str);
}

pub fn render_cumulative<S: Surface + ?Sized>(surface: &mut S, series: &[u64]) {
    surface.clear();

    if series.is_empty() {
        surface.text(Point::new(10.0, 20.0), EMPTY_LABEL);
        return;
    }

    let w = surface.width();
    let h = surface.height();
    let plot_width = w - PAD_LEFT - PAD_RIGHT;
    let plot_height = h - PAD_TOP - PAD_BOTTOM;
    let baseline = h - PAD_BOTTOM;

    let max_val = series.iter().copied().max().unwrap_or(0);
    let step = plot_width / (series.len().saturating_sub(1).max(1)) as f64;

    surface.polyline(
        &[
            Point::new(PAD_LEFT, PAD_TOP),
            Point::new(PAD_LEFT, baseline),
            Point::new(w - PAD_RIGHT, baseline),
        ],
        Stroke::Axis,
    );

    let points: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ratio = if max_val == 0 {
                0.0
            } else {
                *value as f64 / max_val as f64
            };
            Point::new(PAD_LEFT + i as f64 * step, baseline - ratio * plot_height)
        })
        .collect();

    surface.polyline(&points, Stroke::Series);

    for (i, point) in points.iter().enumerate() {
        surface.marker(*point, MARKER_RADIUS);
        if i % LABEL_EVERY == 0 {
            surface.text(Point::new(point.x - 3.0, h - 5.0), &i.to_string());
        }
    }

    surface.text(Point::new(2.0, PAD_TOP + 10.0), &max_val.to_string());
}

#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT)
    }
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="Cumulative events">"#,
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            out.push_str(element);
        }
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        let coords = points
            .iter()
            .map(|point| format!("{:.2},{:.2}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ");
        let class = match stroke {
            Stroke::Axis => "chart-axis",
            Stroke::Series => "chart-line",
        };
        self.elements
            .push(format!(r#"<polyline class="{class}" points="{coords}" />"#));
    }

    fn marker(&mut self, center: Point, radius: f64) {
        self.elements.push(format!(
            r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="{radius}" />"#,
            center.x, center.y
        ));
    }

    fn text(&mut self, at: Point, label: &str) {
        self.elements.push(format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}">{}</text>"#,
            at.x,
            at.y,
            escape(label)
        ));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
