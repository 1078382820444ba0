use chrono::NaiveDate;
use serde::Serialize;

/// A renderable chart specification: traces plus layout, shaped so that
/// `serde_json` output feeds `Plotly.newPlot` directly.
#[derive(Debug, Clone, Serialize)]
pub struct Figure<T> {
    pub data: Vec<T>,
    pub layout: Layout,
}

impl<T: Serialize> Figure<T> {
    /// Single-trace figure, the only shape this dashboard draws.
    pub fn single(trace: T, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
        }
    }

    pub fn with_axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.xaxis = Some(Axis::new(x_title));
        self.yaxis = Some(Axis::new(y_title));
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
        }
    }
}

/// Horizontal bar trace: values on x, category labels on y.
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<i64>,
    pub y: Vec<String>,
    pub orientation: &'static str,
    pub marker: Marker,
}

impl BarTrace {
    pub fn horizontal(x: Vec<i64>, y: Vec<String>, color: &'static str) -> Self {
        Self {
            kind: "bar",
            x,
            y,
            orientation: "h",
            marker: Marker {
                color: Some(color),
                size: None,
            },
        }
    }
}

/// Date-indexed line trace with point markers.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub line: Line,
    pub marker: Marker,
}

impl ScatterTrace {
    pub fn spline(x: Vec<NaiveDate>, y: Vec<f64>, color: &'static str, marker_size: u32) -> Self {
        Self {
            kind: "scatter",
            x,
            y,
            mode: "lines+markers",
            line: Line {
                color,
                shape: "spline",
            },
            marker: Marker {
                color: Some(color),
                size: Some(marker_size),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub shape: &'static str,
}
