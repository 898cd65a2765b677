// Chart data models consumed by the trend renderer

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<ChartPoint>,
}

impl SeriesData {
    pub fn new(id: String, name: String, color: Option<String>, points: Vec<ChartPoint>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(title: String, series: Vec<SeriesData>) -> Self {
        Self { title, series }
    }

    /// X-axis labels, left to right, taken from the first series
    pub fn labels(&self) -> Vec<&str> {
        self.series
            .first()
            .map(|s| s.points.iter().map(|p| p.label.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn series(&self, id: &str) -> Option<&SeriesData> {
        self.series.iter().find(|s| s.id == id)
    }
}
