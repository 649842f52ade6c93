use super::TimingBreakdown;
use crate::config::ScanMode;
use crate::direction::Direction;
use crate::grid::BinaryGrid;
use crate::types::Line;
use serde::Serialize;

/// Summary of the scanned grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub foreground_px: usize,
}

impl InputDescriptor {
    pub fn from_grid<G: BinaryGrid + ?Sized>(grid: &G) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            foreground_px: grid.count_foreground(),
        }
    }
}

/// A found line with its derived geometry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDescriptor {
    #[serde(flatten)]
    pub line: Line,
    pub length_px: f32,
    pub heading: Direction,
}

impl From<Line> for LineDescriptor {
    fn from(line: Line) -> Self {
        Self {
            line,
            length_px: line.length(),
            heading: line.heading(),
        }
    }
}

/// Report written by the `find_lines` tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub input: InputDescriptor,
    pub mode: ScanMode,
    pub lines: Vec<LineDescriptor>,
    pub timings: TimingBreakdown,
}

impl ScanReport {
    pub fn new(input: InputDescriptor, mode: ScanMode, lines: Vec<Line>) -> Self {
        Self {
            input,
            mode,
            lines: lines.into_iter().map(LineDescriptor::from).collect(),
            timings: TimingBreakdown::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Bitmap;
    use crate::types::Point;

    #[test]
    fn report_serializes_flat_lines() {
        let mut grid = Bitmap::new(4, 2);
        grid.set(0, 1, true);
        grid.set(3, 1, true);
        let line = Line::new(Point::new(0, 1), Point::new(3, 1));
        let mut report = ScanReport::new(InputDescriptor::from_grid(&grid), ScanMode::Multi, vec![line]);
        report.timings.push("scan", 0.5);
        report.timings.push("write", 0.25);
        assert_eq!(report.timings.total_ms, 0.75);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"]["foregroundPx"], 2);
        assert_eq!(json["mode"], "multi");
        assert_eq!(json["lines"][0]["start"]["x"], 0);
        assert_eq!(json["lines"][0]["end"]["x"], 3);
        assert_eq!(json["lines"][0]["lengthPx"], 3.0);
        assert_eq!(json["lines"][0]["heading"], "E");
    }
}
