//! 沿坐标轴寻找离给定点最近的分隔线，供交互层把光标吸附到已有边界上。

use gridcut_core::geometry::{Line, Point};
use gridcut_core::grid::GridDimensions;

#[inline]
fn spans_x(line: &Line, x: f64) -> bool {
    let (min, max) = line.x_span();
    min < x && x < max
}

#[inline]
fn spans_y(line: &Line, y: f64) -> bool {
    let (min, max) = line.y_span();
    min < y && y < max
}

/// 向上搜索：返回点正上方最近的水平线交点，若不存在则返回 `y = 0`。
pub fn previous_crossing_on_y_axis(point: Point, lines: &[Line]) -> Point {
    let y = lines
        .iter()
        .filter(|line| spans_x(line, point.x()) && line.start.y() < point.y())
        .map(|line| line.start.y())
        .fold(0.0, f64::max);
    point.with_y(y)
}

/// 向下搜索：返回点正下方最近的水平线交点，若不存在则返回画布高度。
pub fn next_crossing_on_y_axis(point: Point, lines: &[Line], dimensions: &GridDimensions) -> Point {
    let y = lines
        .iter()
        .filter(|line| spans_x(line, point.x()) && line.start.y() > point.y())
        .map(|line| line.start.y())
        .fold(dimensions.height, f64::min);
    point.with_y(y)
}

/// 向左搜索：返回点左侧最近的竖直线交点，若不存在则返回 `x = 0`。
pub fn previous_crossing_on_x_axis(point: Point, lines: &[Line]) -> Point {
    let x = lines
        .iter()
        .filter(|line| spans_y(line, point.y()) && line.start.x() < point.x())
        .map(|line| line.start.x())
        .fold(0.0, f64::max);
    point.with_x(x)
}

/// 向右搜索：返回点右侧最近的竖直线交点，若不存在则返回画布宽度。
pub fn next_crossing_on_x_axis(point: Point, lines: &[Line], dimensions: &GridDimensions) -> Point {
    let x = lines
        .iter()
        .filter(|line| spans_y(line, point.y()) && line.start.x() > point.x())
        .map(|line| line.start.x())
        .fold(dimensions.width, f64::min);
    point.with_x(x)
}

/// 四个方向上的最近交点。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossings {
    pub up: Point,
    pub down: Point,
    pub left: Point,
    pub right: Point,
}

pub fn crossings(point: Point, lines: &[Line], dimensions: &GridDimensions) -> Crossings {
    Crossings {
        up: previous_crossing_on_y_axis(point, lines),
        down: next_crossing_on_y_axis(point, lines, dimensions),
        left: previous_crossing_on_x_axis(point, lines),
        right: next_crossing_on_x_axis(point, lines, dimensions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMENSIONS: GridDimensions = GridDimensions {
        width: 200.0,
        height: 200.0,
    };

    #[test]
    fn finds_crossing_upwards() {
        let line = Line::horizontal(30.0, 0.0, 200.0);
        assert_eq!(
            previous_crossing_on_y_axis(Point::new(100.0, 50.0), &[line]),
            Point::new(100.0, 30.0)
        );
    }

    #[test]
    fn upwards_defaults_to_zero() {
        let line = Line::horizontal(60.0, 0.0, 200.0);
        assert_eq!(
            previous_crossing_on_y_axis(Point::new(100.0, 50.0), &[line]),
            Point::new(100.0, 0.0)
        );
    }

    #[test]
    fn finds_crossing_downwards() {
        let line = Line::horizontal(30.0, 0.0, 200.0);
        assert_eq!(
            next_crossing_on_y_axis(Point::new(100.0, 10.0), &[line], &DIMENSIONS),
            Point::new(100.0, 30.0)
        );
    }

    #[test]
    fn downwards_defaults_to_height() {
        let line = Line::horizontal(30.0, 0.0, 200.0);
        assert_eq!(
            next_crossing_on_y_axis(Point::new(100.0, 60.0), &[line], &DIMENSIONS),
            Point::new(100.0, 200.0)
        );
    }

    #[test]
    fn finds_crossing_to_the_left() {
        let line = Line::vertical(20.0, 0.0, 200.0);
        assert_eq!(
            previous_crossing_on_x_axis(Point::new(50.0, 30.0), &[line]),
            Point::new(20.0, 30.0)
        );
        assert_eq!(
            previous_crossing_on_x_axis(Point::new(10.0, 30.0), &[line]),
            Point::new(0.0, 30.0)
        );
    }

    #[test]
    fn finds_crossing_to_the_right() {
        let near = Line::vertical(80.0, 0.0, 200.0);
        assert_eq!(
            next_crossing_on_x_axis(Point::new(60.0, 50.0), &[near], &DIMENSIONS),
            Point::new(80.0, 50.0)
        );
        let behind = Line::vertical(30.0, 0.0, 200.0);
        assert_eq!(
            next_crossing_on_x_axis(Point::new(60.0, 50.0), &[behind], &DIMENSIONS),
            Point::new(200.0, 50.0)
        );
    }

    #[test]
    fn nearest_line_wins() {
        let lines = [
            Line::horizontal(10.0, 0.0, 200.0),
            Line::horizontal(40.0, 0.0, 200.0),
            Line::horizontal(120.0, 0.0, 200.0),
            Line::horizontal(90.0, 0.0, 200.0),
            // 不覆盖 x = 100 的线段被忽略
            Line::horizontal(45.0, 0.0, 50.0),
        ];
        let found = crossings(Point::new(100.0, 50.0), &lines, &DIMENSIONS);
        assert_eq!(found.up, Point::new(100.0, 40.0));
        assert_eq!(found.down, Point::new(100.0, 90.0));
        assert_eq!(found.left, Point::new(0.0, 50.0));
        assert_eq!(found.right, Point::new(200.0, 50.0));
    }
}
