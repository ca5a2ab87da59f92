use std::collections::HashSet;

use gridcut_core::geometry::{Line, Orientation, Point};
use gridcut_core::grid::GridDimensions;
use tracing::debug;

/// 计算两条轴对齐线段的交点。平行线段（同为水平或同为竖直）永不相交，
/// 端点落在对方线段上同样算作相交。
pub fn intersection(a: &Line, b: &Line) -> Option<Point> {
    match (a.orientation()?, b.orientation()?) {
        (Orientation::Vertical, Orientation::Horizontal) => crossing_point(a, b),
        (Orientation::Horizontal, Orientation::Vertical) => crossing_point(b, a),
        _ => None,
    }
}

fn crossing_point(vertical: &Line, horizontal: &Line) -> Option<Point> {
    let x = vertical.start.x();
    let y = horizontal.start.y();
    let (min_x, max_x) = horizontal.x_span();
    let (min_y, max_y) = vertical.y_span();
    if x >= min_x && x <= max_x && y >= min_y && y <= max_y {
        Some(Point::new(x, y))
    } else {
        None
    }
}

/// 两两比较所有线段，按 `(i, j)`（`i < j`）的顺序输出交点。
/// 结果可能包含重复点，去重留给 [`generate_points_from_lines`]。
pub fn line_intersection_points(lines: &[Line]) -> Vec<Point> {
    let mut points = Vec::new();
    for (index, base) in lines.iter().enumerate() {
        for other in &lines[index + 1..] {
            if let Some(point) = intersection(base, other) {
                points.push(point);
            }
        }
    }
    points
}

/// 生成铺满画布所需的全部角点：画布四角、线段端点以及线段交点。
///
/// 输出顺序稳定：先四角，再按线段顺序的起点/终点，最后是交点；重复坐标只保留首次出现。
pub fn generate_points_from_lines(lines: &[Line], dimensions: &GridDimensions) -> Vec<Point> {
    let endpoints = lines.iter().flat_map(|line| [line.start, line.end]);
    let intersections = line_intersection_points(lines);
    let intersection_count = intersections.len();

    let mut seen = HashSet::new();
    let points: Vec<Point> = dimensions
        .corners()
        .into_iter()
        .chain(endpoints)
        .chain(intersections)
        .filter(|point| seen.insert(point.key()))
        .collect();

    debug!(
        lines = lines.len(),
        intersections = intersection_count,
        points = points.len(),
        "已生成角点集合"
    );
    points
}
