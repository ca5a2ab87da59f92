use std::collections::HashSet;

use gridcut_core::geometry::{Point, Rectangle};
use tracing::debug;

/// 按结构相等去重，保留首次出现的顺序。
pub fn rectangle_set_from_slice(rectangles: &[Rectangle]) -> Vec<Rectangle> {
    let mut seen = HashSet::new();
    rectangles
        .iter()
        .filter(|rect| seen.insert(rect.corners()))
        .cloned()
        .collect()
}

/// 枚举四个角点都在点集中的全部矩形，包括由多个单元格拼成的大矩形。
///
/// 点集内的重复坐标只会产生结构相同的候选，因此用哈希表判断角点是否存在，
/// 与逐一组合右上角/左下角候选的结果一致。
pub fn candidate_rectangles(points: &[Point]) -> Vec<Rectangle> {
    let lookup: HashSet<Point> = points.iter().copied().collect();
    let mut candidates = Vec::new();
    for &top_left in points {
        for &bottom_right in points {
            if bottom_right.x() <= top_left.x() || bottom_right.y() <= top_left.y() {
                continue;
            }
            let top_right = Point::new(bottom_right.x(), top_left.y());
            let bottom_left = Point::new(top_left.x(), bottom_right.y());
            if lookup.contains(&top_right) && lookup.contains(&bottom_left) {
                candidates.push(Rectangle::from_corners(
                    top_left,
                    top_right,
                    bottom_left,
                    bottom_right,
                ));
            }
        }
    }
    candidates
}

/// 剔除包含其他矩形的候选，只保留最小单元格。输入需已去重。
///
/// 满足以下任一条件即视为"有子矩形"：
/// - 另一矩形（右下角 x、y 均不同）的左上角严格落在本矩形内部；
/// - 另一矩形与本矩形共用左上角，但向右或向下延伸得更短。
pub fn remove_rectangles_with_children(rectangles: &[Rectangle]) -> Vec<Rectangle> {
    rectangles
        .iter()
        .filter(|rect| !rectangles.iter().any(|inner| has_child(rect, inner)))
        .cloned()
        .collect()
}

fn has_child(rect: &Rectangle, inner: &Rectangle) -> bool {
    let starts_inside = inner.bottom_right.x() != rect.bottom_right.x()
        && inner.bottom_right.y() != rect.bottom_right.y()
        && inner.top_left.x() > rect.top_left.x()
        && inner.top_left.y() > rect.top_left.y()
        && inner.top_left.x() < rect.top_right.x()
        && inner.top_left.y() < rect.bottom_left.y();
    let shares_origin = inner.top_left == rect.top_left
        && (inner.top_right.x() < rect.top_right.x()
            || inner.bottom_left.y() < rect.bottom_left.y());
    starts_inside || shares_origin
}

/// 由角点集合构建最小单元格：枚举候选、去重、剪枝。
pub fn create_rectangles(points: &[Point]) -> Vec<Rectangle> {
    let candidates = candidate_rectangles(points);
    let unique = rectangle_set_from_slice(&candidates);
    let cells = remove_rectangles_with_children(&unique);
    debug!(
        points = points.len(),
        candidates = candidates.len(),
        unique = unique.len(),
        cells = cells.len(),
        "已构建最小单元格"
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rectangle {
        Rectangle::from_extent(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_same_set(actual: &[Rectangle], expected: &[Rectangle]) {
        assert_eq!(actual.len(), expected.len(), "actual: {actual:?}");
        for rect in expected {
            assert!(actual.contains(rect), "missing {rect:?}");
        }
    }

    #[test]
    fn four_points_form_the_whole_canvas() {
        let cells = create_rectangles(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (0.0, 100.0),
            (100.0, 100.0),
        ]));
        assert_eq!(cells, vec![rect(0.0, 0.0, 100.0, 100.0)]);
    }

    #[test]
    fn creates_four_equal_rectangles() {
        let cells = create_rectangles(&points(&[
            (50.0, 0.0),
            (50.0, 100.0),
            (50.0, 50.0),
            (0.0, 50.0),
            (100.0, 50.0),
            (0.0, 100.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 0.0),
        ]));
        assert_same_set(
            &cells,
            &[
                rect(0.0, 0.0, 50.0, 50.0),
                rect(0.0, 50.0, 50.0, 100.0),
                rect(50.0, 0.0, 100.0, 50.0),
                rect(50.0, 50.0, 100.0, 100.0),
            ],
        );
    }

    #[test]
    fn creates_complex_grid_with_subgrids() {
        let cells = create_rectangles(&points(&[
            (10.0, 10.0),
            (0.0, 10.0),
            (10.0, 0.0),
            (10.0, 50.0),
            (40.0, 50.0),
            (40.0, 0.0),
            (50.0, 0.0),
            (0.0, 50.0),
            (50.0, 50.0),
            (0.0, 0.0),
        ]));
        assert_same_set(
            &cells,
            &[
                rect(0.0, 10.0, 10.0, 50.0),
                rect(0.0, 0.0, 10.0, 10.0),
                rect(10.0, 0.0, 40.0, 50.0),
                rect(40.0, 0.0, 50.0, 50.0),
            ],
        );
    }

    #[test]
    fn removes_rectangles_that_contain_others() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(0.0, 0.0, 50.0, 50.0);
        let result = remove_rectangles_with_children(&[outer, inner.clone()]);
        assert_eq!(result, vec![inner]);
    }

    #[test]
    fn pruning_twice_is_a_no_op() {
        let pts = points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (0.0, 100.0),
            (100.0, 100.0),
            (0.0, 50.0),
            (100.0, 50.0),
            (50.0, 0.0),
            (50.0, 100.0),
            (25.0, 50.0),
            (25.0, 100.0),
            (50.0, 50.0),
        ]);
        let unique = rectangle_set_from_slice(&candidate_rectangles(&pts));
        let once = remove_rectangles_with_children(&unique);
        let twice = remove_rectangles_with_children(&once);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 5);
    }

    #[test]
    fn duplicate_points_do_not_duplicate_cells() {
        let cells = create_rectangles(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 100.0),
            (100.0, 100.0),
        ]));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn incomplete_corners_are_dropped_silently() {
        // 缺少 (0, 100)，无法闭合任何矩形
        let cells = create_rectangles(&points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]));
        assert!(cells.is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let a = rect(0.0, 0.0, 10.0, 10.0).with_name("first");
        let b = rect(0.0, 0.0, 10.0, 10.0).with_name("second");
        let c = rect(10.0, 0.0, 20.0, 10.0);
        let unique = rectangle_set_from_slice(&[a, b, c]);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].name(), Some("first"));
    }
}
