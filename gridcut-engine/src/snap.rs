use gridcut_core::geometry::{Line, Point};
use gridcut_core::grid::{GridDimensions, GridSpacing};

use crate::errors::EngineError;

/// 在均匀吸附网格上寻找离光标最近的整条网格线。
///
/// 比较光标到前一条竖直线与前一条水平线的余量，余量更小的方向胜出（相等时取水平线），
/// 坐标四舍五入到最近的网格线上。分段数必须为正的有限值。
pub fn closest_grid_line(
    point: Point,
    dimensions: &GridDimensions,
    spacing: &GridSpacing,
) -> Result<Line, EngineError> {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !valid(spacing.vertical) || !valid(spacing.horizontal) {
        return Err(EngineError::InvalidSpacing {
            vertical: spacing.vertical,
            horizontal: spacing.horizontal,
        });
    }

    let step_x = dimensions.width / spacing.vertical;
    let step_y = dimensions.height / spacing.horizontal;

    let to_vertical = point.x() % step_x;
    let to_horizontal = point.y() % step_y;

    if to_vertical < to_horizontal {
        let x = (point.x() / step_x).round() * step_x;
        Ok(Line::vertical(x, 0.0, dimensions.height))
    } else {
        let y = (point.y() / step_y).round() * step_y;
        Ok(Line::horizontal(y, 0.0, dimensions.width))
    }
}
