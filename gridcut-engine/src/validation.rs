use gridcut_core::geometry::{Line, Rectangle};
use gridcut_core::grid::GridDimensions;
use tracing::warn;

use crate::errors::EngineError;

/// 输入校验策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// 遇到非法输入立即返回错误。
    #[default]
    Strict,
    /// 仅记录警告并继续计算，非法线段会在结果中留下空洞。
    Lenient,
}

pub fn check_dimensions(dimensions: &GridDimensions) -> Result<(), EngineError> {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if valid(dimensions.width) && valid(dimensions.height) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        })
    }
}

pub fn check_line(index: usize, line: &Line, dimensions: &GridDimensions) -> Result<(), EngineError> {
    if line.orientation().is_none() {
        return Err(EngineError::DiagonalLine { index });
    }
    if !dimensions.contains(line.start) || !dimensions.contains(line.end) {
        return Err(EngineError::LineOutOfBounds { index });
    }
    Ok(())
}

/// 收集全部问题而不是在第一个处停下。
pub fn find_problems(lines: &[Line], dimensions: &GridDimensions) -> Vec<EngineError> {
    let mut problems = Vec::new();
    if let Err(err) = check_dimensions(dimensions) {
        problems.push(err);
    }
    problems.extend(
        lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| check_line(index, line, dimensions).err()),
    );
    problems
}

/// 按策略校验输入。宽松模式下返回 `Ok`，每个问题输出一条警告。
pub fn validate(
    lines: &[Line],
    dimensions: &GridDimensions,
    mode: Validation,
) -> Result<(), EngineError> {
    match mode {
        Validation::Strict => {
            check_dimensions(dimensions)?;
            for (index, line) in lines.iter().enumerate() {
                check_line(index, line, dimensions)?;
            }
            Ok(())
        }
        Validation::Lenient => {
            for problem in find_problems(lines, dimensions) {
                warn!(error = %problem, "输入不合法，继续计算");
            }
            Ok(())
        }
    }
}

/// 检查最小单元格是否恰好铺满画布：面积之和等于画布面积，且两两互不重叠。
pub fn check_tiling(rectangles: &[Rectangle], dimensions: &GridDimensions) -> Result<(), EngineError> {
    let covered: f64 = rectangles.iter().map(Rectangle::area).sum();
    let expected = dimensions.area();
    let overlaps = rectangles
        .iter()
        .enumerate()
        .map(|(index, rect)| {
            rectangles[index + 1..]
                .iter()
                .filter(|other| rect.overlaps(other))
                .count()
        })
        .sum();
    // 面积按相对误差比较，非整数坐标累加时会有舍入
    if overlaps == 0 && (covered - expected).abs() <= expected * 1e-9 {
        Ok(())
    } else {
        Err(EngineError::InconsistentTiling {
            covered,
            expected,
            overlaps,
        })
    }
}
