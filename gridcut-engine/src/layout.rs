use gridcut_core::geometry::{Line, Point, Rectangle};
use gridcut_core::grid::{Column, GridDimensions, Row};
use tracing::{info, warn};

use crate::assign::{AreaGrid, assign_areas_to_grid};
use crate::errors::EngineError;
use crate::points::generate_points_from_lines;
use crate::rectangles::create_rectangles;
use crate::tracks::generate_rows_and_columns_from_lines;
use crate::validation::{Validation, check_tiling, validate};

pub const DEFAULT_AREA_PREFIX: &str = "area";

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub validation: Validation,
    /// 区域命名前缀，最终名称为 `{prefix}{index}`。
    pub area_prefix: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            validation: Validation::default(),
            area_prefix: DEFAULT_AREA_PREFIX.to_string(),
        }
    }
}

/// 一次完整计算的结果，保留所有中间产物。每次线段变化都需要整体重新计算。
#[derive(Debug, Clone)]
pub struct GridLayout {
    dimensions: GridDimensions,
    lines: Vec<Line>,
    points: Vec<Point>,
    rectangles: Vec<Rectangle>,
    rows: Vec<Row>,
    columns: Vec<Column>,
    grid: AreaGrid,
}

impl GridLayout {
    /// 校验 → 生成角点 → 构建单元格 → 检查铺满 → 命名 → 推导行列 → 分配网格。
    pub fn compute(
        lines: &[Line],
        dimensions: GridDimensions,
        options: &LayoutOptions,
    ) -> Result<Self, EngineError> {
        validate(lines, &dimensions, options.validation)?;

        let points = generate_points_from_lines(lines, &dimensions);
        let rectangles: Vec<Rectangle> = create_rectangles(&points)
            .into_iter()
            .enumerate()
            .map(|(index, rect)| rect.with_name(format!("{}{index}", options.area_prefix)))
            .collect();
        let tracks = generate_rows_and_columns_from_lines(lines, &dimensions);
        let grid = assign_areas_to_grid(&rectangles, &tracks.columns, &tracks.rows);

        if let Err(err) = check_tiling(&rectangles, &dimensions) {
            match options.validation {
                Validation::Strict => return Err(err),
                Validation::Lenient => warn!(error = %err, "单元格未能恰好铺满画布，继续计算"),
            }
        }
        info!(
            lines = lines.len(),
            areas = rectangles.len(),
            rows = grid.row_count(),
            columns = grid.column_count(),
            "布局计算完成"
        );

        Ok(Self {
            dimensions,
            lines: lines.to_vec(),
            points,
            rectangles,
            rows: tracks.rows,
            columns: tracks.columns,
            grid,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// 已命名的最小单元格，顺序即发现顺序。
    #[inline]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// 推导顺序下的行（未排序），排序后的行见 [`AreaGrid::rows`]。
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[inline]
    pub fn grid(&self) -> &AreaGrid {
        &self.grid
    }

    pub fn area(&self, name: &str) -> Option<&Rectangle> {
        self.rectangles.iter().find(|rect| rect.name() == Some(name))
    }
}
