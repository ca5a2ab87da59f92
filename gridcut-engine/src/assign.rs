use gridcut_core::geometry::Rectangle;
use gridcut_core::grid::{Column, Row};
use tracing::debug;

/// 宏观网格到单元格的映射结果。行按 y 升序、列按 x 升序排列。
///
/// 同一个矩形可能出现在多个格子里，表示该区域横跨多个宏观行/列；
/// 无法解析的格子为 `None`。
#[derive(Debug, Clone, PartialEq)]
pub struct AreaGrid {
    rows: Vec<Row>,
    columns: Vec<Column>,
    cells: Vec<Vec<Option<Rectangle>>>,
}

impl AreaGrid {
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[inline]
    pub fn cells(&self) -> &[Vec<Option<Rectangle>>] {
        &self.cells
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Rectangle> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    /// 未能匹配到任何矩形的格子数量。
    pub fn unassigned_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }
}

/// 精确匹配：右下角恰好落在 `(col, row)` 上的矩形。
pub fn find_area(rectangles: &[Rectangle], col: f64, row: f64) -> Option<&Rectangle> {
    rectangles
        .iter()
        .find(|rect| rect.bottom_right.x() == col && rect.bottom_right.y() == row)
}

/// 当宏观格子内部被子网格细分时，寻找直接覆盖 `(col, row)` 的矩形。
///
/// 先找两个候选：底边落在该行且水平范围覆盖该列的矩形，以及右边落在该列且垂直范围覆盖该行的矩形。
/// 两者都不存在时退化为寻找包围该点的矩形；否则按上述顺序取第一个左上角 x 严格小于 `col` 的候选。
pub fn find_rectangle_that_directly_contains_area(
    rectangles: &[Rectangle],
    col: f64,
    row: f64,
) -> Option<&Rectangle> {
    let along_row = rectangles.iter().find(|rect| {
        rect.bottom_right.x() >= col && rect.bottom_right.y() == row && rect.top_left.x() <= col
    });
    let along_column = rectangles.iter().find(|rect| {
        rect.bottom_right.x() == col && rect.bottom_right.y() >= row && rect.top_left.y() <= row
    });

    if along_row.is_none() && along_column.is_none() {
        return rectangles.iter().find(|rect| {
            rect.bottom_right.x() >= col
                && rect.bottom_right.y() >= row
                && rect.top_left.x() <= col
                && rect.top_left.y() <= row
        });
    }

    [along_row, along_column]
        .into_iter()
        .flatten()
        .find(|rect| rect.top_left.x() < col)
}

/// 把矩形分配到宏观网格的每个 `(row, col)` 格子上。输入的行列无需预先排序。
pub fn assign_areas_to_grid(rectangles: &[Rectangle], columns: &[Column], rows: &[Row]) -> AreaGrid {
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| a.y.total_cmp(&b.y));
    let mut columns = columns.to_vec();
    columns.sort_by(|a, b| a.x.total_cmp(&b.x));

    let cells: Vec<Vec<Option<Rectangle>>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| {
                    find_area(rectangles, col.x, row.y)
                        .or_else(|| {
                            find_rectangle_that_directly_contains_area(rectangles, col.x, row.y)
                        })
                        .cloned()
                })
                .collect()
        })
        .collect();

    let grid = AreaGrid {
        rows,
        columns,
        cells,
    };
    debug!(
        rows = grid.row_count(),
        columns = grid.column_count(),
        unassigned = grid.unassigned_count(),
        "已完成宏观网格分配"
    );
    grid
}
