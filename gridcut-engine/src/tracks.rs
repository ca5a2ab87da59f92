use std::collections::HashSet;

use gridcut_core::geometry::Line;
use gridcut_core::grid::{Column, GridDimensions, Row};
use tracing::debug;

/// 宏观网格的行与列，直接由线段坐标推导，与最小单元格的划分相互独立。
#[derive(Debug, Clone, PartialEq)]
pub struct RowsAndColumns {
    pub rows: Vec<Row>,
    pub columns: Vec<Column>,
}

/// 竖直线贡献列坐标，其余线段贡献行坐标（取终点 y）。画布的宽、高总会被追加为最后一列、最后一行。
///
/// 重复坐标只保留首次出现，输出顺序即首次出现的顺序。
pub fn generate_rows_and_columns_from_lines(
    lines: &[Line],
    dimensions: &GridDimensions,
) -> RowsAndColumns {
    let mut column_coords = Vec::new();
    let mut row_coords = Vec::new();
    for line in lines {
        if line.is_vertical() {
            column_coords.push(line.end.x());
        } else {
            row_coords.push(line.end.y());
        }
    }
    column_coords.push(dimensions.width);
    row_coords.push(dimensions.height);

    let rows: Vec<Row> = distinct(row_coords)
        .map(|y| Row::new(y, dimensions))
        .collect();
    let columns: Vec<Column> = distinct(column_coords)
        .map(|x| Column::new(x, dimensions))
        .collect();

    debug!(rows = rows.len(), columns = columns.len(), "已推导宏观行列");
    RowsAndColumns { rows, columns }
}

fn distinct(values: Vec<f64>) -> impl Iterator<Item = f64> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(move |value| seen.insert((value + 0.0).to_bits()))
}
