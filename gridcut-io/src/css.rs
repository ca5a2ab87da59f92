//! 把布局结果导出为 CSS Grid 描述。

use gridcut_engine::assign::AreaGrid;
use gridcut_engine::layout::GridLayout;
use serde::Serialize;

use crate::IoError;

/// 无法分配区域的格子在 `grid-template-areas` 中写作 `.`。
pub const EMPTY_CELL: &str = ".";

/// 与 CSS 属性一一对应的导出结果，序列化为 JSON 时使用属性名作为键。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCss {
    /// 按行展开的区域名。
    pub areas: Vec<String>,
    #[serde(rename = "grid-template-columns")]
    pub grid_template_columns: String,
    #[serde(rename = "grid-template-rows")]
    pub grid_template_rows: String,
    pub display: String,
    #[serde(rename = "grid-template-areas")]
    pub grid_template_areas: String,
    #[serde(skip)]
    area_rows: Vec<String>,
}

impl GridCss {
    pub fn from_layout(layout: &GridLayout) -> Self {
        Self::from_grid(layout.grid())
    }

    pub fn from_grid(grid: &AreaGrid) -> Self {
        let names: Vec<Vec<String>> = grid
            .cells()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.as_ref()
                            .and_then(|rect| rect.name())
                            .unwrap_or(EMPTY_CELL)
                            .to_string()
                    })
                    .collect()
            })
            .collect();

        let area_rows: Vec<String> = names
            .iter()
            .map(|row| format!("\"{}\"", row.join(" ")))
            .collect();

        Self {
            areas: names.into_iter().flatten().collect(),
            grid_template_columns: track_sizes(
                grid.columns().iter().map(|col| col.percentage_of_grid),
            ),
            grid_template_rows: track_sizes(grid.rows().iter().map(|row| row.percentage_of_grid)),
            display: "grid".to_string(),
            grid_template_areas: area_rows.join(" "),
            area_rows,
        }
    }

    /// 渲染为带选择器的声明块，模板区域每行一条。
    pub fn to_css(&self, selector: &str) -> String {
        let areas: String = self
            .area_rows
            .iter()
            .map(|row| format!("\n    {row}"))
            .collect();
        format!(
            "{selector} {{\n  display: {};\n  grid-template-columns: {};\n  grid-template-rows: {};\n  grid-template-areas:{areas};\n}}",
            self.display, self.grid_template_columns, self.grid_template_rows,
        )
    }

    pub fn to_json(&self) -> Result<String, IoError> {
        serde_json::to_string_pretty(self).map_err(IoError::SerializeError)
    }
}

/// 把升序排列的累计百分比转换成相邻差值，即各轨道的宽度。
fn track_sizes(percentages: impl Iterator<Item = f64>) -> String {
    let mut carry = 0.0;
    percentages
        .map(|percentage| {
            let size = percentage - carry;
            carry = percentage;
            format!("{}%", format_percentage(size))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_percentage(value: f64) -> String {
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
