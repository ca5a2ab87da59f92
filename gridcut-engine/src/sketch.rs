use gridcut_core::geometry::{Line, Point};
use gridcut_core::grid::{GridDimensions, GridSpacing};
use tracing::debug;

use crate::crossing::{Crossings, crossings};
use crate::errors::EngineError;
use crate::layout::{GridLayout, LayoutOptions};
use crate::snap::closest_grid_line;
use crate::validation::{check_dimensions, check_line};

const DEFAULT_WIDTH: f64 = 100.0;
const DEFAULT_HEIGHT: f64 = 100.0;

/// 示例草图中各线段的下标。
#[derive(Debug, Clone, Copy)]
pub struct DemoLines {
    pub horizontal_split: usize,
    pub vertical_split: usize,
    pub subgrid: usize,
}

/// 引擎层维护的草图：画布尺寸与当前线段集合。布局不做增量更新，每次调用 [`Sketch::layout`] 都整体重算。
#[derive(Debug, Clone)]
pub struct Sketch {
    dimensions: GridDimensions,
    lines: Vec<Line>,
    options: LayoutOptions,
}

impl Sketch {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            lines: Vec::new(),
            options: LayoutOptions::default(),
        }
    }

    /// 使用现有线段初始化草图，线段在计算布局时才校验。
    pub fn with_lines(dimensions: GridDimensions, lines: Vec<Line>) -> Self {
        let mut sketch = Self::new(dimensions);
        sketch.load_lines(lines);
        sketch
    }

    /// 替换全部线段。
    pub fn load_lines(&mut self, lines: Vec<Line>) {
        self.lines = lines;
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: GridDimensions) -> Result<(), EngineError> {
        check_dimensions(&dimensions)?;
        self.dimensions = dimensions;
        Ok(())
    }

    #[inline]
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 追加一条线段并返回其下标。斜线或越界线段会被拒绝。
    pub fn add_line(&mut self, line: Line) -> Result<usize, EngineError> {
        let index = self.lines.len();
        check_line(index, &line, &self.dimensions)?;
        self.lines.push(line);
        Ok(index)
    }

    pub fn remove_line(&mut self, index: usize) -> Result<Line, EngineError> {
        if index >= self.lines.len() {
            return Err(EngineError::LineIndexOutOfRange(index));
        }
        Ok(self.lines.remove(index))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// 以当前线段整体重算布局。
    pub fn layout(&self) -> Result<GridLayout, EngineError> {
        GridLayout::compute(&self.lines, self.dimensions, &self.options)
    }

    /// 从给定点出发的四个方向最近交点。
    pub fn crossings_from(&self, point: Point) -> Crossings {
        crossings(point, &self.lines, &self.dimensions)
    }

    pub fn snap_line(&self, cursor: Point, spacing: &GridSpacing) -> Result<Line, EngineError> {
        closest_grid_line(cursor, &self.dimensions, spacing)
    }

    /// 清空草图并写入示例：十字分割加左下象限的竖直子网格。
    pub fn populate_demo(&mut self) -> DemoLines {
        let (w, h) = (self.dimensions.width, self.dimensions.height);
        self.clear();
        self.lines.extend([
            Line::horizontal(h / 2.0, 0.0, w),
            Line::vertical(w / 2.0, 0.0, h),
            Line::vertical(w / 4.0, h / 2.0, h),
        ]);
        let ids = DemoLines {
            horizontal_split: 0,
            vertical_split: 1,
            subgrid: 2,
        };
        debug!(lines = self.lines.len(), "已创建示例草图");
        ids
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new(GridDimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))
    }
}
