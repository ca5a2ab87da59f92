pub mod geometry {
    use std::hash::{Hash, Hasher};

    use glam::DVec2;
    use serde::{Deserialize, Serialize};

    /// 二维点，内部以 `glam::DVec2` 表示。相等性为逐字段精确比较，不做容差处理。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Point(pub DVec2);

    impl Point {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn from_vec(vec: DVec2) -> Self {
            Self(vec)
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn with_x(self, x: f64) -> Self {
            Self::new(x, self.0.y)
        }

        #[inline]
        pub fn with_y(self, y: f64) -> Self {
            Self::new(self.0.x, y)
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }

        /// 用于按值去重的哈希键。`-0.0` 与 `0.0` 映射到同一个键。
        #[inline]
        pub fn key(self) -> (u64, u64) {
            (coordinate_bits(self.0.x), coordinate_bits(self.0.y))
        }
    }

    #[inline]
    fn coordinate_bits(value: f64) -> u64 {
        // 加 0.0 会把 -0.0 归一为 0.0，与 `==` 的语义保持一致。
        (value + 0.0).to_bits()
    }

    // 坐标不允许为 NaN，在此前提下 `==` 是等价关系。
    impl Eq for Point {}

    impl Hash for Point {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.key().hash(state);
        }
    }

    impl From<DVec2> for Point {
        fn from(value: DVec2) -> Self {
            Self::from_vec(value)
        }
    }

    impl From<(f64, f64)> for Point {
        fn from((x, y): (f64, f64)) -> Self {
            Self::new(x, y)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Orientation {
        Horizontal,
        Vertical,
    }

    /// 轴对齐线段。算法假定线段只会是水平或竖直的，斜线由引擎层的校验处理。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Line {
        pub start: Point,
        pub end: Point,
    }

    impl Line {
        #[inline]
        pub fn new(start: Point, end: Point) -> Self {
            Self { start, end }
        }

        pub fn horizontal(y: f64, from_x: f64, to_x: f64) -> Self {
            Self::new(Point::new(from_x, y), Point::new(to_x, y))
        }

        pub fn vertical(x: f64, from_y: f64, to_y: f64) -> Self {
            Self::new(Point::new(x, from_y), Point::new(x, to_y))
        }

        /// 先判断竖直：零长度线段也归为竖直线。
        pub fn orientation(&self) -> Option<Orientation> {
            if self.start.x() == self.end.x() {
                Some(Orientation::Vertical)
            } else if self.start.y() == self.end.y() {
                Some(Orientation::Horizontal)
            } else {
                None
            }
        }

        #[inline]
        pub fn is_vertical(&self) -> bool {
            self.orientation() == Some(Orientation::Vertical)
        }

        #[inline]
        pub fn is_horizontal(&self) -> bool {
            self.orientation() == Some(Orientation::Horizontal)
        }

        /// X 方向范围 `(min, max)`，与起止点顺序无关。
        #[inline]
        pub fn x_span(&self) -> (f64, f64) {
            let (a, b) = (self.start.x(), self.end.x());
            if a <= b { (a, b) } else { (b, a) }
        }

        /// Y 方向范围 `(min, max)`。
        #[inline]
        pub fn y_span(&self) -> (f64, f64) {
            let (a, b) = (self.start.y(), self.end.y());
            if a <= b { (a, b) } else { (b, a) }
        }
    }

    /// 轴对齐矩形（单元格）。y 轴向下增长，与屏幕坐标一致。
    ///
    /// 相等性与哈希只比较四个角点，`name` 不参与比较。
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Rectangle {
        pub top_left: Point,
        pub top_right: Point,
        pub bottom_left: Point,
        pub bottom_right: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }

    impl Rectangle {
        pub fn from_corners(
            top_left: Point,
            top_right: Point,
            bottom_left: Point,
            bottom_right: Point,
        ) -> Self {
            Self {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
                name: None,
            }
        }

        /// 由左上角与右下角推导出另外两个角点。
        pub fn from_extent(top_left: Point, bottom_right: Point) -> Self {
            Self::from_corners(
                top_left,
                Point::new(bottom_right.x(), top_left.y()),
                Point::new(top_left.x(), bottom_right.y()),
                bottom_right,
            )
        }

        pub fn with_name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        #[inline]
        pub fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        #[inline]
        pub fn width(&self) -> f64 {
            self.top_right.x() - self.top_left.x()
        }

        #[inline]
        pub fn height(&self) -> f64 {
            self.bottom_left.y() - self.top_left.y()
        }

        #[inline]
        pub fn area(&self) -> f64 {
            self.width() * self.height()
        }

        /// 闭区间包含判断，边界上的点也算在内。
        pub fn contains(&self, point: Point) -> bool {
            point.x() >= self.top_left.x()
                && point.x() <= self.bottom_right.x()
                && point.y() >= self.top_left.y()
                && point.y() <= self.bottom_right.y()
        }

        /// 两个矩形内部是否重叠（仅共享边不算）。
        pub fn overlaps(&self, other: &Rectangle) -> bool {
            self.top_left.x() < other.bottom_right.x()
                && other.top_left.x() < self.bottom_right.x()
                && self.top_left.y() < other.bottom_right.y()
                && other.top_left.y() < self.bottom_right.y()
        }

        #[inline]
        pub fn corners(&self) -> [Point; 4] {
            [
                self.top_left,
                self.top_right,
                self.bottom_left,
                self.bottom_right,
            ]
        }
    }

    impl PartialEq for Rectangle {
        fn eq(&self, other: &Self) -> bool {
            self.corners() == other.corners()
        }
    }

    impl Eq for Rectangle {}

    impl Hash for Rectangle {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.corners().hash(state);
        }
    }

    /// 比较两个矩形的四个角点是否完全一致。
    #[inline]
    pub fn rects_are_equal(a: &Rectangle, b: &Rectangle) -> bool {
        a == b
    }
}

pub mod grid {
    use serde::{Deserialize, Serialize};

    use crate::geometry::Point;

    /// 画布边界，所有坐标都应落在 `[0, width] × [0, height]` 内。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct GridDimensions {
        pub width: f64,
        pub height: f64,
    }

    impl GridDimensions {
        #[inline]
        pub fn new(width: f64, height: f64) -> Self {
            Self { width, height }
        }

        /// 四个角点，顺序为 `(0,0) (w,0) (0,h) (w,h)`。
        pub fn corners(&self) -> [Point; 4] {
            [
                Point::new(0.0, 0.0),
                Point::new(self.width, 0.0),
                Point::new(0.0, self.height),
                Point::new(self.width, self.height),
            ]
        }

        #[inline]
        pub fn area(&self) -> f64 {
            self.width * self.height
        }

        #[inline]
        pub fn contains(&self, point: Point) -> bool {
            point.x() >= 0.0
                && point.x() <= self.width
                && point.y() >= 0.0
                && point.y() <= self.height
        }
    }

    /// 均匀吸附网格，`vertical` / `horizontal` 为两个方向上的分段数。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct GridSpacing {
        pub vertical: f64,
        pub horizontal: f64,
    }

    impl GridSpacing {
        #[inline]
        pub fn new(vertical: f64, horizontal: f64) -> Self {
            Self {
                vertical,
                horizontal,
            }
        }
    }

    /// 宏观网格的行分隔线。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Row {
        pub y: f64,
        pub percentage_of_grid: f64,
    }

    impl Row {
        pub fn new(y: f64, dimensions: &GridDimensions) -> Self {
            Self {
                y,
                percentage_of_grid: y / dimensions.height * 100.0,
            }
        }
    }

    /// 宏观网格的列分隔线。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Column {
        pub x: f64,
        pub percentage_of_grid: f64,
    }

    impl Column {
        pub fn new(x: f64, dimensions: &GridDimensions) -> Self {
            Self {
                x,
                percentage_of_grid: x / dimensions.width * 100.0,
            }
        }
    }
}
