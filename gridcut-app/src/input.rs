use std::path::Path;

use gridcut_config::{LayoutConfig, ValidationMode};
use gridcut_engine::layout::LayoutOptions;
use gridcut_engine::sketch::Sketch;
use gridcut_engine::validation::Validation;
use gridcut_io::{IoError, JsonFacade, LineSetLoader};
use tracing::info;

/// 由配置与命令行开关生成布局参数，`--lenient` 优先于配置文件。
pub fn layout_options(config: &LayoutConfig, lenient: bool) -> LayoutOptions {
    let validation = if lenient {
        Validation::Lenient
    } else {
        match config.validation {
            ValidationMode::Strict => Validation::Strict,
            ValidationMode::Lenient => Validation::Lenient,
        }
    };
    LayoutOptions {
        validation,
        area_prefix: config.area_prefix.clone(),
    }
}

/// 从 JSON 文件读取草图；未指定路径时使用内置示例。
pub fn load_sketch(path: Option<&Path>, options: LayoutOptions) -> Result<Sketch, IoError> {
    let mut sketch = match path {
        Some(path) => {
            let sketch = JsonFacade::new().load(path)?.into_sketch();
            info!(path = %path.display(), lines = sketch.line_count(), "已加载线段文件");
            sketch
        }
        None => {
            let mut sketch = Sketch::default();
            sketch.populate_demo();
            info!(lines = sketch.line_count(), "未指定输入，使用内置示例");
            sketch
        }
    };
    sketch.set_options(options);
    Ok(sketch)
}
