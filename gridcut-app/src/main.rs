use std::path::PathBuf;

use gridcut_config::{AppConfig, ConfigError, OutputFormat};
use gridcut_io::css::GridCss;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod input;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut config_override: Option<PathBuf> = None;
    let mut input_path: Option<PathBuf> = None;
    let mut format_override: Option<OutputFormat> = None;
    let mut lenient = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    eprintln!("`--config` 需要提供配置文件路径");
                    std::process::exit(1);
                };
                config_override = Some(PathBuf::from(path));
            }
            "--input" => {
                let Some(path) = args.next() else {
                    eprintln!("`--input` 需要提供线段文件路径");
                    std::process::exit(1);
                };
                input_path = Some(PathBuf::from(path));
            }
            "--format" => match args.next().as_deref() {
                Some("css") => format_override = Some(OutputFormat::Css),
                Some("json") => format_override = Some(OutputFormat::Json),
                other => {
                    eprintln!("`--format` 仅支持 css 或 json，收到：{other:?}");
                    std::process::exit(1);
                }
            },
            "--lenient" => lenient = true,
            other => {
                eprintln!("未知参数：{other}");
                std::process::exit(1);
            }
        }
    }

    let config = load_configuration(config_override);
    init_logging(&config);
    info!("启动 gridcut");

    let options = input::layout_options(&config.layout, lenient);
    let sketch = match input::load_sketch(input_path.as_deref(), options) {
        Ok(sketch) => sketch,
        Err(err) => {
            error!(error = %err, "无法读取线段文件");
            std::process::exit(1);
        }
    };

    let layout = match sketch.layout() {
        Ok(layout) => layout,
        Err(err) => {
            error!(error = %err, "布局计算失败");
            std::process::exit(1);
        }
    };

    let css = GridCss::from_layout(&layout);
    match format_override.unwrap_or(config.output.format) {
        OutputFormat::Css => println!("{}", css.to_css(&config.output.selector)),
        OutputFormat::Json => match css.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "无法序列化输出");
                std::process::exit(1);
            }
        },
    }
}

fn load_configuration(override_path: Option<PathBuf>) -> AppConfig {
    match override_path {
        Some(path) => AppConfig::from_file(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "指定的配置文件不可用，回退到默认配置");
            AppConfig::default()
        }),
        None => match AppConfig::discover() {
            Ok(cfg) => cfg,
            Err(err) => {
                match &err {
                    ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => {
                        warn!(path = %path.display(), error = %err, "自动发现的配置不可用，回退到内建默认值");
                    }
                    ConfigError::Context { .. } => {
                        warn!(error = %err, "自动发现的配置不可用，回退到内建默认值");
                    }
                }
                AppConfig::default()
            }
        },
    }
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(config.logging.level.clone()).unwrap_or_else(|_| EnvFilter::new("info"));
    // 日志写到 stderr，stdout 只留给导出结果
    let subscriber = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let _ = subscriber.try_init();
}
