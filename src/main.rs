#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use content_creator::app::config::AppConfig;
use content_creator::app::dashui::app::APP_TITLE;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_FILTER: &str = "content_creator=info,eframe=info,egui=warn,wgpu=warn,winit=warn";

fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "content-creator")
        .map(|proj_dirs| proj_dirs.data_dir().join("logs"))
}

fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = log_dir().ok_or("no home directory to place logs in")?;
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("content-creator.log");

    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)?;

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        if let Err(e) = std::fs::set_permissions(&log_path, perms) {
            eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
        }
    }

    // RUST_LOG wins over the built-in levels
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(DEFAULT_LOG_FILTER))?;

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    // Route `log` records (eframe, egui and our log_* macros) into tracing.
    // Must run after the subscriber is installed.
    tracing_log::LogTracer::init()?;

    tracing::info!("Logging initialized to: {:?}", log_path);
    Ok(log_path)
}

fn setup_panic_handler() {
    // Installed before logging so early crashes are recorded too
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Content Creator crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        tracing::error!("{}", crash_msg);
        eprintln!("\n{}", crash_msg);

        let Some(log_dir) = log_dir() else {
            return;
        };
        let _ = std::fs::create_dir_all(&log_dir);
        let crash_log_path = log_dir.join("crash.log");

        if let Ok(mut file) = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&crash_log_path)
        {
            use std::io::Write;
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();

    if let Err(e) = init_logging() {
        eprintln!("File logging disabled: {}", e);
    }

    tracing::info!("content-creator {} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    tracing::info!(
        "Configuration: latency={}ms, export_dir={:?}, preview_chars={}",
        config.simulated_latency_ms,
        config.resolved_export_dir(),
        config.preview_chars
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(content_creator::ContentApp::new(cc, config)))),
    )?;

    tracing::info!("content-creator exited");
    Ok(())
}
