use std::sync::Arc;

use toolbox::{config, server};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // The webview loads the embedded server, so it binds to loopback only.
            let mut config = config::AppConfig::load_from_args(["toolbox-wonder"])?;
            config.server.host = "127.0.0.1".to_string();

            tauri::async_runtime::spawn(async move {
                log::info!(
                    "Starting embedded Axum server on port {}",
                    config.server.port
                );

                if let Err(e) = server::start_server(Arc::new(config)).await {
                    log::error!("Axum server failed: {e}");
                }
            });

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
