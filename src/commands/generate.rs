//! Generate route props

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::PathBuf;
use std::time::Duration;

use crate::generator::Generator;
use crate::Blog;

/// Load all content and write the props of every route.
///
/// Loading fails fast: a broken source file aborts before anything is written.
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let site = blog.load_site()?;
    tracing::info!(
        "Loaded {} articles and {} tips",
        site.articles.len(),
        site.tips.len()
    );

    let stats = Generator::new(blog).generate(&site)?;
    tracing::info!(
        "Wrote {} files ({} tag pages) to {:?}",
        stats.files,
        stats.tags,
        blog.public_dir
    );

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch content and config for changes and regenerate
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel::<DebounceEventResult>();

    // Debounce to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for (path, mode) in watch_targets(blog) {
        debouncer.watcher().watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // The receiver blocks, so drain it off the async runtime
    let base_dir = blog.base_dir.clone();
    tokio::task::spawn_blocking(move || {
        while let Ok(result) = rx.recv() {
            match result {
                Ok(events) => {
                    let relevant = events.iter().any(|e| {
                        let path_str = e.path.to_string_lossy();
                        !path_str.contains(".git")
                            && !path_str.contains(".DS_Store")
                            && !path_str.ends_with('~')
                    });
                    if !relevant {
                        continue;
                    }

                    for event in &events {
                        tracing::info!("File changed: {}", event.path.display());
                    }

                    // Re-read config too, it may be what changed
                    let rebuilt = Blog::new(&base_dir).and_then(|blog| run(&blog));
                    if let Err(e) = rebuilt {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                }
                Err(e) => {
                    tracing::error!("Watch error: {:?}", e);
                }
            }
        }
    })
    .await?;

    Ok(())
}

/// Existing content dir and config files, with how to watch each
fn watch_targets(blog: &Blog) -> Vec<(PathBuf, RecursiveMode)> {
    let mut targets = Vec::new();
    if blog.content_dir.exists() {
        targets.push((blog.content_dir.clone(), RecursiveMode::Recursive));
    }
    for name in crate::config::CONFIG_FILES {
        let config_path = blog.base_dir.join(name);
        if config_path.exists() {
            targets.push((config_path, RecursiveMode::NonRecursive));
        }
    }
    targets
}
