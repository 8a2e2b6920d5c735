//! PWA icon-set generator.
//!
//! Renders the themed icon at every requested size and writes
//! `icon-{size}x{size}.png` files plus a favicon, optionally composing from
//! an existing source image instead of drawing a theme. One bad size or file
//! is logged and skipped; the rest of the batch still completes.
//!
//! Usage:
//!   cargo run --bin gen_icons -- --out-dir icons --theme rummy --manifest
//!   cargo run --bin gen_icons -- --source joker-source.png --out-dir icons

use anyhow::{anyhow, Result};
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
};

use deckicon::{compose_from_source, IconRenderer, Theme};

#[derive(Parser, Debug)]
#[command(about = "Procedurally generate the app icon set", version, author)]
struct Args {
    /// Output directory for the generated files.
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,
    /// Built-in theme name (rummy, joker). Ignored when --theme-file is set.
    #[arg(long, default_value = "rummy")]
    theme: String,
    /// RON theme descriptor replacing the built-in themes.
    #[arg(long)]
    theme_file: Option<PathBuf>,
    /// Compose icons from this source image instead of rendering a theme.
    #[arg(long)]
    source: Option<PathBuf>,
    /// TrueType font for captions and rank letters; builtin glyphs if absent.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Icon sizes to render.
    #[arg(long, value_delimiter = ',', default_values_t = vec![72u32, 96, 128, 144, 152, 192, 384, 512])]
    sizes: Vec<u32>,
    /// Pixel size of the favicon.
    #[arg(long, default_value_t = 32)]
    favicon_size: u32,
    /// Skip writing favicon.ico.
    #[arg(long)]
    no_favicon: bool,
    /// Also write a web-manifest style icons.json fragment.
    #[arg(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let theme = match &args.theme_file {
        Some(path) => Theme::load_from_file(path)?,
        None => Theme::builtin(&args.theme).ok_or_else(|| anyhow!("unknown theme {}", args.theme))?,
    };
    let renderer = IconRenderer::with_font(theme, args.font.as_deref());
    fs::create_dir_all(&args.out_dir).map_err(|e| anyhow!("create {}: {e}", args.out_dir.display()))?;

    let make = |size: u32| match &args.source {
        Some(src) => compose_from_source(src, size),
        None => renderer.render(size),
    };

    let mut written = 0usize;
    let mut failed = 0usize;
    for &size in &args.sizes {
        if size == 0 {
            log::warn!("skipping invalid size 0");
            failed += 1;
            continue;
        }
        let img = make(size);
        let path = args.out_dir.join(format!("icon-{size}x{size}.png"));
        match img.save(&path) {
            Ok(()) => {
                println!("Wrote {} ({size}x{size})", path.display());
                written += 1;
            }
            Err(e) => {
                log::error!("write {}: {e}", path.display());
                failed += 1;
            }
        }
    }

    if !args.no_favicon && args.favicon_size > 0 {
        let path = args.out_dir.join("favicon.ico");
        match write_favicon(&make(args.favicon_size), &path) {
            Ok(()) => {
                println!("Wrote {} ({}x{} ico)", path.display(), args.favicon_size, args.favicon_size);
                written += 1;
            }
            Err(e) => {
                log::error!("write {}: {e}", path.display());
                failed += 1;
            }
        }
    }

    if args.manifest {
        let path = args.out_dir.join("icons.json");
        write_manifest(&args.sizes, &path)?;
        println!("Wrote {}", path.display());
    }

    println!("Icon set complete: {written} written, {failed} failed.");
    Ok(())
}

fn write_favicon(img: &image::RgbaImage, path: &Path) -> Result<()> {
    let (w, h) = img.dimensions();
    let icon = ico::IconImage::from_rgba_data(w, h, img.as_raw().clone());
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    dir.add_entry(ico::IconDirEntry::encode(&icon)?);
    let file = fs::File::create(path)?;
    dir.write(file)?;
    Ok(())
}

/// Web-manifest `icons` fragment matching the PNG naming convention.
fn write_manifest(sizes: &[u32], path: &Path) -> Result<()> {
    let entries: Vec<serde_json::Value> = sizes
        .iter()
        .filter(|&&s| s > 0)
        .map(|s| {
            serde_json::json!({
                "src": format!("icon-{s}x{s}.png"),
                "sizes": format!("{s}x{s}"),
                "type": "image/png",
                "purpose": "any"
            })
        })
        .collect();
    let root = serde_json::json!({ "icons": entries });
    fs::write(path, serde_json::to_string_pretty(&root)?)?;
    Ok(())
}
