#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

use std::time::Instant;

use anyhow::{Context, Result};
use terrain::{FrameUniforms, SceneParams};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--headless") {
        return run_headless(&args[1..]);
    }

    tracing::info!("starting windowed terrain renderer");
    render::run()?;
    tracing::info!("renderer shut down");
    Ok(())
}

/// Renders one frame on the CPU and writes it as a PNG.
///
/// Usage: `relief --headless out.png [WIDTHxHEIGHT] [TIME]`
fn run_headless(args: &[String]) -> Result<()> {
    let path = args
        .first()
        .context("--headless requires an output path, e.g. `--headless out.png`")?;
    let (width, height) = match args.get(1) {
        Some(spec) => parse_size(spec)?,
        None => (1280, 720),
    };
    let time = match args.get(2) {
        Some(raw) => raw
            .parse::<f32>()
            .with_context(|| format!("invalid time `{raw}`"))?,
        None => 0.0,
    };

    let uniforms = FrameUniforms::new(time, width as f32, height as f32);
    let scene = SceneParams::default();

    tracing::info!("rendering {width}x{height} frame at t = {time}");
    let started = Instant::now();
    let pixels = terrain::render_frame(&uniforms, &scene);
    tracing::info!("rendered in {:.2?}", started.elapsed());

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .with_context(|| format!("failed to write {path}"))?;
    tracing::info!("wrote {path}");
    Ok(())
}

fn parse_size(spec: &str) -> Result<(u32, u32)> {
    let (w, h) = spec
        .split_once('x')
        .with_context(|| format!("invalid size `{spec}`, expected WIDTHxHEIGHT"))?;
    Ok((
        w.parse().with_context(|| format!("invalid width `{w}`"))?,
        h.parse().with_context(|| format!("invalid height `{h}`"))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::parse_size;

    #[test]
    fn parses_size_spec() {
        assert_eq!(parse_size("1920x1080").unwrap(), (1920, 1080));
        assert!(parse_size("1920").is_err());
        assert!(parse_size("axb").is_err());
    }
}
