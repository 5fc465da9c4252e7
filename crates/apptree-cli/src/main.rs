/*! apptree CLI: extract clipped accessibility trees, optionally with screenshots. */

use anyhow::Context;
use apptree::{ExtractOptions, Extractor};
use std::path::Path;

mod app;
mod capture;

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn main() -> anyhow::Result<()> {
  let matches = app::build_cli().get_matches();
  init_logging(matches.get_flag("verbose"));

  let extractor = Extractor::new().context("failed to start extraction session")?;

  let mut bundles: Vec<String> = matches
    .get_many::<String>("apps")
    .map(|values| values.cloned().collect())
    .unwrap_or_default();
  if matches.get_flag("all-apps") || bundles.is_empty() {
    bundles = extractor.visible_bundles();
    log::info!("discovered {} visible application(s)", bundles.len());
  }
  if bundles.is_empty() {
    anyhow::bail!("no target applications (use --apps or --all-apps)");
  }

  let mut options = ExtractOptions::new();
  if let Some(depth) = matches.get_one::<u32>("max-depth") {
    options = options.max_depth(*depth);
  }

  let extraction = extractor.extract_bundles(&bundles, &options);
  for (bundle, err) in &extraction.failures {
    log::warn!("skipped {bundle}: {err}");
  }

  let out = matches
    .get_one::<String>("out")
    .context("--out is required")?;
  let json = serde_json::to_string_pretty(&extraction.trees)?;
  std::fs::write(out, json).with_context(|| format!("writing {out}"))?;
  log::info!("wrote {} tree(s) to {out}", extraction.trees.len());

  if let Some(dir) = matches.get_one::<String>("screenshot-dir") {
    let manifest =
      capture::capture_and_annotate(&extraction.trees, extractor.scale(), Path::new(dir))?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
  }

  Ok(())
}
