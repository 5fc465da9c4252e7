use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
  Command::new("apptree")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Extract visibility-clipped accessibility trees from running apps")
    .long_about(
      "apptree enumerates on-screen windows, computes which parts of each are \
       actually visible under front-to-back occlusion, and dumps each target \
       application's UI element tree with every element clipped to the visible \
       region of its window. Optionally captures and annotates screenshots.",
    )
    .arg(
      Arg::new("apps")
        .short('a')
        .long("apps")
        .help("Application bundle identifiers to extract (space-separated)")
        .num_args(1..)
        .value_name("BUNDLE_ID"),
    )
    .arg(
      Arg::new("all-apps")
        .long("all-apps")
        .help("Ignore --apps and auto-discover applications with visible windows")
        .action(ArgAction::SetTrue),
    )
    .arg(
      Arg::new("out")
        .short('o')
        .long("out")
        .help("Output JSON file for the extracted trees")
        .required(true)
        .value_name("FILE"),
    )
    .arg(
      Arg::new("screenshot-dir")
        .long("screenshot-dir")
        .help("Directory for cropped/segmented screenshots and the annotated full screen")
        .value_name("DIR"),
    )
    .arg(
      Arg::new("max-depth")
        .long("max-depth")
        .help("Maximum depth of the extracted trees (unlimited when omitted)")
        .value_parser(clap::value_parser!(u32))
        .value_name("N"),
    )
    .arg(
      Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("Enable verbose logging output")
        .action(ArgAction::SetTrue),
    )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_multiple_bundles() {
    let matches = build_cli()
      .try_get_matches_from([
        "apptree",
        "-a",
        "com.apple.Notes",
        "com.apple.Safari",
        "--out",
        "tree.json",
      ])
      .unwrap();
    let apps: Vec<&String> = matches.get_many::<String>("apps").unwrap().collect();
    assert_eq!(apps, ["com.apple.Notes", "com.apple.Safari"]);
  }

  #[test]
  fn out_is_required() {
    assert!(build_cli()
      .try_get_matches_from(["apptree", "-a", "com.apple.Notes"])
      .is_err());
  }

  #[test]
  fn max_depth_parses_as_number() {
    let matches = build_cli()
      .try_get_matches_from(["apptree", "--out", "t.json", "--max-depth", "7"])
      .unwrap();
    assert_eq!(matches.get_one::<u32>("max-depth"), Some(&7));
  }
}
