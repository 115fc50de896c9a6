// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use crate::art;
use crate::config::options::{ArtOptions, RosterSource, SiteOptions};
use crate::file::display_relative;
use crate::generate;
use crate::progress::Progress;
use crate::roster::Roster;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Generate,
    Placeholders,
    List,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub site: SiteOptions,
    pub keep_existing: bool,
}

/// Prints one line per written file, relative to the site root.
struct CliProgress {
    root: PathBuf,
    verb: &'static str,
}

impl Progress for CliProgress {
    fn item_done(&mut self, _key: &str, path: &Path) {
        println!("{} {}", self.verb, display_relative(path, &self.root));
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    execute(&cmd)
}

pub fn execute(cmd: &Command) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.action == Action::Help {
        eprintln!("{HELP}");
        return Ok(());
    }

    let roster = Roster::load(&cmd.site.roster)?;
    logf!("Roster: {} division(s), {} fighter(s)", roster.divisions().len(), roster.fighter_count());

    match cmd.action {
        Action::Generate => {
            let mut progress = CliProgress { root: cmd.site.root.clone(), verb: "Generated" };
            generate::run(&cmd.site, &roster, Some(&mut progress))?;
        }
        Action::Placeholders => {
            let opts = ArtOptions { site: cmd.site.clone(), keep_existing: cmd.keep_existing };
            let mut progress = CliProgress { root: cmd.site.root.clone(), verb: "Created" };
            let summary = art::run(&opts, &roster, Some(&mut progress))?;
            if summary.skipped > 0 {
                println!("Kept {} existing image(s)", summary.skipped);
            }
        }
        Action::List => {
            for e in roster.entries() {
                println!("{},{},{}", e.division.id, e.fighter.slug, e.fighter.name);
            }
        }
        Action::Help => {}
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command {
        action: Action::Generate,
        site: SiteOptions::default(),
        keep_existing: false,
    };
    let mut action_seen = false;
    let (mut out, mut images, mut banners) = (None, None, None);

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "generate" | "placeholders" | "list" if !action_seen => {
                cmd.action = match a.as_str() {
                    "generate" => Action::Generate,
                    "placeholders" => Action::Placeholders,
                    _ => Action::List,
                };
                action_seen = true;
            }
            "--root" => cmd.site.root = PathBuf::from(args.next().ok_or("Missing value for --root")?),
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output directory")?)),
            "--images" => images = Some(PathBuf::from(args.next().ok_or("Missing value for --images")?)),
            "--banners" => banners = Some(PathBuf::from(args.next().ok_or("Missing value for --banners")?)),
            "--roster" => {
                let v = args.next().ok_or("Missing value for --roster")?;
                cmd.site.roster = RosterSource::File(PathBuf::from(v)); }
            "--keep-existing" => cmd.keep_existing = true,
            "-h" | "--help" => cmd.action = Action::Help,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // Directory overrides are applied after `--root`, whatever the order on the line.
    if let Some(d) = out { cmd.site.set_out_dir(d); }
    if let Some(d) = images { cmd.site.set_images_dir(d); }
    if let Some(d) = banners { cmd.site.set_banners_dir(d); }

    if cmd.keep_existing && !matches!(cmd.action, Action::Placeholders | Action::Help) {
        return Err("--keep-existing only applies to `placeholders`".into());
    }
    Ok(cmd)
}
