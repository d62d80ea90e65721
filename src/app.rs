use clap::Parser;
use colored::Colorize;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output::{PageFeatures, SiteMeta};
use crate::runner::{Options, Runner};
use crate::utils;

fn print_banner() {
    const BANNER: &str = r#"
                    __            __               __
   _________  _____/ /____  _____/ /_  __  _______/ /____  _____
  / ___/ __ \/ ___/ __/ _ \/ ___/ __ \/ / / / ___/ __/ _ \/ ___/
 / /  / /_/ (__  ) /_/  __/ /  / /_/ / /_/ (__  ) /_/  __/ /
/_/   \____/____/\__/\___/_/  /_.___/\__,_/____/\__/\___/_/
       v0.2.1 - member-roster static page generator
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug)]
struct RunConfig {
    input: String,
    output: String,
    site: SiteMeta,
    features: PageFeatures,
    no_color: bool,
    quiet: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let input = config::expand_tilde_string(
        args.input
            .or(cfg.input)
            .unwrap_or_else(|| "./members.json".to_string())
            .as_str(),
    );
    let output = config::expand_tilde_string(
        args.output
            .or(cfg.output)
            .unwrap_or_else(|| "./index.html".to_string())
            .as_str(),
    );

    let title = args
        .title
        .or(cfg.title)
        .unwrap_or_else(|| "Member Roster".to_string());
    let accent = args.accent.or(cfg.accent);
    let tagline = args.tagline.or(cfg.tagline);

    let story_href = args.story_href.or(cfg.story_href);
    let story_label = args.story_label.or(cfg.story_label);
    match (story_href.as_deref(), story_label.as_deref()) {
        (Some(_), None) => return Err("story_href requires story_label".to_string()),
        (None, Some(_)) => return Err("story_label requires story_href".to_string()),
        _ => {}
    }

    let features = PageFeatures {
        search_clear: !args.no_search_clear && cfg.search_clear.unwrap_or(true),
        sort_toggle: !args.no_sort_toggle && cfg.sort_toggle.unwrap_or(true),
        memorial: !args.no_memorial && cfg.memorial.unwrap_or(true),
    };

    Ok(RunConfig {
        input,
        output,
        site: SiteMeta {
            title,
            accent,
            tagline,
            story_href,
            story_label,
        },
        features,
        no_color,
        quiet: args.quiet,
    })
}

pub fn run_cli() -> Result<(), String> {
    let args = CliArgs::parse();

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));

    if args.init_config {
        let path = user_config_path
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| "could not determine config path".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!("config file at {}", path.display());
        return Ok(());
    }

    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    if run.no_color {
        colored::control::set_override(false);
    }

    if !run.quiet {
        print_banner();
        format_kv_line("Input", &run.input);
        format_kv_line("Output", &run.output);
    }

    let runner = Runner::new(Options {
        input: run.input,
        output: run.output,
        site: run.site,
        features: run.features,
    })
    .map_err(|e| e.to_string())?;
    let report = runner.run().map_err(|e| e.to_string())?;

    if !run.quiet {
        format_kv_line(
            "Years",
            &report
                .years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
        format_kv_line("Size", &utils::human_bytes(report.bytes_written));
    }

    println!(
        "{} {} {} {} {} {}",
        "generated".bold().green(),
        report.output_path.bold().cyan(),
        "with".bold().white(),
        report.member_count.to_string().bold().cyan(),
        "members across".bold().white(),
        format!("{} years", report.year_count).bold().cyan(),
    );
    if !run.quiet {
        println!(
            ":: Completed :: build took {}ms ::",
            report.elapsed.as_millis()
        );
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let args = CliArgs::parse_from(["rosterbuster"]);
        let run = build_run_config(args, ConfigFile::default()).unwrap();
        assert_eq!(run.input, "./members.json");
        assert_eq!(run.output, "./index.html");
        assert_eq!(run.site.title, "Member Roster");
        assert!(run.features.sort_toggle);
        assert!(run.features.search_clear);
        assert!(run.features.memorial);
    }

    #[test]
    fn cli_wins_over_config() {
        let args = CliArgs::parse_from(["rosterbuster", "--title", "Crew", "-i", "crew.json"]);
        let cfg = ConfigFile {
            title: Some("From config".to_string()),
            input: Some("config.json".to_string()),
            output: Some("crew.html".to_string()),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert_eq!(run.site.title, "Crew");
        assert_eq!(run.input, "crew.json");
        assert_eq!(run.output, "crew.html");
    }

    #[test]
    fn feature_disables_combine_from_both_sources() {
        let args = CliArgs::parse_from(["rosterbuster", "--no-sort-toggle"]);
        let cfg = ConfigFile {
            memorial: Some(false),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert!(!run.features.sort_toggle);
        assert!(!run.features.memorial);
        assert!(run.features.search_clear);
    }

    #[test]
    fn unpaired_story_settings_are_rejected() {
        let args = CliArgs::parse_from(["rosterbuster"]);
        let cfg = ConfigFile {
            story_href: Some("story.html".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(args, cfg).is_err());
    }
}
