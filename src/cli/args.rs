use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "rosterbuster",
    version,
    about = "member-roster static page generator",
    long_about = "Rosterbuster reads a JSON roster of members and renders a single self-contained HTML page: members grouped by year, with in-page search, year navigation, and a sort-order toggle.\n\nExamples:\n  rosterbuster\n  rosterbuster -i ./members.json -o ./index.html\n  rosterbuster --title \"Member Roster\" --no-sort-toggle\n\nTip: Use --config to persist site settings and keep invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'i',
        long = "in",
        visible_alias = "input",
        value_name = "FILE",
        help_heading = "Input",
        help = "Roster JSON file (defaults to ./members.json)."
    )]
    pub input: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.rosterbuster/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a default config file to the config path if none exists, then exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Output HTML file (defaults to ./index.html)."
    )]
    pub output: Option<String>,

    #[arg(
        short = 't',
        long = "ttl",
        visible_alias = "title",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Page title."
    )]
    pub title: Option<String>,

    #[arg(
        long = "acc",
        visible_alias = "accent",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Highlighted second line of the title."
    )]
    pub accent: Option<String>,

    #[arg(
        long = "tag",
        visible_alias = "tagline",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Short description rendered under the title."
    )]
    pub tagline: Option<String>,

    #[arg(
        long = "sh",
        visible_alias = "story-href",
        value_name = "URL",
        help_heading = "Page",
        help = "Link target for the story button (requires --story-label)."
    )]
    pub story_href: Option<String>,

    #[arg(
        long = "sl",
        visible_alias = "story-label",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Label for the story button (requires --story-href)."
    )]
    pub story_label: Option<String>,

    #[arg(
        long = "nsc",
        visible_alias = "no-search-clear",
        help_heading = "Features",
        help = "Omit the clear button inside the search box."
    )]
    pub no_search_clear: bool,

    #[arg(
        long = "nst",
        visible_alias = "no-sort-toggle",
        help_heading = "Features",
        help = "Omit the sort-direction controls and their behavior."
    )]
    pub no_sort_toggle: bool,

    #[arg(
        long = "nm",
        visible_alias = "no-memorial",
        help_heading = "Features",
        help = "Omit memorial badges for deceased members."
    )]
    pub no_memorial: bool,

    #[arg(
        short = 'q',
        long = "qt",
        visible_alias = "quiet",
        help_heading = "Output",
        help = "Only print the final summary line."
    )]
    pub quiet: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
