use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(title) = args.title.as_deref() {
        if title.trim().is_empty() {
            return Err("invalid --title, expected non-empty text".to_string());
        }
    }
    match (args.story_href.as_deref(), args.story_label.as_deref()) {
        (Some(_), None) => {
            return Err("--story-href requires --story-label".to_string());
        }
        (None, Some(_)) => {
            return Err("--story-label requires --story-href".to_string());
        }
        _ => {}
    }
    if let (Some(input), Some(output)) = (args.input.as_deref(), args.output.as_deref()) {
        if input == output {
            return Err(format!("input and output are the same file '{input}'"));
        }
    }
    Ok(())
}
