use rosterbuster::output::{PageFeatures, SiteMeta};
use rosterbuster::runner::{Options, Runner};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(Options {
        input: "./members.json".to_string(),
        output: "./index.html".to_string(),
        site: SiteMeta {
            title: "Member".to_string(),
            accent: Some("Roster".to_string()),
            tagline: Some("Everyone who ever joined, year by year.".to_string()),
            ..SiteMeta::default()
        },
        features: PageFeatures {
            sort_toggle: false,
            ..PageFeatures::default()
        },
    })?;
    let report = runner.run()?;

    println!("Members: {}", report.member_count);
    println!("Years:   {}", report.year_count);
    println!("Wrote {} ({} bytes)", report.output_path, report.bytes_written);

    Ok(())
}
