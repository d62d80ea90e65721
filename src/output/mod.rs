pub mod report;

use itertools::Itertools;

use crate::roster::MemberRecord;
use crate::transform::{self, Cohort};

/// Feature toggles for the generated page. Everything defaults to on; the
/// toggles exist so a build can be slimmed down to the plain variant.
#[derive(Clone, Copy, Debug)]
pub struct PageFeatures {
    pub search_clear: bool,
    pub sort_toggle: bool,
    pub memorial: bool,
}

impl Default for PageFeatures {
    fn default() -> Self {
        Self {
            search_clear: true,
            sort_toggle: true,
            memorial: true,
        }
    }
}

/// Site identity rendered into the page header.
#[derive(Clone, Debug)]
pub struct SiteMeta {
    pub title: String,
    pub accent: Option<String>,
    pub tagline: Option<String>,
    pub story_href: Option<String>,
    pub story_label: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Member Roster".to_string(),
            accent: None,
            tagline: None,
            story_href: None,
            story_label: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageOptions {
    pub site: SiteMeta,
    pub features: PageFeatures,
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_year_links(years: &[i32]) -> String {
    years
        .iter()
        .map(|year| {
            format!(r##"    <a href="#y{year}" class="year-link" data-year="{year}">{year}</a>"##)
        })
        .join("\n")
}

pub fn render_member_card(member: &MemberRecord, features: &PageFeatures) -> String {
    let nickname = member
        .nickname
        .as_deref()
        .map(transform::format_nickname)
        .unwrap_or_default();
    let nickname_html = if nickname.is_empty() {
        String::new()
    } else {
        format!(
            "\n        <span class=\"member-nickname\">{}</span>",
            escape_html(&nickname)
        )
    };

    let video_html = match member.video.as_deref() {
        Some(video) => format!(
            "\n      <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"video-link\" aria-label=\"Watch {} video\"><svg aria-hidden=\"true\" viewBox=\"0 0 24 24\"><path d=\"M8 5v14l11-7z\"/></svg></a>",
            escape_html(video),
            escape_html(&member.name)
        ),
        None => String::new(),
    };

    let memorial = features.memorial && member.deceased;
    let memorial_html = if memorial {
        "\n      <span class=\"memorial-badge\" aria-label=\"In memoriam\" data-tooltip=\"In memoriam\"><svg viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path d=\"M12 2c-1 2-3 4-3 6.5 0 2.5 1.5 4.5 3 4.5s3-2 3-4.5C15 6 13 4 12 2z\"/><rect x=\"11\" y=\"13\" width=\"2\" height=\"9\" rx=\"1\"/></svg></span>".to_string()
    } else {
        String::new()
    };

    let mut card_class = String::from("member-card");
    if member.video.is_some() {
        card_class.push_str(" has-video");
    }
    if memorial {
        card_class.push_str(" memorial");
    }

    format!(
        r#"    <article class="{card_class}">
      <img src="{photo}" alt="{name}" loading="lazy">{video_html}{memorial_html}
      <div class="member-info">
        <h3 class="member-name">{name}</h3>{nickname_html}
      </div>
    </article>"#,
        photo = escape_html(&member.photo),
        name = escape_html(&member.name),
    )
}

pub fn render_year_section(cohort: &Cohort, features: &PageFeatures) -> String {
    let cards = cohort
        .members
        .iter()
        .map(|member| render_member_card(member, features))
        .join("\n");

    format!(
        r#"<section class="year-section" id="y{year}">
  <header class="year-header"><h2 class="year-title">{year}</h2></header>
  <div class="members-grid">
{cards}
  </div>
</section>"#,
        year = cohort.year,
    )
}

/// Render the complete page for an ordered roster. Deterministic: the same
/// records and options always produce identical bytes.
pub fn render_page(records: &[MemberRecord], options: &PageOptions) -> String {
    let cohorts = transform::group_by_year(records);
    report::render_html(&cohorts, records.len(), options)
}
