use crate::output::{render_page, PageFeatures, PageOptions, SiteMeta};
use crate::roster::MemberRecord;

fn member(name: &str, year: i32) -> MemberRecord {
    MemberRecord {
        name: name.to_string(),
        nickname: None,
        year,
        photo: format!("photos/{}.jpg", name.to_lowercase()),
        video: None,
        deceased: false,
    }
}

fn render(records: &[MemberRecord]) -> String {
    render_page(records, &PageOptions::default())
}

#[test]
fn nav_strip_lists_each_year_once_ascending() {
    let records = vec![
        member("Cal", 2003),
        member("Ann", 1997),
        member("Ben", 2003),
        member("Dee", 1999),
    ];
    let html = render(&records);

    let positions: Vec<usize> = ["#y1997", "#y1999", "#y2003"]
        .iter()
        .map(|anchor| html.find(*anchor).unwrap())
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);

    for year in ["1997", "1999", "2003"] {
        let needle = format!("data-year=\"{year}\"");
        assert_eq!(html.matches(&needle).count(), 1, "year {year} in nav");
    }
    assert_eq!(html.matches("class=\"year-link\"").count(), 3);
}

#[test]
fn every_record_becomes_exactly_one_card() {
    let records = vec![
        member("Ann", 1997),
        member("Ben", 1997),
        member("Cal", 1999),
    ];
    let html = render(&records);
    assert_eq!(html.matches("<article class=\"member-card").count(), 3);
    assert!(html.contains("There are <strong>3</strong> members"));
}

#[test]
fn sections_match_nav_links_and_carry_stable_ids() {
    let records = vec![member("Ann", 1997), member("Cal", 1999)];
    let html = render(&records);
    assert_eq!(html.matches("class=\"year-section\"").count(), 2);
    assert!(html.contains("id=\"y1997\""));
    assert!(html.contains("id=\"y1999\""));
    assert!(html.contains("href=\"#y1997\""));
    assert!(html.contains("href=\"#y1999\""));
}

#[test]
fn field_values_never_reach_the_markup_unescaped() {
    let mut troublemaker = member("Ann <script>alert(1)</script>", 1997);
    troublemaker.nickname = Some("\"slick\" & co".to_string());
    troublemaker.photo = "photos/a\"b.jpg?x=1&y=2".to_string();
    troublemaker.video = Some("https://example.com/v?a=1&b=<2>".to_string());
    let html = render(&[troublemaker]);

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("Ann &lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("photos/a&quot;b.jpg?x=1&amp;y=2"));
    assert!(html.contains("https://example.com/v?a=1&amp;b=&lt;2&gt;"));
    assert!(html.contains("&quot;slick&quot; &amp; Co"));
}

#[test]
fn nickname_display_casing_flows_into_the_page() {
    let mut a = member("Ann", 1997);
    a.nickname = Some("DEX".to_string());
    let mut b = member("Ben", 1997);
    b.nickname = Some("dex flow".to_string());
    let mut c = member("Cal", 1997);
    c.nickname = Some("DeX".to_string());
    let html = render(&[a, b, c]);

    assert!(html.contains("<span class=\"member-nickname\">Dex</span>"));
    assert!(html.contains("<span class=\"member-nickname\">Dex Flow</span>"));
    assert!(html.contains("<span class=\"member-nickname\">DeX</span>"));
}

#[test]
fn cards_without_nickname_render_no_nickname_line() {
    let html = render(&[member("Ann", 1997)]);
    assert!(!html.contains("<span class=\"member-nickname\">"));
}

#[test]
fn video_affordance_only_when_a_video_is_present() {
    let mut with_video = member("Ann", 1997);
    with_video.video = Some("https://example.com/ann".to_string());
    let html = render(&[with_video, member("Ben", 1997)]);

    assert_eq!(html.matches("class=\"video-link\"").count(), 1);
    assert_eq!(html.matches("member-card has-video").count(), 1);
    assert!(html.contains("aria-label=\"Watch Ann video\""));
}

#[test]
fn memorial_badge_follows_the_record_and_the_feature_toggle() {
    let mut gone = member("Ann", 1997);
    gone.deceased = true;
    let records = vec![gone, member("Ben", 1997)];

    let html = render(&records);
    assert_eq!(html.matches("class=\"memorial-badge\"").count(), 1);
    assert_eq!(html.matches("member-card memorial").count(), 1);

    let options = PageOptions {
        features: PageFeatures {
            memorial: false,
            ..PageFeatures::default()
        },
        ..PageOptions::default()
    };
    let html = render_page(&records, &options);
    assert!(!html.contains("class=\"memorial-badge\""));
    assert!(!html.contains("member-card memorial"));
}

#[test]
fn sort_controls_and_clear_button_can_be_disabled() {
    let records = vec![member("Ann", 1997)];

    let html = render(&records);
    assert!(html.contains("id=\"sort-asc\""));
    assert!(html.contains("id=\"sort-desc\""));
    assert!(html.contains("id=\"search-clear\""));

    let options = PageOptions {
        features: PageFeatures {
            sort_toggle: false,
            search_clear: false,
            ..PageFeatures::default()
        },
        ..PageOptions::default()
    };
    let html = render_page(&records, &options);
    assert!(!html.contains("id=\"sort-asc\""));
    assert!(!html.contains("id=\"sort-desc\""));
    assert!(!html.contains("id=\"search-clear\""));
    // The controller stays; it binds those controls only when they exist.
    assert!(html.contains("id=\"search\""));
    assert!(html.contains("updateActiveYear"));
}

#[test]
fn empty_roster_renders_an_empty_page_without_error() {
    let html = render(&[]);
    assert!(html.contains("There are <strong>0</strong> members"));
    assert!(!html.contains("class=\"year-section\""));
    assert!(!html.contains("class=\"year-link\""));
    assert!(html.contains("id=\"search\""));
}

#[test]
fn rendering_is_deterministic() {
    let records = vec![member("Ann", 1997), member("Ben", 1999)];
    let options = PageOptions {
        site: SiteMeta {
            title: "Big Roster".to_string(),
            accent: Some("Crew".to_string()),
            tagline: Some("A crew of regulars.".to_string()),
            story_href: Some("story.html".to_string()),
            story_label: Some("Read the story".to_string()),
        },
        features: PageFeatures::default(),
    };
    assert_eq!(
        render_page(&records, &options),
        render_page(&records, &options)
    );
}

#[test]
fn site_meta_lands_in_header_and_head_title() {
    let records = vec![member("Ann", 1997)];
    let options = PageOptions {
        site: SiteMeta {
            title: "Big Roster".to_string(),
            accent: Some("Crew".to_string()),
            tagline: Some("Invite-only & proud.".to_string()),
            story_href: Some("story.html".to_string()),
            story_label: Some("Read the story".to_string()),
        },
        features: PageFeatures::default(),
    };
    let html = render_page(&records, &options);
    assert!(html.contains("<title>Big Roster Crew</title>"));
    assert!(html.contains("Big Roster<strong>Crew</strong>"));
    assert!(html.contains("Invite-only &amp; proud."));
    assert!(html.contains("<a href=\"story.html\" class=\"btn\">Read the story</a>"));
}

#[test]
fn controller_contract_ids_are_present() {
    let html = render(&[member("Ann", 1997)]);
    for hook in [
        "id=\"timeline-nav\"",
        "id=\"search\"",
        "id=\"search-info\"",
        "id=\"search-wrapper\"",
        "id=\"members\"",
        "aria-live=\"polite\"",
    ] {
        assert!(html.contains(hook), "missing {hook}");
    }
    // The status line the controller writes during a search.
    assert!(html.contains("' of ' + cards.length + ' members'"));
}

#[test]
fn members_within_a_year_keep_roster_order() {
    let records = vec![
        member("Zed", 1997),
        member("Ann", 1997),
        member("Mia", 1997),
    ];
    let html = render(&records);
    let zed = html.find("Zed").unwrap();
    let ann = html.find("Ann").unwrap();
    let mia = html.find("Mia").unwrap();
    assert!(zed < ann && ann < mia);
}
