use itertools::Itertools;

use super::{escape_html, render_year_links, render_year_section, PageOptions};
use crate::transform::{self, Cohort};

/// Render the full document: markup, embedded styles, embedded controller.
/// The controller operates purely on the rendered markup, so every hook it
/// needs (section ids, card classes, name/nickname elements) is emitted here.
pub fn render_html(cohorts: &[Cohort], total_members: usize, options: &PageOptions) -> String {
    let years = transform::distinct_years(cohorts);
    let timeline_links = render_year_links(&years);
    let year_sections = cohorts
        .iter()
        .map(|cohort| render_year_section(cohort, &options.features))
        .join("\n\n");

    let site = &options.site;
    let accent_html = match site.accent.as_deref() {
        Some(accent) => format!("<strong>{}</strong>", escape_html(accent)),
        None => String::new(),
    };
    let head_title = match site.accent.as_deref() {
        Some(accent) => format!("{} {}", site.title, accent),
        None => site.title.clone(),
    };
    let tagline_html = match site.tagline.as_deref() {
        Some(tagline) => format!(
            "\n  <p class=\"site-description\">{}</p>",
            escape_html(tagline)
        ),
        None => String::new(),
    };
    let story_html = match (site.story_href.as_deref(), site.story_label.as_deref()) {
        (Some(href), Some(label)) => format!(
            "\n  <a href=\"{}\" class=\"btn\">{}</a>",
            escape_html(href),
            escape_html(label)
        ),
        _ => String::new(),
    };

    let search_clear_html = if options.features.search_clear {
        "\n    <button type=\"button\" class=\"search-clear\" id=\"search-clear\" aria-label=\"Clear search\"><svg aria-hidden=\"true\" viewBox=\"0 0 24 24\"><path d=\"M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z\"/></svg></button>"
    } else {
        ""
    };

    let sort_toggle_html = if options.features.sort_toggle {
        r#"
  <div class="sort-toggle" role="group" aria-label="Sort order">
    <button type="button" id="sort-asc" aria-pressed="true">
      <svg aria-hidden="true" viewBox="0 0 24 24"><path d="M7 14l5-5 5 5z"/></svg>
      Originators first
    </button>
    <button type="button" id="sort-desc" aria-pressed="false">
      <svg aria-hidden="true" viewBox="0 0 24 24"><path d="M7 10l5 5 5-5z"/></svg>
      Newest first
    </button>
  </div>"#
    } else {
        ""
    };

    format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{head_title}</title>
<style>
{css}
</style>
</head>
<body>

<a href="#members" class="skip-link">Skip to members</a>

<header class="site-header">
  <h1 class="site-title">{title}{accent_html}</h1>{tagline_html}{story_html}
  <p class="member-count">There are <strong>{total_members}</strong> members</p>
</header>

<nav class="timeline-nav" id="timeline-nav" aria-label="Jump to year">
  <a href="#" class="top-link" aria-label="Back to top"><svg aria-hidden="true" viewBox="0 0 24 24"><path d="M7.41 15.41L12 10.83l4.59 4.58L18 14l-6-6-6 6z"/></svg></a>
  <div class="timeline-nav-inner">
{timeline_links}
  </div>
</nav>

<div class="search-container">
  <label for="search" class="visually-hidden">Search members by name or nickname</label>
  <div class="search-wrapper" id="search-wrapper">
    <input type="text" class="search-box" id="search" placeholder="Search by name or nickname..." autocomplete="off">{search_clear_html}
  </div>{sort_toggle_html}
</div>
<p class="search-info" id="search-info" aria-live="polite"></p>

<main class="main-content" id="members">

{year_sections}

</main>

<script>
{js}
</script>

</body>
</html>
"####,
        head_title = escape_html(&head_title),
        title = escape_html(&site.title),
        css = inline_css(),
        js = inline_javascript(),
    )
}

/// Embedded stylesheet. The `.hidden`, `.active`, and `.has-value` rules are
/// load-bearing for the controller; the rest is theme.
fn inline_css() -> &'static str {
    r#":root {
  --bg-dark: #0f0f1a;
  --bg-card: #1a1a2e;
  --bg-timeline: #16213e;
  --accent: #00d4ff;
  --accent-light: #66e5ff;
  --text: #ccd6f6;
  --text-muted: #8892b0;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; scroll-padding-top: 80px; }

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: var(--bg-dark);
  color: var(--text);
  line-height: 1.6;
}

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-light); }

a:focus-visible, button:focus-visible, input:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.skip-link {
  position: absolute;
  top: -100px;
  left: 50%;
  transform: translateX(-50%);
  background: var(--accent);
  color: #000;
  padding: 0.75rem 1.5rem;
  border-radius: 4px;
  font-weight: 600;
  z-index: 1000;
  transition: top 0.2s;
}
.skip-link:focus { top: 1rem; }

.site-header {
  text-align: center;
  padding: 3rem 1rem 2rem;
  background: linear-gradient(180deg, var(--bg-timeline) 0%, var(--bg-dark) 100%);
}

.site-title {
  font-size: clamp(2.5rem, 8vw, 4rem);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.25rem;
  line-height: 0.9;
}

.site-title strong {
  display: block;
  font-size: 1.3em;
  line-height: 0.9;
  background: linear-gradient(90deg, var(--accent), var(--accent-light));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.site-description { max-width: 600px; margin: 1rem auto; color: var(--text-muted); }

.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  background: var(--accent);
  color: #000;
  border-radius: 4px;
  font-weight: 600;
  margin-top: 1rem;
}
.btn:hover { color: #000; transform: translateY(-2px); }

.member-count { margin-top: 1.5rem; font-size: 1.1rem; }
.member-count strong { color: var(--accent); font-size: 1.4em; }

.timeline-nav {
  position: sticky;
  top: 0;
  z-index: 100;
  background: var(--bg-timeline);
  border-bottom: 1px solid rgba(0, 212, 255, 0.2);
  display: flex;
  align-items: center;
}

.timeline-nav-inner {
  display: flex;
  align-items: center;
  padding: 0.5rem 1rem 0.5rem 0;
  gap: 0.5rem;
  overflow-x: auto;
  flex: 1;
  scrollbar-width: thin;
  scrollbar-color: var(--accent) var(--bg-timeline);
}

.year-link {
  padding: 0.5rem 0.75rem;
  color: var(--text-muted);
  font-weight: 500;
  font-size: 0.9rem;
  border-radius: 4px;
  white-space: nowrap;
}
.year-link:hover { color: var(--text); background: rgba(0, 212, 255, 0.1); }
.year-link.active { color: #fff; background: var(--accent); }

.top-link {
  flex-shrink: 0;
  display: flex;
  align-items: center;
  padding: 0.5rem 1rem;
  color: var(--text-muted);
  border-right: 1px solid rgba(255, 255, 255, 0.1);
}
.top-link svg { width: 20px; height: 20px; fill: currentColor; }

.search-container { max-width: 400px; margin: 0 auto; padding: 1.5rem 1rem; }
.search-wrapper { position: relative; }

.search-box {
  width: 100%;
  padding: 0.75rem 2.5rem 0.75rem 1rem;
  font-size: 1rem;
  border: 2px solid transparent;
  border-radius: 8px;
  background: var(--bg-card);
  color: var(--text);
}
.search-box::placeholder { color: var(--text-muted); }
.search-box:focus { border-color: var(--accent); }

.search-clear {
  position: absolute;
  right: 0.5rem;
  top: 50%;
  transform: translateY(-50%);
  width: 24px;
  height: 24px;
  border: none;
  background: transparent;
  color: var(--text-muted);
  cursor: pointer;
  padding: 0;
  display: none;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
}
.search-clear:hover { color: var(--text); background: rgba(255, 255, 255, 0.1); }
.search-clear svg { width: 16px; height: 16px; fill: currentColor; }
.search-wrapper.has-value .search-clear { display: flex; }

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.search-info {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.9rem;
  min-height: 1.5rem;
  padding: 0 1rem;
}

.sort-toggle {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 0.75rem;
}

.sort-toggle button {
  background: var(--bg-card);
  border: 2px solid transparent;
  color: var(--text-muted);
  padding: 0.5rem 1rem;
  border-radius: 6px;
  font-size: 0.85rem;
  font-weight: 500;
  cursor: pointer;
  display: flex;
  align-items: center;
  gap: 0.4rem;
}
.sort-toggle button:hover { color: var(--text); border-color: var(--accent); }
.sort-toggle button[aria-pressed="true"] {
  background: var(--accent);
  color: #000;
  border-color: var(--accent);
}
.sort-toggle button svg { width: 14px; height: 14px; fill: currentColor; }

.main-content { max-width: 1400px; margin: 0 auto; padding: 0 1rem 4rem; }

.year-section { margin-bottom: 3rem; scroll-margin-top: 80px; }

.year-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
  padding-bottom: 0.5rem;
  border-bottom: 2px solid var(--accent);
}

.year-header::before {
  content: '';
  width: 12px;
  height: 12px;
  background: var(--accent);
  border-radius: 50%;
  box-shadow: 0 0 0 4px var(--bg-dark), 0 0 0 6px var(--accent);
}

.year-title { font-size: 1.75rem; color: var(--accent); font-weight: 700; }

.members-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: 1.5rem;
}

.member-card {
  background: var(--bg-card);
  border-radius: 12px;
  overflow: hidden;
  transition: transform 0.3s, box-shadow 0.3s;
}
.member-card.has-video { position: relative; }
.member-card:hover {
  transform: translateY(-6px);
  box-shadow: 0 12px 30px rgba(0, 0, 0, 0.4);
}

.member-card img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  display: block;
}

.member-info { padding: 1rem; text-align: center; }

.member-name { font-size: 0.95rem; font-weight: 600; color: var(--text); }

.member-nickname {
  display: block;
  font-size: 0.8rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--accent);
}

.video-link {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 36px;
  height: 36px;
  background: var(--accent);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
}
.video-link:hover { transform: scale(1.1); background: var(--accent-light); }
.video-link svg { width: 16px; height: 16px; fill: #000; margin-left: 2px; }

.memorial-badge {
  position: absolute;
  top: 0.5rem;
  left: 0.5rem;
  width: 36px;
  height: 36px;
  background: rgba(0, 0, 0, 0.6);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: default;
}
.memorial-badge svg { width: 20px; height: 20px; fill: #ffb832; }

.memorial-badge::after {
  content: attr(data-tooltip);
  position: absolute;
  left: 50%;
  top: 100%;
  transform: translateX(-50%);
  margin-top: 6px;
  padding: 0.5rem 0.75rem;
  background: rgba(0, 0, 0, 0.9);
  color: #ffb832;
  font-size: 0.8rem;
  white-space: nowrap;
  border-radius: 4px;
  opacity: 0;
  visibility: hidden;
  transition: opacity 0.15s, visibility 0.15s;
  pointer-events: none;
}
.memorial-badge:hover::after { opacity: 1; visibility: visible; }
.member-card.memorial { position: relative; overflow: visible; }

.member-card.hidden,
.year-section.hidden { display: none; }

@media (max-width: 600px) {
  .members-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
  .member-info { padding: 0.75rem; }
  .member-name { font-size: 0.85rem; }
  .member-nickname { font-size: 0.7rem; }
}"#
}

/// Embedded client controller. Three behaviors share one `isSearching` flag:
/// scrollspy highlighting, substring search over the rendered cards, and the
/// optional sort-order reversal. Sort and clear controls are looked up and
/// bound only when present, so one script serves every feature combination.
fn inline_javascript() -> &'static str {
    r#"(function() {
  var nav = document.getElementById('timeline-nav');
  var navInner = nav.querySelector('.timeline-nav-inner');
  var isSearching = false;

  function updateActiveYear() {
    // Search owns visibility; no year is highlighted while it is active.
    if (isSearching) {
      document.querySelectorAll('.year-link').forEach(function(link) {
        link.classList.remove('active');
      });
      return;
    }

    var navHeight = nav.offsetHeight + 20;
    var current = '';

    // Sections are scanned in current DOM order so the reversal keeps working.
    document.querySelectorAll('.year-section').forEach(function(section) {
      var rect = section.getBoundingClientRect();
      if (rect.top <= navHeight + 100) {
        current = section.id;
      }
    });

    document.querySelectorAll('.year-link').forEach(function(link) {
      link.classList.remove('active');
      if (link.getAttribute('href') === '#' + current) {
        link.classList.add('active');
        // Bring the active year into view without touching page scroll.
        var linkLeft = link.offsetLeft;
        var navWidth = navInner.offsetWidth;
        var linkWidth = link.offsetWidth;
        navInner.scrollTo({
          left: linkLeft - (navWidth / 2) + (linkWidth / 2),
          behavior: 'smooth'
        });
      }
    });
  }

  window.addEventListener('scroll', updateActiveYear, { passive: true });
  updateActiveYear();

  // Search works off the rendered markup; the source roster is not embedded.
  var searchBox = document.getElementById('search');
  var searchInfo = document.getElementById('search-info');
  var searchWrapper = document.getElementById('search-wrapper');
  var searchClear = document.getElementById('search-clear');

  if (searchClear) {
    searchClear.addEventListener('click', function() {
      searchBox.value = '';
      searchBox.dispatchEvent(new Event('input'));
      searchBox.focus();
    });
  }

  searchBox.addEventListener('input', function(e) {
    var query = e.target.value.toLowerCase().trim();
    var cards = document.querySelectorAll('.member-card');
    var sections = document.querySelectorAll('.year-section');
    var visibleCount = 0;

    searchWrapper.classList.toggle('has-value', e.target.value.length > 0);

    if (!query) {
      isSearching = false;
      cards.forEach(function(card) { card.classList.remove('hidden'); });
      sections.forEach(function(section) { section.classList.remove('hidden'); });
      searchInfo.textContent = '';
      updateActiveYear();
      return;
    }

    isSearching = true;
    document.querySelectorAll('.year-link').forEach(function(link) {
      link.classList.remove('active');
    });

    cards.forEach(function(card) {
      var name = card.querySelector('.member-name').textContent.toLowerCase();
      var nicknameEl = card.querySelector('.member-nickname');
      var nickname = nicknameEl ? nicknameEl.textContent.toLowerCase() : '';
      if (name.includes(query) || nickname.includes(query)) {
        card.classList.remove('hidden');
        visibleCount++;
      } else {
        card.classList.add('hidden');
      }
    });

    // A year disappears only when none of its cards survived the filter.
    sections.forEach(function(section) {
      var visible = section.querySelectorAll('.member-card:not(.hidden)');
      if (visible.length === 0) {
        section.classList.add('hidden');
      } else {
        section.classList.remove('hidden');
      }
    });

    searchInfo.textContent = 'Showing ' + visibleCount + ' of ' + cards.length + ' members';
  });

  // Sort toggle reverses rendered order; it never re-sorts by another key.
  var sortAsc = document.getElementById('sort-asc');
  var sortDesc = document.getElementById('sort-desc');
  var main = document.getElementById('members');

  function reverseOrder() {
    Array.from(main.querySelectorAll('.year-section')).reverse().forEach(function(section) {
      main.appendChild(section);
    });
    Array.from(navInner.querySelectorAll('.year-link')).reverse().forEach(function(link) {
      navInner.appendChild(link);
    });
  }

  function bindSortButton(button, other) {
    button.addEventListener('click', function() {
      if (button.getAttribute('aria-pressed') === 'true') return;
      button.setAttribute('aria-pressed', 'true');
      other.setAttribute('aria-pressed', 'false');
      reverseOrder();
      updateActiveYear();
    });
  }

  if (sortAsc && sortDesc) {
    bindSortButton(sortAsc, sortDesc);
    bindSortButton(sortDesc, sortAsc);
  }
})();"#
}
