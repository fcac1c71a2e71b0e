// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sitesearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SITESEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops all styling when stdout is not a TTY, so piping the
//! output into `grep` gives plain text.
//!
//! # Theme detection order
//!
//! 1. `SITESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use sitesearch::{Catalog, Match, SearchItem};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SITESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score: exact-title territory is bright, fragment-only is dim.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.2}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 25.0 {
        BRIGHT_GREEN()
    } else if score >= 10.0 {
        GREEN()
    } else if score >= 5.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Url with the `#fragment` part highlighted.
pub fn url_label(url: &str) -> String {
    match url.split_once('#') {
        Some((path, fragment)) if use_colors() => {
            format!("{}{}{}#{}{}", BLUE(), path, MAGENTA(), fragment, RESET)
        }
        _ => themed(BLUE, &[], url),
    }
}

/// `[category]`, or nothing for uncategorized items.
pub fn category_badge(category: Option<&str>) -> String {
    match category {
        Some(category) => themed(YELLOW, &[], &format!("[{}]", category)),
        None => String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

fn item_rows(rank: usize, item: &SearchItem, score: Option<f64>) {
    let lead = match score {
        Some(score) => format!(" {:>2}. {} ", rank, score_value(score)),
        None => format!(" {:>2}. ", rank),
    };
    let title = themed(BRIGHT_GREEN, &[BOLD], &truncate(&item.title, 48));
    row(&format!(
        "{}{} {}",
        lead,
        title,
        category_badge(item.category.as_deref())
    ));
    row(&format!("     {}", url_label(&truncate(&item.url, 72))));
}

/// Ranked results, with scores when `show_scores` is set.
pub fn print_matches(query: &str, matches: &[Match<'_>], total: usize, show_scores: bool) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if matches.is_empty() {
        row(&themed(GRAY, &[DIM], " no matches"));
    }
    for (i, m) in matches.iter().enumerate() {
        item_rows(i + 1, m.item, show_scores.then_some(m.score));
    }
    section_mid("TOTAL");
    row(&format!(
        " showing {} of {} matches",
        matches.len(),
        total
    ));
    section_bot();
}

/// Plain list of items (related content).
pub fn print_items(label: &str, items: &[SearchItem]) {
    section_top(label);
    if items.is_empty() {
        row(&themed(GRAY, &[DIM], " nothing found"));
    }
    for (i, item) in items.iter().enumerate() {
        item_rows(i + 1, item, None);
    }
    section_bot();
}

/// Keyword leaderboard.
pub fn print_keywords(keywords: &[String]) {
    section_top("POPULAR KEYWORDS");
    if keywords.is_empty() {
        row(&themed(GRAY, &[DIM], " catalog has no keywords"));
    }
    for (i, keyword) in keywords.iter().enumerate() {
        row(&format!(" {:>2}. {}", i + 1, themed(CYAN, &[], keyword)));
    }
    section_bot();
}

/// Catalog summary for `inspect`.
pub fn print_catalog_summary(path: &str, catalog: &Catalog) {
    let fragments = catalog.items().filter(|item| item.has_fragment()).count();
    let keywords: usize = catalog.items().map(|item| item.keywords.len()).sum();
    let uncategorized = catalog.items().filter(|item| item.category.is_none()).count();

    section_top("CATALOG");
    row(&format!(" file         {}", truncate(path, 60)));
    row(&format!(" fingerprint  {:08x}", catalog.fingerprint()));
    row(&format!(" items        {}", catalog.len()));
    row(&format!(" anchors      {}", fragments));
    row(&format!(" keywords     {}", keywords));
    section_mid("CATEGORIES");
    for category in catalog.categories() {
        let count = catalog
            .items()
            .filter(|item| item.category.as_deref() == Some(category))
            .count();
        row(&format!(" {:<24} {:>4}", category, count));
    }
    if uncategorized > 0 {
        row(&themed(
            GRAY,
            &[DIM],
            &format!(" {:<24} {:>4}", "(none)", uncategorized),
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
