//! Primary source provider: the tiered streamer rankings post published
//! through a WordPress API. Finds the latest post carrying the rankings
//! marker in its title and segments the rendered HTML into ranked entries.
//!
//! The markup is simple enough that a tag scanner covers it; each entry is a
//! paragraph whose `<strong>` block holds a `player-tag` anchor and the
//! opponent token, with the rest of the paragraph as the blurb.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::http_client::http_client;
use crate::reconcile::{RankedPitcher, Tier};

/// Title fragment identifying the rankings post; also the in-content marker
/// after which entry collection starts.
pub const RANKINGS_MARKER: &str = "Starting Pitcher Streamer Rankings";

#[derive(Debug, Clone)]
pub struct RankingsPost {
    pub title: String,
    pub url: String,
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
struct WpPost {
    #[serde(default)]
    title: WpRendered,
    #[serde(default)]
    content: WpRendered,
    #[serde(default)]
    link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WpRendered {
    #[serde(default)]
    rendered: String,
}

pub fn fetch_latest_rankings(posts_endpoint: &str) -> Result<RankingsPost> {
    let client = http_client()?;
    let url = format!("{posts_endpoint}?per_page=20");
    let body = client
        .get(&url)
        .send()
        .with_context(|| format!("rankings posts request failed: {url}"))?
        .error_for_status()
        .context("rankings posts request rejected")?
        .text()
        .context("rankings posts body unreadable")?;
    find_rankings_post(&body)
}

/// Pick the latest rankings post out of the posts payload. No such post is
/// fatal: without the primary list the run cannot proceed.
pub fn find_rankings_post(posts_json: &str) -> Result<RankingsPost> {
    let posts: Vec<WpPost> = serde_json::from_str(posts_json).context("invalid posts json")?;

    for post in posts {
        let title = post.title.rendered;
        if !title.contains(RANKINGS_MARKER) {
            continue;
        }
        let html = post.content.rendered;
        if html.trim().is_empty() {
            return Err(anyhow!("rankings post '{title}' has no rendered content"));
        }
        return Ok(RankingsPost {
            title: decode_entities(&title),
            url: post.link,
            html,
        });
    }
    Err(anyhow!("no '{RANKINGS_MARKER}' post found"))
}

/// Segment the post body into ranked entries. Collection starts after the
/// marker paragraph; tier headings set the tier inherited by every following
/// entry until the next heading. Entries seen before any heading carry no
/// tier.
pub fn parse_rankings_html(html: &str) -> Vec<RankedPitcher> {
    let mut out = Vec::new();
    let mut collecting = false;
    let mut current_tier: Option<Tier> = None;
    let marker = RANKINGS_MARKER.to_lowercase();

    for para in paragraph_blocks(html) {
        let text = decode_entities(&strip_tags(para));
        if text.to_lowercase().contains(&marker) {
            collecting = true;
            continue;
        }
        if !collecting {
            continue;
        }
        if let Some(tier) = Tier::from_heading(&text) {
            current_tier = Some(tier);
        }

        let Some(strong) = first_block(para, "<strong", "</strong>") else {
            continue;
        };
        let Some(player) = anchor_text_with_class(strong, "player-tag") else {
            continue;
        };
        let strong_text = decode_entities(&strip_tags(strong));
        let opponent = parse_opponent(&strong_text);
        // Blurb is the paragraph text minus the bold player/opponent line.
        let blurb = text.replace(&strong_text, "");

        out.push(RankedPitcher {
            tier: current_tier,
            player: decode_entities(&player),
            opponent,
            blurb: crate::normalize::clean_text(&blurb),
        });
    }
    out
}

/// Opponent token after "vs. " or "@ ": a run of 2+ uppercase letters.
pub fn parse_opponent(text: &str) -> Option<String> {
    for pat in ["vs. ", "@ "] {
        let Some(idx) = text.find(pat) else {
            continue;
        };
        let rest = &text[idx + pat.len()..];
        let code: String = rest
            .chars()
            .take_while(|c| c.is_ascii_uppercase())
            .collect();
        if code.len() >= 2 {
            return Some(code);
        }
    }
    None
}

/// ASCII-only lowercase so byte offsets stay valid for the original text.
fn ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner content of every `<p>` block, in document order.
fn paragraph_blocks(html: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let lower = ascii_lower(html);
    let mut from = 0usize;
    while let Some(rel) = lower[from..].find("<p") {
        let start = from + rel;
        // Reject tags that merely start with "p" (<pre>, <path>).
        let after = lower.as_bytes().get(start + 2).copied();
        if !matches!(after, Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n')) {
            from = start + 2;
            continue;
        }
        let Some(open_end) = html[start..].find('>') else {
            break;
        };
        let body_start = start + open_end + 1;
        let Some(close_rel) = lower[body_start..].find("</p>") else {
            break;
        };
        out.push(&html[body_start..body_start + close_rel]);
        from = body_start + close_rel + 4;
    }
    out
}

/// First `open..close` block of `s`, inner content included, tags included in
/// the returned slice so attribute inspection still works.
fn first_block<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let lower = ascii_lower(s);
    let start = lower.find(open)?;
    let end = lower[start..].find(close)? + start + close.len();
    Some(&s[start..end])
}

/// Text of the first anchor whose class attribute contains `class`.
fn anchor_text_with_class(block: &str, class: &str) -> Option<String> {
    let lower = ascii_lower(block);
    let mut from = 0usize;
    while let Some(rel) = lower[from..].find("<a") {
        let start = from + rel;
        let open_end = block[start..].find('>')? + start;
        let attrs = &lower[start..open_end];
        let close = lower[open_end..].find("</a>")? + open_end;
        if attrs.contains(class) {
            let text = strip_tags(&block[open_end + 1..close]);
            return Some(text);
        }
        from = close + 4;
    }
    None
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the handful of entities WordPress rendering actually emits, plus
/// numeric references.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        let Some(end) = tail.find(';').filter(|&e| e <= 10) else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };
        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => entity
                .strip_prefix('#')
                .and_then(|n| {
                    if let Some(hex) = n.strip_prefix('x').or_else(|| n.strip_prefix('X')) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        n.parse::<u32>().ok()
                    }
                })
                .and_then(char::from_u32),
        };
        match decoded {
            Some(ch) => out.push(ch),
            None => out.push_str(&tail[..end + 1]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}
