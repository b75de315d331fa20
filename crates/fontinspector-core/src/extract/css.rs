use std::collections::BTreeMap;

use crate::models::{FontFaceRule, FontFamilyUsage};

/// Generic CSS families carry no information about the fonts a page actually
/// ships, so the usage list drops them.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

#[derive(Debug, Default)]
struct FamilyCount {
    display: String,
    count: u32,
}

/// Accumulates font evidence across every CSS source of one page: style
/// blocks, style attributes, and fetched stylesheets.
#[derive(Debug, Default)]
pub struct FontScan {
    families: BTreeMap<String, FamilyCount>,
    faces: Vec<FontFaceRule>,
}

impl FontScan {
    pub fn scan_css(&mut self, css: &str) {
        let css = strip_css_comments(css);
        let lower = css.to_ascii_lowercase();

        let face_ranges = self.collect_font_faces(&css, &lower);
        self.collect_family_usages(&css, &lower, &face_ranges);
    }

    pub fn finish(self) -> (Vec<FontFamilyUsage>, Vec<FontFaceRule>) {
        let mut families = self
            .families
            .into_values()
            .map(|entry| FontFamilyUsage {
                family: entry.display,
                count: entry.count,
            })
            .collect::<Vec<_>>();
        families.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.family.to_ascii_lowercase().cmp(&b.family.to_ascii_lowercase()))
        });
        (families, self.faces)
    }

    fn record_family(&mut self, raw: &str) {
        let Some(family) = unquote_family(raw) else {
            return;
        };
        let key = family.to_ascii_lowercase();
        if GENERIC_FAMILIES.contains(&key.as_str()) {
            return;
        }
        // CSS-wide keywords and var() references name no concrete font.
        if matches!(key.as_str(), "inherit" | "initial" | "unset" | "revert") {
            return;
        }
        if key.starts_with("var(") || key.contains(':') {
            return;
        }
        let entry = self.families.entry(key).or_insert_with(|| FamilyCount {
            display: family,
            count: 0,
        });
        entry.count += 1;
    }

    fn collect_font_faces(&mut self, css: &str, lower: &str) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        let mut pos = 0usize;
        while let Some(found) = lower[pos..].find("@font-face") {
            let start = pos + found;
            let Some(open_rel) = lower[start..].find('{') else {
                break;
            };
            let open = start + open_rel;
            let Some(close_rel) = lower[open..].find('}') else {
                // Unterminated block: consume the rest so its declarations
                // are not misread as usage.
                if let Some(rule) = parse_font_face(&css[open + 1..]) {
                    self.faces.push(rule);
                }
                ranges.push((start, lower.len()));
                break;
            };
            let close = open + close_rel;
            if let Some(rule) = parse_font_face(&css[open + 1..close]) {
                self.faces.push(rule);
            }
            ranges.push((start, close + 1));
            pos = close + 1;
        }
        ranges
    }

    fn collect_family_usages(&mut self, css: &str, lower: &str, face_ranges: &[(usize, usize)]) {
        const NEEDLE: &str = "font-family";

        let mut pos = 0usize;
        while let Some(found) = lower[pos..].find(NEEDLE) {
            let at = pos + found;
            pos = at + NEEDLE.len();

            if face_ranges
                .iter()
                .any(|(start, end)| at >= *start && at < *end)
            {
                continue;
            }
            // Reject identifier tails like `-font-family` custom properties.
            if at > 0 {
                let before = lower.as_bytes()[at - 1];
                if before.is_ascii_alphanumeric() || before == b'-' || before == b'_' {
                    continue;
                }
            }

            let after = &lower[at + NEEDLE.len()..];
            let trimmed = after.trim_start();
            if !trimmed.starts_with(':') {
                continue;
            }
            let value_start = at + NEEDLE.len() + (after.len() - trimmed.len()) + 1;
            let value_end = lower[value_start..]
                .find(|c: char| matches!(c, ';' | '}' | '{'))
                .map_or(lower.len(), |rel| value_start + rel);
            for part in css[value_start..value_end].split(',') {
                self.record_family(part);
            }
            pos = value_end;
        }
    }
}

fn parse_font_face(body: &str) -> Option<FontFaceRule> {
    let mut family = None;
    let mut sources = Vec::new();
    let mut weight = None;
    let mut style = None;

    for declaration in body.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match name.trim().to_ascii_lowercase().as_str() {
            "font-family" => family = unquote_family(value.split(',').next().unwrap_or(value)),
            "src" => sources.extend(extract_url_sources(value)),
            "font-weight" => weight = Some(value.to_string()),
            "font-style" => style = Some(value.to_string()),
            _ => {}
        }
    }

    family.map(|family| FontFaceRule {
        family,
        sources,
        weight,
        style,
    })
}

fn extract_url_sources(value: &str) -> Vec<String> {
    let lower = value.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(found) = lower[pos..].find("url(") {
        let start = pos + found + 4;
        let Some(close_rel) = lower[start..].find(')') else {
            break;
        };
        let end = start + close_rel;
        if let Some(source) = unquote_family(&value[start..end]) {
            out.push(source);
        }
        pos = end + 1;
    }
    out
}

fn unquote_family(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = if (trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2)
        || (trimmed.starts_with('\'') && trimmed.ends_with('\'') && trimmed.len() >= 2)
    {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    };
    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}

fn strip_css_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        out.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end_rel) => rest = &rest[start + 2 + end_rel + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
