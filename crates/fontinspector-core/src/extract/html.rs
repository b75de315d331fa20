use std::collections::HashMap;

use reqwest::Url;

/// CSS-bearing material found in one HTML document.
#[derive(Debug, Default, Clone)]
pub struct HtmlScan {
    pub style_blocks: Vec<String>,
    pub style_attributes: Vec<String>,
    pub stylesheet_urls: Vec<Url>,
}

/// Walk the document's tags once, collecting `<style>` bodies, `style="…"`
/// attributes, and `<link rel="stylesheet">` references resolved against
/// `base`. Comments and `<script>` bodies are skipped; anything that does
/// not parse as a tag is ignored.
pub fn scan_html(html: &str, base: &Url) -> HtmlScan {
    let lower = html.to_ascii_lowercase();
    let len = html.len();
    let mut scan = HtmlScan::default();
    let mut i = 0usize;

    while i < len {
        let Some(open_rel) = lower[i..].find('<') else {
            break;
        };
        let open = i + open_rel;
        if lower[open..].starts_with("<!--") {
            i = lower[open + 4..]
                .find("-->")
                .map_or(len, |rel| open + 4 + rel + 3);
            continue;
        }
        let Some(close_rel) = lower[open..].find('>') else {
            break;
        };
        let close = open + close_rel;
        let tag = &html[open + 1..close];
        let tag_lower = &lower[open + 1..close];
        let name_end = tag_lower
            .find(|c: char| c.is_ascii_whitespace() || c == '/')
            .unwrap_or(tag_lower.len());
        let name = &tag_lower[..name_end];

        match name {
            "style" => {
                let body_start = close + 1;
                let body_end = lower[body_start..]
                    .find("</style")
                    .map_or(len, |rel| body_start + rel);
                let block = html[body_start..body_end].trim();
                if !block.is_empty() {
                    scan.style_blocks.push(block.to_string());
                }
                i = body_end;
                continue;
            }
            "script" => {
                i = lower[close + 1..]
                    .find("</script")
                    .map_or(len, |rel| close + 1 + rel);
                continue;
            }
            "link" => {
                let attributes = parse_attributes(tag);
                let is_stylesheet = attributes.get("rel").is_some_and(|rel| {
                    rel.to_ascii_lowercase()
                        .split_ascii_whitespace()
                        .any(|token| token == "stylesheet")
                });
                if is_stylesheet
                    && let Some(href) = attributes.get("href")
                    && let Ok(resolved) = base.join(href)
                    && matches!(resolved.scheme(), "http" | "https")
                    && !scan.stylesheet_urls.contains(&resolved)
                {
                    scan.stylesheet_urls.push(resolved);
                }
            }
            _ => {
                if !name.starts_with('/')
                    && let Some(style) = parse_attributes(tag).get("style")
                {
                    let style = style.trim();
                    if !style.is_empty() {
                        scan.style_attributes.push(style.to_string());
                    }
                }
            }
        }
        i = close + 1;
    }

    scan
}

/// Name/value pairs of one tag body, names lowercased, first occurrence
/// winning. Quoted and bare values are both accepted.
fn parse_attributes(tag: &str) -> HashMap<String, String> {
    let bytes = tag.as_bytes();
    let mut out = HashMap::new();
    let mut i = 0usize;

    while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'/'
        {
            i += 1;
        }
        let name = tag[name_start..i].to_ascii_lowercase();
        if name.is_empty() {
            i += 1;
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            let value = if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                let value = tag[value_start..i].to_string();
                if i < bytes.len() {
                    i += 1;
                }
                value
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                tag[value_start..i].to_string()
            };
            out.entry(name).or_insert(value);
        } else {
            out.entry(name).or_insert_with(String::new);
        }
    }

    out
}
