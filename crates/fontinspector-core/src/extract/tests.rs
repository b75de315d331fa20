use reqwest::Url;

use super::{FontScan, scan_html};

fn base() -> Url {
    Url::parse("https://example.com/blog/post").expect("base url")
}

#[test]
fn scan_html_collects_style_blocks_links_and_attributes() {
    let html = r#"<!doctype html>
<html>
<head>
  <!-- <style>p { font-family: CommentedOut; }</style> -->
  <link rel="stylesheet" href="/assets/app.css">
  <link rel="preload icon" href="/favicon.ico">
  <LINK REL="Stylesheet" HREF="https://fonts.example.net/inter.css">
  <style type="text/css">
    body { font-family: Inter, sans-serif; }
  </style>
  <script>var style = "font-family: NotReal";</script>
</head>
<body>
  <p style="font-family: 'Source Serif Pro', serif">hello</p>
  <p style="  ">empty</p>
</body>
</html>"#;

    let scan = scan_html(html, &base());
    assert_eq!(scan.style_blocks.len(), 1);
    assert!(scan.style_blocks[0].contains("Inter"));
    assert_eq!(
        scan.style_attributes,
        vec!["font-family: 'Source Serif Pro', serif".to_string()]
    );
    assert_eq!(
        scan.stylesheet_urls
            .iter()
            .map(Url::as_str)
            .collect::<Vec<_>>(),
        vec![
            "https://example.com/assets/app.css",
            "https://fonts.example.net/inter.css",
        ]
    );
}

#[test]
fn scan_html_deduplicates_stylesheet_urls() {
    let html = r#"
<link rel="stylesheet" href="/a.css">
<link rel="stylesheet" href="https://example.com/a.css">
"#;
    let scan = scan_html(html, &base());
    assert_eq!(scan.stylesheet_urls.len(), 1);
}

#[test]
fn scan_html_survives_truncated_markup() {
    let html = "<style>body { font-family: Inter";
    let scan = scan_html(html, &base());
    assert_eq!(scan.style_blocks.len(), 1);

    let scan = scan_html("<link rel=stylesheet href=/x.css", &base());
    assert!(scan.stylesheet_urls.is_empty());
}

#[test]
fn font_scan_counts_families_and_drops_generics() {
    let mut scan = FontScan::default();
    scan.scan_css("body { font-family: Inter, sans-serif; }");
    scan.scan_css("h1 { font-family: \"Inter\"; }");
    scan.scan_css("code { font-family: 'JetBrains Mono', monospace }");

    let (families, faces) = scan.finish();
    assert!(faces.is_empty());
    assert_eq!(families.len(), 2);
    assert_eq!(families[0].family, "Inter");
    assert_eq!(families[0].count, 2);
    assert_eq!(families[1].family, "JetBrains Mono");
    assert_eq!(families[1].count, 1);
}

#[test]
fn font_scan_parses_font_face_blocks() {
    let css = r#"
/* icon font */
@font-face {
  font-family: "Icons Round";
  src: url('/fonts/icons.woff2') format('woff2'), url(/fonts/icons.woff);
  font-weight: 400;
  font-style: normal;
}
body { font-family: "Icons Round"; }
"#;
    let mut scan = FontScan::default();
    scan.scan_css(css);

    let (families, faces) = scan.finish();
    assert_eq!(faces.len(), 1);
    assert_eq!(faces[0].family, "Icons Round");
    assert_eq!(
        faces[0].sources,
        vec!["/fonts/icons.woff2".to_string(), "/fonts/icons.woff".to_string()]
    );
    assert_eq!(faces[0].weight.as_deref(), Some("400"));
    assert_eq!(faces[0].style.as_deref(), Some("normal"));

    // The declaration inside @font-face defines the family; only the body
    // rule counts as usage.
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].family, "Icons Round");
    assert_eq!(families[0].count, 1);
}

#[test]
fn font_scan_ignores_custom_properties_and_comments() {
    let mut scan = FontScan::default();
    scan.scan_css(
        r#"
:root { --brand-font-family: Inter; }
/* font-family: Commented */
p { font-family: var(--brand) }
h2 { font-family: Roboto }
"#,
    );

    let (families, _) = scan.finish();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].family, "Roboto");
    assert_eq!(families[0].count, 1);
}

#[test]
fn font_scan_tolerates_malformed_css() {
    let mut scan = FontScan::default();
    scan.scan_css("@font-face { src: url('/broken.woff2'");
    scan.scan_css("p { font-family }");
    scan.scan_css("font-family:::;");
    let (families, faces) = scan.finish();
    assert!(families.is_empty());
    assert!(faces.is_empty());
}

#[test]
fn unterminated_font_face_block_swallows_the_tail() {
    let mut scan = FontScan::default();
    scan.scan_css("@font-face { font-family: Dangling; src: url(/d.woff2)");
    let (families, faces) = scan.finish();
    assert!(families.is_empty());
    assert_eq!(faces.len(), 1);
    assert_eq!(faces[0].family, "Dangling");
}
