//! End-to-end tests for converting vector-drawable XML into SVG

use pretty_assertions::assert_eq;

use vd2svg::{parse, vector_to_svg, ConvertError};

const HEADER: &str = r#"<vector xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:aapt="http://schemas.android.com/aapt""#;

fn vector(viewport: &str, body: &str) -> String {
    format!("{}\n    {}>\n{}\n</vector>", HEADER, viewport, body)
}

#[test]
fn test_minimal_document_exact_output() {
    let source = vector(
        r#"android:viewportWidth="24" android:viewportHeight="24""#,
        r##"<path android:pathData="M0 0 L24 24" android:fillColor="#FF0000"/>"##,
    );

    let svg = vector_to_svg(&source).expect("Should convert");
    assert_eq!(
        svg,
        [
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24.0" height="24.0" viewBox="0 0 24.0 24.0">"#,
            r##"  <path d="M0 0 L24 24" fill="#FF0000" />"##,
            "</svg>",
        ]
        .join("\n")
    );
}

#[test]
fn test_channel_logo_snapshot() {
    let source = vector(
        r#"android:width="64dp" android:height="32dp"
    android:viewportWidth="128" android:viewportHeight="64.5""#,
        r##"  <group android:name="frame">
    <clip-path android:pathData="M0 0h128v64H0z"/>
    <path android:pathData="M1 1h10" android:fillColor="#FF1E2C4B"/>
  </group>
  <group android:name="wordmark">
    <group>
      <path android:pathData="M10 10h20v20h-20z" android:fillType="evenOdd">
        <aapt:attr name="android:fillColor">
          <gradient android:startX="0" android:startY="0" android:endX="20" android:endY="20" android:type="linear">
            <item android:offset="0" android:color="#CC00A0E0"/>
            <item android:offset="1" android:color="#FF0060A0"/>
          </gradient>
        </aapt:attr>
      </path>
    </group>
    <path android:pathData="M40 10h20" android:strokeColor="#FFFFFF" android:strokeWidth="1.5" android:strokeAlpha="0.8"/>
    <path android:name="spacer"/>
  </group>"##,
    );

    let svg = vector_to_svg(&source).expect("Should convert");
    insta::assert_snapshot!(svg, @r###"
    <?xml version="1.0" encoding="utf-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" width="128.0" height="64.5" viewBox="0 0 128.0 64.5">
      <path d="M0 0h128v64H0z" fill="#1E2C4B" fill-opacity="1.000" />
      <path d="M10 10h20v20h-20z" fill="#00A0E0" fill-opacity="0.800" fill-rule="evenOdd" />
      <path d="M40 10h20" fill="none" stroke="#FFFFFF" stroke-opacity="0.8" stroke-width="1.5" />
    </svg>
    "###);
}

#[test]
fn test_clip_pairs_use_clip_geometry() {
    let source = vector(
        r#"android:viewportWidth="10" android:viewportHeight="10""#,
        r##"<group>
    <clip-path android:pathData="CLIP_A"/>
    <clip-path android:pathData="CLIP_B"/>
    <path android:pathData="PATH_A" android:fillColor="#111111"/>
    <path android:pathData="PATH_B" android:fillColor="#222222"/>
  </group>"##,
    );

    let svg = vector_to_svg(&source).unwrap();
    assert!(svg.contains(r##"<path d="CLIP_A" fill="#111111" />"##));
    assert!(svg.contains(r##"<path d="CLIP_B" fill="#222222" />"##));
    assert!(!svg.contains("PATH_A"));
    assert!(!svg.contains("PATH_B"));
}

#[test]
fn test_surplus_clip_paths_truncated() {
    let source = vector(
        r#"android:viewportWidth="10" android:viewportHeight="10""#,
        r#"<group>
    <clip-path android:pathData="C1"/>
    <clip-path android:pathData="C2"/>
    <clip-path android:pathData="C3"/>
    <path android:pathData="P1"/>
  </group>"#,
    );

    let svg = vector_to_svg(&source).unwrap();
    assert_eq!(svg.matches("<path ").count(), 1);
    assert!(svg.contains(r#"<path d="C1" fill="none" />"#));
}

#[test]
fn test_gradient_start_color_beats_items() {
    let source = vector(
        r#"android:viewportWidth="10" android:viewportHeight="10""#,
        r##"<path android:pathData="M0 0h10">
    <aapt:attr name="android:fillColor">
      <gradient android:startColor="#FF00FF" android:endColor="#00FF00">
        <item android:offset="0" android:color="#0000FF"/>
      </gradient>
    </aapt:attr>
  </path>"##,
    );

    let svg = vector_to_svg(&source).unwrap();
    assert!(svg.contains(r##"<path d="M0 0h10" fill="#FF00FF" />"##));
}

#[test]
fn test_absent_fill_renders_none() {
    let source = vector(
        r#"android:viewportWidth="10" android:viewportHeight="10""#,
        r#"<path android:pathData="M0 0h10" android:strokeWidth="2"/>"#,
    );

    let svg = vector_to_svg(&source).unwrap();
    assert!(svg.contains(r#"<path d="M0 0h10" fill="none" stroke-width="2" />"#));
}

#[test]
fn test_deterministic_output() {
    let source = vector(
        r#"android:viewportWidth="10" android:viewportHeight="10""#,
        r##"<path android:pathData="M0 0" android:fillColor="#80FF0000" android:strokeColor="blue"/>"##,
    );

    let first = vector_to_svg(&source).unwrap();
    let second = vector_to_svg(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_viewport_is_fatal() {
    let source = vector(
        r#"android:viewportWidth="24""#,
        r#"<path android:pathData="M0 0"/>"#,
    );

    let err = vector_to_svg(&source).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MissingViewport {
            attribute: "viewportHeight",
            ..
        }
    ));

    let report = err.format(&source, "channel_logo_zdf.xml");
    assert!(report.contains("channel_logo_zdf.xml"));
}

#[test]
fn test_malformed_source_is_fatal() {
    let err = vector_to_svg("<vector><group></vector>").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedSource { .. }));
}

#[test]
fn test_parse_then_convert_matches_direct_conversion() {
    let source = vector(
        r#"android:viewportWidth="32" android:viewportHeight="32""#,
        r##"<path android:pathData="M0 0h32" android:fillColor="#123456"/>"##,
    );

    let root = parse(&source).unwrap();
    let via_tree = vd2svg::document_to_svg(&root, &vd2svg::ConvertConfig::default()).unwrap();
    assert_eq!(via_tree, vector_to_svg(&source).unwrap());
}
