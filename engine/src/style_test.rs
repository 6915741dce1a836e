#![allow(clippy::float_cmp)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults_match_controls() {
    let style = StyleState::default();
    assert_eq!(style.color.as_str(), "red");
    assert_eq!(style.stroke_width, 10.0);
    assert_eq!(style.opacity, 0.4);
    assert!(!style.eraser_enabled);
    assert_eq!(style.eraser_size, 10.0);
}

#[test]
fn defaults_sit_inside_ranges() {
    let style = StyleState::default();
    assert!((STROKE_WIDTH_RANGE.0..=STROKE_WIDTH_RANGE.1).contains(&style.stroke_width));
    assert!((OPACITY_RANGE.0..=OPACITY_RANGE.1).contains(&style.opacity));
    assert!((ERASER_SIZE_RANGE.0..=ERASER_SIZE_RANGE.1).contains(&style.eraser_size));
}

#[test]
fn apply_replaces_each_field() {
    let mut style = StyleState::default();
    style.apply(StyleAction::SetColor(Color::new("blue")));
    style.apply(StyleAction::SetStrokeWidth(22.0));
    style.apply(StyleAction::SetOpacity(0.1));
    style.apply(StyleAction::SetEraserSize(33.0));
    assert_eq!(style.color.as_str(), "blue");
    assert_eq!(style.stroke_width, 22.0);
    assert_eq!(style.opacity, 0.1);
    assert_eq!(style.eraser_size, 33.0);
}

#[test]
fn out_of_range_values_pass_through() {
    let mut style = StyleState::default();
    style.apply(StyleAction::SetStrokeWidth(100.0));
    style.apply(StyleAction::SetOpacity(0.9));
    assert_eq!(style.stroke_width, 100.0);
    assert_eq!(style.opacity, 0.9);
}

#[test]
fn toggle_eraser_flips_and_relabels() {
    let mut style = StyleState::default();
    assert_eq!(style.eraser_label(), "Enable Eraser");
    style.apply(StyleAction::ToggleEraser);
    assert!(style.eraser_enabled);
    assert_eq!(style.eraser_label(), "Disable Eraser");
    style.apply(StyleAction::ToggleEraser);
    assert!(!style.eraser_enabled);
}

#[test]
fn only_brush_fields_affect_brush() {
    assert!(StyleAction::SetColor(Color::default()).affects_brush());
    assert!(StyleAction::SetStrokeWidth(4.0).affects_brush());
    assert!(StyleAction::SetOpacity(0.2).affects_brush());
    assert!(!StyleAction::ToggleEraser.affects_brush());
    assert!(!StyleAction::SetEraserSize(12.0).affects_brush());
}

#[test]
fn brush_bundles_current_values() {
    let mut style = StyleState::default();
    style.apply(StyleAction::SetColor(Color::new("#00ff00")));
    style.apply(StyleAction::SetStrokeWidth(5.0));
    style.apply(StyleAction::SetOpacity(0.25));
    assert_eq!(
        style.brush(),
        BrushConfig {
            global_alpha: 0.25,
            stroke_style: Color::new("#00ff00"),
            line_width: 5.0,
        }
    );
}

#[test]
fn eraser_side_truncates_like_integer_parse() {
    let mut style = StyleState::default();
    style.apply(StyleAction::SetEraserSize(20.9));
    assert_eq!(style.eraser_side(), 20);
}

#[test]
fn parse_numeric_accepts_slider_text() {
    assert_eq!(parse_numeric("12"), Some(12.0));
    assert_eq!(parse_numeric(" 0.05 "), Some(0.05));
    assert_eq!(parse_numeric(""), None);
    assert_eq!(parse_numeric("wide"), None);
    assert_eq!(parse_numeric("NaN"), None);
}

#[test]
fn deserializes_partial_style_with_defaults() {
    let style: StyleState =
        serde_json::from_str(r#"{"color":"blue","eraserSize":25}"#).unwrap_or_default();
    assert_eq!(style.color.as_str(), "blue");
    assert_eq!(style.eraser_size, 25.0);
    assert_eq!(style.stroke_width, DEFAULT_STROKE_WIDTH);
    assert_eq!(style.opacity, DEFAULT_OPACITY);
}
