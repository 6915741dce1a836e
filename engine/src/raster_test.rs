use pretty_assertions::assert_eq;

use super::*;

fn brush(color: &str, width: f64, alpha: f64) -> BrushConfig {
    BrushConfig {
        global_alpha: alpha,
        stroke_style: Color::new(color),
        line_width: width,
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn new_raster_is_transparent() {
    let raster = Raster::new(8, 4);
    assert_eq!(raster.size(), (8, 4));
    assert_eq!(raster.painted_pixels(), 0);
    assert_eq!(raster.pixel(7, 3), Some([0, 0, 0, 0]));
    assert_eq!(raster.pixel(8, 0), None);
}

#[test]
fn segment_composites_at_global_alpha() {
    let mut raster = Raster::new(40, 40);
    raster.apply_brush(&brush("blue", 10.0, 0.4));
    raster.stroke_segment(pt(10.0, 10.0), pt(20.0, 10.0));
    assert_eq!(raster.pixel(15, 10), Some([0, 0, 255, 102]));
    assert_eq!(raster.pixel(15, 5), Some([0, 0, 255, 102]));
    assert_eq!(raster.pixel(15, 4), Some([0, 0, 0, 0]));
}

#[test]
fn round_caps_extend_past_endpoints() {
    let mut raster = Raster::new(40, 40);
    raster.apply_brush(&brush("red", 10.0, 0.5));
    raster.stroke_segment(pt(10.0, 10.0), pt(20.0, 10.0));
    assert!(raster.pixel(23, 10).is_some_and(|p| p[3] > 0));
    assert_eq!(raster.pixel(23, 14), Some([0, 0, 0, 0]));
}

#[test]
fn overlapping_segments_accumulate_alpha() {
    let mut raster = Raster::new(40, 40);
    raster.apply_brush(&brush("red", 6.0, 0.4));
    raster.stroke_segment(pt(10.0, 10.0), pt(20.0, 10.0));
    raster.stroke_segment(pt(10.0, 10.0), pt(20.0, 10.0));
    assert_eq!(raster.pixel(15, 10), Some([255, 0, 0, 163]));
}

#[test]
fn later_brush_does_not_touch_earlier_pixels() {
    let mut raster = Raster::new(60, 20);
    raster.apply_brush(&brush("red", 4.0, 0.5));
    raster.stroke_segment(pt(5.0, 10.0), pt(15.0, 10.0));
    raster.apply_brush(&brush("blue", 4.0, 0.5));
    raster.stroke_segment(pt(40.0, 10.0), pt(50.0, 10.0));
    assert_eq!(raster.pixel(10, 10), Some([255, 0, 0, 128]));
    assert_eq!(raster.pixel(45, 10), Some([0, 0, 255, 128]));
}

#[test]
fn unresolvable_color_paints_black() {
    let mut raster = Raster::new(20, 20);
    raster.apply_brush(&brush("mystery", 4.0, 0.5));
    raster.stroke_segment(pt(5.0, 5.0), pt(10.0, 5.0));
    assert_eq!(raster.pixel(7, 5), Some([0, 0, 0, 128]));
}

#[test]
fn zero_width_strokes_nothing() {
    let mut raster = Raster::new(20, 20);
    raster.apply_brush(&brush("red", 0.0, 0.5));
    raster.stroke_segment(pt(5.0, 5.0), pt(10.0, 5.0));
    assert_eq!(raster.painted_pixels(), 0);
}

#[test]
fn clear_rect_zeroes_region_only() {
    let mut raster = Raster::new(100, 100);
    raster.apply_brush(&brush("red", 30.0, 0.5));
    raster.stroke_segment(pt(30.0, 50.0), pt(70.0, 50.0));
    raster.clear_rect(Rect::new(40.0, 40.0, 20.0, 20.0));
    for y in 40..60 {
        for x in 40..60 {
            assert_eq!(raster.pixel(x, y), Some([0, 0, 0, 0]), "pixel {x},{y}");
        }
    }
    assert!(raster.pixel(39, 50).is_some_and(|p| p[3] > 0));
    assert!(raster.pixel(60, 50).is_some_and(|p| p[3] > 0));
}

#[test]
fn clear_rect_is_clipped_to_bounds() {
    let mut raster = Raster::new(10, 10);
    raster.apply_brush(&brush("red", 40.0, 0.5));
    raster.stroke_segment(pt(5.0, 5.0), pt(5.0, 5.0));
    assert_eq!(raster.painted_pixels(), 100);
    raster.clear_rect(Rect::new(-5.0, -5.0, 10.0, 10.0));
    assert_eq!(raster.painted_pixels(), 75);
}

#[test]
fn clear_rect_with_negative_extent_clears_backwards() {
    let mut raster = Raster::new(10, 10);
    raster.apply_brush(&brush("red", 40.0, 0.5));
    raster.stroke_segment(pt(5.0, 5.0), pt(5.0, 5.0));
    raster.clear_rect(Rect::new(10.0, 10.0, -5.0, -5.0));
    assert_eq!(raster.painted_pixels(), 75);
    assert_eq!(raster.pixel(9, 9), Some([0, 0, 0, 0]));
}

#[test]
fn path_flag_tracks_begin_and_close() {
    let mut raster = Raster::new(4, 4);
    assert!(!raster.path_open());
    raster.begin_path(pt(1.0, 1.0));
    assert!(raster.path_open());
    raster.close_path();
    assert!(!raster.path_open());
}
