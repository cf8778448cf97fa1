use shapeclick_core::{
    CircleConfig, PointerButton, RectangleConfig, Scene, Shape, ShapeCollection,
    QuadrilateralConfig,
};
use shapeclick_geometry::{DrawCall, Point, RecordingSurface, ShapeColor};

fn overlapping_pair() -> ShapeCollection {
    // Circle box spans 50..150 x 150..250, rectangle box 20..120 x 20..220
    let mut shapes = ShapeCollection::new();
    shapes.add(Shape::rectangle(
        RectangleConfig::new(Point::new(70, 120), 100, 200).with_color(ShapeColor::Red),
    ));
    shapes.add(Shape::circle(
        CircleConfig::new(Point::new(100, 200), 50).with_color(ShapeColor::Blue),
    ));
    shapes
}

#[test]
fn primary_click_in_overlap_toggles_every_shape() {
    let mut shapes = overlapping_pair();
    assert_eq!(shapes.dispatch_pointer_event(100, 200, PointerButton::Primary), 2);
    assert!(shapes.iter().all(Shape::is_filled));

    assert_eq!(shapes.dispatch_pointer_event(100, 200, PointerButton::Primary), 2);
    assert!(shapes.iter().all(|s| !s.is_filled()));
}

#[test]
fn primary_click_outside_overlap_hits_one() {
    let mut shapes = overlapping_pair();
    assert_eq!(shapes.dispatch_pointer_event(30, 30, PointerButton::Primary), 1);
    assert!(shapes.get(0).unwrap().is_filled());
    assert!(!shapes.get(1).unwrap().is_filled());
}

#[test]
fn secondary_click_in_overlap_acts_on_every_shape() {
    let mut shapes = overlapping_pair();
    assert_eq!(shapes.dispatch_pointer_event(100, 200, PointerButton::Secondary), 2);

    let rect = shapes.get(0).unwrap();
    assert_eq!(rect.kind().as_rectangle().unwrap().center(), Point::new(80, 120));
    let bb = rect.bounding_box().unwrap();
    assert_eq!((bb.x(), bb.y(), bb.width(), bb.height()), (30, 20, 100, 200));

    let circle = shapes.get(1).unwrap();
    assert_eq!(circle.kind().as_circle().unwrap().center(), Point::new(100, 200));
    assert!(!circle.is_filled());
}

#[test]
fn click_on_box_edge_counts() {
    let mut shapes = overlapping_pair();
    // Right edge of the rectangle box, outside the circle box
    assert_eq!(shapes.dispatch_pointer_event(120, 30, PointerButton::Primary), 1);
    assert_eq!(shapes.dispatch_pointer_event(121, 30, PointerButton::Primary), 0);
}

#[test]
fn render_all_honours_flags_in_order() {
    let mut shapes = overlapping_pair();
    let mut surface = RecordingSurface::new();

    shapes.render_all(&mut surface);
    assert_eq!(
        surface.calls(),
        &[
            DrawCall::SetColor(ShapeColor::Red),
            DrawCall::DrawRect { x: 20, y: 20, width: 100, height: 200 },
            DrawCall::SetColor(ShapeColor::Blue),
            DrawCall::DrawEllipse { x: 50, y: 150, width: 100, height: 100 },
        ]
    );

    shapes.set_show_names(true);
    shapes.set_show_bounding_boxes(true);
    surface.clear();
    shapes.render_all(&mut surface);
    assert_eq!(
        surface.calls(),
        &[
            DrawCall::SetColor(ShapeColor::Red),
            DrawCall::DrawRect { x: 20, y: 20, width: 100, height: 200 },
            DrawCall::DrawText { text: "Rectangle".into(), at: Point::new(70, 120) },
            DrawCall::DrawDashedRect { x: 20, y: 20, width: 100, height: 200 },
            DrawCall::SetColor(ShapeColor::Blue),
            DrawCall::DrawEllipse { x: 50, y: 150, width: 100, height: 100 },
            DrawCall::DrawText { text: "Circle".into(), at: Point::new(100, 200) },
            DrawCall::DrawDashedRect { x: 50, y: 150, width: 100, height: 100 },
        ]
    );
}

#[test]
fn repaint_sees_state_from_preceding_click() {
    let mut shapes = overlapping_pair();
    shapes.dispatch_pointer_event(30, 30, PointerButton::Primary);
    let mut surface = RecordingSurface::new();
    shapes.render_all(&mut surface);
    assert_eq!(
        surface.calls()[1],
        DrawCall::FillRect { x: 20, y: 20, width: 100, height: 200 }
    );
}

#[test]
fn shape_without_box_is_skipped_for_outline_and_hits() {
    let mut shapes = ShapeCollection::new();
    shapes.add(Shape::quadrilateral(QuadrilateralConfig::new(Point::new(0, 0), Vec::new())));
    shapes.add(Shape::circle(CircleConfig::new(Point::new(0, 0), 5)));
    shapes.set_show_bounding_boxes(true);

    let mut surface = RecordingSurface::new();
    shapes.render_all(&mut surface);
    let outlines = surface
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::DrawDashedRect { .. }))
        .count();
    assert_eq!(outlines, 1);

    assert_eq!(shapes.dispatch_pointer_event(0, 0, PointerButton::Primary), 1);
    assert!(!shapes.get(0).unwrap().is_filled());
    assert!(shapes.get(1).unwrap().is_filled());
}

#[test]
fn demo_scene_labels_every_shape() {
    let shapes = Scene::demo().to_collection();
    let mut surface = RecordingSurface::new();
    shapes.render_all(&mut surface);
    assert_eq!(
        surface.texts(),
        vec![
            ("Rectangle", Point::new(70, 120)),
            ("Circle", Point::new(100, 200)),
            ("Square", Point::new(300, 300)),
            ("Quadrilateral", Point::new(500, 200)),
            ("Quadrilateral", Point::new(400, 120)),
        ]
    );
}
