//! The two-view vessel drawing.

use vessel_ir::Dimensions;
use vessel_kernel_drafting::{
    DraftEntity, Drawing, Layer, Point2D, ProfileProjector, ProjectorOptions,
};

use crate::geometry::{side_profile, OuterRadii};
use crate::settings::DrawingSettings;

/// Left edge of the dimension annotations.
const ANNOTATION_X: f64 = -95.0;

/// Height above the rim of the first annotation line.
const ANNOTATION_RISE: f64 = 14.0;

/// Vertical spacing between annotation lines.
const ANNOTATION_SPACING: f64 = 5.0;

/// Side view, top view and annotations for `d`.
///
/// Top-view circles, outermost first: head rim, neck, insert outer, insert
/// inner.
pub fn vessel_drawing(d: &Dimensions, settings: &DrawingSettings) -> Drawing {
    let projector = ProfileProjector::new(ProjectorOptions {
        centerline_below: settings.centerline_below,
        centerline_above: settings.centerline_above,
    });
    let r = OuterRadii::from_dimensions(d);
    let top = d.overall_height_mm;

    let mut drawing = Drawing::new();
    drawing.extend(projector.side_view(&side_profile(d)));

    let anchor = Point2D::new(
        settings.top_view_anchor_x,
        top * settings.top_view_anchor_height_ratio,
    );
    drawing.extend(projector.top_view(anchor, &[r.head, r.neck, r.insert_outer, r.insert_inner]));

    let labels = [
        format!("Overall Height: {:.1} mm", top),
        format!("Body Max Dia: {:.1} mm", d.body_max_diameter_mm),
        format!("Head Top Dia: {:.1} mm", d.head_top_diameter_mm),
    ];
    drawing.extend(projector.text_block(
        Point2D::new(ANNOTATION_X, top + ANNOTATION_RISE),
        &labels,
        settings.text_height,
        ANNOTATION_SPACING,
    ));

    drawing.push(DraftEntity::Text {
        position: Point2D::new(anchor.x - 50.0, anchor.y - r.head - 8.0),
        height: settings.text_height,
        text: "Top View".to_string(),
        layer: Layer::Annotation,
    });

    drawing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_counts() {
        let drawing = vessel_drawing(&Dimensions::default(), &DrawingSettings::default());
        assert_eq!(drawing.count_on(Layer::Side), 5 + 5 + 2);
        assert_eq!(drawing.count_on(Layer::Center), 1);
        assert_eq!(drawing.count_on(Layer::Top), 4);
        assert_eq!(drawing.count_on(Layer::Annotation), 4);
        assert_eq!(drawing.len(), 22);
    }

    #[test]
    fn test_annotations() {
        let drawing = vessel_drawing(&Dimensions::default(), &DrawingSettings::default());
        let texts: Vec<_> = drawing
            .entities()
            .iter()
            .filter_map(|e| match e {
                DraftEntity::Text { position, text, .. } => Some((*position, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(texts[0], (Point2D::new(-95.0, 187.0), "Overall Height: 173.0 mm"));
        assert_eq!(texts[1], (Point2D::new(-95.0, 182.0), "Body Max Dia: 116.0 mm"));
        assert_eq!(texts[2], (Point2D::new(-95.0, 177.0), "Head Top Dia: 150.0 mm"));
        assert_eq!(texts[3].1, "Top View");
        assert_eq!(texts[3].0.x, 230.0);
    }

    #[test]
    fn test_centerline_follows_settings() {
        let settings = DrawingSettings {
            centerline_below: 3.0,
            centerline_above: 20.0,
            ..DrawingSettings::default()
        };
        let drawing = vessel_drawing(&Dimensions::default(), &settings);
        let center: Vec<_> = drawing
            .entities()
            .iter()
            .filter(|e| e.layer() == Layer::Center)
            .collect();
        assert_eq!(
            center,
            [&DraftEntity::Line {
                start: Point2D::new(0.0, -3.0),
                end: Point2D::new(0.0, 193.0),
                layer: Layer::Center,
            }]
        );
    }

    #[test]
    fn test_top_view_anchor() {
        let drawing = vessel_drawing(&Dimensions::default(), &DrawingSettings::default());
        let circles: Vec<_> = drawing
            .entities()
            .iter()
            .filter_map(|e| match e {
                DraftEntity::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 4);
        assert!(circles.iter().all(|(c, _)| c.x == 280.0 && (c.y - 103.8).abs() < 1e-9));
        let radii: Vec<_> = circles.iter().map(|(_, r)| *r).collect();
        assert_eq!(radii, [75.0, 42.0, 28.0, 18.0]);
    }
}
