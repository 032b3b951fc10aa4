//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{Arc, Cone, ConeColor, PathSegment};
use crate::shared::{ArcDescriptor, ConeDescriptor, RenderScene, SegmentDescriptor, TrackOptions};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let track = &state.track;
    let options = &state.options;

    let finish_prompt = state.pointer_world.and_then(|pointer| {
        let end = track.end_point();
        (!track.is_closed() && pointer.distance(end) < options.finish_prompt_radius).then_some(end)
    });

    RenderScene {
        opening_cones: cones(track.opening_cones(), options),
        committed: track
            .committed_segments()
            .iter()
            .map(|segment| segment_descriptor(segment, options))
            .collect(),
        pending: track
            .pending_segment()
            .map(|segment| segment_descriptor(segment, options)),
        template_cones: cones(track.template_cones(), options),
        template_arcs: track
            .template_arcs()
            .iter()
            .map(|arc| arc_descriptor(arc, centerline_color(arc, options)))
            .collect(),
        drawing_state: track.state(),
        finish_prompt,
    }
}

fn segment_descriptor(segment: &PathSegment, options: &TrackOptions) -> SegmentDescriptor {
    SegmentDescriptor {
        centerline: arc_descriptor(
            &segment.center_arc,
            centerline_color(&segment.center_arc, options),
        ),
        left_boundary: arc_descriptor(
            &segment.left_boundary.arc,
            cone_color(segment.left_boundary.color, options),
        ),
        right_boundary: arc_descriptor(
            &segment.right_boundary.arc,
            cone_color(segment.right_boundary.color, options),
        ),
        cones: cones(&segment.cones, options),
        valid: segment.is_valid(),
    }
}

fn arc_descriptor(arc: &Arc, color: [f32; 4]) -> ArcDescriptor {
    ArcDescriptor {
        center: arc.center,
        radius: arc.radius,
        start_angle: arc.start_angle,
        end_angle: arc.end_angle,
        direction: arc.direction,
        color,
    }
}

fn cones(cones: &[Cone], options: &TrackOptions) -> Vec<ConeDescriptor> {
    cones
        .iter()
        .map(|cone| ConeDescriptor {
            position: cone.display_position(),
            color: cone_color(cone.color, options),
            size: cone.size,
        })
        .collect()
}

fn centerline_color(arc: &Arc, options: &TrackOptions) -> [f32; 4] {
    if arc.valid {
        options.centerline_color_valid
    } else {
        options.centerline_color_invalid
    }
}

fn cone_color(color: ConeColor, options: &TrackOptions) -> [f32; 4] {
    match color {
        ConeColor::Blue => options.cone_color_blue,
        ConeColor::Yellow => options.cone_color_yellow,
        ConeColor::Orange => options.cone_color_orange,
    }
}
