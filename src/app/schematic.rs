//! Draws the machine cross-section, viewed along the rotor axis: pole
//! pieces, gap field, rotating coil, split-ring commutator, and brushes.

use super::canvas::Canvas;
use super::simulation::{FieldModel, POLE_X, Simulation};

use egui::{Color32, Pos2, Rect, Stroke, Vec2, pos2, vec2};

/// Half of the visible x axis; the canvas derives the y span from it.
pub const WORLD_HALF_WIDTH: f32 = 2.2;

const POLE_WIDTH: f32 = 0.55;
const POLE_HALF_HEIGHT: f32 = 0.75;
const COIL_HALF_LENGTH: f32 = 0.85;
const RING_RADIUS: f32 = 0.22;
const RING_GAP: f32 = 0.25;
const BRUSH_SIZE: f32 = 0.09;

const NORTH_COLOUR: Color32 = Color32::from_rgb(200, 40, 40);
const SOUTH_COLOUR: Color32 = Color32::from_rgb(40, 80, 220);
const FIELD_COLOUR: Color32 = Color32::from_rgb(90, 90, 110);
const COIL_COLOUR: Color32 = Color32::from_rgb(255, 175, 0);
const RING_COLOUR: Color32 = Color32::from_rgb(190, 190, 190);
const BRUSH_COLOUR: Color32 = Color32::from_rgb(60, 60, 60);

pub fn draw(canvas: &Canvas, simulation: &Simulation) {
    draw_poles(canvas);
    draw_field(canvas, simulation);
    draw_coil(canvas, simulation);
    draw_commutator(canvas, simulation);
}

fn draw_poles(canvas: &Canvas) {
    let north = Rect::from_two_pos(
        pos2(-POLE_X - POLE_WIDTH, -POLE_HALF_HEIGHT),
        pos2(-POLE_X, POLE_HALF_HEIGHT),
    );
    let south = Rect::from_two_pos(
        pos2(POLE_X, -POLE_HALF_HEIGHT),
        pos2(POLE_X + POLE_WIDTH, POLE_HALF_HEIGHT),
    );
    canvas.draw_filled_rect(north, NORTH_COLOUR);
    canvas.draw_filled_rect(south, SOUTH_COLOUR);
    canvas.draw_text(north.center(), "N", 22.0, Color32::WHITE);
    canvas.draw_text(south.center(), "S", 22.0, Color32::WHITE);
}

fn draw_field(canvas: &Canvas, simulation: &Simulation) {
    let stroke = Stroke::new(1.0, FIELD_COLOUR);
    match simulation.field_model {
        FieldModel::Cosine => {
            // uniform field: straight arrows across the gap
            const ROWS: i32 = 5;
            for row in -(ROWS / 2)..=(ROWS / 2) {
                let y = row as f32 * POLE_HALF_HEIGHT / (ROWS / 2) as f32 * 0.8;
                canvas.draw_arrow(
                    pos2(-POLE_X + 0.05, y),
                    vec2(2.0 * POLE_X - 0.1, 0.0),
                    stroke,
                );
            }
        }
        FieldModel::DipoleGrid => {
            const ARROW_LENGTH: f32 = 0.12;
            for ((x, y), (u, v)) in simulation.grid().arrows() {
                canvas.draw_arrow(pos2(x, y), vec2(u, v) * ARROW_LENGTH, stroke);
            }
        }
    }
}

fn draw_coil(canvas: &Canvas, simulation: &Simulation) {
    // the coil face is seen edge-on; at zero angle the flux through the
    // face is maximal, so the bar stands perpendicular to the field
    let angle = simulation.angle();
    let end = pos2(
        COIL_HALF_LENGTH * angle.sin(),
        COIL_HALF_LENGTH * angle.cos(),
    );
    let opposite = pos2(-end.x, -end.y);

    canvas.draw_segment(opposite, end, Stroke::new(4.0, COIL_COLOUR));

    // end conductors, coloured by the polarity of the induced emf
    let emf = simulation.emf_samples().last().copied().unwrap_or(0.0);
    let (near, far) = if emf >= 0.0 {
        (NORTH_COLOUR, SOUTH_COLOUR)
    } else {
        (SOUTH_COLOUR, NORTH_COLOUR)
    };
    canvas.draw_filled_circle(end, 0.07, near);
    canvas.draw_filled_circle(opposite, 0.07, far);
}

fn draw_commutator(canvas: &Canvas, simulation: &Simulation) {
    let angle = simulation.angle();
    let stroke = Stroke::new(3.0, RING_COLOUR);

    // rotor shaft
    canvas.draw_circle_outline(pos2(0.0, 0.0), 0.05, Stroke::new(2.0, RING_COLOUR));

    // split ring: two half arcs rotating with the coil, separated by the
    // insulating gaps that produce the polarity flip each half turn
    draw_arc(canvas, angle + RING_GAP, angle + std::f32::consts::PI - RING_GAP, stroke);
    draw_arc(
        canvas,
        angle + std::f32::consts::PI + RING_GAP,
        angle + 2.0 * std::f32::consts::PI - RING_GAP,
        stroke,
    );

    // stationary brushes riding on the ring
    let brush = Vec2::splat(BRUSH_SIZE);
    for side in [-1.0, 1.0] {
        let centre = pos2(side * (RING_RADIUS + BRUSH_SIZE), 0.0);
        canvas.draw_filled_rect(Rect::from_center_size(centre, brush), BRUSH_COLOUR);
        canvas.draw_segment(
            pos2(side * (RING_RADIUS + 1.5 * BRUSH_SIZE), 0.0),
            pos2(side * (RING_RADIUS + 4.0 * BRUSH_SIZE), 0.0),
            Stroke::new(2.0, BRUSH_COLOUR),
        );
    }
}

fn draw_arc(canvas: &Canvas, from: f32, to: f32, stroke: Stroke) {
    const ARC_POINTS: usize = 16;
    let mut points = Vec::with_capacity(ARC_POINTS);
    for i in 0..ARC_POINTS {
        let a = from + (to - from) * i as f32 / (ARC_POINTS - 1) as f32;
        points.push(Pos2::new(RING_RADIUS * a.sin(), RING_RADIUS * a.cos()));
    }
    canvas.draw_polyline(&points, stroke);
}
