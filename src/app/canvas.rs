//! Helper struct for drawing objects in world space onto the screen.
//! This maintains aspect ratio, so `visible_world` is clipped to fill the screen area.

use egui::{Align2, Color32, FontId, Pos2, Rangef, Rect, Stroke, Ui, Vec2, epaint::CircleShape};

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    range: Rect,
    scale: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(ui: &'a Ui, screen_extent: Rect, visible_x_axis: Rangef) -> Self {
        let y_span = visible_x_axis.span() / screen_extent.aspect_ratio();

        let range = Rect::from_x_y_ranges(visible_x_axis, Rangef::new(-y_span / 2.0, y_span / 2.0));

        let scale = screen_extent.width() / range.width();

        Canvas {
            ui,
            screen_extent,
            range,
            scale,
        }
    }

    fn world_to_screen_pos(&self, pos: &Pos2) -> Pos2 {
        self.screen_extent.min + self.scale * (*pos - self.range.min)
    }

    fn world_to_screen_x(&self, x: f32) -> f32 {
        self.screen_extent.min.x + self.scale * (x - self.range.min.x)
    }

    fn world_to_screen_y(&self, y: f32) -> f32 {
        self.screen_extent.min.y + self.scale * (y - self.range.min.y)
    }

    fn world_to_screen_scale(&self) -> f32 {
        self.scale
    }

    pub fn draw_filled_circle(&self, pos: Pos2, radius: f32, colour: Color32) {
        let screen_pos = self.world_to_screen_pos(&pos);
        let screen_radius = radius * self.world_to_screen_scale();
        self.ui
            .painter()
            .add(CircleShape::filled(screen_pos, screen_radius, colour));
    }

    pub fn draw_circle_outline(&self, pos: Pos2, radius: f32, stroke: Stroke) {
        let screen_pos = self.world_to_screen_pos(&pos);
        let screen_radius = radius * self.world_to_screen_scale();
        self.ui
            .painter()
            .circle_stroke(screen_pos, screen_radius, stroke);
    }

    pub fn draw_filled_rect(&self, rect: Rect, colour: Color32) {
        let screen_rect = Rect::from_two_pos(
            self.world_to_screen_pos(&rect.min),
            self.world_to_screen_pos(&rect.max),
        );
        self.ui
            .painter()
            .rect_filled(screen_rect, egui::CornerRadius::ZERO, colour);
    }

    pub fn draw_segment(&self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.ui.painter().line_segment(
            [self.world_to_screen_pos(&from), self.world_to_screen_pos(&to)],
            stroke,
        );
    }

    pub fn draw_arrow(&self, origin: Pos2, direction: Vec2, stroke: Stroke) {
        self.ui.painter().arrow(
            self.world_to_screen_pos(&origin),
            direction * self.world_to_screen_scale(),
            stroke,
        );
    }

    pub fn draw_text(&self, pos: Pos2, text: &str, size: f32, colour: Color32) {
        self.ui.painter().text(
            self.world_to_screen_pos(&pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            colour,
        );
    }

    pub fn draw_polyline(&self, points: &[Pos2], stroke: Stroke) {
        if points.len() < 2 {
            log::error!("Slice passed to draw_polyline has too few points");
            return;
        }
        let screen_points = points
            .iter()
            .map(|p| self.world_to_screen_pos(p))
            .collect();
        self.ui.painter().line(screen_points, stroke);
    }

    pub fn draw_grid_lines(&self) {
        const MAX_GRIDLINES: f32 = 20.0;
        let step = (self.range.x_range().span() / MAX_GRIDLINES).round().max(0.5);

        let mut y = step * (self.range.min.y / step).round();
        while y < self.range.max.y {
            self.ui.painter().hline(
                self.screen_extent.x_range(),
                self.world_to_screen_y(y),
                Stroke::new(1.0, Color32::from_rgb(15, 15, 15)),
            );
            y += step;
        }
        let mut x = step * (self.range.min.x / step).round();
        while x < self.range.max.x {
            self.ui.painter().vline(
                self.world_to_screen_x(x),
                self.screen_extent.y_range(),
                Stroke::new(1.0, Color32::from_rgb(15, 15, 15)),
            );
            x += step;
        }
    }

    pub fn draw_axes(&self) {
        self.ui.painter().vline(
            self.world_to_screen_x(0.0),
            self.screen_extent.y_range(),
            Stroke::new(2.0, Color32::from_rgb(20, 20, 20)),
        );
        self.ui.painter().hline(
            self.screen_extent.x_range(),
            self.world_to_screen_y(0.0),
            Stroke::new(2.0, Color32::from_rgb(20, 20, 20)),
        );
    }
}
