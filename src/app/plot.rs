//! Strip charts for the recorded sample series

use egui::{Align2, Color32, FontId, Pos2, Rangef, Rect, Stroke, Ui};
use strum_macros::EnumIter;

/*
== Recorded series shown in the plot stack ====================================
*/

#[derive(Debug, PartialEq, Clone, Copy, EnumIter)]
pub enum Trace {
    Flux,     // N B A cos(theta)
    Emf,      // backward-difference Faraday estimate
    DcOutput, // rectified emf behind the commutator
}

impl Trace {
    pub fn properties(&self) -> TraceProperties {
        match self {
            Trace::Flux => TraceProperties {
                name: "Flux Φ (Wb)",
                colour: (20, 100, 255),
            },
            Trace::Emf => TraceProperties {
                name: "EMF ε (V)",
                colour: (255, 175, 0),
            },
            Trace::DcOutput => TraceProperties {
                name: "DC output |ε| (V)",
                colour: (180, 20, 180),
            },
        }
    }
}

pub struct TraceProperties {
    pub name: &'static str,
    pub colour: (u8, u8, u8),
}

/// One chart in the stack. Unlike the schematic canvas this scales x and y
/// independently, with y growing upwards.
pub struct PlotStrip<'a> {
    ui: &'a Ui,
    rect: Rect,
    t_range: Rangef,
    y_range: Rangef,
}

impl<'a> PlotStrip<'a> {
    pub fn new(ui: &'a Ui, rect: Rect, t_range: Rangef, y_range: Rangef) -> Self {
        PlotStrip {
            ui,
            rect,
            t_range,
            y_range,
        }
    }

    fn to_screen(&self, t: f32, value: f32) -> Pos2 {
        let x = self.rect.left()
            + (t - self.t_range.min) / self.t_range.span() * self.rect.width();
        let y = self.rect.bottom()
            - (value - self.y_range.min) / self.y_range.span() * self.rect.height();
        Pos2::new(x, y)
    }

    pub fn draw_frame(&self, label: &str) {
        self.ui.painter().rect_stroke(
            self.rect,
            egui::CornerRadius::ZERO,
            Stroke::new(1.0, Color32::from_rgb(60, 60, 60)),
            egui::StrokeKind::Inside,
        );
        if self.y_range.contains(0.0) {
            let zero = self.to_screen(self.t_range.min, 0.0).y;
            self.ui.painter().hline(
                self.rect.x_range(),
                zero,
                Stroke::new(1.0, Color32::from_rgb(45, 45, 45)),
            );
        }
        self.ui.painter().text(
            self.rect.left_top() + egui::vec2(6.0, 4.0),
            Align2::LEFT_TOP,
            label,
            FontId::proportional(13.0),
            Color32::from_rgb(160, 160, 160),
        );
    }

    pub fn draw_series(&self, times: &[f32], values: &[f32], width: f32, colour: Color32) {
        if (times.len() < 2) || (times.len() != values.len()) {
            if times.len() != values.len() {
                log::error!("Slices passed to draw_series have mismatched sizes");
            }
            return;
        }
        let screen_points = times
            .iter()
            .zip(values)
            .map(|(t, v)| self.to_screen(*t, *v))
            .collect();
        self.ui.painter().line(screen_points, Stroke::new(width, colour));
    }

    /// Marks the current time on the strip, in the manner of a chart
    /// recorder's pen position.
    pub fn draw_cursor(&self, t: f32) {
        if !self.t_range.contains(t) {
            return;
        }
        let x = self.to_screen(t, 0.0).x;
        self.ui.painter().vline(
            x,
            self.rect.y_range(),
            Stroke::new(1.0, Color32::from_rgb(200, 60, 60)),
        );
    }
}

/// Symmetric y range around zero with a little headroom, guarded against
/// a degenerate zero span.
pub fn symmetric_range(amplitude: f32) -> Rangef {
    let half = (amplitude * 1.15).max(1e-3);
    Rangef::new(-half, half)
}

/// One-sided y range for the rectified trace.
pub fn positive_range(amplitude: f32) -> Rangef {
    Rangef::new(0.0, (amplitude * 1.15).max(1e-3))
}
