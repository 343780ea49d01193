//! Canvas painting for scenes.
//!
//! A [`Scene`] is laid out in world units with y pointing up. The renderer
//! fits the scene bounds into the canvas rect with a uniform scale, then
//! paints edges and elements with the sequencer overlay applied on top of
//! each element's base position, size and colour.

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use rdsviz::scene::{EdgeStyle, Scene, SceneElement, Shape};
use rdsviz::theme::{adjust_brightness, contrast_text};
use rdsviz::{lerp_color, with_alpha};
use rdsviz::{ElementStyle, Sequencer, VizPalette};

use crate::rendering::text_utils::fit_label;

/// World padding around the scene bounds.
const WORLD_MARGIN: f32 = 1.2;
/// Upper bound on pixels per world unit so tiny scenes don't balloon.
const MAX_SCALE: f32 = 70.0;
const CORNER_RADIUS: f32 = 4.0;
/// Opacity of the ghost left at a displaced element's resting slot.
const GHOST_ALPHA: u8 = 70;

/// Maps world coordinates (y up) into a screen rect (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    world_center: Pos2,
    screen_center: Pos2,
    scale: f32,
}

impl SceneTransform {
    /// Largest uniform scale that fits `world` inside `screen`, centred.
    pub fn fit(world: Rect, screen: Rect) -> Self {
        let sx = screen.width() / world.width().max(f32::EPSILON);
        let sy = screen.height() / world.height().max(f32::EPSILON);
        Self {
            world_center: world.center(),
            screen_center: screen.center(),
            scale: sx.min(sy).clamp(f32::EPSILON, MAX_SCALE),
        }
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            self.screen_center.x + (p.x - self.world_center.x) * self.scale,
            self.screen_center.y - (p.y - self.world_center.y) * self.scale,
        )
    }

    /// Converts a world size (always positive) to pixels.
    pub fn size_to_screen(&self, size: Vec2) -> Vec2 {
        size * self.scale
    }
}

/// An element resolved against the overlay, in screen space.
struct Placed<'a> {
    element: &'a SceneElement,
    rect: Rect,
    fill: Color32,
    animated: bool,
    /// Resting rect while the overlay moves the element away from it.
    home: Option<Rect>,
}

fn place<'a>(
    element: &'a SceneElement,
    style: ElementStyle,
    transform: &SceneTransform,
) -> Placed<'a> {
    let center = transform.to_screen(element.position + style.offset);
    let size = transform.size_to_screen(element.size * style.scale);
    Placed {
        element,
        rect: Rect::from_center_size(center, size),
        fill: style.color.unwrap_or(element.color),
        animated: !style.is_identity(),
        home: (style.offset != Vec2::ZERO).then(|| {
            Rect::from_center_size(
                transform.to_screen(element.position),
                transform.size_to_screen(element.size),
            )
        }),
    }
}

/// Allocates a canvas of `height` pixels and paints `scene` into it.
pub fn paint_scene(
    ui: &mut egui::Ui,
    scene: &Scene,
    sequencer: &Sequencer,
    palette: &VizPalette,
    height: f32,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, palette.canvas);

    if scene.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "(empty)",
            FontId::proportional(14.0),
            palette.edge,
        );
        return response;
    }

    let transform = SceneTransform::fit(scene.bounds(WORLD_MARGIN), rect.shrink(8.0));
    let mut placed: Vec<Placed<'_>> = scene
        .elements
        .iter()
        .map(|e| place(e, sequencer.style(e.id), &transform))
        .collect();

    let edge_stroke = Stroke::new(2.0, palette.edge);
    for edge in &scene.edges {
        let from = placed.iter().find(|p| p.element.id == edge.from);
        let to = placed.iter().find(|p| p.element.id == edge.to);
        let (Some(from), Some(to)) = (from, to) else {
            continue;
        };
        match edge.style {
            EdgeStyle::Line => {
                painter.line_segment([from.rect.center(), to.rect.center()], edge_stroke);
            }
            EdgeStyle::Arrow => {
                let start = Pos2::new(from.rect.right(), from.rect.center().y);
                let end = Pos2::new(to.rect.left() - 2.0, to.rect.center().y);
                painter.arrow(start, end - start, edge_stroke);
            }
        }
    }

    let ghost = with_alpha(palette.edge, GHOST_ALPHA);
    for p in &placed {
        match (p.home, &p.element.shape) {
            (Some(home), Shape::Circle) => {
                painter.circle_filled(home.center(), home.width().min(home.height()) / 2.0, ghost);
            }
            (Some(home), Shape::Cell | Shape::ListNode | Shape::KeyRow { .. }) => {
                painter.rect_filled(home, CORNER_RADIUS, ghost);
            }
            _ => {}
        }
    }

    // Moving elements on top.
    placed.sort_by_key(|p| p.animated);
    let caption_color = ui.visuals().text_color();
    for p in &placed {
        paint_element(&painter, p, palette, caption_color, transform.scale());
    }

    response
}

fn paint_element(
    painter: &egui::Painter,
    placed: &Placed<'_>,
    palette: &VizPalette,
    caption_color: Color32,
    scale: f32,
) {
    let Placed {
        element, rect, fill, ..
    } = placed;
    let rect = *rect;
    let text_color = contrast_text(*fill);
    let font = FontId::proportional((rect.height() * 0.42).clamp(8.0, 28.0));
    let outline = Stroke::new(1.5, adjust_brightness(*fill, 0.7));

    match &element.shape {
        Shape::Cell => {
            painter.rect_filled(rect, CORNER_RADIUS, *fill);
            painter.rect_stroke(rect, CORNER_RADIUS, outline, egui::StrokeKind::Outside);
            let label = fit_label(&element.label, rect.width(), &font, painter);
            painter.text(rect.center(), Align2::CENTER_CENTER, label, font, text_color);
        }
        Shape::Circle => {
            let radius = rect.width().min(rect.height()) / 2.0;
            painter.circle_filled(rect.center(), radius, *fill);
            painter.circle_stroke(rect.center(), radius, outline);
            let label = fit_label(&element.label, radius * 2.0, &font, painter);
            painter.text(rect.center(), Align2::CENTER_CENTER, label, font, text_color);
        }
        Shape::ListNode => {
            // Data compartment then a darker pointer compartment.
            let split = rect.left() + rect.width() * 0.7;
            let data = Rect::from_min_max(rect.min, Pos2::new(split, rect.max.y));
            let pointer = Rect::from_min_max(Pos2::new(split, rect.min.y), rect.max);
            painter.rect_filled(rect, CORNER_RADIUS, *fill);
            painter.rect_filled(pointer, 0.0, lerp_color(*fill, palette.edge, 0.35));
            painter.rect_stroke(rect, CORNER_RADIUS, outline, egui::StrokeKind::Outside);
            let label = fit_label(&element.label, data.width(), &font, painter);
            painter.text(data.center(), Align2::CENTER_CENTER, label, font, text_color);
            painter.circle_filled(pointer.center(), (pointer.height() * 0.12).max(1.5), text_color);
        }
        Shape::KeyRow { keys } => {
            painter.rect_filled(rect, CORNER_RADIUS, *fill);
            painter.rect_stroke(rect, CORNER_RADIUS, outline, egui::StrokeKind::Outside);
            let slot_width = rect.width() / keys.len().max(1) as f32;
            for (i, key) in keys.iter().enumerate() {
                let left = rect.left() + slot_width * i as f32;
                if i > 0 {
                    painter.line_segment(
                        [Pos2::new(left, rect.top()), Pos2::new(left, rect.bottom())],
                        outline,
                    );
                }
                let slot = Rect::from_min_size(
                    Pos2::new(left, rect.top()),
                    Vec2::new(slot_width, rect.height()),
                );
                painter.text(
                    slot.center(),
                    Align2::CENTER_CENTER,
                    fit_label(&key.to_string(), slot_width, &font, painter),
                    font.clone(),
                    text_color,
                );
            }
        }
        Shape::NullMarker => {
            painter.rect_stroke(
                rect,
                CORNER_RADIUS,
                Stroke::new(1.0, palette.edge),
                egui::StrokeKind::Inside,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &element.label,
                FontId::monospace((rect.height() * 0.5).clamp(8.0, 16.0)),
                palette.edge,
            );
        }
    }

    if let Some(caption) = &element.caption {
        painter.text(
            Pos2::new(rect.center().x, rect.bottom() + 0.25 * scale),
            Align2::CENTER_TOP,
            caption,
            FontId::monospace((0.3 * scale).clamp(8.0, 14.0)),
            caption_color,
        );
    }
}
