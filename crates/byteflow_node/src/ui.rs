// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node body rendering for egui hosts.
//!
//! Draws the title, the node's editable state (via [`Node::draw`]) and one
//! row per attribute, colored by attribute type. Layout of the surrounding
//! graph is left to the host.

use crate::attribute::{AttributeDirection, AttributeType};
use crate::node::Node;
use egui::{Color32, RichText};

/// Radius of the socket marker drawn next to each attribute
const SOCKET_RADIUS: f32 = 4.0;

fn type_color(ty: AttributeType) -> Color32 {
    let [r, g, b] = ty.color();
    Color32::from_rgb(r, g, b)
}

/// Render a node body inside a framed group
pub fn node_body(ui: &mut egui::Ui, title: &str, node: &mut dyn Node) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).strong());
            ui.separator();

            node.draw(ui);

            for attribute in node.attributes().iter() {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SOCKET_RADIUS * 2.0, SOCKET_RADIUS * 2.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .circle_filled(rect.center(), SOCKET_RADIUS, type_color(attribute.ty()));

                    let arrow = match attribute.direction() {
                        AttributeDirection::Input => "→",
                        AttributeDirection::Output => "←",
                    };
                    ui.label(format!("{arrow} {}", attribute.name()))
                        .on_hover_text(attribute.value().to_string());
                });
            }
        });
    });
}
