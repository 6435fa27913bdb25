//! DOM chrome drawn over the canvas: hotspot markers, the info panel, the
//! scene selector and the mini-map. Updated once per frame from the session.

use crate::constants::*;
use crate::dom;
use crate::Session;
use std::fmt::Write as _;
use tour_core::{Hotspot, HotspotKind, ProjectedHotspot, TourGraph};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Overlay {
    document: web::Document,
    marker_ids: Vec<String>,
    shown_scene: Option<String>,
    shown_info: Option<String>,
    shown_stage: &'static str,
}

impl Overlay {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            marker_ids: Vec::new(),
            shown_scene: None,
            shown_info: None,
            shown_stage: "",
        }
    }

    pub fn sync(&mut self, session: &Session, css_scale: f32) {
        let stage = session.stage().label();
        if stage != self.shown_stage {
            if let Some(el) = self.document.get_element_by_id(VIEWER_ID) {
                _ = el.set_attribute("data-stage", stage);
            }
            self.shown_stage = stage;
        }

        let active = session.active_scene_id();
        if self.shown_scene.as_deref() != Some(active) {
            self.render_scene_chrome(session.graph(), active);
            self.shown_scene = Some(active.to_string());
        }

        self.sync_markers(&session.visible_hotspots(), css_scale);
        self.sync_info(session.active_info());
    }

    fn render_scene_chrome(&self, graph: &TourGraph, active: &str) {
        if let Ok(scene) = graph.get_scene(active) {
            dom::set_text(&self.document, SCENE_NAME_ID, &scene.name);
        }
        if let Some(el) = self.document.get_element_by_id(SCENE_SELECTOR_ID) {
            el.set_inner_html(&scene_selector_html(graph, active));
        }
        if let Some(el) = self.document.get_element_by_id(MINIMAP_ID) {
            el.set_inner_html(&minimap_svg(graph, active));
        }
    }

    fn sync_markers(&mut self, visible: &[ProjectedHotspot<'_>], css_scale: f32) {
        let Some(layer) = self.document.get_element_by_id(HOTSPOT_LAYER_ID) else {
            return;
        };
        let same_set = visible.len() == self.marker_ids.len()
            && visible
                .iter()
                .zip(&self.marker_ids)
                .all(|(p, id)| p.hotspot.id == *id);
        if !same_set {
            let mut html = String::new();
            for p in visible {
                _ = write!(
                    html,
                    "<button class='hotspot hotspot-{kind}' id='{prefix}{id}' data-hotspot='{id}' style='transform: {t}'><span class='hotspot-label'>{title}</span></button>",
                    kind = kind_class(p.hotspot),
                    prefix = HOTSPOT_MARKER_PREFIX,
                    id = escape_html(&p.hotspot.id),
                    t = marker_transform(p, css_scale),
                    title = escape_html(&p.hotspot.title),
                );
            }
            layer.set_inner_html(&html);
            self.marker_ids = visible.iter().map(|p| p.hotspot.id.clone()).collect();
            return;
        }
        for p in visible {
            let id = format!("{}{}", HOTSPOT_MARKER_PREFIX, p.hotspot.id);
            let Some(el) = self
                .document
                .get_element_by_id(&id)
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            _ = el
                .style()
                .set_property("transform", &marker_transform(p, css_scale));
        }
    }

    fn sync_info(&mut self, info: Option<&Hotspot>) {
        let id = info.map(|h| h.id.as_str());
        if self.shown_info.as_deref() == id {
            return;
        }
        match info {
            Some(h) => {
                dom::set_text(&self.document, INFO_TITLE_ID, &h.title);
                dom::set_text(&self.document, INFO_DESCRIPTION_ID, &h.description);
                dom::set_hidden(&self.document, INFO_PANEL_ID, false);
            }
            None => dom::set_hidden(&self.document, INFO_PANEL_ID, true),
        }
        self.shown_info = id.map(str::to_string);
    }
}

fn kind_class(h: &Hotspot) -> &'static str {
    match h.kind {
        HotspotKind::Info => "info",
        HotspotKind::Navigation { .. } => "navigation",
    }
}

fn marker_transform(p: &ProjectedHotspot<'_>, css_scale: f32) -> String {
    let x = p.screen.x * css_scale - MARKER_HALF_SIZE_PX;
    let y = p.screen.y * css_scale - MARKER_HALF_SIZE_PX;
    format!("translate({:.1}px, {:.1}px)", x, y)
}

fn scene_selector_html(graph: &TourGraph, active: &str) -> String {
    let mut html = String::new();
    for scene in graph.scenes() {
        let class = if scene.id == active {
            "scene-option active"
        } else {
            "scene-option"
        };
        _ = write!(
            html,
            "<button class='{}' data-scene='{}'>{}</button>",
            class,
            escape_html(&scene.id),
            escape_html(&scene.name)
        );
    }
    html
}

fn minimap_svg(graph: &TourGraph, active: &str) -> String {
    let mut svg = format!(
        "<svg viewBox='0 0 {v} {v}' xmlns='http://www.w3.org/2000/svg'>",
        v = MINIMAP_VIEWBOX
    );
    for edge in graph.minimap_edges() {
        _ = write!(
            svg,
            "<line class='minimap-edge' x1='{}' y1='{}' x2='{}' y2='{}'/>",
            edge.from.position.x, edge.from.position.y, edge.to.position.x, edge.to.position.y
        );
    }
    for scene in graph.scenes() {
        let class = if scene.id == active {
            "minimap-scene active"
        } else {
            "minimap-scene"
        };
        _ = write!(
            svg,
            "<circle class='{}' cx='{}' cy='{}' r='{}' data-scene='{}'><title>{}</title></circle>",
            class,
            scene.position.x,
            scene.position.y,
            MINIMAP_NODE_RADIUS,
            escape_html(&scene.id),
            escape_html(&scene.name)
        );
    }
    svg.push_str("</svg>");
    svg
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
