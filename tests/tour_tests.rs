// Tour documents, graph validation and the bundled sample tour.

use std::time::Duration;
use tour_core::sample::office_tour;
use tour_core::{GraphError, HotspotKind, Tour, TourError, TourGraph, ViewerConfig};

fn doc(scenes: &str) -> String {
    format!(r#"{{ "initialScene": "a", "scenes": [{}] }}"#, scenes)
}

const SCENE_A: &str = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 10, "y": 10 }, "connections": ["b"] }"#;
const SCENE_B: &str = r#"{ "id": "b", "name": "B", "image": "b.jpg", "position": { "x": 20, "y": 20 }, "connections": ["a"] }"#;

fn graph_error(json: &str) -> GraphError {
    match Tour::from_json(json) {
        Err(TourError::InvalidGraph(e)) => e,
        other => panic!("expected a graph error, got {:?}", other.map(|t| t.initial_scene)),
    }
}

#[test]
fn sample_tour_loads() {
    let tour = office_tour().expect("bundled tour is valid");
    assert_eq!(tour.initial_scene, "reception");
    assert_eq!(tour.graph.len(), 5);
    let ids: Vec<&str> = tour.graph.scenes().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "reception",
            "hallway",
            "conference-room",
            "waiting-area",
            "office-space"
        ]
    );
    assert_eq!(tour.viewer, ViewerConfig::default());
}

#[test]
fn sample_hotspots_resolve() {
    let tour = office_tour().expect("bundled tour is valid");
    let reception = tour.graph.get_scene("reception").expect("reception");
    let desk = reception.hotspot("reception-desk").expect("desk hotspot");
    assert_eq!(desk.kind, HotspotKind::Info);
    assert!((desk.position.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    let to_hallway = reception.hotspot("to-hallway").expect("hallway hotspot");
    assert_eq!(to_hallway.target(), Some("hallway"));
    for scene in tour.graph.scenes() {
        for h in &scene.hotspots {
            if let Some(target) = h.target() {
                assert!(tour.graph.contains(target));
            }
        }
    }
}

#[test]
fn unknown_scene_lookup_fails() {
    let tour = office_tour().expect("bundled tour is valid");
    match tour.graph.get_scene("roof") {
        Err(TourError::SceneNotFound(id)) => assert_eq!(id, "roof"),
        other => panic!("unexpected {:?}", other.map(|s| s.id.clone())),
    }
}

#[test]
fn minimap_edges_are_undirected_and_unique() {
    let tour = office_tour().expect("bundled tour is valid");
    let mut edges: Vec<(String, String)> = tour
        .graph
        .minimap_edges()
        .iter()
        .map(|e| {
            let (a, b) = (e.from.id.clone(), e.to.id.clone());
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect();
    edges.sort();
    assert_eq!(
        edges,
        [
            ("conference-room".to_string(), "hallway".to_string()),
            ("hallway".to_string(), "office-space".to_string()),
            ("hallway".to_string(), "reception".to_string()),
            ("reception".to_string(), "waiting-area".to_string()),
        ]
    );
}

#[test]
fn viewer_block_overrides_defaults() {
    let json = format!(
        r#"{{ "initialScene": "a",
             "viewer": {{ "cullBehindCamera": true, "maxVisibleHotspots": 5,
                          "timings": {{ "zoomIn": 100 }} }},
             "scenes": [{}, {}] }}"#,
        SCENE_A, SCENE_B
    );
    let tour = Tour::from_json(&json).expect("valid tour");
    assert!(tour.viewer.cull_behind_camera);
    assert_eq!(tour.viewer.max_visible_hotspots, 5);
    assert_eq!(tour.viewer.timings.zoom_in, Duration::from_millis(100));
    assert_eq!(tour.viewer.timings.settle, Duration::from_millis(500));
    assert_eq!(
        tour.viewer.auto_rotate_deg_per_frame,
        ViewerConfig::default().auto_rotate_deg_per_frame
    );
}

#[test]
fn empty_tour_is_rejected() {
    assert_eq!(TourGraph::new(Vec::new()).err(), Some(GraphError::Empty));
}

#[test]
fn duplicate_scene_ids_are_rejected() {
    let json = doc(&format!("{}, {}, {}", SCENE_A, SCENE_B, SCENE_B));
    assert_eq!(graph_error(&json), GraphError::DuplicateScene("b".into()));
}

#[test]
fn dangling_connections_are_rejected() {
    let lonely = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 0, "y": 0 }, "connections": ["nowhere"] }"#;
    assert_eq!(
        graph_error(&doc(lonely)),
        GraphError::DanglingConnection {
            scene: "a".into(),
            target: "nowhere".into()
        }
    );
}

#[test]
fn navigation_targets_must_exist() {
    let scene = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 0, "y": 0 },
        "hotspots": [{ "id": "go", "title": "Go", "position": { "phi": 1.0, "theta": 0.0 },
                       "type": "navigation", "targetScene": "missing" }] }"#;
    assert_eq!(
        graph_error(&doc(scene)),
        GraphError::DanglingTarget {
            scene: "a".into(),
            hotspot: "go".into(),
            target: "missing".into()
        }
    );
}

#[test]
fn hotspot_ids_are_unique_within_a_scene() {
    let scene = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 0, "y": 0 },
        "hotspots": [
            { "id": "x", "title": "X", "position": { "phi": 1.0, "theta": 0.0 }, "type": "info" },
            { "id": "x", "title": "X", "position": { "phi": 1.0, "theta": 1.0 }, "type": "info" }
        ] }"#;
    assert_eq!(
        graph_error(&doc(scene)),
        GraphError::DuplicateHotspot {
            scene: "a".into(),
            hotspot: "x".into()
        }
    );
}

#[test]
fn hotspot_variant_and_target_must_agree() {
    let nav_without_target = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 0, "y": 0 },
        "hotspots": [{ "id": "go", "title": "Go", "position": { "phi": 1.0, "theta": 0.0 }, "type": "navigation" }] }"#;
    let info_with_target = r#"{ "id": "a", "name": "A", "image": "a.jpg", "position": { "x": 0, "y": 0 },
        "hotspots": [{ "id": "i", "title": "I", "position": { "phi": 1.0, "theta": 0.0 }, "type": "info", "targetScene": "a" }] }"#;
    for scene in [nav_without_target, info_with_target] {
        assert!(matches!(
            Tour::from_json(&doc(scene)),
            Err(TourError::Parse(_))
        ));
    }
}

#[test]
fn initial_scene_must_exist() {
    let json = format!(
        r#"{{ "initialScene": "lobby", "scenes": [{}, {}] }}"#,
        SCENE_A, SCENE_B
    );
    assert_eq!(
        graph_error(&json),
        GraphError::UnknownInitialScene("lobby".into())
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Tour::from_json("{ not json"),
        Err(TourError::Parse(_))
    ));
}
