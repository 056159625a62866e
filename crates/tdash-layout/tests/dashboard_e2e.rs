//! End-to-end dashboard scenarios: build, resolve, navigate, update.
//!
//! Layout under test (80x24 terminal):
//!
//! ```text
//! ┌ root (border) ────────────────────────────────────────────────┐
//! │ header (3 rows fixed)                                          │
//! ├──────────────────────┬─────────────────────────────────────────┤
//! │ sidebar (25%)        │ chart                                   │
//! │                      ├─────────────────────────────────────────┤
//! │                      │ log (8 rows from end)                   │
//! └──────────────────────┴─────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;
use tdash_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tdash_core::style::{Color, LineStyle};
use tdash_layout::{
    Container, ContainerError, ContainerOption, ContainerSnapshot, FocusGroup, Rect, SplitOption,
    Widget,
};

#[derive(Debug)]
struct Named(&'static str);

impl Widget for Named {
    fn name(&self) -> &str {
        self.0
    }
}

fn widget(name: &'static str) -> ContainerOption {
    ContainerOption::place_widget(Arc::new(Named(name)))
}

fn dashboard() -> Container {
    Container::new(&[
        ContainerOption::id("root"),
        ContainerOption::Border(LineStyle::Light),
        ContainerOption::BorderColor(Color::Blue),
        ContainerOption::key_focus_next(KeyCode::Tab),
        ContainerOption::key_focus_previous(KeyCode::BackTab),
        ContainerOption::key_focus_groups_next(KeyCode::Right, [FocusGroup(1)]),
        ContainerOption::key_focus_groups_previous(KeyCode::Left, [FocusGroup(1)]),
        ContainerOption::split_horizontal(
            [
                ContainerOption::id("header"),
                ContainerOption::KeyFocusSkip,
                widget("title"),
            ],
            [ContainerOption::split_vertical(
                [
                    ContainerOption::id("sidebar"),
                    ContainerOption::padding_left(1),
                    ContainerOption::key_focus_groups([FocusGroup(1)]),
                    widget("menu"),
                ],
                [ContainerOption::split_horizontal(
                    [
                        ContainerOption::id("chart"),
                        ContainerOption::Border(LineStyle::Round),
                        ContainerOption::border_title("CPU"),
                        ContainerOption::key_focus_groups([FocusGroup(1)]),
                        widget("sparkline"),
                    ],
                    [
                        ContainerOption::id("log"),
                        ContainerOption::margin_top_percent(10),
                        widget("text"),
                    ],
                    [SplitOption::FixedFromEnd(8)],
                )],
                [SplitOption::Percent(25)],
            )],
            [SplitOption::Fixed(3)],
        ),
    ])
    .unwrap()
}

fn area_of(root: &Container, id: &str) -> Rect {
    root.find_by_name(id).unwrap().area()
}

fn focused_name(root: &Container) -> String {
    root.find(root.focused()).unwrap().config().id.clone()
}

#[test]
fn resolves_every_region() {
    let mut root = dashboard();
    root.resolve(Rect::from_size(80, 24)).unwrap();

    assert_eq!(area_of(&root, "root"), Rect::from_size(80, 24));
    // Border leaves 78x22 at (1,1).
    assert_eq!(area_of(&root, "header"), Rect::new(1, 1, 78, 3));
    // 25% of 78 rounds to 20 (19.5 half-up).
    assert_eq!(area_of(&root, "sidebar"), Rect::new(1, 4, 20, 19));
    assert_eq!(
        root.find_by_name("sidebar").unwrap().content_area(),
        Some(Rect::new(2, 4, 19, 19))
    );
    assert_eq!(area_of(&root, "chart"), Rect::new(21, 4, 58, 11));
    assert_eq!(
        root.find_by_name("chart").unwrap().content_area(),
        Some(Rect::new(22, 5, 56, 9))
    );
    // 10% of the 8 offered rows is 0.8, floored to 0.
    assert_eq!(area_of(&root, "log"), Rect::new(21, 15, 58, 8));
}

#[test]
fn inherited_colors_flow_down() {
    let root = dashboard();
    for id in ["header", "sidebar", "chart", "log"] {
        let node = root.find_by_name(id).unwrap();
        assert_eq!(node.config().inherited.border_color, Color::Blue, "{id}");
        assert_eq!(node.config().inherited.focused_color, Color::Yellow, "{id}");
    }
}

#[test]
fn keyboard_navigation_round_trip() {
    let mut root = dashboard();
    let tab = Event::Key(KeyEvent::new(KeyCode::Tab));
    let mut visited = Vec::new();
    for _ in 0..4 {
        assert_eq!(root.handle_event(&tab), Ok(true));
        visited.push(focused_name(&root));
    }
    // The header is skipped.
    assert_eq!(visited, ["sidebar", "chart", "log", "sidebar"]);

    assert!(root.handle_key(&KeyEvent::new(KeyCode::Right)));
    assert_eq!(focused_name(&root), "chart");
    assert!(root.handle_key(&KeyEvent::new(KeyCode::Right)));
    assert_eq!(focused_name(&root), "sidebar");
    assert!(root.handle_key(&KeyEvent::new(KeyCode::Left)));
    assert_eq!(focused_name(&root), "chart");

    // Log is in no group: group keys do nothing there.
    assert!(root.handle_key(&KeyEvent::new(KeyCode::Tab)));
    assert_eq!(focused_name(&root), "log");
    assert!(!root.handle_key(&KeyEvent::new(KeyCode::Right)));
    assert!(root.handle_key(&KeyEvent::new(KeyCode::BackTab)));
    assert_eq!(focused_name(&root), "chart");
}

#[test]
fn mouse_click_focuses_and_resize_relayouts() {
    let mut root = dashboard();
    assert_eq!(
        root.handle_event(&Event::Resize {
            width: 80,
            height: 24
        }),
        Ok(false)
    );
    let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 30, 20);
    assert_eq!(root.handle_event(&Event::Mouse(click)), Ok(true));
    assert_eq!(focused_name(&root), "log");

    // Clicking the border belongs to the root.
    let border = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0);
    assert!(root.handle_mouse(&border));
    assert_eq!(focused_name(&root), "root");

    // Two columns leave nothing inside the border, so the sidebar padding
    // cannot fit.
    let err = root
        .handle_event(&Event::Resize {
            width: 2,
            height: 24,
        })
        .unwrap_err();
    let ContainerError::Geometry(err) = err else {
        panic!("expected a geometry error, got {err:?}");
    };
    assert_eq!(err.id, "sidebar");
}

#[test]
fn input_and_render_threads_share_one_tree() {
    let tree = Arc::new(Mutex::new(dashboard()));
    let input = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || {
            let mut root = tree.lock().unwrap();
            let tab = Event::Key(KeyEvent::new(KeyCode::Tab));
            root.handle_event(&tab).unwrap() && root.focus_next()
        })
    };
    assert!(input.join().unwrap());

    let mut root = tree.lock().unwrap();
    root.resolve(Rect::from_size(80, 24)).unwrap();
    assert_eq!(focused_name(&root), "chart");
    assert_eq!(area_of(&root, "chart"), Rect::new(21, 4, 58, 11));
}

#[test]
fn update_replaces_a_region_at_runtime() {
    let mut root = dashboard();
    root.update(
        "log",
        &[ContainerOption::split_vertical(
            [ContainerOption::id("stdout"), widget("out")],
            [ContainerOption::id("stderr"), widget("err")],
            [],
        )],
    )
    .unwrap();
    root.resolve(Rect::from_size(80, 24)).unwrap();
    assert_eq!(area_of(&root, "stdout"), Rect::new(21, 15, 29, 8));
    assert_eq!(area_of(&root, "stderr"), Rect::new(50, 15, 29, 8));
    assert!(root.find_by_name("log").unwrap().widget().is_none());

    let err = root
        .update("stderr", &[ContainerOption::id("chart")])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid container tree: duplicate container ID \"chart\""
    );
}

#[test]
fn snapshot_serializes_resolved_tree() {
    let mut root = dashboard();
    root.resolve(Rect::from_size(80, 24)).unwrap();
    let snapshot = root.snapshot();
    let value = serde_json::to_value(&snapshot).unwrap();

    let header = &value["children"][0];
    assert_eq!(header["config"]["id"], json!("header"));
    assert_eq!(header["config"]["key_focus_skip"], json!(true));
    assert_eq!(header["widget"], json!("title"));
    assert_eq!(
        header["area"],
        json!({ "x": 1, "y": 1, "width": 78, "height": 3 })
    );
    assert_eq!(value["config"]["border"], json!("light"));
    assert_eq!(value["config"]["inherited"]["border_color"], json!("blue"));
    assert!(value.get("widget").is_none());

    let chart = &value["children"][1]["children"][1]["children"][0];
    assert_eq!(chart["config"]["border_title"], json!("CPU"));
    assert_eq!(chart["config"]["key_focus_groups"], json!([1]));
    assert_eq!(
        chart["config"]["split_size"],
        json!({ "percent": 50, "fixed": null, "reversed": false })
    );

    let text = serde_json::to_string(&snapshot).unwrap();
    let back: ContainerSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snapshot);
}
