use pagepick::settings::Settings;
use pagepick::test_utils::test_helpers::*;
use pagepick::{App, Page, PixelRect, run_app_with_event_source};

// 82x26 terminal: the page overlay is 80x20 cells at (1, 1). With an
// 800x200 page every cell covers 10x10 pixels, so cell (c, r) maps to
// pixel ((c - 1) * 10, (r - 1) * 10).
const WIDTH: u16 = 82;
const HEIGHT: u16 = 26;

const PAGE_JSON: &str = r#"{
    "page": 7,
    "width": 800,
    "height": 200,
    "data": [
        {"x": 0, "y": 0, "w": 20, "h": 20, "t": "first"},
        {"x": 100, "y": 100, "w": 20, "h": 20, "t": "second"},
        {"x": 140, "y": 0, "w": 6, "h": 20, "t": " "}
    ]
}"#;

fn app() -> App {
    let page = Page::from_json(PAGE_JSON).unwrap();
    App::new(page, &Settings::default())
}

fn flags(app: &App) -> Vec<bool> {
    app.selector.regions().iter().map(|r| r.selected).collect()
}

#[test]
fn test_drag_grows_selection_and_keeps_it_after_release() {
    let mut app = app();
    let mut terminal = create_test_terminal(WIDTH, HEIGHT);

    let mut events = TestScenarioBuilder::new()
        .mouse_down(1, 1)
        .mouse_drag(3, 3)
        .quit()
        .build();
    run_app_with_event_source(&mut terminal, &mut app, &mut events).unwrap();

    assert_eq!(
        app.selector.live_rect(),
        Some(PixelRect::new(0.0, 0.0, 20.0, 20.0))
    );
    assert_eq!(flags(&app), vec![true, false]);

    let mut events = TestScenarioBuilder::new()
        .mouse_drag(16, 16)
        .mouse_up(16, 16)
        .quit()
        .build();
    run_app_with_event_source(&mut terminal, &mut app, &mut events).unwrap();

    assert_eq!(app.selector.live_rect(), None);
    assert_eq!(flags(&app), vec![true, true]);

    let screen = capture_terminal_state(&terminal);
    assert!(screen.contains("Page 7"), "{screen}");
    assert!(
        screen.contains("x: 0, y: 0, width: 150, height: 150"),
        "{screen}"
    );
    assert!(screen.contains("(2 words selected)"), "{screen}");
}

#[test]
fn test_fresh_gesture_replaces_selection() {
    let mut app = app();
    let mut terminal = create_test_terminal(WIDTH, HEIGHT);

    let mut events = TestScenarioBuilder::new()
        .drag_select((1, 1), (16, 16))
        .drag_select((19, 19), (20, 20))
        .quit()
        .build();
    run_app_with_event_source(&mut terminal, &mut app, &mut events).unwrap();

    assert_eq!(flags(&app), vec![false, false]);
    assert_eq!(
        app.selector.last_completed(),
        Some(PixelRect::new(180.0, 180.0, 10.0, 10.0))
    );

    let screen = capture_terminal_state(&terminal);
    assert!(
        screen.contains("x: 180, y: 180, width: 10, height: 10"),
        "{screen}"
    );
    assert!(screen.contains("(0 words selected)"), "{screen}");
}

#[test]
fn test_live_rectangle_visible_during_drag() {
    let mut app = app();
    let mut terminal = create_test_terminal(WIDTH, HEIGHT);

    let mut events = TestScenarioBuilder::new()
        .mouse_down(5, 5)
        .mouse_drag(9, 9)
        .quit()
        .build();
    run_app_with_event_source(&mut terminal, &mut app, &mut events).unwrap();

    let screen = capture_terminal_state(&terminal);
    assert!(screen.contains('┌'), "{screen}");
    assert!(screen.contains('┘'), "{screen}");
    assert!(screen.contains("Drag over the page to select words"), "{screen}");
}

#[test]
fn test_report_lists_selected_words() {
    let mut app = app();
    let mut terminal = create_test_terminal(WIDTH, HEIGHT);

    let mut events = TestScenarioBuilder::new()
        .drag_select((10, 10), (14, 14))
        .quit()
        .build();
    run_app_with_event_source(&mut terminal, &mut app, &mut events).unwrap();

    let report = app.selection_report();
    assert_eq!(report.page, 7);
    assert_eq!(report.rect, Some(PixelRect::new(90.0, 90.0, 40.0, 40.0)));
    let texts: Vec<&str> = report.words.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, vec!["second"]);
}

#[test]
fn test_blank_words_never_become_regions() {
    let app = app();
    assert_eq!(app.selector.regions().len(), 2);
}
