//! Renderer smoke tests over a fully loaded planner.

use crate::helpers::{FakePosts, FakeSynced, at, synced_record, titled_post_record};
use gnomon_test::app::render;
use gnomon_test::calendar::month::YearMonth;
use gnomon_test::calendar::view::ViewMode;
use gnomon_test::service::planner::CalendarPlanner;

async fn loaded_planner() -> CalendarPlanner<FakePosts, FakeSynced> {
    let mut planner = CalendarPlanner::new(
        FakePosts::always(vec![titled_post_record(
            "1",
            "2024-06-12T10:00:00Z",
            "Summer Launch",
        )]),
        FakeSynced::always(vec![synced_record(
            "trip",
            "Paris Trip",
            "2024-06-10T09:00:00Z",
            "2024-06-12T18:00:00Z",
        )]),
        chrono_tz::UTC,
        50,
    );
    planner.refresh().await;
    planner.show_month(YearMonth::new(2024, 6).unwrap());
    planner.set_view(ViewMode::Month);
    planner
}

#[test_log::test(tokio::test)]
async fn grid_renders_six_weeks_with_event_markers() {
    let planner = loaded_planner().await;
    let grid = render::render_grid(&planner);

    let lines: Vec<&str> = grid.lines().collect();
    // title + weekday header + 6 week rows
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("2024-06"));
    assert!(lines[1].contains("Mo"));
    // 2024-06-12 carries both events and is starred
    assert!(grid.contains("12*"));
    // leading May days are bracketed fill
    assert!(grid.contains("(27)"));
}

#[test_log::test(tokio::test)]
async fn agenda_lists_events_with_colors_and_span_markers() {
    let planner = loaded_planner().await;
    let agenda = render::render_agenda(&planner, at("2024-06-12T12:00:00Z"));

    assert!(agenda.contains("month view: 2 event(s)"));
    assert!(agenda.contains("Summer Launch"));
    assert!(agenda.contains("#8b5cf6"));
    assert!(agenda.contains("Paris Trip"));
    assert!(agenda.contains("#ef4444"));
    assert!(agenda.contains("[spans 3 days]"));
}

#[test_log::test(tokio::test)]
async fn json_output_serializes_visible_events() {
    let planner = loaded_planner().await;
    let json = render::render_json(&planner, at("2024-06-12T12:00:00Z")).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let events = value.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["id"], "trip");
    assert_eq!(events[0]["color"], "#ef4444");
    assert_eq!(events[1]["id"], "post-1");
}
