mod common;

use common::{MemoryContainer, MemoryHost};
use stablecoin_dashboard_wasm::application::{
    BootstrapStep, DashboardCoordinator, RevealWatcher, build_timeline,
};
use stablecoin_dashboard_wasm::config::DashboardConfig;
use stablecoin_dashboard_wasm::domain::{
    chart::ChartKind,
    errors::AppError,
    market_data::DashboardDataProvider,
    timeline::RevealState,
};
use stablecoin_dashboard_wasm::infrastructure::StaticDataProvider;

fn coordinator() -> DashboardCoordinator<StaticDataProvider> {
    DashboardCoordinator::new(StaticDataProvider::new(), DashboardConfig::default())
}

#[test]
fn steps_run_once_in_order() {
    let mut host = MemoryHost::new();
    let session = coordinator().start(&mut host);

    assert_eq!(
        host.calls(),
        vec!["draw:marketCapChart", "draw:shareChart", "container:timeline", "watcher"]
    );
    let steps: Vec<_> = session.outcomes.iter().map(|o| o.step).collect();
    assert_eq!(
        steps,
        vec![BootstrapStep::BarChart, BootstrapStep::DoughnutChart, BootstrapStep::Timeline, BootstrapStep::Reveal]
    );
    assert!(session.is_complete());
    assert_eq!(session.charts, vec!["marketCapChart".to_string(), "shareChart".to_string()]);
}

#[test]
fn bar_chart_receives_ten_points_in_input_order() {
    let mut host = MemoryHost::new();
    coordinator().start(&mut host);

    let (surface, spec) = &host.engine.drawn[0];
    assert_eq!(surface, "marketCapChart");
    assert_eq!(spec.kind, ChartKind::Bar);

    let rows = StaticDataProvider::new().market_rows();
    let expected: Vec<(&str, f64)> = rows.iter().map(|r| (r.label.as_str(), r.value.value())).collect();
    assert_eq!(spec.points().len(), 10);
    assert_eq!(spec.points(), expected);
}

#[test]
fn doughnut_chart_receives_the_share_split() {
    let mut host = MemoryHost::new();
    coordinator().start(&mut host);

    let (surface, spec) = &host.engine.drawn[1];
    assert_eq!(surface, "shareChart");
    assert_eq!(spec.kind, ChartKind::Doughnut);
    let points = spec.points();
    assert_eq!(points[0].0, "Stablecoins");
    assert!((points[0].1 - 163.85).abs() < 1e-6);
    assert!((points[0].1 + points[1].1 - 3690.0).abs() < 1e-6);
}

#[test]
fn timeline_nodes_carry_event_text_verbatim() {
    let mut host = MemoryHost::new();
    let session = coordinator().start(&mut host);

    let events = StaticDataProvider::new().timeline_events();
    let nodes = host.appended();
    assert_eq!(nodes.len(), 6);
    assert_eq!(session.timeline_nodes, 6);
    for (node, event) in nodes.iter().zip(&events) {
        assert_eq!(node.texts, vec![event.year.clone(), event.title.clone(), event.description.clone()]);
    }
}

#[test]
fn every_timeline_node_is_watched_and_hidden() {
    let mut host = MemoryHost::new();
    let session = coordinator().start(&mut host);

    let watcher = session.watcher.as_ref().expect("reveal step succeeded");
    assert_eq!(watcher.watched_count(), 6);
    assert_eq!(watcher.shown_count(), 0);
    assert_eq!(watcher.watched, host.appended());
    assert!((0..6).all(|i| watcher.board.state(i) == Some(RevealState::Hidden)));
}

#[test]
fn reveal_is_one_shot_per_node() {
    let mut host = MemoryHost::new();
    let mut session = coordinator().start(&mut host);
    let watcher = session.watcher.as_mut().expect("reveal step succeeded");

    assert!(!watcher.report(2, 0.05));
    assert!(watcher.report(2, 0.10));
    assert!(!watcher.report(2, 0.9));
    assert!(!watcher.report(2, 0.0));
    assert_eq!(watcher.board.state(2), Some(RevealState::Shown));
    assert!(!watcher.board.is_watching(2));
    assert_eq!(session.status().revealed_nodes, 1);
}

#[test]
fn missing_chart_surface_does_not_stop_later_steps() {
    let mut host = MemoryHost::new().without_surface("marketCapChart");
    let session = coordinator().start(&mut host);

    assert!(!session.is_complete());
    let failures: Vec<_> = session.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].step, BootstrapStep::BarChart);
    assert_eq!(failures[0].error, Some(AppError::MissingAnchor("marketCapChart".to_string())));

    assert_eq!(session.charts, vec!["shareChart".to_string()]);
    assert_eq!(host.appended().len(), 6);
    assert!(session.watcher.is_some());
}

#[test]
fn missing_timeline_container_still_runs_reveal_with_no_nodes() {
    let mut host = MemoryHost::new().without_container();
    let session = coordinator().start(&mut host);

    assert_eq!(host.calls().last().map(String::as_str), Some("watcher"));
    assert_eq!(session.timeline_nodes, 0);
    assert_eq!(session.watcher.as_ref().map(|w| w.watched_count()), Some(0));
    assert_eq!(session.failures().map(|o| o.step).collect::<Vec<_>>(), vec![BootstrapStep::Timeline]);
}

#[test]
fn configured_anchor_ids_are_used() {
    let config = DashboardConfig::from_json(
        r#"{"barChartId": "bars", "doughnutChartId": "ring", "timelineContainerId": "timeline"}"#,
    )
    .unwrap();
    let mut host = MemoryHost::new();
    DashboardCoordinator::new(StaticDataProvider::new(), config).start(&mut host);

    assert_eq!(&host.calls()[..2], ["draw:bars", "draw:ring"]);
}

#[test]
fn status_serializes_step_results() {
    let mut host = MemoryHost::new().without_surface("shareChart");
    let session = coordinator().start(&mut host);

    let json: serde_json::Value = serde_json::to_value(session.status()).unwrap();
    assert_eq!(json["timelineNodes"], 6);
    assert_eq!(json["steps"][0]["step"], "barChart");
    assert_eq!(json["steps"][0]["ok"], true);
    assert!(json["steps"][0].get("error").is_none());
    assert_eq!(json["steps"][1]["ok"], false);
    assert_eq!(json["steps"][1]["error"], "Missing anchor element: #shareChart");
}

#[test]
fn building_twice_duplicates_nodes() {
    let events = StaticDataProvider::new().timeline_events();
    let mut container = MemoryContainer::default();

    let first = build_timeline(&mut container, &events).unwrap();
    let second = build_timeline(&mut container, &events).unwrap();

    assert_eq!(first.len(), 6);
    assert_eq!(second.len(), 6);
    assert_eq!(container.nodes.borrow().len(), 12);
    assert_eq!(container.nodes.borrow()[6].texts, first[0].texts);
}
