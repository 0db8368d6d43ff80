use std::sync::Arc;
use std::time::Duration;

use rateswitch::journey::page_names;
use rateswitch::{
    CancellationWorkflow, Destination, EpsEndpoint, HostEvent, JourneyApi, JourneyConfig,
    RecordingHost, ScriptedEpsService, ScriptedReply,
};
use serde_json::json;

struct Fixture {
    service: Arc<ScriptedEpsService>,
    host: Arc<RecordingHost>,
    workflow: CancellationWorkflow,
}

fn fixture(service: ScriptedEpsService) -> Fixture {
    let service = Arc::new(service);
    let host = Arc::new(RecordingHost::new());
    let api = JourneyApi::new(service.clone(), host.clone(), host.clone())
        .with_call_timeout(Some(Duration::from_millis(50)));
    let workflow = CancellationWorkflow::new(api, host.clone(), host.clone());
    Fixture {
        service,
        host,
        workflow,
    }
}

fn ok() -> ScriptedReply {
    ScriptedReply::status(200, json!({}))
}

#[tokio::test]
async fn audit_and_alert_success_navigates_to_success_page() -> anyhow::Result<()> {
    let f = fixture(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ok()),
    );

    let outcome = f.workflow.confirm().await;

    assert_eq!(outcome.destination(), Destination::Success);
    assert!(outcome.state().is_none());
    assert_eq!(
        f.host.tags(),
        vec![
            (page_names::YES_CANCEL_RATE_SWITCH.to_string(), None),
            (
                page_names::NAVIGATE.to_string(),
                Some(json!({"pageName": "Summary", "navUrl": "Complete"}))
            ),
        ]
    );
    assert_eq!(f.host.navigations(), vec![(Destination::Success, None)]);

    let calls = f.service.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].endpoint, EpsEndpoint::AuditEvents);
    assert_eq!(
        calls[0].body,
        Some(json!({"data": {"attributes": [{"auditEventId": "823856"}]}}))
    );
    assert_eq!(calls[1].endpoint, EpsEndpoint::SendAlert);
    assert_eq!(calls[1].body, None);
    Ok(())
}

#[tokio::test]
async fn alert_failure_routes_to_error_page() -> anyhow::Result<()> {
    let f = fixture(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ScriptedReply::status(500, json!({"status": "error"}))),
    );

    let outcome = f.workflow.confirm().await;

    assert_eq!(outcome.destination(), Destination::Error);
    assert_eq!(outcome.state(), Some(&json!({"tryAgain": "confirmation"})));
    assert_eq!(
        f.host.tags(),
        vec![(
            page_names::NAVIGATE.to_string(),
            Some(json!({"pageName": "Summary", "navUrl": "Error"}))
        )]
    );
    assert!(!f
        .host
        .tag_names()
        .contains(&page_names::YES_CANCEL_RATE_SWITCH.to_string()));
    assert_eq!(
        f.host.navigations(),
        vec![(Destination::Error, Some(json!({"tryAgain": "confirmation"})))]
    );
    Ok(())
}

#[tokio::test]
async fn audit_error_matches_alert_failure_and_skips_alert() -> anyhow::Result<()> {
    let audit_fails = fixture(ScriptedEpsService::new().with_reply(
        EpsEndpoint::AuditEvents,
        ScriptedReply::Fail("connection refused".to_string()),
    ));
    let alert_fails = fixture(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ScriptedReply::status(503, json!({}))),
    );

    let first = audit_fails.workflow.confirm().await;
    let second = alert_fails.workflow.confirm().await;

    assert_eq!(first, second);
    assert_eq!(audit_fails.service.call_count(EpsEndpoint::SendAlert), 0);
    assert_eq!(audit_fails.host.navigations(), alert_fails.host.navigations());
    assert_eq!(audit_fails.host.tags(), alert_fails.host.tags());
    Ok(())
}

#[tokio::test]
async fn audit_status_failure_never_sends_alert() -> anyhow::Result<()> {
    let f = fixture(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ScriptedReply::status(400, json!({})))
            .with_reply(EpsEndpoint::SendAlert, ok()),
    );

    f.workflow.confirm().await;

    assert_eq!(f.service.call_count(EpsEndpoint::AuditEvents), 1);
    assert_eq!(f.service.call_count(EpsEndpoint::SendAlert), 0);
    Ok(())
}

#[tokio::test]
async fn loader_opens_and_closes_once_before_outcome() -> anyhow::Result<()> {
    let scenarios = vec![
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ok()),
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ScriptedReply::Panic("boom".to_string())),
        ScriptedEpsService::new().with_reply(EpsEndpoint::AuditEvents, ScriptedReply::Hang),
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ScriptedReply::Fail("reset".to_string())),
    ];

    for service in scenarios {
        let f = fixture(service);
        f.workflow.confirm().await;

        assert_eq!(f.host.loader_transitions(), vec![true, false]);

        let loading = f.host.loading_calls();
        let opens = loading.iter().filter(|on| **on).count();
        let closes = loading.iter().filter(|on| !**on).count();
        assert_eq!(opens, closes);

        // 加载层在任何埋点和导航之前关闭
        let events = f.host.events();
        let closed_at = events
            .iter()
            .position(|event| *event == HostEvent::Loader(false))
            .expect("loader closed");
        let first_emit = events
            .iter()
            .position(|event| matches!(event, HostEvent::Tag { .. } | HostEvent::Navigate { .. }))
            .expect("outcome emitted");
        assert!(closed_at < first_emit);
    }
    Ok(())
}

#[tokio::test]
async fn decline_only_tags_go_back_and_closes() -> anyhow::Result<()> {
    let f = fixture(ScriptedEpsService::new());
    let mut closed = false;

    f.workflow.decline(|| closed = true);

    assert!(closed);
    assert!(f.service.calls().is_empty());
    assert_eq!(f.host.tag_names(), vec![page_names::GO_BACK.to_string()]);
    assert!(f.host.navigations().is_empty());
    assert!(f.host.loader_transitions().is_empty());
    Ok(())
}

#[tokio::test]
async fn concurrent_confirmations_are_serialized() -> anyhow::Result<()> {
    let f = fixture(
        ScriptedEpsService::new()
            .with_default(EpsEndpoint::AuditEvents, ok())
            .with_default(EpsEndpoint::SendAlert, ok()),
    );

    let (first, second) = tokio::join!(f.workflow.confirm(), f.workflow.confirm());

    assert_eq!(first.destination(), Destination::Success);
    assert_eq!(second.destination(), Destination::Success);
    assert_eq!(f.host.loader_transitions(), vec![true, false, true, false]);

    let order: Vec<EpsEndpoint> = f.service.calls().iter().map(|call| call.endpoint).collect();
    assert_eq!(
        order,
        vec![
            EpsEndpoint::AuditEvents,
            EpsEndpoint::SendAlert,
            EpsEndpoint::AuditEvents,
            EpsEndpoint::SendAlert,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn custom_audit_event_id_is_sent() -> anyhow::Result<()> {
    let service = Arc::new(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ok()),
    );
    let host = Arc::new(RecordingHost::new());
    let api = JourneyApi::new(service.clone(), host.clone(), host.clone());
    let workflow =
        CancellationWorkflow::new(api, host.clone(), host.clone()).with_audit_event_id("900001");

    workflow.confirm().await;

    assert_eq!(
        service.calls()[0].body,
        Some(json!({"data": {"attributes": [{"auditEventId": "900001"}]}}))
    );
    Ok(())
}

#[tokio::test]
async fn workflow_built_from_config_sends_configured_audit_id() -> anyhow::Result<()> {
    let config = JourneyConfig::from_json_str(r#"{"audit_event_id":"900001"}"#)?;
    let service = Arc::new(
        ScriptedEpsService::new()
            .with_reply(EpsEndpoint::AuditEvents, ok())
            .with_reply(EpsEndpoint::SendAlert, ok()),
    );
    let host = Arc::new(RecordingHost::new());
    let api = JourneyApi::from_config(&config, service.clone(), host.clone(), host.clone());
    let workflow = CancellationWorkflow::new(api, host.clone(), host.clone());

    let outcome = workflow.confirm().await;

    assert_eq!(outcome.destination(), Destination::Success);
    assert_eq!(
        service.calls()[0].body,
        Some(json!({"data": {"attributes": [{"auditEventId": "900001"}]}}))
    );
    Ok(())
}
