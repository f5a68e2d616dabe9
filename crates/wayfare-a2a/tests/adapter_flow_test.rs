use serde_json::{Value, json};
use std::sync::Arc;
use wayfare_a2a::classifier::{MESSAGE_PHASE_TEXT, TOOL_PHASE_TEXT};
use wayfare_a2a::types::{TaskState, TaskStatusUpdateEvent};
use wayfare_a2a::{AgentChunk, DispatchOutcome, Dispatcher, ScriptedAgent, encoder};

fn subscribe_request(text: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "message/sendSubscribe",
        "params": {
            "message": {
                "role": "user",
                "parts": [{ "kind": "text", "text": text }],
                "messageId": "msg-stream-1"
            },
            "sessionId": "session-42"
        },
        "id": "req-stream-1"
    })
}

fn completed_script() -> Vec<AgentChunk> {
    vec![
        AgentChunk::ToolSignal,
        AgentChunk::ToolSignal,
        AgentChunk::Text(r#"{"status":"completed","#.into()),
        AgentChunk::Text(r#""message":"Your itinerary is ready."}"#.into()),
        AgentChunk::ToolSignal,
    ]
}

async fn run_stream(agent: ScriptedAgent, request: Value) -> Vec<TaskStatusUpdateEvent> {
    let dispatcher = Dispatcher::new(Arc::new(agent));
    let DispatchOutcome::Stream { mut events } = dispatcher.dispatch(request).await else {
        panic!("expected stream outcome");
    };
    let mut collected = Vec::new();
    while let Some(event) = events.recv().await {
        collected.push(event);
    }
    collected
}

fn status_text(event: &TaskStatusUpdateEvent) -> &str {
    event
        .status
        .message
        .as_ref()
        .and_then(|m| m.first_text())
        .unwrap()
}

#[tokio::test]
async fn streamed_call_announces_phases_then_completes() {
    let agent = ScriptedAgent::new("unused", completed_script());
    let events = run_stream(agent, subscribe_request("Plan Tokyo with exchange rates")).await;

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].status.state, TaskState::Working);
    assert_eq!(status_text(&events[0]), TOOL_PHASE_TEXT);
    assert_eq!(events[1].status.state, TaskState::Working);
    assert_eq!(status_text(&events[1]), MESSAGE_PHASE_TEXT);

    let terminal = &events[2];
    assert!(terminal.is_final);
    assert_eq!(terminal.status.state, TaskState::Completed);
    assert_eq!(status_text(terminal), "Your itinerary is ready.");
    assert_eq!(terminal.task_id.as_str(), "msg-stream-1");
    assert_eq!(
        terminal.context_id.as_ref().map(|c| c.as_str()),
        Some("session-42")
    );

    assert_eq!(events.iter().filter(|e| e.is_final).count(), 1);
}

#[tokio::test]
async fn free_text_answer_is_classified_as_failure() {
    let agent = ScriptedAgent::new(
        "unused",
        vec![AgentChunk::Text("sure, here is a plan...".into())],
    );
    let events = run_stream(agent, subscribe_request("anything")).await;

    let terminal = events.last().unwrap();
    assert!(terminal.is_final);
    assert_eq!(terminal.status.state, TaskState::Failed);
}

#[tokio::test]
async fn empty_agent_stream_is_classified_as_failure() {
    let agent = ScriptedAgent::new("unused", Vec::new());
    let events = run_stream(agent, subscribe_request("anything")).await;

    assert_eq!(events.len(), 1);
    assert!(events[0].is_final);
    assert_eq!(events[0].status.state, TaskState::Failed);
}

#[tokio::test]
async fn events_survive_sse_framing() {
    let agent = ScriptedAgent::new("unused", completed_script());
    let events = run_stream(agent, subscribe_request("frame me")).await;

    for event in &events {
        let frame = encoder::encode_frame(event).unwrap();
        let decoded = encoder::decode_frame(&frame).unwrap();
        assert_eq!(decoded.task_id, event.task_id);
        assert_eq!(decoded.status.state, event.status.state);
        assert_eq!(decoded.is_final, event.is_final);
    }
}

#[tokio::test]
async fn synchronous_send_returns_completed_task() {
    let agent = ScriptedAgent::new("Lisbon in June: three-day plan.", Vec::new());
    let dispatcher = Dispatcher::new(Arc::new(agent));
    let outcome = dispatcher
        .dispatch(json!({
            "jsonrpc": "2.0",
            "method": "message/send",
            "params": {
                "message": {
                    "role": "user",
                    "parts": [{ "kind": "text", "text": "Plan Lisbon" }],
                    "messageId": "msg-sync-1"
                },
                "sessionId": "session-7"
            },
            "id": 7
        }))
        .await;

    let DispatchOutcome::Response(body) = outcome else {
        panic!("expected synchronous response");
    };
    assert_eq!(body["id"], 7);
    assert_eq!(body["result"]["task"]["status"]["state"], "completed");
    assert_eq!(
        body["result"]["task"]["status"]["message"]["parts"][0]["text"],
        "Lisbon in June: three-day plan."
    );
    assert_eq!(body["result"]["task"]["history"][0]["role"], "user");
}
