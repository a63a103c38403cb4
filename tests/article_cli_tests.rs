mod common;

use common::{run_newsdesk, TestEnv};

const RESPONSE: &str = "제목: 체육대회 성황\n본문: 어제 3학년 학생들이 운동장에서 체육대회를 열었다.\n인터뷰: 학생 A는 정말 즐거웠다고 말했다.\n";

#[test]
fn prompt_embeds_notes() {
    let output = run_newsdesk(&[
        "prompt",
        "--event",
        "3학년 학생들이 어제 운동장에서 체육대회를 열었다",
        "--interview",
        "학생 A: 정말 즐거웠어요",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("내용: 3학년 학생들이 어제 운동장에서 체육대회를 열었다"));
    assert!(stdout.contains("인터뷰: 학생 A: 정말 즐거웠어요"));
    assert!(stdout.contains("제목:"));
    assert!(stdout.contains("본문:"));
}

#[test]
fn prompt_requires_event_notes() {
    let output = run_newsdesk(&["prompt", "--interview", "학생 A"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("기사 메모를 입력해야"));
}

#[test]
fn write_rejects_empty_notes_before_checking_provider() {
    let output = run_newsdesk(&["write", "--event", "   "]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("기사 메모를 입력해야"),
        "expected validation error, got:\n{}",
        stderr
    );
    assert!(!stderr.contains("API key"));
}

#[test]
fn write_rejects_unsupported_image() {
    let output = run_newsdesk(&["write", "--event", "체육대회", "--image", "photo.gif"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unsupported image type"));
}

#[test]
fn write_without_api_key_fails() {
    let output = run_newsdesk(&["write", "--event", "체육대회"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Gemini API key is missing"));
}

#[test]
fn parse_renders_saved_response() {
    let env = TestEnv::new();
    let file = env.write_file("response.txt", RESPONSE);

    let output = env.run(&[
        "parse",
        file.to_str().expect("utf-8 path"),
        "--author",
        "김민수",
        "--date",
        "2024-05-03",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "parse should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("THE SCHOOL TIMES"));
    assert!(stdout.contains("체육대회 성황"));
    assert!(stdout.contains("2024-05-03  |  김민수 기자"));
}

#[test]
fn parse_reads_stdin_as_json() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["parse", "--format", "json"], RESPONSE);

    assert!(output.status.success());
    let article: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse --format json prints JSON");
    assert_eq!(article["title"], "체육대회 성황");
    assert_eq!(article["interview"], "학생 A는 정말 즐거웠다고 말했다.");
}

#[test]
fn parse_missing_body_marker_asks_for_retry() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["parse"], &RESPONSE.replace("본문:", ""));
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("다시 시도해 주세요"));
    assert!(output.stdout.is_empty());
}

#[test]
fn parse_uses_configured_masthead_and_author() {
    let env = TestEnv::new();
    env.write_config("[newspaper]\nmasthead = \"HANBIT DAILY\"\ndefault_author = \"편집부\"\n");

    let output = env.run_with_stdin(&["parse", "--format", "html"], RESPONSE);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("HANBIT DAILY"));
    assert!(stdout.contains("<b>편집부</b> 기자"));
}

#[test]
fn write_service_failure_hides_api_key_and_suggests_retry() {
    // A port that was just released refuses connections.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let env = TestEnv::new();
    env.write_config(&format!(
        "[llm]\napi_key = \"SUPERSECRETKEY\"\nendpoint = \"http://{}\"\n",
        addr
    ));

    let output = env.run(&["write", "--event", "체육대회"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("AI 기사 생성에 실패했습니다"), "got:\n{}", stderr);
    assert!(stderr.contains("Run the same command again to retry."));
    assert!(!stderr.contains("SUPERSECRETKEY"));
    assert!(output.stdout.is_empty());
}
