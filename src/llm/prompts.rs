use crate::article::markers::{BODY_MARKER, INTERVIEW_MARKER, TITLE_MARKER};

/// Build a deterministic news-article prompt from event and interview notes.
pub fn build_article_prompt(event_notes: &str, interview_notes: &str) -> String {
    format!(
        "다음 메모를 바탕으로 실제 뉴스 기사를 작성해줘.\n\
내용: {event_notes}\n\
인터뷰: {interview_notes}\n\
\n\
[지침]\n\
1. 첫 문장은 반드시 육하원칙(누가, 언제, 어디서, 무엇을, 어떻게, 왜)이 포함된 리드문으로 작성할 것.\n\
2. 전체 문장은 최소 10문장 이상의 전문적인 기사체(~다.)로 작성할 것.\n\
3. 출력은 반드시 다음 형식을 지킬 것:\n\
{TITLE_MARKER} [기사제목]\n\
{BODY_MARKER} [기사본문]\n\
{INTERVIEW_MARKER} [다듬어진 인터뷰]"
    )
}
