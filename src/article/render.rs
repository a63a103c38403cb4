//! Newspaper layouts for parsed articles

use clap::ValueEnum;
use serde::Serialize;

use crate::article::{ArticleMeta, ParsedArticle};
use crate::Result;

/// Masthead printed when no other is configured.
pub const DEFAULT_MASTHEAD: &str = "THE SCHOOL TIMES";

/// Output layout for a rendered article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// Markdown document
    Markdown,
    /// Self-contained HTML page
    Html,
    /// JSON object with article fields and byline
    Json,
}

/// Render an article with its byline in the requested layout.
pub fn render(
    article: &ParsedArticle,
    meta: &ArticleMeta,
    masthead: &str,
    format: RenderFormat,
) -> Result<String> {
    match format {
        RenderFormat::Text => Ok(render_text(article, meta, masthead)),
        RenderFormat::Markdown => Ok(render_markdown(article, meta, masthead)),
        RenderFormat::Html => Ok(render_html(article, meta, masthead)),
        RenderFormat::Json => render_json(article, meta),
    }
}

/// "홍길동 기자", or an empty string when no author is set.
pub fn byline(author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        String::new()
    } else {
        format!("{} 기자", author)
    }
}

fn render_text(article: &ParsedArticle, meta: &ArticleMeta, masthead: &str) -> String {
    let rule = "=".repeat(60);
    let mut output = String::new();

    output.push_str(&format!("{:^60}\n", masthead));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&article.title);
    output.push('\n');
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let byline = byline(&meta.author);
    if byline.is_empty() {
        output.push_str(&format!("{}\n", meta.date_label()));
    } else {
        output.push_str(&format!("{}  |  {}\n", meta.date_label(), byline));
    }

    if let Some(image) = &meta.image {
        output.push_str(&format!("[사진: {}]\n", image.file_name()));
    }

    output.push('\n');
    output.push_str(&article.body);
    output.push_str("\n\n");
    output.push_str(&format!("  \"{}\"\n", article.interview));

    output
}

fn render_markdown(article: &ParsedArticle, meta: &ArticleMeta, masthead: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("**{}**\n\n", masthead));
    output.push_str(&format!("# {}\n\n", article.title));

    let byline = byline(&meta.author);
    if byline.is_empty() {
        output.push_str(&format!("_{}_\n\n", meta.date_label()));
    } else {
        output.push_str(&format!("_{}_ · **{}**\n\n", meta.date_label(), byline));
    }

    if let Some(image) = &meta.image {
        output.push_str(&format!("![{}]({})\n\n", image.file_name(), image.path.display()));
    }

    output.push_str(&article.body);
    output.push_str("\n\n");

    for line in article.interview.lines() {
        output.push_str(&format!("> {}\n", line));
    }

    output
}

const NEWS_STYLE: &str = r#"
.news-box {
    background-color: white;
    padding: 40px;
    border: 1px solid #ddd;
    font-family: 'Malgun Gothic', sans-serif;
    color: #333;
}
.news-masthead {
    text-align: center;
    font-weight: bold;
    letter-spacing: 5px;
}
.news-title {
    font-size: 32px;
    font-weight: 800;
    line-height: 1.2;
    margin-bottom: 15px;
    border-bottom: 2px solid #000;
    padding-bottom: 10px;
}
.news-meta {
    display: flex;
    justify-content: space-between;
    font-size: 14px;
    color: #666;
    margin-bottom: 20px;
}
.news-image {
    width: 100%;
}
.news-content {
    font-size: 18px;
    line-height: 1.8;
    text-align: justify;
}
.news-content:first-letter {
    font-size: 50px;
    font-weight: bold;
    float: left;
    margin-right: 8px;
    line-height: 1;
}
.interview-box {
    background-color: #f9f9f9;
    border-left: 5px solid #333;
    padding: 15px;
    margin-top: 25px;
    font-style: italic;
}
"#;

fn render_html(article: &ParsedArticle, meta: &ArticleMeta, masthead: &str) -> String {
    let author = meta.author.trim();
    let byline = if author.is_empty() {
        String::new()
    } else {
        format!("<b>{}</b> 기자", html_escape(author))
    };

    let image = meta
        .image
        .as_ref()
        .map(|image| {
            format!(
                "\n<img class=\"news-image\" src=\"{}\" alt=\"{}\">",
                image.data_uri(),
                html_escape(&image.file_name())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="news-box">
<div class="news-masthead">{masthead}</div>
<hr>
<div class="news-title">{title}</div>
<div class="news-meta">
<span>{date}</span>
<span>{byline}</span>
</div>
</div>{image}
<div class="news-box">
<div class="news-content">{body}</div>
<div class="interview-box">"{interview}"</div>
</div>
</body>
</html>
"#,
        title = html_escape(&article.title),
        style = NEWS_STYLE,
        masthead = html_escape(masthead),
        date = meta.date_label(),
        byline = byline,
        image = image,
        body = paragraphs(&article.body),
        interview = html_escape(&article.interview),
    )
}

fn render_json(article: &ParsedArticle, meta: &ArticleMeta) -> Result<String> {
    #[derive(Serialize)]
    struct ExportData<'a> {
        #[serde(flatten)]
        article: &'a ParsedArticle,
        author: &'a str,
        date: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    }

    let data = ExportData {
        article,
        author: meta.author.trim(),
        date: meta.date_label(),
        image: meta.image.as_ref().map(|i| i.path.display().to_string()),
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Escaped body text with line breaks kept.
fn paragraphs(text: &str) -> String {
    text.lines()
        .map(html_escape)
        .collect::<Vec<_>>()
        .join("<br>\n")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> (ParsedArticle, ArticleMeta) {
        let article = ParsedArticle {
            title: "체육대회 성황".to_string(),
            body: "어제 체육대회가 열렸다.\n모두 즐거워했다.".to_string(),
            interview: "학생 A는 정말 즐거웠다고 말했다.".to_string(),
        };
        let meta = ArticleMeta::new("김민수")
            .with_date(NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date"));
        (article, meta)
    }

    #[test]
    fn text_layout_has_masthead_and_byline() {
        let (article, meta) = sample();
        let out = render(&article, &meta, DEFAULT_MASTHEAD, RenderFormat::Text).unwrap();

        assert!(out.contains("THE SCHOOL TIMES"));
        assert!(out.contains("체육대회 성황"));
        assert!(out.contains("2024-05-03  |  김민수 기자"));
        assert!(out.contains("\"학생 A는 정말 즐거웠다고 말했다.\""));
    }

    #[test]
    fn text_layout_omits_empty_byline() {
        let (article, mut meta) = sample();
        meta.author = "  ".to_string();
        let out = render(&article, &meta, DEFAULT_MASTHEAD, RenderFormat::Text).unwrap();

        assert!(!out.contains("기자"));
        assert!(out.contains("2024-05-03\n"));
    }

    #[test]
    fn markdown_quotes_every_interview_line() {
        let (mut article, meta) = sample();
        article.interview = "첫째 줄\n둘째 줄".to_string();
        let out = render(&article, &meta, DEFAULT_MASTHEAD, RenderFormat::Markdown).unwrap();

        assert!(out.contains("# 체육대회 성황"));
        assert!(out.contains("> 첫째 줄\n> 둘째 줄\n"));
    }

    #[test]
    fn html_layout_matches_newspaper_structure() {
        let (article, meta) = sample();
        let out = render(&article, &meta, "SCHOOL GAZETTE", RenderFormat::Html).unwrap();

        assert!(out.contains("<div class=\"news-masthead\">SCHOOL GAZETTE</div>"));
        assert!(out.contains("<div class=\"news-title\">체육대회 성황</div>"));
        assert!(out.contains("<span>2024-05-03</span>"));
        assert!(out.contains("<b>김민수</b> 기자"));
        assert!(out.contains("어제 체육대회가 열렸다.<br>\n모두 즐거워했다."));
        assert!(!out.contains("<img"));
    }

    #[test]
    fn html_escapes_generated_markup() {
        let (mut article, meta) = sample();
        article.title = "<script>alert(1)</script>".to_string();
        let out = render(&article, &meta, DEFAULT_MASTHEAD, RenderFormat::Html).unwrap();

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn json_layout_flattens_article_fields() {
        let (article, meta) = sample();
        let out = render(&article, &meta, DEFAULT_MASTHEAD, RenderFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["title"], "체육대회 성황");
        assert_eq!(value["author"], "김민수");
        assert_eq!(value["date"], "2024-05-03");
        assert!(value.get("image").is_none());
    }
}
