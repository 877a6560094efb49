use super::{Page, escape, form_errors, layout};
use crate::application::dto::{ArticleDetailDto, ArticleSummaryDto};
use std::fmt::Write as _;

/// Submitted or stored article fields, echoed back into a form.
#[derive(Debug, Clone, Default)]
pub struct ArticleFields<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

pub fn index(page: &Page, articles: &[ArticleSummaryDto]) -> String {
    let items = articles.iter().fold(String::new(), |mut out, article| {
        let author = article
            .author_name
            .as_deref()
            .map(|name| format!(r#" <small class="author">by {}</small>"#, escape(name)))
            .unwrap_or_default();
        let _ = write!(
            out,
            r#"<li><a href="/articles/{}">{}</a>{author}</li>"#,
            article.id,
            escape(&article.title)
        );
        out
    });
    let content = if articles.is_empty() {
        r#"<p class="empty">No articles yet.</p>"#.to_string()
    } else {
        format!(r#"<ul class="articles">{items}</ul>"#)
    };
    layout(page, "Articles", &content)
}

pub fn show(page: &Page, detail: &ArticleDetailDto, is_owner: bool) -> String {
    let article = &detail.article;
    let controls = if is_owner {
        format!(
            r#"<hr><a class="btn" href="/articles/edit/{id}">Edit</a> <button class="btn btn-danger delete-article" data-id="{id}">Delete</button>"#,
            id = article.id
        )
    } else {
        String::new()
    };
    let content = format!(
        r#"<h5 class="author">Written by {author}</h5><div class="article-body">{body}</div>{controls}"#,
        author = escape(&detail.author_name),
        body = escape(&article.body),
    );
    layout(page, &article.title, &content)
}

fn article_form(action: &str, fields: &ArticleFields<'_>, errors: &[String]) -> String {
    format!(
        r#"{errors}<form method="POST" action="{action}">
<div class="form-group"><label for="title">Title</label><input id="title" name="title" type="text" value="{title}"></div>
<div class="form-group"><label for="body">Body</label><textarea id="body" name="body">{body}</textarea></div>
<input class="btn" type="submit" value="Submit">
</form>"#,
        errors = form_errors(errors),
        title = escape(fields.title),
        body = escape(fields.body),
    )
}

pub fn add_form(page: &Page, fields: &ArticleFields<'_>, errors: &[String]) -> String {
    layout(
        page,
        "Add Article",
        &article_form("/articles/add", fields, errors),
    )
}

pub fn edit_form(page: &Page, id: i64, fields: &ArticleFields<'_>, errors: &[String]) -> String {
    layout(
        page,
        "Edit Article",
        &article_form(&format!("/articles/edit/{id}"), fields, errors),
    )
}
