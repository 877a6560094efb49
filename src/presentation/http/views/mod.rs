// src/presentation/http/views/mod.rs
//! Server-rendered HTML. Every piece of user-provided text goes through
//! [`escape`] before it reaches the markup.

pub mod articles;
pub mod users;

use crate::application::dto::{AuthenticatedUser, FlashMessage};
use std::fmt::Write as _;

/// Per-request data every page needs: who is logged in and which flash
/// messages are waiting to be shown.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub user: Option<AuthenticatedUser>,
    pub flashes: Vec<FlashMessage>,
}

impl Page {
    pub fn new(user: Option<AuthenticatedUser>, flashes: Vec<FlashMessage>) -> Self {
        Self { user, flashes }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn nav(user: Option<&AuthenticatedUser>) -> String {
    let links = match user {
        Some(_) => {
            r#"<li><a href="/articles/add">Add Article</a></li><li><a href="/users/logout">Logout</a></li>"#
        }
        None => {
            r#"<li><a href="/users/register">Register</a></li><li><a href="/users/login">Login</a></li>"#
        }
    };
    format!(
        r#"<nav><a class="brand" href="/">Quire</a><ul><li><a href="/">Home</a></li>{links}</ul></nav>"#
    )
}

fn flashes(messages: &[FlashMessage]) -> String {
    messages.iter().fold(String::new(), |mut out, flash| {
        let _ = write!(
            out,
            r#"<div class="alert alert-{}">{}</div>"#,
            flash.kind.as_str(),
            escape(&flash.message)
        );
        out
    })
}

/// Validation messages shown above a re-rendered form.
pub(crate) fn form_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items = errors.iter().fold(String::new(), |mut out, message| {
        let _ = write!(out, "<li>{}</li>", escape(message));
        out
    });
    format!(r#"<div class="alert alert-danger"><ul class="errors">{items}</ul></div>"#)
}

pub(crate) fn layout(page: &Page, title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Quire</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
{nav}
<main class="container">
{flashes}
<h1>{title}</h1>
{content}
</main>
<script src="/js/main.js"></script>
</body>
</html>
"#,
        title = escape(title),
        nav = nav(page.user.as_ref()),
        flashes = flashes(&page.flashes),
    )
}
