use super::{Page, escape, form_errors, layout};

/// Registration values echoed back after a rejected submission. Passwords
/// are never echoed.
#[derive(Debug, Clone, Default)]
pub struct RegisterFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub username: &'a str,
}

pub fn register_form(page: &Page, fields: &RegisterFields<'_>, errors: &[String]) -> String {
    let content = format!(
        r#"{errors}<form method="POST" action="/users/register">
<div class="form-group"><label for="name">Name</label><input id="name" name="name" type="text" value="{name}"></div>
<div class="form-group"><label for="email">Email</label><input id="email" name="email" type="email" value="{email}"></div>
<div class="form-group"><label for="username">Username</label><input id="username" name="username" type="text" value="{username}"></div>
<div class="form-group"><label for="password">Password</label><input id="password" name="password" type="password"></div>
<div class="form-group"><label for="password2">Confirm Password</label><input id="password2" name="password2" type="password"></div>
<input class="btn" type="submit" value="Submit">
</form>"#,
        errors = form_errors(errors),
        name = escape(fields.name),
        email = escape(fields.email),
        username = escape(fields.username),
    );
    layout(page, "Register", &content)
}

pub fn login_form(page: &Page) -> String {
    let content = r#"<form method="POST" action="/users/login">
<div class="form-group"><label for="username">Username</label><input id="username" name="username" type="text"></div>
<div class="form-group"><label for="password">Password</label><input id="password" name="password" type="password"></div>
<input class="btn" type="submit" value="Submit">
</form>"#;
    layout(page, "Login", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_keeps_entered_values() {
        let fields = RegisterFields {
            name: "Ada <Lovelace>",
            email: "ada@example.com",
            username: "ada",
        };
        let html = register_form(
            &Page::default(),
            &fields,
            &["Passwords do not match".into()],
        );
        assert!(html.contains(r#"value="Ada &lt;Lovelace&gt;""#));
        assert!(html.contains(r#"value="ada@example.com""#));
        assert!(html.contains("<li>Passwords do not match</li>"));
        assert!(html.contains(r#"name="password2""#));
    }

    #[test]
    fn login_form_posts_to_login() {
        let html = login_form(&Page::default());
        assert!(html.contains("<title>Login | Quire</title>"));
        assert!(html.contains(r#"action="/users/login""#));
    }
}
