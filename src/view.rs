//! Render contexts for the server-rendered pages.
//!
//! Each struct is an askama template bound to a file under `templates/`. A
//! context lives for exactly one response: the company name comes from
//! configuration, the principal email from the request's [`CurrentUser`]
//! extension, and the flash message from the session.
//!
//! [`CurrentUser`]: crate::model::principal::CurrentUser

use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: &'static str,
    pub company: String,
    pub email: Option<String>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub page: &'static str,
    pub company: String,
    pub email: Option<String>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub company: String,
    pub email: Option<String>,
}
