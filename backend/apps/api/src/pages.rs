//! Server-rendered pages
//!
//! Thin HTML shells; the forms and the note list talk to `/api` from
//! the browser.

use auth::middleware::{AuthGate, CurrentUser, require_session};
use axum::{
    Router,
    extract::State,
    http::HeaderMap,
    middleware::from_fn_with_state,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

pub fn router(gate: AuthGate) -> Router {
    let protected = Router::new()
        .route("/", get(home))
        .route_layer(from_fn_with_state(gate.clone(), require_session));

    Router::new()
        .route("/login", get(login))
        .route("/register", get(register))
        .merge(protected)
        .with_state(gate)
}

/// GET /login
async fn login(State(gate): State<AuthGate>, headers: HeaderMap) -> Response {
    if gate.session(&headers).is_some() {
        return Redirect::to("/").into_response();
    }
    Html(LOGIN_PAGE).into_response()
}

/// GET /register
async fn register() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// GET /
async fn home(user: CurrentUser) -> Html<String> {
    Html(HOME_PAGE.replace("{{username}}", &escape_html(&user.username)))
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Sign in · Todo List</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main>
    <h1>Sign in</h1>
    <form id="login-form" data-endpoint="/api/login" data-next="/">
      <label>Username <input name="username" autocomplete="username" required></label>
      <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
      <button type="submit">Sign in</button>
      <p class="error" hidden></p>
    </form>
    <p>No account? <a href="/register">Register</a></p>
  </main>
  <script src="/static/app.js"></script>
</body>
</html>
"#;

const REGISTER_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Register · Todo List</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main>
    <h1>Create an account</h1>
    <form id="register-form" data-endpoint="/api/register" data-next="/login">
      <label>Username <input name="username" autocomplete="username" required></label>
      <label>Password <input name="password" type="password" autocomplete="new-password" required></label>
      <label>Email <input name="email" type="email" autocomplete="email" required></label>
      <label>Full name <input name="full_name" autocomplete="name" required></label>
      <button type="submit">Register</button>
      <p class="error" hidden></p>
    </form>
    <p>Already registered? <a href="/login">Sign in</a></p>
  </main>
  <script src="/static/app.js"></script>
</body>
</html>
"#;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Todo List</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header>
    <h1>Hello, {{username}}</h1>
    <button id="logout">Sign out</button>
  </header>
  <main>
    <form id="note-form">
      <input name="title" placeholder="Title" required>
      <textarea name="content" placeholder="What needs doing?" required></textarea>
      <button type="submit">Add</button>
      <p class="error" hidden></p>
    </form>
    <nav id="filters">
      <button data-status="">All</button>
      <button data-status="pending">Pending</button>
      <button data-status="completed">Completed</button>
    </nav>
    <ul id="notes"></ul>
  </main>
  <script src="/static/app.js"></script>
</body>
</html>
"#;
