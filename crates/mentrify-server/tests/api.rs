use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mentrify_server::storage::MemoryBackend;
use mentrify_server::{create_router, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState {
        storage: Arc::new(MemoryBackend::default()),
        config: Config::immediate(),
    })
}

/// A browser profile: remembers the client cookie the server hands out.
struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    fn new(app: &Router) -> Self {
        Self {
            app: app.clone(),
            cookie: None,
        }
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let mut request = builder.body(body).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));

        let response = self.app.clone().oneshot(request).await.unwrap();
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    async fn login(&mut self, email: &str, password: &str) -> (StatusCode, Value) {
        self.post(
            "/api/v1/auth/login",
            json!({ "email": email, "password": password }),
        )
        .await
    }
}

#[tokio::test]
async fn health_is_plain() {
    let app = app();
    let mut browser = Browser::new(&app);
    let (status, body) = browser.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert!(browser.cookie.is_none());
}

#[tokio::test]
async fn first_request_issues_client_cookie() {
    let app = app();
    let mut browser = Browser::new(&app);
    let (status, body) = browser.get("/api/v1/mentors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    let cookie = browser.cookie.clone().unwrap();
    assert!(cookie.starts_with("mentrify_client="));

    browser.get("/api/v1/mentors").await;
    assert_eq!(browser.cookie.unwrap(), cookie);
}

#[tokio::test]
async fn login_me_logout() {
    let app = app();
    let mut browser = Browser::new(&app);

    let (status, _) = browser.get("/api/v1/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = browser.login("demo@example.com", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");

    let (status, body) = browser.login("demo@example.com", "demo123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "mentee");

    let (status, body) = browser.get("/api/v1/auth/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "demo@example.com");
    assert_eq!(body["firstName"], "Demo");

    let (status, _) = browser.post("/api/v1/auth/logout", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = browser.get("/api/v1/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn browsers_do_not_share_users() {
    let app = app();
    let mut alice = Browser::new(&app);
    let mut bob = Browser::new(&app);

    alice.login("mentor@example.com", "mentor123").await;
    bob.get("/api/v1/mentors").await;

    assert_eq!(alice.get("/api/v1/auth/me").await.0, StatusCode::OK);
    assert_eq!(bob.get("/api/v1/auth/me").await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_validates_and_signs_in() {
    let app = app();
    let mut browser = Browser::new(&app);
    let mut form = json!({
        "username": "kavya_r",
        "password": "12345",
        "firstName": "Kavya",
        "lastName": "Rao",
        "email": "kavya@example.com",
        "phone": "9999999999",
        "role": "mentor",
        "brief": "Third year at IIT Bombay",
        "dob": "2004-01-01"
    });

    let (status, body) = browser.post("/api/v1/auth/register", form.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Password must be at least 6 characters long");

    form["password"] = json!("123456");
    let (status, body) = browser.post("/api/v1/auth/register", form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Kavya Rao");
    assert_eq!(body["total_sessions"], 0);

    let (_, me) = browser.get("/api/v1/auth/me").await;
    assert_eq!(me["role"], "mentor");
    assert_eq!(me["session_cost"], 50);
}

#[tokio::test]
async fn mentor_directory_filters() {
    let app = app();
    let mut browser = Browser::new(&app);

    let (_, body) = browser.get("/api/v1/mentors?stream=Medical").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Sneha Patel"]);

    let (_, body) = browser.get("/api/v1/mentors?college=all&search=reddy").await;
    assert_eq!(body[0]["college"], "BITS Pilani");

    let (status, body) = browser.get("/api/v1/mentors/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Priya Singh");

    let (status, body) = browser.get("/api/v1/mentors/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Mentor not found");
}

#[tokio::test]
async fn booking_wizard_over_http() {
    let app = app();
    let mut browser = Browser::new(&app);

    let (status, options) = browser.get("/api/v1/booking/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["dates"].as_array().unwrap().len(), 7);
    assert_eq!(options["times"].as_array().unwrap().len(), 8);

    let (status, body) = browser
        .post("/api/v1/mentors/1/booking/confirm", json!({ "date": "2024-01-15" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please select a date and time");

    let (status, _) = browser
        .post(
            "/api/v1/mentors/1/booking/confirm",
            json!({ "date": "2024-01-17", "time": "09:00 AM" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let selection = json!({ "date": "2024-01-15", "time": "09:00 AM" });
    let (status, body) = browser
        .post("/api/v1/mentors/1/booking/confirm", selection.clone())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "confirm");
    assert_eq!(body["price"], 100);
    assert_eq!(body["duration_minutes"], 45);

    let (status, body) = browser
        .post("/api/v1/mentors/1/booking/pay", selection.clone())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "success");
    assert_eq!(body["step_number"], 3);

    let (status, _) = browser
        .post("/api/v1/mentors/77/booking/pay", selection)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mentor_edits_availability() {
    let app = app();
    let mut browser = Browser::new(&app);
    browser.login("mentor@example.com", "mentor123").await;
    let base = "/api/v1/profiles/mentors/mentor@example.com";

    let (status, view) = browser.get(base).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["editable"], true);
    assert_eq!(view["profile"]["availability"].as_array().unwrap().len(), 2);

    let (status, profile) = browser.post(&format!("{base}/slots"), json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        profile["availability"][2],
        json!({ "day": 1, "start": "09:00", "end": "10:00" })
    );

    let (status, profile) = browser
        .put(&format!("{base}/slots/2"), json!({ "field": "day", "value": 6 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["availability"][2]["day"], 6);

    let (status, profile) = browser
        .post(&format!("{base}/slots/2/duplicate"), json!({}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["availability"].as_array().unwrap().len(), 4);

    let (_, profile) = browser.delete(&format!("{base}/slots/0")).await;
    assert_eq!(profile["availability"].as_array().unwrap().len(), 3);
    assert_eq!(profile["availability"][0]["day"], 4);

    let (status, profile) = browser
        .post(
            &format!("{base}/exceptions"),
            json!({ "date": "2025-01-01", "reason": "New Year" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let dates: Vec<&str> = profile["recurring_settings"]["exceptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2025-01-01", "2025-12-25"]);

    let (status, _) = browser
        .post(&format!("{base}/exceptions"), json!({ "date": "2025-02-02" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = browser.delete(&format!("{base}/exceptions/9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, profile) = browser
        .put(&format!("{base}/recurring"), json!({ "duration": 6, "enabled": false }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["recurring_settings"]["duration"], 6);
    assert_eq!(profile["recurring_settings"]["enabled"], false);

    let (_, view) = browser.get(base).await;
    assert_eq!(view["profile"]["availability"].as_array().unwrap().len(), 3);

    let (_, me) = browser.get("/api/v1/auth/me").await;
    assert_eq!(me["id"], "mentor@example.com");
    assert_eq!(me["availability"].as_array().unwrap().len(), 3);

    let (status, profile) = browser.delete(base).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["availability"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn profiles_are_guarded() {
    let app = app();
    let mut browser = Browser::new(&app);

    let (status, _) = browser.get("/api/v1/profiles/mentors/mentor-demo").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    browser.login("demo@example.com", "demo123").await;
    let (status, view) = browser.get("/api/v1/profiles/mentors/mentor-demo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["editable"], false);

    let (status, _) = browser
        .post("/api/v1/profiles/mentors/mentor-demo/slots", json!({}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A mentee's own id on the mentor route is still read-only.
    let (status, view) = browser.get("/api/v1/profiles/mentors/demo@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["editable"], false);

    let (_, view) = browser.get("/api/v1/profiles/mentees/demo@example.com").await;
    assert_eq!(view["editable"], true);
    let mut profile = view["profile"].clone();
    profile["brief"] = json!("Preparing for GATE");
    let (status, saved) = browser
        .put("/api/v1/profiles/mentees/demo@example.com", profile)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["brief"], "Preparing for GATE");
}

#[tokio::test]
async fn dashboard_by_role() {
    let app = app();
    let mut browser = Browser::new(&app);
    browser.login("mentor@example.com", "mentor123").await;

    let (status, body) = browser.get("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["journey"], "mentoring");
    assert_eq!(body["stats"][1]["value"], "24");
    assert_eq!(body["stats"][3]["value"], "₹600");
}

#[tokio::test]
async fn mentor_application_is_accepted() {
    let app = app();
    let mut browser = Browser::new(&app);

    let (status, _) = browser
        .post("/api/v1/mentor-applications", json!({ "name": "Dev" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = browser
        .post(
            "/api/v1/mentor-applications",
            json!({
                "name": "Dev Malhotra",
                "email": "dev@example.com",
                "college": "DTU",
                "course": "IT",
                "year": "2nd Year",
                "motivation": "Paying it forward"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["ok"], true);
}
