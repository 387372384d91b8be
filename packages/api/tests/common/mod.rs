//! In-process stand-in for the task management server.
//!
//! Implements just enough of the REST surface for the client tests: users,
//! bearer tokens of the form `token-<user_id>`, projects with owner checks,
//! members and nested tasks. State lives in a mutex shared with the test so
//! assertions can look at what the server saw.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiConfig};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::MemoryStore;

pub const TIMESTAMP: &str = "2024-05-01T10:00:00";

#[derive(Default)]
pub struct Backend {
    pub users: Vec<Value>,
    pub passwords: HashMap<String, String>,
    pub projects: Vec<Value>,
    pub members: Vec<Value>,
    pub tasks: Vec<Value>,
    next_id: i64,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_user(&mut self, username: &str, name: &str, password: &str) -> i64 {
        let id = self.next_id();
        self.users.push(json!({"id": id, "username": username, "name": name}));
        self.passwords.insert(username.to_string(), password.to_string());
        id
    }

    fn user(&self, id: i64) -> Option<Value> {
        self.users.iter().find(|u| u["id"] == id).cloned()
    }

    fn project_index(&self, id: i64) -> Option<usize> {
        self.projects.iter().position(|p| p["id"] == id)
    }

    fn project_detail(&self, project: &Value) -> Value {
        let id = project["id"].as_i64().unwrap_or_default();
        let owner = project["owner_id"].as_i64().and_then(|o| self.user(o));
        let members: Vec<Value> = self
            .members
            .iter()
            .filter(|m| m["project_id"] == id)
            .map(|m| {
                let user = m["user_id"].as_i64().and_then(|u| self.user(u)).unwrap_or(Value::Null);
                json!({
                    "id": m["id"],
                    "user_id": m["user_id"],
                    "username": user["username"],
                    "name": user["name"],
                    "role": m["role"],
                })
            })
            .collect();
        let tasks: Vec<Value> = self.tasks.iter().filter(|t| t["project_id"] == id).cloned().collect();

        let mut detail = project.clone();
        detail["owner"] = owner.unwrap_or(Value::Null);
        detail["members"] = Value::Array(members);
        detail["tasks"] = Value::Array(tasks);
        detail
    }
}

pub type Shared = Arc<Mutex<Backend>>;

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn unauthorized() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

/// The user a bearer token belongs to.
fn authed(backend: &Backend, headers: &HeaderMap) -> Result<Value, Response> {
    let header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(unauthorized)?;
    let id = header
        .strip_prefix("Bearer token-")
        .and_then(|id| id.parse::<i64>().ok())
        .ok_or_else(unauthorized)?;
    backend.user(id).ok_or_else(unauthorized)
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    let username = body["username"].as_str().unwrap_or_default().to_string();
    if backend.passwords.contains_key(&username) {
        return detail(StatusCode::BAD_REQUEST, "Username already exists");
    }
    let id = backend.add_user(
        &username,
        body["name"].as_str().unwrap_or_default(),
        body["password"].as_str().unwrap_or_default(),
    );
    if let Some(email) = body.get("email") {
        if let Some(user) = backend.users.iter_mut().find(|u| u["id"] == id) {
            user["email"] = email.clone();
        }
    }
    let user = backend.user(id).unwrap();
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let backend = state.lock().unwrap();
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if backend.passwords.get(username).map(String::as_str) != Some(password) {
        return unauthorized();
    }
    let user = backend.users.iter().find(|u| u["username"] == username).unwrap();
    Json(json!({
        "access_token": format!("token-{}", user["id"]),
        "token_type": "bearer",
        "user_id": user["id"],
        "username": user["username"],
    }))
    .into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = state.lock().unwrap();
    match authed(&backend, &headers) {
        Ok(user) => Json(user).into_response(),
        Err(resp) => resp,
    }
}

async fn list_users(State(state): State<Shared>) -> Response {
    Json(state.lock().unwrap().users.clone()).into_response()
}

async fn get_user(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    match state.lock().unwrap().user(id) {
        Some(user) => Json(user).into_response(),
        None => detail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let me = match authed(&backend, &headers) {
        Ok(me) => me,
        Err(resp) => return resp,
    };
    if me["id"] != id {
        return detail(StatusCode::FORBIDDEN, "Not authorized to update this user");
    }
    let Some(user) = backend.users.iter_mut().find(|u| u["id"] == id) else {
        return detail(StatusCode::NOT_FOUND, "User not found");
    };
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            if key != "password" {
                user[key] = value.clone();
            }
        }
    }
    Json(user.clone()).into_response()
}

async fn delete_user(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().unwrap();
    let me = match authed(&backend, &headers) {
        Ok(me) => me,
        Err(resp) => return resp,
    };
    if me["id"] != id {
        return detail(StatusCode::FORBIDDEN, "Not authorized to delete this user");
    }
    backend.users.retain(|u| u["id"] != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn create_project(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    let me = match authed(&backend, &headers) {
        Ok(me) => me,
        Err(resp) => return resp,
    };
    let id = backend.next_id();
    let project = json!({
        "id": id,
        "name": body["name"],
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "owner_id": me["id"],
        "created_at": TIMESTAMP,
    });
    backend.projects.push(project.clone());
    let member_id = backend.next_id();
    backend.members.push(json!({"id": member_id, "project_id": id, "user_id": me["id"], "role": "owner"}));
    let detail = backend.project_detail(&project);
    (StatusCode::CREATED, Json(detail)).into_response()
}

async fn list_projects(State(state): State<Shared>, Query(params): Query<HashMap<String, String>>) -> Response {
    let backend = state.lock().unwrap();
    let user_id = params.get("user_id").and_then(|u| u.parse::<i64>().ok());
    let list: Vec<Value> = backend
        .projects
        .iter()
        .filter(|p| match user_id {
            Some(uid) => backend
                .members
                .iter()
                .any(|m| m["project_id"] == p["id"] && m["user_id"] == uid),
            None => true,
        })
        .map(|p| {
            let owner = p["owner_id"].as_i64().and_then(|o| backend.user(o)).unwrap_or(Value::Null);
            let member_count = backend.members.iter().filter(|m| m["project_id"] == p["id"]).count();
            json!({
                "id": p["id"],
                "name": p["name"],
                "owner_id": p["owner_id"],
                "owner_name": owner["name"],
                "created_at": p["created_at"],
                "member_count": member_count,
                "task_count": 0,
            })
        })
        .collect();
    Json(list).into_response()
}

async fn get_project(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    let backend = state.lock().unwrap();
    if let Err(resp) = authed(&backend, &headers) {
        return resp;
    }
    match backend.project_index(id) {
        Some(i) => Json(backend.project_detail(&backend.projects[i])).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Project not found"),
    }
}

/// Index of a project the caller owns, or the error response to send.
fn owned_project(backend: &Backend, headers: &HeaderMap, id: i64) -> Result<usize, Response> {
    let me = authed(backend, headers)?;
    let index = backend
        .project_index(id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Project not found"))?;
    if backend.projects[index]["owner_id"] != me["id"] {
        return Err(detail(StatusCode::FORBIDDEN, "Not authorized to modify this project"));
    }
    Ok(index)
}

async fn update_project(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let index = match owned_project(&backend, &headers, id) {
        Ok(index) => index,
        Err(resp) => return resp,
    };
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            backend.projects[index][key] = value.clone();
        }
    }
    let project = backend.projects[index].clone();
    Json(backend.project_detail(&project)).into_response()
}

async fn delete_project(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().unwrap();
    let index = match owned_project(&backend, &headers, id) {
        Ok(index) => index,
        Err(resp) => return resp,
    };
    backend.projects.remove(index);
    backend.members.retain(|m| m["project_id"] != id);
    backend.tasks.retain(|t| t["project_id"] != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn add_member(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = owned_project(&backend, &headers, id) {
        return resp;
    }
    let Some(user_id) = body["user_id"].as_i64() else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "user_id required");
    };
    if backend.user(user_id).is_none() {
        return detail(StatusCode::NOT_FOUND, "User not found");
    }
    let member_id = backend.next_id();
    let member = json!({"id": member_id, "project_id": id, "user_id": user_id, "role": body["role"], "joined_at": TIMESTAMP});
    backend.members.push(member.clone());
    (StatusCode::CREATED, Json(member)).into_response()
}

async fn list_members(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let backend = state.lock().unwrap();
    let members: Vec<Value> = backend.members.iter().filter(|m| m["project_id"] == id).cloned().collect();
    Json(members).into_response()
}

async fn update_member(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, member_id)): Path<(i64, i64)>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = owned_project(&backend, &headers, id) {
        return resp;
    }
    match backend
        .members
        .iter_mut()
        .find(|m| m["id"] == member_id && m["project_id"] == id)
    {
        Some(member) => {
            member["role"] = body["role"].clone();
            Json(member.clone()).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Member not found"),
    }
}

async fn remove_member(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, member_id)): Path<(i64, i64)>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = owned_project(&backend, &headers, id) {
        return resp;
    }
    let before = backend.members.len();
    backend.members.retain(|m| !(m["id"] == member_id && m["project_id"] == id));
    if backend.members.len() == before {
        return detail(StatusCode::NOT_FOUND, "Member not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn create_task(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = authed(&backend, &headers) {
        return resp;
    }
    if backend.project_index(id).is_none() {
        return detail(StatusCode::NOT_FOUND, "Project not found");
    }
    let task_id = backend.next_id();
    let task = json!({
        "id": task_id,
        "title": body["title"],
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "status": "To Do",
        "assignee_id": body.get("assignee_id").cloned().unwrap_or(Value::Null),
        "project_id": id,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    });
    backend.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn list_tasks(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let backend = state.lock().unwrap();
    let tasks: Vec<Value> = backend.tasks.iter().filter(|t| t["project_id"] == id).cloned().collect();
    Json(tasks).into_response()
}

async fn update_task(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, task_id)): Path<(i64, i64)>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = authed(&backend, &headers) {
        return resp;
    }
    let Some(task) = backend
        .tasks
        .iter_mut()
        .find(|t| t["id"] == task_id && t["project_id"] == id)
    else {
        return detail(StatusCode::NOT_FOUND, "Task not found");
    };
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            task[key] = value.clone();
        }
    }
    Json(task.clone()).into_response()
}

async fn delete_task(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((id, task_id)): Path<(i64, i64)>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(resp) = authed(&backend, &headers) {
        return resp;
    }
    let before = backend.tasks.len();
    backend.tasks.retain(|t| !(t["id"] == task_id && t["project_id"] == id));
    if backend.tasks.len() == before {
        return detail(StatusCode::NOT_FOUND, "Task not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn broken() -> Response {
    (StatusCode::OK, "definitely not json").into_response()
}

async fn teapot() -> Response {
    StatusCode::IM_A_TEAPOT.into_response()
}

pub fn router(state: Shared) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/me", post(me))
        .route("/users/", get(list_users))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/projects/", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{id}/members", get(list_members).post(add_member))
        .route(
            "/projects/{id}/members/{member_id}",
            put(update_member).delete(remove_member),
        )
        .route("/projects/{id}/tasks/", get(list_tasks).post(create_task))
        .route(
            "/projects/{id}/tasks/{task_id}",
            put(update_task).delete(delete_task),
        )
        .route("/broken", get(broken))
        .route("/teapot", get(teapot))
        .with_state(state)
}

/// Start the fake server with `alice` (password `pw`) registered.
/// Returns its base URL and a handle on its state.
pub async fn spawn_backend() -> (String, Shared) {
    let mut backend = Backend::default();
    backend.add_user("alice", "Alice", "pw");
    let state: Shared = Arc::new(Mutex::new(backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

pub fn client_for(base_url: &str, storage: MemoryStore) -> ApiClient {
    ApiClient::new(ApiConfig::new(base_url).unwrap(), Arc::new(storage))
}
