use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use directory::{EmployeeFetchService, HttpUserSource};
use serde_json::{json, Value};
use shared_types::DirectoryConfig;
use tokio::net::TcpListener;

/// Three well-formed users in the shape the live directory returns.
pub fn sample_users() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv",
            "address": { "city": "Wisokyburgh" },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net"
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "email": "Nathan@yesenia.net",
            "address": { "city": "McKenziehaven" },
            "phone": "1-463-123-4447",
            "website": "ramiro.info"
        }
    ])
}

/// A router answering `GET /users` with a fixed status and raw body.
pub fn users_router(status: StatusCode, body: impl Into<String>) -> Router {
    let body: String = body.into();
    Router::new().route(
        "/users",
        get(move || {
            let body = body.clone();
            async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
        }),
    )
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server crashed");
    });

    format!("http://{addr}")
}

/// Serve `router` and build a fetch service pointed at its `/users` route.
pub async fn service_for(router: Router) -> EmployeeFetchService<HttpUserSource> {
    let base = serve(router).await;
    let config = DirectoryConfig {
        users_endpoint: format!("{base}/users"),
    };
    EmployeeFetchService::from_config(&config)
}

/// An endpoint on a port nothing listens on.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/users")
}
