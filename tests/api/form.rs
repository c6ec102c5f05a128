use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn form_page_is_rendered() {
    let app = spawn_app().await;

    let response = get_client()
        .get(format!("{}/form", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"action="/submit-form""#));
    assert!(page.contains(r#"name="username""#));
    assert!(page.contains(r#"name="password""#));
    assert!(!page.contains("field is required"));
}

#[tokio::test]
async fn submit_form_returns_200_for_valid_data() {
    let app = spawn_app().await;

    let response = app
        .post_form(
            "/submit-form",
            &[("username", "alice"), ("password", "secret")],
        )
        .await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("OK", response.text().await.unwrap());
}

#[tokio::test]
async fn submit_form_rejects_an_empty_submission() {
    let app = spawn_app().await;

    let response = app.post_submit_form("{}").await;
    assert_eq!(400, response.status().as_u16());

    let page = response.text().await.unwrap();
    assert!(page.contains("The username field is required."));
    assert!(page.contains("The password field is required."));
}

#[tokio::test]
async fn submit_form_keeps_the_typed_username() {
    let app = spawn_app().await;

    let response = app
        .post_form("/submit-form", &[("username", "alice"), ("password", "")])
        .await;
    assert_eq!(400, response.status().as_u16());

    let page = response.text().await.unwrap();
    assert!(page.contains(r#"value="alice""#));
    assert!(page.contains("The password field is required."));
    assert!(!page.contains("The username field is required."));
}

#[tokio::test]
async fn submit_form_escapes_the_echoed_username() {
    let app = spawn_app().await;

    let response = app
        .post_form("/submit-form", &[("username", "<b>alice</b>"), ("password", "")])
        .await;
    assert_eq!(400, response.status().as_u16());

    let page = response.text().await.unwrap();
    assert!(!page.contains("<b>alice</b>"));
}

#[tokio::test]
async fn an_empty_request_to_submit_form_is_rejected() {
    let app = spawn_app().await;

    let response = app.post_raw("/submit-form", None, "").await;

    assert_eq!(400, response.status().as_u16());
}
