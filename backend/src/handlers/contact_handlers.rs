use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::models::contact_models::ContactSubmission;
use crate::AppState;

/// Plain-text body of the outbound email, every field labeled by name.
fn render_email_body(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission:\n\n\
         Name: {}\n\
         Email: {}\n\
         Mobile: {}\n\
         Company: {}\n\
         Budget Range: {}\n\n\
         Requirements:\n{}\n",
        submission.name,
        submission.email,
        submission.mobile,
        submission.company,
        submission.budget,
        submission.requirements,
    )
}

/// POST /api/contact. Validates the submission, renders it into the contact
/// email and hands it to the mailer. One delivery attempt per request; a
/// repeated request sends a second independent email.
///
/// The frontend runs the same validation before calling here, but this is a
/// public route so the payload is never trusted to be well-formed.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let errors = submission.validate();
    if !errors.is_empty() {
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .iter()
            .map(|e| (e.field().to_string(), json!(e.message())))
            .collect();
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Invalid form submission",
                "errors": fields,
            })),
        ));
    }

    let subject = format!("New Contact Form Submission from {}", submission.name);
    let body = render_email_body(&submission);

    match state.mailer.send_text(&subject, &body).await {
        Ok(()) => Ok(Json(json!({"message": "Form submitted successfully"}))),
        Err(e) => {
            tracing::error!("Error processing contact form: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Error processing form submission"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mailer::{Mailer, MockMailer};
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(mock: MockMailer) -> Router {
        let state = Arc::new(AppState {
            mailer: Arc::new(mock) as Arc<dyn Mailer>,
        });
        Router::new()
            .route("/api/contact", post(submit_contact))
            .with_state(state)
    }

    fn contact_request(payload: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn jane_payload() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "mobile": "555-0100",
            "email": "jane@example.com",
            "company": "Acme",
            "budget": "$10,000 - $25,000",
            "requirements": "Need a chatbot",
        })
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_sends_one_email_and_returns_200() {
        let mut mock = MockMailer::new();
        mock.expect_send_text()
            .times(1)
            .withf(|subject, body| {
                subject == "New Contact Form Submission from Jane Doe"
                    && body.contains("Name: Jane Doe")
                    && body.contains("Email: jane@example.com")
                    && body.contains("Mobile: 555-0100")
                    && body.contains("Company: Acme")
                    && body.contains("Budget Range: $10,000 - $25,000")
                    && body.contains("Need a chatbot")
            })
            .returning(|_, _| Ok(()));

        let response = app(mock).oneshot(contact_request(jane_payload())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({"message": "Form submitted successfully"})
        );
    }

    #[tokio::test]
    async fn mailer_failure_maps_to_generic_500() {
        let mut mock = MockMailer::new();
        mock.expect_send_text()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("email provider unavailable")));

        let response = app(mock).oneshot(contact_request(jane_payload())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response_json(response).await,
            json!({"message": "Error processing form submission"})
        );
    }

    #[tokio::test]
    async fn blank_field_is_rejected_without_dispatch() {
        // No expectation set: any call to the mock fails the test.
        let mock = MockMailer::new();
        let mut payload = jane_payload();
        payload["name"] = json!("   ");

        let response = app(mock).oneshot(contact_request(payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Invalid form submission");
        assert_eq!(body["errors"]["name"], "Name is required");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_without_dispatch() {
        let mock = MockMailer::new();
        let mut payload = jane_payload();
        payload["email"] = json!("not-an-email");

        let response = app(mock).oneshot(contact_request(payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["errors"]["email"], "Invalid email format");
        assert!(body["errors"].get("name").is_none());
    }

    #[tokio::test]
    async fn payload_missing_a_field_never_reaches_the_mailer() {
        let mock = MockMailer::new();
        let mut payload = jane_payload();
        payload.as_object_mut().unwrap().remove("budget");

        let response = app(mock).oneshot(contact_request(payload)).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[test]
    fn email_body_lists_every_field_under_its_label() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            mobile: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme".to_string(),
            budget: "$10,000 - $25,000".to_string(),
            requirements: "Need a chatbot".to_string(),
        };
        let body = render_email_body(&submission);
        assert!(body.starts_with("New Contact Form Submission:"));
        for line in [
            "Name: Jane Doe",
            "Email: jane@example.com",
            "Mobile: 555-0100",
            "Company: Acme",
            "Budget Range: $10,000 - $25,000",
            "Requirements:\nNeed a chatbot",
        ] {
            assert!(body.contains(line), "missing {:?}", line);
        }
    }
}
