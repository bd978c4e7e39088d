//! JSON client for the marketplace REST API.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AdminUser, AppError, BulkActionResult, BulkUserActionRequest, ClientConfig,
    CreateTestimonialRequest, EventType, Experiment, FeatureFlags, ModerateTestimonialRequest,
    ModerationStatus, PageQuery, PaginatedResponse, SecurityEvent, ServiceSuggestion,
    ServiceSuggestions, Subscription, Testimonial,
};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Query-string pairs for a paginated request.
fn page_params(query: PageQuery) -> Vec<(&'static str, String)> {
    vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ]
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.config.endpoint(path);
        debug!(%url, %method, "sending");
        let response = self
            .http
            .request(method, &url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "API request failed");
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Malformed API response: {e}")))
    }

    // ── Users ──────────────────────────────────────────────

    pub async fn list_users(&self, query: PageQuery) -> Result<PaginatedResponse<AdminUser>, AppError> {
        self.get_json("/api/admin/users", &page_params(query)).await
    }

    pub async fn bulk_user_action(
        &self,
        request: &BulkUserActionRequest,
    ) -> Result<BulkActionResult, AppError> {
        self.send_json(Method::POST, "/api/admin/users/bulk", request)
            .await
    }

    // ── Testimonials ───────────────────────────────────────

    pub async fn list_testimonials(
        &self,
        status: ModerationStatus,
        query: PageQuery,
    ) -> Result<PaginatedResponse<Testimonial>, AppError> {
        let mut params = page_params(query);
        params.push(("status", status.as_str().to_string()));
        self.get_json("/api/admin/testimonials", &params).await
    }

    pub async fn moderate_testimonial(
        &self,
        id: Uuid,
        request: &ModerateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let path = format!("/api/admin/testimonials/{id}/moderation");
        self.send_json(Method::PATCH, &path, request).await
    }

    pub async fn submit_testimonial(
        &self,
        request: &CreateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        self.send_json(Method::POST, "/api/testimonials", request)
            .await
    }

    // ── Subscriptions & security ───────────────────────────

    pub async fn list_subscriptions(
        &self,
        query: PageQuery,
    ) -> Result<PaginatedResponse<Subscription>, AppError> {
        self.get_json("/api/admin/subscriptions", &page_params(query))
            .await
    }

    pub async fn list_security_events(
        &self,
        query: PageQuery,
    ) -> Result<PaginatedResponse<SecurityEvent>, AppError> {
        self.get_json("/api/admin/security/events", &page_params(query))
            .await
    }

    // ── Recommendations ────────────────────────────────────

    pub async fn service_suggestions(
        &self,
        event_type: EventType,
    ) -> Result<Vec<ServiceSuggestion>, AppError> {
        let params = [("event_type", event_type.as_str().to_string())];
        self.get_json("/api/recommendations/services", &params)
            .await
    }

    pub async fn list_experiments(&self) -> Result<Vec<Experiment>, AppError> {
        self.get_json("/api/recommendations/experiments", &[]).await
    }

    /// Model suggestions when enabled and available, the static rule table
    /// otherwise.
    pub async fn suggestions_with_fallback(&self, event_type: EventType) -> ServiceSuggestions {
        let response = if self.config.features.ai_recommendations {
            Some(self.service_suggestions(event_type).await)
        } else {
            None
        };
        choose_suggestions(event_type, self.config.features, response)
    }
}

/// Pick between a model response and the rule table.
fn choose_suggestions(
    event_type: EventType,
    flags: FeatureFlags,
    response: Option<Result<Vec<ServiceSuggestion>, AppError>>,
) -> ServiceSuggestions {
    if !flags.ai_recommendations {
        return ServiceSuggestions::from_rules(event_type);
    }
    match response {
        Some(Ok(suggestions)) if !suggestions.is_empty() => {
            ServiceSuggestions::from_model(event_type, suggestions)
        }
        Some(Ok(_)) => {
            debug!(event_type = event_type.as_str(), "model returned no suggestions");
            ServiceSuggestions::from_rules(event_type)
        }
        Some(Err(e)) => {
            warn!(event_type = event_type.as_str(), error = %e, "falling back to rule-based suggestions");
            ServiceSuggestions::from_rules(event_type)
        }
        None => ServiceSuggestions::from_rules(event_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ServiceCategory, SuggestionSource};

    fn flags(ai: bool) -> FeatureFlags {
        FeatureFlags {
            ai_recommendations: ai,
            ..FeatureFlags::default()
        }
    }

    #[test]
    fn page_params_carry_page_and_limit() {
        let params = page_params(PageQuery::new(Some(3), Some(50)));
        assert_eq!(
            params,
            vec![("page", "3".to_string()), ("limit", "50".to_string())]
        );
    }

    #[test]
    fn disabled_flag_uses_rules() {
        let model = vec![ServiceSuggestion {
            category: ServiceCategory::Music,
            confidence: 0.9,
            reason: String::new(),
        }];
        let chosen = choose_suggestions(EventType::Wedding, flags(false), Some(Ok(model)));
        assert_eq!(chosen.source, SuggestionSource::Rules);
    }

    #[test]
    fn model_response_wins_when_enabled() {
        let model = vec![ServiceSuggestion {
            category: ServiceCategory::Music,
            confidence: 0.9,
            reason: "Popular with similar events".to_string(),
        }];
        let chosen = choose_suggestions(EventType::Wedding, flags(true), Some(Ok(model)));
        assert_eq!(chosen.source, SuggestionSource::Model);
        assert_eq!(chosen.suggestions[0].category, ServiceCategory::Music);
    }

    #[test]
    fn errors_and_empty_responses_fall_back() {
        let err = choose_suggestions(
            EventType::Concert,
            flags(true),
            Some(Err(AppError::network("timeout"))),
        );
        assert_eq!(err.source, SuggestionSource::Rules);
        let empty = choose_suggestions(EventType::Concert, flags(true), Some(Ok(vec![])));
        assert_eq!(empty.source, SuggestionSource::Rules);
        assert_eq!(
            empty.suggestions[0].category,
            shared_types::rule_based_suggestions(EventType::Concert)[0]
        );
    }

    #[test]
    fn clients_compare_by_config() {
        let a = ApiClient::new(ClientConfig::default());
        let b = ApiClient::new(ClientConfig::default());
        assert!(a == b);
        assert_eq!(a.config().api_base_url, "http://localhost:8080");
    }
}
