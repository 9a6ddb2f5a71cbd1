//! Report generation API client methods

use super::{AuthenticatedPortalClient, ClientError};
use crate::types::{GenerateReportResponse, GeneratedReport};

impl AuthenticatedPortalClient {
    /// Ask the report service to generate the report for `session_id`
    ///
    /// The returned URL is absolute, resolved against this client's base URL.
    pub async fn generate_report(&self, session_id: &str) -> Result<GeneratedReport, ClientError> {
        tracing::debug!(session_id, "requesting report generation");
        let request = self.request(
            reqwest::Method::GET,
            &format!("/api/reports/generate/{session_id}"),
        );
        let response: GenerateReportResponse = self.execute(request).await?;
        Ok(GeneratedReport::resolve(self.base_url(), &response))
    }
}
