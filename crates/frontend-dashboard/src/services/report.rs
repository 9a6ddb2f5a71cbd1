//! Report generation service

use async_trait::async_trait;
use portal_frontend_common::client::{create_authenticated_client, ClientError};
use portal_frontend_common::PortalConfig;
use portal_http::GeneratedReport;

/// Anything that can turn a session identifier into a generated report
#[async_trait(?Send)]
pub trait ReportService {
    async fn generate(&self, token: &str, session_id: &str)
        -> Result<GeneratedReport, ClientError>;
}

/// Report service backed by the portal HTTP API
#[derive(Clone, Debug)]
pub struct HttpReportService {
    config: PortalConfig,
}

impl HttpReportService {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ReportService for HttpReportService {
    async fn generate(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<GeneratedReport, ClientError> {
        let client = create_authenticated_client(&self.config, token)?;
        client.generate_report(session_id).await
    }
}
