use crate::modules::exam_modules::core::payload::ClassModulePayload;
use crate::modules::exam_modules::ports::{
    CREATE_EXAM_SHEET, CREATE_SURVEY_SHEET, ExamModuleService, ExamSheetEntry,
    GET_ALL_EXAM_MODULE, RemoteError, SurveySheetEntry,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

/// Studio API client over HTTP. Any non-2xx status is an error; there are no retries or timeouts.
#[derive(Debug, Clone)]
pub struct HttpExamModuleService {
    client: Client,
    base_url: String,
}

impl HttpExamModuleService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<(), RemoteError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }
    Ok(response)
}

#[async_trait]
impl ExamModuleService for HttpExamModuleService {
    async fn fetch_all(&self) -> Result<Vec<ClassModulePayload>, RemoteError> {
        let response = self
            .client
            .get(self.endpoint(GET_ALL_EXAM_MODULE))
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        ensure_success(response)?
            .json::<Vec<ClassModulePayload>>()
            .await
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }

    async fn create_exam_sheet(&self, entries: &[ExamSheetEntry]) -> Result<(), RemoteError> {
        self.post(CREATE_EXAM_SHEET, entries).await
    }

    async fn create_survey_sheet(&self, entries: &[SurveySheetEntry]) -> Result<(), RemoteError> {
        self.post(CREATE_SURVEY_SHEET, entries).await
    }
}
