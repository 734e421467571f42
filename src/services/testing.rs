// Transporte en memoria para tests: respuestas en cola + registro de requests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use crate::services::error::ApiError;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}
