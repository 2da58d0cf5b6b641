use crate::middleware::authorization::{GuardMiddleware, Policy};

use std::cell::RefCell;
use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

/// Authorization gate holding an ordered chain of [`Policy`] checks.
/// Wrap it inside the authentication `Manager` so the identity is attached
/// before any policy runs.
pub struct Guard {
    policies: Vec<Rc<dyn Policy>>,
}

impl Guard {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn policy(mut self, policy: impl Policy + 'static) -> Self {
        self.policies.push(Rc::new(policy));
        self
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for Guard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = GuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GuardMiddleware {
            service: Rc::new(RefCell::new(service)),
            policies: Rc::new(self.policies.clone()),
        }))
    }
}
