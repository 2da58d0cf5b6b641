use crate::connectors::IdentityConnector;
use crate::helpers::JsonResponse;
use crate::middleware::authorization::{Denial, Policy, PolicyContext};
use crate::models;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse},
    web, Error, HttpMessage,
};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{Context, Poll},
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub struct GuardMiddleware<S> {
    pub service: Rc<RefCell<S>>,
    pub policies: Rc<Vec<Rc<dyn Policy>>>,
}

fn build_context(req: &ServiceRequest) -> Result<PolicyContext, Error> {
    let identity = req
        .extensions()
        .get::<Arc<models::Identity>>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("authorization reached without an authenticated identity");
            JsonResponse::<models::Identity>::build().unauthorized("Authentication required")
        })?;

    let connector = req
        .app_data::<web::Data<Arc<dyn IdentityConnector>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("identity connector is not configured");
            JsonResponse::<models::Identity>::build().internal_server_error("Internal error")
        })?;

    Ok(PolicyContext {
        identity,
        connector,
    })
}

impl<S, B> Service<ServiceRequest> for GuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if let Ok(mut service) = self.service.try_borrow_mut() {
            service.poll_ready(ctx)
        } else {
            Poll::Pending
        }
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let policies = Rc::clone(&self.policies);
        async move {
            let ctx = build_context(&req)?;

            for policy in policies.iter() {
                policy.authorize(&ctx).await.map_err(|denial| {
                    tracing::warn!(user_id = %ctx.identity.user_id, "authorization denied: {:?}", denial);
                    match denial {
                        Denial::Forbidden(msg) => {
                            JsonResponse::<models::Identity>::build().forbidden(msg)
                        }
                        Denial::Upstream(msg) => {
                            JsonResponse::<models::Identity>::build().internal_server_error(msg)
                        }
                    }
                })?;
            }

            let fut = service.borrow_mut().call(req);
            fut.await
        }
        .boxed_local()
    }
}
