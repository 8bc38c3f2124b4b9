//! `ConversionReview` handling on top of the kind registry.

use kube::core::conversion::{ConversionRequest, ConversionResponse, ConversionReview};
use kube::core::response::Status;
use metrics::counter;
use tracing::{info, warn};

use crate::Registry;

impl Registry {
    /// Answer a `ConversionReview`. Any object failing conversion fails the whole response,
    /// with the conversion error as the status message and no converted objects.
    pub fn review(&self, review: ConversionReview) -> ConversionReview {
        let mut request = match ConversionRequest::from_review(review) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid conversion review");
                return ConversionResponse::invalid(Status::failure(&e.to_string(), "InvalidRequest")).into_review();
            }
        };
        let objects = std::mem::take(&mut request.objects);
        let desired = request.desired_api_version.clone();
        let uid = request.uid.clone();
        let count = objects.len();
        counter!("conversion_objects_total", count as u64);

        let response = ConversionResponse::for_request(request);
        match self.convert_objects(objects, &desired) {
            Ok(converted) => {
                info!(%uid, %desired, count, "conversion review succeeded");
                response.success(converted)
            }
            Err(e) => {
                counter!("conversion_failures_total", 1u64);
                warn!(%uid, %desired, error = %e, "conversion review failed");
                response.failure(Status::failure(&e.to_string(), "ConversionFailed"))
            }
        }
        .into_review()
    }
}
