//! Enquiry submission endpoints

use super::{AuthenticatedGalleryClient, ClientError};
use crate::types::EnquiryReceipt;
use gallery_core::{EnquiryKind, EnquiryRequest};
use reqwest::Method;

pub const fn enquiry_path(kind: EnquiryKind) -> &'static str {
    match kind {
        EnquiryKind::Artwork => "/artwork-enquiries",
        EnquiryKind::Masterclass => "/masterclass-enquiries",
        EnquiryKind::Service => "/service-enquiries",
    }
}

impl AuthenticatedGalleryClient {
    pub async fn submit_enquiry(
        &self,
        enquiry: &EnquiryRequest,
    ) -> Result<EnquiryReceipt, ClientError> {
        tracing::debug!(kind = %enquiry.kind, subject_id = %enquiry.subject_id, "submitting enquiry");
        let request = self
            .request(Method::POST, enquiry_path(enquiry.kind))
            .json(enquiry);
        self.execute(request).await
    }
}
