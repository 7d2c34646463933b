//! Enquiry submission

use super::{message, require_authenticated};
use gallery_core::EnquiryRequest;

pub async fn submit(request: EnquiryRequest) -> Result<(), String> {
    let client = require_authenticated()?;
    client
        .submit_enquiry(&request)
        .await
        .map(|receipt| {
            tracing::info!(kind = %request.kind, receipt = ?receipt.id, "enquiry submitted");
        })
        .map_err(|e| message(&e))
}
