//! Batch generation over HTTP

#[cfg(test)]
mod tests {
    use crate::common::app::FailingRenderer;
    use crate::common::assertions::{assert_no_leftovers, snapshot, zip_entry_names};
    use crate::common::{BatchRequestFactory, TestHarness};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use railqr::utils::error::ErrorResponse;
    use serde_json::Value;
    use std::sync::Arc;

    fn header(resp: &actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>, name: &str) -> String {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_batch_returns_archive_of_every_code() {
        let harness = TestHarness::new().await;
        let before = snapshot(harness.uploads_dir());
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json("Rail Clip", 1, 5))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header(&resp, "content-type"), "application/zip");
        let disposition = header(&resp, "content-disposition");
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("QRCodes_Rail Clip_1-5_"));
        assert!(disposition.contains(".zip"));
        assert_eq!(header(&resp, "X-Batch-Rendered"), "5");
        assert_eq!(header(&resp, "X-Batch-Skipped"), "0");
        assert!(!header(&resp, "X-Batch-Id").is_empty());

        let body = test::read_body(resp).await;
        assert_eq!(
            zip_entry_names(&body),
            vec![
                "RC-202509-001.pdf",
                "RC-202509-002.pdf",
                "RC-202509-003.pdf",
                "RC-202509-004.pdf",
                "RC-202509-005.pdf",
            ]
        );

        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 5);
        assert_no_leftovers(harness.uploads_dir(), &before);
    }

    #[actix_web::test]
    async fn test_batch_records_share_batch_id() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json("Fish Plate", 10, 12))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let batch_id = header(&resp, "X-Batch-Id");
        let _ = test::read_body(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/qr/batch/{}", batch_id))
            .to_request();
        let records: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let codes: Vec<_> = records.iter().map(|r| r["code"].as_str().unwrap()).collect();
        assert_eq!(codes, vec!["FP-202509-010", "FP-202509-011", "FP-202509-012"]);
        assert!(records.iter().all(|r| r["batchId"] == batch_id.as_str()));
        assert_eq!(records[0]["url"], "http://localhost:8000/api/qr/FP/202509-010");
    }

    #[actix_web::test]
    async fn test_oversized_range_rejected_before_writes() {
        let harness = TestHarness::new().await;
        let before = snapshot(harness.uploads_dir());
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json("Rail Clip", 0, 1000))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Validation failed");
        assert!(body.details.unwrap().contains("1001"));

        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 0);
        assert_no_leftovers(harness.uploads_dir(), &before);
    }

    #[actix_web::test]
    async fn test_missing_fields_reported_together() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json_without(&["lotNo", "expiryDate"]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.details.as_deref(),
            Some("Missing required fields: lotNo, expiryDate")
        );
    }

    #[actix_web::test]
    async fn test_reversed_range_rejected() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json("Rail Clip", 9, 3))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_out_of_range_warranty_rejected_before_writes() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let mut body = BatchRequestFactory::json("Rail Clip", 1, 1);
        body["warrantyYears"] = serde_json::json!(3_000_000_000u64);
        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert!(error.details.unwrap().contains("warrantyYears"));
        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 0);

        let scan = test::TestRequest::get()
            .uri("/api/qr/RC/202509-001")
            .to_request();
        let resp = test::call_service(&app, scan).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_duplicate_submission_still_archives_documents() {
        let harness = TestHarness::new().await;
        let before = snapshot(harness.uploads_dir());
        let app = test::init_service(harness.app()).await;

        for attempt in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/qr/batch-generate")
                .set_json(BatchRequestFactory::json("Rail Pad", 1, 3))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "attempt {}", attempt);
            assert_eq!(header(&resp, "X-Batch-Rendered"), "3");
            let body = test::read_body(resp).await;
            assert_eq!(
                zip_entry_names(&body),
                vec!["RP-202509-001.pdf", "RP-202509-002.pdf", "RP-202509-003.pdf"]
            );
        }

        // second batch's writes were duplicates
        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 3);
        assert_no_leftovers(harness.uploads_dir(), &before);
    }

    #[actix_web::test]
    async fn test_all_renders_failing_leaves_no_files() {
        let harness = TestHarness::with_renderer(Arc::new(FailingRenderer)).await;
        let before = snapshot(harness.uploads_dir());
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/batch-generate")
            .set_json(BatchRequestFactory::json("Rail Clip", 1, 5))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(header(&resp, "content-type"), "application/json");
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No QR codes were generated");

        // registry writes happen before rendering
        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 5);
        assert_no_leftovers(harness.uploads_dir(), &before);
    }

    #[actix_web::test]
    async fn test_single_document_is_streamed_and_removed() {
        let harness = TestHarness::new().await;
        let before = snapshot(harness.uploads_dir());
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/generate-pdf")
            .set_json(BatchRequestFactory::single("Base Plate", 7))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header(&resp, "content-type"), "application/pdf");
        assert!(header(&resp, "content-disposition").contains("QR_BP-202509-007.pdf"));
        let body = test::read_body(resp).await;
        assert!(body.starts_with(b"%PDF"));

        assert_eq!(harness.state.storage.database.count_records().await.unwrap(), 0);
        assert_no_leftovers(harness.uploads_dir(), &before);
    }

    #[actix_web::test]
    async fn test_single_document_validation() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/qr/generate-pdf")
            .set_json(serde_json::json!({ "partType": "Rail Clip" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.details.as_deref(),
            Some("Missing required fields: manufactureDate, serialNo")
        );
    }
}
