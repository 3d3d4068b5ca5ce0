//! Scan and batch lookup endpoints

#[cfg(test)]
mod tests {
    use crate::common::{CodeRecordFactory, TestHarness};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use railqr::core::registry::CodeRegistry;
    use railqr::utils::error::ErrorResponse;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_scan_returns_registered_record() {
        let harness = TestHarness::new().await;
        let record = CodeRecordFactory::create(4, "batch-a");
        assert!(harness.state.storage.database.write(&record).await.is_written());
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/RC/202509-004")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["code"], "RC-202509-004");
        assert_eq!(body["data"]["partType"], "Rail Clip");
        assert_eq!(body["data"]["serialNo"], 4);
        assert_eq!(body["data"]["manufactureDate"], "2025-09-15");
        assert_eq!(body["data"]["expiryDate"], "2030-09-15");
        assert_eq!(body["data"]["warrantyYears"], 5);
        assert_eq!(body["data"]["batchId"], "batch-a");
        assert!(body["scannedAt"].is_string());
        assert!(body["data"].get("id").is_none());
    }

    #[actix_web::test]
    async fn test_scan_prefix_is_case_insensitive() {
        let harness = TestHarness::new().await;
        let record = CodeRecordFactory::create(12, "batch-b");
        harness.state.storage.database.write(&record).await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/rc/202509-012")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_scan_of_unregistered_code_echoes_code() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/ERC/202401-999")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "QR code not found");
        assert_eq!(body["scannedCode"], "ERC-202401-999");
        assert!(body["message"].as_str().unwrap().contains("ERC-202401-999"));
    }

    #[actix_web::test]
    async fn test_generated_url_resolves_through_scan_route() {
        let harness = TestHarness::new().await;
        let record = CodeRecordFactory::create(1, "batch-c");
        harness.state.storage.database.write(&record).await;
        let app = test::init_service(harness.app()).await;

        let path = record
            .url
            .strip_prefix("http://localhost:8000")
            .expect("default base url");
        let req = test::TestRequest::get().uri(path).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["code"], record.code);
    }

    #[actix_web::test]
    async fn test_unknown_batch_is_not_found() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/batch/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Not found");
        assert!(body.details.unwrap().contains("does-not-exist"));
    }

    #[actix_web::test]
    async fn test_batch_listing_is_ordered_by_serial() {
        let harness = TestHarness::new().await;
        for serial in [3, 1, 2] {
            let record = CodeRecordFactory::create(serial, "batch-d");
            harness.state.storage.database.write(&record).await;
        }
        harness
            .state
            .storage
            .database
            .write(&CodeRecordFactory::create(9, "batch-e"))
            .await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/batch/batch-d")
            .to_request();
        let records: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let serials: Vec<_> = records.iter().map(|r| r["serialNo"].as_u64().unwrap()).collect();
        assert_eq!(serials, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn test_part_types_listing() {
        let harness = TestHarness::new().await;
        let app = test::init_service(harness.app()).await;

        let req = test::TestRequest::get()
            .uri("/api/qr/part-types")
            .to_request();
        let types: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(types.len(), 5);
        assert_eq!(types[0]["partType"], "Rail Clip");
        assert_eq!(types[0]["prefix"], "RC");
    }
}
