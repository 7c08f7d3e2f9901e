use recipe_import::{extract_recipes_from_url, ImportError, RecipeImporter};

#[tokio::test]
async fn test_non_http_schemes_are_rejected_before_any_fetch() {
    for (url, scheme) in [
        ("file:///etc/passwd", "file"),
        ("javascript:alert(1)", "javascript"),
        ("data:text/html,<p>hi</p>", "data"),
        ("ftp://example.com/recipe", "ftp"),
    ] {
        let err = extract_recipes_from_url(url).await.unwrap_err();
        match err {
            ImportError::InvalidProtocol(rejected) => assert_eq!(rejected, scheme),
            other => panic!("expected InvalidProtocol for {}, got {:?}", url, other),
        }
    }
}

#[tokio::test]
async fn test_unparsable_url_is_rejected() {
    let err = extract_recipes_from_url("not a url at all").await.unwrap_err();
    assert!(matches!(err, ImportError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_non_success_status_is_a_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/gone")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let url = format!("{}/gone", server.url());
    let err = extract_recipes_from_url(&url).await.unwrap_err();
    assert!(matches!(err, ImportError::FetchFailure(_)));
}

#[tokio::test]
async fn test_builder_requires_a_url() {
    let err = RecipeImporter::builder().import().await.unwrap_err();
    assert!(matches!(err, ImportError::BuilderError(_)));
}
