mod common;

use anyhow::Result;
use common::test_service;
use expense_tracker::application::AppError;
use expense_tracker::domain::DEFAULT_CATEGORIES;

#[tokio::test]
async fn test_categories_are_read_verbatim() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // Not valid JSON: the document is passed through untouched.
    let content = "{ \"categories\": [\"food\", \"transit\"], trailing garbage\n\n";
    std::fs::write(service.categories_path(), content)?;

    let document = service.categories().await?;
    assert_eq!(document.content, content);
    assert_eq!(document.mime_type(), "application/json");

    Ok(())
}

#[tokio::test]
async fn test_categories_are_not_cached() -> Result<()> {
    let (service, _temp) = test_service().await?;

    std::fs::write(service.categories_path(), r#"["food"]"#)?;
    let first = service.categories().await?;

    std::fs::write(service.categories_path(), r#"["food", "travel"]"#)?;
    let second = service.categories().await?;

    assert_eq!(first.content, r#"["food"]"#);
    assert_eq!(second.content, r#"["food", "travel"]"#);

    Ok(())
}

#[tokio::test]
async fn test_missing_categories_is_an_error() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service.categories().await.unwrap_err();
    match err {
        AppError::CategoriesUnavailable { path, source } => {
            assert_eq!(path, service.categories_path());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_ensure_categories_never_overwrites() -> Result<()> {
    let (service, _temp) = test_service().await?;

    assert!(service.ensure_categories().await?);
    assert_eq!(service.categories().await?.content, DEFAULT_CATEGORIES);

    std::fs::write(service.categories_path(), r#"["edited"]"#)?;
    assert!(!service.ensure_categories().await?);
    assert_eq!(service.categories().await?.content, r#"["edited"]"#);

    Ok(())
}
